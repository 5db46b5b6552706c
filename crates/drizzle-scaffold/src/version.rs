//! Advisory Next.js version compatibility check

use semver::Version;

/// Oldest Next.js major the generated templates are written against
/// (App Router layout, server actions).
const MIN_NEXT_MAJOR: u64 = 13;

/// Compare the target's `next` requirement against the supported minimum.
/// Returns a warning message when the pinned version is older; requirement
/// strings that don't parse produce no warning.
pub fn check_next_compatibility(requirement: &str) -> Option<String> {
    let version = match parse_requirement(requirement) {
        Some(v) => v,
        None => return None, // Can't compare, skip warning
    };

    if version.major < MIN_NEXT_MAJOR {
        Some(format!(
            "This project pins next {} but the generated code targets the App Router (next {}+).\n\
             The example page and server actions may need manual adjustment.",
            requirement, MIN_NEXT_MAJOR
        ))
    } else {
        None
    }
}

/// Parse a package.json version requirement, tolerating range prefixes
fn parse_requirement(requirement: &str) -> Option<Version> {
    let cleaned = requirement
        .trim()
        .trim_start_matches(['^', '~', '=', 'v', '>']);
    Version::parse(cleaned.trim()).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn old_major_warns() {
        let warning = check_next_compatibility("12.3.4");
        assert!(warning.is_some());
        assert!(warning.unwrap().contains("12.3.4"));
    }

    #[test]
    fn supported_major_is_silent() {
        assert!(check_next_compatibility("14.0.0").is_none());
        assert!(check_next_compatibility("^13.4.0").is_none());
    }

    #[test]
    fn range_prefixes_are_tolerated() {
        assert!(check_next_compatibility("~12.0.0").is_some());
        assert!(check_next_compatibility("^15.2.1").is_none());
    }

    #[test]
    fn unparsable_requirement_is_silent() {
        assert!(check_next_compatibility("latest").is_none());
        assert!(check_next_compatibility("workspace:*").is_none());
    }
}
