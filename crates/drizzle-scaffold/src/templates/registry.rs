//! Static template registry
//!
//! Every generated file is one entry: a relative output path plus a pure
//! render function over [`DatabaseConfig`]. The set is fixed at build time;
//! there is no discovery mechanism. Only the Drizzle config and the env
//! example interpolate anything, the rest are constant.

use crate::config::DatabaseConfig;

/// One output file of the scaffold
pub struct TemplateFile {
    /// Path relative to the target project root
    pub path: &'static str,
    /// Pure content producer
    pub render: fn(&DatabaseConfig) -> String,
}

/// The full, fixed set of files the generator writes
pub fn registry() -> &'static [TemplateFile] {
    TEMPLATES
}

const TEMPLATES: &[TemplateFile] = &[
    TemplateFile {
        path: "drizzle.config.ts",
        render: render_drizzle_config,
    },
    TemplateFile {
        path: ".env.example",
        render: render_env_example,
    },
    TemplateFile {
        path: "src/env.ts",
        render: |_| ENV_TS.to_string(),
    },
    TemplateFile {
        path: "src/server/db/index.ts",
        render: |_| DB_INDEX_TS.to_string(),
    },
    TemplateFile {
        path: "src/server/db/seed.ts",
        render: |_| SEED_TS.to_string(),
    },
    TemplateFile {
        path: "src/server/db/schema/index.ts",
        render: |_| SCHEMA_INDEX_TS.to_string(),
    },
    TemplateFile {
        path: "src/server/db/schema/users.ts",
        render: |_| SCHEMA_USERS_TS.to_string(),
    },
    TemplateFile {
        path: "src/server/db/schema/posts.ts",
        render: |_| SCHEMA_POSTS_TS.to_string(),
    },
    TemplateFile {
        path: "src/server/db/migrations/README.md",
        render: |_| MIGRATIONS_README.to_string(),
    },
    TemplateFile {
        path: "src/server/actions/users.ts",
        render: |_| ACTIONS_USERS_TS.to_string(),
    },
    TemplateFile {
        path: "src/server/actions/posts.ts",
        render: |_| ACTIONS_POSTS_TS.to_string(),
    },
    TemplateFile {
        path: "src/app/examples/page.tsx",
        render: |_| EXAMPLES_PAGE_TSX.to_string(),
    },
];

/// Interpolation marker inside the two parameterized templates
const URL_MARKER: &str = "__DATABASE_URL__";

fn render_drizzle_config(config: &DatabaseConfig) -> String {
    DRIZZLE_CONFIG_TS.replace(URL_MARKER, config.url_or_default())
}

fn render_env_example(config: &DatabaseConfig) -> String {
    ENV_EXAMPLE.replace(URL_MARKER, config.url_or_default())
}

const DRIZZLE_CONFIG_TS: &str = r#"import "dotenv/config";
import { defineConfig } from "drizzle-kit";

export default defineConfig({
  schema: "./src/server/db/schema",
  out: "./src/server/db/migrations",
  dialect: "postgresql",
  dbCredentials: {
    url: process.env.DATABASE_URL ?? "__DATABASE_URL__",
  },
});
"#;

const ENV_EXAMPLE: &str = r#"# Copy this file to .env and adjust the values.
# Postgres connection string used by the app, drizzle-kit and the seed script.
DATABASE_URL="__DATABASE_URL__"
"#;

const ENV_TS: &str = r#"import { z } from "zod";

const schema = z.object({
  DATABASE_URL: z.string().url(),
  NODE_ENV: z
    .enum(["development", "test", "production"])
    .default("development"),
});

const parsed = schema.safeParse(process.env);

if (!parsed.success) {
  console.error(
    "Invalid environment variables:",
    parsed.error.flatten().fieldErrors,
  );
  throw new Error("Invalid environment variables");
}

export const env = parsed.data;
"#;

const DB_INDEX_TS: &str = r#"import { drizzle } from "drizzle-orm/postgres-js";
import postgres from "postgres";

import { env } from "@/env";
import * as schema from "./schema";

const client = postgres(env.DATABASE_URL);

export const db = drizzle(client, { schema });
"#;

const SEED_TS: &str = r#"import "dotenv/config";

import { db } from "./index";
import { posts, users } from "./schema";

async function main() {
  // Clear example rows so re-seeding starts fresh. On a brand-new database
  // the tables don't exist yet; Postgres reports that as 42P01
  // (undefined_table), which is the only error we tolerate here.
  try {
    await db.delete(posts);
    await db.delete(users);
  } catch (error) {
    if ((error as { code?: string }).code !== "42P01") {
      throw error;
    }
    console.log("Tables not created yet, run `npm run db:push` first.");
  }

  const [alice, bob] = await db
    .insert(users)
    .values([
      { name: "Alice Example", email: "alice@example.com" },
      { name: "Bob Example", email: "bob@example.com" },
    ])
    .returning();

  await db.insert(posts).values([
    {
      title: "Hello Drizzle",
      content: "This post was inserted by the seed script.",
      authorId: alice.id,
    },
    {
      title: "Second post",
      content: "Edit src/server/db/seed.ts to change the seed data.",
      authorId: bob.id,
    },
  ]);

  console.log("Seeding complete.");
  process.exit(0);
}

main().catch((error) => {
  console.error("Seeding failed:", error);
  process.exit(1);
});
"#;

const SCHEMA_INDEX_TS: &str = r#"export * from "./users";
export * from "./posts";
"#;

const SCHEMA_USERS_TS: &str = r#"import { pgTable, serial, text, timestamp } from "drizzle-orm/pg-core";

export const users = pgTable("users", {
  id: serial("id").primaryKey(),
  name: text("name").notNull(),
  email: text("email").notNull().unique(),
  createdAt: timestamp("created_at").defaultNow().notNull(),
});
"#;

const SCHEMA_POSTS_TS: &str = r#"import {
  integer,
  pgTable,
  serial,
  text,
  timestamp,
} from "drizzle-orm/pg-core";

import { users } from "./users";

export const posts = pgTable("posts", {
  id: serial("id").primaryKey(),
  title: text("title").notNull(),
  content: text("content"),
  authorId: integer("author_id")
    .references(() => users.id)
    .notNull(),
  createdAt: timestamp("created_at").defaultNow().notNull(),
});
"#;

const MIGRATIONS_README: &str = r#"# Migrations

Generated SQL migrations for this project live in this directory.

- `npm run db:generate` diffs the schema under `src/server/db/schema` against
  the previous snapshot and writes a new migration here.
- `npm run db:push` applies the current schema directly to the database
  (no migration file) - convenient during prototyping.
- `npm run db:studio` opens Drizzle Studio to browse the database.
- `npm run db:seed` inserts the example rows from `src/server/db/seed.ts`.

Commit generated migrations together with the schema change that produced
them.
"#;

const ACTIONS_USERS_TS: &str = r#""use server";

import { eq } from "drizzle-orm";

import { db } from "@/server/db";
import { users } from "@/server/db/schema";

export async function getUsers() {
  return db.select().from(users).orderBy(users.id);
}

export async function createUser(name: string, email: string) {
  const [user] = await db.insert(users).values({ name, email }).returning();
  return user;
}

export async function deleteUser(id: number) {
  await db.delete(users).where(eq(users.id, id));
}
"#;

const ACTIONS_POSTS_TS: &str = r#""use server";

import { desc, eq } from "drizzle-orm";

import { db } from "@/server/db";
import { posts } from "@/server/db/schema";

export async function getPosts() {
  return db.select().from(posts).orderBy(desc(posts.createdAt));
}

export async function createPost(title: string, authorId: number, content?: string) {
  const [post] = await db
    .insert(posts)
    .values({ title, content, authorId })
    .returning();
  return post;
}

export async function deletePost(id: number) {
  await db.delete(posts).where(eq(posts.id, id));
}
"#;

const EXAMPLES_PAGE_TSX: &str = r#"import { getPosts } from "@/server/actions/posts";
import { getUsers } from "@/server/actions/users";

export const dynamic = "force-dynamic";

export default async function ExamplesPage() {
  const [users, posts] = await Promise.all([getUsers(), getPosts()]);

  return (
    <main style={{ padding: "2rem", fontFamily: "sans-serif" }}>
      <h1>Drizzle examples</h1>
      <p>
        Data below comes straight from Postgres via the generated server
        actions. Run <code>npm run db:push</code> and{" "}
        <code>npm run db:seed</code> if it is empty.
      </p>

      <h2>Users ({users.length})</h2>
      <ul>
        {users.map((user) => (
          <li key={user.id}>
            {user.name} &lt;{user.email}&gt;
          </li>
        ))}
      </ul>

      <h2>Posts ({posts.length})</h2>
      <ul>
        {posts.map((post) => (
          <li key={post.id}>
            <strong>{post.title}</strong>
            {post.content ? <p>{post.content}</p> : null}
          </li>
        ))}
      </ul>
    </main>
  );
}
"#;

#[cfg(test)]
mod tests {
    use super::*;

    fn find(path: &str) -> &'static TemplateFile {
        registry()
            .iter()
            .find(|t| t.path == path)
            .unwrap_or_else(|| panic!("no template for {path}"))
    }

    #[test]
    fn registry_covers_all_output_paths() {
        let paths: Vec<&str> = registry().iter().map(|t| t.path).collect();
        assert_eq!(
            paths,
            [
                "drizzle.config.ts",
                ".env.example",
                "src/env.ts",
                "src/server/db/index.ts",
                "src/server/db/seed.ts",
                "src/server/db/schema/index.ts",
                "src/server/db/schema/users.ts",
                "src/server/db/schema/posts.ts",
                "src/server/db/migrations/README.md",
                "src/server/actions/users.ts",
                "src/server/actions/posts.ts",
                "src/app/examples/page.tsx",
            ]
        );
    }

    #[test]
    fn rendering_is_deterministic() {
        let config = DatabaseConfig {
            database_url: Some("postgres://a:b@c:5432/d".to_string()),
        };
        for template in registry() {
            assert_eq!(
                (template.render)(&config),
                (template.render)(&config),
                "{} not deterministic",
                template.path
            );
        }
    }

    #[test]
    fn drizzle_config_interpolates_connection_string() {
        let config = DatabaseConfig {
            database_url: Some("postgres://me:pw@db:5432/app".to_string()),
        };
        let content = (find("drizzle.config.ts").render)(&config);
        assert!(content.contains(r#"?? "postgres://me:pw@db:5432/app""#));
        assert!(!content.contains("__DATABASE_URL__"));
    }

    #[test]
    fn env_example_falls_back_to_placeholder() {
        let content = (find(".env.example").render)(&DatabaseConfig::default());
        assert!(content.contains(crate::config::DEFAULT_DATABASE_URL));
        assert!(!content.contains("__DATABASE_URL__"));
    }

    #[test]
    fn constant_templates_ignore_config() {
        let with_url = DatabaseConfig {
            database_url: Some("postgres://x@y/z".to_string()),
        };
        let content = (find("src/server/db/index.ts").render)(&with_url);
        assert_eq!(
            content,
            (find("src/server/db/index.ts").render)(&DatabaseConfig::default())
        );
        assert!(content.contains("drizzle-orm/postgres-js"));
    }

    #[test]
    fn seed_tolerates_only_undefined_table() {
        let content = (find("src/server/db/seed.ts").render)(&DatabaseConfig::default());
        assert!(content.contains("42P01"));
        assert!(content.contains("throw error"));
    }

    #[test]
    fn no_marker_left_in_any_rendered_file() {
        let config = DatabaseConfig::default();
        for template in registry() {
            assert!(
                !(template.render)(&config).contains("__DATABASE_URL__"),
                "{} leaks the marker",
                template.path
            );
        }
    }
}
