// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! # xtask
//!
//! Development tasks for the steelcalc workspace, run as `cargo xtask <task>`.
//!
//! Most tasks are fixed cargo invocations listed in [`Step`] tables. Two
//! tasks work on the persistence schema directly:
//!
//! - `migrate --database <path>` brings a `SQLite` file up to date
//! - `verify-migrations` applies every migration to an in-memory database,
//!   compares the schema with [`EXPECTED_COLUMNS`], then reverts them all

#![deny(
    clippy::pedantic,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]

use std::{
    collections::BTreeMap,
    path::{Path, PathBuf},
};

use cargo_metadata::MetadataCommand;
use clap::{Parser, Subcommand};
use clap_verbosity_flag::{InfoLevel, Verbosity};
use color_eyre::{
    Result,
    eyre::{Context, bail, ensure, eyre},
};
use diesel::sql_types::{Integer, Text};
use diesel::{Connection, QueryableByName, RunQueryDsl, SqliteConnection};
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};
use duct::{Expression, cmd};
use tracing_log::AsTrace;

const MIGRATIONS: EmbeddedMigrations = embed_migrations!("../crates/persistence/migrations");

/// The one table the migrations create.
const COLLECTIONS_TABLE: &str = "stored_collections";

/// Columns of [`COLLECTIONS_TABLE`] as `(name, declared type, primary key)`.
const EXPECTED_COLUMNS: [(&str, &str, bool); 3] = [
    ("collection_key", "TEXT", true),
    ("payload_json", "TEXT", false),
    ("updated_at", "TEXT", false),
];

/// A single external command.
#[derive(Debug, Clone, Copy)]
enum Step {
    /// `cargo <args>` on the default toolchain.
    Cargo(&'static [&'static str]),
    /// `cargo <args>` on nightly, for rustfmt options that are not stable.
    Nightly(&'static [&'static str]),
    /// Any other program on `PATH`.
    Tool(&'static str, &'static [&'static str]),
}

const BUILD: &[Step] = &[Step::Cargo(&["build", "--all-targets", "--all-features"])];

const CHECK: &[Step] = &[Step::Cargo(&["check", "--all-targets", "--all-features"])];

const LINT: &[Step] = &[
    Step::Cargo(&["clippy", "--all-targets", "--all-features", "--", "-D", "warnings"]),
    Step::Nightly(&["fmt", "--all", "--check"]),
    Step::Tool("typos", &[]),
];

const FIX: &[Step] = &[
    Step::Cargo(&[
        "clippy",
        "--all-targets",
        "--all-features",
        "--fix",
        "--allow-dirty",
        "--allow-staged",
    ]),
    Step::Nightly(&["fmt", "--all"]),
    Step::Tool("typos", &["-w"]),
];

// Doc tests go last; they are the slowest.
const TEST: &[Step] = &[
    Step::Cargo(&["test", "--all-targets", "--all-features"]),
    Step::Cargo(&["test", "--doc", "--all-features"]),
];

const COVERAGE: &[Step] = &[Step::Cargo(&[
    "llvm-cov",
    "--all-features",
    "--lcov",
    "--output-path",
    "target/lcov.info",
])];

const MACHETE: &[Step] = &[Step::Tool("cargo-machete", &[])];

impl Step {
    fn expression(self) -> Expression {
        match self {
            Self::Cargo(args) => cmd("cargo", args),
            Self::Nightly(args) => on_nightly(cmd("cargo", args)),
            Self::Tool(program, args) => cmd(program, args),
        }
    }
}

/// Pins `expression` to the nightly toolchain. CARGO is removed because it
/// points at the stable cargo that launched xtask.
fn on_nightly(expression: Expression) -> Expression {
    expression
        .env_remove("CARGO")
        .env("RUSTUP_TOOLCHAIN", "nightly")
}

fn run_steps(steps: &[Step]) -> Result<()> {
    steps
        .iter()
        .try_for_each(|step| run_traced(&step.expression()))
}

/// Runs `expression`, logging it first and again on failure so the failing
/// command is visible after long output.
fn run_traced(expression: &Expression) -> Result<()> {
    tracing::info!("running {expression:?}");
    expression
        .run()
        .map(drop)
        .wrap_err_with(|| format!("command failed: {expression:?}"))
}

fn main() -> Result<()> {
    color_eyre::install()?;
    let args: Args = Args::parse();
    tracing_subscriber::fmt()
        .with_max_level(args.verbosity.log_level_filter().as_trace())
        .without_time()
        .init();

    if let Err(err) = args.task.run() {
        tracing::error!("{err:#}");
        std::process::exit(1);
    }
    Ok(())
}

#[derive(Debug, Parser)]
#[command(bin_name = "cargo xtask", styles = clap_cargo::style::CLAP_STYLING)]
struct Args {
    #[command(subcommand)]
    task: Task,

    #[command(flatten)]
    verbosity: Verbosity<InfoLevel>,
}

#[derive(Clone, Debug, Subcommand)]
enum Task {
    /// Everything CI runs: lint, docs, unused dependencies, tests, schema
    Ci,

    /// Build every target
    #[command(visible_alias = "b")]
    Build,

    /// Type-check every target
    #[command(visible_alias = "c")]
    Check,

    /// Clippy, rustfmt and typos; `--fix` applies their fixes instead
    #[command(visible_alias = "l")]
    Lint {
        #[arg(long)]
        fix: bool,
    },

    /// Build rustdoc for each workspace package with warnings denied
    #[command(visible_alias = "d")]
    Docs,

    /// Look for unused dependencies
    #[command(visible_alias = "m")]
    Machete,

    /// Unit, integration and doc tests
    #[command(visible_alias = "t")]
    Test,

    /// Write an lcov report to `target/lcov.info`
    #[command(visible_alias = "cov")]
    Coverage,

    /// Apply pending migrations to a `SQLite` database file
    Migrate {
        /// Database file; created if missing
        #[arg(long)]
        database: PathBuf,
    },

    /// Check that migrations apply, produce the expected schema and revert
    #[command(visible_alias = "vm")]
    VerifyMigrations,
}

impl Task {
    fn run(self) -> Result<()> {
        match self {
            Self::Ci => {
                run_steps(LINT)?;
                docs()?;
                run_steps(MACHETE)?;
                run_steps(TEST)?;
                verify_migrations()
            }
            Self::Build => run_steps(BUILD),
            Self::Check => run_steps(CHECK),
            Self::Lint { fix: false } => run_steps(LINT),
            Self::Lint { fix: true } => run_steps(FIX),
            Self::Docs => docs(),
            Self::Machete => run_steps(MACHETE),
            Self::Test => run_steps(TEST),
            Self::Coverage => run_steps(COVERAGE),
            Self::Migrate { database } => migrate(&database),
            Self::VerifyMigrations => verify_migrations(),
        }
    }
}

fn docs() -> Result<()> {
    let metadata: cargo_metadata::Metadata = MetadataCommand::new()
        .exec()
        .wrap_err("reading cargo metadata")?;

    for package in metadata.workspace_default_packages() {
        let expression: Expression = on_nightly(cmd(
            "cargo",
            [
                "doc",
                "--no-deps",
                "--all-features",
                "--package",
                &package.name,
            ],
        ))
        .env("RUSTDOCFLAGS", "--cfg docsrs -D warnings");
        run_traced(&expression)?;
    }
    Ok(())
}

fn migrate(path: &Path) -> Result<()> {
    let url: &str = path
        .to_str()
        .ok_or_else(|| eyre!("database path is not valid UTF-8"))?;
    let mut conn: SqliteConnection = SqliteConnection::establish(url)
        .wrap_err_with(|| format!("opening {url}"))?;

    let applied = conn
        .run_pending_migrations(MIGRATIONS)
        .map_err(|e| eyre!("applying migrations to {url}: {e}"))?;
    tracing::info!("{url}: {} migration(s) applied", applied.len());
    Ok(())
}

#[derive(QueryableByName)]
struct TableRow {
    #[diesel(sql_type = Text)]
    name: String,
}

#[derive(QueryableByName)]
struct ColumnRow {
    #[diesel(sql_type = Text)]
    name: String,
    #[diesel(sql_type = Text)]
    r#type: String,
    #[diesel(sql_type = Integer)]
    pk: i32,
}

/// Names of user tables, without `SQLite` internals or diesel's ledger.
fn user_tables(conn: &mut SqliteConnection) -> Result<Vec<String>> {
    let rows: Vec<TableRow> = diesel::sql_query(
        "SELECT name FROM sqlite_master \
         WHERE type = 'table' \
           AND name NOT LIKE 'sqlite_%' \
           AND name != '__diesel_schema_migrations' \
         ORDER BY name",
    )
    .load(conn)
    .wrap_err("listing tables")?;
    Ok(rows.into_iter().map(|row| row.name).collect())
}

/// Columns of [`COLLECTIONS_TABLE`] keyed by name, as `(type, primary key)`.
fn collection_columns(conn: &mut SqliteConnection) -> Result<BTreeMap<String, (String, bool)>> {
    let rows: Vec<ColumnRow> = diesel::sql_query(format!("PRAGMA table_info({COLLECTIONS_TABLE})"))
        .load(conn)
        .wrap_err_with(|| format!("reading columns of {COLLECTIONS_TABLE}"))?;
    Ok(rows
        .into_iter()
        .map(|row| (row.name, (row.r#type.to_uppercase(), row.pk > 0)))
        .collect())
}

fn verify_migrations() -> Result<()> {
    let mut conn: SqliteConnection =
        SqliteConnection::establish(":memory:").wrap_err("opening in-memory database")?;

    conn.run_pending_migrations(MIGRATIONS)
        .map_err(|e| eyre!("applying migrations: {e}"))?;

    let tables: Vec<String> = user_tables(&mut conn)?;
    ensure!(
        tables == [COLLECTIONS_TABLE],
        "expected only {COLLECTIONS_TABLE} after migrating, found {tables:?}"
    );

    let columns: BTreeMap<String, (String, bool)> = collection_columns(&mut conn)?;
    for (name, expected_type, expected_pk) in EXPECTED_COLUMNS {
        let Some((actual_type, actual_pk)) = columns.get(name) else {
            bail!("{COLLECTIONS_TABLE}.{name} is missing");
        };
        ensure!(
            actual_type == expected_type && *actual_pk == expected_pk,
            "{COLLECTIONS_TABLE}.{name} is {actual_type} (pk: {actual_pk}), \
             expected {expected_type} (pk: {expected_pk})"
        );
    }
    ensure!(
        columns.len() == EXPECTED_COLUMNS.len(),
        "{COLLECTIONS_TABLE} has {} columns, expected {}",
        columns.len(),
        EXPECTED_COLUMNS.len()
    );

    conn.revert_all_migrations(MIGRATIONS)
        .map_err(|e| eyre!("reverting migrations: {e}"))?;
    let leftover: Vec<String> = user_tables(&mut conn)?;
    ensure!(leftover.is_empty(), "tables left after revert: {leftover:?}");

    tracing::info!("migrations apply and revert cleanly");
    Ok(())
}
