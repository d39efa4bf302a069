//! Clap derive structures for the `alertops` CLI.

use std::path::PathBuf;

use clap::{ArgGroup, Args, Parser, Subcommand, ValueEnum};

// ── Top-Level CLI ────────────────────────────────────────────────────

/// alertops -- drive AlertOps resources from JSON state files
#[derive(Debug, Parser)]
#[command(
    name = "alertops",
    version,
    about = "Manage AlertOps incident-management resources from the command line",
    long_about = "Create, read, update, delete and import AlertOps users, groups,\n\
        schedules, workflows, escalation policies and inbound integrations.\n\n\
        Each resource instance lives in a JSON state file that is rewritten\n\
        in place with the canonical tree after every operation.",
    propagate_version = true,
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalOpts,

    #[command(subcommand)]
    pub command: Command,
}

// ── Global Options ───────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct GlobalOpts {
    /// AlertOps API key (overrides config file and ALERTOPS_API_KEY)
    #[arg(long, global = true)]
    pub api_key: Option<String>,

    /// API base URL (overrides config file and ALERTOPS_BASE_URL)
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    /// Config file to read instead of the platform default
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(long, short = 'o', default_value = "json", global = true)]
    pub output: OutputFormat,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(long, short = 'v', action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-error output
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    /// Pretty-printed JSON
    Json,
    /// Compact single-line JSON
    JsonCompact,
    /// YAML
    Yaml,
}

// ── Commands ─────────────────────────────────────────────────────────

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List the resource types this provider manages
    #[command(alias = "types")]
    Resources,

    /// Create the remote record described by a state file
    Create(StateArgs),

    /// Refresh a state file from the remote record
    #[command(alias = "refresh")]
    Read(StateArgs),

    /// Push a state file's attributes to its remote record
    Update(StateArgs),

    /// Delete the remote record behind a state file
    #[command(alias = "rm")]
    Delete(StateArgs),

    /// Adopt an existing remote record into a new state file
    Import(ImportArgs),

    /// Look up an existing user by id or user name
    #[command(alias = "u")]
    User(UserArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

#[derive(Debug, Args)]
pub struct StateArgs {
    /// Resource type, e.g. alertops_user
    pub resource_type: String,

    /// JSON state file, rewritten in place
    pub state: PathBuf,
}

#[derive(Debug, Args)]
pub struct ImportArgs {
    /// Resource type, e.g. alertops_schedule
    pub resource_type: String,

    /// Remote identifier (`<group>/<id>` for schedules)
    pub id: String,

    /// Write the imported state here instead of stdout
    #[arg(long, value_name = "FILE")]
    pub out: Option<PathBuf>,
}

#[derive(Debug, Args)]
#[command(group(ArgGroup::new("criteria").required(true).args(["id", "name"])))]
pub struct UserArgs {
    /// Numeric user id
    #[arg(long)]
    pub id: Option<i64>,

    /// Exact user name
    #[arg(long)]
    pub name: Option<String>,
}

#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell
    pub shell: clap_complete::Shell,
}
