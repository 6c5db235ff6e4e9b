//! Clap derive structures for the `alarmdesk` CLI.
//!
//! Defines the complete command tree, global flags, and shared types.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

// ── Top-Level CLI ────────────────────────────────────────────────────

/// alarmdesk -- triage desk for security and safety alarms
#[derive(Debug, Parser)]
#[command(
    name = "alarmdesk",
    version,
    about = "Triage, assign and annotate monitoring alarms from the command line",
    long_about = "An operator desk for alarm monitoring.\n\n\
        Every invocation starts from the built-in demonstration dataset,\n\
        applies the requested change, and prints the result. Use `replay`\n\
        to apply several changes in one session.",
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
    /// Config file to use instead of the platform default
    #[arg(long, env = "ALARMDESK_CONFIG", global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Output format [default: from config, else table]
    #[arg(long, short = 'o', env = "ALARMDESK_OUTPUT", global = true)]
    pub output: Option<OutputFormat>,

    /// When to use color output [default: from config, else auto]
    #[arg(long, global = true)]
    pub color: Option<ColorMode>,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(long, short = 'v', action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-error output
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,

    /// Skip confirmation prompts
    #[arg(long, short = 'y', global = true)]
    pub yes: bool,
}

// ── Output & Color Enums ─────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Pretty table (default, interactive)
    Table,
    /// Pretty-printed JSON
    Json,
    /// Compact single-line JSON
    JsonCompact,
    /// YAML
    Yaml,
    /// Plain text, one value per line (scripting)
    Plain,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ColorMode {
    /// Auto-detect (color if terminal is interactive)
    Auto,
    /// Always emit color codes
    Always,
    /// Never emit color codes
    Never,
}

// ── Top-Level Command Enum ───────────────────────────────────────────

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Inspect and act on alarms
    #[command(alias = "a")]
    Alarms(AlarmsArgs),

    /// Inspect the operator (CSO) roster
    #[command(alias = "ops", alias = "csos")]
    Operators(OperatorsArgs),

    /// Show system statistics
    Stats(StatsArgs),

    /// Breakdown counters, stats and the most recent alarms
    #[command(alias = "dash")]
    Dashboard,

    /// Report disagreements between alarm assignments and operator rosters
    Audit,

    /// Show the notification feed
    Notifications(NotificationsArgs),

    /// Apply a JSON script of commands in order, then summarize the desk
    Replay(ReplayArgs),

    /// Manage CLI configuration
    Config(ConfigArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

// ── Alarms ───────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct AlarmsArgs {
    #[command(subcommand)]
    pub command: AlarmsCommand,
}

#[derive(Debug, Subcommand)]
pub enum AlarmsCommand {
    /// List alarms
    #[command(alias = "ls")]
    List {
        /// Quick filter
        #[arg(long, short = 'f', default_value = "all")]
        filter: AlarmFilterArg,

        /// Case-insensitive match on address, customer or alarm type
        #[arg(long, short = 's')]
        search: Option<String>,
    },

    /// Show one alarm with its notes and AI analysis
    Get {
        /// Alarm ID
        id: String,
    },

    /// Set an alarm's status (any status may follow any other)
    Status {
        /// Alarm ID
        id: String,
        /// New status
        status: AlarmStatusArg,
    },

    /// Assign an alarm to an operator
    Assign {
        /// Alarm ID
        id: String,
        /// Operator ID
        cso: String,
    },

    /// Add an operator note to an alarm
    Note {
        /// Alarm ID
        id: String,
        /// Note text (leading and trailing whitespace is dropped)
        content: String,
        /// Note author [default: desk.operator_name from config]
        #[arg(long)]
        author: Option<String>,
    },

    /// Ask the triage agent for a recommendation
    Recommend {
        /// Alarm ID
        id: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum AlarmFilterArg {
    All,
    New,
    Critical,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum AlarmStatusArg {
    New,
    Acknowledged,
    InProgress,
    Dispatched,
    Resolved,
    FalseAlarm,
}

// ── Operators ────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct OperatorsArgs {
    #[command(subcommand)]
    pub command: OperatorsCommand,
}

#[derive(Debug, Subcommand)]
pub enum OperatorsCommand {
    /// List operators
    #[command(alias = "ls")]
    List {
        /// Only operators that are available
        #[arg(long)]
        available: bool,
    },

    /// Show one operator with their performance grade and alarms
    Get {
        /// Operator ID
        id: String,
    },

    /// Roster totals
    Summary,
}

// ── Stats ────────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct StatsArgs {
    /// Derive stats from the current lists instead of showing the stored snapshot
    #[arg(long)]
    pub recompute: bool,
}

// ── Notifications ────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct NotificationsArgs {
    #[command(subcommand)]
    pub command: NotificationsCommand,
}

#[derive(Debug, Subcommand)]
pub enum NotificationsCommand {
    /// List notifications, newest first
    #[command(alias = "ls")]
    List {
        /// Only unread notifications
        #[arg(long)]
        unread: bool,
    },
}

// ── Replay ───────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct ReplayArgs {
    /// JSON file holding an array of commands (`-` reads stdin)
    pub file: PathBuf,
}

// ── Config ───────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Show the effective configuration (file, env and defaults merged)
    Show,

    /// Print the config file path
    Path,

    /// Write a config file populated with defaults
    Init,
}

// ── Completions ──────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    pub shell: clap_complete::Shell,
}
