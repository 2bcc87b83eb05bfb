//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use clap::{Args, Parser, Subcommand, ValueEnum};

use capreg_core::domain::LogLevel;

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

#[derive(Debug, Parser)]
#[command(
    name    = "capreg",
    bin_name = "capreg",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Capability registry: pick providers by name, not by code",
    long_about = "capreg wires providers (area formulas, record stores, log sinks, \
                  printers) into a registry from configuration and dispatches \
                  requests to them by discriminator.",
    after_help = "EXAMPLES:\n\
        \x20 capreg list\n\
        \x20 capreg area circle -d radius=7\n\
        \x20 capreg total-area --shape rectangle:width=5,height=10 --shape square:side=2\n\
        \x20 capreg log \"deploy finished\" --sink file\n\
        \x20 capreg completions bash > /usr/share/bash-completion/completions/capreg",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Show capabilities and the providers wired to them.
    #[command(
        visible_alias = "ls",
        after_help = "EXAMPLES:\n\
            \x20 capreg list\n\
            \x20 capreg list area\n\
            \x20 capreg list --format json"
    )]
    List(ListArgs),

    /// Compute the area of one shape.
    #[command(after_help = "EXAMPLES:\n\
            \x20 capreg area rectangle -d width=5 -d height=10\n\
            \x20 capreg area circle -d radius=7")]
    Area(AreaArgs),

    /// Sum the areas of several shapes.
    #[command(after_help = "EXAMPLES:\n\
            \x20 capreg total-area --shape rectangle:width=5,height=10 --shape circle:radius=1")]
    TotalArea(TotalAreaArgs),

    /// Persist a JSON record.
    #[command(after_help = "EXAMPLES:\n\
            \x20 capreg save user-1 '{\"name\":\"Ada\"}'\n\
            \x20 capreg save user-1 '{\"name\":\"Ada\"}' --backend memory")]
    Save(SaveArgs),

    /// Send a message to a log sink.
    #[command(after_help = "EXAMPLES:\n\
            \x20 capreg log \"backup complete\"\n\
            \x20 capreg log \"disk full\" --level error --sink file")]
    Log(LogArgs),

    /// Print a document.
    #[command(after_help = "EXAMPLES:\n\
            \x20 capreg print Memo \"Lunch at noon\"\n\
            \x20 capreg print Report \"$(cat report.txt)\" --device multifunction")]
    Print(PrintArgs),

    /// Scan pages into a document.
    #[command(after_help = "EXAMPLES:\n\
            \x20 capreg scan receipt --pages 2 --device multifunction")]
    Scan(ScanArgs),

    /// Write a default configuration file.
    #[command(after_help = "EXAMPLES:\n\
            \x20 capreg init\n\
            \x20 capreg init --force\n\
            \x20 capreg --config ./capreg.toml init")]
    Init(InitArgs),

    /// Generate shell completion scripts.
    #[command(after_help = "EXAMPLES:\n\
            \x20 capreg completions bash > ~/.local/share/bash-completion/completions/capreg\n\
            \x20 capreg completions zsh  > ~/.zfunc/_capreg\n\
            \x20 capreg completions fish > ~/.config/fish/completions/capreg.fish")]
    Completions(CompletionsArgs),

    /// Inspect the effective configuration.
    #[command(
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 capreg config get registry.mode\n\
            \x20 capreg config get wiring.area\n\
            \x20 capreg config list"
    )]
    Config(ConfigCommands),
}

// ── list ──────────────────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct ListArgs {
    /// Only show this capability.
    #[arg(value_name = "CAPABILITY")]
    pub capability: Option<String>,

    #[arg(
        long = "format",
        value_enum,
        default_value = "table",
        help = "Output format"
    )]
    pub format: ListFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ListFormat {
    /// Grouped by capability, with provider summaries.
    Table,
    /// One `capability/provider` per line.
    List,
    /// JSON array.
    Json,
}

// ── area / total-area ─────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct AreaArgs {
    /// Area provider to use, e.g. `rectangle`, `circle`.
    #[arg(value_name = "SHAPE")]
    pub shape: String,

    /// Measurement as `name=value`; repeat for each one.
    #[arg(
        short = 'd',
        long = "dim",
        value_name = "NAME=VALUE",
        help = "Measurement (repeatable)"
    )]
    pub dims: Vec<String>,
}

#[derive(Debug, Args)]
pub struct TotalAreaArgs {
    /// `SHAPE:name=value,name=value`; repeat for each shape.
    #[arg(
        short = 's',
        long = "shape",
        value_name = "SHAPE:DIMS",
        required = true,
        help = "Shape and measurements (repeatable)"
    )]
    pub shapes: Vec<String>,
}

// ── save / log ────────────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct SaveArgs {
    #[arg(value_name = "KEY")]
    pub key: String,

    /// JSON payload.
    #[arg(value_name = "JSON")]
    pub payload: String,

    /// Persistence provider; defaults to `defaults.backend`.
    #[arg(short = 'b', long = "backend", value_name = "NAME")]
    pub backend: Option<String>,
}

#[derive(Debug, Args)]
pub struct LogArgs {
    #[arg(value_name = "MESSAGE")]
    pub message: String,

    #[arg(short = 'l', long = "level", value_enum, default_value = "info")]
    pub level: LevelArg,

    /// Logging provider; defaults to `defaults.sink`.
    #[arg(short = 's', long = "sink", value_name = "NAME")]
    pub sink: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LevelArg {
    Debug,
    Info,
    #[value(alias = "warning")]
    Warn,
    Error,
}

impl From<LevelArg> for LogLevel {
    fn from(level: LevelArg) -> Self {
        match level {
            LevelArg::Debug => LogLevel::Debug,
            LevelArg::Info => LogLevel::Info,
            LevelArg::Warn => LogLevel::Warn,
            LevelArg::Error => LogLevel::Error,
        }
    }
}

// ── print / scan ──────────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct PrintArgs {
    #[arg(value_name = "TITLE")]
    pub title: String,

    #[arg(value_name = "BODY")]
    pub body: String,

    /// Printing provider; defaults to `defaults.device`.
    #[arg(short = 'D', long = "device", value_name = "NAME")]
    pub device: Option<String>,
}

#[derive(Debug, Args)]
pub struct ScanArgs {
    /// Title for the scanned document.
    #[arg(value_name = "LABEL")]
    pub label: String,

    #[arg(short = 'p', long = "pages", default_value_t = 1)]
    pub pages: u32,

    /// Scanning provider; defaults to `defaults.device`.
    #[arg(short = 'D', long = "device", value_name = "NAME")]
    pub device: Option<String>,
}

// ── init ──────────────────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct InitArgs {
    /// Overwrite an existing config file.
    #[arg(short = 'f', long = "force", help = "Overwrite existing configuration")]
    pub force: bool,
}

// ── completions ───────────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct CompletionsArgs {
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── config subcommands ────────────────────────────────────────────────────────

#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print one value of the effective configuration.
    Get {
        /// Dotted key path, e.g. `defaults.backend`.
        key: String,
    },
    /// Print the effective configuration as TOML.
    List,
    /// Print the path of the configuration file in use.
    Path,
}

// ── tests ─────────────────────────────────────────────────────────────────────
