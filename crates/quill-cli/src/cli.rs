//! CLI argument definitions for quill.
//!
//! # Commands
//!
//! | Command | Description |
//! |---------|-------------|
//! | `quote` | Fetch one or more random quotes |
//! | `categories` | Refresh and list quote categories |
//! | `sources` | List remote sources and their category support |
//! | `prefs` | Show or change cosmetic preferences |
//!
//! # Global Options
//!
//! | Option | Default | Description |
//! |--------|---------|-------------|
//! | `--format` | `json` | Output format (json, table) |
//! | `--pretty` | `false` | Pretty-print JSON output |
//! | `--source` | `auto` | Restrict fetching to one source |
//! | `--offline` | `false` | Never touch the network |
//! | `--config` | platform config dir | Path to `config.toml` |
//! | `--verbose` | `false` | Debug logging on stderr |
//!
//! # Examples
//!
//! ```bash
//! quill quote
//! quill quote --category wisdom --count 3 --format table
//! quill quote --copy --share --pretty
//! quill prefs toggle-theme
//! ```

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use quill_core::ProviderId;

/// Random quotes from multiple sources with an offline fallback.
#[derive(Debug, Parser)]
#[command(
    name = "quill",
    author,
    version,
    about = "Random quotes from multiple sources with an offline fallback",
    long_about = "quill fetches random quotes from Quotable and type.fit, failing over \
between them and falling back to a built-in catalog when both are unreachable.\n\
\n\
Use 'quill <command> --help' for command-specific help."
)]
pub struct Cli {
    /// Output format for results.
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Json)]
    pub format: OutputFormat,

    /// Pretty-print JSON output with indentation.
    #[arg(long, global = true, default_value_t = false)]
    pub pretty: bool,

    /// Source selection for quote fetching.
    #[arg(long, global = true, value_enum, default_value_t = SourceSelector::Auto)]
    pub source: SourceSelector,

    /// Skip the network: quotes come from the offline catalog and
    /// categories from the built-in set.
    #[arg(long, global = true, default_value_t = false)]
    pub offline: bool,

    /// Configuration file (defaults to `<config_dir>/quill/config.toml`).
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Log attempts and failovers to stderr.
    #[arg(long, short, global = true, default_value_t = false)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text.
    Table,
    /// Single JSON envelope.
    Json,
}

/// Source selection strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SourceSelector {
    /// Quotable first, then type.fit, then the offline catalog.
    Auto,
    /// Only Quotable, then the offline catalog.
    Quotable,
    /// Only type.fit, then the offline catalog.
    Typefit,
}

impl SourceSelector {
    pub const fn provider(self) -> Option<ProviderId> {
        match self {
            Self::Auto => None,
            Self::Quotable => Some(ProviderId::Quotable),
            Self::Typefit => Some(ProviderId::Typefit),
        }
    }
}

/// Available CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Fetch random quote(s).
    ///
    /// # Examples
    ///
    ///   quill quote
    ///   quill quote --category life --count 2
    ///   quill quote --source typefit --share
    Quote(QuoteArgs),

    /// Refresh and list the available categories.
    Categories,

    /// List remote sources and how they filter by category.
    Sources,

    /// Show or change cosmetic preferences.
    Prefs(PrefsArgs),
}

/// Arguments for the `quote` command.
#[derive(Debug, Args)]
pub struct QuoteArgs {
    /// Category slug (see `quill categories`).
    #[arg(long, short)]
    pub category: Option<String>,

    /// Number of quotes to fetch in sequence.
    #[arg(
        long,
        short = 'n',
        default_value_t = 1,
        value_parser = clap::value_parser!(u32).range(1..=50)
    )]
    pub count: u32,

    /// Include clipboard text for each quote.
    #[arg(long, default_value_t = false)]
    pub copy: bool,

    /// Include a share link for each quote.
    #[arg(long, default_value_t = false)]
    pub share: bool,
}

/// Arguments for the `prefs` command group.
#[derive(Debug, Args)]
pub struct PrefsArgs {
    #[command(subcommand)]
    pub command: PrefsCommand,
}

/// Preference subcommands.
#[derive(Debug, Subcommand)]
pub enum PrefsCommand {
    /// Print stored preferences.
    Show,
    /// Set the theme (dark or light).
    Theme(ThemeArgs),
    /// Switch between dark and light.
    ToggleTheme,
    /// Set the background index.
    Background(BackgroundArgs),
    /// Advance to the next background, wrapping around.
    NextBackground,
}

#[derive(Debug, Args)]
pub struct ThemeArgs {
    /// `dark` or `light`.
    pub theme: String,
}

#[derive(Debug, Args)]
pub struct BackgroundArgs {
    pub index: u32,
}
