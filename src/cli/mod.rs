//! Command-line interface for claude-ext.
//!
//! # Available Commands
//!
//! - `mcp` - Choose which MCP servers are active in Claude
//!
//! Running `claude-ext` without a command prints the help text.
//!
//! # Global Options
//!
//! - `--verbose` - Enable debug logging
//! - `--quiet` - Only log errors
//!
//! `RUST_LOG` takes precedence over both flags when set.
//!
//! # Example
//!
//! ```bash
//! claude-ext mcp
//! claude-ext --verbose mcp
//! ```

pub mod mcp;
pub mod prompt;

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

/// Log level used when neither `--verbose`, `--quiet` nor `RUST_LOG` is given.
const DEFAULT_LOG_LEVEL: &str = "warn";

/// Runtime configuration derived from the global flags.
///
/// Kept separate from [`Cli`] so tests and programmatic callers can build it
/// directly.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CliConfig {
    /// Log filter directive, e.g. `"debug"`. `None` means the default level.
    pub log_level: Option<String>,
}

impl CliConfig {
    /// Create a configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Install the global tracing subscriber, writing to stderr.
    ///
    /// `RUST_LOG` overrides the configured level. Calling this more than once
    /// is harmless; later calls are ignored.
    pub fn init_logging(&self) {
        let filter = if std::env::var("RUST_LOG").is_ok() {
            EnvFilter::from_default_env()
        } else {
            EnvFilter::new(self.log_level.as_deref().unwrap_or(DEFAULT_LOG_LEVEL))
        };

        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .without_time()
            .try_init();
    }
}

/// Claude MCP Server Manager.
#[derive(Parser)]
#[command(
    name = "claude-ext",
    about = "Claude MCP Server Manager",
    version,
    long_about = "Toggle which MCP servers Claude loads. Disabled servers are kept in ~/.claude-ext.json so they can be re-enabled later."
)]
pub struct Cli {
    /// The subcommand to execute. Prints help when omitted.
    #[command(subcommand)]
    command: Option<Commands>,

    /// Enable verbose output (debug logging)
    #[arg(short, long, global = true, conflicts_with = "quiet")]
    verbose: bool,

    /// Only log errors
    #[arg(short, long, global = true)]
    quiet: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Select which MCP servers should be active in Claude.
    ///
    /// Servers you uncheck are moved to ~/.claude-ext.json; servers you
    /// check are moved into Claude's config.
    Mcp(mcp::McpCommand),
}

impl Cli {
    /// Set up logging and run the selected command.
    pub fn execute(self) -> Result<()> {
        let config = self.build_config();
        self.execute_with_config(config)
    }

    /// Translate the global flags into a [`CliConfig`].
    ///
    /// ```rust
    /// use claude_ext::cli::Cli;
    /// use clap::Parser;
    ///
    /// let cli = Cli::parse_from(["claude-ext", "--verbose", "mcp"]);
    /// assert_eq!(cli.build_config().log_level.as_deref(), Some("debug"));
    /// ```
    #[must_use]
    pub fn build_config(&self) -> CliConfig {
        let log_level = if self.verbose {
            Some("debug".to_string())
        } else if self.quiet {
            Some("error".to_string())
        } else {
            None
        };

        CliConfig {
            log_level,
        }
    }

    /// Run the selected command with an explicit configuration.
    pub fn execute_with_config(self, config: CliConfig) -> Result<()> {
        config.init_logging();

        match self.command {
            Some(Commands::Mcp(cmd)) => cmd.execute(),
            None => {
                Self::command().print_help()?;
                Ok(())
            }
        }
    }
}
