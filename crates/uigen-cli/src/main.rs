//! `uigen`: generate a frontend scaffold from model definitions.
//!
//! # Architecture
//!
//! The CLI is organized around subcommands:
//! - `generate` - Write the frontend project described by a schema document
//! - `inspect` - Show the models and sections a schema document produces
//! - `completions` - Generate shell completions
//!
//! # Examples
//!
//! ```bash
//! # Generate into the destination configured by the schema
//! uigen generate schemas/message.toml
//!
//! # Override destination and start from an empty directory
//! uigen generate schemas/message.toml --dest web --clear
//!
//! # Show the Message model as JSON
//! uigen --format json inspect schemas/message.toml --class Message
//! ```

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use colored::Colorize;
use std::path::PathBuf;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};
use uigen_cli::commands;
use uigen_cli::commands::generate::Overrides;
use uigen_cli::exit_code_for;
use uigen_core::cli::{ExitCode, OutputFormat};

/// Generate a Vue frontend scaffold from model definitions.
#[derive(Parser, Debug)]
#[command(name = "uigen")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging (debug level)
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Output format (json, text, pretty)
    #[arg(long = "format", global = true, default_value = "pretty")]
    format: String,
}

/// Available CLI subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate the frontend project described by a schema document.
    ///
    /// Command-line options take precedence over the document's
    /// `[generator]` table.
    Generate {
        /// Schema document (TOML)
        schema: PathBuf,

        /// Destination directory
        #[arg(short, long)]
        dest: Option<PathBuf>,

        /// Empty the destination before generating (the directory itself is kept)
        #[arg(long)]
        clear: bool,

        /// Directory with a custom skeleton to use instead of the built-in one
        #[arg(long)]
        skeleton: Option<PathBuf>,

        /// Application name used in package.json and page titles
        #[arg(long = "app-name")]
        app_name: Option<String>,
    },

    /// Show the models and sections a schema document produces.
    Inspect {
        /// Schema document (TOML)
        schema: PathBuf,

        /// Inspect a single class
        #[arg(short, long)]
        class: Option<String>,
    },

    /// Generate shell completions.
    Completions {
        /// Target shell for completion generation
        #[arg(value_enum)]
        shell: Shell,
    },
}

fn main() {
    let cli = Cli::parse();

    let exit_code = match run(cli) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("{} {err:#}", "error:".red().bold());
            exit_code_for(&err)
        }
    };

    std::process::exit(exit_code.as_i32());
}

fn run(cli: Cli) -> Result<ExitCode> {
    init_logging(cli.verbose)?;
    let output_format: OutputFormat = cli.format.parse()?;
    execute_command(cli.command, output_format)
}

/// Initializes logging to stderr.
///
/// `--verbose` forces debug level; otherwise `RUST_LOG` applies, falling
/// back to info.
fn init_logging(verbose: bool) -> Result<()> {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init()
        .context("failed to initialize logging")
}

/// Routes a command to its handler.
fn execute_command(command: Commands, output_format: OutputFormat) -> Result<ExitCode> {
    match command {
        Commands::Generate {
            schema,
            dest,
            clear,
            skeleton,
            app_name,
        } => {
            let overrides = Overrides {
                dest,
                clear,
                skeleton,
                app_name,
            };
            commands::generate::run(&schema, &overrides, output_format)
        }
        Commands::Inspect { schema, class } => {
            commands::inspect::run(&schema, class.as_deref(), output_format)
        }
        Commands::Completions { shell } => {
            let mut cmd = Cli::command();
            Ok(commands::completions::run(shell, &mut cmd))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_cli_parsing_generate() {
        let cli = Cli::parse_from(["uigen", "generate", "schema.toml"]);
        if let Commands::Generate {
            schema,
            dest,
            clear,
            skeleton,
            app_name,
        } = cli.command
        {
            assert_eq!(schema, PathBuf::from("schema.toml"));
            assert_eq!(dest, None);
            assert!(!clear);
            assert_eq!(skeleton, None);
            assert_eq!(app_name, None);
        } else {
            panic!("Expected Generate command");
        }
    }

    #[test]
    fn test_cli_parsing_generate_overrides() {
        let cli = Cli::parse_from([
            "uigen",
            "generate",
            "schema.toml",
            "--dest",
            "web",
            "--clear",
            "--skeleton",
            "skel",
            "--app-name",
            "outbox",
        ]);
        if let Commands::Generate {
            dest,
            clear,
            skeleton,
            app_name,
            ..
        } = cli.command
        {
            assert_eq!(dest, Some(PathBuf::from("web")));
            assert!(clear);
            assert_eq!(skeleton, Some(PathBuf::from("skel")));
            assert_eq!(app_name.as_deref(), Some("outbox"));
        } else {
            panic!("Expected Generate command");
        }
    }

    #[test]
    fn test_cli_parsing_generate_requires_schema() {
        assert!(Cli::try_parse_from(["uigen", "generate"]).is_err());
    }

    #[test]
    fn test_cli_parsing_inspect_class() {
        let cli = Cli::parse_from(["uigen", "inspect", "schema.toml", "--class", "Message"]);
        if let Commands::Inspect { schema, class } = cli.command {
            assert_eq!(schema, PathBuf::from("schema.toml"));
            assert_eq!(class.as_deref(), Some("Message"));
        } else {
            panic!("Expected Inspect command");
        }
    }

    #[test]
    fn test_cli_verbose_flag() {
        let cli = Cli::parse_from(["uigen", "inspect", "schema.toml", "--verbose"]);
        assert!(cli.verbose);
    }

    #[test]
    fn test_cli_output_format_default() {
        let cli = Cli::parse_from(["uigen", "inspect", "schema.toml"]);
        assert_eq!(cli.format, "pretty");
    }

    #[test]
    fn test_cli_output_format_custom() {
        let cli = Cli::parse_from(["uigen", "--format", "json", "inspect", "schema.toml"]);
        assert_eq!(cli.format.parse::<OutputFormat>().unwrap(), OutputFormat::Json);
    }

    #[test]
    fn test_cli_parsing_completions_zsh() {
        let cli = Cli::parse_from(["uigen", "completions", "zsh"]);
        if let Commands::Completions { shell } = cli.command {
            assert_eq!(shell, Shell::Zsh);
        } else {
            panic!("Expected Completions command");
        }
    }

    #[test]
    fn test_invalid_format_is_rejected_before_running() {
        let cli = Cli::parse_from(["uigen", "--format", "yaml", "completions", "bash"]);
        let err = cli.format.parse::<OutputFormat>().unwrap_err();
        assert_eq!(ExitCode::for_error(&err), ExitCode::INVALID_INPUT);
    }
}
