use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// OrderTUI - terminal order form for music service packs
#[derive(Parser)]
#[command(name = "ordertui")]
#[command(about = "A terminal wizard for ordering music service packs")]
#[command(version)]
pub struct Cli {
    /// Path to an alternative catalog file (JSON). Defaults to the
    /// built-in music pack catalog.
    #[arg(long, global = true)]
    pub catalog: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Submit a draft order file without the TUI
    Submit {
        /// Path to the draft order file (JSON)
        order: PathBuf,

        /// Validate and print the totals without contacting any backend
        #[arg(long)]
        dry_run: bool,
    },
    /// Validate a draft order file
    Validate {
        /// Path to the draft order file (JSON)
        order: PathBuf,
    },
}

impl Cli {
    pub fn parse_args() -> Self {
        <Self as clap::Parser>::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_cli_no_args() {
        // Running with no args should succeed (defaults to TUI mode)
        let result = Cli::try_parse_from(["ordertui"]);
        assert!(result.is_ok());
        let cli = result.unwrap();
        assert!(cli.command.is_none());
        assert!(cli.catalog.is_none());
    }

    #[test]
    fn test_cli_submit_command() {
        let result = Cli::try_parse_from(["ordertui", "submit", "order.json", "--dry-run"]);
        assert!(result.is_ok());
        match result.unwrap().command {
            Some(Commands::Submit { order, dry_run }) => {
                assert_eq!(order.to_str().unwrap(), "order.json");
                assert!(dry_run);
            }
            _ => panic!("Expected Submit command"),
        }
    }

    #[test]
    fn test_cli_validate_command() {
        let result = Cli::try_parse_from(["ordertui", "validate", "order.json"]);
        assert!(result.is_ok());
        match result.unwrap().command {
            Some(Commands::Validate { order }) => {
                assert_eq!(order.to_str().unwrap(), "order.json");
            }
            _ => panic!("Expected Validate command"),
        }
    }

    #[test]
    fn test_cli_global_catalog_flag() {
        let result = Cli::try_parse_from(["ordertui", "--catalog", "variant.json"]);
        assert!(result.is_ok());
        let cli = result.unwrap();
        assert_eq!(cli.catalog.unwrap().to_str().unwrap(), "variant.json");
    }
}
