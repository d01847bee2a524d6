//! Main CLI parser and top-level argument handling.
//!
//! This module defines the root CLI structure with global options.

use std::path::PathBuf;

use clap::Parser;

use crate::commands::Commands;

/// Command-line interface definition for the sprite cache tool.
#[derive(Debug, Parser)]
#[command(name = "spritedex")]
#[command(about = "Download, cache and reclaim collection sprites")]
#[command(version)]
pub struct Cli {
    /// Override the data directory for this invocation
    /// (falls back to SPRITEDEX_DATA_DIR, then the platform data directory)
    #[arg(long = "data-dir", global = true)]
    pub data_dir: Option<String>,

    /// Maximum concurrent downloads
    #[arg(short = 'j', long, global = true, env = "SPRITEDEX_CONCURRENCY")]
    pub concurrency: Option<usize>,

    /// Manifest file listing collections and their sprites
    #[arg(short = 'm', long, global = true, env = "SPRITEDEX_MANIFEST")]
    pub manifest: Option<PathBuf>,

    /// Enable verbose/debug output
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_parser_builds() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_global_args() {
        let cli = Cli::parse_from([
            "spritedex",
            "--verbose",
            "--data-dir",
            "/tmp/spritedex",
            "-j",
            "4",
            "list",
        ]);
        assert!(cli.verbose);
        assert_eq!(cli.data_dir, Some("/tmp/spritedex".to_string()));
        assert_eq!(cli.concurrency, Some(4));
        assert!(matches!(cli.command, Some(Commands::List)));
    }

    #[test]
    fn test_global_args_after_subcommand() {
        let cli = Cli::parse_from(["spritedex", "fetch", "firered", "-m", "games.json"]);
        assert_eq!(cli.manifest, Some(PathBuf::from("games.json")));
        match cli.command {
            Some(Commands::Fetch { collections, all }) => {
                assert_eq!(collections, vec!["firered".to_string()]);
                assert!(!all);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }
}
