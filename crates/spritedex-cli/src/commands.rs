//! Subcommands.

use std::path::PathBuf;

use clap::Subcommand;

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Download every sprite of one or more manifest collections
    Fetch {
        /// Collection slugs from the manifest
        #[arg(required_unless_present = "all", conflicts_with = "all")]
        collections: Vec<String>,
        /// Fetch every collection in the manifest
        #[arg(long)]
        all: bool,
    },

    /// Fetch a single sprite, reusing the cache when possible
    Get {
        /// Collection slug from the manifest
        collection: String,
        /// Display name or asset id of the sprite
        name: String,
        /// Copy the sprite bytes to this file
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Download again even if the sprite is cached
        #[arg(long)]
        refresh: bool,
    },

    /// Remove a collection's cached sprites
    Delete {
        /// Collection slug
        collection: String,
    },

    /// Remove cached collections that are no longer tracked
    Cleanup {
        /// Additional collection slugs to keep
        #[arg(long = "keep", value_name = "SLUG")]
        keep: Vec<String>,
        /// Only keep the --keep slugs, ignoring the manifest
        #[arg(long, requires = "keep")]
        ignore_manifest: bool,
    },

    /// List cached collections
    List,

    /// Show resolved paths
    Paths,
}
