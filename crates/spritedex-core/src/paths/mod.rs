//! Path utilities for the spritedex data directory.
//!
//! Resolution order for the data root:
//! 1. Explicit path provided by the caller (highest priority)
//! 2. `SPRITEDEX_DATA_DIR` environment variable
//! 3. Platform local-data directory joined with `spritedex`
//!
//! The engine owns `<data root>/sprites` exclusively.

mod error;
mod resolver;

#[cfg(test)]
mod test_utils;

pub use error::PathError;
pub use resolver::{
    DATA_DIR_ENV, DataRootResolution, DataRootSource, SPRITES_DIR_NAME, data_root,
    resolve_data_root, sprites_dir,
};
