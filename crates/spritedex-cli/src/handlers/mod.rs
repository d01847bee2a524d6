//! Command handlers.
//!
//! Handlers follow one pattern:
//! - Signature: `pub async fn execute(ctx: &CliContext, ...) -> Result<()>`
//! - Thin wrappers that:
//!   1. Resolve CLI input against the manifest
//!   2. Call the sprite engine
//!   3. Format output for the terminal
//!
//! Errors are raised as `CliError` so `main` can pick the exit code.

pub mod cleanup;
pub mod delete;
pub mod fetch;
pub mod get;
pub mod list;
pub mod paths;
