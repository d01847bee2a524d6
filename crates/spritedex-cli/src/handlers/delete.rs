//! Delete command handler.

use anyhow::Result;

use crate::bootstrap::CliContext;
use crate::error::CliError;

/// Execute the delete command. Deleting an absent collection succeeds.
pub async fn execute(ctx: &CliContext, collection: &str) -> Result<()> {
    ctx.engine()
        .delete_collection(collection)
        .await
        .map_err(CliError::from)?;
    println!("Deleted collection '{collection}'");
    Ok(())
}
