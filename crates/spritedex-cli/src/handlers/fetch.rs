//! Fetch command handler.
//!
//! Downloads whole collections with a progress bar per collection.

use anyhow::Result;
use tokio_stream::StreamExt;

use spritedex_core::{ProgressSnapshot, SpriteError};

use crate::bootstrap::CliContext;
use crate::error::CliError;
use crate::manifest::ManifestGame;
use crate::presentation::{batch_bar, batch_summary};

/// Execute the fetch command.
///
/// Individual sprite failures do not stop a batch; they are summarized at the
/// end and make the command exit non-zero. Ctrl-C cancels the running batch;
/// sprites already downloading still finish writing.
pub async fn execute(ctx: &CliContext, collections: &[String], all: bool) -> Result<()> {
    let manifest = ctx.manifest()?;
    let games: Vec<&ManifestGame> = if all {
        manifest.games.iter().collect()
    } else {
        collections
            .iter()
            .map(|slug| manifest.require_game(slug))
            .collect::<Result<_, _>>()?
    };

    let mut failed = 0;
    for game in games {
        let snapshot = download_game(ctx, game).await?;
        println!("{}", batch_summary(&game.name, &snapshot));
        failed += snapshot.failed;
    }

    if failed > 0 {
        return Err(CliError::Engine(format!(
            "{failed} sprite(s) failed to download (run with -v for details)"
        ))
        .into());
    }
    Ok(())
}

async fn download_game(ctx: &CliContext, game: &ManifestGame) -> Result<ProgressSnapshot, CliError> {
    let assets = game.assets();
    let bar = batch_bar(&game.name, assets.len());

    let mut stream = ctx
        .engine()
        .download_collection(&game.collection(), assets)
        .await?;

    let ctrl_c = tokio::signal::ctrl_c();
    tokio::pin!(ctrl_c);

    let mut last = ProgressSnapshot::default();
    loop {
        tokio::select! {
            next = stream.next() => match next {
                Some(snapshot) => {
                    bar.set_position(snapshot.processed() as u64);
                    last = snapshot;
                }
                None => break,
            },
            _ = &mut ctrl_c => {
                stream.cancel();
                bar.abandon_with_message(format!("{} (cancelled)", game.name));
                return Err(SpriteError::Cancelled.into());
            }
        }
    }

    bar.finish_and_clear();
    Ok(last)
}
