//! Bounded batch download loop and its progress stream.
//!
//! One [`BatchRun`] is spawned per `download_batch` call. It keeps at most
//! `max_concurrent` fetch tasks in a `JoinSet`, emits a [`ProgressSnapshot`]
//! for every completion, and closes the channel once every asset has been
//! processed exactly once.

use std::pin::Pin;
use std::task::{Context, Poll};

use tokio::sync::mpsc;
use tokio::task::{JoinError, JoinSet};
use tokio_stream::Stream;
use tokio_stream::wrappers::ReceiverStream;
use tokio_util::sync::CancellationToken;

use spritedex_core::{CacheKey, ProgressSnapshot, SpriteResult};

use super::worker::{FetchDeps, FetchJob, run_job};

/// Live progress of one batch download.
///
/// Yields one snapshot per finished asset and ends after the last one. An
/// empty batch yields a single `{0, 0, 0}` snapshot.
///
/// Dropping the stream or calling [`cancel`](Self::cancel) stops dispatch of
/// further assets. Fetches already running finish and write their files; their
/// results are discarded.
///
/// A cancelled stream still ends with `None`, but its last snapshot may have
/// `processed() < total`. Check [`is_cancelled`](Self::is_cancelled) once the
/// stream ends to tell a cut-short batch from a complete one.
#[derive(Debug)]
pub struct ProgressStream {
    inner: ReceiverStream<ProgressSnapshot>,
    cancel: CancellationToken,
}

impl ProgressStream {
    pub(crate) fn new(rx: mpsc::Receiver<ProgressSnapshot>, cancel: CancellationToken) -> Self {
        Self {
            inner: ReceiverStream::new(rx),
            cancel,
        }
    }

    /// Stop dispatching further assets.
    ///
    /// Snapshots already queued may still be yielded; no final snapshot with
    /// `completed + failed == total` follows.
    pub fn cancel(&self) {
        self.cancel.cancel();
    }

    /// Whether [`cancel`](Self::cancel) has been called.
    pub fn is_cancelled(&self) -> bool {
        self.cancel.is_cancelled()
    }
}

impl Stream for ProgressStream {
    type Item = ProgressSnapshot;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        Pin::new(&mut self.get_mut().inner).poll_next(cx)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl Drop for ProgressStream {
    fn drop(&mut self) {
        self.cancel.cancel();
    }
}

type JobOutcome = (CacheKey, SpriteResult<()>);

enum Event {
    Abandon,
    Joined(Option<Result<JobOutcome, JoinError>>),
}

/// State for one running batch.
pub(crate) struct BatchRun {
    pub collection: String,
    pub jobs: Vec<FetchJob>,
    pub deps: FetchDeps,
    pub max_concurrent: usize,
    pub tx: mpsc::Sender<ProgressSnapshot>,
    pub cancel: CancellationToken,
}

impl BatchRun {
    /// Drive the batch to completion.
    pub async fn run(self) {
        let Self {
            collection,
            jobs,
            deps,
            max_concurrent,
            tx,
            cancel,
        } = self;

        let total = jobs.len();
        let mut snapshot = ProgressSnapshot::started(total);
        if total == 0 {
            let _ = tx.send(snapshot).await;
            return;
        }

        tracing::debug!(
            target: "spritedex.batch",
            collection = %collection,
            total,
            max_concurrent,
            "Starting batch download"
        );

        let mut pending = jobs.into_iter();
        let mut running: JoinSet<JobOutcome> = JoinSet::new();
        let mut abandoned = false;

        loop {
            while !abandoned && running.len() < max_concurrent {
                let Some(job) = pending.next() else { break };
                let deps = deps.clone();
                running.spawn(async move {
                    let key = job.key.clone();
                    let result = run_job(job, &deps).await.map(|_| ());
                    (key, result)
                });
            }

            if running.is_empty() {
                break;
            }

            let event = tokio::select! {
                biased;
                () = cancel.cancelled(), if !abandoned => Event::Abandon,
                () = tx.closed(), if !abandoned => Event::Abandon,
                joined = running.join_next() => Event::Joined(joined),
            };

            let joined = match event {
                Event::Abandon => {
                    abandoned = true;
                    tracing::debug!(
                        target: "spritedex.batch",
                        collection = %collection,
                        in_flight = running.len(),
                        "Progress stream abandoned, draining in-flight fetches"
                    );
                    continue;
                }
                Event::Joined(None) => break,
                Event::Joined(Some(joined)) => joined,
            };

            match joined {
                Ok((_, Ok(()))) => snapshot.completed += 1,
                Ok((key, Err(e))) => {
                    snapshot.failed += 1;
                    tracing::warn!(
                        target: "spritedex.batch",
                        key = %key,
                        error = %e,
                        "Sprite download failed"
                    );
                }
                Err(e) => {
                    snapshot.failed += 1;
                    tracing::warn!(
                        target: "spritedex.batch",
                        collection = %collection,
                        error = %e,
                        "Sprite download task did not complete"
                    );
                }
            }

            if abandoned {
                continue;
            }

            tokio::select! {
                biased;
                () = cancel.cancelled() => abandoned = true,
                sent = tx.send(snapshot) => abandoned = sent.is_err(),
            }
        }

        tracing::debug!(
            target: "spritedex.batch",
            collection = %collection,
            completed = snapshot.completed,
            failed = snapshot.failed,
            total,
            abandoned,
            "Batch download finished"
        );
    }
}
