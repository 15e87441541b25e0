//! Failure reporting capability injected into the composer.
//!
//! The composer absorbs remote failures instead of returning them;
//! whoever constructs it decides where they go.

use thiserror::Error;
use tracing::error;

use super::store::RemoteError;

/// Which store interaction was involved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncOp {
    Create,
    Update,
    Delete,
}

impl SyncOp {
    pub fn as_str(self) -> &'static str {
        match self {
            SyncOp::Create => "create",
            SyncOp::Update => "update",
            SyncOp::Delete => "delete",
        }
    }
}

/// A failure the composer absorbed instead of surfacing.
#[derive(Debug, Error)]
pub enum ComposerFailure {
    #[error("failed to fetch posts: {0}")]
    Fetch(RemoteError),
    #[error("failed to sync {} to the store: {source}", .op.as_str())]
    Sync { op: SyncOp, source: RemoteError },
    #[error("ignored {} for out-of-range index {index}", .op.as_str())]
    OutOfRange { op: SyncOp, index: usize },
}

/// Receives the failures the composer chose not to surface.
pub trait FailureReporter: Send + Sync {
    fn report(&self, failure: &ComposerFailure);
}

/// Production reporter: routes failures to the tracing subscriber.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingReporter;

impl FailureReporter for TracingReporter {
    fn report(&self, failure: &ComposerFailure) {
        error!(failure = %failure, "composer failure");
    }
}
