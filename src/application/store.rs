//! Collaborator traits for the remote posts collection.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::posts::Post;

#[derive(Debug, Error)]
pub enum RemoteError {
    #[error("transport error: {0}")]
    Transport(String),
    #[error("server returned status {status}: {body}")]
    Status { status: u16, body: String },
    #[error("failed to decode response: {0}")]
    Decode(String),
    #[error("invalid payload: {0}")]
    InvalidPayload(String),
}

impl RemoteError {
    pub fn from_transport(err: impl std::fmt::Display) -> Self {
        Self::Transport(err.to_string())
    }
}

/// Read side of the remote boundary: produces the full collection.
#[async_trait]
pub trait PostFeed: Send + Sync {
    async fn fetch_all(&self) -> Result<Vec<Post>, RemoteError>;
}

/// Write side of the remote boundary. Entries are addressed by their
/// position in the cached list; the canonical shape carries no server
/// id.
#[async_trait]
pub trait PostStore: Send + Sync {
    async fn create(&self, post: &Post) -> Result<(), RemoteError>;
    async fn update(&self, index: usize, post: &Post) -> Result<(), RemoteError>;
    async fn delete(&self, index: usize) -> Result<(), RemoteError>;
}

/// Default store binding: add/edit/delete stay local to the cache and
/// never reach the remote collection. Swap in an HTTP-backed store to
/// change that.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalOnlyStore;

#[async_trait]
impl PostStore for LocalOnlyStore {
    async fn create(&self, _post: &Post) -> Result<(), RemoteError> {
        Ok(())
    }

    async fn update(&self, _index: usize, _post: &Post) -> Result<(), RemoteError> {
        Ok(())
    }

    async fn delete(&self, _index: usize) -> Result<(), RemoteError> {
        Ok(())
    }
}
