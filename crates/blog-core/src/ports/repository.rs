use async_trait::async_trait;

use crate::domain::{DateKey, Post, PostEdit, PostFilter};
use crate::error::RepoError;

/// Post repository - the storage gateway used by the HTTP layer.
///
/// Implementations must be safe for concurrent use; callers share one
/// instance across all in-flight requests and add no locking of their own.
#[async_trait]
pub trait PostRepository: Send + Sync {
    /// All posts matching the filter, in store-native order.
    async fn find(&self, filter: &PostFilter) -> Result<Vec<Post>, RepoError>;

    /// Insert a post. Fails with `RepoError::Duplicate` if its date key is taken.
    async fn insert(&self, post: Post) -> Result<(), RepoError>;

    /// Replace title and content of the post at `key`.
    /// A key with no stored post is not an error.
    async fn update(&self, key: &DateKey, edit: PostEdit) -> Result<(), RepoError>;

    /// Remove the post at `key`. A key with no stored post is not an error.
    async fn delete(&self, key: &DateKey) -> Result<(), RepoError>;

    /// Liveness check against the store.
    async fn ping(&self) -> Result<(), RepoError>;
}
