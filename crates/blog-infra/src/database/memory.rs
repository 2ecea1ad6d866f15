//! In-memory post repository - used when no document store is configured.

use async_trait::async_trait;
use tokio::sync::RwLock;

use blog_core::domain::{DateKey, Post, PostEdit, PostFilter};
use blog_core::error::RepoError;
use blog_core::ports::PostRepository;

/// In-memory post store with the same date-key uniqueness as the real one.
///
/// Note: Data is lost on process restart.
#[derive(Default)]
pub struct InMemoryPostRepository {
    posts: RwLock<Vec<Post>>,
}

impl InMemoryPostRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn same_date(a: &Post, b: &Post) -> bool {
        (a.year, a.month, a.day) == (b.year, b.month, b.day)
    }

    fn at_key(post: &Post, key: &DateKey) -> bool {
        (post.year, post.month, post.day) == (key.year(), key.month(), key.day())
    }
}

#[async_trait]
impl PostRepository for InMemoryPostRepository {
    async fn find(&self, filter: &PostFilter) -> Result<Vec<Post>, RepoError> {
        let posts = self.posts.read().await;
        Ok(posts.iter().filter(|p| filter.matches(p)).cloned().collect())
    }

    async fn insert(&self, post: Post) -> Result<(), RepoError> {
        let mut posts = self.posts.write().await;

        if posts.iter().any(|p| Self::same_date(p, &post)) {
            return Err(RepoError::Duplicate(format!(
                "duplicate key error: {{ year: {}, month: {}, day: {} }}",
                post.year, post.month, post.day
            )));
        }

        posts.push(post);
        Ok(())
    }

    async fn update(&self, key: &DateKey, edit: PostEdit) -> Result<(), RepoError> {
        let mut posts = self.posts.write().await;

        if let Some(post) = posts.iter_mut().find(|p| Self::at_key(p, key)) {
            post.title = edit.title;
            post.content = edit.content;
            post.updated_at = Some(edit.updated_at);
        }

        Ok(())
    }

    async fn delete(&self, key: &DateKey) -> Result<(), RepoError> {
        let mut posts = self.posts.write().await;
        posts.retain(|p| !Self::at_key(p, key));
        Ok(())
    }

    async fn ping(&self) -> Result<(), RepoError> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn key() -> DateKey {
        DateKey::new(2024, 3, 15).unwrap()
    }

    #[tokio::test]
    async fn test_duplicate_insert_keeps_one() {
        let repo = InMemoryPostRepository::new();
        repo.insert(Post::new("A", "B").with_date(2024, 3, 15))
            .await
            .unwrap();

        let err = repo
            .insert(Post::new("C", "D").with_date(2024, 3, 15))
            .await
            .unwrap_err();

        assert!(matches!(err, RepoError::Duplicate(_)));
        let posts = repo.find(&PostFilter::default()).await.unwrap();
        assert_eq!(posts.len(), 1);
        assert_eq!(posts[0].title, "A");
    }

    #[tokio::test]
    async fn test_update_missing_key_is_noop() {
        let repo = InMemoryPostRepository::new();
        let edit = PostEdit {
            title: "C".to_string(),
            content: "D".to_string(),
            updated_at: Utc.with_ymd_and_hms(2024, 3, 16, 0, 0, 0).unwrap(),
        };

        repo.update(&key(), edit).await.unwrap();

        assert!(repo.find(&PostFilter::default()).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_delete_twice() {
        let repo = InMemoryPostRepository::new();
        repo.insert(Post::new("A", "B").with_date(2024, 3, 15))
            .await
            .unwrap();

        repo.delete(&key()).await.unwrap();
        repo.delete(&key()).await.unwrap();

        assert!(repo.find(&PostFilter::default()).await.unwrap().is_empty());
    }
}
