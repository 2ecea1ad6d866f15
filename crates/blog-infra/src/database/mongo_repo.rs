//! MongoDB repository implementation.

use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::bson::doc;
use mongodb::{Collection, Database};

use blog_core::domain::{DateKey, Post, PostEdit, PostFilter};
use blog_core::error::RepoError;
use blog_core::ports::PostRepository;

use super::connections::DatabaseConnections;
use super::document::{PostDocument, edit_document, filter_document, key_document};

/// Post repository backed by a MongoDB collection.
#[derive(Clone)]
pub struct MongoPostRepository {
    database: Database,
    posts: Collection<PostDocument>,
}

impl MongoPostRepository {
    pub fn new(connections: &DatabaseConnections) -> Self {
        Self {
            database: connections.database.clone(),
            posts: connections.posts.clone(),
        }
    }
}

fn store_error(err: mongodb::error::Error) -> RepoError {
    RepoError::from_store_message(err.to_string())
}

#[async_trait]
impl PostRepository for MongoPostRepository {
    async fn find(&self, filter: &PostFilter) -> Result<Vec<Post>, RepoError> {
        let query = filter_document(filter);
        tracing::debug!(filter = %query, "Finding posts");

        let documents: Vec<PostDocument> = self
            .posts
            .find(query)
            .await
            .map_err(store_error)?
            .try_collect()
            .await
            .map_err(store_error)?;

        documents.into_iter().map(Post::try_from).collect()
    }

    async fn insert(&self, post: Post) -> Result<(), RepoError> {
        self.posts
            .insert_one(PostDocument::from(post))
            .await
            .map_err(store_error)?;
        Ok(())
    }

    async fn update(&self, key: &DateKey, edit: PostEdit) -> Result<(), RepoError> {
        let result = self
            .posts
            .update_one(key_document(key), edit_document(edit))
            .await
            .map_err(store_error)?;

        if result.matched_count == 0 {
            tracing::debug!(date = %key, "No post to update");
        }
        Ok(())
    }

    async fn delete(&self, key: &DateKey) -> Result<(), RepoError> {
        let result = self
            .posts
            .delete_one(key_document(key))
            .await
            .map_err(store_error)?;

        if result.deleted_count == 0 {
            tracing::debug!(date = %key, "No post to delete");
        }
        Ok(())
    }

    async fn ping(&self) -> Result<(), RepoError> {
        self.database
            .run_command(doc! { "ping": 1 })
            .await
            .map_err(store_error)?;
        Ok(())
    }
}
