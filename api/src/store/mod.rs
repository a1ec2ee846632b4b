//! Boundary to the hosted relational service.
//!
//! The service exposes two resources, `profiles` and `posts`, related by
//! `posts.author_id -> profiles.id`. Reads embed the relation in both
//! directions and come back ordered by `created_at`, newest first. Integrity
//! rules (unique email, foreign keys, what happens to posts when their author
//! goes away) belong to the service's schema, not to the callers.

mod memory;
mod rest;

pub use memory::{AuthorDeletePolicy, MemoryStore};
pub use rest::RestStore;

use crate::{
    errors::StoreResult,
    models::{PostInput, PostWithAuthor, User, UserInput},
};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

#[async_trait]
pub trait RemoteStore: Send + Sync {
    /// Every profile with its posts, newest first.
    async fn list_users(&self) -> StoreResult<Vec<User>>;

    async fn insert_user(&self, input: &UserInput) -> StoreResult<User>;

    async fn update_user(
        &self,
        id: Uuid,
        input: &UserInput,
        updated_at: DateTime<Utc>,
    ) -> StoreResult<User>;

    /// Deleting an id that does not exist is not an error.
    async fn delete_user(&self, id: Uuid) -> StoreResult<()>;

    /// Every post with its author, newest first.
    async fn list_posts(&self) -> StoreResult<Vec<PostWithAuthor>>;

    async fn insert_post(&self, input: &PostInput) -> StoreResult<PostWithAuthor>;

    async fn update_post(
        &self,
        id: Uuid,
        input: &PostInput,
        updated_at: DateTime<Utc>,
    ) -> StoreResult<PostWithAuthor>;

    /// Partial update touching only `published` and `updated_at`.
    async fn set_post_published(
        &self,
        id: Uuid,
        published: bool,
        updated_at: DateTime<Utc>,
    ) -> StoreResult<()>;

    async fn delete_post(&self, id: Uuid) -> StoreResult<()>;
}
