//! Data-access units owning one entity type's in-memory list.
//!
//! Every successful mutation is followed by a full re-fetch, so a read after
//! a write always reflects it. Store failures are logged, reported through
//! the [`Notifier`](crate::notify::Notifier) and never escape as panics.

mod posts;
mod users;

pub use posts::PostsCollection;
pub use users::UsersCollection;

#[cfg(test)]
pub(crate) mod testing {
    use crate::{
        errors::{StoreError, StoreResult},
        models::{PostInput, PostWithAuthor, User, UserInput},
        store::RemoteStore,
    };
    use async_trait::async_trait;
    use chrono::{DateTime, Utc};
    use uuid::Uuid;

    /// A store whose every call fails, as when the service is unreachable.
    pub struct FailingStore;

    fn unreachable_service<T>() -> StoreResult<T> {
        Err(StoreError::new("connection refused"))
    }

    #[async_trait]
    impl RemoteStore for FailingStore {
        async fn list_users(&self) -> StoreResult<Vec<User>> {
            unreachable_service()
        }

        async fn insert_user(&self, _: &UserInput) -> StoreResult<User> {
            unreachable_service()
        }

        async fn update_user(
            &self,
            _: Uuid,
            _: &UserInput,
            _: DateTime<Utc>,
        ) -> StoreResult<User> {
            unreachable_service()
        }

        async fn delete_user(&self, _: Uuid) -> StoreResult<()> {
            unreachable_service()
        }

        async fn list_posts(&self) -> StoreResult<Vec<PostWithAuthor>> {
            unreachable_service()
        }

        async fn insert_post(&self, _: &PostInput) -> StoreResult<PostWithAuthor> {
            unreachable_service()
        }

        async fn update_post(
            &self,
            _: Uuid,
            _: &PostInput,
            _: DateTime<Utc>,
        ) -> StoreResult<PostWithAuthor> {
            unreachable_service()
        }

        async fn set_post_published(&self, _: Uuid, _: bool, _: DateTime<Utc>) -> StoreResult<()> {
            unreachable_service()
        }

        async fn delete_post(&self, _: Uuid) -> StoreResult<()> {
            unreachable_service()
        }
    }
}
