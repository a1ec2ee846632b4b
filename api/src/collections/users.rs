use crate::{
    errors::StoreResult,
    models::{User, UserInput},
    notify::{Notification, Notifier},
    store::RemoteStore,
};
use chrono::Utc;
use std::sync::{
    Arc,
    atomic::{AtomicBool, Ordering},
};
use tokio::sync::RwLock;
use tracing::{error, info};
use uuid::Uuid;

pub struct UsersCollection {
    store: Arc<dyn RemoteStore>,
    notifier: Notifier,
    users: RwLock<Vec<User>>,
    loading: AtomicBool,
}

impl UsersCollection {
    /// Starts empty and loading until the first [`refresh`](Self::refresh)
    /// completes.
    pub fn new(store: Arc<dyn RemoteStore>, notifier: Notifier) -> Self {
        Self {
            store,
            notifier,
            users: RwLock::new(Vec::new()),
            loading: AtomicBool::new(true),
        }
    }

    /// Users as of the last successful fetch, newest first.
    pub async fn users(&self) -> Vec<User> {
        self.users.read().await.clone()
    }

    pub async fn find(&self, id: Uuid) -> Option<User> {
        self.users.read().await.iter().find(|u| u.id == id).cloned()
    }

    pub fn is_loading(&self) -> bool {
        self.loading.load(Ordering::Acquire)
    }

    /// Replace the list with a fresh fetch. A failed fetch keeps the
    /// previous list.
    pub async fn refresh(&self) {
        match self.store.list_users().await {
            Ok(users) => *self.users.write().await = users,
            Err(err) => {
                error!("Error fetching users: {}", err);
                self.notifier
                    .push(Notification::failure("Could not load users."));
            }
        }
        self.loading.store(false, Ordering::Release);
    }

    pub async fn create(&self, input: UserInput) -> StoreResult<User> {
        match self.store.insert_user(&input).await {
            Ok(user) => {
                self.refresh().await;
                info!("User created: {}", user.email);
                self.notifier.push(Notification::success(
                    "User created",
                    "The new user was created successfully.",
                ));
                Ok(user)
            }
            Err(err) => {
                error!("Error creating user: {}", err);
                self.notifier
                    .push(Notification::failure("Could not create the user."));
                Err(err)
            }
        }
    }

    pub async fn update(&self, id: Uuid, input: UserInput) -> StoreResult<User> {
        match self.store.update_user(id, &input, Utc::now()).await {
            Ok(user) => {
                self.refresh().await;
                info!("User updated: {}", id);
                self.notifier.push(Notification::success(
                    "User updated",
                    "The user's information was updated successfully.",
                ));
                Ok(user)
            }
            Err(err) => {
                error!("Error updating user {}: {}", id, err);
                self.notifier
                    .push(Notification::failure("Could not update the user."));
                Err(err)
            }
        }
    }

    pub async fn delete(&self, id: Uuid) {
        match self.store.delete_user(id).await {
            Ok(()) => {
                self.refresh().await;
                info!("User deleted: {}", id);
                self.notifier.push(Notification::destructive(
                    "User removed",
                    "The user was removed successfully.",
                ));
            }
            Err(err) => {
                error!("Error deleting user {}: {}", id, err);
                self.notifier
                    .push(Notification::failure("Could not remove the user."));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{collections::testing::FailingStore, notify::Variant, store::MemoryStore};

    fn collection() -> (UsersCollection, Notifier) {
        let notifier = Notifier::new();
        let users = UsersCollection::new(Arc::new(MemoryStore::new()), notifier.clone());
        (users, notifier)
    }

    fn input(name: &str, email: &str) -> UserInput {
        UserInput {
            name: Some(name.to_string()),
            email: email.to_string(),
        }
    }

    #[tokio::test]
    async fn test_loading_until_first_fetch() {
        let (users, _) = collection();
        assert!(users.is_loading());

        users.refresh().await;
        assert!(!users.is_loading());
        assert!(users.users().await.is_empty());
    }

    #[tokio::test]
    async fn test_create_adds_exactly_one_record() {
        let (users, notifier) = collection();
        users.refresh().await;
        users.create(input("Bruno", "bruno@x.com")).await.unwrap();
        let before = users.users().await.len();

        let created = users.create(input("Ana", "ana@x.com")).await.unwrap();

        let after = users.users().await;
        assert_eq!(after.len(), before + 1);
        let matching: Vec<_> = after
            .iter()
            .filter(|u| u.email == "ana@x.com" && u.name.as_deref() == Some("Ana"))
            .collect();
        assert_eq!(matching.len(), 1);
        assert_eq!(matching[0].id, created.id);

        let last = notifier.drain().pop().unwrap();
        assert_eq!(last.title, "User created");
        assert_eq!(last.variant, Variant::Default);
    }

    #[tokio::test]
    async fn test_update_is_visible_in_next_read() {
        let (users, _) = collection();
        let user = users.create(input("Ana", "ana@x.com")).await.unwrap();

        users
            .update(user.id, input("Ana Maria", "ana@x.com"))
            .await
            .unwrap();

        let found = users.find(user.id).await.unwrap();
        assert_eq!(found.name.as_deref(), Some("Ana Maria"));
        assert!(found.updated_at > user.updated_at);
    }

    #[tokio::test]
    async fn test_delete_removes_record_and_notifies_destructively() {
        let (users, notifier) = collection();
        let user = users.create(input("Ana", "ana@x.com")).await.unwrap();
        notifier.drain();

        users.delete(user.id).await;

        assert!(users.find(user.id).await.is_none());
        let notifications = notifier.drain();
        assert_eq!(notifications.len(), 1);
        assert_eq!(notifications[0].title, "User removed");
        assert_eq!(notifications[0].variant, Variant::Destructive);
    }

    #[tokio::test]
    async fn test_refresh_twice_yields_same_collection() {
        let (users, _) = collection();
        users.create(input("Ana", "ana@x.com")).await.unwrap();
        users.create(input("Bruno", "bruno@x.com")).await.unwrap();

        users.refresh().await;
        let first = users.users().await;
        users.refresh().await;
        let second = users.users().await;

        assert_eq!(first.len(), 2);
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_failures_are_reported_not_raised() {
        let notifier = Notifier::new();
        let users = UsersCollection::new(Arc::new(FailingStore), notifier.clone());

        users.refresh().await;
        assert!(!users.is_loading());

        let err = users.create(input("Ana", "ana@x.com")).await.unwrap_err();
        assert!(err.to_string().contains("connection refused"));
        assert!(users.update(Uuid::new_v4(), input("Ana", "a@x.com")).await.is_err());
        users.delete(Uuid::new_v4()).await;

        let notifications = notifier.drain();
        let descriptions: Vec<_> = notifications.iter().map(|n| n.description.as_str()).collect();
        assert_eq!(
            descriptions,
            vec![
                "Could not load users.",
                "Could not create the user.",
                "Could not update the user.",
                "Could not remove the user.",
            ]
        );
        assert!(notifications.iter().all(|n| n.variant == Variant::Destructive));
    }

    #[tokio::test]
    async fn test_duplicate_email_leaves_list_unchanged() {
        let (users, notifier) = collection();
        users.create(input("Ana", "ana@x.com")).await.unwrap();
        notifier.drain();

        assert!(users.create(input("Other", "ana@x.com")).await.is_err());
        assert_eq!(users.users().await.len(), 1);
        assert_eq!(notifier.drain()[0].description, "Could not create the user.");
    }
}
