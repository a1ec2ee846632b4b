use crate::{
    errors::StoreResult,
    models::{PostInput, PostWithAuthor},
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

pub struct PostsCollection {
    store: Arc<dyn RemoteStore>,
    notifier: Notifier,
    posts: RwLock<Vec<PostWithAuthor>>,
    loading: AtomicBool,
}

impl PostsCollection {
    pub fn new(store: Arc<dyn RemoteStore>, notifier: Notifier) -> Self {
        Self {
            store,
            notifier,
            posts: RwLock::new(Vec::new()),
            loading: AtomicBool::new(true),
        }
    }

    pub async fn posts(&self) -> Vec<PostWithAuthor> {
        self.posts.read().await.clone()
    }

    pub async fn find(&self, id: Uuid) -> Option<PostWithAuthor> {
        self.posts
            .read()
            .await
            .iter()
            .find(|p| p.post.id == id)
            .cloned()
    }

    pub fn is_loading(&self) -> bool {
        self.loading.load(Ordering::Acquire)
    }

    pub async fn refresh(&self) {
        match self.store.list_posts().await {
            Ok(posts) => *self.posts.write().await = posts,
            Err(err) => {
                error!("Error fetching posts: {}", err);
                self.notifier
                    .push(Notification::failure("Could not load the posts."));
            }
        }
        self.loading.store(false, Ordering::Release);
    }

    pub async fn create(&self, input: PostInput) -> StoreResult<PostWithAuthor> {
        match self.store.insert_post(&input).await {
            Ok(post) => {
                self.refresh().await;
                info!("Post created: {} by user {}", post.post.id, post.author.id);
                self.notifier.push(Notification::success(
                    "Post created",
                    "The new post was created successfully.",
                ));
                Ok(post)
            }
            Err(err) => {
                error!("Error creating post: {}", err);
                self.notifier
                    .push(Notification::failure("Could not create the post."));
                Err(err)
            }
        }
    }

    pub async fn update(&self, id: Uuid, input: PostInput) -> StoreResult<PostWithAuthor> {
        match self.store.update_post(id, &input, Utc::now()).await {
            Ok(post) => {
                self.refresh().await;
                info!("Post updated: {}", id);
                self.notifier.push(Notification::success(
                    "Post updated",
                    "The post was updated successfully.",
                ));
                Ok(post)
            }
            Err(err) => {
                error!("Error updating post {}: {}", id, err);
                self.notifier
                    .push(Notification::failure("Could not update the post."));
                Err(err)
            }
        }
    }

    pub async fn delete(&self, id: Uuid) {
        match self.store.delete_post(id).await {
            Ok(()) => {
                self.refresh().await;
                info!("Post deleted: {}", id);
                self.notifier.push(Notification::destructive(
                    "Post removed",
                    "The post was removed successfully.",
                ));
            }
            Err(err) => {
                error!("Error deleting post {}: {}", id, err);
                self.notifier
                    .push(Notification::failure("Could not remove the post."));
            }
        }
    }

    /// Only `published` and `updated_at` are written.
    pub async fn toggle_published(&self, id: Uuid, published: bool) {
        match self
            .store
            .set_post_published(id, published, Utc::now())
            .await
        {
            Ok(()) => {
                self.refresh().await;
                info!("Post {} published: {}", id, published);
                let notification = if published {
                    Notification::success("Post published", "The post was published successfully.")
                } else {
                    Notification::success(
                        "Post unpublished",
                        "The post was unpublished successfully.",
                    )
                };
                self.notifier.push(notification);
            }
            Err(err) => {
                error!("Error toggling post {} published: {}", id, err);
                self.notifier.push(Notification::failure(
                    "Could not change the post's status.",
                ));
            }
        }
    }
}
