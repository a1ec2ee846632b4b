use crate::{
    admin::AdminView,
    collections::{PostsCollection, UsersCollection},
    notify::Notifier,
    store::RemoteStore,
};
use std::sync::Arc;
use tokio::sync::Mutex;

// ============================================================================
// APPLICATION STATE - Shared data across all requests
// ============================================================================
/// The collections are owned here and injected into the view; handlers
/// reach them only through the view, except for the initial load.
///
/// The view sits behind one `Mutex`: the panel serves a single admin
/// session, and dialog state must not interleave between requests.
#[derive(Clone)]
pub struct AppState {
    pub view: Arc<Mutex<AdminView>>,
    pub users: Arc<UsersCollection>,
    pub posts: Arc<PostsCollection>,
    pub notifier: Notifier,
}

impl AppState {
    pub fn new(store: Arc<dyn RemoteStore>) -> Self {
        let notifier = Notifier::new();
        let users = Arc::new(UsersCollection::new(store.clone(), notifier.clone()));
        let posts = Arc::new(PostsCollection::new(store, notifier.clone()));
        let view = AdminView::new(users.clone(), posts.clone());

        Self {
            view: Arc::new(Mutex::new(view)),
            users,
            posts,
            notifier,
        }
    }

    /// First fetch of both collections. Until it lands the panes render
    /// skeletons.
    pub fn load_in_background(&self) -> tokio::task::JoinHandle<()> {
        let users = self.users.clone();
        let posts = self.posts.clone();
        tokio::spawn(async move {
            tokio::join!(users.refresh(), posts.refresh());
        })
    }
}
