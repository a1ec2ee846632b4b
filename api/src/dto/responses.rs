use crate::{
    admin::{FormMode, PostCard, Tab, UserCard},
    dto::{PostForm, UserForm},
};
use serde::Serialize;
use uuid::Uuid;

/// Everything the admin screen shows, as of one render.
#[derive(Debug, Serialize)]
pub struct AdminScreen {
    pub heading: &'static str,
    pub subheading: &'static str,
    pub search: String,
    pub search_placeholder: &'static str,
    pub tab: Tab,
    pub tabs: Vec<TabLabel>,
    pub users: Pane<UserCard>,
    pub posts: Pane<PostCard>,
    pub user_dialog: DialogView<UserForm>,
    pub post_dialog: DialogView<PostForm>,
    /// Choices of the post dialog's author select.
    pub authors: Vec<AuthorOption>,
}

#[derive(Debug, Serialize)]
pub struct TabLabel {
    pub tab: Tab,
    pub label: String,
}

/// A list pane: skeleton blocks while the first fetch is outstanding.
#[derive(Debug, Serialize)]
#[serde(tag = "state", rename_all = "lowercase")]
pub enum Pane<C> {
    Loading { placeholders: usize },
    Ready { cards: Vec<C> },
}

#[derive(Debug, Serialize)]
pub struct DialogView<F> {
    pub open: bool,
    pub mode: FormMode,
    pub title: String,
    pub submit_label: String,
    pub form: F,
}

#[derive(Debug, Serialize)]
pub struct AuthorOption {
    pub id: Uuid,
    pub label: String,
}
