use super::{PostAction, PostCard, UserAction, UserCard, post_matches, user_matches};
use crate::{
    collections::{PostsCollection, UsersCollection},
    dto::{AdminScreen, AuthorOption, DialogView, Pane, PostForm, TabLabel, UserForm},
    errors::ApiError,
    models::{PostWithAuthor, User},
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::debug;
use uuid::Uuid;
use validator::Validate;

const USER_PLACEHOLDERS: usize = 6;
const POST_PLACEHOLDERS: usize = 4;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tab {
    #[default]
    Users,
    Posts,
}

/// Which operation a dialog's submit fires.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(tag = "mode", content = "id", rename_all = "lowercase")]
pub enum FormMode {
    #[default]
    Creating,
    Editing(Uuid),
}

/// A modal form and its open state.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dialog<F> {
    pub open: bool,
    pub mode: FormMode,
    pub form: F,
}

impl<F: Default> Dialog<F> {
    fn open_creating(&mut self) {
        *self = Self {
            open: true,
            ..Self::default()
        };
    }

    fn open_editing(&mut self, id: Uuid, form: F) {
        *self = Self {
            open: true,
            mode: FormMode::Editing(id),
            form,
        };
    }

    /// Empty form, create mode, closed.
    fn reset(&mut self) {
        *self = Self::default();
    }

    fn view(&self, noun: &str) -> DialogView<F>
    where
        F: Clone,
    {
        let (title, submit_label) = match self.mode {
            FormMode::Creating => (format!("New {noun}"), format!("Create {noun}")),
            FormMode::Editing(_) => (format!("Edit {noun}"), format!("Update {noun}")),
        };
        DialogView {
            open: self.open,
            mode: self.mode,
            title,
            submit_label,
            form: self.form.clone(),
        }
    }
}

/// State of the admin screen over the two injected collections.
pub struct AdminView {
    users: Arc<UsersCollection>,
    posts: Arc<PostsCollection>,
    search: String,
    tab: Tab,
    user_dialog: Dialog<UserForm>,
    post_dialog: Dialog<PostForm>,
}

impl AdminView {
    pub fn new(users: Arc<UsersCollection>, posts: Arc<PostsCollection>) -> Self {
        Self {
            users,
            posts,
            search: String::new(),
            tab: Tab::default(),
            user_dialog: Dialog::default(),
            post_dialog: Dialog::default(),
        }
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn set_search(&mut self, term: impl Into<String>) {
        self.search = term.into();
    }

    pub fn tab(&self) -> Tab {
        self.tab
    }

    pub fn select_tab(&mut self, tab: Tab) {
        self.tab = tab;
    }

    pub fn user_dialog(&self) -> &Dialog<UserForm> {
        &self.user_dialog
    }

    pub fn post_dialog(&self) -> &Dialog<PostForm> {
        &self.post_dialog
    }

    pub async fn filtered_users(&self) -> Vec<User> {
        let mut users = self.users.users().await;
        users.retain(|user| user_matches(user, &self.search));
        users
    }

    pub async fn filtered_posts(&self) -> Vec<PostWithAuthor> {
        let mut posts = self.posts.posts().await;
        posts.retain(|entry| post_matches(&entry.post, &self.search));
        posts
    }

    pub async fn refresh(&self) {
        tokio::join!(self.users.refresh(), self.posts.refresh());
    }

    // ---- users ----

    pub fn open_new_user(&mut self) {
        self.user_dialog.open_creating();
    }

    pub async fn edit_user(&mut self, id: Uuid) -> Result<(), ApiError> {
        let user = self.users.find(id).await.ok_or(ApiError::NotFound)?;
        self.user_dialog.open_editing(id, UserForm::from(&user));
        Ok(())
    }

    pub fn set_user_form(&mut self, form: UserForm) {
        self.user_dialog.form = form;
    }

    /// Dismiss without submitting. Fields and mode are kept.
    pub fn close_user_dialog(&mut self) {
        self.user_dialog.open = false;
    }

    /// Fails only when the form is incomplete, in which case nothing is sent
    /// and the dialog stays as it is. Otherwise the dialog is reset and
    /// closed whatever the store answered.
    pub async fn submit_user(&mut self) -> Result<(), ApiError> {
        self.user_dialog
            .form
            .validate()
            .map_err(|e| ApiError::ValidationError(e.to_string()))?;

        let input = self.user_dialog.form.to_input();
        let outcome = match self.user_dialog.mode {
            FormMode::Editing(id) => self.users.update(id, input).await.map(drop),
            FormMode::Creating => self.users.create(input).await.map(drop),
        };
        if let Err(err) = outcome {
            debug!("User form closed after failed submit: {}", err);
        }

        self.user_dialog.reset();
        Ok(())
    }

    pub async fn on_user_action(&mut self, action: UserAction) -> Result<(), ApiError> {
        match action {
            UserAction::Edit { id } => self.edit_user(id).await,
            UserAction::Delete { id } => {
                self.users.delete(id).await;
                Ok(())
            }
        }
    }

    // ---- posts ----

    pub fn open_new_post(&mut self) {
        self.post_dialog.open_creating();
    }

    pub async fn edit_post(&mut self, id: Uuid) -> Result<(), ApiError> {
        let post = self.posts.find(id).await.ok_or(ApiError::NotFound)?;
        self.post_dialog.open_editing(id, PostForm::from(&post));
        Ok(())
    }

    pub fn set_post_form(&mut self, form: PostForm) {
        self.post_dialog.form = form;
    }

    pub fn close_post_dialog(&mut self) {
        self.post_dialog.open = false;
    }

    pub async fn submit_post(&mut self) -> Result<(), ApiError> {
        let form = &self.post_dialog.form;
        form.validate()
            .map_err(|e| ApiError::ValidationError(e.to_string()))?;
        let input = form
            .to_input()
            .ok_or_else(|| ApiError::ValidationError("An author must be selected".into()))?;

        let outcome = match self.post_dialog.mode {
            FormMode::Editing(id) => self.posts.update(id, input).await.map(drop),
            FormMode::Creating => self.posts.create(input).await.map(drop),
        };
        match outcome {
            // user cards count posts
            Ok(()) => self.users.refresh().await,
            Err(err) => debug!("Post form closed after failed submit: {}", err),
        }

        self.post_dialog.reset();
        Ok(())
    }

    pub async fn on_post_action(&mut self, action: PostAction) -> Result<(), ApiError> {
        match action {
            PostAction::Edit { id } => self.edit_post(id).await,
            PostAction::Delete { id } => {
                self.posts.delete(id).await;
                self.users.refresh().await;
                Ok(())
            }
            PostAction::SetPublished { id, published } => {
                self.posts.toggle_published(id, published).await;
                self.users.refresh().await;
                Ok(())
            }
        }
    }

    // ---- render ----

    pub async fn screen(&self) -> AdminScreen {
        let all_users = self.users.users().await;
        let all_posts = self.posts.posts().await;

        let users = if self.users.is_loading() {
            Pane::Loading {
                placeholders: USER_PLACEHOLDERS,
            }
        } else {
            Pane::Ready {
                cards: all_users
                    .iter()
                    .filter(|user| user_matches(user, &self.search))
                    .map(UserCard::from)
                    .collect(),
            }
        };

        let posts = if self.posts.is_loading() {
            Pane::Loading {
                placeholders: POST_PLACEHOLDERS,
            }
        } else {
            Pane::Ready {
                cards: all_posts
                    .iter()
                    .filter(|entry| post_matches(&entry.post, &self.search))
                    .map(PostCard::from)
                    .collect(),
            }
        };

        AdminScreen {
            heading: "Admin Panel",
            subheading: "Manage the system's users and posts",
            search: self.search.clone(),
            search_placeholder: "Search users or posts...",
            tab: self.tab,
            tabs: vec![
                TabLabel {
                    tab: Tab::Users,
                    label: format!("Users ({})", all_users.len()),
                },
                TabLabel {
                    tab: Tab::Posts,
                    label: format!("Posts ({})", all_posts.len()),
                },
            ],
            users,
            posts,
            user_dialog: self.user_dialog.view("User"),
            post_dialog: self.post_dialog.view("Post"),
            authors: all_users
                .iter()
                .map(|user| AuthorOption {
                    id: user.id,
                    label: user.label().to_string(),
                })
                .collect(),
        }
    }
}
