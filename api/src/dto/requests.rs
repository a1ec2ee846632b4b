use crate::{
    admin::Tab,
    models::{PostInput, PostWithAuthor, User, UserInput, null_if_empty},
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

/// Fields of the user dialog. Only the email is required.
#[derive(Debug, Clone, Default, PartialEq, Validate, Serialize, Deserialize)]
pub struct UserForm {
    #[serde(default)]
    pub name: String,
    #[validate(email(message = "Invalid email format"))]
    #[serde(default)]
    pub email: String,
}

impl UserForm {
    pub fn to_input(&self) -> UserInput {
        UserInput {
            name: null_if_empty(&self.name),
            email: self.email.clone(),
        }
    }
}

impl From<&User> for UserForm {
    fn from(user: &User) -> Self {
        Self {
            name: user.name.clone().unwrap_or_default(),
            email: user.email.clone(),
        }
    }
}

/// Fields of the post dialog. Title and author are required: `validate`
/// checks the title, `to_input` refuses a form without an author.
#[derive(Debug, Clone, Default, PartialEq, Validate, Serialize, Deserialize)]
pub struct PostForm {
    #[validate(length(min = 1, message = "Title is required"))]
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub published: bool,
    #[serde(default)]
    pub author_id: Option<Uuid>,
}

impl PostForm {
    /// `None` until an author is selected.
    pub fn to_input(&self) -> Option<PostInput> {
        let author_id = self.author_id?;
        Some(PostInput {
            title: self.title.clone(),
            content: null_if_empty(&self.content),
            published: self.published,
            author_id,
        })
    }
}

impl From<&PostWithAuthor> for PostForm {
    fn from(post: &PostWithAuthor) -> Self {
        Self {
            title: post.post.title.clone(),
            content: post.post.content.clone().unwrap_or_default(),
            published: post.post.published,
            author_id: Some(post.post.author_id),
        }
    }
}

/// GET /admin?search=...&tab=...
#[derive(Debug, Default, Deserialize)]
pub struct AdminQuery {
    pub search: Option<String>,
    pub tab: Option<Tab>,
}

#[derive(Debug, Deserialize)]
pub struct PublishRequest {
    pub published: bool,
}
