use crate::models::{PostWithAuthor, User, non_blank};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Longest content shown on a post card before it is cut.
pub const PREVIEW_LIMIT: usize = 150;

/// Events a user card hands back to the view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum UserAction {
    Edit { id: Uuid },
    Delete { id: Uuid },
}

/// Events a post card hands back to the view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum PostAction {
    Edit { id: Uuid },
    Delete { id: Uuid },
    SetPublished { id: Uuid, published: bool },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UserCard {
    pub id: Uuid,
    pub display_name: String,
    pub email: String,
    pub total_posts: usize,
    pub published_posts: usize,
    pub actions: Vec<UserAction>,
}

impl From<&User> for UserCard {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            display_name: non_blank(&user.name).unwrap_or("No name").to_string(),
            email: user.email.clone(),
            total_posts: user.posts.len(),
            published_posts: user.published_posts(),
            actions: vec![
                UserAction::Edit { id: user.id },
                UserAction::Delete { id: user.id },
            ],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PostCard {
    pub id: Uuid,
    pub title: String,
    pub published: bool,
    pub status: &'static str,
    pub author: String,
    pub preview: Option<String>,
    pub toggle_label: &'static str,
    pub actions: Vec<PostAction>,
}

impl From<&PostWithAuthor> for PostCard {
    fn from(entry: &PostWithAuthor) -> Self {
        let post = &entry.post;
        let (status, toggle_label) = if post.published {
            ("Published", "Unpublish")
        } else {
            ("Draft", "Publish")
        };

        Self {
            id: post.id,
            title: post.title.clone(),
            published: post.published,
            status,
            author: entry.author.label().to_string(),
            preview: post
                .content
                .as_deref()
                .filter(|content| !content.is_empty())
                .map(preview),
            toggle_label,
            actions: vec![
                PostAction::SetPublished {
                    id: post.id,
                    published: !post.published,
                },
                PostAction::Edit { id: post.id },
                PostAction::Delete { id: post.id },
            ],
        }
    }
}

/// Content cut to [`PREVIEW_LIMIT`] characters, with an ellipsis when cut.
pub fn preview(content: &str) -> String {
    match content.char_indices().nth(PREVIEW_LIMIT) {
        Some((cut, _)) => format!("{}...", &content[..cut]),
        None => content.to_string(),
    }
}
