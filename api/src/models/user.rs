use super::{Post, non_blank};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A row of the `profiles` resource, with its posts embedded on read.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub email: String,
    pub name: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default)]
    pub posts: Vec<Post>,
}

impl User {
    /// Name when set, email otherwise.
    pub fn label(&self) -> &str {
        non_blank(&self.name).unwrap_or(&self.email)
    }

    pub fn published_posts(&self) -> usize {
        self.posts.iter().filter(|post| post.published).count()
    }
}

/// Mutable fields of a profile, as sent on insert and update.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserInput {
    pub name: Option<String>,
    pub email: String,
}
