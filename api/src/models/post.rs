use super::non_blank;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Post {
    pub id: Uuid,
    pub title: String,
    pub content: Option<String>,
    #[serde(default)]
    pub published: bool,
    pub author_id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Snapshot of the author joined onto a post at read time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Author {
    pub id: Uuid,
    pub name: Option<String>,
    pub email: String,
}

impl Author {
    pub fn label(&self) -> &str {
        non_blank(&self.name).unwrap_or(&self.email)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PostWithAuthor {
    #[serde(flatten)]
    pub post: Post,
    pub author: Author,
}

/// Writable fields of a post. The author is referenced by id only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PostInput {
    pub title: String,
    pub content: Option<String>,
    pub published: bool,
    pub author_id: Uuid,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_post_with_author_reads_embedded_join() {
        let author_id = Uuid::new_v4();
        let body = json!({
            "id": Uuid::new_v4(),
            "title": "Hello",
            "content": null,
            "published": true,
            "author_id": author_id,
            "created_at": "2024-05-01T10:00:00Z",
            "updated_at": "2024-05-01T10:00:00Z",
            "author": { "id": author_id, "name": null, "email": "ana@x.com" }
        });

        let post: PostWithAuthor = serde_json::from_value(body).unwrap();
        assert_eq!(post.post.title, "Hello");
        assert!(post.post.content.is_none());
        assert!(post.post.published);
        assert_eq!(post.author.id, author_id);
        assert_eq!(post.author.label(), "ana@x.com");
    }

    #[test]
    fn test_blank_author_name_falls_back_to_email() {
        let author = Author {
            id: Uuid::new_v4(),
            name: Some(String::new()),
            email: "ana@x.com".into(),
        };
        assert_eq!(author.label(), "ana@x.com");
    }
}
