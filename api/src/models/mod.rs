mod post;
mod user;

pub use post::{Author, Post, PostInput, PostWithAuthor};
pub use user::{User, UserInput};

/// Empty optional text is stored as null, the way a blank form field is
/// saved by the remote store.
pub(crate) fn null_if_empty(value: &str) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

/// Optional text with blank values read as absent. Rows written elsewhere
/// may carry `""` where this crate would store null.
pub(crate) fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|text| !text.is_empty())
}
