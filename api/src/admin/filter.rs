use crate::models::{Post, User};

fn contains_folded(haystack: &str, folded_term: &str) -> bool {
    haystack.to_lowercase().contains(folded_term)
}

/// Case-insensitive substring match on name or email.
pub fn user_matches(user: &User, term: &str) -> bool {
    let term = term.to_lowercase();
    user.name
        .as_deref()
        .is_some_and(|name| contains_folded(name, &term))
        || contains_folded(&user.email, &term)
}

/// Case-insensitive substring match on title or content.
pub fn post_matches(post: &Post, term: &str) -> bool {
    let term = term.to_lowercase();
    contains_folded(&post.title, &term)
        || post
            .content
            .as_deref()
            .is_some_and(|content| contains_folded(content, &term))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use uuid::Uuid;

    fn user(name: Option<&str>, email: &str) -> User {
        User {
            id: Uuid::new_v4(),
            email: email.to_string(),
            name: name.map(str::to_string),
            created_at: Utc::now(),
            updated_at: Utc::now(),
            posts: Vec::new(),
        }
    }

    fn post(title: &str, content: Option<&str>) -> Post {
        Post {
            id: Uuid::new_v4(),
            title: title.to_string(),
            content: content.map(str::to_string),
            published: false,
            author_id: Uuid::new_v4(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_user_filter_is_case_insensitive_on_name_and_email() {
        let users = vec![
            user(Some("Ana Souza"), "ana@x.com"),
            user(None, "BRUNO@Example.org"),
            user(Some("Carla"), "carla@x.com"),
        ];

        let names = |term: &str| -> Vec<String> {
            users
                .iter()
                .filter(|u| user_matches(u, term))
                .map(|u| u.email.clone())
                .collect()
        };

        assert_eq!(names("souza"), vec!["ana@x.com"]);
        assert_eq!(names("example"), vec!["BRUNO@Example.org"]);
        assert_eq!(names("X.COM"), vec!["ana@x.com", "carla@x.com"]);
        assert!(names("nobody").is_empty());
    }

    #[test]
    fn test_empty_term_matches_everything() {
        assert!(user_matches(&user(None, "ana@x.com"), ""));
        assert!(post_matches(&post("Hello", None), ""));
    }

    #[test]
    fn test_post_filter_covers_title_and_content() {
        let with_content = post("Release notes", Some("Rust is FAST"));
        let without_content = post("Draft", None);

        assert!(post_matches(&with_content, "release"));
        assert!(post_matches(&with_content, "fast"));
        assert!(!post_matches(&with_content, "slow"));
        assert!(post_matches(&without_content, "dra"));
        assert!(!post_matches(&without_content, "rust"));
    }

    #[test]
    fn test_filter_agrees_with_folded_substring_law() {
        let users = vec![
            user(Some("Élodie"), "elodie@x.com"),
            user(Some("Zoë"), "zoe@y.org"),
            user(None, "MiXeD@Case.io"),
        ];

        for term in ["é", "ZOË", "case", "@", "x.c", "none"] {
            let folded = term.to_lowercase();
            for u in &users {
                let expected = u
                    .name
                    .as_ref()
                    .is_some_and(|n| n.to_lowercase().contains(&folded))
                    || u.email.to_lowercase().contains(&folded);
                assert_eq!(user_matches(u, term), expected, "term {term:?}");
            }
        }
    }
}
