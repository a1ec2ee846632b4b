use crate::store::{AuthorDeletePolicy, MemoryStore, RemoteStore, RestStore};
use std::{env, sync::Arc};
use tracing::{info, warn};

/// Where the panel's data lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreConfig {
    /// In-process store; nothing survives a restart.
    Memory,
    /// The hosted service, reached through its REST interface.
    Rest { url: String, api_key: String },
}

#[derive(Debug, Clone)]
pub struct Config {
    pub store: StoreConfig,
    /// Only the in-memory store applies this; the hosted schema decides for itself.
    pub author_delete: AuthorDeletePolicy,
}

impl Config {
    /// Reads the service credentials `SUPABASE_URL` and `SUPABASE_ANON_KEY`,
    /// and `AUTHOR_DELETE_POLICY` (`restrict` or `cascade`).
    pub fn from_env() -> Self {
        let config = Self::from_credentials(
            env::var("SUPABASE_URL").ok(),
            env::var("SUPABASE_ANON_KEY").ok(),
        );
        Self {
            author_delete: parse_author_delete(env::var("AUTHOR_DELETE_POLICY").ok().as_deref()),
            ..config
        }
    }

    pub fn from_credentials(url: Option<String>, api_key: Option<String>) -> Self {
        let url = url.filter(|v| !v.trim().is_empty());
        let api_key = api_key.filter(|v| !v.trim().is_empty());

        let store = match (url, api_key) {
            (Some(url), Some(api_key)) => StoreConfig::Rest { url, api_key },
            (None, None) => StoreConfig::Memory,
            _ => {
                warn!("Incomplete service credentials, falling back to the in-memory store");
                StoreConfig::Memory
            }
        };
        Self {
            store,
            author_delete: AuthorDeletePolicy::default(),
        }
    }

    pub fn build_store(&self) -> Arc<dyn RemoteStore> {
        match &self.store {
            StoreConfig::Memory => {
                info!("Using in-memory store ({:?} on author delete)", self.author_delete);
                Arc::new(MemoryStore::with_author_delete_policy(self.author_delete))
            }
            StoreConfig::Rest { url, api_key } => {
                info!("Using remote store at {}", url);
                Arc::new(RestStore::new(url.clone(), api_key.clone()))
            }
        }
    }
}

fn parse_author_delete(value: Option<&str>) -> AuthorDeletePolicy {
    match value.map(|v| v.trim().to_ascii_lowercase()).as_deref() {
        None | Some("") | Some("restrict") => AuthorDeletePolicy::Restrict,
        Some("cascade") => AuthorDeletePolicy::Cascade,
        Some(other) => {
            warn!("Unknown AUTHOR_DELETE_POLICY {:?}, using restrict", other);
            AuthorDeletePolicy::Restrict
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_both_credentials_select_remote_store() {
        let config = Config::from_credentials(
            Some("https://project.example.co".into()),
            Some("anon-key".into()),
        );
        assert_eq!(
            config.store,
            StoreConfig::Rest {
                url: "https://project.example.co".into(),
                api_key: "anon-key".into(),
            }
        );
    }

    #[test]
    fn test_missing_or_blank_credentials_fall_back_to_memory() {
        assert_eq!(Config::from_credentials(None, None).store, StoreConfig::Memory);
        assert_eq!(
            Config::from_credentials(Some("https://project.example.co".into()), None).store,
            StoreConfig::Memory
        );
        assert_eq!(
            Config::from_credentials(Some("  ".into()), Some("anon-key".into())).store,
            StoreConfig::Memory
        );
    }

    #[test]
    fn test_author_delete_policy_parsing() {
        assert_eq!(parse_author_delete(None), AuthorDeletePolicy::Restrict);
        assert_eq!(parse_author_delete(Some("Cascade")), AuthorDeletePolicy::Cascade);
        assert_eq!(parse_author_delete(Some("restrict")), AuthorDeletePolicy::Restrict);
        assert_eq!(parse_author_delete(Some("orphan")), AuthorDeletePolicy::Restrict);
    }

    #[tokio::test]
    async fn test_cascade_policy_reaches_memory_store() {
        use crate::models::{PostInput, UserInput};

        let config = Config {
            store: StoreConfig::Memory,
            author_delete: AuthorDeletePolicy::Cascade,
        };
        let store = config.build_store();
        let user = store
            .insert_user(&UserInput {
                name: None,
                email: "ana@x.com".into(),
            })
            .await
            .unwrap();
        store
            .insert_post(&PostInput {
                title: "Hello".into(),
                content: None,
                published: false,
                author_id: user.id,
            })
            .await
            .unwrap();

        store.delete_user(user.id).await.unwrap();
        assert!(store.list_posts().await.unwrap().is_empty());
    }
}
