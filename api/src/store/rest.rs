use super::RemoteStore;
use crate::{
    errors::{StoreError, StoreResult},
    models::{PostInput, PostWithAuthor, User, UserInput},
};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use reqwest::{Client, Method, RequestBuilder};
use serde::{Serialize, de::DeserializeOwned};
use tracing::debug;
use uuid::Uuid;

const PROFILES: &str = "profiles";
const POSTS: &str = "posts";

/// Profiles with every related post embedded.
const PROFILE_SELECT: &str = "*,posts(*)";
/// Posts with the author snapshot joined in.
const POST_SELECT: &str = "*,author:profiles(id,name,email)";
const NEWEST_FIRST: &str = "created_at.desc";

/// Client for the hosted service's PostgREST interface.
#[derive(Clone)]
pub struct RestStore {
    client: Client,
    base_url: String,
    api_key: String,
}

/// Write payload with the client-side `updated_at` stamp attached.
#[derive(Serialize)]
struct Stamped<'a, T> {
    #[serde(flatten)]
    fields: &'a T,
    updated_at: DateTime<Utc>,
}

impl RestStore {
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into(),
            api_key: api_key.into(),
        }
    }

    fn table_url(&self, table: &str) -> String {
        format!("{}/rest/v1/{}", self.base_url.trim_end_matches('/'), table)
    }

    fn request(&self, method: Method, table: &str) -> RequestBuilder {
        self.client
            .request(method, self.table_url(table))
            .header("apikey", &self.api_key)
            .bearer_auth(&self.api_key)
    }

    /// Mutations answer with the affected rows.
    fn returning(&self, method: Method, table: &str) -> RequestBuilder {
        self.request(method, table)
            .header("Prefer", "return=representation")
    }

    fn list_request(&self, table: &str, select: &str) -> RequestBuilder {
        self.request(Method::GET, table)
            .query(&[("select", select), ("order", NEWEST_FIRST)])
    }

    fn by_id(builder: RequestBuilder, id: Uuid) -> RequestBuilder {
        builder.query(&[("id", format!("eq.{id}"))])
    }

    async fn send(request: RequestBuilder) -> StoreResult<reqwest::Response> {
        let response = request.send().await?;
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        Err(StoreError::new(format!("{status}: {body}")))
    }

    async fn fetch<T: DeserializeOwned>(request: RequestBuilder) -> StoreResult<T> {
        Ok(Self::send(request).await?.json::<T>().await?)
    }

    /// Exactly one row is expected back.
    async fn fetch_single<T: DeserializeOwned>(request: RequestBuilder) -> StoreResult<T> {
        let mut rows: Vec<T> = Self::fetch(request).await?;
        match rows.len() {
            1 => Ok(rows.remove(0)),
            n => Err(StoreError::new(format!(
                "expected a single row, the service returned {n}"
            ))),
        }
    }
}

#[async_trait]
impl RemoteStore for RestStore {
    async fn list_users(&self) -> StoreResult<Vec<User>> {
        debug!("Fetching {}", PROFILES);
        Self::fetch(self.list_request(PROFILES, PROFILE_SELECT)).await
    }

    async fn insert_user(&self, input: &UserInput) -> StoreResult<User> {
        let request = self.returning(Method::POST, PROFILES).json(&[input]);
        Self::fetch_single(request).await
    }

    async fn update_user(
        &self,
        id: Uuid,
        input: &UserInput,
        updated_at: DateTime<Utc>,
    ) -> StoreResult<User> {
        let request = Self::by_id(self.returning(Method::PATCH, PROFILES), id).json(&Stamped {
            fields: input,
            updated_at,
        });
        Self::fetch_single(request).await
    }

    async fn delete_user(&self, id: Uuid) -> StoreResult<()> {
        Self::send(Self::by_id(self.request(Method::DELETE, PROFILES), id)).await?;
        Ok(())
    }

    async fn list_posts(&self) -> StoreResult<Vec<PostWithAuthor>> {
        debug!("Fetching {}", POSTS);
        Self::fetch(self.list_request(POSTS, POST_SELECT)).await
    }

    async fn insert_post(&self, input: &PostInput) -> StoreResult<PostWithAuthor> {
        let request = self
            .returning(Method::POST, POSTS)
            .query(&[("select", POST_SELECT)])
            .json(&[input]);
        Self::fetch_single(request).await
    }

    async fn update_post(
        &self,
        id: Uuid,
        input: &PostInput,
        updated_at: DateTime<Utc>,
    ) -> StoreResult<PostWithAuthor> {
        let request = Self::by_id(self.returning(Method::PATCH, POSTS), id)
            .query(&[("select", POST_SELECT)])
            .json(&Stamped {
                fields: input,
                updated_at,
            });
        Self::fetch_single(request).await
    }

    async fn set_post_published(
        &self,
        id: Uuid,
        published: bool,
        updated_at: DateTime<Utc>,
    ) -> StoreResult<()> {
        let request = Self::by_id(self.request(Method::PATCH, POSTS), id).json(
            &serde_json::json!({ "published": published, "updated_at": updated_at }),
        );
        Self::send(request).await?;
        Ok(())
    }

    async fn delete_post(&self, id: Uuid) -> StoreResult<()> {
        Self::send(Self::by_id(self.request(Method::DELETE, POSTS), id)).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store() -> RestStore {
        RestStore::new("https://project.example.co/", "anon-key")
    }

    #[test]
    fn test_users_query_embeds_posts_newest_first() {
        let request = store().list_request(PROFILES, PROFILE_SELECT).build().unwrap();

        let url = request.url();
        assert_eq!(url.path(), "/rest/v1/profiles");
        let pairs: Vec<(String, String)> = url
            .query_pairs()
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect();
        assert_eq!(
            pairs,
            vec![
                ("select".to_string(), "*,posts(*)".to_string()),
                ("order".to_string(), "created_at.desc".to_string()),
            ]
        );
        assert_eq!(request.headers()["apikey"], "anon-key");
        assert_eq!(request.headers()["authorization"], "Bearer anon-key");
    }

    #[test]
    fn test_update_filters_by_id_and_asks_for_representation() {
        let store = store();
        let id = Uuid::new_v4();
        let request = RestStore::by_id(store.returning(Method::PATCH, POSTS), id)
            .build()
            .unwrap();

        assert_eq!(request.method(), &Method::PATCH);
        assert_eq!(request.url().query(), Some(format!("id=eq.{id}").as_str()));
        assert_eq!(request.headers()["prefer"], "return=representation");
    }

    #[test]
    fn test_stamped_payload_flattens_fields() {
        let input = UserInput {
            name: None,
            email: "ana@x.com".into(),
        };
        let updated_at = Utc::now();
        let body = serde_json::to_value(Stamped {
            fields: &input,
            updated_at,
        })
        .unwrap();

        assert_eq!(body["email"], "ana@x.com");
        assert!(body["name"].is_null());
        assert!(body["updated_at"].is_string());
    }
}
