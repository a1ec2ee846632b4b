use super::RemoteStore;
use crate::{
    errors::{StoreError, StoreResult},
    models::{Author, Post, PostInput, PostWithAuthor, User, UserInput},
};
use async_trait::async_trait;
use chrono::{DateTime, TimeDelta, Utc};
use dashmap::{
    DashMap,
    mapref::{entry::Entry, one::Ref},
};
use std::sync::{Arc, Mutex};
use uuid::Uuid;

/// What deleting a profile does to the posts that reference it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AuthorDeletePolicy {
    /// The delete fails while any post still references the profile.
    #[default]
    Restrict,
    /// The referencing posts are deleted along with the profile.
    Cascade,
}

/// In-process stand-in for the hosted service.
///
/// Behaves like the service's schema would: emails are unique, posts must
/// reference an existing profile, and timestamps are assigned here.
#[derive(Clone, Default)]
pub struct MemoryStore {
    users: Arc<DashMap<Uuid, User>>,
    posts: Arc<DashMap<Uuid, Post>>,
    email_index: Arc<DashMap<String, Uuid>>, // Quick Lookup by Email
    clock: Arc<Mutex<Option<DateTime<Utc>>>>,
    on_author_delete: AuthorDeletePolicy,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_author_delete_policy(policy: AuthorDeletePolicy) -> Self {
        Self {
            on_author_delete: policy,
            ..Self::default()
        }
    }

    /// Strictly increasing wall-clock time, at microsecond resolution.
    fn now(&self) -> DateTime<Utc> {
        let mut last = self
            .clock
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        let now = match *last {
            Some(prev) if Utc::now() <= prev => prev + TimeDelta::microseconds(1),
            _ => Utc::now(),
        };
        *last = Some(now);
        now
    }

    /// `updated_at` never goes backwards, whatever the caller sent.
    fn stamp_update(&self, requested: DateTime<Utc>, previous: DateTime<Utc>) -> DateTime<Utc> {
        let now = self.now();
        requested.max(now).max(previous + TimeDelta::microseconds(1))
    }

    /// The referenced profile. Holding the guard keeps the profile from being
    /// deleted until the caller is done with it.
    fn profile(&self, author_id: Uuid) -> StoreResult<Ref<'_, Uuid, User>> {
        self.users.get(&author_id).ok_or_else(|| {
            StoreError::new(format!(
                "insert or update on table \"posts\" violates foreign key constraint: \
                 profile {author_id} does not exist"
            ))
        })
    }

    fn claim_email(&self, email: &str, id: Uuid) -> StoreResult<()> {
        match self.email_index.entry(email.to_string()) {
            Entry::Occupied(owner) if *owner.get() != id => Err(StoreError::new(format!(
                "duplicate key value violates unique constraint: email {email} already exists"
            ))),
            Entry::Occupied(_) => Ok(()),
            Entry::Vacant(slot) => {
                slot.insert(id);
                Ok(())
            }
        }
    }

    fn posts_of(&self, author_id: Uuid) -> Vec<Post> {
        let mut posts: Vec<Post> = self
            .posts
            .iter()
            .filter(|entry| entry.author_id == author_id)
            .map(|entry| entry.value().clone())
            .collect();
        posts.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        posts
    }

    fn with_author(&self, post: Post) -> StoreResult<PostWithAuthor> {
        let author = snapshot(self.profile(post.author_id)?.value());
        Ok(PostWithAuthor { post, author })
    }
}

fn snapshot(user: &User) -> Author {
    Author {
        id: user.id,
        name: user.name.clone(),
        email: user.email.clone(),
    }
}

#[async_trait]
impl RemoteStore for MemoryStore {
    async fn list_users(&self) -> StoreResult<Vec<User>> {
        let mut users: Vec<User> = self
            .users
            .iter()
            .map(|entry| entry.value().clone())
            .collect();

        // Sort by creation date (newest first)
        users.sort_by(|a, b| b.created_at.cmp(&a.created_at));

        for user in &mut users {
            user.posts = self.posts_of(user.id);
        }
        Ok(users)
    }

    async fn insert_user(&self, input: &UserInput) -> StoreResult<User> {
        let id = Uuid::new_v4();
        self.claim_email(&input.email, id)?;

        let now = self.now();
        let user = User {
            id,
            email: input.email.clone(),
            name: input.name.clone(),
            created_at: now,
            updated_at: now,
            posts: Vec::new(),
        };
        self.users.insert(id, user.clone());
        Ok(user)
    }

    async fn update_user(
        &self,
        id: Uuid,
        input: &UserInput,
        updated_at: DateTime<Utc>,
    ) -> StoreResult<User> {
        let previous = self
            .users
            .get(&id)
            .map(|user| (user.email.clone(), user.updated_at))
            .ok_or_else(|| StoreError::new(format!("profile {id} not found")))?;

        if previous.0 != input.email {
            self.claim_email(&input.email, id)?;
            self.email_index.remove(&previous.0);
        }

        let stamped = self.stamp_update(updated_at, previous.1);
        let mut user = self
            .users
            .get_mut(&id)
            .ok_or_else(|| StoreError::new(format!("profile {id} not found")))?;
        user.name = input.name.clone();
        user.email = input.email.clone();
        user.updated_at = stamped;

        Ok(user.clone())
    }

    async fn delete_user(&self, id: Uuid) -> StoreResult<()> {
        // The entry stays locked until removal, so no post can start
        // referencing the profile after the check.
        let Entry::Occupied(profile) = self.users.entry(id) else {
            return Ok(());
        };

        let referenced = self.posts.iter().any(|entry| entry.author_id == id);
        if referenced {
            match self.on_author_delete {
                AuthorDeletePolicy::Restrict => {
                    return Err(StoreError::new(format!(
                        "update or delete on table \"profiles\" violates foreign key \
                         constraint on table \"posts\": profile {id} is still referenced"
                    )));
                }
                AuthorDeletePolicy::Cascade => {
                    self.posts.retain(|_, post| post.author_id != id);
                }
            }
        }

        let (_, user) = profile.remove_entry();
        self.email_index.remove(&user.email);
        Ok(())
    }

    async fn list_posts(&self) -> StoreResult<Vec<PostWithAuthor>> {
        let mut posts: Vec<Post> = self
            .posts
            .iter()
            .map(|entry| entry.value().clone())
            .collect();

        // Sort by creation date (newest first)
        posts.sort_by(|a, b| b.created_at.cmp(&a.created_at));

        posts.into_iter().map(|post| self.with_author(post)).collect()
    }

    async fn insert_post(&self, input: &PostInput) -> StoreResult<PostWithAuthor> {
        let profile = self.profile(input.author_id)?;
        let now = self.now();
        let post = Post {
            id: Uuid::new_v4(),
            title: input.title.clone(),
            content: input.content.clone(),
            published: input.published,
            author_id: input.author_id,
            created_at: now,
            updated_at: now,
        };
        self.posts.insert(post.id, post.clone());
        Ok(PostWithAuthor {
            post,
            author: snapshot(&profile),
        })
    }

    async fn update_post(
        &self,
        id: Uuid,
        input: &PostInput,
        updated_at: DateTime<Utc>,
    ) -> StoreResult<PostWithAuthor> {
        let profile = self.profile(input.author_id)?;
        let previous = self
            .posts
            .get(&id)
            .map(|post| post.updated_at)
            .ok_or_else(|| StoreError::new(format!("post {id} not found")))?;

        let stamped = self.stamp_update(updated_at, previous);
        let mut post = self
            .posts
            .get_mut(&id)
            .ok_or_else(|| StoreError::new(format!("post {id} not found")))?;
        post.title = input.title.clone();
        post.content = input.content.clone();
        post.published = input.published;
        post.author_id = input.author_id;
        post.updated_at = stamped;

        Ok(PostWithAuthor {
            post: post.clone(),
            author: snapshot(&profile),
        })
    }

    async fn set_post_published(
        &self,
        id: Uuid,
        published: bool,
        updated_at: DateTime<Utc>,
    ) -> StoreResult<()> {
        let previous = self
            .posts
            .get(&id)
            .map(|post| post.updated_at)
            .ok_or_else(|| StoreError::new(format!("post {id} not found")))?;

        let stamped = self.stamp_update(updated_at, previous);
        if let Some(mut post) = self.posts.get_mut(&id) {
            post.published = published;
            post.updated_at = stamped;
        }
        Ok(())
    }

    async fn delete_post(&self, id: Uuid) -> StoreResult<()> {
        self.posts.remove(&id);
        Ok(())
    }
}
