use std::collections::HashMap;

use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::{
    models::{NewPost, Post, PostPatch, DEFAULT_IMAGE_URL},
    Error, Result,
};

#[derive(Default)]
struct Posts {
    by_id: HashMap<String, Post>,
    /// Ids in insertion order.
    order: Vec<String>,
}

impl Posts {
    fn insert(&mut self, post: Post) {
        if !self.by_id.contains_key(&post.id) {
            self.order.push(post.id.clone());
        }
        self.by_id.insert(post.id.clone(), post);
    }

    fn iter(&self) -> impl Iterator<Item = &Post> {
        self.order.iter().filter_map(|id| self.by_id.get(id))
    }

    fn fresh_id(&self) -> String {
        loop {
            let id = Uuid::new_v4().to_string();
            if !self.by_id.contains_key(&id) {
                return id;
            }
        }
    }
}

/// In-memory post repository.
///
/// Writes are serialized behind a single lock; reads share it. Every read
/// hands out clones, so callers never observe or cause partial writes.
#[derive(Default)]
pub struct PostStore {
    posts: RwLock<Posts>,
}

impl PostStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populated store. A repeated id replaces the earlier post in place.
    pub fn with_posts(posts: impl IntoIterator<Item = Post>) -> Self {
        let mut inner = Posts::default();
        for post in posts {
            inner.insert(post);
        }
        Self {
            posts: RwLock::new(inner),
        }
    }

    pub async fn len(&self) -> usize {
        self.posts.read().await.order.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }

    /// All posts, newest first. Posts created at the same instant keep
    /// insertion order.
    pub async fn list_all(&self) -> Vec<Post> {
        let mut posts: Vec<Post> = self.posts.read().await.iter().cloned().collect();
        posts.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        posts
    }

    pub async fn get_by_id(&self, id: &str) -> Result<Post> {
        self.posts
            .read()
            .await
            .by_id
            .get(id)
            .cloned()
            .ok_or(Error::NotFound)
    }

    pub async fn create(&self, input: NewPost) -> Result<Post> {
        let missing = input.missing_fields();
        if !missing.is_empty() {
            tracing::debug!("Rejected post with missing fields: {:?}", missing);
            return Err(Error::Validation(format!(
                "Missing required fields: {}",
                missing.join(", ")
            )));
        }

        let NewPost {
            title,
            content,
            author,
            tags,
            image_url,
        } = input;

        let mut posts = self.posts.write().await;
        let post = Post {
            id: posts.fresh_id(),
            title: title.unwrap_or_default(),
            content: content.unwrap_or_default(),
            author: author.unwrap_or_default(),
            created_at: Utc::now(),
            updated_at: None,
            tags: tags.unwrap_or_default(),
            image_url: image_url
                .filter(|url| !url.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_IMAGE_URL.to_string()),
        };
        posts.insert(post.clone());

        tracing::info!("Created post {} by {}", post.id, post.author);
        Ok(post)
    }

    /// Merges `patch` into the post and stamps `updated_at`, even when no
    /// field actually changed.
    pub async fn update(&self, id: &str, patch: PostPatch) -> Result<Post> {
        let mut posts = self.posts.write().await;
        let post = posts.by_id.get_mut(id).ok_or(Error::NotFound)?;

        patch.apply_to(post);
        post.updated_at = Some(Utc::now());

        tracing::info!("Updated post {}", id);
        Ok(post.clone())
    }

    pub async fn delete(&self, id: &str) -> Result<()> {
        let mut posts = self.posts.write().await;
        if posts.by_id.remove(id).is_none() {
            return Err(Error::NotFound);
        }
        posts.order.retain(|existing| existing != id);

        tracing::info!("Deleted post {}", id);
        Ok(())
    }

    /// Posts carrying `tag` (case-insensitive), in store order.
    pub async fn filter_by_tag(&self, tag: &str) -> Vec<Post> {
        self.posts
            .read()
            .await
            .iter()
            .filter(|post| post.has_tag(tag))
            .cloned()
            .collect()
    }

    /// Substring search over title, content, author and tags, in store order.
    pub async fn search(&self, query: &str) -> Result<Vec<Post>> {
        if query.trim().is_empty() {
            return Err(Error::Validation("Search query is required".to_string()));
        }

        let needle = query.to_lowercase();
        Ok(self
            .posts
            .read()
            .await
            .iter()
            .filter(|post| post.matches(&needle))
            .cloned()
            .collect())
    }
}
