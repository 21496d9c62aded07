// In-memory post store backing the /posts endpoints. Nothing is persisted.

use std::sync::atomic::{AtomicU64, Ordering};

use chrono::Utc;
use snsfetch_common::{SnsPost, SnsPostCreate};
use tokio::sync::RwLock;

/// Source of post ids.
pub trait IdSequence: Send + Sync {
    fn next_id(&self) -> u64;
}

/// Monotonic ids starting at 1.
pub struct CounterSequence(AtomicU64);

impl CounterSequence {
    pub fn new() -> Self {
        Self(AtomicU64::new(1))
    }
}

impl Default for CounterSequence {
    fn default() -> Self {
        Self::new()
    }
}

impl IdSequence for CounterSequence {
    fn next_id(&self) -> u64 {
        self.0.fetch_add(1, Ordering::SeqCst)
    }
}

pub struct PostStore {
    posts: RwLock<Vec<SnsPost>>,
    ids: Box<dyn IdSequence>,
}

impl PostStore {
    pub fn new() -> Self {
        Self::with_sequence(CounterSequence::new())
    }

    pub fn with_sequence(ids: impl IdSequence + 'static) -> Self {
        Self {
            posts: RwLock::new(Vec::new()),
            ids: Box::new(ids),
        }
    }

    /// All posts in insertion order, optionally only those whose platform
    /// label equals `platform` exactly.
    pub async fn list(&self, platform: Option<&str>) -> Vec<SnsPost> {
        let posts = self.posts.read().await;
        match platform {
            Some(platform) => posts
                .iter()
                .filter(|post| post.platform == platform)
                .cloned()
                .collect(),
            None => posts.clone(),
        }
    }

    pub async fn get(&self, id: u64) -> Option<SnsPost> {
        self.posts.read().await.iter().find(|post| post.id == id).cloned()
    }

    pub async fn create(&self, input: SnsPostCreate) -> SnsPost {
        let post = SnsPost {
            id: self.ids.next_id(),
            platform: input.platform,
            content: input.content,
            author: input.author,
            created_at: Utc::now(),
            url: input.url,
        };
        self.posts.write().await.push(post.clone());
        post
    }

    /// Replace a post's fields, keeping its id and `created_at`.
    pub async fn update(&self, id: u64, input: SnsPostCreate) -> Option<SnsPost> {
        let mut posts = self.posts.write().await;
        let post = posts.iter_mut().find(|post| post.id == id)?;
        post.platform = input.platform;
        post.content = input.content;
        post.author = input.author;
        post.url = input.url;
        Some(post.clone())
    }

    pub async fn delete(&self, id: u64) -> Option<SnsPost> {
        let mut posts = self.posts.write().await;
        let index = posts.iter().position(|post| post.id == id)?;
        Some(posts.remove(index))
    }
}

impl Default for PostStore {
    fn default() -> Self {
        Self::new()
    }
}
