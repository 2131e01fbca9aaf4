//! Recent-message cache
//!
//! Telegram reaction updates carry the chat and message id but not the
//! message text, so the bot keeps a bounded in-memory map of recently seen
//! translatable messages. The message handler fills it and the reaction
//! handler consults it; entries are evicted oldest-first at capacity.

use std::collections::{HashMap, VecDeque};
use teloxide::types::{ChatId, MessageId};
use tokio::sync::RwLock;
use tracing::trace;

type CacheKey = (ChatId, MessageId);

#[derive(Debug, Default)]
struct CacheInner {
    entries: HashMap<CacheKey, String>,
    order: VecDeque<CacheKey>,
}

/// Bounded FIFO cache of message texts keyed by (chat, message)
#[derive(Debug)]
pub struct MessageCache {
    capacity: usize,
    inner: RwLock<CacheInner>,
}

impl MessageCache {
    /// Create a cache holding at most `capacity` messages
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity: capacity.max(1),
            inner: RwLock::new(CacheInner::default()),
        }
    }

    /// Record the text of a message, evicting the oldest entries at capacity
    pub async fn insert(&self, chat_id: ChatId, message_id: MessageId, text: String) {
        let key = (chat_id, message_id);
        let mut inner = self.inner.write().await;

        // An edited message replaces its text without a new eviction slot
        if inner.entries.insert(key, text).is_none() {
            inner.order.push_back(key);
        }

        while inner.entries.len() > self.capacity {
            match inner.order.pop_front() {
                Some((chat, msg)) => {
                    inner.entries.remove(&(chat, msg));
                    trace!(chat_id = chat.0, message_id = msg.0, "Evicted cached message");
                }
                None => break,
            }
        }
    }

    /// Look up the cached text of a message
    pub async fn get(&self, chat_id: ChatId, message_id: MessageId) -> Option<String> {
        let inner = self.inner.read().await;
        inner.entries.get(&(chat_id, message_id)).cloned()
    }

    /// Number of cached messages
    pub async fn len(&self) -> usize {
        self.inner.read().await.entries.len()
    }

    /// Whether the cache is empty
    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_insert_and_get() {
        let cache = MessageCache::new(8);
        assert!(cache.is_empty().await);

        cache.insert(ChatId(1), MessageId(10), "hello".to_string()).await;

        assert!(!cache.is_empty().await);
        assert_eq!(cache.get(ChatId(1), MessageId(10)).await, Some("hello".to_string()));
        assert_eq!(cache.get(ChatId(1), MessageId(11)).await, None);
        assert_eq!(cache.get(ChatId(2), MessageId(10)).await, None);
    }

    #[tokio::test]
    async fn test_eviction_is_oldest_first() {
        let cache = MessageCache::new(2);
        cache.insert(ChatId(1), MessageId(1), "first".to_string()).await;
        cache.insert(ChatId(1), MessageId(2), "second".to_string()).await;
        cache.insert(ChatId(1), MessageId(3), "third".to_string()).await;

        assert_eq!(cache.len().await, 2);
        assert_eq!(cache.get(ChatId(1), MessageId(1)).await, None);
        assert_eq!(cache.get(ChatId(1), MessageId(2)).await, Some("second".to_string()));
        assert_eq!(cache.get(ChatId(1), MessageId(3)).await, Some("third".to_string()));
    }

    #[tokio::test]
    async fn test_reinsert_replaces_text_without_growing() {
        let cache = MessageCache::new(2);
        cache.insert(ChatId(1), MessageId(1), "original".to_string()).await;
        cache.insert(ChatId(1), MessageId(1), "edited".to_string()).await;

        assert_eq!(cache.len().await, 1);
        assert_eq!(cache.get(ChatId(1), MessageId(1)).await, Some("edited".to_string()));
    }
}
