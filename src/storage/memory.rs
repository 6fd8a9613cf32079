use super::errors::StoreError;
use super::random::random_index;
use super::types::{Quote, QuoteId};
use super::QuoteStorage;

use chrono::Utc;
use parking_lot::RwLock;

/// In-memory quote store.
///
/// The collection and the id counter live behind a single reader-writer lock:
/// `create` and `delete` hold the write guard for the whole check-then-mutate
/// sequence, reads share the read guard and return owned snapshots.
pub struct MemoryStorage {
    inner: RwLock<Inner>,
}

struct Inner {
    quotes: Vec<Quote>,
    next_id: u64,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(Inner {
                quotes: Vec::new(),
                next_id: 1,
            }),
        }
    }
}

impl Default for MemoryStorage {
    fn default() -> Self {
        Self::new()
    }
}

impl QuoteStorage for MemoryStorage {
    fn create(&self, author: &str, text: &str) -> Result<Quote, StoreError> {
        let mut inner = self.inner.write();

        if author.is_empty() || text.is_empty() {
            return Err(StoreError::InvalidData);
        }

        if inner
            .quotes
            .iter()
            .any(|existing| existing.author == author && existing.text == text)
        {
            return Err(StoreError::AlreadyExists);
        }

        let quote = Quote {
            id: QuoteId(inner.next_id),
            author: author.to_string(),
            text: text.to_string(),
            created_at: Utc::now(),
        };

        inner.quotes.push(quote.clone());
        inner.next_id += 1;

        Ok(quote)
    }

    fn get_all(&self) -> Vec<Quote> {
        self.inner.read().quotes.clone()
    }

    fn get_by_author(&self, author: &str) -> Vec<Quote> {
        self.inner
            .read()
            .quotes
            .iter()
            .filter(|quote| quote.author == author)
            .cloned()
            .collect()
    }

    fn get_random(&self) -> Result<Quote, StoreError> {
        let inner = self.inner.read();
        // Index is drawn while the read guard is held so the count is current.
        let index = random_index(inner.quotes.len()).ok_or(StoreError::NotFound)?;
        Ok(inner.quotes[index].clone())
    }

    fn delete(&self, id: QuoteId) -> Result<(), StoreError> {
        let mut inner = self.inner.write();

        let position = inner
            .quotes
            .iter()
            .position(|quote| quote.id == id)
            .ok_or(StoreError::NotFound)?;

        // `Vec::remove` shifts the tail left, keeping survivors in order.
        inner.quotes.remove(position);
        Ok(())
    }

    fn len(&self) -> usize {
        self.inner.read().quotes.len()
    }
}
