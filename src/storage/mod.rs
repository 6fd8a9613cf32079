//! Quote Storage Module
//!
//! Owns the authoritative collection of quotes for the lifetime of the process.
//!
//! ## Core Concepts
//! - **Identity**: Ids are assigned by the store, sequentially from 1, and never reused.
//! - **Uniqueness**: No two stored quotes share the same `(author, text)` pair (exact match).
//! - **Concurrency**: Mutations are exclusive, reads run in parallel; every read returns a
//!   snapshot copy that later mutations cannot affect.
//! - **Contract**: `QuoteStorage` is the seam the HTTP layer depends on; `MemoryStorage`
//!   is the in-memory implementation.

pub mod errors;
pub mod memory;
pub mod random;
pub mod types;


use std::sync::Arc;

pub use errors::StoreError;
pub use memory::MemoryStorage;
pub use types::{Quote, QuoteId};

/// Shared handle passed to the request handlers.
pub type SharedStorage = Arc<dyn QuoteStorage>;

/// Operations every quote store provides.
///
/// All operations are synchronous and complete before returning. Errors are
/// reported to the caller as-is; implementations never log or retry.
pub trait QuoteStorage: Send + Sync {
    /// Validates, rejects duplicates, then stores a new quote with the next id.
    fn create(&self, author: &str, text: &str) -> Result<Quote, StoreError>;

    /// All quotes in insertion order.
    fn get_all(&self) -> Vec<Quote>;

    /// Quotes whose author exactly equals `author`, in insertion order.
    fn get_by_author(&self, author: &str) -> Vec<Quote>;

    /// One quote picked uniformly at random, or `NotFound` when empty.
    fn get_random(&self) -> Result<Quote, StoreError>;

    /// Removes the quote with `id`, or `NotFound` if there is none.
    fn delete(&self, id: QuoteId) -> Result<(), StoreError>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
