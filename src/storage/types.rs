use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Store-assigned identifier of a quote.
///
/// Ids are handed out sequentially starting at 1 and are never reused
/// for the lifetime of the process, even after the quote is deleted.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(transparent)]
pub struct QuoteId(pub u64);

impl fmt::Display for QuoteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// An immutable quote record as held by the store.
///
/// Callers always receive clones; the store keeps the only authoritative copy.
/// On the wire the text is exposed under the `quote` key.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Quote {
    pub id: QuoteId,
    pub author: String,
    #[serde(rename = "quote")]
    pub text: String,
    pub created_at: DateTime<Utc>,
}
