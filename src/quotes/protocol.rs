//! Quotes HTTP Protocol
//!
//! Defines the API endpoints and Data Transfer Objects (DTOs) exchanged with clients.
//! Stored quotes themselves are serialized directly from `storage::Quote`.

use serde::{Deserialize, Serialize};

// --- API Endpoints ---

/// Collection endpoint: `GET` lists (optionally by author), `POST` creates.
pub const ENDPOINT_QUOTES: &str = "/quotes";
/// Returns one quote picked at random.
pub const ENDPOINT_RANDOM: &str = "/quotes/random";
/// Deletes a single quote by id.
pub const ENDPOINT_QUOTE_BY_ID: &str = "/quotes/:id";
/// Liveness probe reporting the current store size.
pub const ENDPOINT_HEALTH: &str = "/health";

// --- Error codes ---

pub const ERR_CODE_INVALID_REQUEST: &str = "invalid_request";
pub const ERR_CODE_ALREADY_EXISTS: &str = "already_exists";
pub const ERR_CODE_NOT_FOUND: &str = "not_found";

// --- Data Transfer Objects ---

/// Body of `POST /quotes`.
///
/// Missing fields deserialize as empty strings so that they are rejected by
/// validation rather than by the JSON decoder.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct CreateQuoteRequest {
    #[serde(default)]
    pub author: String,
    #[serde(default, rename = "quote")]
    pub text: String,
}

/// Query string of `GET /quotes`. An empty `author` means "no filter".
#[derive(Debug, Default, Deserialize)]
pub struct ListQuotesParams {
    pub author: Option<String>,
}

/// Body of every error response.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub quotes: usize,
}
