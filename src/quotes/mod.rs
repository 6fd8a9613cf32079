//! Quotes HTTP Module
//!
//! The request adapter between clients and the quote store. It parses requests,
//! performs the first round of input validation, calls the store and translates
//! store results and errors into status codes with JSON bodies.
//!
//! ## Submodules
//! - **`handlers`**: Axum request handlers and the router.
//! - **`errors`**: `ApiError`, the mapping from store errors to HTTP responses.
//! - **`protocol`**: Endpoint paths, error codes and request/response DTOs.

pub mod errors;
pub mod handlers;
pub mod protocol;


pub use handlers::router;
