//! Quotes Service Library
//!
//! This library crate defines the modules of the quotes HTTP service.
//! It serves as the foundation for the binary executable (`main.rs`).
//!
//! ## Architecture Modules
//! - **`storage`**: The in-memory quote store. Owns the collection, assigns ids,
//!   rejects duplicates and serializes concurrent access behind a reader-writer lock.
//! - **`quotes`**: The HTTP request adapter. Maps requests onto store operations and
//!   store outcomes onto status codes with JSON bodies.
//! - **`config`**: Command-line and environment configuration.
//! - **`logging`**: Tracing subscriber setup.

pub mod config;
pub mod logging;
pub mod quotes;
pub mod storage;
