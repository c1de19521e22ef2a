//! Core utilities for the fantasy pipeline
//!
//! This module consolidates common utilities that are used across
//! the application:
//! - `cache`: File system cache for fetched box-score payloads
//! - `http`: HTTP client construction with timeouts

pub mod cache;
pub mod http;

// Re-export commonly used items for convenience
pub use cache::{cache_root, payload_cache_path, try_read_to_string, write_string};
pub use http::build_client;
