//! Client module
//!
//! This module provides HTTP client functionality to interact with the remote profile API.

mod http;
mod trait_def;

// Re-export the trait and types
pub use http::{ClientConfig, ClientError, HttpClientImpl, DEFAULT_BASE_URL, URL_API_ENV};
pub use trait_def::ProfileApi;
