//! API module
//!
//! This module provides access to the remote profile API.

pub mod client;

// Re-export commonly used types
pub use client::{ClientConfig, ClientError, HttpClientImpl, ProfileApi};
