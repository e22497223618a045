//! Galeria library crate
//!
//! This library provides a typed client for the profile/image browsing API:
//! listing and looking up profiles, adding and deleting them, and resolving
//! the URLs of a profile's images.

pub mod api;
pub mod cli;
pub mod models;

pub use api::{ClientConfig, ClientError, HttpClientImpl, ProfileApi};
pub use models::{
    AddProfileParams, DeleteProfileParams, Image, MutationReply, MutationStatus, Profile,
    ProfileLookup,
};
