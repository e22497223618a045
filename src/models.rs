//! Core models for the galeria library
//!
//! This module contains the data shapes exchanged with the remote profile API.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A named profile as returned by the API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub id: i64,
    pub nombre: String,
    /// Any additional fields the server sends along
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Profile {
    /// Creates a profile with no extra fields
    pub fn new(id: i64, nombre: impl Into<String>) -> Self {
        Self {
            id,
            nombre: nombre.into(),
            extra: Map::new(),
        }
    }
}

/// An image belonging to a profile. The association lives on the server.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Image {
    pub id: i64,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Image {
    pub fn new(id: i64) -> Self {
        Self {
            id,
            extra: Map::new(),
        }
    }
}

/// Outcome of looking a profile up by id
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "estado", content = "perfil", rename_all = "snake_case")]
pub enum ProfileLookup {
    Found(Profile),
    NotFound,
}

impl ProfileLookup {
    pub fn is_found(&self) -> bool {
        matches!(self, ProfileLookup::Found(_))
    }

    /// Consumes the lookup, returning the profile if one was found
    pub fn into_profile(self) -> Option<Profile> {
        match self {
            ProfileLookup::Found(profile) => Some(profile),
            ProfileLookup::NotFound => None,
        }
    }
}

impl From<Option<Profile>> for ProfileLookup {
    fn from(profile: Option<Profile>) -> Self {
        profile.map_or(ProfileLookup::NotFound, ProfileLookup::Found)
    }
}

/// Request body for creating a profile
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AddProfileParams {
    pub nombre: String,
}

/// Request body for deleting a profile
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DeleteProfileParams {
    pub id: i64,
}

/// Whether a mutation was accepted by the server
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MutationStatus {
    Succeeded,
    Failed,
}

/// Result of an add/delete call.
///
/// A rejected mutation is not an error: the server's explanation ends up in
/// `mensaje` and `status` is `Failed`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MutationReply {
    pub mensaje: String,
    pub status: MutationStatus,
}

impl MutationReply {
    pub fn succeeded(mensaje: impl Into<String>) -> Self {
        Self {
            mensaje: mensaje.into(),
            status: MutationStatus::Succeeded,
        }
    }

    pub fn failed(mensaje: impl Into<String>) -> Self {
        Self {
            mensaje: mensaje.into(),
            status: MutationStatus::Failed,
        }
    }

    pub fn is_success(&self) -> bool {
        self.status == MutationStatus::Succeeded
    }
}
