//! HTTP client implementation
//!
//! This module provides the reqwest-backed client for the remote profile API.

use std::sync::Arc;

use reqwest::{Client as ReqwestClient, Error as ReqwestError, Response, StatusCode};
use serde::de::DeserializeOwned;

use super::ProfileApi;
use crate::models::{AddProfileParams, DeleteProfileParams, Image, MutationReply, Profile};

/// Environment variable holding the API base URL
pub const URL_API_ENV: &str = "URL_API";

/// Name the web front end uses for the same setting; read when `URL_API` is absent
pub const LEGACY_URL_API_ENV: &str = "NEXT_PUBLIC_URL_API";

/// Base URL used when none is configured
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080";

/// API client configuration
///
/// `new` is the normalising constructor. A config built literally is normalised
/// again by `HttpClientImpl::with_config`.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub base_url: String,
}

impl ClientConfig {
    /// Create a configuration for the given base URL. Trailing slashes are dropped.
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Read the base URL from `URL_API`, falling back to `NEXT_PUBLIC_URL_API`
    pub fn from_env() -> Result<Self, ClientError> {
        [URL_API_ENV, LEGACY_URL_API_ENV]
            .iter()
            .filter_map(|name| std::env::var(name).ok())
            .find(|url| !url.trim().is_empty())
            .map(|url| Self::new(url.trim()))
            .ok_or_else(|| ClientError::Config(format!("{} is not set", URL_API_ENV)))
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

/// Client errors
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("HTTP error: {0}")]
    Http(#[from] ReqwestError),

    #[error("{message}")]
    Request { status: u16, message: String },

    #[error("Unexpected response from {path}: {source}")]
    Decode {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("No images found for profile {profile_id}")]
    NoImages { profile_id: i64 },

    #[error("Configuration error: {0}")]
    Config(String),
}

impl ClientError {
    /// HTTP status of a rejected read, if that is what this error is
    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::Request { status, .. } => Some(*status),
            ClientError::Http(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}

/// HTTP implementation of the profile API client
#[derive(Debug, Clone)]
pub struct HttpClientImpl {
    http_client: Arc<ReqwestClient>,
    config: ClientConfig,
}

impl HttpClientImpl {
    /// Create a new client with default configuration
    pub fn new() -> Self {
        Self::with_config(ClientConfig::default())
    }

    /// Create a new client with custom configuration
    pub fn with_config(config: ClientConfig) -> Self {
        Self {
            http_client: Arc::new(ReqwestClient::new()),
            config: ClientConfig::new(config.base_url),
        }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    fn url(&self, path: &str) -> String {
        let url = format!("{}{}", self.config.base_url, path);
        tracing::debug!("{}", url);
        url
    }

    /// GET `base_url + path` and decode the JSON body as `T`
    pub async fn fetch_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ClientError> {
        let url = self.url(path);
        let response = self.http_client.get(&url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ClientError::Request {
                status: status.as_u16(),
                message: status_text(status),
            });
        }

        decode(path, response).await
    }
}

impl Default for HttpClientImpl {
    fn default() -> Self {
        Self::new()
    }
}

fn status_text(status: StatusCode) -> String {
    status
        .canonical_reason()
        .map(str::to_string)
        .unwrap_or_else(|| status.as_str().to_string())
}

async fn decode<T: DeserializeOwned>(path: &str, response: Response) -> Result<T, ClientError> {
    let body = response.bytes().await?;
    serde_json::from_slice(&body).map_err(|source| ClientError::Decode {
        path: path.to_string(),
        source,
    })
}

#[async_trait::async_trait]
impl ProfileApi for HttpClientImpl {
    async fn get_profiles(&self) -> Result<Vec<Profile>, ClientError> {
        self.fetch_json("/perfil").await
    }

    async fn get_images_by_profile(&self, profile_id: i64) -> Result<Vec<Image>, ClientError> {
        self.fetch_json(&format!("/imagenesPorPerfil/{}", profile_id)).await
    }

    async fn add_profile(&self, params: AddProfileParams) -> Result<MutationReply, ClientError> {
        let path = "/perfil/agregar";
        let url = self.url(path);
        let response = self.http_client.post(&url).json(&params).send().await?;

        if !response.status().is_success() {
            let body = response.text().await?;
            tracing::warn!("Adding profile {:?} failed: {}", params.nombre, body);
            return Ok(MutationReply::failed(format!("Error agregando perfil: {}", body)));
        }

        let profile: Profile = decode(path, response).await?;
        Ok(MutationReply::succeeded(format!("Perfil {} agregado con éxito!", profile.nombre)))
    }

    async fn delete_profile(
        &self,
        params: DeleteProfileParams,
    ) -> Result<MutationReply, ClientError> {
        let url = self.url("/perfil/borrar");
        let response = self.http_client.delete(&url).json(&params).send().await?;

        if !response.status().is_success() {
            let body = response.text().await?;
            tracing::warn!("Deleting profile {} failed: {}", params.id, body);
            return Ok(MutationReply::failed(format!("Error borrando perfil: {}", body)));
        }

        Ok(MutationReply::succeeded(format!("Perfil con ID {} borrado con éxito!", params.id)))
    }

    fn image_url(&self, image_id: i64) -> String {
        format!("{}/imagen/{}", self.config.base_url, image_id)
    }
}
