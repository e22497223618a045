//! Client trait definition
//!
//! This module defines the `ProfileApi` trait that abstracts over different client implementations.
//! Only the primitive round trips are required; lookups and image URL resolution are
//! provided on top of them.

use super::ClientError;
use crate::models::{
    AddProfileParams, DeleteProfileParams, Image, MutationReply, Profile, ProfileLookup,
};

/// Trait defining the API client interface for the profile service
#[async_trait::async_trait]
pub trait ProfileApi: Send + Sync {
    /// List every profile
    async fn get_profiles(&self) -> Result<Vec<Profile>, ClientError>;

    /// List the images of a profile, in the order the server returns them
    async fn get_images_by_profile(&self, profile_id: i64) -> Result<Vec<Image>, ClientError>;

    /// Create a profile. A rejection by the server is reported in the reply, not as an error.
    async fn add_profile(&self, params: AddProfileParams) -> Result<MutationReply, ClientError>;

    /// Delete a profile. A rejection by the server is reported in the reply, not as an error.
    async fn delete_profile(
        &self,
        params: DeleteProfileParams,
    ) -> Result<MutationReply, ClientError>;

    /// URL from which a single image can be fetched
    fn image_url(&self, image_id: i64) -> String;

    /// Find a profile by id. A missing id is `NotFound`; a failed fetch is an error.
    async fn get_profile(&self, profile_id: i64) -> Result<ProfileLookup, ClientError> {
        let profiles = self.get_profiles().await.map_err(|e| {
            tracing::error!("Error fetching profile {}: {}", profile_id, e);
            e
        })?;

        Ok(profiles.into_iter().find(|p| p.id == profile_id).into())
    }

    /// Image URLs for a profile, in server order
    async fn get_image_urls_by_profile(&self, profile_id: i64) -> Result<Vec<String>, ClientError> {
        let images = self.get_images_by_profile(profile_id).await?;
        Ok(images.iter().map(|i| self.image_url(i.id)).collect())
    }

    /// URL of the last image the server lists for a profile.
    ///
    /// Relies on the server listing images oldest first; no local sorting is done.
    async fn get_latest_image_url_by_profile(
        &self,
        profile_id: i64,
    ) -> Result<String, ClientError> {
        let result = self
            .get_image_urls_by_profile(profile_id)
            .await
            .and_then(|mut urls| urls.pop().ok_or(ClientError::NoImages { profile_id }));

        if let Err(e) = &result {
            tracing::error!("Error fetching latest image URL: {}", e);
        }

        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::collections::HashMap;

    /// In-memory implementation used to exercise the provided methods
    struct StaticApi {
        profiles: Result<Vec<Profile>, u16>,
        images: HashMap<i64, Vec<Image>>,
    }

    impl StaticApi {
        fn with_profiles(profiles: Vec<Profile>) -> Self {
            Self {
                profiles: Ok(profiles),
                images: HashMap::new(),
            }
        }

        fn failing(status: u16) -> Self {
            Self {
                profiles: Err(status),
                images: HashMap::new(),
            }
        }
    }

    #[async_trait::async_trait]
    impl ProfileApi for StaticApi {
        async fn get_profiles(&self) -> Result<Vec<Profile>, ClientError> {
            self.profiles.clone().map_err(|status| ClientError::Request {
                status,
                message: "Internal Server Error".to_string(),
            })
        }

        async fn get_images_by_profile(&self, profile_id: i64) -> Result<Vec<Image>, ClientError> {
            self.images
                .get(&profile_id)
                .cloned()
                .ok_or(ClientError::Request {
                    status: 404,
                    message: "Not Found".to_string(),
                })
        }

        async fn add_profile(
            &self,
            params: AddProfileParams,
        ) -> Result<MutationReply, ClientError> {
            Ok(MutationReply::succeeded(params.nombre))
        }

        async fn delete_profile(
            &self,
            params: DeleteProfileParams,
        ) -> Result<MutationReply, ClientError> {
            Ok(MutationReply::succeeded(params.id.to_string()))
        }

        fn image_url(&self, image_id: i64) -> String {
            format!("http://api.test/imagen/{}", image_id)
        }
    }

    #[tokio::test]
    async fn test_get_profile_found() {
        let api = StaticApi::with_profiles(vec![Profile::new(1, "Ana"), Profile::new(2, "Beto")]);

        let lookup = api.get_profile(2).await.unwrap();
        assert_eq!(lookup, ProfileLookup::Found(Profile::new(2, "Beto")));
    }

    #[tokio::test]
    async fn test_get_profile_not_found_is_not_an_error() {
        let api = StaticApi::with_profiles(vec![Profile::new(1, "Ana")]);

        let lookup = api.get_profile(9).await.unwrap();
        assert_eq!(lookup, ProfileLookup::NotFound);
    }

    #[tokio::test]
    async fn test_get_profile_on_empty_list() {
        let api = StaticApi::with_profiles(Vec::new());
        assert_eq!(api.get_profile(1).await.unwrap(), ProfileLookup::NotFound);
    }

    #[tokio::test]
    async fn test_get_profile_propagates_fetch_failure() {
        let api = StaticApi::failing(500);

        match api.get_profile(1).await {
            Err(ClientError::Request { status, .. }) => assert_eq!(status, 500),
            other => panic!("expected request error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_image_urls_keep_server_order() {
        let mut api = StaticApi::with_profiles(Vec::new());
        api.images.insert(4, vec![Image::new(30), Image::new(10), Image::new(20)]);

        let urls = api.get_image_urls_by_profile(4).await.unwrap();
        assert_eq!(
            urls,
            vec![
                "http://api.test/imagen/30".to_string(),
                "http://api.test/imagen/10".to_string(),
                "http://api.test/imagen/20".to_string(),
            ]
        );
    }

    #[tokio::test]
    async fn test_latest_image_is_last_by_position() {
        let mut api = StaticApi::with_profiles(Vec::new());
        api.images.insert(4, vec![Image::new(30), Image::new(10), Image::new(20)]);

        let latest = api.get_latest_image_url_by_profile(4).await.unwrap();
        assert_eq!(latest, "http://api.test/imagen/20");
    }

    #[tokio::test]
    async fn test_latest_image_without_images() {
        let mut api = StaticApi::with_profiles(Vec::new());
        api.images.insert(4, Vec::new());

        match api.get_latest_image_url_by_profile(4).await {
            Err(ClientError::NoImages { profile_id }) => assert_eq!(profile_id, 4),
            other => panic!("expected no-images error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_latest_image_propagates_fetch_failure() {
        let api = StaticApi::with_profiles(Vec::new());

        let result = api.get_latest_image_url_by_profile(4).await;
        assert!(matches!(result, Err(ClientError::Request { status: 404, .. })));
    }
}
