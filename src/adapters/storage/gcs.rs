//! Google Cloud Storage gateway

use super::traits::StorageGateway;
use crate::config::StorageConfig;
use crate::domain::{BucketName, ObjectName, ObjectRef, Result, StorageError};
use async_trait::async_trait;
use google_cloud_storage::client::{Client, ClientConfig};
use google_cloud_storage::http::objects::download::Range;
use google_cloud_storage::http::objects::get::GetObjectRequest;
use google_cloud_storage::http::objects::list::ListObjectsRequest;
use google_cloud_storage::http::objects::upload::{Media, UploadObjectRequest, UploadType};

/// [`StorageGateway`] backed by the Cloud Storage JSON API
pub struct GcsGateway {
    client: Client,
}

impl GcsGateway {
    /// Build a client from configuration
    ///
    /// With `endpoint` set the client talks to that endpoint anonymously (emulators);
    /// otherwise Application Default Credentials are used.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Client`] if credentials cannot be resolved.
    pub async fn new(config: &StorageConfig) -> Result<Self> {
        let client_config = match &config.endpoint {
            Some(endpoint) => {
                tracing::info!(endpoint = %endpoint, "Using custom storage endpoint");
                let mut client_config = ClientConfig::default().anonymous();
                client_config.storage_endpoint = endpoint.clone();
                client_config
            }
            None => ClientConfig::default()
                .with_auth()
                .await
                .map_err(|e| StorageError::Client(e.to_string()))?,
        };

        Ok(Self::from_client(Client::new(client_config)))
    }

    /// Wrap an existing client
    pub fn from_client(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl StorageGateway for GcsGateway {
    async fn list(&self, bucket: &BucketName, prefix: &str) -> Result<Vec<ObjectName>> {
        let mut names = Vec::new();
        let mut page_token: Option<String> = None;
        let mut pages = 0usize;

        loop {
            let request = ListObjectsRequest {
                bucket: bucket.to_string(),
                prefix: (!prefix.is_empty()).then(|| prefix.to_string()),
                page_token: page_token.take(),
                ..Default::default()
            };

            let response = self
                .client
                .list_objects(&request)
                .await
                .map_err(|e| StorageError::ListFailed {
                    bucket: bucket.to_string(),
                    message: e.to_string(),
                })?;
            pages += 1;

            for object in response.items.unwrap_or_default() {
                match ObjectName::new(object.name) {
                    Ok(name) => names.push(name),
                    Err(e) => {
                        tracing::warn!(bucket = %bucket, error = %e, "Skipping unnamed object")
                    }
                }
            }

            match response.next_page_token {
                Some(token) if !token.is_empty() => page_token = Some(token),
                _ => break,
            }
        }

        tracing::debug!(bucket = %bucket, pages, objects = names.len(), "Listed bucket");
        Ok(names)
    }

    async fn download(&self, object: &ObjectRef) -> Result<Vec<u8>> {
        let request = GetObjectRequest {
            bucket: object.bucket.to_string(),
            object: object.name.to_string(),
            ..Default::default()
        };

        let data = self
            .client
            .download_object(&request, &Range::default())
            .await
            .map_err(|e| StorageError::DownloadFailed {
                bucket: object.bucket.to_string(),
                object: object.name.to_string(),
                message: e.to_string(),
            })?;

        Ok(data)
    }

    async fn upload(&self, object: &ObjectRef, content_type: &str, data: Vec<u8>) -> Result<()> {
        let mut media = Media::new(object.name.to_string());
        media.content_type = content_type.to_string().into();
        let upload_type = UploadType::Simple(media);

        let request = UploadObjectRequest {
            bucket: object.bucket.to_string(),
            ..Default::default()
        };

        self.client
            .upload_object(&request, data, &upload_type)
            .await
            .map_err(|e| StorageError::UploadFailed {
                bucket: object.bucket.to_string(),
                object: object.name.to_string(),
                message: e.to_string(),
            })?;

        Ok(())
    }
}
