use async_trait::async_trait;

use crate::error::AppError;

/// Blob store for uploaded images, keyed by `<namespace>/<file>`.
#[async_trait]
pub trait StorageClient: Send + Sync {
    /// Upload content to the given key.
    async fn put_object(
        &self,
        key: &str,
        content: Vec<u8>,
        content_type: &str,
    ) -> Result<(), AppError>;

    /// Retrieve content by key. Returns `None` if the object doesn't exist.
    async fn get_object(&self, key: &str) -> Result<Option<Vec<u8>>, AppError>;

    /// Whether an object exists under the given key.
    async fn object_exists(&self, key: &str) -> Result<bool, AppError>;

    /// Remove the object stored under the given key.
    async fn delete_object(&self, key: &str) -> Result<(), AppError>;
}

/// [`StorageClient`] backed by an S3-compatible bucket.
#[cfg(feature = "ssr")]
pub struct S3StorageClient {
    client: aws_sdk_s3::Client,
    bucket: String,
}

#[cfg(feature = "ssr")]
impl S3StorageClient {
    /// Create an S3 storage client from the `s3` configuration section.
    ///
    /// Credentials come from the usual AWS provider chain. A custom endpoint
    /// (MinIO, LocalStack) usually also needs `force_path_style`.
    pub async fn from_config(settings: &crate::config::S3Settings) -> Self {
        let mut config_loader = aws_config::defaults(aws_config::BehaviorVersion::latest())
            .region(aws_sdk_s3::config::Region::new(settings.region.clone()));

        if let Some(endpoint) = &settings.endpoint {
            config_loader = config_loader.endpoint_url(endpoint);
        }

        let sdk_config = config_loader.load().await;
        let s3_config = aws_sdk_s3::config::Builder::from(&sdk_config)
            .force_path_style(settings.force_path_style)
            .build();

        Self {
            client: aws_sdk_s3::Client::from_conf(s3_config),
            bucket: settings.bucket.clone(),
        }
    }

    /// Wrap an already configured SDK client.
    pub fn new(client: aws_sdk_s3::Client, bucket: String) -> Self {
        Self { client, bucket }
    }
}

/// Cache header stored with every object. Uploaded names are never reused.
#[cfg(feature = "ssr")]
pub const IMMUTABLE_CACHE: &str = "public, max-age=31536000, immutable";

#[cfg(feature = "ssr")]
fn storage_err(action: &str, key: &str, err: impl std::fmt::Display) -> AppError {
    AppError::Storage(format!("{action} '{key}': {err}"))
}

#[cfg(feature = "ssr")]
#[async_trait]
impl StorageClient for S3StorageClient {
    async fn put_object(
        &self,
        key: &str,
        content: Vec<u8>,
        content_type: &str,
    ) -> Result<(), AppError> {
        let size = content.len();
        self.client
            .put_object()
            .bucket(&self.bucket)
            .key(key)
            .content_type(content_type)
            .cache_control(IMMUTABLE_CACHE)
            .body(content.into())
            .send()
            .await
            .map_err(|e| storage_err("put", key, e.into_service_error()))?;

        tracing::debug!(bucket = %self.bucket, key, size, "Stored object");
        Ok(())
    }

    async fn get_object(&self, key: &str) -> Result<Option<Vec<u8>>, AppError> {
        let output = match self
            .client
            .get_object()
            .bucket(&self.bucket)
            .key(key)
            .send()
            .await
        {
            Ok(output) => output,
            Err(e) => {
                let err = e.into_service_error();
                if err.is_no_such_key() {
                    return Ok(None);
                }
                return Err(storage_err("get", key, err));
            }
        };

        let body = output
            .body
            .collect()
            .await
            .map_err(|e| storage_err("read body of", key, e))?;
        Ok(Some(body.into_bytes().to_vec()))
    }

    async fn object_exists(&self, key: &str) -> Result<bool, AppError> {
        match self
            .client
            .head_object()
            .bucket(&self.bucket)
            .key(key)
            .send()
            .await
        {
            Ok(_) => Ok(true),
            Err(e) => {
                let err = e.into_service_error();
                if err.is_not_found() {
                    Ok(false)
                } else {
                    Err(storage_err("head", key, err))
                }
            }
        }
    }

    async fn delete_object(&self, key: &str) -> Result<(), AppError> {
        self.client
            .delete_object()
            .bucket(&self.bucket)
            .key(key)
            .send()
            .await
            .map_err(|e| storage_err("delete", key, e.into_service_error()))?;

        tracing::debug!(bucket = %self.bucket, key, "Deleted object");
        Ok(())
    }
}
