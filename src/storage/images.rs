use std::fmt;
use std::str::FromStr;

#[cfg(feature = "ssr")]
use rand::{distr::Alphanumeric, Rng};
use serde::{Deserialize, Serialize};

use crate::error::AppError;
use crate::storage::client::StorageClient;

#[cfg(feature = "ssr")]
const SUFFIX_LEN: usize = 6;

/// Key prefix under which uploaded images are grouped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageNamespace {
    Services,
    Blogs,
}

impl ImageNamespace {
    pub fn as_str(self) -> &'static str {
        match self {
            ImageNamespace::Services => "services",
            ImageNamespace::Blogs => "blogs",
        }
    }
}

impl fmt::Display for ImageNamespace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ImageNamespace {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "services" => Ok(ImageNamespace::Services),
            "blogs" => Ok(ImageNamespace::Blogs),
            other => Err(AppError::NotFound(format!("Unknown image namespace '{other}'"))),
        }
    }
}

/// Response from a successful image upload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadedImage {
    /// Blob key, `<namespace>/<file>`.
    pub key: String,
    /// URL path where the image is served.
    pub url: String,
}

/// Build a collision-resistant file name: `<unix-millis>-<6 chars [a-z0-9]>.<ext>`.
///
/// The extension is taken from `original` and lowercased. Names without one
/// fall back to the extension of `content_type`, then to `bin`.
#[cfg(feature = "ssr")]
pub fn unique_file_name(original: &str, content_type: &str) -> String {
    let millis = chrono::Utc::now().timestamp_millis();
    let suffix: String = rand::rng()
        .sample_iter(&Alphanumeric)
        .take(SUFFIX_LEN)
        .map(|b| (b as char).to_ascii_lowercase())
        .collect();
    let ext = file_extension(original)
        .or_else(|| extension_for(content_type).map(str::to_string))
        .unwrap_or_else(|| "bin".to_string());
    format!("{millis}-{suffix}.{ext}")
}

fn file_extension(original: &str) -> Option<String> {
    let base = original.rsplit(['/', '\\']).next().unwrap_or(original);
    match base.rsplit_once('.') {
        Some((stem, ext))
            if !stem.is_empty() && !ext.is_empty() && ext.chars().all(|c| c.is_ascii_alphanumeric()) =>
        {
            Some(ext.to_ascii_lowercase())
        }
        _ => None,
    }
}

#[cfg(feature = "ssr")]
fn extension_for(content_type: &str) -> Option<&'static str> {
    let essence = content_type.split(';').next().unwrap_or(content_type).trim();
    match essence.to_ascii_lowercase().as_str() {
        "image/png" => Some("png"),
        "image/jpeg" | "image/jpg" => Some("jpg"),
        "image/gif" => Some("gif"),
        "image/webp" => Some("webp"),
        "image/svg+xml" => Some("svg"),
        "image/avif" => Some("avif"),
        _ => None,
    }
}

/// Public URL path for a stored image.
pub fn image_url(namespace: ImageNamespace, file_name: &str) -> String {
    format!("/api/v1/image/{namespace}/{file_name}")
}

/// Blob key for an image, rejecting names that could escape the namespace.
pub fn image_key(namespace: ImageNamespace, file_name: &str) -> Result<String, AppError> {
    if file_name.is_empty()
        || file_name.contains('/')
        || file_name.contains('\\')
        || file_name.contains("..")
    {
        return Err(AppError::BadRequest(format!("Invalid image name '{file_name}'")));
    }
    Ok(format!("{namespace}/{file_name}"))
}

/// Infer the response content type from a file name's extension.
pub fn content_type_for(file_name: &str) -> &'static str {
    match file_extension(file_name).as_deref().unwrap_or_default() {
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "gif" => "image/gif",
        "webp" => "image/webp",
        "svg" => "image/svg+xml",
        "avif" => "image/avif",
        _ => "application/octet-stream",
    }
}

/// Store an uploaded image under a freshly generated name.
#[cfg(feature = "ssr")]
pub async fn upload_image(
    storage: &dyn StorageClient,
    namespace: ImageNamespace,
    original_name: &str,
    content_type: &str,
    bytes: Vec<u8>,
) -> Result<UploadedImage, AppError> {
    if !content_type.starts_with("image/") {
        return Err(AppError::BadRequest("Only image files are allowed".into()));
    }
    if bytes.is_empty() {
        return Err(AppError::BadRequest("Uploaded file is empty".into()));
    }

    let file_name = unique_file_name(original_name, content_type);
    let key = image_key(namespace, &file_name)?;

    storage.put_object(&key, bytes, content_type).await?;
    tracing::info!(key = %key, "Stored uploaded image");

    Ok(UploadedImage {
        url: image_url(namespace, &file_name),
        key,
    })
}

/// Remove a stored image. Fails with `NotFound` if there is no such blob.
#[cfg(feature = "ssr")]
pub async fn delete_image(
    storage: &dyn StorageClient,
    namespace: ImageNamespace,
    file_name: &str,
) -> Result<(), AppError> {
    let key = image_key(namespace, file_name)?;

    if !storage.object_exists(&key).await? {
        return Err(AppError::NotFound(format!("Image '{key}' not found")));
    }

    storage.delete_object(&key).await?;
    tracing::info!(key = %key, "Deleted image");
    Ok(())
}

#[cfg(test)]
pub(crate) mod testing {
    use std::collections::HashMap;
    use std::sync::Mutex;

    use async_trait::async_trait;

    use crate::error::AppError;
    use crate::storage::client::StorageClient;

    /// Blob store kept in a map of key to (bytes, content type).
    pub struct MemoryStorage {
        pub objects: Mutex<HashMap<String, (Vec<u8>, String)>>,
    }

    impl MemoryStorage {
        pub fn new() -> Self {
            Self {
                objects: Mutex::new(HashMap::new()),
            }
        }

        pub fn keys(&self) -> Vec<String> {
            let mut keys: Vec<String> = self.objects.lock().unwrap().keys().cloned().collect();
            keys.sort();
            keys
        }
    }

    #[async_trait]
    impl StorageClient for MemoryStorage {
        async fn put_object(
            &self,
            key: &str,
            content: Vec<u8>,
            content_type: &str,
        ) -> Result<(), AppError> {
            self.objects
                .lock()
                .unwrap()
                .insert(key.to_string(), (content, content_type.to_string()));
            Ok(())
        }

        async fn get_object(&self, key: &str) -> Result<Option<Vec<u8>>, AppError> {
            Ok(self
                .objects
                .lock()
                .unwrap()
                .get(key)
                .map(|(bytes, _)| bytes.clone()))
        }

        async fn object_exists(&self, key: &str) -> Result<bool, AppError> {
            Ok(self.objects.lock().unwrap().contains_key(key))
        }

        async fn delete_object(&self, key: &str) -> Result<(), AppError> {
            self.objects.lock().unwrap().remove(key);
            Ok(())
        }
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::testing::MemoryStorage;
    use super::*;
    use async_trait::async_trait;
    use mockall::mock;

    mock! {
        pub Storage {}

        #[async_trait]
        impl StorageClient for Storage {
            async fn put_object(&self, key: &str, content: Vec<u8>, content_type: &str) -> Result<(), AppError>;
            async fn get_object(&self, key: &str) -> Result<Option<Vec<u8>>, AppError>;
            async fn object_exists(&self, key: &str) -> Result<bool, AppError>;
            async fn delete_object(&self, key: &str) -> Result<(), AppError>;
        }
    }

    #[test]
    fn test_unique_file_name_shape() {
        let name = unique_file_name("Court Order.PNG", "image/png");
        let (stem, ext) = name.rsplit_once('.').unwrap();
        assert_eq!(ext, "png");

        let (millis, suffix) = stem.split_once('-').unwrap();
        assert!(millis.parse::<i64>().is_ok());
        assert_eq!(suffix.len(), 6);
        assert!(suffix
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit()));
    }

    #[test]
    fn test_unique_file_name_without_extension() {
        assert!(unique_file_name("README", "image/x-unknown").ends_with(".bin"));
        assert!(unique_file_name(".hidden", "application/octet-stream").ends_with(".bin"));
        assert!(unique_file_name("photo.", "").ends_with(".bin"));
    }

    #[test]
    fn test_extension_falls_back_to_content_type() {
        assert!(unique_file_name("blob", "image/png").ends_with(".png"));
        assert!(unique_file_name("", "image/jpeg").ends_with(".jpg"));
        assert!(unique_file_name("scan", "IMAGE/WEBP; q=1").ends_with(".webp"));
        assert!(unique_file_name("cover.gif", "image/png").ends_with(".gif"));
    }

    #[test]
    fn test_unique_file_names_differ() {
        assert_ne!(
            unique_file_name("a.jpg", "image/jpeg"),
            unique_file_name("a.jpg", "image/jpeg")
        );
    }

    #[test]
    fn test_namespace_parsing() {
        assert_eq!("blogs".parse::<ImageNamespace>().unwrap(), ImageNamespace::Blogs);
        assert_eq!(
            "services".parse::<ImageNamespace>().unwrap(),
            ImageNamespace::Services
        );
        assert!("avatars".parse::<ImageNamespace>().is_err());
    }

    #[test]
    fn test_image_key_rejects_traversal() {
        assert!(image_key(ImageNamespace::Blogs, "../secrets").is_err());
        assert!(image_key(ImageNamespace::Blogs, "a/b.png").is_err());
        assert_eq!(
            image_key(ImageNamespace::Blogs, "1-abc123.png").unwrap(),
            "blogs/1-abc123.png"
        );
    }

    #[test]
    fn test_content_type_inference() {
        assert_eq!(content_type_for("x.JPG"), "image/jpeg");
        assert_eq!(content_type_for("x.svg"), "image/svg+xml");
        assert_eq!(content_type_for("x"), "application/octet-stream");
    }

    #[tokio::test]
    async fn test_upload_stores_blob_under_namespace() {
        let storage = MemoryStorage::new();

        let uploaded = upload_image(
            &storage,
            ImageNamespace::Services,
            "team.jpeg",
            "image/jpeg",
            vec![0xFF, 0xD8, 0xFF],
        )
        .await
        .unwrap();

        assert!(uploaded.key.starts_with("services/"));
        assert!(uploaded.key.ends_with(".jpeg"));
        let file = uploaded.key.trim_start_matches("services/");
        assert_eq!(uploaded.url, format!("/api/v1/image/services/{file}"));

        let stored = storage.objects.lock().unwrap();
        let (bytes, content_type) = stored.get(&uploaded.key).unwrap();
        assert_eq!(bytes, &vec![0xFF, 0xD8, 0xFF]);
        assert_eq!(content_type, "image/jpeg");
    }

    #[tokio::test]
    async fn test_upload_without_extension_is_served_as_image() {
        let storage = MemoryStorage::new();
        let uploaded = upload_image(&storage, ImageNamespace::Blogs, "clipboard", "image/png", vec![1])
            .await
            .unwrap();

        assert!(uploaded.key.ends_with(".png"));
        assert_eq!(content_type_for(&uploaded.key), "image/png");
    }

    #[tokio::test]
    async fn test_upload_rejects_non_image() {
        let storage = MemoryStorage::new();
        let result = upload_image(
            &storage,
            ImageNamespace::Blogs,
            "notes.pdf",
            "application/pdf",
            vec![1, 2, 3],
        )
        .await;

        assert!(matches!(result, Err(AppError::BadRequest(_))));
        assert!(storage.keys().is_empty());
    }

    #[tokio::test]
    async fn test_upload_rejects_empty_payload() {
        let storage = MemoryStorage::new();
        let result =
            upload_image(&storage, ImageNamespace::Blogs, "a.png", "image/png", vec![]).await;
        assert!(matches!(result, Err(AppError::BadRequest(_))));
    }

    #[tokio::test]
    async fn test_upload_propagates_storage_failure() {
        let mut storage = MockStorage::new();
        storage
            .expect_put_object()
            .times(1)
            .returning(|_, _, _| Err(AppError::Storage("bucket unavailable".into())));

        let result = upload_image(
            &storage,
            ImageNamespace::Blogs,
            "a.png",
            "image/png",
            vec![1],
        )
        .await;

        assert!(matches!(result, Err(AppError::Storage(_))));
    }

    #[tokio::test]
    async fn test_delete_image() {
        let storage = MemoryStorage::new();
        let uploaded = upload_image(&storage, ImageNamespace::Blogs, "a.png", "image/png", vec![1])
            .await
            .unwrap();
        let file = uploaded.key.trim_start_matches("blogs/").to_string();

        delete_image(&storage, ImageNamespace::Blogs, &file)
            .await
            .unwrap();
        assert!(storage.keys().is_empty());

        let again = delete_image(&storage, ImageNamespace::Blogs, &file).await;
        assert!(matches!(again, Err(AppError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_delete_does_not_touch_store_when_missing() {
        let mut storage = MockStorage::new();
        storage.expect_object_exists().returning(|_| Ok(false));
        storage.expect_delete_object().never();

        let result = delete_image(&storage, ImageNamespace::Services, "gone.png").await;
        assert!(matches!(result, Err(AppError::NotFound(_))));
    }
}
