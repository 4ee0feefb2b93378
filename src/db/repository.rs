use async_trait::async_trait;

use crate::content::models::Entry;
use crate::error::AppError;

/// Collection holding practice areas.
pub const SERVICES: &str = "services";
/// Collection holding blog posts.
pub const BLOGS: &str = "blogs";
/// Collection holding contact-form leads.
pub const CONTACT_LEADS: &str = "contactLeads";

/// Repository over a single named collection.
///
/// Identifiers are always assigned by the store; callers never pick them.
/// This trait allows mocking the database layer in tests.
#[async_trait]
pub trait CollectionRepository<T>: Send + Sync
where
    T: Send + Sync + 'static,
{
    /// All current documents, in storage order.
    async fn list_all(&self) -> Result<Vec<Entry<T>>, AppError>;

    /// Find a document by identifier. Malformed identifiers are treated as absent.
    async fn find_by_id(&self, id: &str) -> Result<Option<Entry<T>>, AppError>;

    /// Insert a new document and return the identifier the store assigned.
    async fn insert(&self, record: T) -> Result<String, AppError>;

    /// Replace the fields of an existing document.
    async fn update(&self, id: &str, record: T) -> Result<(), AppError>;

    async fn delete(&self, id: &str) -> Result<(), AppError>;

    async fn count(&self) -> Result<u64, AppError>;
}

#[cfg(feature = "ssr")]
mod mongo {
    use async_trait::async_trait;
    use futures::TryStreamExt;
    use mongodb::bson::oid::ObjectId;
    use mongodb::bson::{doc, Bson, Document};
    use serde::de::DeserializeOwned;
    use serde::Serialize;

    use super::CollectionRepository;
    use crate::content::models::Entry;
    use crate::error::AppError;

    /// Split a raw stored document into its hex `_id` and the typed record.
    fn to_entry<T: DeserializeOwned>(mut raw: Document, collection: &str) -> Result<Entry<T>, AppError> {
        let id = match raw.remove("_id") {
            Some(Bson::ObjectId(oid)) => oid.to_hex(),
            Some(other) => other.to_string(),
            None => {
                return Err(AppError::Database(format!(
                    "Document in '{collection}' has no _id"
                )))
            }
        };
        let record = mongodb::bson::from_document(raw).map_err(|e| {
            AppError::Database(format!("Malformed document '{id}' in '{collection}': {e}"))
        })?;
        Ok(Entry::new(id, record))
    }

    fn db_err(e: mongodb::error::Error) -> AppError {
        AppError::Database(e.to_string())
    }

    /// MongoDB implementation of [`CollectionRepository`].
    ///
    /// Only available when the `ssr` feature is enabled.
    pub struct MongoCollectionRepository<T>
    where
        T: Send + Sync,
    {
        collection: mongodb::Collection<T>,
        name: &'static str,
    }

    impl<T> MongoCollectionRepository<T>
    where
        T: Send + Sync,
    {
        pub fn new(db: &mongodb::Database, name: &'static str) -> Self {
            Self {
                collection: db.collection(name),
                name,
            }
        }

        fn raw(&self) -> mongodb::Collection<Document> {
            self.collection.clone_with_type()
        }
    }

    #[async_trait]
    impl<T> CollectionRepository<T> for MongoCollectionRepository<T>
    where
        T: Serialize + DeserializeOwned + Unpin + Send + Sync + 'static,
    {
        async fn list_all(&self) -> Result<Vec<Entry<T>>, AppError> {
            let cursor = self.raw().find(doc! {}).await.map_err(db_err)?;
            let raw: Vec<Document> = cursor.try_collect().await.map_err(db_err)?;
            raw.into_iter().map(|d| to_entry(d, self.name)).collect()
        }

        async fn find_by_id(&self, id: &str) -> Result<Option<Entry<T>>, AppError> {
            let Ok(oid) = ObjectId::parse_str(id) else {
                return Ok(None);
            };

            self.raw()
                .find_one(doc! { "_id": oid })
                .await
                .map_err(db_err)?
                .map(|d| to_entry(d, self.name))
                .transpose()
        }

        async fn insert(&self, record: T) -> Result<String, AppError> {
            let result = self.collection.insert_one(&record).await.map_err(db_err)?;

            result
                .inserted_id
                .as_object_id()
                .map(|oid| oid.to_hex())
                .ok_or_else(|| {
                    AppError::Database(format!(
                        "Insert into '{}' returned a non-ObjectId identifier",
                        self.name
                    ))
                })
        }

        async fn update(&self, id: &str, record: T) -> Result<(), AppError> {
            let oid = ObjectId::parse_str(id)
                .map_err(|_| AppError::NotFound(format!("No document '{id}' in '{}'", self.name)))?;

            let result = self
                .collection
                .replace_one(doc! { "_id": oid }, &record)
                .await
                .map_err(db_err)?;

            if result.matched_count == 0 {
                return Err(AppError::NotFound(format!(
                    "No document '{id}' in '{}'",
                    self.name
                )));
            }
            Ok(())
        }

        async fn delete(&self, id: &str) -> Result<(), AppError> {
            let oid = ObjectId::parse_str(id)
                .map_err(|_| AppError::NotFound(format!("No document '{id}' in '{}'", self.name)))?;

            let result = self
                .collection
                .delete_one(doc! { "_id": oid })
                .await
                .map_err(db_err)?;

            if result.deleted_count == 0 {
                return Err(AppError::NotFound(format!(
                    "No document '{id}' in '{}'",
                    self.name
                )));
            }
            Ok(())
        }

        async fn count(&self) -> Result<u64, AppError> {
            self.collection
                .count_documents(doc! {})
                .await
                .map_err(db_err)
        }
    }
}

#[cfg(feature = "ssr")]
pub use mongo::MongoCollectionRepository;


#[cfg(test)]
mod tests {
    use super::testing::MemoryRepository;
    use super::*;
    use crate::content::models::ContactLead;

    fn lead(name: &str) -> ContactLead {
        ContactLead {
            name: name.to_string(),
            email: format!("{}@example.com", name.to_lowercase()),
            message: "Please call me back".to_string(),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_insert_assigns_distinct_ids() {
        let repo = MemoryRepository::new();
        let a = repo.insert(lead("Asha")).await.unwrap();
        let b = repo.insert(lead("Ravi")).await.unwrap();
        assert_ne!(a, b);
        assert_eq!(repo.count().await.unwrap(), 2);
    }

    #[tokio::test]
    async fn test_delete_then_list_omits_record() {
        let repo = MemoryRepository::new();
        let id = repo.insert(lead("Asha")).await.unwrap();
        repo.insert(lead("Ravi")).await.unwrap();

        repo.delete(&id).await.unwrap();

        let remaining = repo.list_all().await.unwrap();
        assert_eq!(remaining.len(), 1);
        assert!(remaining.iter().all(|e| e.id != id));
    }

    #[tokio::test]
    async fn test_missing_document_is_not_found() {
        let repo: MemoryRepository<ContactLead> = MemoryRepository::new();
        assert!(repo.find_by_id("nope").await.unwrap().is_none());
        assert!(matches!(
            repo.update("nope", lead("X")).await,
            Err(AppError::NotFound(_))
        ));
        assert!(matches!(repo.delete("nope").await, Err(AppError::NotFound(_))));
    }

    #[test]
    fn test_collection_names() {
        assert_eq!(SERVICES, "services");
        assert_eq!(BLOGS, "blogs");
        assert_eq!(CONTACT_LEADS, "contactLeads");
    }
}
