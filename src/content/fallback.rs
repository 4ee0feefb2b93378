//! Degrade paths for public pages when the content store is empty or down.

use serde::{Deserialize, Serialize};

use crate::content::models::{ContentSource, Entry};
use crate::db::repository::CollectionRepository;

/// A collection as shown to visitors, together with where it came from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Listing<T> {
    pub entries: Vec<Entry<T>>,
    pub source: ContentSource,
}

/// Outcome of resolving a detail page by identifier.
#[derive(Debug, Clone, PartialEq)]
pub enum Lookup<T> {
    Store(Entry<T>),
    Seed(Entry<T>),
    NotFound,
}

impl<T> Lookup<T> {
    pub fn into_response(self) -> Option<LookupResponse<T>> {
        match self {
            Lookup::Store(entry) => Some(LookupResponse {
                source: LookupSource::Store,
                entry,
            }),
            Lookup::Seed(entry) => Some(LookupResponse {
                source: LookupSource::Seed,
                entry,
            }),
            Lookup::NotFound => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum LookupSource {
    Store,
    Seed,
}

/// Wire shape of a resolved detail record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LookupResponse<T> {
    pub source: LookupSource,
    pub entry: Entry<T>,
}

/// Read a whole collection, falling back to `seed` when it is empty or unreadable.
///
/// Store results are passed through `order` before being returned; seed data
/// is returned in its fixed order.
pub async fn load_listing<T>(
    repo: &dyn CollectionRepository<T>,
    collection: &str,
    seed: impl FnOnce() -> Vec<Entry<T>>,
    order: impl FnOnce(&mut Vec<Entry<T>>),
) -> Listing<T>
where
    T: Send + Sync + 'static,
{
    match repo.list_all().await {
        Ok(mut entries) if !entries.is_empty() => {
            order(&mut entries);
            Listing {
                entries,
                source: ContentSource::Store,
            }
        }
        Ok(_) => Listing {
            entries: seed(),
            source: ContentSource::SeedEmpty,
        },
        Err(e) => {
            tracing::warn!(collection, error = %e, "Content store unreadable, serving seed data");
            Listing {
                entries: seed(),
                source: ContentSource::SeedUnavailable,
            }
        }
    }
}

/// Resolve a detail record: store first, then the seed list by identifier.
pub async fn resolve<T>(
    repo: &dyn CollectionRepository<T>,
    collection: &str,
    id: &str,
    seed: impl FnOnce() -> Vec<Entry<T>>,
) -> Lookup<T>
where
    T: Send + Sync + 'static,
{
    match repo.find_by_id(id).await {
        Ok(Some(entry)) => return Lookup::Store(entry),
        Ok(None) => {}
        Err(e) => {
            tracing::warn!(collection, id, error = %e, "Detail lookup failed, trying seed data");
        }
    }

    seed()
        .into_iter()
        .find(|entry| entry.id == id)
        .map_or(Lookup::NotFound, Lookup::Seed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::models::BlogPost;
    use crate::content::seed::seed_blog_posts;
    use crate::db::repository::testing::{MemoryRepository, UnreachableRepository};

    fn stored_post(id: &str, title: &str) -> Entry<BlogPost> {
        Entry::new(
            id,
            BlogPost {
                title: title.to_string(),
                ..Default::default()
            },
        )
    }

    #[tokio::test]
    async fn test_listing_from_store_is_ordered() {
        let repo = MemoryRepository::with_entries(vec![
            stored_post("b", "Beta"),
            stored_post("a", "Alpha"),
        ]);

        let listing = load_listing(&repo, "blogs", seed_blog_posts, |entries| {
            entries.sort_by(|x, y| x.record.title.cmp(&y.record.title))
        })
        .await;

        assert_eq!(listing.source, ContentSource::Store);
        assert_eq!(listing.entries[0].record.title, "Alpha");
    }

    #[tokio::test]
    async fn test_empty_store_serves_seed() {
        let repo: MemoryRepository<BlogPost> = MemoryRepository::new();
        let listing = load_listing(&repo, "blogs", seed_blog_posts, |_| {}).await;

        assert_eq!(listing.source, ContentSource::SeedEmpty);
        assert_eq!(listing.entries.len(), 3);
    }

    #[tokio::test]
    async fn test_failing_store_serves_seed() {
        let listing = load_listing::<BlogPost>(&UnreachableRepository, "blogs", seed_blog_posts, |_| {})
            .await;

        assert_eq!(listing.source, ContentSource::SeedUnavailable);
        let titles: Vec<&str> = listing
            .entries
            .iter()
            .map(|e| e.record.title.as_str())
            .collect();
        assert_eq!(
            titles,
            vec![
                "Legal Rights Every Citizen Should Know",
                "How to Choose the Right Advocate",
                "Understanding Family Law",
            ]
        );
    }

    #[tokio::test]
    async fn test_resolve_prefers_store() {
        let repo = MemoryRepository::with_entries(vec![stored_post("1", "Stored one")]);
        let lookup = resolve(&repo, "blogs", "1", seed_blog_posts).await;
        assert!(matches!(lookup, Lookup::Store(ref e) if e.record.title == "Stored one"));
    }

    #[tokio::test]
    async fn test_resolve_falls_back_to_seed_by_id() {
        let repo: MemoryRepository<BlogPost> = MemoryRepository::new();
        let lookup = resolve(&repo, "blogs", "2", seed_blog_posts).await;
        assert!(
            matches!(lookup, Lookup::Seed(ref e) if e.record.title == "How to Choose the Right Advocate")
        );

        let failing = resolve::<BlogPost>(&UnreachableRepository, "blogs", "3", seed_blog_posts).await;
        assert!(matches!(failing, Lookup::Seed(ref e) if e.id == "3"));
    }

    #[tokio::test]
    async fn test_resolve_not_found() {
        let repo: MemoryRepository<BlogPost> = MemoryRepository::new();
        let lookup = resolve(&repo, "blogs", "does-not-exist", seed_blog_posts).await;
        assert_eq!(lookup, Lookup::NotFound);
        assert!(lookup.into_response().is_none());
    }
}
