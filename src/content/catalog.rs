//! Public listings and detail views assembled from the content store.

use serde::{Deserialize, Serialize};

use crate::content::fallback::{load_listing, resolve, Listing, Lookup, LookupSource};
use crate::content::models::{newest_first, BlogPost, ContentSource, Entry, Service};
use crate::content::related::{related_posts, RELATED_LIMIT};
use crate::content::search::{collect_tags, filter_blog_posts};
use crate::content::seed::{seed_blog_posts, seed_services};
use crate::db::repository::{CollectionRepository, BLOGS, SERVICES};
use crate::rendering::markdown::{reading_minutes, render_markdown};

/// Blog index as served to the listing page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlogIndex {
    pub source: ContentSource,
    /// Every tag across the unfiltered listing, in first-seen order.
    pub tags: Vec<String>,
    pub entries: Vec<Entry<BlogPost>>,
}

/// A single article with its rendered body and related posts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogDetail {
    pub source: LookupSource,
    pub entry: Entry<BlogPost>,
    pub content_html: String,
    pub reading_minutes: u32,
    pub related: Vec<Entry<BlogPost>>,
}

/// A single practice area with its long description rendered.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceDetail {
    pub source: LookupSource,
    pub entry: Entry<Service>,
    pub long_description_html: Option<String>,
}

/// Newest first by creation time; undated entries last. Stable.
pub fn sort_blog_posts(entries: &mut [Entry<BlogPost>]) {
    entries.sort_by(|a, b| newest_first(&a.record.created_at, &b.record.created_at));
}

/// Alphabetical by title, ignoring case. Stable.
pub fn sort_services(entries: &mut [Entry<Service>]) {
    entries.sort_by_cached_key(|e| e.record.title.to_lowercase());
}

pub async fn blog_listing(repo: &dyn CollectionRepository<BlogPost>) -> Listing<BlogPost> {
    load_listing(repo, BLOGS, seed_blog_posts, |entries| sort_blog_posts(entries)).await
}

pub async fn service_listing(repo: &dyn CollectionRepository<Service>) -> Listing<Service> {
    load_listing(repo, SERVICES, seed_services, |entries| sort_services(entries)).await
}

/// Listing narrowed by a free-text term and an optional exact tag.
pub async fn blog_index(
    repo: &dyn CollectionRepository<BlogPost>,
    term: &str,
    tag: Option<&str>,
) -> BlogIndex {
    let listing = blog_listing(repo).await;
    BlogIndex {
        source: listing.source,
        tags: collect_tags(&listing.entries),
        entries: filter_blog_posts(&listing.entries, term, tag),
    }
}

pub async fn blog_detail(
    repo: &dyn CollectionRepository<BlogPost>,
    id: &str,
) -> Option<BlogDetail> {
    let response = resolve(repo, BLOGS, id, seed_blog_posts).await.into_response()?;

    // Related posts scan the collection in storage order.
    let pool = load_listing(repo, BLOGS, seed_blog_posts, |_| {}).await;
    let related = related_posts(&response.entry, &pool.entries, RELATED_LIMIT);

    Some(BlogDetail {
        source: response.source,
        content_html: render_markdown(&response.entry.record.content),
        reading_minutes: reading_minutes(&response.entry.record.content),
        entry: response.entry,
        related,
    })
}

pub async fn service_lookup(
    repo: &dyn CollectionRepository<Service>,
    id: &str,
) -> Lookup<Service> {
    resolve(repo, SERVICES, id, seed_services).await
}

pub async fn service_detail(
    repo: &dyn CollectionRepository<Service>,
    id: &str,
) -> Option<ServiceDetail> {
    let response = service_lookup(repo, id).await.into_response()?;
    let long_description_html = response
        .entry
        .record
        .long_description
        .as_deref()
        .filter(|text| !text.trim().is_empty())
        .map(render_markdown);

    Some(ServiceDetail {
        source: response.source,
        entry: response.entry,
        long_description_html,
    })
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};

    use super::*;
    use crate::db::repository::testing::{MemoryRepository, UnreachableRepository};

    fn dated_post(id: &str, day: Option<u32>, tags: &[&str]) -> Entry<BlogPost> {
        Entry::new(
            id,
            BlogPost {
                title: format!("Post {id}"),
                summary: "Summary".to_string(),
                content: format!("# Post {id}\n\nBody"),
                tags: tags.iter().map(|t| t.to_string()).collect(),
                created_at: day.map(|d| Utc.with_ymd_and_hms(2024, 3, d, 9, 0, 0).unwrap()),
                ..Default::default()
            },
        )
    }

    fn service(id: &str, title: &str) -> Entry<Service> {
        Entry::new(
            id,
            Service {
                title: title.to_string(),
                description: format!("{title} description"),
                ..Default::default()
            },
        )
    }

    #[tokio::test]
    async fn test_blog_listing_newest_first_undated_last() {
        let repo = MemoryRepository::with_entries(vec![
            dated_post("undated", None, &[]),
            dated_post("old", Some(1), &[]),
            dated_post("new", Some(20), &[]),
        ]);

        let listing = blog_listing(&repo).await;
        let ids: Vec<&str> = listing.entries.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["new", "old", "undated"]);
        assert_eq!(listing.source, ContentSource::Store);
    }

    #[tokio::test]
    async fn test_service_listing_alphabetical_ignoring_case() {
        let repo = MemoryRepository::with_entries(vec![
            service("1", "corporate Law"),
            service("2", "Banking"),
            service("3", "arbitration"),
        ]);

        let listing = service_listing(&repo).await;
        let titles: Vec<&str> = listing
            .entries
            .iter()
            .map(|e| e.record.title.as_str())
            .collect();
        assert_eq!(titles, vec!["arbitration", "Banking", "corporate Law"]);
    }

    #[tokio::test]
    async fn test_service_listing_seed_when_store_down() {
        let listing = service_listing(&UnreachableRepository).await;
        assert_eq!(listing.source, ContentSource::SeedUnavailable);
        assert_eq!(listing.entries.len(), 4);
        assert_eq!(listing.entries[0].record.title, "Contract Drafting & Review");
    }

    #[tokio::test]
    async fn test_blog_index_tags_cover_unfiltered_listing() {
        let repo = MemoryRepository::with_entries(vec![
            dated_post("a", Some(2), &["Tax"]),
            dated_post("b", Some(3), &["Family Law"]),
        ]);

        let index = blog_index(&repo, "", Some("Tax")).await;
        assert_eq!(index.tags, vec!["Family Law", "Tax"]);
        assert_eq!(index.entries.len(), 1);
        assert_eq!(index.entries[0].id, "a");
    }

    #[tokio::test]
    async fn test_blog_detail_renders_and_relates() {
        let repo = MemoryRepository::with_entries(vec![
            dated_post("a", Some(1), &["Tax", "GST"]),
            dated_post("b", Some(2), &["Tax"]),
            dated_post("c", Some(3), &["Family Law"]),
            dated_post("d", Some(4), &["Tax", "GST"]),
        ]);

        let detail = blog_detail(&repo, "a").await.unwrap();
        assert_eq!(detail.source, LookupSource::Store);
        assert!(detail.content_html.contains("<h1>Post a</h1>"));
        assert_eq!(detail.reading_minutes, 1);
        let related: Vec<&str> = detail.related.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(related, vec!["d", "b", "c"]);
    }

    #[tokio::test]
    async fn test_seed_detail_relates_over_seed_posts() {
        let detail = blog_detail(&UnreachableRepository, "3").await.unwrap();
        assert_eq!(detail.source, LookupSource::Seed);
        assert_eq!(detail.entry.record.title, "Understanding Family Law");
        assert_eq!(detail.related.len(), 2);
        assert!(detail.related.iter().all(|e| e.id != "3"));
    }

    #[tokio::test]
    async fn test_unknown_detail_is_none() {
        let repo: MemoryRepository<BlogPost> = MemoryRepository::new();
        assert!(blog_detail(&repo, "missing").await.is_none());

        let services: MemoryRepository<Service> = MemoryRepository::new();
        assert!(service_detail(&services, "missing").await.is_none());
    }

    #[tokio::test]
    async fn test_service_detail_renders_long_description() {
        let mut entry = service("abc", "Family Law");
        entry.record.long_description = Some("We handle **custody** matters.".to_string());
        let repo = MemoryRepository::with_entries(vec![entry]);

        let detail = service_detail(&repo, "abc").await.unwrap();
        assert!(detail
            .long_description_html
            .unwrap()
            .contains("<strong>custody</strong>"));
    }
}
