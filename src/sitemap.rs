//! `sitemap.xml` generation from the static routes and the stored content.

use std::fmt::Write as _;

use chrono::NaiveDate;

use crate::content::models::{BlogPost, Entry, Service};
use crate::db::repository::CollectionRepository;
use crate::error::AppError;

/// A fixed page with its crawl hints.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StaticRoute {
    pub path: &'static str,
    pub priority: &'static str,
    pub changefreq: &'static str,
}

pub const STATIC_ROUTES: &[StaticRoute] = &[
    StaticRoute { path: "/", priority: "1.0", changefreq: "monthly" },
    StaticRoute { path: "/about", priority: "0.8", changefreq: "monthly" },
    StaticRoute { path: "/services", priority: "0.8", changefreq: "monthly" },
    StaticRoute { path: "/blog", priority: "0.7", changefreq: "weekly" },
    StaticRoute { path: "/contact", priority: "0.7", changefreq: "monthly" },
    StaticRoute { path: "/terms", priority: "0.3", changefreq: "yearly" },
    StaticRoute { path: "/privacy", priority: "0.3", changefreq: "yearly" },
];

/// One `<url>` element.
#[derive(Debug, Clone, PartialEq)]
pub struct SitemapUrl {
    pub loc: String,
    pub lastmod: NaiveDate,
    pub changefreq: &'static str,
    pub priority: &'static str,
}

/// Every URL the sitemap lists: static pages, then blog posts, then services.
///
/// Blog posts use their creation date as `lastmod`; everything else uses `today`.
pub fn sitemap_urls(
    base_url: &str,
    blogs: &[Entry<BlogPost>],
    services: &[Entry<Service>],
    today: NaiveDate,
) -> Vec<SitemapUrl> {
    let base = base_url.trim_end_matches('/');

    let statics = STATIC_ROUTES.iter().map(|route| SitemapUrl {
        loc: format!("{base}{}", route.path),
        lastmod: today,
        changefreq: route.changefreq,
        priority: route.priority,
    });

    let posts = blogs.iter().map(|entry| SitemapUrl {
        loc: format!("{base}/blog/{}", entry.id),
        lastmod: entry
            .record
            .created_at
            .map(|created| created.date_naive())
            .unwrap_or(today),
        changefreq: "monthly",
        priority: "0.6",
    });

    let practice_areas = services.iter().map(|entry| SitemapUrl {
        loc: format!("{base}/services/{}", entry.id),
        lastmod: today,
        changefreq: "monthly",
        priority: "0.7",
    });

    statics.chain(posts).chain(practice_areas).collect()
}

/// Escape the five XML special characters.
pub fn xml_escape(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            other => out.push(other),
        }
    }
    out
}

pub fn render_sitemap(urls: &[SitemapUrl]) -> String {
    let mut xml = String::from("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
    xml.push_str("<urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\">\n");
    for url in urls {
        // Writing into a String cannot fail.
        let _ = write!(
            xml,
            "  <url>\n    <loc>{}</loc>\n    <lastmod>{}</lastmod>\n    <changefreq>{}</changefreq>\n    <priority>{}</priority>\n  </url>\n",
            xml_escape(&url.loc),
            url.lastmod.format("%Y-%m-%d"),
            url.changefreq,
            url.priority,
        );
    }
    xml.push_str("</urlset>\n");
    xml
}

/// Read both collections and render the sitemap. Store failures are returned, not masked.
pub async fn build_sitemap(
    blogs: &dyn CollectionRepository<BlogPost>,
    services: &dyn CollectionRepository<Service>,
    base_url: &str,
    today: NaiveDate,
) -> Result<String, AppError> {
    let (blogs, services) = futures::try_join!(blogs.list_all(), services.list_all())?;
    tracing::info!(
        blogs = blogs.len(),
        services = services.len(),
        "Building sitemap"
    );
    Ok(render_sitemap(&sitemap_urls(base_url, &blogs, &services, today)))
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};

    use super::*;
    use crate::db::repository::testing::{MemoryRepository, UnreachableRepository};

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, 15).unwrap()
    }

    #[test]
    fn test_static_routes_come_first() {
        let urls = sitemap_urls("https://example.com/", &[], &[], today());
        let locs: Vec<&str> = urls.iter().map(|u| u.loc.as_str()).collect();
        assert_eq!(
            locs,
            vec![
                "https://example.com/",
                "https://example.com/about",
                "https://example.com/services",
                "https://example.com/blog",
                "https://example.com/contact",
                "https://example.com/terms",
                "https://example.com/privacy",
            ]
        );
        assert_eq!(urls[0].priority, "1.0");
        assert_eq!(urls[3].changefreq, "weekly");
    }

    #[test]
    fn test_blog_lastmod_uses_creation_date() {
        let dated = Entry::new(
            "a1",
            BlogPost {
                created_at: Some(Utc.with_ymd_and_hms(2024, 6, 2, 18, 30, 0).unwrap()),
                ..Default::default()
            },
        );
        let undated = Entry::new("a2", BlogPost::default());

        let urls = sitemap_urls("https://example.com", &[dated, undated], &[], today());
        let posts: Vec<&SitemapUrl> = urls.iter().filter(|u| u.loc.contains("/blog/")).collect();

        assert_eq!(posts[0].lastmod, NaiveDate::from_ymd_opt(2024, 6, 2).unwrap());
        assert_eq!(posts[1].lastmod, today());
        assert_eq!(posts[0].priority, "0.6");
    }

    #[test]
    fn test_service_urls() {
        let service = Entry::new("s9", Service::default());
        let urls = sitemap_urls("https://example.com", &[], &[service], today());
        let last = urls.last().unwrap();
        assert_eq!(last.loc, "https://example.com/services/s9");
        assert_eq!(last.priority, "0.7");
        assert_eq!(last.lastmod, today());
    }

    #[test]
    fn test_locations_are_escaped() {
        let xml = render_sitemap(&[SitemapUrl {
            loc: "https://example.com/blog/a&b<c>".to_string(),
            lastmod: today(),
            changefreq: "monthly",
            priority: "0.6",
        }]);
        assert!(xml.contains("<loc>https://example.com/blog/a&amp;b&lt;c&gt;</loc>"));
        assert!(xml.contains("<lastmod>2025-01-15</lastmod>"));
        assert!(xml.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>"));
        assert!(xml.trim_end().ends_with("</urlset>"));
    }

    #[tokio::test]
    async fn test_build_reads_both_collections() {
        let blogs = MemoryRepository::with_entries(vec![Entry::new("b1", BlogPost::default())]);
        let services = MemoryRepository::with_entries(vec![Entry::new("s1", Service::default())]);

        let xml = build_sitemap(&blogs, &services, "https://example.com", today())
            .await
            .unwrap();
        assert_eq!(xml.matches("<url>").count(), STATIC_ROUTES.len() + 2);
        assert!(xml.contains("https://example.com/blog/b1"));
        assert!(xml.contains("https://example.com/services/s1"));
    }

    #[tokio::test]
    async fn test_store_failure_is_an_error() {
        let services: MemoryRepository<Service> = MemoryRepository::new();
        let result = build_sitemap(&UnreachableRepository, &services, "https://example.com", today()).await;
        assert!(matches!(result, Err(AppError::Database(_))));
    }
}
