use crate::content::models::{BlogPost, Entry, Service};

/// Case-insensitive substring matcher built once per search term.
///
/// A blank term matches everything.
#[derive(Debug, Clone)]
pub struct SearchTerm {
    needle: Option<String>,
}

impl SearchTerm {
    pub fn new(term: &str) -> Self {
        let trimmed = term.trim();
        Self {
            needle: (!trimmed.is_empty()).then(|| trimmed.to_lowercase()),
        }
    }

    pub fn matches(&self, haystack: &str) -> bool {
        match &self.needle {
            Some(needle) => haystack.to_lowercase().contains(needle),
            None => true,
        }
    }

    fn matches_any<'a>(&self, fields: impl IntoIterator<Item = &'a str>) -> bool {
        match &self.needle {
            Some(_) => fields.into_iter().any(|f| self.matches(f)),
            None => true,
        }
    }
}

/// Whether a blog post matches the term on its title, short description,
/// summary or any tag.
pub fn blog_post_matches(post: &BlogPost, term: &SearchTerm) -> bool {
    term.matches_any(
        [
            post.title.as_str(),
            post.short_description.as_str(),
            post.summary.as_str(),
        ]
        .into_iter()
        .chain(post.tags.iter().map(String::as_str)),
    )
}

/// Whether a service matches the term on its title, short description,
/// description or any feature.
pub fn service_matches(service: &Service, term: &SearchTerm) -> bool {
    term.matches_any(
        [
            service.title.as_str(),
            service.short_description.as_str(),
            service.description.as_str(),
        ]
        .into_iter()
        .chain(service.features.iter().map(String::as_str)),
    )
}

/// Filter blog posts by free-text term and, optionally, by exact tag.
///
/// Input order is preserved.
pub fn filter_blog_posts(
    posts: &[Entry<BlogPost>],
    term: &str,
    tag: Option<&str>,
) -> Vec<Entry<BlogPost>> {
    let term = SearchTerm::new(term);
    let tag = tag.filter(|t| !t.is_empty());

    posts
        .iter()
        .filter(|p| blog_post_matches(&p.record, &term))
        .filter(|p| match tag {
            Some(tag) => p.record.tags.iter().any(|t| t == tag),
            None => true,
        })
        .cloned()
        .collect()
}

/// Filter services by free-text term. Input order is preserved.
pub fn filter_services(services: &[Entry<Service>], term: &str) -> Vec<Entry<Service>> {
    let term = SearchTerm::new(term);
    services
        .iter()
        .filter(|s| service_matches(&s.record, &term))
        .cloned()
        .collect()
}

/// Distinct tags across all posts, in first-seen order.
pub fn collect_tags(posts: &[Entry<BlogPost>]) -> Vec<String> {
    let mut tags: Vec<String> = Vec::new();
    for tag in posts.iter().flat_map(|p| p.record.tags.iter()) {
        if !tags.contains(tag) {
            tags.push(tag.clone());
        }
    }
    tags
}
