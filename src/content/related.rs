use crate::content::models::{BlogPost, Entry};

/// Default number of related posts shown under an article.
pub const RELATED_LIMIT: usize = 3;

/// Pick posts related to `current` by tag overlap.
///
/// Posts are ranked by shared-tag count, highest first. The sort is stable,
/// so ties keep the order in which `all` was scanned. When the current post
/// has no tags the first `limit` other posts are returned.
pub fn related_posts(
    current: &Entry<BlogPost>,
    all: &[Entry<BlogPost>],
    limit: usize,
) -> Vec<Entry<BlogPost>> {
    let others = all.iter().filter(|p| p.id != current.id);
    let current_tags = &current.record.tags;

    if current_tags.is_empty() {
        return others.take(limit).cloned().collect();
    }

    let mut ranked: Vec<(usize, &Entry<BlogPost>)> = others
        .map(|p| {
            let shared = p
                .record
                .tags
                .iter()
                .filter(|t| current_tags.contains(t))
                .count();
            (shared, p)
        })
        .collect();
    ranked.sort_by(|a, b| b.0.cmp(&a.0));

    ranked
        .into_iter()
        .take(limit)
        .map(|(_, p)| p.clone())
        .collect()
}
