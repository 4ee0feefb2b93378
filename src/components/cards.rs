use leptos::prelude::*;

use crate::content::models::{BlogPost, ContentSource, Entry, Service};

const PLACEHOLDER_IMAGE: &str = "/placeholder.svg";

/// Human-readable publication date, e.g. "12 March 2024".
pub fn display_date(date: Option<chrono::DateTime<chrono::Utc>>) -> Option<String> {
    date.map(|d| d.format("%-d %B %Y").to_string())
}

#[component]
pub fn ServiceCard(entry: Entry<Service>) -> impl IntoView {
    let href = format!("/services/{}", entry.id);
    let service = entry.record;
    let text = service.card_text().to_string();

    view! {
        <article class="card service-card">
            {service.icon.clone().map(|icon| view! { <span class="service-icon" aria-hidden="true">{icon}</span> })}
            <h3>{service.title.clone()}</h3>
            <p>{text}</p>
            {service.pricing.clone().map(|pricing| view! { <p class="pricing">{pricing}</p> })}
            <a href=href class="card-link">"Learn more →"</a>
        </article>
    }
}

#[component]
pub fn BlogCard(entry: Entry<BlogPost>) -> impl IntoView {
    let href = format!("/blog/{}", entry.id);
    let post = entry.record;
    let image = post
        .image_url
        .clone()
        .unwrap_or_else(|| PLACEHOLDER_IMAGE.to_string());
    let text = post.card_text().to_string();

    view! {
        <article class="card blog-card">
            <a href=href.clone()>
                <img src=image alt=post.title.clone() loading="lazy"/>
            </a>
            <div class="card-body">
                {display_date(post.created_at).map(|date| view! { <time class="card-date">{date}</time> })}
                <h3><a href=href.clone()>{post.title.clone()}</a></h3>
                <p>{text}</p>
                <TagList tags=post.tags.clone()/>
                <a href=href class="card-link">"Read more →"</a>
            </div>
        </article>
    }
}

/// Tag badges linking to the filtered blog index.
#[component]
pub fn TagList(tags: Vec<String>) -> impl IntoView {
    view! {
        <ul class="tag-list">
            {tags
                .into_iter()
                .map(|tag| {
                    let href = tag_href(&tag);
                    view! { <li><a class="badge" href=href>{tag}</a></li> }
                })
                .collect_view()}
        </ul>
    }
}

/// Shown above listings that are being served from built-in content.
#[component]
pub fn SeedNotice(source: ContentSource) -> impl IntoView {
    let message = match source {
        ContentSource::Store => None,
        ContentSource::SeedEmpty => Some("Showing sample content while new articles are being prepared."),
        ContentSource::SeedUnavailable => {
            Some("Showing sample content: live content is temporarily unavailable.")
        }
    };

    message.map(|text| view! { <p class="alert alert-info">{text}</p> })
}

/// Link to the blog index filtered to `tag`.
pub fn tag_href(tag: &str) -> String {
    format!("/blog?tag={}", urlencoding::encode(tag))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_tag_urls_are_percent_encoded() {
        assert_eq!(tag_href("Family Law"), "/blog?tag=Family%20Law");
        assert_eq!(tag_href("Mergers/Acquisitions"), "/blog?tag=Mergers%2FAcquisitions");
        assert_eq!(tag_href("IBC & Fraud"), "/blog?tag=IBC%20%26%20Fraud");
    }

    #[test]
    fn test_display_date() {
        let date = chrono::Utc.with_ymd_and_hms(2024, 3, 12, 9, 0, 0).unwrap();
        assert_eq!(display_date(Some(date)).as_deref(), Some("12 March 2024"));
        assert_eq!(display_date(None), None);
    }
}
