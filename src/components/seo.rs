use leptos::prelude::*;
use leptos_meta::{Link, Meta, Title};
use serde::{Deserialize, Serialize};

pub const SITE_NAME: &str = "Decode Law with Gauri";
/// Origin used when none is configured (`site.base_url` defaults to the same value).
pub const DEFAULT_SITE_ORIGIN: &str = "https://www.decodelawwithgauri.com";
pub const SITE_DESCRIPTION: &str = "Strategic legal solutions for modern businesses. \
    Contract law, fintech disputes, IBC litigation and AI law.";
const AUTHOR: &str = "Advocate Gauri Saraswat";

/// Browser title for a page; the home page passes an empty string.
pub fn full_title(text: &str) -> String {
    if text.is_empty() {
        SITE_NAME.to_string()
    } else {
        format!("{text} | {SITE_NAME}")
    }
}

/// Public origin of the site, taken from `site.base_url` on the server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteOrigin(String);

impl SiteOrigin {
    pub fn new(base_url: &str) -> Self {
        Self(base_url.trim_end_matches('/').to_string())
    }

    /// Absolute URL on the public site. Absolute inputs are returned unchanged.
    pub fn absolute_url(&self, path: &str) -> String {
        if path.starts_with("http://") || path.starts_with("https://") {
            return path.to_string();
        }
        format!("{}/{}", self.0, path.trim_start_matches('/'))
    }
}

impl Default for SiteOrigin {
    fn default() -> Self {
        Self::new(DEFAULT_SITE_ORIGIN)
    }
}

/// Make the configured origin available to `Seo`.
///
/// The server reads the `SiteOrigin` it was given as context and ships it with
/// the hydration data, so client-side navigation builds the same URLs.
pub fn provide_site_origin() {
    let origin = SharedValue::new(|| use_context::<SiteOrigin>().unwrap_or_default()).into_inner();
    provide_context(origin);
}

/// Title, description, canonical link and social preview tags for a public page.
///
/// Image tags are emitted only when the page has an image.
#[component]
pub fn Seo(
    #[prop(into)] title: String,
    #[prop(into)] path: String,
    #[prop(into, optional)] description: Option<String>,
    #[prop(optional_no_strip)] image: Option<String>,
) -> impl IntoView {
    let description = description
        .filter(|d| !d.trim().is_empty())
        .unwrap_or_else(|| SITE_DESCRIPTION.to_string());
    let origin = use_context::<SiteOrigin>().unwrap_or_default();
    let url = origin.absolute_url(&path);
    let image = image.as_deref().map(|image| origin.absolute_url(image));
    let social_title = full_title(&title);

    view! {
        <Title text=title/>
        <Meta name="description" content=description.clone()/>
        <Meta name="author" content=AUTHOR/>
        <Link rel="canonical" href=url.clone()/>

        <Meta property="og:type" content="website"/>
        <Meta property="og:url" content=url/>
        <Meta property="og:title" content=social_title.clone()/>
        <Meta property="og:description" content=description.clone()/>

        <Meta name="twitter:card" content="summary_large_image"/>
        <Meta name="twitter:title" content=social_title/>
        <Meta name="twitter:description" content=description/>
        {image.map(|image| view! {
            <Meta property="og:image" content=image.clone()/>
            <Meta name="twitter:image" content=image/>
        })}
    }
}
