use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A stored record together with the identifier the content store assigned to it.
///
/// The record fields are flattened, so on the wire an entry looks like the
/// underlying document with an extra `id` field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entry<T> {
    pub id: String,
    #[serde(flatten)]
    pub record: T,
}

impl<T> Entry<T> {
    pub fn new(id: impl Into<String>, record: T) -> Self {
        Self {
            id: id.into(),
            record,
        }
    }
}

/// A practice area offered by the firm (`services` collection).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Service {
    pub title: String,
    #[serde(default)]
    pub short_description: String,
    pub description: String,
    #[serde(default)]
    pub long_description: Option<String>,
    #[serde(default)]
    pub icon: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    /// Ordered bullet points shown on the detail page.
    #[serde(default)]
    pub features: Vec<String>,
    #[serde(default)]
    pub pricing: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Service {
    /// Text shown on cards: the short description when present, the full one otherwise.
    pub fn card_text(&self) -> &str {
        if self.short_description.trim().is_empty() {
            &self.description
        } else {
            &self.short_description
        }
    }
}

/// An article in the `blogs` collection.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogPost {
    pub title: String,
    #[serde(default)]
    pub short_description: String,
    pub summary: String,
    /// Markdown body.
    pub content: String,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl BlogPost {
    pub fn card_text(&self) -> &str {
        if self.short_description.trim().is_empty() {
            &self.summary
        } else {
            &self.short_description
        }
    }
}

/// A contact-form submission awaiting review (`contactLeads` collection).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactLead {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub subject: Option<String>,
    pub message: String,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// Where a listing or a detail record came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ContentSource {
    /// Read from the content store.
    Store,
    /// The store answered but had nothing to offer; seed data was used.
    SeedEmpty,
    /// The store could not be read; seed data was used.
    SeedUnavailable,
}

/// Counts shown on the admin dashboard.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardCounts {
    pub services: u64,
    pub blogs: u64,
    pub contact_leads: u64,
}

/// Newest-first ordering key; records without a timestamp sort last.
pub(crate) fn newest_first(
    a: &Option<DateTime<Utc>>,
    b: &Option<DateTime<Utc>>,
) -> std::cmp::Ordering {
    match (a, b) {
        (Some(a), Some(b)) => b.cmp(a),
        (Some(_), None) => std::cmp::Ordering::Less,
        (None, Some(_)) => std::cmp::Ordering::Greater,
        (None, None) => std::cmp::Ordering::Equal,
    }
}
