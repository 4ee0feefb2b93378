//! In-progress admin form state and the payloads the admin API accepts.
//!
//! The browser edits drafts locally; the server validates and normalises the
//! resulting input before anything reaches the store.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::content::models::{BlogPost, Entry, Service};
use crate::error::AppError;

/// Ordered list of strings edited in place (service features, blog tags).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListDraft {
    items: Vec<String>,
}

impl ListDraft {
    pub fn new(items: Vec<String>) -> Self {
        Self { items }
    }

    pub fn items(&self) -> &[String] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Append an empty row for the user to fill in.
    pub fn push_blank(&mut self) {
        self.items.push(String::new());
    }

    /// Append a trimmed value; blank input is ignored. Returns whether it was added.
    pub fn push_trimmed(&mut self, value: &str) -> bool {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return false;
        }
        self.items.push(trimmed.to_string());
        true
    }

    pub fn set(&mut self, index: usize, value: impl Into<String>) {
        if let Some(item) = self.items.get_mut(index) {
            *item = value.into();
        }
    }

    pub fn remove(&mut self, index: usize) {
        if index < self.items.len() {
            self.items.remove(index);
        }
    }

    pub fn move_up(&mut self, index: usize) {
        if index > 0 && index < self.items.len() {
            self.items.swap(index - 1, index);
        }
    }

    pub fn move_down(&mut self, index: usize) {
        if index + 1 < self.items.len() {
            self.items.swap(index, index + 1);
        }
    }

    /// The entries that are non-empty after trimming, trimmed, in order.
    pub fn flatten(&self) -> Vec<String> {
        flatten_list(&self.items)
    }

    pub fn apply(&mut self, edit: ListEdit) {
        match edit {
            ListEdit::Add => self.push_blank(),
            ListEdit::Set(index, value) => self.set(index, value),
            ListEdit::Remove(index) => self.remove(index),
            ListEdit::MoveUp(index) => self.move_up(index),
            ListEdit::MoveDown(index) => self.move_down(index),
        }
    }
}

/// A single change requested by the list editor widget.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListEdit {
    Add,
    Set(usize, String),
    Remove(usize),
    MoveUp(usize),
    MoveDown(usize),
}

/// Drop entries that are empty after trimming; trim the rest.
pub fn flatten_list(items: &[String]) -> Vec<String> {
    items
        .iter()
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

fn optional(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

fn require(field: &str, value: &str) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::BadRequest(format!("{field} is required")));
    }
    Ok(())
}

/// Payload for creating or updating a service.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ServiceInput {
    pub title: String,
    pub short_description: String,
    pub description: String,
    pub long_description: Option<String>,
    pub icon: Option<String>,
    pub image_url: Option<String>,
    pub features: Vec<String>,
    pub pricing: Option<String>,
}

/// Admin payload that validates and normalises into a storable record.
pub trait RecordInput: Send {
    type Record: Send + Sync + 'static;

    /// `created_at` is carried over from the stored record on update.
    fn into_record(
        self,
        created_at: Option<DateTime<Utc>>,
        updated_at: Option<DateTime<Utc>>,
    ) -> Result<Self::Record, AppError>;

    fn created_at(record: &Self::Record) -> Option<DateTime<Utc>>;
}

impl RecordInput for ServiceInput {
    type Record = Service;

    fn into_record(
        self,
        created_at: Option<DateTime<Utc>>,
        updated_at: Option<DateTime<Utc>>,
    ) -> Result<Service, AppError> {
        require("Title", &self.title)?;
        require("Description", &self.description)?;

        Ok(Service {
            title: self.title.trim().to_string(),
            short_description: self.short_description.trim().to_string(),
            description: self.description.trim().to_string(),
            long_description: self.long_description.as_deref().and_then(optional),
            icon: self.icon.as_deref().and_then(optional),
            image_url: self.image_url.as_deref().and_then(optional),
            features: flatten_list(&self.features),
            pricing: self.pricing.as_deref().and_then(optional),
            created_at,
            updated_at,
        })
    }

    fn created_at(record: &Service) -> Option<DateTime<Utc>> {
        record.created_at
    }
}

/// Payload for creating or updating a blog post.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BlogInput {
    pub title: String,
    pub short_description: String,
    pub summary: String,
    pub content: String,
    pub image_url: Option<String>,
    pub tags: Vec<String>,
}

impl RecordInput for BlogInput {
    type Record = BlogPost;

    fn into_record(
        self,
        created_at: Option<DateTime<Utc>>,
        updated_at: Option<DateTime<Utc>>,
    ) -> Result<BlogPost, AppError> {
        require("Title", &self.title)?;
        require("Summary", &self.summary)?;
        require("Content", &self.content)?;

        Ok(BlogPost {
            title: self.title.trim().to_string(),
            short_description: self.short_description.trim().to_string(),
            summary: self.summary.trim().to_string(),
            content: self.content,
            image_url: self.image_url.as_deref().and_then(optional),
            tags: flatten_list(&self.tags),
            created_at,
            updated_at,
        })
    }

    fn created_at(record: &BlogPost) -> Option<DateTime<Utc>> {
        record.created_at
    }
}

/// A form draft that can start from a stored record and produce an API payload.
pub trait Draft: Default + Clone {
    type Record;
    type Input;

    fn from_entry(entry: &Entry<Self::Record>) -> Self;
    fn into_input(self) -> Self::Input;
}

/// Service form state.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ServiceDraft {
    pub title: String,
    pub short_description: String,
    pub description: String,
    pub long_description: String,
    pub icon: String,
    pub image_url: Option<String>,
    pub features: ListDraft,
    pub pricing: String,
}

impl ServiceDraft {
    /// Forget the image reference. The blob itself stays in storage.
    pub fn clear_image(&mut self) {
        self.image_url = None;
    }
}

impl Draft for ServiceDraft {
    type Record = Service;
    type Input = ServiceInput;

    fn from_entry(entry: &Entry<Service>) -> Self {
        let r = &entry.record;
        Self {
            title: r.title.clone(),
            short_description: r.short_description.clone(),
            description: r.description.clone(),
            long_description: r.long_description.clone().unwrap_or_default(),
            icon: r.icon.clone().unwrap_or_default(),
            image_url: r.image_url.clone(),
            features: ListDraft::new(r.features.clone()),
            pricing: r.pricing.clone().unwrap_or_default(),
        }
    }

    fn into_input(self) -> ServiceInput {
        ServiceInput {
            title: self.title,
            short_description: self.short_description,
            description: self.description,
            long_description: Some(self.long_description),
            icon: Some(self.icon),
            image_url: self.image_url,
            features: self.features.flatten(),
            pricing: Some(self.pricing),
        }
    }
}

/// Blog post form state. Tags are entered one at a time through `tag_input`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BlogDraft {
    pub title: String,
    pub short_description: String,
    pub summary: String,
    pub content: String,
    pub image_url: Option<String>,
    pub tags: ListDraft,
    pub tag_input: String,
}

impl BlogDraft {
    pub fn clear_image(&mut self) {
        self.image_url = None;
    }

    /// Move the pending tag text into the tag list.
    pub fn commit_tag(&mut self) {
        if self.tags.push_trimmed(&self.tag_input) {
            self.tag_input.clear();
        }
    }
}

impl Draft for BlogDraft {
    type Record = BlogPost;
    type Input = BlogInput;

    fn from_entry(entry: &Entry<BlogPost>) -> Self {
        let r = &entry.record;
        Self {
            title: r.title.clone(),
            short_description: r.short_description.clone(),
            summary: r.summary.clone(),
            content: r.content.clone(),
            image_url: r.image_url.clone(),
            tags: ListDraft::new(r.tags.clone()),
            tag_input: String::new(),
        }
    }

    fn into_input(self) -> BlogInput {
        BlogInput {
            title: self.title,
            short_description: self.short_description,
            summary: self.summary,
            content: self.content,
            image_url: self.image_url,
            tags: self.tags.flatten(),
        }
    }
}

/// Which of the editor's two drafts a form is bound to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorSlot {
    New,
    Edit,
}

/// One "new record" draft plus at most one "edit record" draft.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AdminEditor<D> {
    pub new_draft: D,
    pub editing: Option<(String, D)>,
}

impl<D: Draft> AdminEditor<D> {
    pub fn draft(&self, slot: EditorSlot) -> Option<&D> {
        match slot {
            EditorSlot::New => Some(&self.new_draft),
            EditorSlot::Edit => self.editing.as_ref().map(|(_, draft)| draft),
        }
    }

    pub fn draft_mut(&mut self, slot: EditorSlot) -> Option<&mut D> {
        match slot {
            EditorSlot::New => Some(&mut self.new_draft),
            EditorSlot::Edit => self.editing.as_mut().map(|(_, draft)| draft),
        }
    }

    /// Start editing a record, discarding any edit already in progress.
    pub fn begin_edit(&mut self, entry: &Entry<D::Record>) {
        self.editing = Some((entry.id.clone(), D::from_entry(entry)));
    }

    pub fn cancel_edit(&mut self) {
        self.editing = None;
    }

    pub fn editing_id(&self) -> Option<&str> {
        self.editing.as_ref().map(|(id, _)| id.as_str())
    }

    /// Reset the new-record form after a successful create.
    pub fn created(&mut self) {
        self.new_draft = D::default();
    }

    /// Close the edit form after a successful update.
    pub fn updated(&mut self) {
        self.editing = None;
    }
}
