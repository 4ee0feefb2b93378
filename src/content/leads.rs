use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::content::models::{newest_first, ContactLead, Entry};
use crate::db::repository::CollectionRepository;
use crate::error::AppError;

/// Subject line choices offered by the contact form.
pub const SUBJECT_CHOICES: &[&str] = &[
    "Contract Drafting/Review",
    "Fintech & Banking",
    "IBC & Insolvency",
    "AI & Technology Law",
    OTHER_SUBJECT,
];

/// Choice that swaps in the visitor's own subject text.
pub const OTHER_SUBJECT: &str = "Other";

fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut err = ValidationError::new("blank");
        err.message = Some("must not be blank".into());
        return Err(err);
    }
    Ok(())
}

/// A contact-form submission as posted by a visitor.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct LeadSubmission {
    #[validate(custom(function = "not_blank"))]
    pub name: String,
    #[validate(email(message = "must be a valid email address"))]
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub subject: String,
    #[serde(default)]
    pub custom_subject: Option<String>,
    #[validate(custom(function = "not_blank"))]
    pub message: String,
}

/// Work out the subject to persist.
///
/// "Other" takes the trimmed custom subject, which must not be blank. Any
/// other value, including free text, is stored trimmed; an empty subject
/// becomes `None`.
pub fn resolve_subject(subject: &str, custom: Option<&str>) -> Result<Option<String>, AppError> {
    let subject = subject.trim();
    if subject == OTHER_SUBJECT {
        let custom = custom.map(str::trim).unwrap_or_default();
        if custom.is_empty() {
            return Err(AppError::BadRequest(
                "Please describe your subject".to_string(),
            ));
        }
        return Ok(Some(custom.to_string()));
    }
    Ok((!subject.is_empty()).then(|| subject.to_string()))
}

impl LeadSubmission {
    /// Validate and turn the submission into a lead stamped with `received_at`.
    pub fn into_lead(self, received_at: DateTime<Utc>) -> Result<ContactLead, AppError> {
        self.validate()?;
        let subject = resolve_subject(&self.subject, self.custom_subject.as_deref())?;

        Ok(ContactLead {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            phone: self
                .phone
                .map(|p| p.trim().to_string())
                .filter(|p| !p.is_empty()),
            subject,
            message: self.message.trim().to_string(),
            created_at: Some(received_at),
        })
    }
}

/// Persist a public submission and return the new lead's identifier.
pub async fn submit_lead(
    repo: &dyn CollectionRepository<ContactLead>,
    submission: LeadSubmission,
) -> Result<String, AppError> {
    let lead = submission.into_lead(Utc::now())?;
    let id = repo.insert(lead).await?;
    tracing::info!(lead_id = %id, "Stored contact lead");
    Ok(id)
}

/// All leads, newest first.
pub async fn list_leads(
    repo: &dyn CollectionRepository<ContactLead>,
) -> Result<Vec<Entry<ContactLead>>, AppError> {
    let mut leads = repo.list_all().await?;
    leads.sort_by(|a, b| newest_first(&a.record.created_at, &b.record.created_at));
    Ok(leads)
}
