use chrono::{DateTime, Duration, Utc};

use crate::content::models::{BlogPost, ContactLead, Service};
use crate::db::repository::CollectionRepository;

/// What happened to one collection during seeding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedOutcome {
    Inserted(usize),
    SkippedNonEmpty,
    Failed,
}

/// Insert `records` into the collection behind `repo`, but only if it is empty.
///
/// Failures are logged and reported, never propagated.
pub async fn seed_collection<T>(
    repo: &dyn CollectionRepository<T>,
    collection: &str,
    records: Vec<T>,
) -> SeedOutcome
where
    T: Send + Sync + 'static,
{
    match repo.count().await {
        Ok(0) => {}
        Ok(existing) => {
            tracing::info!(collection, existing, "Collection already has documents, skipping.");
            return SeedOutcome::SkippedNonEmpty;
        }
        Err(e) => {
            tracing::error!(collection, error = %e, "Failed to inspect collection");
            return SeedOutcome::Failed;
        }
    }

    let mut inserted = 0;
    for record in records {
        match repo.insert(record).await {
            Ok(id) => {
                tracing::debug!(collection, id = %id, "Inserted demo document");
                inserted += 1;
            }
            Err(e) => {
                tracing::error!(collection, error = %e, "Failed to insert demo document");
                return SeedOutcome::Failed;
            }
        }
    }

    tracing::info!(collection, inserted, "Seeded demo documents.");
    SeedOutcome::Inserted(inserted)
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

pub fn demo_services(now: DateTime<Utc>) -> Vec<Service> {
    let service = |title: &str,
                   short: &str,
                   description: &str,
                   long: &str,
                   icon: &str,
                   features: &[&str],
                   pricing: &str| Service {
        title: title.to_string(),
        short_description: short.to_string(),
        description: description.to_string(),
        long_description: Some(long.to_string()),
        icon: Some(icon.to_string()),
        image_url: None,
        features: strings(features),
        pricing: Some(pricing.to_string()),
        created_at: Some(now),
        updated_at: None,
    };

    vec![
        service(
            "Family Law",
            "Expert legal assistance for all family-related legal matters",
            "Divorce, child custody, adoption and domestic violence cases.",
            include_str!("../demo_data/services/family_law.md"),
            "home",
            &[
                "Divorce proceedings and settlements",
                "Child custody and visitation arrangements",
                "Child and spousal maintenance",
                "Adoption legal processes",
                "Domestic violence protection orders",
            ],
            "Starting from ₹20,000",
        ),
        service(
            "Criminal Defense",
            "Strong legal defense for all criminal charges",
            "Defending clients against criminal charges of every kind.",
            include_str!("../demo_data/services/criminal_defense.md"),
            "shield",
            &[
                "Bail and anticipatory bail",
                "Trial defence",
                "Economic offences",
                "Drug-related offences",
                "Appeals and revisions",
            ],
            "Case-based pricing",
        ),
        service(
            "Civil Litigation",
            "Effective representation in civil disputes and lawsuits",
            "Representing clients in civil disputes to protect their rights and interests.",
            include_str!("../demo_data/services/civil_litigation.md"),
            "scale",
            &[
                "Property disputes",
                "Contract disputes",
                "Injunctions",
                "Recovery suits",
                "Execution of decrees",
            ],
            "Consultation required",
        ),
        service(
            "Corporate Law",
            "Comprehensive legal services for businesses",
            "Strategic legal guidance for businesses from formation through growth.",
            include_str!("../demo_data/services/corporate_law.md"),
            "briefcase",
            &[
                "Business formation and structuring",
                "Corporate governance",
                "Mergers and acquisitions",
                "Contract drafting and negotiation",
                "Intellectual property protection",
            ],
            "Starting from ₹30,000",
        ),
    ]
}

pub fn demo_blogs(now: DateTime<Utc>) -> Vec<BlogPost> {
    let post = |title: &str, short: &str, summary: &str, content: &str, tags: &[&str]| BlogPost {
        title: title.to_string(),
        short_description: short.to_string(),
        summary: summary.to_string(),
        content: content.to_string(),
        image_url: None,
        tags: strings(tags),
        created_at: Some(now),
        updated_at: None,
    };

    vec![
        post(
            "Understanding Your Rights in Divorce Proceedings",
            "Essential guide to legal rights during divorce",
            "Navigate the legal side of divorce and make sure your rights are protected.",
            include_str!("../demo_data/blogs/divorce_rights.md"),
            &["Divorce Law", "Family Law", "Legal Rights"],
        ),
        post(
            "What to Do If You're Facing Criminal Charges",
            "Immediate steps to take when charged with a crime",
            "Steps to take straight after being charged to protect your rights and future.",
            include_str!("../demo_data/blogs/facing_criminal_charges.md"),
            &["Criminal Law", "Legal Advice", "Rights"],
        ),
        post(
            "The Importance of Estate Planning at Any Age",
            "Why everyone needs estate planning regardless of age",
            "Why everyone should have an estate plan, and how to get started.",
            include_str!("../demo_data/blogs/estate_planning.md"),
            &["Estate Planning", "Legal Planning", "Wills"],
        ),
        post(
            "How to Navigate Employment Discrimination Claims",
            "Understanding and addressing workplace discrimination",
            "Identifying workplace discrimination and addressing it through the proper channels.",
            include_str!("../demo_data/blogs/employment_discrimination.md"),
            &["Employment Law", "Discrimination", "Workplace Rights"],
        ),
    ]
}

pub fn demo_leads(now: DateTime<Utc>) -> Vec<ContactLead> {
    let lead = |name: &str, email: &str, phone: &str, subject: &str, message: &str, days_ago: i64| {
        ContactLead {
            name: name.to_string(),
            email: email.to_string(),
            phone: Some(phone.to_string()),
            subject: Some(subject.to_string()),
            message: message.to_string(),
            created_at: Some(now - Duration::days(days_ago)),
        }
    };

    vec![
        lead(
            "Ananya Sharma",
            "ananya.sharma@example.com",
            "+91 98765 43210",
            "Consultation Request for Property Dispute",
            "I have a boundary dispute with my neighbour and would like to discuss my options. I am free on weekdays after 4 PM.",
            0,
        ),
        lead(
            "Rajesh Kumar",
            "rajesh.kumar@example.com",
            "+91 87654 32109",
            "Query About Divorce Proceedings",
            "I am considering filing for divorce and want to understand the process. I have two minor children and concerns about custody.",
            2,
        ),
        lead(
            "Priya Patel",
            "priya.patel@example.com",
            "+91 76543 21098",
            "Corporate Law Services",
            "I am starting a company and need help with registration, documentation and compliance.",
            5,
        ),
    ]
}

/// Fill empty collections with sample content. Enabled by `seed_demo_data`.
#[cfg(feature = "ssr")]
pub async fn seed_demo_data(state: &crate::state::AppState) {
    use crate::db::repository::{BLOGS, CONTACT_LEADS, SERVICES};

    tracing::info!("Starting demo data seeding...");
    let now = Utc::now();

    seed_collection(state.services.as_ref(), SERVICES, demo_services(now)).await;
    seed_collection(state.blogs.as_ref(), BLOGS, demo_blogs(now)).await;
    seed_collection(state.leads.as_ref(), CONTACT_LEADS, demo_leads(now)).await;

    tracing::info!("Demo data seeding completed.");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::models::Entry;
    use crate::db::repository::testing::{MemoryRepository, UnreachableRepository};

    #[tokio::test]
    async fn test_seeds_empty_collection() {
        let repo: MemoryRepository<Service> = MemoryRepository::new();
        let outcome = seed_collection(&repo, "services", demo_services(Utc::now())).await;

        assert_eq!(outcome, SeedOutcome::Inserted(4));
        let titles: Vec<String> = repo
            .snapshot()
            .into_iter()
            .map(|e| e.record.title)
            .collect();
        assert_eq!(
            titles,
            vec!["Family Law", "Criminal Defense", "Civil Litigation", "Corporate Law"]
        );
    }

    #[tokio::test]
    async fn test_skips_non_empty_collection() {
        let repo = MemoryRepository::with_entries(vec![Entry::new(
            "existing",
            BlogPost {
                title: "Already here".to_string(),
                ..Default::default()
            },
        )]);

        let outcome = seed_collection(&repo, "blogs", demo_blogs(Utc::now())).await;
        assert_eq!(outcome, SeedOutcome::SkippedNonEmpty);
        assert_eq!(repo.snapshot().len(), 1);
    }

    #[tokio::test]
    async fn test_failure_is_reported_not_raised() {
        let outcome =
            seed_collection::<ContactLead>(&UnreachableRepository, "contactLeads", demo_leads(Utc::now()))
                .await;
        assert_eq!(outcome, SeedOutcome::Failed);
    }

    #[test]
    fn test_demo_leads_are_staggered() {
        let now = Utc::now();
        let leads = demo_leads(now);
        assert_eq!(leads.len(), 3);
        assert_eq!(leads[0].created_at, Some(now));
        assert_eq!(leads[2].created_at, Some(now - Duration::days(5)));
    }
}
