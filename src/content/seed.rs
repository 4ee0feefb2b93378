//! Fallback content compiled into the binary.
//!
//! Public pages serve these records when the content store is empty or
//! unreachable, and detail pages consult them by identifier before giving up.
//! Seed records carry no timestamps.

use crate::content::models::{BlogPost, Entry, Service};

const PLACEHOLDER_IMAGE: &str = "/placeholder.svg";

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// The three fallback blog posts, in display order.
pub fn seed_blog_posts() -> Vec<Entry<BlogPost>> {
    vec![
        Entry::new(
            "1",
            BlogPost {
                title: "Legal Rights Every Citizen Should Know".to_string(),
                short_description: String::new(),
                summary: "A quick guide to your fundamental legal rights in India.".to_string(),
                content: include_str!("../../seed_data/legal_rights.md").to_string(),
                image_url: Some(PLACEHOLDER_IMAGE.to_string()),
                tags: strings(&["Legal Rights", "Constitution", "Fundamental Rights"]),
                created_at: None,
                updated_at: None,
            },
        ),
        Entry::new(
            "2",
            BlogPost {
                title: "How to Choose the Right Advocate".to_string(),
                short_description: String::new(),
                summary: "Tips and tricks for selecting the best legal representation.".to_string(),
                content: include_str!("../../seed_data/choosing_an_advocate.md").to_string(),
                image_url: Some(PLACEHOLDER_IMAGE.to_string()),
                tags: strings(&["Legal Advice", "Advocate Selection", "Legal Representation"]),
                created_at: None,
                updated_at: None,
            },
        ),
        Entry::new(
            "3",
            BlogPost {
                title: "Understanding Family Law".to_string(),
                short_description: String::new(),
                summary: "An overview of family law and what it means for you.".to_string(),
                content: include_str!("../../seed_data/family_law.md").to_string(),
                image_url: Some(PLACEHOLDER_IMAGE.to_string()),
                tags: strings(&["Family Law", "Marriage", "Divorce", "Child Custody"]),
                created_at: None,
                updated_at: None,
            },
        ),
    ]
}

/// The four fallback practice areas, in display order.
pub fn seed_services() -> Vec<Entry<Service>> {
    vec![
        Entry::new(
            "1",
            Service {
                title: "Contract Drafting & Review".to_string(),
                description: "Comprehensive contract services ensuring your agreements are ironclad and business-friendly.".to_string(),
                icon: Some("📄".to_string()),
                features: strings(&[
                    "SaaS and Software Licensing Agreements",
                    "Non-Disclosure and Confidentiality Agreements",
                    "Employment and Consulting Contracts",
                    "Partnership and Joint Venture Agreements",
                    "Terms of Service and Privacy Policies",
                    "Commercial and Supply Agreements",
                ]),
                pricing: Some("Starting from ₹15,000".to_string()),
                ..Default::default()
            },
        ),
        Entry::new(
            "2",
            Service {
                title: "Fintech & Banking Disputes".to_string(),
                description: "Navigate complex financial regulations and resolve banking disputes effectively.".to_string(),
                icon: Some("💳".to_string()),
                features: strings(&[
                    "RBI Compliance and Regulatory Advice",
                    "SARFAESI Action Defense",
                    "Cheque Bounce and Payment Disputes",
                    "Payment Gateway Legal Issues",
                    "Digital Banking Compliance",
                    "Cryptocurrency Legal Framework",
                ]),
                pricing: Some("Case-based pricing".to_string()),
                ..Default::default()
            },
        ),
        Entry::new(
            "3",
            Service {
                title: "IBC & Fraud Resolution".to_string(),
                description: "Expert representation in insolvency proceedings and corporate restructuring matters.".to_string(),
                icon: Some("⚖️".to_string()),
                features: strings(&[
                    "IBC Proceedings and Applications",
                    "NCLT Representation",
                    "Corporate Insolvency Resolution Process",
                    "Liquidation Proceedings",
                    "Fraudulent Trading Cases",
                    "Asset Recovery and Restructuring",
                ]),
                pricing: Some("Consultation required".to_string()),
                ..Default::default()
            },
        ),
        Entry::new(
            "4",
            Service {
                title: "LegalTech & AI Governance".to_string(),
                description: "Cutting-edge legal counsel for AI startups and technology companies.".to_string(),
                icon: Some("🤖".to_string()),
                features: strings(&[
                    "AI and Machine Learning Compliance",
                    "Data Protection and Privacy Laws",
                    "Intellectual Property Protection",
                    "Technology Transfer Agreements",
                    "Startup Legal Framework",
                    "Emerging Technology Regulations",
                ]),
                pricing: Some("Starting from ₹25,000".to_string()),
                ..Default::default()
            },
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_blog_titles() {
        let titles: Vec<String> = seed_blog_posts()
            .into_iter()
            .map(|e| e.record.title)
            .collect();
        assert_eq!(
            titles,
            vec![
                "Legal Rights Every Citizen Should Know",
                "How to Choose the Right Advocate",
                "Understanding Family Law",
            ]
        );
    }

    #[test]
    fn test_seed_records_are_undated_with_unique_ids() {
        let posts = seed_blog_posts();
        assert!(posts.iter().all(|p| p.record.created_at.is_none()));
        assert!(posts.iter().all(|p| !p.record.content.trim().is_empty()));

        let services = seed_services();
        let mut ids: Vec<&str> = services.iter().map(|s| s.id.as_str()).collect();
        ids.dedup();
        assert_eq!(ids, vec!["1", "2", "3", "4"]);
        assert!(services.iter().all(|s| s.record.features.len() == 6));
    }
}
