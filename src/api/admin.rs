use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use chrono::Utc;

use crate::auth::middleware::AdminSession;
use crate::content::drafts::{BlogInput, RecordInput, ServiceInput};
use crate::content::leads::list_leads;
use crate::content::models::{BlogPost, ContactLead, DashboardCounts, Entry, Service};
use crate::db::repository::CollectionRepository;
use crate::error::AppError;
use crate::state::AppState;

/// Core create logic, separated from the HTTP layer for testability.
///
/// Validates the input, stamps `createdAt` and returns the stored entry.
pub async fn process_create<I: RecordInput>(
    repo: &dyn CollectionRepository<I::Record>,
    input: I,
) -> Result<Entry<I::Record>, AppError> {
    let record = input.into_record(Some(Utc::now()), None)?;
    let id = repo.insert(record).await?;

    repo.find_by_id(&id)
        .await?
        .ok_or_else(|| AppError::Database(format!("Document '{id}' vanished after insert")))
}

/// Core update logic: validate, keep the stored `createdAt`, stamp `updatedAt`.
pub async fn process_update<I: RecordInput>(
    repo: &dyn CollectionRepository<I::Record>,
    id: &str,
    input: I,
) -> Result<Entry<I::Record>, AppError> {
    let existing = repo
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Document '{id}' not found")))?;

    let record = input.into_record(I::created_at(&existing.record), Some(Utc::now()))?;
    repo.update(id, record).await?;

    repo.find_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Document '{id}' not found")))
}

pub async fn process_dashboard(
    services: &dyn CollectionRepository<Service>,
    blogs: &dyn CollectionRepository<BlogPost>,
    leads: &dyn CollectionRepository<ContactLead>,
) -> Result<DashboardCounts, AppError> {
    let (services, blogs, contact_leads) =
        futures::try_join!(services.count(), blogs.count(), leads.count())?;

    Ok(DashboardCounts {
        services,
        blogs,
        contact_leads,
    })
}

/// `GET /api/v1/admin/dashboard`
pub async fn dashboard_handler(
    _session: AdminSession,
    State(state): State<AppState>,
) -> Result<Json<DashboardCounts>, AppError> {
    let counts =
        process_dashboard(state.services.as_ref(), state.blogs.as_ref(), state.leads.as_ref())
            .await?;
    Ok(Json(counts))
}

/// `GET /api/v1/admin/services`
pub async fn list_services_handler(
    _session: AdminSession,
    State(state): State<AppState>,
) -> Result<Json<Vec<Entry<Service>>>, AppError> {
    let mut services = state.services.list_all().await?;
    crate::content::catalog::sort_services(&mut services);
    Ok(Json(services))
}

/// `POST /api/v1/admin/services`
pub async fn create_service_handler(
    session: AdminSession,
    State(state): State<AppState>,
    Json(input): Json<ServiceInput>,
) -> Result<(StatusCode, Json<Entry<Service>>), AppError> {
    let created = process_create(state.services.as_ref(), input).await?;
    tracing::info!(id = %created.id, admin = %session.email, "Service created");
    Ok((StatusCode::CREATED, Json(created)))
}

/// `PUT /api/v1/admin/services/{id}`
pub async fn update_service_handler(
    session: AdminSession,
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(input): Json<ServiceInput>,
) -> Result<Json<Entry<Service>>, AppError> {
    let updated = process_update(state.services.as_ref(), &id, input).await?;
    tracing::info!(id = %id, admin = %session.email, "Service updated");
    Ok(Json(updated))
}

/// `DELETE /api/v1/admin/services/{id}`
pub async fn delete_service_handler(
    session: AdminSession,
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, AppError> {
    state.services.delete(&id).await?;
    tracing::info!(id = %id, admin = %session.email, "Service deleted");
    Ok(StatusCode::NO_CONTENT)
}

/// `GET /api/v1/admin/blogs`
pub async fn list_blogs_handler(
    _session: AdminSession,
    State(state): State<AppState>,
) -> Result<Json<Vec<Entry<BlogPost>>>, AppError> {
    let mut blogs = state.blogs.list_all().await?;
    crate::content::catalog::sort_blog_posts(&mut blogs);
    Ok(Json(blogs))
}

/// `POST /api/v1/admin/blogs`
pub async fn create_blog_handler(
    session: AdminSession,
    State(state): State<AppState>,
    Json(input): Json<BlogInput>,
) -> Result<(StatusCode, Json<Entry<BlogPost>>), AppError> {
    let created = process_create(state.blogs.as_ref(), input).await?;
    tracing::info!(id = %created.id, admin = %session.email, "Blog post created");
    Ok((StatusCode::CREATED, Json(created)))
}

/// `PUT /api/v1/admin/blogs/{id}`
pub async fn update_blog_handler(
    session: AdminSession,
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(input): Json<BlogInput>,
) -> Result<Json<Entry<BlogPost>>, AppError> {
    let updated = process_update(state.blogs.as_ref(), &id, input).await?;
    tracing::info!(id = %id, admin = %session.email, "Blog post updated");
    Ok(Json(updated))
}

/// `DELETE /api/v1/admin/blogs/{id}`
pub async fn delete_blog_handler(
    session: AdminSession,
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, AppError> {
    state.blogs.delete(&id).await?;
    tracing::info!(id = %id, admin = %session.email, "Blog post deleted");
    Ok(StatusCode::NO_CONTENT)
}

/// `GET /api/v1/admin/contact-leads`
pub async fn list_leads_handler(
    _session: AdminSession,
    State(state): State<AppState>,
) -> Result<Json<Vec<Entry<ContactLead>>>, AppError> {
    Ok(Json(list_leads(state.leads.as_ref()).await?))
}

/// `DELETE /api/v1/admin/contact-leads/{id}`
pub async fn delete_lead_handler(
    session: AdminSession,
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, AppError> {
    state.leads.delete(&id).await?;
    tracing::info!(id = %id, admin = %session.email, "Contact lead deleted");
    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::repository::testing::{MemoryRepository, UnreachableRepository};

    fn service_input(title: &str) -> ServiceInput {
        ServiceInput {
            title: title.to_string(),
            description: "We appear before the family courts.".to_string(),
            features: vec!["Custody".to_string(), "".to_string(), "  ".to_string()],
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_create_drops_empty_features_and_stamps_created() {
        let repo: MemoryRepository<Service> = MemoryRepository::new();

        let created = process_create(&repo, service_input("Family Law")).await.unwrap();

        assert_eq!(created.record.features, vec!["Custody"]);
        assert!(created.record.created_at.is_some());
        assert!(created.record.updated_at.is_none());
        assert_eq!(repo.snapshot().len(), 1);
    }

    #[tokio::test]
    async fn test_create_rejects_invalid_without_writing() {
        let repo: MemoryRepository<BlogPost> = MemoryRepository::new();
        let input = BlogInput {
            title: "Bail".to_string(),
            ..Default::default()
        };

        let result = process_create(&repo, input).await;
        assert!(matches!(result, Err(AppError::BadRequest(_))));
        assert!(repo.snapshot().is_empty());
    }

    #[tokio::test]
    async fn test_update_preserves_created_at() {
        let repo: MemoryRepository<Service> = MemoryRepository::new();
        let created = process_create(&repo, service_input("Family Law")).await.unwrap();
        let created_at = created.record.created_at;

        let updated = process_update(&repo, &created.id, service_input("Family & Matrimonial Law"))
            .await
            .unwrap();

        assert_eq!(updated.record.title, "Family & Matrimonial Law");
        assert_eq!(updated.record.created_at, created_at);
        assert!(updated.record.updated_at.is_some());
    }

    #[tokio::test]
    async fn test_update_missing_is_not_found() {
        let repo: MemoryRepository<Service> = MemoryRepository::new();
        let result = process_update(&repo, "missing", service_input("X")).await;
        assert!(matches!(result, Err(AppError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_store_failure_surfaces() {
        let result = process_create::<ServiceInput>(&UnreachableRepository, service_input("X")).await;
        assert!(matches!(result, Err(AppError::Database(_))));
    }

    #[tokio::test]
    async fn test_dashboard_counts() {
        let services: MemoryRepository<Service> = MemoryRepository::new();
        process_create(&services, service_input("A")).await.unwrap();
        process_create(&services, service_input("B")).await.unwrap();
        let blogs: MemoryRepository<BlogPost> = MemoryRepository::new();
        let leads: MemoryRepository<ContactLead> = MemoryRepository::new();
        leads.insert(ContactLead::default()).await.unwrap();

        let counts = process_dashboard(&services, &blogs, &leads).await.unwrap();
        assert_eq!(
            counts,
            DashboardCounts {
                services: 2,
                blogs: 0,
                contact_leads: 1
            }
        );
    }
}
