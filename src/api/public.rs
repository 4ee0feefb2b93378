use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::content::catalog::{blog_detail, blog_index, service_listing, service_lookup, BlogDetail, BlogIndex};
use crate::content::fallback::{Listing, LookupResponse};
use crate::content::leads::{submit_lead, LeadSubmission};
use crate::content::models::Service;
use crate::error::AppError;
use crate::state::AppState;

/// Query parameters for `GET /api/v1/blogs`.
#[derive(Debug, Default, Deserialize)]
pub struct BlogQuery {
    #[serde(default)]
    pub q: String,
    #[serde(default)]
    pub tag: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CreatedResponse {
    pub id: String,
}

/// `GET /api/v1/services`
pub async fn list_services_handler(State(state): State<AppState>) -> Json<Listing<Service>> {
    Json(service_listing(state.services.as_ref()).await)
}

/// `GET /api/v1/services/{id}`
pub async fn get_service_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<LookupResponse<Service>>, AppError> {
    service_lookup(state.services.as_ref(), &id)
        .await
        .into_response()
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("Service '{id}' not found")))
}

/// `GET /api/v1/blogs?q=&tag=`
pub async fn list_blogs_handler(
    State(state): State<AppState>,
    Query(query): Query<BlogQuery>,
) -> Json<BlogIndex> {
    Json(blog_index(state.blogs.as_ref(), &query.q, query.tag.as_deref()).await)
}

/// `GET /api/v1/blogs/{id}`
pub async fn get_blog_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<BlogDetail>, AppError> {
    blog_detail(state.blogs.as_ref(), &id)
        .await
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("Blog post '{id}' not found")))
}

/// `POST /api/v1/contact`
pub async fn submit_contact_handler(
    State(state): State<AppState>,
    Json(submission): Json<LeadSubmission>,
) -> Result<(StatusCode, Json<CreatedResponse>), AppError> {
    let id = submit_lead(state.leads.as_ref(), submission).await?;
    Ok((StatusCode::CREATED, Json(CreatedResponse { id })))
}
