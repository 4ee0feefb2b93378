use axum::extract::DefaultBodyLimit;
use axum::routing::{delete, get, post, put};
use axum::Router;

use crate::api::{admin, public, upload};
use crate::auth::gate;
use crate::state::AppState;

/// The JSON API, shared by the server binary and the integration tests.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Public
        .route("/api/v1/services", get(public::list_services_handler))
        .route("/api/v1/services/{id}", get(public::get_service_handler))
        .route("/api/v1/blogs", get(public::list_blogs_handler))
        .route("/api/v1/blogs/{id}", get(public::get_blog_handler))
        .route("/api/v1/contact", post(public::submit_contact_handler))
        .route(
            "/api/v1/image/{namespace}/{file}",
            get(upload::serve_image_handler),
        )
        // Auth
        .route("/api/auth/login", post(gate::login_handler))
        .route("/api/auth/me", get(gate::me_handler))
        .route("/api/auth/logout", post(gate::logout_handler))
        // Admin
        .route("/api/v1/admin/dashboard", get(admin::dashboard_handler))
        .route(
            "/api/v1/admin/services",
            get(admin::list_services_handler).post(admin::create_service_handler),
        )
        .route(
            "/api/v1/admin/services/{id}",
            put(admin::update_service_handler).delete(admin::delete_service_handler),
        )
        .route(
            "/api/v1/admin/blogs",
            get(admin::list_blogs_handler).post(admin::create_blog_handler),
        )
        .route(
            "/api/v1/admin/blogs/{id}",
            put(admin::update_blog_handler).delete(admin::delete_blog_handler),
        )
        .route(
            "/api/v1/admin/contact-leads",
            get(admin::list_leads_handler),
        )
        .route(
            "/api/v1/admin/contact-leads/{id}",
            delete(admin::delete_lead_handler),
        )
        .route(
            "/api/v1/admin/upload/{namespace}",
            post(upload::upload_image_handler)
                .layer(DefaultBodyLimit::max(upload::MAX_UPLOAD_BYTES)),
        )
        .route(
            "/api/v1/admin/image/{namespace}/{file}",
            delete(upload::delete_image_handler),
        )
}
