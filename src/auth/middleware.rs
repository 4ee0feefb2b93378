use axum::extract::{FromRequestParts, Request, State};
use axum::http::request::Parts;
use axum::http::HeaderMap;
use axum::middleware::Next;
use axum::response::{IntoResponse, Redirect, Response};
use axum_extra::extract::CookieJar;

use crate::auth::session::{GateState, SessionKeys};
use crate::error::AppError;
use crate::state::AppState;

pub const LOGIN_PATH: &str = "/admin/login";
pub const DASHBOARD_PATH: &str = "/admin/dashboard";

/// Proof that the request carries a valid admin session.
///
/// Use it as an extractor on every admin handler; requests without a valid
/// session are rejected with 401.
#[derive(Debug, Clone)]
pub struct AdminSession {
    pub email: String,
}

impl AdminSession {
    pub fn from_headers(headers: &HeaderMap, keys: &SessionKeys) -> Result<Self, AppError> {
        match GateState::from_cookies(&CookieJar::from_headers(headers), keys) {
            GateState::Authenticated { email } => Ok(AdminSession { email }),
            GateState::Unauthenticated => Err(AppError::Auth("Not logged in".into())),
        }
    }
}

impl FromRequestParts<AppState> for AdminSession {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        AdminSession::from_headers(&parts.headers, state.gate.keys())
    }
}

/// Where a page request should go, given its path and session state.
///
/// `None` lets the request through.
pub fn page_redirect(path: &str, state: &GateState) -> Option<&'static str> {
    let path = path.trim_end_matches('/');
    if path == LOGIN_PATH {
        return state.is_authenticated().then_some(DASHBOARD_PATH);
    }

    let is_admin_page = path == "/admin" || path.starts_with("/admin/");
    if !is_admin_page {
        return None;
    }
    if !state.is_authenticated() {
        return Some(LOGIN_PATH);
    }
    (path == "/admin").then_some(DASHBOARD_PATH)
}

/// Page gate for the `/admin` area. API routes live under `/api` and are
/// guarded by [`AdminSession`] instead.
pub async fn admin_page_gate(
    State(state): State<AppState>,
    jar: CookieJar,
    request: Request,
    next: Next,
) -> Response {
    let gate_state = GateState::from_cookies(&jar, state.gate.keys());

    match page_redirect(request.uri().path(), &gate_state) {
        Some(target) => {
            tracing::debug!(path = %request.uri().path(), target, "Admin gate redirect");
            Redirect::to(target).into_response()
        }
        None => next.run(request).await,
    }
}
