use axum_extra::extract::cookie::Cookie;
use axum_extra::extract::CookieJar;
use serde::{Deserialize, Serialize};

use crate::auth::session::{removal_cookie, session_cookie, SessionKeys};
use crate::config::AdminSettings;
use crate::error::AppError;

/// The configured admin account and the keys used to sign its sessions.
#[derive(Clone)]
pub struct AdminGate {
    email: String,
    password: String,
    keys: SessionKeys,
}

impl AdminGate {
    pub fn new(email: impl Into<String>, password: impl Into<String>, keys: SessionKeys) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
            keys,
        }
    }

    pub fn from_settings(settings: &AdminSettings) -> Self {
        Self::new(
            settings.email.clone(),
            settings.password.clone(),
            SessionKeys::new(settings.session_secret.clone(), settings.session_ttl_hours),
        )
    }

    pub fn keys(&self) -> &SessionKeys {
        &self.keys
    }

    /// Compare submitted credentials with the configured ones, verbatim.
    pub fn verify(&self, email: &str, password: &str) -> Result<(), AppError> {
        if email == self.email && password == self.password {
            Ok(())
        } else {
            Err(AppError::Auth("Invalid credentials".into()))
        }
    }

    /// Verify credentials and build the session cookie for them.
    pub fn start_session(&self, email: &str, password: &str) -> Result<Cookie<'static>, AppError> {
        if let Err(e) = self.verify(email, password) {
            tracing::warn!("Rejected admin login attempt");
            return Err(e);
        }

        let token = self
            .keys
            .issue(email)
            .map_err(|e| AppError::Internal(format!("Failed to sign session: {e}")))?;

        tracing::info!(email, "Admin signed in");
        Ok(session_cookie(token, self.keys.ttl_hours()))
    }

    /// Verify credentials and add a fresh session cookie to `jar`.
    pub fn login(&self, jar: CookieJar, email: &str, password: &str) -> Result<CookieJar, AppError> {
        Ok(jar.add(self.start_session(email, password)?))
    }
}

/// Login request body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Login response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub message: String,
    pub email: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MeResponse {
    pub email: String,
}

/// `POST /api/auth/login`
///
/// On success sets the `lexfolio_admin` cookie. A mismatch is a 401 and
/// leaves the cookie jar untouched.
pub async fn login_handler(
    axum::extract::State(state): axum::extract::State<crate::state::AppState>,
    jar: CookieJar,
    axum::Json(req): axum::Json<LoginRequest>,
) -> Result<(CookieJar, axum::Json<LoginResponse>), AppError> {
    let jar = state.gate.login(jar, &req.email, &req.password)?;

    Ok((
        jar,
        axum::Json(LoginResponse {
            message: "Login successful".to_string(),
            email: req.email,
        }),
    ))
}

/// `GET /api/auth/me`
pub async fn me_handler(
    session: crate::auth::middleware::AdminSession,
) -> axum::Json<MeResponse> {
    axum::Json(MeResponse {
        email: session.email,
    })
}

/// `POST /api/auth/logout`
pub async fn logout_handler(jar: CookieJar) -> CookieJar {
    jar.remove(removal_cookie())
}
