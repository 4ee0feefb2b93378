//! Signed admin session carried in an HttpOnly cookie.

use axum_extra::extract::cookie::{Cookie, SameSite};
use axum_extra::extract::CookieJar;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

/// Name of the cookie holding the session token.
pub const SESSION_COOKIE: &str = "lexfolio_admin";

/// JWT claims embedded in every session token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// The admin's email address.
    pub sub: String,
    /// Expiration time (UTC Unix timestamp).
    pub exp: i64,
    /// Issued-at time (UTC Unix timestamp).
    pub iat: i64,
}

/// Signing parameters for session tokens.
#[derive(Clone)]
pub struct SessionKeys {
    secret: String,
    ttl_hours: u64,
}

impl SessionKeys {
    pub fn new(secret: impl Into<String>, ttl_hours: u64) -> Self {
        Self {
            secret: secret.into(),
            ttl_hours,
        }
    }

    pub fn ttl_hours(&self) -> u64 {
        self.ttl_hours
    }

    /// Sign an HS256 token for `email`, valid from `now` for the configured lifetime.
    pub fn issue_at(&self, email: &str, now: i64) -> Result<String, jsonwebtoken::errors::Error> {
        let claims = Claims {
            sub: email.to_string(),
            iat: now,
            exp: now + (self.ttl_hours as i64) * 3600,
        };
        encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(self.secret.as_bytes()),
        )
    }

    pub fn issue(&self, email: &str) -> Result<String, jsonwebtoken::errors::Error> {
        self.issue_at(email, chrono::Utc::now().timestamp())
    }

    /// Check signature and expiry, returning the embedded claims.
    pub fn validate(&self, token: &str) -> Result<Claims, jsonwebtoken::errors::Error> {
        let data = decode::<Claims>(
            token,
            &DecodingKey::from_secret(self.secret.as_bytes()),
            &Validation::default(),
        )?;
        Ok(data.claims)
    }
}

/// Whether a request carries a valid admin session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GateState {
    Unauthenticated,
    Authenticated { email: String },
}

impl GateState {
    /// Decide the state from the request cookies. Missing, malformed or
    /// expired tokens all count as unauthenticated.
    pub fn from_cookies(jar: &CookieJar, keys: &SessionKeys) -> Self {
        let Some(cookie) = jar.get(SESSION_COOKIE) else {
            return GateState::Unauthenticated;
        };

        match keys.validate(cookie.value()) {
            Ok(claims) => GateState::Authenticated { email: claims.sub },
            Err(e) => {
                tracing::debug!(error = %e, "Rejected admin session token");
                GateState::Unauthenticated
            }
        }
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self, GateState::Authenticated { .. })
    }
}

/// Cookie carrying a freshly issued token.
pub fn session_cookie(token: String, ttl_hours: u64) -> Cookie<'static> {
    Cookie::build((SESSION_COOKIE, token))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .max_age(time::Duration::hours(ttl_hours as i64))
        .build()
}

/// Cookie that instructs the browser to drop the session.
pub fn removal_cookie() -> Cookie<'static> {
    Cookie::build((SESSION_COOKIE, ""))
        .path("/")
        .removal()
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keys() -> SessionKeys {
        SessionKeys::new("test-secret-that-is-long-enough-for-hmac", 12)
    }

    fn jar_with(token: &str) -> CookieJar {
        CookieJar::new().add(Cookie::new(SESSION_COOKIE, token.to_string()))
    }

    #[test]
    fn test_issue_and_validate() {
        let token = keys().issue("counsel@example.com").unwrap();
        let claims = keys().validate(&token).unwrap();
        assert_eq!(claims.sub, "counsel@example.com");
        assert_eq!(claims.exp - claims.iat, 12 * 3600);
    }

    #[test]
    fn test_wrong_secret_rejected() {
        let token = keys().issue("counsel@example.com").unwrap();
        let other = SessionKeys::new("a-completely-different-secret-value", 12);
        assert!(other.validate(&token).is_err());
    }

    #[test]
    fn test_expired_token_is_unauthenticated() {
        let two_days_ago = chrono::Utc::now().timestamp() - 48 * 3600;
        let token = keys().issue_at("counsel@example.com", two_days_ago).unwrap();
        assert_eq!(
            GateState::from_cookies(&jar_with(&token), &keys()),
            GateState::Unauthenticated
        );
    }

    #[test]
    fn test_gate_state_from_cookies() {
        assert_eq!(
            GateState::from_cookies(&CookieJar::new(), &keys()),
            GateState::Unauthenticated
        );
        assert_eq!(
            GateState::from_cookies(&jar_with("not-a-jwt"), &keys()),
            GateState::Unauthenticated
        );

        let token = keys().issue("counsel@example.com").unwrap();
        let state = GateState::from_cookies(&jar_with(&token), &keys());
        assert_eq!(
            state,
            GateState::Authenticated {
                email: "counsel@example.com".to_string()
            }
        );
        assert!(state.is_authenticated());
    }

    #[test]
    fn test_session_cookie_attributes() {
        let cookie = session_cookie("tok".to_string(), 12);
        assert_eq!(cookie.name(), SESSION_COOKIE);
        assert_eq!(cookie.http_only(), Some(true));
        assert_eq!(cookie.same_site(), Some(SameSite::Lax));
        assert_eq!(cookie.path(), Some("/"));
        assert_eq!(cookie.max_age(), Some(time::Duration::hours(12)));
    }
}
