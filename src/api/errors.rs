#[cfg(feature = "ssr")]
use crate::error::AppError;
#[cfg(feature = "ssr")]
use axum::http::StatusCode;
#[cfg(feature = "ssr")]
use axum::response::{IntoResponse, Response};

/// Converts `AppError` into a JSON `{"error": message}` response.
///
/// Server-side failures are logged in full and reported with a generic message.
#[cfg(feature = "ssr")]
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg.clone()),
            AppError::Forbidden(msg) => (StatusCode::FORBIDDEN, msg.clone()),
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            AppError::Auth(msg) => (StatusCode::UNAUTHORIZED, msg.clone()),
            AppError::Database(msg) => {
                tracing::error!(error = %msg, "Content store failure");
                (StatusCode::INTERNAL_SERVER_ERROR, self.public_message())
            }
            AppError::Storage(msg) => {
                tracing::error!(error = %msg, "Blob store failure");
                (StatusCode::INTERNAL_SERVER_ERROR, self.public_message())
            }
            AppError::Config(msg) | AppError::Internal(msg) => {
                tracing::error!(error = %msg, "Internal error");
                (StatusCode::INTERNAL_SERVER_ERROR, self.public_message())
            }
        };

        let body = serde_json::json!({
            "error": message
        });

        (status, axum::Json(body)).into_response()
    }
}

/// Convert an [`AppError`] into the error type carried by server functions.
pub fn to_server_error(err: crate::error::AppError) -> leptos::prelude::ServerFnError {
    leptos::prelude::ServerFnError::new(err.public_message())
}

/// The message carried by a server function error, without the type prefix.
pub fn server_message(err: &leptos::prelude::ServerFnError) -> String {
    match err {
        leptos::prelude::ServerFnError::ServerError(message) => message.clone(),
        other => other.to_string(),
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;

    async fn body_of(response: Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_status_mapping() {
        let cases = [
            (AppError::BadRequest("x".into()), StatusCode::BAD_REQUEST),
            (AppError::Auth("x".into()), StatusCode::UNAUTHORIZED),
            (AppError::Forbidden("x".into()), StatusCode::FORBIDDEN),
            (AppError::NotFound("x".into()), StatusCode::NOT_FOUND),
            (AppError::Database("x".into()), StatusCode::INTERNAL_SERVER_ERROR),
            (AppError::Storage("x".into()), StatusCode::INTERNAL_SERVER_ERROR),
            (AppError::Internal("x".into()), StatusCode::INTERNAL_SERVER_ERROR),
        ];
        for (err, status) in cases {
            assert_eq!(err.into_response().status(), status);
        }
    }

    #[tokio::test]
    async fn test_client_error_message_is_passed_through() {
        let body = body_of(AppError::BadRequest("Title is required".into()).into_response()).await;
        assert_eq!(body["error"], "Title is required");
    }

    #[tokio::test]
    async fn test_database_details_are_not_leaked() {
        let body = body_of(AppError::Database("auth failed for user root".into()).into_response()).await;
        assert_eq!(body["error"], "The content store is unavailable");
    }
}
