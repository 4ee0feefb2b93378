use thiserror::Error;

/// Application-wide error types.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Database error: {0}")]
    Database(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Authentication error: {0}")]
    Auth(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Message shown to end users; hides driver details for server-side failures.
    pub fn public_message(&self) -> String {
        match self {
            AppError::NotFound(msg)
            | AppError::Forbidden(msg)
            | AppError::BadRequest(msg)
            | AppError::Auth(msg) => msg.clone(),
            AppError::Database(_) => "The content store is unavailable".to_string(),
            AppError::Storage(_) => "The media store is unavailable".to_string(),
            AppError::Config(_) | AppError::Internal(_) => "Internal server error".to_string(),
        }
    }
}

/// Helper conversion from anyhow::Error
impl From<anyhow::Error> for AppError {
    fn from(err: anyhow::Error) -> Self {
        AppError::Internal(err.to_string())
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let mut fields: Vec<String> = errors
            .field_errors()
            .into_iter()
            .map(|(field, errs)| {
                let detail = errs
                    .iter()
                    .find_map(|e| e.message.as_ref().map(|m| m.to_string()))
                    .unwrap_or_else(|| "is invalid".to_string());
                format!("{field}: {detail}")
            })
            .collect();
        fields.sort();
        AppError::BadRequest(fields.join("; "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn public_message_hides_database_details() {
        let err = AppError::Database("connection refused (os error 111)".into());
        assert_eq!(err.public_message(), "The content store is unavailable");
        assert!(err.to_string().contains("connection refused"));
    }

    #[test]
    fn public_message_keeps_client_errors() {
        let err = AppError::BadRequest("Title is required".into());
        assert_eq!(err.public_message(), "Title is required");
    }
}
