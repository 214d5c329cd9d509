use thiserror::Error;

/// Application-level error type.
/// Services return `Result<T, AppError>`; the CLI renders it through `anyhow`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Company registry error: {0}")]
    Registry(String),

    #[error("LLM error: {0}")]
    Llm(String),

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    /// Stable machine-readable code, logged as the `code` field when a CLI command fails.
    pub fn code(&self) -> &'static str {
        match self {
            AppError::NotFound(_) => "NOT_FOUND",
            AppError::Validation(_) => "VALIDATION_ERROR",
            AppError::Registry(_) => "REGISTRY_ERROR",
            AppError::Llm(_) => "LLM_ERROR",
            AppError::Internal(_) => "INTERNAL_ERROR",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes_are_stable() {
        assert_eq!(AppError::NotFound("x".into()).code(), "NOT_FOUND");
        assert_eq!(AppError::Validation("x".into()).code(), "VALIDATION_ERROR");
        assert_eq!(AppError::Registry("x".into()).code(), "REGISTRY_ERROR");
        assert_eq!(AppError::Llm("x".into()).code(), "LLM_ERROR");
        assert_eq!(
            AppError::Internal(anyhow::anyhow!("boom")).code(),
            "INTERNAL_ERROR"
        );
    }

    #[test]
    fn test_validation_message_is_displayed() {
        let err = AppError::Validation("Message cannot be empty".to_string());
        assert_eq!(err.to_string(), "Validation error: Message cannot be empty");
    }
}
