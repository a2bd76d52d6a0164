//! Error types for repository operations.
//!
//! Every error carries a structured [`ErrorContext`] naming the operation and
//! entity involved, so log lines and HTTP mappings can stay uniform.

use std::fmt;

/// Result type for repository operations
pub type RepositoryResult<T> = Result<T, RepositoryError>;

/// Structured context for repository errors.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorContext {
    /// The operation being performed (e.g., "merge_admin", "create_user")
    pub operation: Option<String>,
    /// The entity type involved (e.g., "user", "admin_record")
    pub entity: Option<String>,
    /// The entity key if applicable
    pub entity_id: Option<String>,
}

impl ErrorContext {
    pub fn new(operation: impl Into<String>) -> Self {
        Self {
            operation: Some(operation.into()),
            ..Default::default()
        }
    }

    pub fn with_entity(mut self, entity: impl Into<String>) -> Self {
        self.entity = Some(entity.into());
        self
    }

    pub fn with_entity_id(mut self, id: impl ToString) -> Self {
        self.entity_id = Some(id.to_string());
        self
    }

    fn is_empty(&self) -> bool {
        self.operation.is_none() && self.entity.is_none() && self.entity_id.is_none()
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return Ok(());
        }
        let mut parts = Vec::new();
        if let Some(ref op) = self.operation {
            parts.push(format!("operation={}", op));
        }
        if let Some(ref entity) = self.entity {
            parts.push(format!("entity={}", entity));
        }
        if let Some(ref id) = self.entity_id {
            parts.push(format!("id={}", id));
        }
        write!(f, " [{}]", parts.join(", "))
    }
}

/// Error type for repository operations
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    /// An entity with the same key already exists.
    #[error("Conflict: {message}{context}")]
    Conflict {
        message: String,
        context: ErrorContext,
    },

    /// Input rejected before it reached the store.
    #[error("Data validation error: {message}{context}")]
    ValidationError {
        message: String,
        context: ErrorContext,
    },

    /// Internal/unexpected errors.
    #[error("Internal error: {message}{context}")]
    InternalError {
        message: String,
        context: ErrorContext,
    },
}

impl RepositoryError {
    pub fn conflict(message: impl Into<String>) -> Self {
        Self::Conflict {
            message: message.into(),
            context: ErrorContext::default(),
        }
    }

    pub fn conflict_with_context(message: impl Into<String>, context: ErrorContext) -> Self {
        Self::Conflict {
            message: message.into(),
            context,
        }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::ValidationError {
            message: message.into(),
            context: ErrorContext::default(),
        }
    }

    pub fn validation_with_context(message: impl Into<String>, context: ErrorContext) -> Self {
        Self::ValidationError {
            message: message.into(),
            context,
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::InternalError {
            message: message.into(),
            context: ErrorContext::default(),
        }
    }

    pub fn internal_with_context(message: impl Into<String>, context: ErrorContext) -> Self {
        Self::InternalError {
            message: message.into(),
            context,
        }
    }

    /// The bare message, without the context suffix.
    pub fn message(&self) -> &str {
        match self {
            Self::Conflict { message, .. }
            | Self::ValidationError { message, .. }
            | Self::InternalError { message, .. } => message,
        }
    }

    pub fn context(&self) -> &ErrorContext {
        match self {
            Self::Conflict { context, .. }
            | Self::ValidationError { context, .. }
            | Self::InternalError { context, .. } => context,
        }
    }

    /// Add or update the operation in the error context.
    pub fn with_operation(mut self, operation: impl Into<String>) -> Self {
        match &mut self {
            Self::Conflict { context, .. }
            | Self::ValidationError { context, .. }
            | Self::InternalError { context, .. } => {
                context.operation = Some(operation.into());
            }
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_without_context() {
        let err = RepositoryError::internal("lock poisoned");
        assert_eq!(err.to_string(), "Internal error: lock poisoned");
        assert_eq!(err.message(), "lock poisoned");
    }

    #[test]
    fn test_display_with_context() {
        let err = RepositoryError::conflict_with_context(
            "User already exists",
            ErrorContext::new("create_user")
                .with_entity("user")
                .with_entity_id("a@b.c"),
        );
        assert_eq!(
            err.to_string(),
            "Conflict: User already exists [operation=create_user, entity=user, id=a@b.c]"
        );
    }

    #[test]
    fn test_with_operation_overrides() {
        let err = RepositoryError::validation("empty email").with_operation("create_user");
        assert_eq!(err.context().operation.as_deref(), Some("create_user"));
        assert!(matches!(err, RepositoryError::ValidationError { .. }));
    }
}
