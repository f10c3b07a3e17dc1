/// Convenience result type used across Anima.
pub type AnimaResult<T> = Result<T, AnimaError>;

/// Top-level error taxonomy used by staging APIs.
#[derive(thiserror::Error, Debug)]
pub enum AnimaError {
    /// Invalid user-provided staging data.
    #[error("validation error: {0}")]
    Validation(String),

    /// A point with no finite image under perspective projection.
    #[error("projection error: {0}")]
    Projection(String),

    /// Wrapped lower-level error from dependencies.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl AnimaError {
    /// Build an [`AnimaError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build an [`AnimaError::Projection`] value.
    pub fn projection(msg: impl Into<String>) -> Self {
        Self::Projection(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
