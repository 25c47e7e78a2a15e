/// Convenience result type used across thumbforge.
pub type ThumbResult<T> = Result<T, ThumbError>;

/// Top-level error taxonomy used by engine APIs.
///
/// Background decode failures and degenerate text measurements are recovered locally by the
/// render pipeline and never reach callers; the variants here are the failures that do.
#[derive(thiserror::Error, Debug)]
pub enum ThumbError {
    /// Invalid user-provided or document data.
    #[error("validation error: {0}")]
    Validation(String),

    /// Errors while decoding background image sources.
    #[error("decode error: {0}")]
    Decode(String),

    /// Errors while rasterizing a document into a surface.
    #[error("render error: {0}")]
    Render(String),

    /// Errors while encoding or writing the exported PNG. Retryable.
    #[error("export error: {0}")]
    Export(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl ThumbError {
    /// Build a [`ThumbError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`ThumbError::Decode`] value.
    pub fn decode(msg: impl Into<String>) -> Self {
        Self::Decode(msg.into())
    }

    /// Build a [`ThumbError::Render`] value.
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }

    /// Build a [`ThumbError::Export`] value.
    pub fn export(msg: impl Into<String>) -> Self {
        Self::Export(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
