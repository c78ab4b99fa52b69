pub type StarfieldResult<T> = Result<T, StarfieldError>;

#[derive(thiserror::Error, Debug)]
pub enum StarfieldError {
    #[error("validation error: {0}")]
    Validation(String),

    #[error("surface error: {0}")]
    Surface(String),

    #[error("content error: {0}")]
    Content(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl StarfieldError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn surface(msg: impl Into<String>) -> Self {
        Self::Surface(msg.into())
    }

    pub fn content(msg: impl Into<String>) -> Self {
        Self::Content(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
