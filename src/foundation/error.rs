/// Convenience result type used across morphcam.
pub type MorphResult<T> = Result<T, MorphError>;

/// Top-level error taxonomy used by engine APIs.
///
/// Only operations that can fail without harming a live host return these.
/// Unresolvable poses, degenerate arc geometry and re-entrant calls are
/// recovered locally and never show up here.
#[derive(thiserror::Error, Debug)]
pub enum MorphError {
    /// Fewer than two waypoints were available for an operation that needs a segment.
    #[error("insufficient waypoints: need at least 2, got {count}")]
    InsufficientWaypoints {
        /// Number of waypoints in the list.
        count: usize,
    },

    /// Invalid user-provided or rig data.
    #[error("validation error: {0}")]
    Validation(String),

    /// Errors while validating or sampling a morph driver.
    #[error("animation error: {0}")]
    Animation(String),

    /// Errors when serializing or deserializing rig and track documents.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Opaque passthrough for lower-level failures.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl MorphError {
    pub fn insufficient_waypoints(count: usize) -> Self {
        Self::InsufficientWaypoints { count }
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn animation(msg: impl Into<String>) -> Self {
        Self::Animation(msg.into())
    }

    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

impl From<serde_json::Error> for MorphError {
    fn from(e: serde_json::Error) -> Self {
        Self::serde(e.to_string())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
