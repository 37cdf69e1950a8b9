use thiserror::Error;

/// Rejected round configuration. Gameplay itself has no failure modes; only the
/// constant configuration read at startup can be wrong.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("layout must contain at least one position")]
    NoPositions,

    #[error("tick interval must be greater than zero")]
    ZeroTickInterval,

    #[error("round duration must be greater than zero")]
    ZeroDuration,

    #[error("invalid {name} range: min {min}ms exceeds max {max}ms")]
    InvalidRange {
        name: &'static str,
        min: u32,
        max: u32,
    },

    #[cfg(feature = "serde_json")]
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
