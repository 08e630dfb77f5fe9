use thiserror::Error;

/// Faults the starfield can run into. None of them reach the page: callers log
/// and degrade (no rendering, fresh particles, or skipped saves).
#[derive(Debug, Error)]
pub enum StarfieldError {
    #[error("no drawable canvas available")]
    MissingCanvas,
    #[error("persisted starfield state is corrupt: {0}")]
    CorruptPersistedState(String),
    #[error("storage unavailable: {0}")]
    StorageUnavailable(String),
    #[error("could not encode starfield state: {0}")]
    EncodeState(String),
}

impl From<serde_json::Error> for StarfieldError {
    fn from(e: serde_json::Error) -> Self {
        StarfieldError::CorruptPersistedState(e.to_string())
    }
}
