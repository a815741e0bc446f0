use thiserror::Error;

#[derive(Debug, Error)]
pub enum LogError {
    #[error("Malformed log line {line:?}: {reason}")]
    Malformed { line: String, reason: &'static str },

    #[error("Invalid log dump: {0}")]
    Json(#[from] serde_json::Error),
}

impl LogError {
    pub(crate) fn malformed(line: &str, reason: &'static str) -> Self {
        LogError::Malformed {
            line: line.to_string(),
            reason,
        }
    }
}
