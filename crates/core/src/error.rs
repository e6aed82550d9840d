// Error types for advice generation

use thiserror::Error;

pub type AdviceResult<T> = Result<T, AdviceError>;

/// The only way an advisor call can fail: the arguments are not the
/// shape the advisor declares.
#[derive(Debug, Error)]
pub enum AdviceError {
    #[error("Invalid arguments for {tool}: {source}")]
    InvalidArguments {
        tool: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("Arguments for {tool} must be a JSON object, got {found}")]
    NotAnObject { tool: &'static str, found: &'static str },
}

impl AdviceError {
    pub fn tool(&self) -> &'static str {
        match self {
            Self::InvalidArguments { tool, .. } | Self::NotAnObject { tool, .. } => tool,
        }
    }
}
