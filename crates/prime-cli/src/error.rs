//! CLI-specific error types and mappings.
//!
//! Maps offload failures to exit codes and user-facing messages.

use prime_core::{OffloadError, OffloadErrorKind};
use thiserror::Error;

/// CLI-specific error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Offload resolution refused to continue.
    #[error(transparent)]
    Offload(#[from] OffloadError),

    /// Argument parsing error.
    #[error("Invalid arguments: {0}")]
    Arguments(String),

    /// Output could not be rendered.
    #[error("Output error: {0}")]
    Output(String),
}

impl CliError {
    /// Map error to appropriate exit code.
    ///
    /// Exit codes follow sysexits.h:
    /// - 2: Misuse of shell command (invalid arguments)
    /// - 69: Unsupported GPU topology (`EX_UNAVAILABLE`)
    /// - 70: Internal output failure (`EX_SOFTWARE`)
    /// - 78: Forced GPU setting cannot be resolved (`EX_CONFIG`)
    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::Offload(err) => match err.kind() {
                OffloadErrorKind::AmbiguousTopology => 69,
                OffloadErrorKind::UnknownDeviceId
                | OffloadErrorKind::IndexOutOfRange
                | OffloadErrorKind::MalformedDirective => 78,
            },
            Self::Arguments(_) => 2,
            Self::Output(_) => 70,
        }
    }
}

impl From<serde_json::Error> for CliError {
    fn from(err: serde_json::Error) -> Self {
        Self::Output(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use prime_core::Renderer;

    #[test]
    fn test_exit_codes() {
        let ambiguous = CliError::from(OffloadError::AmbiguousTopology {
            device_count: 3,
            renderer: Renderer::OpenGL,
        });
        let unknown = CliError::from(OffloadError::UnknownDeviceId {
            id: "1000:7340".to_string(),
        });
        let out_of_range = CliError::from(OffloadError::IndexOutOfRange {
            index: 9,
            device_count: 2,
        });

        assert_eq!(ambiguous.exit_code(), 69);
        assert_eq!(unknown.exit_code(), 78);
        assert_eq!(out_of_range.exit_code(), 78);
        assert_eq!(CliError::Arguments("x".to_string()).exit_code(), 2);
    }

    #[test]
    fn test_offload_message_is_transparent() {
        let err = CliError::from(OffloadError::UnknownDeviceId {
            id: "1000:7340".to_string(),
        });
        assert_eq!(err.to_string(), "No GPU with the vendor:device id \"1000:7340\"");
    }
}
