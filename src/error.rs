// file: src/error.rs
// version: 1.0.0
// guid: 50081bfa-f51e-426b-a3e6-2928eac80e7a

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for the crate
pub type Result<T> = std::result::Result<T, ConfigurationError>;

/// Construction-time validation failure
///
/// Raised only while building an [`crate::Ansible`] factory; operations on a
/// successfully constructed factory do not fail. Each variant corresponds to
/// one failed check.
#[derive(Debug, Error)]
pub enum ConfigurationError {
    /// The base directory is missing or not a directory
    #[error("Ansible project root {} not found", .0.display())]
    BaseDirNotFound(PathBuf),

    /// A default tool name could not be resolved in PATH
    #[error("No {0} executable present in PATH")]
    ToolNotInPath(String),

    /// An explicitly supplied command path is not an existing regular file
    #[error("Command {0} does not exist")]
    CommandNotFound(String),

    /// An explicitly supplied command file lacks execute permission
    #[error("Command {0} is not executable")]
    CommandNotExecutable(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages_name_the_failed_check() {
        let err = ConfigurationError::BaseDirNotFound(PathBuf::from("/no/such/dir"));
        assert_eq!(err.to_string(), "Ansible project root /no/such/dir not found");

        let err = ConfigurationError::ToolNotInPath("ansible-playbook".to_string());
        assert_eq!(err.to_string(), "No ansible-playbook executable present in PATH");

        let err = ConfigurationError::CommandNotFound("/opt/missing".to_string());
        assert!(err.to_string().contains("does not exist"));

        let err = ConfigurationError::CommandNotExecutable("/opt/plain-file".to_string());
        assert!(err.to_string().contains("is not executable"));
    }
}
