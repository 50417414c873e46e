//! Error Types

use thiserror::Error;

/// Result type alias for mount operations
pub type Result<T> = std::result::Result<T, MountError>;

/// Mount error types
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MountError {
    /// No element with the anchor identifier exists in the host document
    #[error("Mount target not found: no element with id \"{anchor}\"")]
    TargetNotFound { anchor: String },

    /// A root instance is already mounted and has not been disposed
    #[error("Root already mounted on \"{anchor}\"; dispose it before mounting again")]
    AlreadyMounted { anchor: String },

    /// The mounted instance is still held outside the slot and cannot be disposed
    #[error("Root on \"{anchor}\" still referenced by {holders} other handle(s); drop them before disposing")]
    StillReferenced { anchor: String, holders: usize },
}

impl MountError {
    /// Anchor identifier the failed operation was targeting
    pub fn anchor(&self) -> &str {
        match self {
            MountError::TargetNotFound { anchor }
            | MountError::AlreadyMounted { anchor }
            | MountError::StillReferenced { anchor, .. } => anchor,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_target_not_found_message() {
        let err = MountError::TargetNotFound { anchor: "root".into() };
        assert_eq!(err.to_string(), "Mount target not found: no element with id \"root\"");
        assert_eq!(err.anchor(), "root");
    }

    #[test]
    fn test_already_mounted_message() {
        let err = MountError::AlreadyMounted { anchor: "app".into() };
        assert!(err.to_string().contains("dispose it before mounting again"));
        assert_eq!(err.anchor(), "app");
    }

    #[test]
    fn test_still_referenced_message() {
        let err = MountError::StillReferenced { anchor: "root".into(), holders: 2 };
        assert!(err.to_string().contains("2 other handle(s)"));
        assert_eq!(err.anchor(), "root");
    }
}
