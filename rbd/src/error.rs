//! Error types for the rbd binding.

use std::ffi::NulError;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Top-level error type.
///
/// Every native failure maps to exactly one variant, tagged by the
/// operation that failed. `code` is the raw (negative) return value from
/// librbd, kept so callers can match on the underlying errno if they need
/// more than the operation kind.
#[derive(Debug, Error)]
pub enum Error {
    #[error("name contains an interior NUL byte: {0}")]
    InvalidName(#[from] NulError),

    #[error("failed to open image '{name}' (code {code})")]
    Open { name: String, code: i32 },

    #[error("failed to close image '{name}' (code {code})")]
    Close { name: String, code: i32 },

    #[error("failed to remove image '{name}' (code {code})")]
    Remove { name: String, code: i32 },

    #[error("failed to rename image '{src}' to '{dst}' (code {code})")]
    Rename {
        src: String,
        dst: String,
        code: i32,
    },

    #[error("failed to fetch image list from pool (code {code})")]
    List { code: i32 },

    #[error("failed to copy image '{name}' (code {code})")]
    Copy { name: String, code: i32 },

    #[error("failed to resize image '{name}' to {size} bytes (code {code})")]
    Resize {
        name: String,
        size: u64,
        code: i32,
    },

    #[error("failed to retrieve info for image '{name}' (code {code})")]
    Stat { name: String, code: i32 },

    #[error("failed to query size of image '{name}' (code {code})")]
    Size { name: String, code: i32 },

    #[error("unable to create snapshot '{snap}' on image '{image}' (code {code})")]
    SnapshotCreate {
        image: String,
        snap: String,
        code: i32,
    },

    #[error("unable to remove snapshot '{snap}' from image '{image}' (code {code})")]
    SnapshotRemove {
        image: String,
        snap: String,
        code: i32,
    },
}

impl Error {
    /// The raw librbd return code, if this error came from a native call.
    pub fn code(&self) -> Option<i32> {
        match self {
            Error::InvalidName(_) => None,
            Error::Open { code, .. }
            | Error::Close { code, .. }
            | Error::Remove { code, .. }
            | Error::Rename { code, .. }
            | Error::List { code }
            | Error::Copy { code, .. }
            | Error::Resize { code, .. }
            | Error::Stat { code, .. }
            | Error::Size { code, .. }
            | Error::SnapshotCreate { code, .. }
            | Error::SnapshotRemove { code, .. } => Some(*code),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_names_operands() {
        let err = Error::SnapshotCreate {
            image: "vm-disk".to_string(),
            snap: "nightly".to_string(),
            code: -5,
        };
        let msg = err.to_string();
        assert!(msg.contains("vm-disk"));
        assert!(msg.contains("nightly"));
    }

    #[test]
    fn native_errors_expose_their_code() {
        let err = Error::List { code: -34 };
        assert_eq!(err.code(), Some(-34));
    }

    #[test]
    fn invalid_name_has_no_code() {
        let err = Error::from(std::ffi::CString::new("a\0b").unwrap_err());
        assert_eq!(err.code(), None);
    }
}
