//! Error taxonomy for the image-to-spreadsheet pipeline.
use std::path::PathBuf;
use thiserror::Error;

/// Main error type for pixsheet operations.
#[derive(Error, Debug)]
pub enum Error {
    /// The input image is missing, unreadable, undecodable, or empty.
    #[error("Failed to load image '{}': {reason}", path.display())]
    ImageLoad {
        /// Path that was being opened
        path: PathBuf,
        /// Human-readable cause
        reason: String,
    },

    /// The output spreadsheet could not be written.
    #[error("Failed to write spreadsheet '{}': {source}", path.display())]
    Write {
        /// Destination path
        path: PathBuf,
        /// Underlying I/O failure
        #[source]
        source: std::io::Error,
    },

    /// Conversion options were rejected before any I/O took place.
    #[error("Invalid options: {0}")]
    InvalidOptions(String),

    /// The in-memory package could not be assembled.
    #[error("Package error: {0}")]
    Package(String),
}

impl Error {
    /// Build an [`Error::ImageLoad`] for `path`.
    pub(crate) fn image_load(path: impl Into<PathBuf>, reason: impl ToString) -> Self {
        Error::ImageLoad {
            path: path.into(),
            reason: reason.to_string(),
        }
    }

    /// Build an [`Error::Write`] for `path`.
    pub(crate) fn write(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Write {
            path: path.into(),
            source,
        }
    }
}

/// Result type for pixsheet operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn image_load_message_names_path() {
        let err = Error::image_load("missing/cat.png", "No such file or directory");
        let msg = err.to_string();
        assert!(msg.contains("missing/cat.png"));
        assert!(msg.contains("No such file"));
    }

    #[test]
    fn write_error_keeps_io_source() {
        use std::error::Error as _;

        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "parent missing");
        let err = Error::write("nowhere/out.xlsx", io);
        assert!(err.to_string().contains("nowhere/out.xlsx"));
        assert!(err.source().is_some());
    }
}
