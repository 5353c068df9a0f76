//! Error conversion implementations.
//!
//! These cover failures that can only arise while assembling the package in
//! memory; path-bearing errors are built explicitly at their call sites.

use super::types::Error;

impl From<zip::result::ZipError> for Error {
    fn from(err: zip::result::ZipError) -> Self {
        Error::Package(format!("ZIP error: {}", err))
    }
}

impl From<std::fmt::Error> for Error {
    fn from(err: std::fmt::Error) -> Self {
        Error::Package(format!("XML write error: {}", err))
    }
}
