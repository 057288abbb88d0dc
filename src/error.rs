// SPDX-License-Identifier: MPL-2.0
use std::fmt;

#[derive(Debug, Clone)]
pub enum Error {
    Io(String),
    Config(String),
}

/// Failures tied to reading comprehension content rather than local files.
/// Used to pick a user-facing message for the list view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentError {
    /// The manifest could not be fetched.
    ManifestUnavailable(String),

    /// The manifest was fetched but does not have the `dataFiles` shape.
    ManifestInvalid(String),
}

impl ContentError {
    /// Returns the i18n message key for this error type.
    pub fn i18n_key(&self) -> &'static str {
        match self {
            ContentError::ManifestUnavailable(_) => "list-error-manifest-unavailable",
            ContentError::ManifestInvalid(_) => "list-error-manifest-invalid",
        }
    }
}

impl fmt::Display for ContentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContentError::ManifestUnavailable(reason) => {
                write!(f, "Manifest unavailable: {}", reason)
            }
            ContentError::ManifestInvalid(reason) => write!(f, "Manifest invalid: {}", reason),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
        }
    }
}

impl std::error::Error for Error {}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_formats_io_error() {
        let err = Error::Io("disk failure".to_string());
        assert_eq!(format!("{}", err), "I/O Error: disk failure");
    }

    #[test]
    fn from_io_error_produces_io_variant() {
        let io_error = std::io::Error::other("boom");
        let err: Error = io_error.into();
        match err {
            Error::Io(message) => assert!(message.contains("boom")),
            _ => panic!("expected Io variant"),
        }
    }

    #[test]
    fn config_error_formats_properly() {
        let err = Error::Config("bad field".into());
        assert_eq!(format!("{}", err), "Config Error: bad field");
    }

    #[test]
    fn content_error_i18n_keys() {
        assert_eq!(
            ContentError::ManifestUnavailable("404".into()).i18n_key(),
            "list-error-manifest-unavailable"
        );
        assert_eq!(
            ContentError::ManifestInvalid("no dataFiles".into()).i18n_key(),
            "list-error-manifest-invalid"
        );
    }

    #[test]
    fn content_error_display_keeps_reason() {
        let err = ContentError::ManifestUnavailable("HTTP status: 404".into());
        assert_eq!(format!("{}", err), "Manifest unavailable: HTTP status: 404");
    }
}
