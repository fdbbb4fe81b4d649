// SPDX-License-Identifier: MPL-2.0
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A required host capability is missing. Raised synchronously at viewer
    /// construction; the viewer must not partially initialize.
    EnvironmentUnsupported(String),

    /// A public operation was invoked in a context that cannot honor it,
    /// e.g. activating an empty gallery or an out-of-range index.
    InvalidContext(String),

    Io(String),
    Config(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::EnvironmentUnsupported(e) => write!(f, "Unsupported environment: {}", e),
            Error::InvalidContext(e) => write!(f, "Invalid context: {}", e),
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
        }
    }
}

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
    fn display_formats_environment_error() {
        let err = Error::EnvironmentUnsupported("no keyboard capture".into());
        assert_eq!(
            format!("{}", err),
            "Unsupported environment: no keyboard capture"
        );
    }

    #[test]
    fn display_formats_invalid_context() {
        let err = Error::InvalidContext("empty gallery".into());
        assert_eq!(format!("{}", err), "Invalid context: empty gallery");
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
    fn from_toml_error_produces_config_variant() {
        let toml_err = toml::from_str::<toml::Value>("not = = toml").unwrap_err();
        let err: Error = toml_err.into();
        assert!(matches!(err, Error::Config(_)));
    }
}
