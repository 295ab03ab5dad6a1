use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("input is not valid UTF-8: {0}")]
    Encoding(#[from] std::str::Utf8Error),
    #[error("invalid rule table: {0}")]
    Configuration(String),
    #[error("unsupported input: {0}")]
    UnsupportedInput(String),
}

impl From<aho_corasick::BuildError> for Error {
    fn from(error: aho_corasick::BuildError) -> Self {
        Error::Configuration(error.to_string())
    }
}

impl Serialize for Error {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.to_string().as_ref())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encoding_error_from_utf8() {
        let bytes = [0x66, 0xff, 0x6f];
        let err: Error = std::str::from_utf8(&bytes).unwrap_err().into();
        assert!(matches!(err, Error::Encoding(_)));
        assert!(err.to_string().starts_with("input is not valid UTF-8"));
    }

    #[test]
    fn test_error_serializes_as_message() {
        let err = Error::UnsupportedInput("binary payload".to_string());
        let json = serde_json::to_string(&err).unwrap();
        assert_eq!(json, r#""unsupported input: binary payload""#);
    }
}
