use {
    crate::constants::*,
    std::{
        error::Error,
        fmt::{Display, Formatter, Result as FmtResult},
    },
};

/// Error returned when a presigned POST policy cannot be produced.
#[derive(Debug)]
#[non_exhaustive]
pub enum PostPolicyError {
    /// A required configuration value (bucket, access key id, or secret access key) is absent
    /// or empty. Retrying with the same input cannot succeed.
    MissingConfiguration(/* message */ String),

    /// The configured expiration does not fall strictly after the signing instant.
    InvalidExpiration(/* message */ String),

    /// The policy document could not be serialized to JSON. This is practically unreachable
    /// for well-formed configuration and is never silently dropped.
    Encoding(serde_json::Error),
}

impl PostPolicyError {
    /// The stable error code for this error.
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::MissingConfiguration(_) | Self::InvalidExpiration(_) => ERR_CODE_CONFIGURATION,
            Self::Encoding(_) => ERR_CODE_ENCODING,
        }
    }
}

impl Display for PostPolicyError {
    fn fmt(&self, f: &mut Formatter) -> FmtResult {
        match self {
            Self::MissingConfiguration(msg) => f.write_str(msg),
            Self::InvalidExpiration(msg) => f.write_str(msg),
            Self::Encoding(ref e) => Display::fmt(e, f),
        }
    }
}

impl Error for PostPolicyError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Encoding(ref e) => Some(e),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for PostPolicyError {
    fn from(e: serde_json::Error) -> PostPolicyError {
        PostPolicyError::Encoding(e)
    }
}
