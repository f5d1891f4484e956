use thiserror::Error;

/// Reasons a request fails authentication.
///
/// Every variant collapses into the same 401 at the HTTP boundary; the
/// distinction only shows up in logs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    #[error("malformed token: {0}")]
    MalformedToken(String),
    #[error("unsupported token algorithm: {0:?}")]
    UnsupportedAlgorithm(String),
    #[error("token signature mismatch")]
    SignatureMismatch,
    #[error("missing or malformed Authorization header")]
    MissingOrMalformedHeader,
}

impl AuthError {
    pub(crate) fn malformed(reason: impl Into<String>) -> Self {
        Self::MalformedToken(reason.into())
    }

    /// Short label for structured log fields.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::MalformedToken(_) => "malformed_token",
            Self::UnsupportedAlgorithm(_) => "unsupported_algorithm",
            Self::SignatureMismatch => "signature_mismatch",
            Self::MissingOrMalformedHeader => "missing_or_malformed_header",
        }
    }
}
