use std::fmt;

/// Failure taxonomy for a single generation run. Every variant is
/// deterministic for a given invocation; nothing here is retryable.
#[derive(Debug, PartialEq, Eq)]
pub enum TotpError {
    /// Missing/empty secret, bad interval, or unknown service name.
    InvalidInput(String),
    /// Secret is not valid base32, or decodes to zero bytes.
    Decode(String),
    /// HMAC digest was not 20 bytes; the wrong hash is wired in.
    BadDigestLength(usize),
    /// Truncation offset fell outside the digest.
    BadOffset(usize),
    /// The HMAC primitive refused to initialize.
    CryptoBackend(String),
}

impl fmt::Display for TotpError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TotpError::InvalidInput(reason) => write!(f, "invalid input: {}", reason),
            TotpError::Decode(reason) => write!(f, "unable to decode secret: {}", reason),
            TotpError::BadDigestLength(len) => write!(f, "digest is {} bytes, expected 20", len),
            TotpError::BadOffset(offset) => write!(f, "truncation offset {} out of range", offset),
            TotpError::CryptoBackend(reason) => write!(f, "hmac backend failure: {}", reason),
        }
    }
}

impl std::error::Error for TotpError {}

impl TotpError {
    pub fn exit_code(&self) -> i32 {
        match self {
            TotpError::InvalidInput(_) => 1,
            TotpError::Decode(_) => 2,
            TotpError::BadDigestLength(_) => 3,
            TotpError::BadOffset(_) => 4,
            TotpError::CryptoBackend(_) => 5,
        }
    }
}
