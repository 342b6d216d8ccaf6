//! use sslkit::error::SslKitError;

use thiserror::Error;

/// Crate-wide result type.
pub type Result<T> = std::result::Result<T, SslKitError>;

/// The kind of artifact a piece of PEM text was expected to hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArtifactKind {
    Csr,
    Certificate,
    PrivateKey,
}

impl std::fmt::Display for ArtifactKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            ArtifactKind::Csr => "certificate signing request",
            ArtifactKind::Certificate => "certificate",
            ArtifactKind::PrivateKey => "private key",
        };
        f.write_str(label)
    }
}

/// Who is to blame for a failed operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fault {
    /// The input was malformed or out of domain.
    Client,
    /// The cryptographic backend failed on input that passed validation.
    Server,
}

/// Represents errors that can occur in the sslkit library.
///
/// Every operation either succeeds completely or fails with exactly one of these.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SslKitError {
    /// Domain type is not one of `www`, `subdomain` or `*`.
    #[error("domainType is not valid: {0}")]
    InvalidDomainType(String),

    /// RSA key size outside of 2048, 3072 and 4096 bits.
    #[error("KeySize is not valid: {0}")]
    InvalidKeySize(u32),

    /// Digest other than sha256, sha384 or sha512.
    #[error("Encryption Type is not valid: {0}")]
    InvalidDigest(String),

    /// Domain name failed syntactic validation.
    #[error("Invalid domain: {0}")]
    InvalidDomain(String),

    /// CAA supplier is not a known certificate authority.
    #[error("Invalid supplier: {0}")]
    InvalidSupplier(String),

    /// CAA wildcard scope is neither `wildcard` nor `non-wildcard`.
    #[error("Invalid wildcard: {0}")]
    InvalidWildcardScope(String),

    /// A subject field failed validation.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Text does not decode as the claimed artifact type.
    #[error("{kind} is not valid: {reason}")]
    ParseFailure { kind: ArtifactKind, reason: String },

    /// Error during key generation.
    #[error("Key generation error: {0}")]
    KeyGeneration(String),

    /// Error while encoding or signing a request.
    #[error("Signing failure: {0}")]
    SigningFailure(String),
}

impl SslKitError {
    pub(crate) fn parse(kind: ArtifactKind, reason: impl ToString) -> Self {
        SslKitError::ParseFailure {
            kind,
            reason: reason.to_string(),
        }
    }

    /// Classifies the error as a client or server fault.
    pub fn fault(&self) -> Fault {
        match self {
            SslKitError::KeyGeneration(_) | SslKitError::SigningFailure(_) => Fault::Server,
            _ => Fault::Client,
        }
    }
}

impl From<der::Error> for SslKitError {
    /// Converts a `der::Error` raised while encoding a request.
    fn from(err: der::Error) -> Self {
        SslKitError::SigningFailure(err.to_string())
    }
}

impl From<rsa::Error> for SslKitError {
    fn from(err: rsa::Error) -> Self {
        SslKitError::KeyGeneration(err.to_string())
    }
}

impl From<rsa::pkcs1::Error> for SslKitError {
    fn from(err: rsa::pkcs1::Error) -> Self {
        SslKitError::SigningFailure(err.to_string())
    }
}

impl From<x509_cert::builder::Error> for SslKitError {
    fn from(err: x509_cert::builder::Error) -> Self {
        SslKitError::SigningFailure(err.to_string())
    }
}
