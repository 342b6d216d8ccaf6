//! The PEM parsing boundary.
//!
//! Everything past this module works on already-parsed artifacts. The parser is
//! a trait so callers can substitute their own backend or hand in fixtures.

use der::Decode;
use rsa::RsaPrivateKey;
use rsa::pkcs1::DecodeRsaPrivateKey;
use rsa::pkcs8::DecodePrivateKey;
use x509_cert::request::CertReq;

use crate::cert::{ParsedCertificate, ParsedCsr};
use crate::error::{ArtifactKind, Result, SslKitError};
use crate::pem_utils::first_block;

const CSR_LABELS: &[&str] = &["CERTIFICATE REQUEST", "NEW CERTIFICATE REQUEST"];
const CERTIFICATE_LABELS: &[&str] = &["CERTIFICATE"];
const PKCS1_KEY_LABEL: &str = "RSA PRIVATE KEY";
const PKCS8_KEY_LABEL: &str = "PRIVATE KEY";

/// A capability that turns PEM text into parsed RSA-bearing artifacts.
pub trait ArtifactParser {
    fn parse_csr(&self, pem: &str) -> Result<ParsedCsr>;

    fn parse_certificate(&self, pem: &str) -> Result<ParsedCertificate>;

    fn parse_private_key(&self, pem: &str) -> Result<RsaPrivateKey>;

    /// Returns true if `text` parses as the claimed artifact kind.
    fn is_valid_artifact(&self, text: &str, kind: ArtifactKind) -> bool {
        match kind {
            ArtifactKind::Csr => self.parse_csr(text).is_ok(),
            ArtifactKind::Certificate => self.parse_certificate(text).is_ok(),
            ArtifactKind::PrivateKey => self.parse_private_key(text).is_ok(),
        }
    }
}

/// Parses PEM with the RustCrypto `x509-cert` and `rsa` crates.
///
/// Only the first block carrying the expected label is read, so a pasted
/// full chain decodes as its leaf.
#[derive(Debug, Clone, Copy, Default)]
pub struct PemParser;

impl ArtifactParser for PemParser {
    fn parse_csr(&self, pem: &str) -> Result<ParsedCsr> {
        let block = first_block(pem, CSR_LABELS, ArtifactKind::Csr)?;
        let inner = CertReq::from_der(block.contents())
            .map_err(|e| SslKitError::parse(ArtifactKind::Csr, e))?;
        ParsedCsr::from_cert_req(inner)
    }

    fn parse_certificate(&self, pem: &str) -> Result<ParsedCertificate> {
        let block = first_block(pem, CERTIFICATE_LABELS, ArtifactKind::Certificate)?;
        let inner = x509_cert::Certificate::from_der(block.contents())
            .map_err(|e| SslKitError::parse(ArtifactKind::Certificate, e))?;
        ParsedCertificate::from_x509(inner)
    }

    /// Accepts both PKCS#1 (`RSA PRIVATE KEY`) and PKCS#8 (`PRIVATE KEY`) encodings.
    fn parse_private_key(&self, pem: &str) -> Result<RsaPrivateKey> {
        let block = first_block(
            pem,
            &[PKCS1_KEY_LABEL, PKCS8_KEY_LABEL],
            ArtifactKind::PrivateKey,
        )?;
        let key = if block.tag() == PKCS1_KEY_LABEL {
            RsaPrivateKey::from_pkcs1_der(block.contents())
                .map_err(|e| SslKitError::parse(ArtifactKind::PrivateKey, e))?
        } else {
            RsaPrivateKey::from_pkcs8_der(block.contents())
                .map_err(|e| SslKitError::parse(ArtifactKind::PrivateKey, e))?
        };
        Ok(key)
    }
}
