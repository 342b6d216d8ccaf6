//! The entry points an HTTP or CLI layer calls with raw request values.

use std::str::FromStr;

use bon::Builder;
use tracing::info;

use crate::caa::{self, CaaRecordSet};
use crate::cert::params::{DomainType, SubjectFields};
use crate::chain::{self, ChainEntrySummary, InstalledChain};
use crate::csr::{self, GeneratedCsr};
use crate::decode::{self, CertificateInfo, CsrInfo};
use crate::error::{ArtifactKind, Result, SslKitError};
use crate::key::{DigestAlgorithm, KeySize};
use crate::matcher;
use crate::parse::{ArtifactParser, PemParser};
use crate::pem_utils;

/// Raw CSR generation input as received from a request.
///
/// # Fields
/// * `subject` - The subject fields.
/// * `domain_type` - One of `www`, `subdomain` or `*`.
/// * `key_size` - RSA modulus length, 2048 when omitted.
/// * `digest` - Signing digest name, `sha256` when omitted.
#[derive(Clone, Debug, Builder)]
pub struct CsrParams {
    pub subject: SubjectFields,
    pub domain_type: String,
    #[builder(default = 2048)]
    pub key_size: u32,
    #[builder(default = DigestAlgorithm::default().to_string())]
    pub digest: String,
}

/// Validates raw inputs, parses PEM and dispatches to the pure components.
#[derive(Debug, Clone, Default)]
pub struct SslToolkit<P = PemParser> {
    parser: P,
}

impl SslToolkit<PemParser> {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<P: ArtifactParser> SslToolkit<P> {
    pub fn with_parser(parser: P) -> Self {
        Self { parser }
    }

    /// Generates a key pair and a CSR.
    ///
    /// Every input is validated before the key pair is generated.
    pub fn generate_csr(&self, params: &CsrParams) -> Result<GeneratedCsr> {
        params.subject.validate()?;
        let domain_type = DomainType::from_str(&params.domain_type)?;
        let key_size = KeySize::try_from(params.key_size)?;
        let digest = DigestAlgorithm::from_str(&params.digest)?;
        csr::generate_csr(&params.subject, domain_type, key_size, digest)
    }

    pub fn decode_csr(&self, csr_pem: &str) -> Result<CsrInfo> {
        let csr = self.parser.parse_csr(csr_pem)?;
        Ok(decode::decode_csr(&csr))
    }

    pub fn decode_certificate(&self, crt_pem: &str) -> Result<CertificateInfo> {
        let cert = self.parser.parse_certificate(crt_pem)?;
        Ok(decode::decode_certificate(&cert))
    }

    /// Whether a CSR and a certificate carry the same public key.
    pub fn match_csr_certificate(&self, csr_pem: &str, crt_pem: &str) -> Result<bool> {
        let csr = self.parser.parse_csr(csr_pem)?;
        let cert = self.parser.parse_certificate(crt_pem)?;
        let matched = matcher::matches(&csr, &cert);
        info!(matched, "checked CSR against certificate");
        Ok(matched)
    }

    /// Whether a certificate was issued for the given private key.
    pub fn match_certificate_key(&self, crt_pem: &str, private_key_pem: &str) -> Result<bool> {
        let cert = self.parser.parse_certificate(crt_pem)?;
        let key = self.parser.parse_private_key(private_key_pem)?;
        let matched = matcher::matches(&cert, &key);
        info!(matched, "checked certificate against private key");
        Ok(matched)
    }

    pub fn encode_caa(&self, domain: &str, supplier: &str, wildcard: &str) -> Result<CaaRecordSet> {
        caa::encode(domain, supplier, wildcard)
    }

    /// Summarizes each PEM certificate. Any element that fails to parse fails the call.
    pub fn summarize_chain<S: AsRef<str>>(&self, pems: &[S]) -> Result<Vec<ChainEntrySummary>> {
        let chain = pems
            .iter()
            .map(|pem| self.parser.parse_certificate(pem.as_ref()))
            .collect::<Result<Vec<_>>>()?;
        Ok(chain::summarize(&chain))
    }

    /// Reads the chain printed by a TLS client, e.g. `openssl s_client -showcerts`.
    ///
    /// The first certificate is decoded in full and the remaining ones are summarized.
    pub fn summarize_chain_output(&self, output: &str) -> Result<InstalledChain> {
        let blocks = pem_utils::certificate_blocks(output)?;
        let Some((leaf, rest)) = blocks.split_first() else {
            return Err(SslKitError::parse(
                ArtifactKind::Certificate,
                "no certificate in client output",
            ));
        };
        Ok(InstalledChain {
            leaf: self.decode_certificate(leaf)?,
            chains: self.summarize_chain(rest)?,
        })
    }
}
