//! Per-certificate summaries of a served chain.

use serde::Serialize;
use time::OffsetDateTime;

use crate::cert::ParsedCertificate;
use crate::cert::params::NameFields;
use crate::decode::CertificateInfo;

/// The fields shown for each certificate of an installed chain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChainEntrySummary {
    pub common_name: String,
    pub organization_name: String,
    pub locality_name: String,
    pub serial_number: String,
    pub signature_algorithm_value: String,
    pub issuer_name: String,
    #[serde(with = "time::serde::rfc3339")]
    pub start_date: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub end_date: OffsetDateTime,
}

impl ChainEntrySummary {
    pub fn from_certificate(cert: &ParsedCertificate) -> Self {
        let tbs = &cert.inner.tbs_certificate;
        let subject = NameFields::from_x509_name(&tbs.subject);
        ChainEntrySummary {
            common_name: subject.common_name,
            organization_name: subject.organization_name,
            locality_name: subject.locality_name,
            serial_number: cert.serial_number_hex(),
            signature_algorithm_value: cert.inner.signature_algorithm.oid.to_string(),
            issuer_name: NameFields::from_x509_name(&tbs.issuer).common_name,
            start_date: cert.not_before(),
            end_date: cert.not_after(),
        }
    }
}

/// What a server presents: its own certificate in full, then the rest of the chain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InstalledChain {
    #[serde(flatten)]
    pub leaf: CertificateInfo,
    pub chains: Vec<ChainEntrySummary>,
}

/// Summarizes each certificate, keeping the input order.
pub fn summarize(chain: &[ParsedCertificate]) -> Vec<ChainEntrySummary> {
    tracing::debug!(length = chain.len(), "summarizing certificate chain");
    chain.iter().map(ChainEntrySummary::from_certificate).collect()
}
