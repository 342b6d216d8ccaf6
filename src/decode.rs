//! Field extraction from parsed requests and certificates.

use serde::Serialize;
use time::OffsetDateTime;

use crate::cert::extensions::{FromX509Extension, SubjectAltName};
use crate::cert::params::{NameFields, describe_name};
use crate::cert::{ParsedCertificate, ParsedCsr, signature_algorithm_display};

/// What a CSR says about its subject and key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CsrInfo {
    #[serde(flatten)]
    pub subject: NameFields,
    pub key_size: usize,
    /// Dotted OID of the request's signature algorithm.
    pub signature_algorithm: String,
}

/// What a certificate says about its subject, issuer, key and validity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CertificateInfo {
    #[serde(flatten)]
    pub subject: NameFields,
    #[serde(rename = "SANs")]
    pub sans: String,
    pub signature_algorithm_value: String,
    /// Empty unless the OID is a known PKCS#1 algorithm.
    pub signature_algorithm_display: String,
    pub key_size: usize,
    pub serial_number: String,
    /// Issuer common name.
    pub issuer_name: String,
    /// Every issuer attribute as `short=value`.
    pub issuers: String,
    #[serde(with = "time::serde::rfc3339")]
    pub start_date: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub end_date: OffsetDateTime,
}

pub fn decode_csr(csr: &ParsedCsr) -> CsrInfo {
    CsrInfo {
        subject: NameFields::from_x509_name(&csr.inner.info.subject),
        key_size: csr.key_identity().bit_length(),
        signature_algorithm: csr.inner.algorithm.oid.to_string(),
    }
}

pub fn decode_certificate(cert: &ParsedCertificate) -> CertificateInfo {
    let tbs = &cert.inner.tbs_certificate;
    let signature_oid = cert.inner.signature_algorithm.oid;

    // A SAN extension we cannot decode is reported the same as a missing one.
    let sans = SubjectAltName::find_in(tbs.extensions.as_deref())
        .ok()
        .flatten()
        .map(|san| san.joined())
        .unwrap_or_default();

    CertificateInfo {
        subject: NameFields::from_x509_name(&tbs.subject),
        sans,
        signature_algorithm_value: signature_oid.to_string(),
        signature_algorithm_display: signature_algorithm_display(&signature_oid)
            .unwrap_or_default()
            .to_string(),
        key_size: cert.key_identity().bit_length(),
        serial_number: cert.serial_number_hex(),
        issuer_name: NameFields::from_x509_name(&tbs.issuer).common_name,
        issuers: describe_name(&tbs.issuer),
        start_date: cert.not_before(),
        end_date: cert.not_after(),
    }
}
