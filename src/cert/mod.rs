pub mod extensions;
pub mod params;

use const_oid::ObjectIdentifier;
use rsa::RsaPublicKey;
use rsa::pkcs1::DecodeRsaPublicKey;
use time::OffsetDateTime;
use x509_cert::request::CertReq;
use x509_cert::spki::SubjectPublicKeyInfoOwned;

use crate::error::{ArtifactKind, Result, SslKitError};
use crate::key::KeyIdentity;

const RSA_ENCRYPTION: ObjectIdentifier = const_oid::db::rfc5912::RSA_ENCRYPTION;

/// Display names of the PKCS#1 signature and key algorithms, `1.2.840.113549.1.1.1` to `.14`.
const PKCS1_ALGORITHMS: &[(ObjectIdentifier, &str)] = &[
    (ObjectIdentifier::new_unwrap("1.2.840.113549.1.1.1"), "rsaEncryption"),
    (ObjectIdentifier::new_unwrap("1.2.840.113549.1.1.2"), "md2WithRSAEncryption"),
    (ObjectIdentifier::new_unwrap("1.2.840.113549.1.1.3"), "md4WithRSAEncryption"),
    (ObjectIdentifier::new_unwrap("1.2.840.113549.1.1.4"), "md5WithRSAEncryption"),
    (ObjectIdentifier::new_unwrap("1.2.840.113549.1.1.5"), "sha1WithRSAEncryption"),
    (ObjectIdentifier::new_unwrap("1.2.840.113549.1.1.6"), "rsaOAEPEncryptionSET"),
    (ObjectIdentifier::new_unwrap("1.2.840.113549.1.1.7"), "id-RSAES-OAEP"),
    (ObjectIdentifier::new_unwrap("1.2.840.113549.1.1.8"), "id-mgf1"),
    (ObjectIdentifier::new_unwrap("1.2.840.113549.1.1.9"), "id-pSpecified"),
    (ObjectIdentifier::new_unwrap("1.2.840.113549.1.1.10"), "RSASSA-PSS"),
    (ObjectIdentifier::new_unwrap("1.2.840.113549.1.1.11"), "sha256WithRSAEncryption"),
    (ObjectIdentifier::new_unwrap("1.2.840.113549.1.1.12"), "sha384WithRSAEncryption"),
    (ObjectIdentifier::new_unwrap("1.2.840.113549.1.1.13"), "sha512WithRSAEncryption"),
    (ObjectIdentifier::new_unwrap("1.2.840.113549.1.1.14"), "sha224WithRSAEncryption"),
];

/// Resolves a PKCS#1 algorithm OID to its display name.
///
/// Anything outside the table, including other arcs, yields `None`.
pub fn signature_algorithm_display(oid: &ObjectIdentifier) -> Option<&'static str> {
    PKCS1_ALGORITHMS
        .iter()
        .find(|(known, _)| known == oid)
        .map(|(_, name)| *name)
}

/// Extracts the RSA public key carried by a subject public key info.
pub(crate) fn rsa_public_key(
    spki: &SubjectPublicKeyInfoOwned,
    kind: ArtifactKind,
) -> Result<RsaPublicKey> {
    if spki.algorithm.oid != RSA_ENCRYPTION {
        return Err(SslKitError::parse(
            kind,
            format!("key algorithm {} is not supported", spki.algorithm.oid),
        ));
    }
    RsaPublicKey::from_pkcs1_der(spki.subject_public_key.raw_bytes())
        .map_err(|e| SslKitError::parse(kind, e))
}

pub(crate) fn to_offset_date_time(t: &x509_cert::time::Time) -> OffsetDateTime {
    match t {
        x509_cert::time::Time::UtcTime(ut) => OffsetDateTime::from(ut.to_system_time()),
        x509_cert::time::Time::GeneralTime(gt) => OffsetDateTime::from(gt.to_system_time()),
    }
}

/// A parsed certificate signing request with an RSA public key.
#[derive(Debug, Clone)]
pub struct ParsedCsr {
    /// The inner representation of the request.
    pub inner: CertReq,
    pub public_key: RsaPublicKey,
}

impl ParsedCsr {
    pub fn from_cert_req(inner: CertReq) -> Result<Self> {
        let public_key = rsa_public_key(&inner.info.public_key, ArtifactKind::Csr)?;
        Ok(Self { inner, public_key })
    }

    pub fn key_identity(&self) -> KeyIdentity {
        KeyIdentity::from(&self.public_key)
    }
}

/// A parsed X.509 certificate with an RSA public key.
#[derive(Debug, Clone)]
pub struct ParsedCertificate {
    /// The inner representation of the certificate.
    pub inner: x509_cert::Certificate,
    pub public_key: RsaPublicKey,
}

impl ParsedCertificate {
    pub fn from_x509(inner: x509_cert::Certificate) -> Result<Self> {
        let public_key = rsa_public_key(
            &inner.tbs_certificate.subject_public_key_info,
            ArtifactKind::Certificate,
        )?;
        Ok(Self { inner, public_key })
    }

    pub fn key_identity(&self) -> KeyIdentity {
        KeyIdentity::from(&self.public_key)
    }

    /// Serial number as lowercase hex of its DER integer bytes.
    pub fn serial_number_hex(&self) -> String {
        hex::encode(self.inner.tbs_certificate.serial_number.as_bytes())
    }

    pub fn not_before(&self) -> OffsetDateTime {
        to_offset_date_time(&self.inner.tbs_certificate.validity.not_before)
    }

    pub fn not_after(&self) -> OffsetDateTime {
        to_offset_date_time(&self.inner.tbs_certificate.validity.not_after)
    }
}
