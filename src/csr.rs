//! CSR generation.

use std::fmt;

use der::EncodePem;
use rsa::pkcs1v15::SigningKey;
use rsa::signature::{Keypair, Signer};
use serde::Serialize;
use sha2::{Sha256, Sha384, Sha512};
use tracing::{debug, info};
use x509_cert::builder::{Builder, RequestBuilder};
use x509_cert::name::Name;
use x509_cert::request::CertReq;
use x509_cert::spki::{DynSignatureAlgorithmIdentifier, EncodePublicKey};
use zeroize::Zeroizing;

use crate::cert::params::{AttributeKind, DistinguishedName, DomainType, SubjectFields};
use crate::error::Result;
use crate::key::{DigestAlgorithm, KeyPair, KeySize};

/// A signed request together with the private key that signed it.
#[derive(Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedCsr {
    pub csr_pem: String,
    pub private_key_pem: Zeroizing<String>,
}

impl fmt::Debug for GeneratedCsr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GeneratedCsr")
            .field("csr_pem", &self.csr_pem)
            .field("private_key_pem", &"<redacted>")
            .finish()
    }
}

/// Generates a fresh RSA key and a CSR for `subject`, self-signed with `digest`.
///
/// Key generation is the expensive step and only starts once every input has
/// been accepted.
pub fn generate_csr(
    subject: &SubjectFields,
    domain_type: DomainType,
    key_size: KeySize,
    digest: DigestAlgorithm,
) -> Result<GeneratedCsr> {
    let dn = DistinguishedName::build(subject, domain_type);
    let name = dn.to_x509_name()?;

    info!(bits = key_size.bits(), %digest, "generating CSR key pair");
    let key_pair = KeyPair::generate_rsa(key_size)?;

    let private = key_pair.private_key().clone();
    let cert_req = match digest {
        DigestAlgorithm::Sha256 => sign_request(name, &SigningKey::<Sha256>::new(private))?,
        DigestAlgorithm::Sha384 => sign_request(name, &SigningKey::<Sha384>::new(private))?,
        DigestAlgorithm::Sha512 => sign_request(name, &SigningKey::<Sha512>::new(private))?,
    };

    let csr_pem = cert_req.to_pem(pkcs8::LineEnding::LF)?;
    let private_key_pem = key_pair.to_pkcs1_pem()?;
    debug!(
        common_name = dn.get(AttributeKind::CommonName).unwrap_or_default(),
        "CSR signed"
    );

    Ok(GeneratedCsr {
        csr_pem,
        private_key_pem,
    })
}

fn sign_request<S>(subject: Name, signer: &S) -> Result<CertReq>
where
    S: Keypair + DynSignatureAlgorithmIdentifier + Signer<rsa::pkcs1v15::Signature>,
    S::VerifyingKey: EncodePublicKey,
{
    let builder = RequestBuilder::new(subject, signer)?;
    Ok(builder.build::<rsa::pkcs1v15::Signature>()?)
}
