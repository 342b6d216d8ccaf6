//! Key-identity matching across requests, certificates and private keys.
//!
//! A positive match means the two artifacts carry the same RSA public key. It
//! says nothing about whether a certificate chain verifies.

use rsa::RsaPrivateKey;

use crate::cert::{ParsedCertificate, ParsedCsr};
use crate::key::{KeyIdentity, KeyPair};

/// Anything that carries an RSA key.
pub trait KeyMaterial {
    fn key_identity(&self) -> KeyIdentity;
}

impl KeyMaterial for ParsedCsr {
    fn key_identity(&self) -> KeyIdentity {
        ParsedCsr::key_identity(self)
    }
}

impl KeyMaterial for ParsedCertificate {
    fn key_identity(&self) -> KeyIdentity {
        ParsedCertificate::key_identity(self)
    }
}

impl KeyMaterial for RsaPrivateKey {
    fn key_identity(&self) -> KeyIdentity {
        KeyIdentity::from(self)
    }
}

impl KeyMaterial for KeyPair {
    fn key_identity(&self) -> KeyIdentity {
        KeyPair::key_identity(self)
    }
}

/// Reports whether `a` and `b` share the same RSA modulus.
pub fn matches<A, B>(a: &A, b: &B) -> bool
where
    A: KeyMaterial + ?Sized,
    B: KeyMaterial + ?Sized,
{
    let matched = a.key_identity() == b.key_identity();
    tracing::debug!(matched, "compared key identities");
    matched
}
