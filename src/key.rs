use std::fmt;
use std::str::FromStr;

use rsa::traits::PublicKeyParts;
use rsa::{BigUint, RsaPrivateKey, RsaPublicKey};
use serde::Serialize;
use zeroize::Zeroizing;

use crate::error::{Result, SslKitError};

/// RSA modulus lengths accepted for CSR generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(into = "u32")]
pub enum KeySize {
    #[default]
    Bits2048,
    Bits3072,
    Bits4096,
}

impl KeySize {
    pub fn bits(self) -> u32 {
        match self {
            KeySize::Bits2048 => 2048,
            KeySize::Bits3072 => 3072,
            KeySize::Bits4096 => 4096,
        }
    }
}

impl TryFrom<u32> for KeySize {
    type Error = SslKitError;

    fn try_from(bits: u32) -> Result<Self> {
        match bits {
            2048 => Ok(KeySize::Bits2048),
            3072 => Ok(KeySize::Bits3072),
            4096 => Ok(KeySize::Bits4096),
            other => Err(SslKitError::InvalidKeySize(other)),
        }
    }
}

impl From<KeySize> for u32 {
    fn from(value: KeySize) -> Self {
        value.bits()
    }
}

/// Digest used when self-signing a CSR with RSASSA-PKCS1-v1_5.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DigestAlgorithm {
    #[default]
    Sha256,
    Sha384,
    Sha512,
}

impl DigestAlgorithm {
    pub fn as_str(self) -> &'static str {
        match self {
            DigestAlgorithm::Sha256 => "sha256",
            DigestAlgorithm::Sha384 => "sha384",
            DigestAlgorithm::Sha512 => "sha512",
        }
    }
}

impl FromStr for DigestAlgorithm {
    type Err = SslKitError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "sha256" => Ok(DigestAlgorithm::Sha256),
            "sha384" => Ok(DigestAlgorithm::Sha384),
            "sha512" => Ok(DigestAlgorithm::Sha512),
            other => Err(SslKitError::InvalidDigest(other.to_string())),
        }
    }
}

impl fmt::Display for DigestAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A freshly generated RSA key pair.
///
/// Handed to the caller and never retained by the library.
pub struct KeyPair {
    private: Box<RsaPrivateKey>,
}

impl KeyPair {
    /// Generate an RSA key pair of the given size.
    pub fn generate_rsa(size: KeySize) -> Result<Self> {
        let mut rng = rand_core::OsRng;
        let private = RsaPrivateKey::new(&mut rng, size.bits() as usize)?;
        Ok(KeyPair {
            private: Box::new(private),
        })
    }

    pub fn private_key(&self) -> &RsaPrivateKey {
        &self.private
    }

    /// Exports the private key as PKCS#1 PEM (`RSA PRIVATE KEY`).
    pub fn to_pkcs1_pem(&self) -> Result<Zeroizing<String>> {
        use rsa::pkcs1::EncodeRsaPrivateKey;
        Ok(self.private.to_pkcs1_pem(pkcs8::LineEnding::LF)?)
    }

    pub fn key_identity(&self) -> KeyIdentity {
        KeyIdentity::from_modulus(self.private.n())
    }
}

/// The RSA modulus of an artifact, used as its key fingerprint.
///
/// The public exponent is ignored. Equality is numeric.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct KeyIdentity(BigUint);

impl KeyIdentity {
    pub fn from_modulus(modulus: &BigUint) -> Self {
        KeyIdentity(modulus.clone())
    }

    pub fn bit_length(&self) -> usize {
        self.0.bits()
    }
}

impl From<&RsaPublicKey> for KeyIdentity {
    fn from(key: &RsaPublicKey) -> Self {
        KeyIdentity::from_modulus(key.n())
    }
}

impl From<&RsaPrivateKey> for KeyIdentity {
    fn from(key: &RsaPrivateKey) -> Self {
        KeyIdentity::from_modulus(key.n())
    }
}

/// Renders the modulus in base 10.
impl fmt::Display for KeyIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_size_boundaries() {
        assert_eq!(KeySize::try_from(2047), Err(SslKitError::InvalidKeySize(2047)));
        assert_eq!(KeySize::try_from(4097), Err(SslKitError::InvalidKeySize(4097)));
        assert_eq!(KeySize::try_from(2048), Ok(KeySize::Bits2048));
        assert_eq!(KeySize::try_from(3072), Ok(KeySize::Bits3072));
        assert_eq!(KeySize::try_from(4096), Ok(KeySize::Bits4096));
    }

    #[test]
    fn digest_parsing() {
        assert_eq!("sha384".parse::<DigestAlgorithm>(), Ok(DigestAlgorithm::Sha384));
        assert_eq!(
            "md5".parse::<DigestAlgorithm>(),
            Err(SslKitError::InvalidDigest("md5".to_string()))
        );
        assert_eq!(DigestAlgorithm::default().to_string(), "sha256");
    }

    #[test]
    fn key_identity_compares_by_value() {
        let a = KeyIdentity::from_modulus(&BigUint::from(0x1234_5678_u32));
        let b = KeyIdentity::from_modulus(&BigUint::parse_bytes(b"305419896", 10).unwrap());
        assert_eq!(a, b);
        assert_eq!(a.to_string(), "305419896");
        assert_eq!(a.bit_length(), 29);
    }
}
