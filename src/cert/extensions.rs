use std::net::IpAddr;

use const_oid::AssociatedOid;
use der::{Decode, oid::ObjectIdentifier};
use x509_cert::ext::Extension;
use x509_cert::ext::pkix::name::GeneralName;

use crate::error::{ArtifactKind, SslKitError};

/// Trait for decoding X.509 extension values.
///
/// # Example
/// ```
/// use sslkit::cert::extensions::{FromX509Extension, SubjectAltName};
/// let der = [0x30, 0x0d, 0x82, 0x0b, b'e', b'x', b'a', b'm', b'p', b'l', b'e', b'.', b'c', b'o', b'm'];
/// let san = SubjectAltName::from_x509_extension_value(&der).unwrap();
/// assert_eq!(san.names, vec!["example.com".to_string()]);
/// ```
pub trait FromX509Extension {
    /// The Object Identifier (OID) for the extension.
    const OID: ObjectIdentifier;

    /// Decodes the extension from a DER-encoded byte slice.
    fn from_x509_extension_value(extension: &[u8]) -> Result<Self, SslKitError>
    where
        Self: Sized;

    /// Finds and decodes this extension in a list, if present.
    fn find_in(extensions: Option<&[Extension]>) -> Result<Option<Self>, SslKitError>
    where
        Self: Sized,
    {
        extensions
            .unwrap_or_default()
            .iter()
            .find(|ext| ext.extn_id == Self::OID)
            .map(|ext| Self::from_x509_extension_value(ext.extn_value.as_bytes()))
            .transpose()
    }
}

/// Represents the Subject Alternative Name (SAN) extension.
///
/// # Fields
/// * `names` - DNS names, email addresses, URIs and IP addresses, in certificate order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubjectAltName {
    pub names: Vec<String>,
}

impl SubjectAltName {
    /// Joins the names with `", "`.
    pub fn joined(&self) -> String {
        self.names.join(", ")
    }
}

impl FromX509Extension for SubjectAltName {
    const OID: ObjectIdentifier = x509_cert::ext::pkix::SubjectAltName::OID;

    fn from_x509_extension_value(extension: &[u8]) -> Result<Self, SslKitError> {
        let san = x509_cert::ext::pkix::SubjectAltName::from_der(extension)
            .map_err(|e| SslKitError::parse(ArtifactKind::Certificate, e))?;
        let names = san.0.iter().filter_map(general_name_text).collect();
        Ok(Self { names })
    }
}

fn general_name_text(name: &GeneralName) -> Option<String> {
    match name {
        GeneralName::DnsName(dns) => Some(dns.to_string()),
        GeneralName::Rfc822Name(email) => Some(email.to_string()),
        GeneralName::UniformResourceIdentifier(uri) => Some(uri.to_string()),
        GeneralName::IpAddress(ip) => {
            let bytes = ip.as_bytes();
            let addr = match bytes.len() {
                4 => IpAddr::from(<[u8; 4]>::try_from(bytes).ok()?),
                16 => IpAddr::from(<[u8; 16]>::try_from(bytes).ok()?),
                _ => return None,
            };
            Some(addr.to_string())
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use der::Encode;
    use der::asn1::{Ia5String, OctetString};

    fn encode(names: Vec<GeneralName>) -> Vec<u8> {
        x509_cert::ext::pkix::SubjectAltName(names).to_der().unwrap()
    }

    #[test]
    fn decodes_mixed_general_names() {
        let der = encode(vec![
            GeneralName::DnsName(Ia5String::new("example.com").unwrap()),
            GeneralName::IpAddress(OctetString::new(vec![192, 0, 2, 1]).unwrap()),
            GeneralName::Rfc822Name(Ia5String::new("ops@example.com").unwrap()),
        ]);
        let san = SubjectAltName::from_x509_extension_value(&der).unwrap();
        assert_eq!(san.joined(), "example.com, 192.0.2.1, ops@example.com");
    }

    #[test]
    fn missing_extension_is_none() {
        assert_eq!(SubjectAltName::find_in(None).unwrap(), None);
        assert_eq!(SubjectAltName::find_in(Some(&[])).unwrap(), None);
    }

    #[test]
    fn garbage_is_a_parse_failure() {
        assert!(SubjectAltName::from_x509_extension_value(&[0x04, 0x01]).is_err());
    }
}
