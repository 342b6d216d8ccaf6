use std::str::FromStr;

use bon::Builder;
use const_oid::ObjectIdentifier;
use der::Tag;
use der::Tagged;
use der::asn1::{Any, Ia5StringRef, PrintableStringRef, SetOfVec, TeletexStringRef, Utf8StringRef};
use serde::Serialize;
use x509_cert::attr::AttributeTypeAndValue;
use x509_cert::name::{Name, RdnSequence, RelativeDistinguishedName};

use crate::error::{Result, SslKitError};
use crate::validate;

const OID_COMMON_NAME: ObjectIdentifier = ObjectIdentifier::new_unwrap("2.5.4.3");
const OID_COUNTRY: ObjectIdentifier = ObjectIdentifier::new_unwrap("2.5.4.6");
const OID_LOCALITY: ObjectIdentifier = ObjectIdentifier::new_unwrap("2.5.4.7");
const OID_STATE: ObjectIdentifier = ObjectIdentifier::new_unwrap("2.5.4.8");
const OID_ORGANIZATION: ObjectIdentifier = ObjectIdentifier::new_unwrap("2.5.4.10");
const OID_ORGANIZATIONAL_UNIT: ObjectIdentifier = ObjectIdentifier::new_unwrap("2.5.4.11");
const OID_EMAIL: ObjectIdentifier = ObjectIdentifier::new_unwrap("1.2.840.113549.1.9.1");

/// Subject information supplied by the caller of CSR generation.
///
/// # Fields
/// * `common_name` - The bare domain, before the domain type prefix is applied.
/// * `country` - Two letter country code (C).
/// * `email` - Contact address (E).
/// * `organization` - The organization (O).
/// * `organizational_unit` - The organizational unit (OU).
/// * `locality` - The locality or city (L).
/// * `state` - The state or province (ST).
#[derive(Clone, Debug, Builder, Default)]
pub struct SubjectFields {
    pub common_name: String,
    pub country: String,
    pub email: String,
    pub organization: Option<String>,
    pub organizational_unit: Option<String>,
    pub locality: Option<String>,
    pub state: Option<String>,
}

impl SubjectFields {
    /// Checks the mandatory fields for presence and shape.
    pub fn validate(&self) -> Result<()> {
        if self.common_name.is_empty() || self.country.is_empty() || self.email.is_empty() {
            return Err(SslKitError::InvalidInput(
                "commonName, countryName, and emailAddress are required".to_string(),
            ));
        }
        if !validate::is_valid_email(&self.email) {
            return Err(SslKitError::InvalidInput(
                "emailAddress is not valid".to_string(),
            ));
        }
        if !validate::is_valid_country_code(&self.country) {
            return Err(SslKitError::InvalidInput(
                "countryName is not valid".to_string(),
            ));
        }
        if !validate::is_valid_domain(&self.common_name) {
            return Err(SslKitError::InvalidInput(
                "commonName is not valid".to_string(),
            ));
        }
        Ok(())
    }
}

/// How the common name is derived from the requested domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DomainType {
    /// `www.` prefix.
    Www,
    /// Used as given.
    Subdomain,
    /// `*.` prefix.
    Wildcard,
}

impl DomainType {
    pub fn apply(self, domain: &str) -> String {
        match self {
            DomainType::Www => format!("www.{domain}"),
            DomainType::Subdomain => domain.to_string(),
            DomainType::Wildcard => format!("*.{domain}"),
        }
    }
}

impl FromStr for DomainType {
    type Err = SslKitError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "www" => Ok(DomainType::Www),
            "subdomain" => Ok(DomainType::Subdomain),
            "*" => Ok(DomainType::Wildcard),
            other => Err(SslKitError::InvalidDomainType(other.to_string())),
        }
    }
}

/// The attribute types a generated subject may carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttributeKind {
    CommonName,
    Country,
    Email,
    Organization,
    OrganizationalUnit,
    Locality,
    StateOrProvince,
}

impl AttributeKind {
    pub fn oid(self) -> ObjectIdentifier {
        match self {
            AttributeKind::CommonName => OID_COMMON_NAME,
            AttributeKind::Country => OID_COUNTRY,
            AttributeKind::Email => OID_EMAIL,
            AttributeKind::Organization => OID_ORGANIZATION,
            AttributeKind::OrganizationalUnit => OID_ORGANIZATIONAL_UNIT,
            AttributeKind::Locality => OID_LOCALITY,
            AttributeKind::StateOrProvince => OID_STATE,
        }
    }

    pub fn short_name(self) -> &'static str {
        match self {
            AttributeKind::CommonName => "CN",
            AttributeKind::Country => "C",
            AttributeKind::Email => "E",
            AttributeKind::Organization => "O",
            AttributeKind::OrganizationalUnit => "OU",
            AttributeKind::Locality => "L",
            AttributeKind::StateOrProvince => "ST",
        }
    }

    fn from_oid(oid: &ObjectIdentifier) -> Option<Self> {
        [
            AttributeKind::CommonName,
            AttributeKind::Country,
            AttributeKind::Email,
            AttributeKind::Organization,
            AttributeKind::OrganizationalUnit,
            AttributeKind::Locality,
            AttributeKind::StateOrProvince,
        ]
        .into_iter()
        .find(|kind| kind.oid() == *oid)
    }

    /// Encodes `value` with the string type conventional for this attribute.
    fn encode_value(self, value: &str) -> der::Result<Any> {
        match self {
            AttributeKind::Country => Any::encode_from(&PrintableStringRef::new(value)?),
            AttributeKind::Email => Any::encode_from(&Ia5StringRef::new(value)?),
            _ => Any::encode_from(&Utf8StringRef::new(value)?),
        }
    }
}

/// A single (type, value) pair of a subject.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubjectAttribute {
    pub kind: AttributeKind,
    pub value: String,
}

/// An ordered subject ready to be encoded into a request.
///
/// Order is CN, C, E, then whichever of O, OU, L, ST were supplied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DistinguishedName {
    attributes: Vec<SubjectAttribute>,
}

impl DistinguishedName {
    /// Assembles the subject from validated fields.
    pub fn build(fields: &SubjectFields, domain_type: DomainType) -> Self {
        let mut attributes = vec![
            SubjectAttribute {
                kind: AttributeKind::CommonName,
                value: domain_type.apply(&fields.common_name),
            },
            SubjectAttribute {
                kind: AttributeKind::Country,
                value: fields.country.clone(),
            },
            SubjectAttribute {
                kind: AttributeKind::Email,
                value: fields.email.clone(),
            },
        ];

        let optional = [
            (AttributeKind::Organization, &fields.organization),
            (AttributeKind::OrganizationalUnit, &fields.organizational_unit),
            (AttributeKind::Locality, &fields.locality),
            (AttributeKind::StateOrProvince, &fields.state),
        ];
        for (kind, value) in optional {
            if let Some(value) = value.as_deref().filter(|v| !v.is_empty()) {
                attributes.push(SubjectAttribute {
                    kind,
                    value: value.to_string(),
                });
            }
        }

        DistinguishedName { attributes }
    }

    pub fn attributes(&self) -> &[SubjectAttribute] {
        &self.attributes
    }

    pub fn get(&self, kind: AttributeKind) -> Option<&str> {
        self.attributes
            .iter()
            .find(|attr| attr.kind == kind)
            .map(|attr| attr.value.as_str())
    }

    /// Converts the distinguished name to an X.509 name, one attribute per RDN.
    ///
    /// Fails if a value cannot be represented in its ASN.1 string type,
    /// e.g. a country code containing `@`.
    pub fn to_x509_name(&self) -> Result<Name> {
        let rdns = self
            .attributes
            .iter()
            .map(|attr| -> Result<RelativeDistinguishedName> {
                let atv = AttributeTypeAndValue {
                    oid: attr.kind.oid(),
                    value: attr.kind.encode_value(&attr.value)?,
                };
                Ok(RelativeDistinguishedName(SetOfVec::try_from(vec![atv])?))
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(RdnSequence(rdns))
    }
}

/// Parses a domain type and builds the subject in one step.
pub fn build_subject(fields: &SubjectFields, domain_type: &str) -> Result<DistinguishedName> {
    let domain_type = DomainType::from_str(domain_type)?;
    Ok(DistinguishedName::build(fields, domain_type))
}

/// The well-known attributes of a decoded subject or issuer.
///
/// Absent attributes are empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NameFields {
    pub common_name: String,
    pub country_name: String,
    pub email_address: String,
    pub organization_name: String,
    pub organizational_unit_name: String,
    pub locality_name: String,
    pub state_or_province_name: String,
}

impl NameFields {
    /// Extracts the well-known attributes from an X.509 name.
    ///
    /// When an attribute repeats, the first occurrence wins.
    pub fn from_x509_name(name: &Name) -> Self {
        let mut fields = NameFields::default();
        for atv in name.0.iter().flat_map(|rdn| rdn.0.iter()) {
            let Some(kind) = AttributeKind::from_oid(&atv.oid) else {
                continue;
            };
            let slot = match kind {
                AttributeKind::CommonName => &mut fields.common_name,
                AttributeKind::Country => &mut fields.country_name,
                AttributeKind::Email => &mut fields.email_address,
                AttributeKind::Organization => &mut fields.organization_name,
                AttributeKind::OrganizationalUnit => &mut fields.organizational_unit_name,
                AttributeKind::Locality => &mut fields.locality_name,
                AttributeKind::StateOrProvince => &mut fields.state_or_province_name,
            };
            if slot.is_empty() {
                *slot = attribute_text(&atv.value);
            }
        }
        fields
    }
}

/// Renders every attribute of `name` as `short=value`, joined by `", "`,
/// in the order the name carries them.
pub fn describe_name(name: &Name) -> String {
    name.0
        .iter()
        .flat_map(|rdn| rdn.0.iter())
        .map(|atv| format!("{}={}", short_name(&atv.oid), attribute_text(&atv.value)))
        .collect::<Vec<_>>()
        .join(", ")
}

fn short_name(oid: &ObjectIdentifier) -> String {
    if let Some(kind) = AttributeKind::from_oid(oid) {
        return kind.short_name().to_string();
    }
    const_oid::db::DB
        .by_oid(oid)
        .map(str::to_string)
        .unwrap_or_else(|| oid.to_string())
}

fn attribute_text(value: &Any) -> String {
    let decoded = match value.tag() {
        Tag::Utf8String => value.decode_as::<String>().ok(),
        Tag::PrintableString => value
            .decode_as::<PrintableStringRef<'_>>()
            .ok()
            .map(|s| s.to_string()),
        Tag::Ia5String => value
            .decode_as::<Ia5StringRef<'_>>()
            .ok()
            .map(|s| s.to_string()),
        Tag::TeletexString => value
            .decode_as::<TeletexStringRef<'_>>()
            .ok()
            .map(|s| s.to_string()),
        _ => None,
    };
    decoded.unwrap_or_else(|| String::from_utf8_lossy(value.value()).into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields() -> SubjectFields {
        SubjectFields::builder()
            .common_name("example.com".to_string())
            .country("VN".to_string())
            .email("admin@example.com".to_string())
            .build()
    }

    #[test]
    fn domain_type_prefixes() {
        let www = build_subject(&fields(), "www").unwrap();
        assert_eq!(www.get(AttributeKind::CommonName), Some("www.example.com"));

        let sub = build_subject(&fields(), "subdomain").unwrap();
        assert_eq!(sub.get(AttributeKind::CommonName), Some("example.com"));

        let wild = build_subject(&fields(), "*").unwrap();
        assert_eq!(wild.get(AttributeKind::CommonName), Some("*.example.com"));
    }

    #[test]
    fn unknown_domain_type_is_rejected() {
        assert_eq!(
            build_subject(&fields(), "apex"),
            Err(SslKitError::InvalidDomainType("apex".to_string()))
        );
    }

    #[test]
    fn attribute_order_is_fixed() {
        let mut input = fields();
        input.state = Some("Ha Noi".to_string());
        input.organization = Some("Example Ltd".to_string());
        input.locality = Some(String::new());

        let dn = DistinguishedName::build(&input, DomainType::Subdomain);
        let kinds: Vec<_> = dn.attributes().iter().map(|a| a.kind).collect();
        assert_eq!(
            kinds,
            vec![
                AttributeKind::CommonName,
                AttributeKind::Country,
                AttributeKind::Email,
                AttributeKind::Organization,
                AttributeKind::StateOrProvince,
            ]
        );
    }

    #[test]
    fn x509_name_round_trip() {
        let mut input = fields();
        input.organizational_unit = Some("Ops".to_string());
        let dn = DistinguishedName::build(&input, DomainType::Www);
        let name = dn.to_x509_name().unwrap();

        let decoded = NameFields::from_x509_name(&name);
        assert_eq!(decoded.common_name, "www.example.com");
        assert_eq!(decoded.country_name, "VN");
        assert_eq!(decoded.email_address, "admin@example.com");
        assert_eq!(decoded.organizational_unit_name, "Ops");
        assert_eq!(decoded.organization_name, "");
        assert_eq!(
            describe_name(&name),
            "CN=www.example.com, C=VN, E=admin@example.com, OU=Ops"
        );
    }

    #[test]
    fn unprintable_country_fails_to_encode() {
        let mut input = fields();
        input.country = "V@".to_string();
        let dn = DistinguishedName::build(&input, DomainType::Subdomain);
        assert!(matches!(
            dn.to_x509_name(),
            Err(SslKitError::SigningFailure(_))
        ));
    }

    #[test]
    fn validation() {
        assert!(fields().validate().is_ok());

        let mut bad = fields();
        bad.email = "nobody".to_string();
        assert!(matches!(bad.validate(), Err(SslKitError::InvalidInput(_))));

        let mut bad = fields();
        bad.common_name = String::new();
        assert!(matches!(bad.validate(), Err(SslKitError::InvalidInput(_))));
    }
}
