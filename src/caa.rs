//! DNS CAA (type 257) records rendered for BIND, legacy RFC 3597 zone files and tinydns.
//!
//! All three renderings are produced from the same issue tag and supplier value.

use std::str::FromStr;

use serde::Serialize;
use tracing::debug;

use crate::error::{Result, SslKitError};
use crate::validate;

/// Certificate authorities that may be named in a generated record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Supplier {
    Sectigo,
    Comodo,
    DigiCert,
    LetsEncrypt,
    GlobalSign,
    GoDaddy,
    GoogleTrustServices,
    Amazon,
    Entrust,
    SslCom,
    Buypass,
    Harica,
}

impl Supplier {
    pub const ALL: [Supplier; 12] = [
        Supplier::Sectigo,
        Supplier::Comodo,
        Supplier::DigiCert,
        Supplier::LetsEncrypt,
        Supplier::GlobalSign,
        Supplier::GoDaddy,
        Supplier::GoogleTrustServices,
        Supplier::Amazon,
        Supplier::Entrust,
        Supplier::SslCom,
        Supplier::Buypass,
        Supplier::Harica,
    ];

    /// The issuer domain name placed in the record value.
    pub fn as_str(self) -> &'static str {
        match self {
            Supplier::Sectigo => "sectigo.com",
            Supplier::Comodo => "comodoca.com",
            Supplier::DigiCert => "digicert.com",
            Supplier::LetsEncrypt => "letsencrypt.org",
            Supplier::GlobalSign => "globalsign.com",
            Supplier::GoDaddy => "godaddy.com",
            Supplier::GoogleTrustServices => "pki.goog",
            Supplier::Amazon => "amazon.com",
            Supplier::Entrust => "entrust.net",
            Supplier::SslCom => "ssl.com",
            Supplier::Buypass => "buypass.com",
            Supplier::Harica => "harica.gr",
        }
    }
}

impl FromStr for Supplier {
    type Err = SslKitError;

    fn from_str(s: &str) -> Result<Self> {
        Supplier::ALL
            .into_iter()
            .find(|supplier| supplier.as_str() == s)
            .ok_or_else(|| SslKitError::InvalidSupplier(s.to_string()))
    }
}

/// Whether the record governs wildcard certificates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WildcardScope {
    Wildcard,
    NonWildcard,
}

impl WildcardScope {
    pub fn as_str(self) -> &'static str {
        match self {
            WildcardScope::Wildcard => "wildcard",
            WildcardScope::NonWildcard => "non-wildcard",
        }
    }

    /// The CAA property tag this scope maps to.
    pub fn issue_tag(self) -> &'static str {
        match self {
            WildcardScope::Wildcard => "issuewild",
            WildcardScope::NonWildcard => "issue",
        }
    }
}

impl FromStr for WildcardScope {
    type Err = SslKitError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "wildcard" => Ok(WildcardScope::Wildcard),
            "non-wildcard" => Ok(WildcardScope::NonWildcard),
            other => Err(SslKitError::InvalidWildcardScope(other.to_string())),
        }
    }
}

/// One CAA policy: `<domain> CAA 0 <tag> "<supplier>"`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaaRecord {
    domain: String,
    supplier: Supplier,
    scope: WildcardScope,
}

impl CaaRecord {
    /// Builds a record, stripping any `http(s)://` prefix from `domain`.
    pub fn new(domain: &str, supplier: Supplier, scope: WildcardScope) -> Result<Self> {
        Ok(CaaRecord {
            domain: checked_domain(domain)?,
            supplier,
            scope,
        })
    }

    pub fn issue_tag(&self) -> &'static str {
        self.scope.issue_tag()
    }

    /// The property tag immediately followed by the value, as carried on the wire.
    pub fn payload(&self) -> String {
        format!("{}{}", self.issue_tag(), self.supplier.as_str())
    }

    fn tag_len(&self) -> u8 {
        self.issue_tag().len() as u8
    }

    pub fn to_bind(&self) -> String {
        format!(
            "{}. IN CAA 0 {} \"{}\"",
            self.domain,
            self.issue_tag(),
            self.supplier.as_str()
        )
    }

    /// RFC 3597 generic form: flags byte, tag length byte, tag and value.
    pub fn to_legacy_rdata(&self) -> String {
        let rdata = format!(
            "00{:02X}{}",
            self.tag_len(),
            hex::encode_upper(self.payload())
        );
        format!(
            "{}. IN TYPE257 \\# {} {}",
            self.domain,
            rdata.len() / 2,
            rdata
        )
    }

    /// tinydns generic record with every byte written as a three digit octal escape.
    pub fn to_tinydns(&self) -> String {
        let escaped: String = [0, self.tag_len()]
            .into_iter()
            .chain(self.payload().bytes())
            .map(|byte| format!("\\{byte:03o}"))
            .collect();
        format!(":{}:257:{}", self.domain, escaped)
    }

    pub fn encode(&self) -> CaaRecordSet {
        debug!(domain = %self.domain, tag = self.issue_tag(), "encoding CAA record");
        CaaRecordSet {
            id: format!(
                "caa-record-{}-{}",
                self.supplier.as_str(),
                self.scope.as_str()
            ),
            bind_zone: self.to_bind(),
            legacy_rdata: self.to_legacy_rdata(),
            tinydns: self.to_tinydns(),
        }
    }
}

/// The three renderings of one CAA record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CaaRecordSet {
    pub id: String,
    pub bind_zone: String,
    pub legacy_rdata: String,
    pub tinydns: String,
}

/// A titled block of zone file lines.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ZoneRecord {
    pub title: &'static str,
    pub content: Vec<String>,
}

impl CaaRecordSet {
    pub fn zone_records(&self) -> Vec<ZoneRecord> {
        vec![
            ZoneRecord {
                title: "Standard BIND Zone File",
                content: vec![self.bind_zone.clone()],
            },
            ZoneRecord {
                title: "Legacy Zone File",
                content: vec![self.legacy_rdata.clone()],
            },
            ZoneRecord {
                title: "tinydns",
                content: vec![self.tinydns.clone()],
            },
        ]
    }
}

fn checked_domain(domain: &str) -> Result<String> {
    let domain = validate::strip_scheme(domain);
    if !validate::is_valid_domain(domain) {
        return Err(SslKitError::InvalidDomain(domain.to_string()));
    }
    Ok(domain.to_string())
}

/// Validates raw inputs and renders the record.
///
/// The domain is checked first, then the supplier, then the scope.
pub fn encode(domain: &str, supplier: &str, wildcard: &str) -> Result<CaaRecordSet> {
    let record = CaaRecord {
        domain: checked_domain(domain)?,
        supplier: Supplier::from_str(supplier)?,
        scope: WildcardScope::from_str(wildcard)?,
    };
    Ok(record.encode())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sectigo(scope: &str) -> CaaRecordSet {
        encode("example.com", "sectigo.com", scope).unwrap()
    }

    #[test]
    fn bind_form() {
        assert_eq!(
            sectigo("non-wildcard").bind_zone,
            "example.com. IN CAA 0 issue \"sectigo.com\""
        );
        assert_eq!(
            sectigo("wildcard").bind_zone,
            "example.com. IN CAA 0 issuewild \"sectigo.com\""
        );
    }

    #[test]
    fn legacy_form() {
        assert_eq!(
            sectigo("non-wildcard").legacy_rdata,
            "example.com. IN TYPE257 \\# 18 000569737375657365637469676F2E636F6D"
        );
        assert_eq!(
            sectigo("wildcard").legacy_rdata,
            "example.com. IN TYPE257 \\# 22 0009697373756577696C647365637469676F2E636F6D"
        );
    }

    #[test]
    fn tinydns_form() {
        let tinydns = sectigo("non-wildcard").tinydns;
        assert!(tinydns.starts_with(":example.com:257:\\000\\005\\151\\163\\163\\165\\145"));
        assert!(tinydns.ends_with("\\056\\143\\157\\155"));
        // two header bytes plus "issuesectigo.com"
        assert_eq!(tinydns.matches('\\').count(), 18);

        assert!(sectigo("wildcard").tinydns.starts_with(":example.com:257:\\000\\011"));
    }

    #[test]
    fn scheme_is_stripped_from_domain() {
        let set = encode("https://example.com", "letsencrypt.org", "non-wildcard").unwrap();
        assert_eq!(set.bind_zone, "example.com. IN CAA 0 issue \"letsencrypt.org\"");
        assert_eq!(set.id, "caa-record-letsencrypt.org-non-wildcard");
    }

    #[test]
    fn rejects_bad_inputs() {
        assert_eq!(
            encode("", "sectigo.com", "wildcard"),
            Err(SslKitError::InvalidDomain(String::new()))
        );
        assert_eq!(
            encode("not a domain", "sectigo.com", "wildcard"),
            Err(SslKitError::InvalidDomain("not a domain".to_string()))
        );
        assert_eq!(
            encode("example.com", "evil-ca.example", "wildcard"),
            Err(SslKitError::InvalidSupplier("evil-ca.example".to_string()))
        );
        assert_eq!(
            encode("example.com", "sectigo.com", "both"),
            Err(SslKitError::InvalidWildcardScope("both".to_string()))
        );
    }

    #[test]
    fn invalid_domain_wins_over_other_errors() {
        assert_eq!(
            encode("https://", "evil-ca.example", "both"),
            Err(SslKitError::InvalidDomain(String::new()))
        );
        assert_eq!(
            encode("example.com", "evil-ca.example", "both"),
            Err(SslKitError::InvalidSupplier("evil-ca.example".to_string()))
        );
    }

    #[test]
    fn record_new_normalizes_domain() {
        let record =
            CaaRecord::new("http://example.org", Supplier::DigiCert, WildcardScope::Wildcard)
                .unwrap();
        assert_eq!(record.to_bind(), "example.org. IN CAA 0 issuewild \"digicert.com\"");
        assert_eq!(
            CaaRecord::new("example", Supplier::DigiCert, WildcardScope::Wildcard),
            Err(SslKitError::InvalidDomain("example".to_string()))
        );
    }

    #[test]
    fn tinydns_escapes_every_byte() {
        let record =
            CaaRecord::new("example.com", Supplier::SslCom, WildcardScope::NonWildcard).unwrap();
        assert_eq!(
            record.to_tinydns(),
            ":example.com:257:\\000\\005\\151\\163\\163\\165\\145\\163\\163\\154\\056\\143\\157\\155"
        );
    }

    #[test]
    fn titled_zone_records() {
        let titles: Vec<_> = sectigo("wildcard")
            .zone_records()
            .into_iter()
            .map(|r| r.title)
            .collect();
        assert_eq!(titles, ["Standard BIND Zone File", "Legacy Zone File", "tinydns"]);
    }
}
