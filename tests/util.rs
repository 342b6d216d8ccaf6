#![allow(dead_code)]

use sslkit::cert::params::SubjectFields;

pub const WIDGITS_CSR: &str = include_str!("data/widgits.csr.pem");
pub const WIDGITS_CRT: &str = include_str!("data/widgits.crt.pem");
pub const WIDGITS_KEY: &str = include_str!("data/widgits.key.pem");

pub const LEAF_CSR: &str = include_str!("data/leaf.csr.pem");
pub const LEAF_KEY: &str = include_str!("data/leaf.key.pem");
pub const CHAIN_LEAF_CRT: &str = include_str!("data/chain-leaf.crt.pem");
pub const CHAIN_ROOT_CRT: &str = include_str!("data/chain-root.crt.pem");

pub const EC_CRT: &str = include_str!("data/ec.crt.pem");

/// Subject fields for a typical storefront request.
pub fn shop_subject() -> SubjectFields {
    SubjectFields::builder()
        .common_name("shop.example.com".to_string())
        .country("VN".to_string())
        .email("admin@example.com".to_string())
        .organization("Example Shop".to_string())
        .locality("Hanoi".to_string())
        .build()
}
