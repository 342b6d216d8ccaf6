//! # SslKit - A Pure Rust SSL Toolbox
//!
//! SslKit bundles the everyday chores around TLS certificates, built entirely with rustcrypto
//! libraries: generating a certificate signing request, reading back what a CSR or
//! certificate says, checking that a CSR, certificate and private key belong together,
//! rendering DNS CAA records and summarizing the chain a server presents.
//!
//! ## Supported Key Types
//!
//! - **RSA**: 2048, 3072, and 4096-bit keys, signed with SHA-256, SHA-384 or SHA-512
//!
//! Certificates and requests carrying any other key type are rejected as unparseable.
//!
//! ## Supported Formats
//!
//! - **CSR**: PEM `CERTIFICATE REQUEST`
//! - **Certificates**: PEM `CERTIFICATE`, alone, as a full chain or as `openssl s_client -showcerts` output
//! - **Private keys**: PEM PKCS#1 `RSA PRIVATE KEY` and PKCS#8 `PRIVATE KEY`
//! - **CAA**: BIND zone syntax, RFC 3597 generic records and tinydns generic records
//!
//! ## Quick Start
//!
//! ### Generating a CSR
//!
//! ```rust,no_run
//! use sslkit::cert::params::SubjectFields;
//! use sslkit::toolkit::{CsrParams, SslToolkit};
//!
//! # fn main() -> Result<(), sslkit::error::SslKitError> {
//! let subject = SubjectFields::builder()
//!     .common_name("example.com".to_string())
//!     .country("US".to_string())
//!     .email("admin@example.com".to_string())
//!     .organization("Example Corp".to_string())
//!     .build();
//!
//! let params = CsrParams::builder()
//!     .subject(subject)
//!     .domain_type("www".to_string())
//!     .key_size(3072)
//!     .build();
//!
//! let generated = SslToolkit::new().generate_csr(&params)?;
//! println!("{}", generated.csr_pem);
//! # Ok(())
//! # }
//! ```
//!
//! ### Checking That Artifacts Belong Together
//!
//! ```rust,no_run
//! use sslkit::toolkit::SslToolkit;
//!
//! # fn main() -> Result<(), sslkit::error::SslKitError> {
//! # let (csr_pem, crt_pem, key_pem) = (String::new(), String::new(), String::new());
//! let toolkit = SslToolkit::new();
//! let info = toolkit.decode_certificate(&crt_pem)?;
//! println!("{} expires {}", info.subject.common_name, info.end_date);
//!
//! assert!(toolkit.match_csr_certificate(&csr_pem, &crt_pem)?);
//! assert!(toolkit.match_certificate_key(&crt_pem, &key_pem)?);
//! # Ok(())
//! # }
//! ```
//!
//! ### Rendering a CAA Record
//!
//! ```rust
//! use sslkit::caa;
//!
//! let records = caa::encode("https://example.com", "letsencrypt.org", "non-wildcard").unwrap();
//! assert_eq!(records.bind_zone, "example.com. IN CAA 0 issue \"letsencrypt.org\"");
//! ```
//!
//! ## Error Handling
//!
//! Every operation returns a single [`error::SslKitError`], which also knows whether the
//! caller or the server is at fault:
//!
//! ```rust
//! use sslkit::error::{Fault, SslKitError};
//! use sslkit::toolkit::SslToolkit;
//!
//! match SslToolkit::new().decode_csr("invalid pem data") {
//!     Ok(info) => println!("Subject: {}", info.subject.common_name),
//!     Err(e @ SslKitError::ParseFailure { .. }) => assert_eq!(e.fault(), Fault::Client),
//!     Err(e) => println!("Other error: {}", e),
//! }
//! ```
//!
//! ## Module Organization
//!
//! - [`toolkit`]: Entry points that validate raw inputs and dispatch
//! - [`csr`]: Key pair and CSR generation
//! - [`decode`]: Field extraction from CSRs and certificates
//! - [`matcher`]: Key-identity comparison between artifacts
//! - [`caa`]: CAA record rendering
//! - [`chain`]: Per-certificate chain summaries and the installed chain
//! - [`parse`]: The PEM parsing boundary
//! - [`cert`]: Parsed artifacts, subject names and extensions
//! - [`key`]: Key sizes, digests, key pairs and key identities
//! - [`error`]: Error types and fault classification

pub mod caa;
pub mod cert;
pub mod chain;
pub mod csr;
pub mod decode;
pub mod error;
pub mod key;
pub mod matcher;
pub mod parse;
pub mod pem_utils;
pub mod toolkit;
pub mod validate;
