use sslkit::cert::params::SubjectFields;
use sslkit::error::SslKitError;
use sslkit::toolkit::{CsrParams, SslToolkit};

fn main() -> Result<(), SslKitError> {
    let toolkit = SslToolkit::new();

    let subject = SubjectFields::builder()
        .common_name("example.com".to_string())
        .country("US".to_string())
        .email("hostmaster@example.com".to_string())
        .organization("Example Corp".to_string())
        .build();
    let params = CsrParams::builder()
        .subject(subject)
        .domain_type("*".to_string())
        .build();

    let generated = toolkit.generate_csr(&params)?;
    println!("{}", generated.csr_pem);

    // Read back what we just signed
    let info = toolkit.decode_csr(&generated.csr_pem)?;
    println!(
        "CN={} keySize={} signatureAlgorithm={}",
        info.subject.common_name, info.key_size, info.signature_algorithm
    );

    for record in toolkit
        .encode_caa("example.com", "letsencrypt.org", "wildcard")?
        .zone_records()
    {
        println!("; {}\n{}", record.title, record.content.join("\n"));
    }

    Ok(())
}
