use crate::error::{ArtifactKind, Result, SslKitError};

const CERTIFICATE_LABEL: &str = "CERTIFICATE";

/// Convert DER‑encoded data into a PEM‑encoded string with the provided label.
pub fn der_to_pem(der: &[u8], label: &str) -> String {
    let pem = pem::Pem::new(label, der);
    pem::encode_config(
        &pem,
        pem::EncodeConfig::new().set_line_ending(pem::LineEnding::LF),
    )
}

/// Returns the PEM blocks of `text` whose label is one of `labels`, in order.
///
/// Text outside the blocks is ignored.
pub fn labeled_blocks(text: &str, labels: &[&str], kind: ArtifactKind) -> Result<Vec<pem::Pem>> {
    let blocks = pem::parse_many(text).map_err(|e| SslKitError::parse(kind, e))?;
    Ok(blocks
        .into_iter()
        .filter(|block| labels.contains(&block.tag()))
        .collect())
}

/// The first block of `text` labeled with one of `labels`.
pub fn first_block(text: &str, labels: &[&str], kind: ArtifactKind) -> Result<pem::Pem> {
    labeled_blocks(text, labels, kind)?
        .into_iter()
        .next()
        .ok_or_else(|| SslKitError::parse(kind, format!("no {} PEM block found", labels.join(" or "))))
}

/// Pulls every `CERTIFICATE` block out of `text`, in order, re-encoded as PEM.
///
/// Anything between blocks is ignored, so raw `openssl s_client -showcerts`
/// output can be passed straight in.
pub fn certificate_blocks(text: &str) -> Result<Vec<String>> {
    Ok(
        labeled_blocks(text, &[CERTIFICATE_LABEL], ArtifactKind::Certificate)?
            .iter()
            .map(|block| der_to_pem(block.contents(), CERTIFICATE_LABEL))
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_blocks_between_noise() {
        let first = der_to_pem(&[1, 2, 3], CERTIFICATE_LABEL);
        let second = der_to_pem(&[4, 5, 6], CERTIFICATE_LABEL);
        let key = der_to_pem(&[7, 8, 9], "PRIVATE KEY");
        let transcript = format!(
            "CONNECTED(00000003)\n---\nCertificate chain\n 0 s:CN = leaf\n{first}\n 1 s:CN = root\n{second}{key}---\nServer certificate\n"
        );

        let blocks = certificate_blocks(&transcript).unwrap();
        assert_eq!(blocks, vec![first, second]);
    }

    #[test]
    fn no_blocks_is_empty() {
        assert!(certificate_blocks("no certificates here").unwrap().is_empty());
    }

    #[test]
    fn first_block_skips_other_labels() {
        let key = der_to_pem(&[7, 8, 9], "PRIVATE KEY");
        let cert = der_to_pem(&[1, 2, 3], CERTIFICATE_LABEL);
        let block = first_block(
            &format!("{key}{cert}"),
            &[CERTIFICATE_LABEL],
            ArtifactKind::Certificate,
        )
        .unwrap();
        assert_eq!(block.contents(), &[1, 2, 3]);
    }

    #[test]
    fn missing_block_names_the_label() {
        let err = first_block("nothing", &["CERTIFICATE REQUEST"], ArtifactKind::Csr).unwrap_err();
        assert_eq!(
            err,
            SslKitError::parse(ArtifactKind::Csr, "no CERTIFICATE REQUEST PEM block found")
        );
    }
}
