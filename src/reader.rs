use anyhow::{Context, Result};
use std::path::Path;
use tracing::debug;

/// A document read from disk, decoded tolerantly.
#[derive(Debug)]
pub struct ReadDocument {
    pub text: String,
    pub bytes_read: u64,
    /// Whether invalid UTF-8 sequences were replaced during decoding.
    pub had_invalid_utf8: bool,
}

/// Read a whole document, replacing any invalid UTF-8 sequences rather than
/// failing. OCR deliveries mix encodings freely; a decode problem is a
/// document property, not an error.
pub async fn read_document_lossy(path: &Path) -> Result<ReadDocument> {
    let bytes = tokio::fs::read(path)
        .await
        .with_context(|| format!("failed to read {}", path.display()))?;
    let bytes_read = bytes.len() as u64;

    match String::from_utf8(bytes) {
        Ok(text) => Ok(ReadDocument {
            text,
            bytes_read,
            had_invalid_utf8: false,
        }),
        Err(err) => {
            debug!("lossy decode of {}", path.display());
            let text = String::from_utf8_lossy(err.as_bytes()).into_owned();
            Ok(ReadDocument {
                text,
                bytes_read,
                had_invalid_utf8: true,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn valid_utf8_reads_clean() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("doc.txt");
        tokio::fs::write(&path, "plain text, nothing odd").await.unwrap();

        let doc = read_document_lossy(&path).await.unwrap();
        assert_eq!(doc.text, "plain text, nothing odd");
        assert_eq!(doc.bytes_read, 23);
        assert!(!doc.had_invalid_utf8);
    }

    #[tokio::test]
    async fn invalid_utf8_is_replaced_not_fatal() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("doc.txt");
        std::fs::write(&path, b"caf\xE9 latin-1").unwrap();

        let doc = read_document_lossy(&path).await.unwrap();
        assert!(doc.had_invalid_utf8);
        assert!(doc.text.contains('\u{FFFD}'));
        assert!(doc.text.starts_with("caf"));
    }

    #[tokio::test]
    async fn missing_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        let result = read_document_lossy(&dir.path().join("absent.txt")).await;
        assert!(result.is_err());
    }
}
