//! Snapshot-file reader for `SOURCE=file` runs.

use std::path::Path;

use tracing::info;

use super::types::{flatten_inbounds, InboundDocument, UserRecord};
use crate::errors::SourceError;

/// Reads a local 3x-ui snapshot and flattens it into migration records. A
/// missing or malformed file is fatal; a well-formed document without an
/// `inbounds` key is an empty migration.
pub async fn fetch_from_file(path: &Path) -> Result<Vec<UserRecord>, SourceError> {
    let raw = tokio::fs::read_to_string(path)
        .await
        .map_err(|e| SourceError::ConfigRead {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;

    let document: InboundDocument =
        serde_json::from_str(&raw).map_err(|e| SourceError::ConfigRead {
            path: path.display().to_string(),
            message: format!("malformed snapshot: {e}"),
        })?;

    let users = flatten_inbounds(document.inbounds);
    info!("loaded {} users from {}", users.len(), path.display());
    Ok(users)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    fn snapshot(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[tokio::test]
    async fn reads_every_client_from_every_inbound() {
        let file = snapshot(
            r#"{ "inbounds": [
                { "protocol": "vless", "port": 443, "settings": { "clients": [
                    { "email": "a@x", "id": "u1" },
                    { "email": "b@x", "id": "u2" }
                ] } },
                { "protocol": "trojan", "port": 8443, "settings": { "clients": [
                    { "email": "c@x", "id": "u3" }
                ] } }
            ] }"#,
        );

        let users = fetch_from_file(file.path()).await.unwrap();
        assert_eq!(users.len(), 3);
        assert_eq!(users[0].uuid, "u1");
        assert_eq!(users[2].protocol, "trojan");
    }

    #[tokio::test]
    async fn missing_file_is_a_config_read_error() {
        let err = fetch_from_file(Path::new("/nonexistent/config.json"))
            .await
            .unwrap_err();
        assert!(matches!(err, SourceError::ConfigRead { .. }));
    }

    #[tokio::test]
    async fn malformed_json_is_a_config_read_error() {
        let file = snapshot("{ not json");
        let err = fetch_from_file(file.path()).await.unwrap_err();
        assert!(matches!(err, SourceError::ConfigRead { .. }));
    }

    #[tokio::test]
    async fn document_without_inbounds_is_an_empty_migration() {
        let file = snapshot(r#"{ "outbounds": [] }"#);
        let users = fetch_from_file(file.path()).await.unwrap();
        assert!(users.is_empty());
    }
}
