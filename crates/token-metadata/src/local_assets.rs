use std::path::Path;

use crate::error::Error;
use crate::token::LocalAssetEntry;

/// List `{address}.png` images directly inside `dir`.
///
/// Subdirectories, files without a `.png` suffix and names that are not
/// valid UTF-8 are skipped. Entries are sorted by file name.
pub async fn list_local_assets(dir: &Path) -> Result<Vec<LocalAssetEntry>, Error> {
    let unavailable = |e: std::io::Error| Error::LocalAssetDirUnavailable {
        path: dir.display().to_string(),
        reason: e.to_string(),
    };

    let mut read_dir = tokio::fs::read_dir(dir).await.map_err(unavailable)?;
    let mut entries = Vec::new();

    while let Some(dir_entry) = read_dir.next_entry().await.map_err(unavailable)? {
        let file_type = dir_entry.file_type().await.map_err(unavailable)?;
        if file_type.is_dir() {
            continue;
        }

        let file_name = dir_entry.file_name();
        let Some(name) = file_name.to_str() else {
            tracing::debug!(file = ?file_name, "skipping non UTF-8 asset file name");
            continue;
        };

        match LocalAssetEntry::from_file_name(name) {
            Some(entry) => entries.push(entry),
            None => tracing::debug!(file = name, "skipping non-asset file"),
        }
    }

    entries.sort_by(|a, b| a.file_name.cmp(&b.file_name));
    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_lists_png_files_only() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("0xABC123.png"), b"").unwrap();
        std::fs::write(dir.path().join("0x0001.png"), b"").unwrap();
        std::fs::write(dir.path().join("readme.md"), b"").unwrap();
        std::fs::write(dir.path().join(".png"), b"").unwrap();
        std::fs::create_dir(dir.path().join("nested.png")).unwrap();
        std::fs::write(dir.path().join("nested.png").join("0xDEF.png"), b"").unwrap();

        let entries = list_local_assets(dir.path()).await.unwrap();
        let addresses: Vec<&str> = entries.iter().map(|e| e.address.as_str()).collect();
        assert_eq!(addresses, vec!["0x0001", "0xABC123"]);
    }

    #[tokio::test]
    async fn test_empty_dir() {
        let dir = tempfile::tempdir().unwrap();
        assert!(list_local_assets(dir.path()).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_missing_dir() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("assets");
        let err = list_local_assets(&missing).await.unwrap_err();
        assert!(matches!(err, Error::LocalAssetDirUnavailable { .. }));
    }
}
