use std::path::Path;
use tierlist_core::TierlistResult;
use tokio::fs;

/// Writes whole files through a temp file in the target directory followed
/// by a rename, so readers never observe a half-written record.
pub struct AtomicWriter;

impl AtomicWriter {
    /// Replace the contents of `path` with `data`
    pub async fn write_atomic(path: &Path, data: &[u8]) -> TierlistResult<()> {
        let parent = path.parent().unwrap_or_else(|| Path::new("."));
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).await?;
        }
        let temp_file = tempfile::NamedTempFile::new_in(parent)?;
        let temp_path = temp_file.path().to_path_buf();

        fs::write(&temp_path, data).await?;
        fs::rename(&temp_path, path).await?;

        tracing::debug!(
            "Atomically wrote {} bytes to {}",
            data.len(),
            path.display()
        );
        Ok(())
    }

    /// Read a whole file as UTF-8 text
    pub async fn read_text(path: &Path) -> TierlistResult<String> {
        let text = fs::read_to_string(path).await?;
        tracing::debug!("Read {} bytes from {}", text.len(), path.display());
        Ok(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[tokio::test]
    async fn test_atomic_write_creates_parent() {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("nested").join("board.json");

        AtomicWriter::write_atomic(&file_path, b"{\"rows\":[]}")
            .await
            .unwrap();

        let text = AtomicWriter::read_text(&file_path).await.unwrap();
        assert_eq!(text, "{\"rows\":[]}");
    }

    #[tokio::test]
    async fn test_atomic_write_overwrites() {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("board.json");

        AtomicWriter::write_atomic(&file_path, b"First").await.unwrap();
        AtomicWriter::write_atomic(&file_path, b"Second").await.unwrap();

        assert_eq!(AtomicWriter::read_text(&file_path).await.unwrap(), "Second");
    }

    #[tokio::test]
    async fn test_read_missing_file_is_io_error() {
        let dir = tempdir().unwrap();
        let err = AtomicWriter::read_text(&dir.path().join("missing"))
            .await
            .unwrap_err();
        assert!(matches!(err, tierlist_core::TierlistError::Io(_)));
    }
}
