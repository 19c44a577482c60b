use std::{
    ffi::OsString,
    io::ErrorKind,
    path::{Path, PathBuf},
};

use anyhow::Result;
use fs4::tokio::AsyncFileExt;
use tokio::{
    fs::File,
    io::{self, AsyncWriteExt},
};

/// Reads a whole file. A file that doesn't exist yet reads as `None`.
///
/// Files written by [rewrite_locked] are only ever replaced by a rename, so this sees either the
/// old content or the new one, never a mix.
pub async fn read_if_exists(path: &Path) -> Result<Option<String>, io::Error> {
    match tokio::fs::read_to_string(path).await {
        Ok(content) => Ok(Some(content)),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
        Err(e) => Err(e),
    }
}

/// Replaces the content of a file while holding an exclusive lock, creating it when needed.
/// `update` receives the previous content (empty for a new file) and returns the new one, so
/// read-modify-write of a file never interleaves with another process.
///
/// The new content goes into a sibling `.tmp` file that is synced and renamed over `path`. If
/// anything fails before the rename, `path` keeps its previous content. The lock is taken on a
/// sibling `.lock` file, since the rename swaps out the file itself.
pub async fn rewrite_locked(
    path: &Path,
    update: impl FnOnce(&str) -> Result<Vec<u8>>,
) -> Result<()> {
    let lock = File::options()
        .write(true)
        .create(true)
        .truncate(false)
        .open(sibling(path, "lock"))
        .await?;

    // Semi-safe acquire-release for a file
    lock.lock_exclusive()?;
    let result = rewrite_with_rename(path, update).await;
    lock.unlock_async().await?;
    result
}

async fn rewrite_with_rename(
    path: &Path,
    update: impl FnOnce(&str) -> Result<Vec<u8>>,
) -> Result<()> {
    let previous = read_if_exists(path).await?.unwrap_or_default();
    let next = update(&previous)?;

    let temporary = sibling(path, "tmp");
    let mut file = File::create(&temporary).await?;
    file.write_all(&next).await?;
    file.flush().await?;
    file.sync_data().await?;
    drop(file);

    tokio::fs::rename(&temporary, path).await?;
    Ok(())
}

/// `<path>.<extension>`, e.g. `PracticeData.json.lock`.
fn sibling(path: &Path, extension: &str) -> PathBuf {
    let mut name = OsString::from(path.as_os_str());
    name.push(".");
    name.push(extension);
    PathBuf::from(name)
}

#[cfg(test)]
mod tests {
    use anyhow::Result;
    use tempfile::tempdir;

    use crate::fs::operations::{read_if_exists, rewrite_locked, sibling};

    #[tokio::test]
    async fn test_read_if_exists_missing() -> Result<()> {
        let dir = tempdir()?;
        assert_eq!(read_if_exists(&dir.path().join("nothing.json")).await?, None);
        Ok(())
    }

    #[tokio::test]
    async fn test_rewrite_locked_sees_previous_content() -> Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join("value.txt");

        rewrite_locked(&path, |previous| {
            assert_eq!(previous, "");
            Ok(b"first line that is rather long".to_vec())
        })
        .await?;

        rewrite_locked(&path, |previous| {
            assert_eq!(previous, "first line that is rather long");
            Ok(b"short".to_vec())
        })
        .await?;

        // Shorter content must not leave a tail of the previous one.
        assert_eq!(read_if_exists(&path).await?.as_deref(), Some("short"));
        assert!(!sibling(&path, "tmp").exists());
        Ok(())
    }

    #[tokio::test]
    async fn test_rewrite_locked_failed_update_keeps_file() -> Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join("value.txt");
        rewrite_locked(&path, |_| Ok(b"kept".to_vec())).await?;

        let result = rewrite_locked(&path, |_| Err(anyhow::anyhow!("update refused"))).await;

        assert!(result.is_err());
        assert_eq!(read_if_exists(&path).await?.as_deref(), Some("kept"));
        Ok(())
    }

    #[tokio::test]
    async fn test_rewrite_locked_failed_write_keeps_file() -> Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join("value.txt");
        rewrite_locked(&path, |_| Ok(b"kept".to_vec())).await?;

        // A directory in place of the temporary file makes the write itself fail.
        std::fs::create_dir(sibling(&path, "tmp"))?;
        let result = rewrite_locked(&path, |_| Ok(b"replacement".to_vec())).await;

        assert!(result.is_err());
        assert_eq!(read_if_exists(&path).await?.as_deref(), Some("kept"));
        Ok(())
    }

    #[tokio::test]
    async fn test_rewrite_locked_ignores_leftover_temporary() -> Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join("value.txt");
        rewrite_locked(&path, |_| Ok(b"{\"a\": 1}".to_vec())).await?;

        // What an interrupted write leaves behind.
        std::fs::write(sibling(&path, "tmp"), "{\"a\": ")?;
        assert_eq!(read_if_exists(&path).await?.as_deref(), Some("{\"a\": 1}"));

        rewrite_locked(&path, |previous| {
            assert_eq!(previous, "{\"a\": 1}");
            Ok(b"{\"a\": 2}".to_vec())
        })
        .await?;
        assert_eq!(read_if_exists(&path).await?.as_deref(), Some("{\"a\": 2}"));
        Ok(())
    }
}
