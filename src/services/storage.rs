use anyhow::Result;
use async_trait::async_trait;
use std::path::PathBuf;
use uuid::Uuid;

/// The uploads directory behind an interface, so tests can swap in an
/// in-memory fake. `put` overwrites silently; names are taken verbatim.
#[async_trait]
pub trait Storage: Send + Sync {
    /// Persist bytes under `name`, returning the byte count written.
    async fn put(&self, name: &str, bytes: Vec<u8>) -> Result<u64>;
    /// Names of the directory's immediate entries, in enumeration order.
    /// Placeholder filtering is the listing layer's concern.
    async fn list(&self) -> Result<Vec<String>>;
    /// Byte size of a single entry, read at call time.
    async fn stat(&self, name: &str) -> Result<u64>;
}

/// Prefix for in-flight staging copies. Listings never show these.
const STAGING_PREFIX: &str = ".stage-";

/// Local-disk storage rooted at the configured uploads directory.
pub struct DiskStorage {
    root: PathBuf,
}

impl DiskStorage {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }
}

#[async_trait]
impl Storage for DiskStorage {
    async fn put(&self, name: &str, bytes: Vec<u8>) -> Result<u64> {
        let size = bytes.len() as u64;

        // Stage next to the target, then rename into place. The staging
        // copy is gone once the rename lands; on any failure it is
        // removed so it can never linger in the directory.
        let staging = self.root.join(format!("{}{}", STAGING_PREFIX, Uuid::new_v4()));
        if let Err(e) = tokio::fs::write(&staging, &bytes).await {
            let _ = tokio::fs::remove_file(&staging).await;
            return Err(e.into());
        }

        let target = self.root.join(name);
        if let Err(e) = tokio::fs::rename(&staging, &target).await {
            let _ = tokio::fs::remove_file(&staging).await;
            return Err(e.into());
        }

        Ok(size)
    }

    async fn list(&self) -> Result<Vec<String>> {
        let mut names = Vec::new();
        let mut dir = tokio::fs::read_dir(&self.root).await?;

        while let Some(entry) = dir.next_entry().await? {
            if !entry.metadata().await?.is_file() {
                continue;
            }
            let name = entry.file_name().to_string_lossy().into_owned();
            // Staging copies of concurrent uploads are not stored files
            if name.starts_with(STAGING_PREFIX) {
                continue;
            }
            names.push(name);
        }

        Ok(names)
    }

    async fn stat(&self, name: &str) -> Result<u64> {
        let meta = tokio::fs::metadata(self.root.join(name)).await?;
        Ok(meta.len())
    }
}

/// In-memory fake used by tests. Keeps insertion order so listings are
/// deterministic.
#[derive(Default)]
pub struct MemoryStorage {
    files: tokio::sync::RwLock<Vec<(String, Vec<u8>)>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn contents(&self, name: &str) -> Option<Vec<u8>> {
        self.files
            .read()
            .await
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, b)| b.clone())
    }
}

#[async_trait]
impl Storage for MemoryStorage {
    async fn put(&self, name: &str, bytes: Vec<u8>) -> Result<u64> {
        let size = bytes.len() as u64;
        let mut files = self.files.write().await;
        match files.iter_mut().find(|(n, _)| n == name) {
            Some((_, existing)) => *existing = bytes,
            None => files.push((name.to_string(), bytes)),
        }
        Ok(size)
    }

    async fn list(&self) -> Result<Vec<String>> {
        Ok(self
            .files
            .read()
            .await
            .iter()
            .map(|(name, _)| name.clone())
            .collect())
    }

    async fn stat(&self, name: &str) -> Result<u64> {
        self.files
            .read()
            .await
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, b)| b.len() as u64)
            .ok_or_else(|| anyhow::anyhow!("no such entry: {}", name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_disk_put_then_stat() {
        let dir = tempfile::tempdir().unwrap();
        let storage = DiskStorage::new(dir.path().to_path_buf());

        let written = storage
            .put("hello.txt", b"hello world".to_vec())
            .await
            .unwrap();
        assert_eq!(written, 11);
        assert_eq!(storage.stat("hello.txt").await.unwrap(), 11);

        let on_disk = std::fs::read(dir.path().join("hello.txt")).unwrap();
        assert_eq!(on_disk, b"hello world");
    }

    #[tokio::test]
    async fn test_disk_put_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let storage = DiskStorage::new(dir.path().to_path_buf());

        storage.put("a.png", b"first".to_vec()).await.unwrap();
        storage
            .put("a.png", b"second upload".to_vec())
            .await
            .unwrap();

        let names = storage.list().await.unwrap();
        assert_eq!(names, vec!["a.png"]);
        assert_eq!(storage.stat("a.png").await.unwrap(), 13);

        let on_disk = std::fs::read(dir.path().join("a.png")).unwrap();
        assert_eq!(on_disk, b"second upload");
    }

    #[tokio::test]
    async fn test_disk_put_leaves_no_staging_file() {
        let dir = tempfile::tempdir().unwrap();
        let storage = DiskStorage::new(dir.path().to_path_buf());

        storage.put("f.bin", vec![0u8; 64]).await.unwrap();

        let names: Vec<_> = std::fs::read_dir(dir.path())
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["f.bin"]);
    }

    #[tokio::test]
    async fn test_disk_list_skips_staging_files() {
        let dir = tempfile::tempdir().unwrap();
        let storage = DiskStorage::new(dir.path().to_path_buf());

        storage.put("real.txt", b"content".to_vec()).await.unwrap();
        // A staging copy left behind by an interrupted upload
        std::fs::write(
            dir.path().join(".stage-3b3c8d1e-0000-0000-0000-000000000000"),
            b"half-written",
        )
        .unwrap();

        assert_eq!(storage.list().await.unwrap(), vec!["real.txt"]);
    }

    #[tokio::test]
    async fn test_disk_stat_missing_entry_fails() {
        let dir = tempfile::tempdir().unwrap();
        let storage = DiskStorage::new(dir.path().to_path_buf());

        assert!(storage.stat("nope.txt").await.is_err());
    }

    #[tokio::test]
    async fn test_memory_storage_overwrite_keeps_order() {
        let storage = MemoryStorage::new();
        storage.put("one", b"1".to_vec()).await.unwrap();
        storage.put("two", b"22".to_vec()).await.unwrap();
        storage.put("one", b"111".to_vec()).await.unwrap();

        assert_eq!(storage.list().await.unwrap(), vec!["one", "two"]);
        assert_eq!(storage.stat("one").await.unwrap(), 3);
        assert_eq!(storage.contents("one").await.unwrap(), b"111");
    }
}
