use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::config::ObjectStoreConfig;
use crate::errors::{CampusError, Result};
use crate::object_store::ObjectStore;

/// 本地目录对象存储
///
/// 文件复制到 `dir` 下，公开地址为 `{public_base}/{filename}`。
pub struct LocalObjectStore {
    dir: PathBuf,
    public_base: String,
}

impl LocalObjectStore {
    pub fn new(dir: impl Into<PathBuf>, public_base: impl Into<String>) -> Self {
        Self {
            dir: dir.into(),
            public_base: public_base.into().trim_end_matches('/').to_string(),
        }
    }
}

pub(super) fn construct(config: &ObjectStoreConfig) -> Result<Box<dyn ObjectStore>> {
    Ok(Box::new(LocalObjectStore::new(
        &config.dir,
        config.public_base(),
    )))
}

#[async_trait]
impl ObjectStore for LocalObjectStore {
    async fn upload(&self, local_path: &Path, filename: &str) -> Result<String> {
        tokio::fs::create_dir_all(&self.dir)
            .await
            .map_err(|e| CampusError::object_store(format!("创建对象目录失败: {e}")))?;

        let target = self.dir.join(filename);
        tokio::fs::copy(local_path, &target)
            .await
            .map_err(|e| CampusError::object_store(format!("写入对象失败: {e}")))?;

        debug!("对象已写入 {}", target.display());
        Ok(format!("{}/{}", self.public_base, filename))
    }

    async fn delete(&self, filename: &str) -> Result<()> {
        match tokio::fs::remove_file(self.dir.join(filename)).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(CampusError::object_store(format!("删除对象失败: {e}"))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_upload_copies_and_returns_url() {
        let root = std::env::temp_dir().join(format!(
            "campus-local-store-{}",
            crate::utils::generate_random_code(8)
        ));
        let source = root.join("source.png");
        tokio::fs::create_dir_all(&root).await.unwrap();
        tokio::fs::write(&source, b"\x89PNG\r\n\x1a\n").await.unwrap();

        let store = LocalObjectStore::new(root.join("objects"), "http://cdn.test/");
        let url = store.upload(&source, "ABC.png").await.unwrap();

        assert_eq!(url, "http://cdn.test/ABC.png");
        assert!(root.join("objects").join("ABC.png").exists());

        store.delete("ABC.png").await.unwrap();
        assert!(!root.join("objects").join("ABC.png").exists());
        // 重复删除不报错
        store.delete("ABC.png").await.unwrap();

        let _ = tokio::fs::remove_dir_all(&root).await;
    }
}
