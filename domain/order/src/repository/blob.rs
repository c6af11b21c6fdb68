use async_trait::async_trait;

/// Opaque binary storage for uploaded documentation.
#[async_trait]
pub trait BlobStore: Send + Sync {
    /// Writes `bytes` under `path` and returns the locator to persist.
    async fn put(&self, bytes: &[u8], path: &str) -> anyhow::Result<String>;

    async fn delete(&self, locator: &str) -> anyhow::Result<()>;
}
