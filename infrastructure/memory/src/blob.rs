use async_trait::async_trait;
use domain_order::repository::BlobStore;
use opendal::{
    services::{Fs, Memory},
    Operator,
};

/// Blob storage over an opendal operator. Locators are the object paths.
pub struct OpendalBlobStore {
    operator: Operator,
}

impl OpendalBlobStore {
    pub fn new(operator: Operator) -> Self {
        Self { operator }
    }

    /// Volatile store, gone with the process.
    pub fn memory() -> anyhow::Result<Self> {
        let builder = Memory::default();
        Ok(Self::new(Operator::new(builder)?.finish()))
    }

    /// Store rooted at a local directory.
    pub fn fs(root: &str) -> anyhow::Result<Self> {
        let mut builder = Fs::default();
        builder.root(root);
        Ok(Self::new(Operator::new(builder)?.finish()))
    }

    pub async fn read(&self, locator: &str) -> anyhow::Result<Vec<u8>> {
        Ok(self.operator.read(locator).await?)
    }

    pub async fn exists(&self, locator: &str) -> anyhow::Result<bool> {
        Ok(self.operator.is_exist(locator).await?)
    }
}

#[async_trait]
impl BlobStore for OpendalBlobStore {
    async fn put(&self, bytes: &[u8], path: &str) -> anyhow::Result<String> {
        self.operator.write(path, bytes.to_owned()).await?;
        tracing::debug!(path, size = bytes.len(), "blob written");
        Ok(path.to_owned())
    }

    async fn delete(&self, locator: &str) -> anyhow::Result<()> {
        self.operator.delete(locator).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn written_blob_can_be_read_back_and_deleted() {
        let store = OpendalBlobStore::memory().unwrap();
        let locator = store.put(b"png bytes", "orders/a/b/foto.png").await.unwrap();
        assert_eq!(locator, "orders/a/b/foto.png");
        assert_eq!(store.read(&locator).await.unwrap(), b"png bytes".to_vec());

        store.delete(&locator).await.unwrap();
        assert!(!store.exists(&locator).await.unwrap());
    }
}
