use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use async_trait::async_trait;
use tracing::{debug, instrument, warn};

use crate::fs::operations::{read_if_exists, rewrite_locked};

use super::{
    entities::{NamespaceDocument, StoredValue},
    key_value::KeyValueStore,
};

/// The main realization of [KeyValueStore]. Each namespace is a single json object saved as
/// `<dir>/<namespace>.json`.
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(dir: PathBuf, namespace: &str) -> Result<Self, std::io::Error> {
        std::fs::create_dir_all(&dir)?;

        Ok(Self {
            path: dir.join(format!("{namespace}.json")),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn read_document(&self) -> Result<NamespaceDocument> {
        match read_if_exists(&self.path).await? {
            Some(content) => match parse_document(&content) {
                Ok(document) => Ok(document),
                Err(e) => {
                    warn!("Namespace file {:?} contains illegal json, reading it as empty: {e}", self.path);
                    Ok(NamespaceDocument::new())
                }
            },
            None => {
                debug!("No namespace file at {:?} yet", self.path);
                Ok(NamespaceDocument::new())
            }
        }
    }
}

/// Empty content is an empty namespace. Content that isn't a json object is an error: reads treat
/// it as empty, writes refuse to replace it so that a broken hand edit can still be repaired.
fn parse_document(content: &str) -> Result<NamespaceDocument, serde_json::Error> {
    if content.trim().is_empty() {
        return Ok(NamespaceDocument::new());
    }
    serde_json::from_str::<NamespaceDocument>(content)
}

#[async_trait]
impl KeyValueStore for FileStore {
    #[instrument(skip(self))]
    async fn get(&self, key: &str) -> Result<Option<StoredValue>> {
        Ok(self.read_document().await?.remove(key))
    }

    #[instrument(skip(self))]
    async fn put(&self, key: &str, value: StoredValue) -> Result<()> {
        let path = self.path.as_path();
        rewrite_locked(path, |previous| {
            let mut document = parse_document(previous).with_context(|| {
                format!("Refusing to overwrite {path:?}, it doesn't contain a json object")
            })?;
            document.insert(key.to_owned(), value);

            let mut buffer = serde_json::to_vec_pretty(&document)?;
            buffer.push(b'\n');
            Ok(buffer)
        })
        .await
    }
}
