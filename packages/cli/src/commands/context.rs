use crate::config::Config;
use anyhow::{Context as _, Result};
use essay_registry::Registry;
use essay_sync::{load_document, JsonFileGateway, OpenDocument, WriteThrough};
use std::path::Path;
use std::sync::Arc;

/// Everything a command needs: config, catalog and the record store
pub struct Context {
    pub config: Config,
    pub registry: Registry,
    pub gateway: Arc<JsonFileGateway>,
}

impl Context {
    pub fn load(cwd: &Path) -> Result<Self> {
        let config = Config::load(cwd).context("Failed to read essay.config.json")?;
        let gateway = Arc::new(JsonFileGateway::new(config.get_store_dir(cwd)));

        Ok(Self {
            config,
            registry: Registry::builtin(),
            gateway,
        })
    }

    /// Open a stored essay; failing to read it aborts the command
    pub async fn open(&self, id: &str) -> Result<OpenDocument> {
        load_document(self.gateway.as_ref(), &self.registry, id)
            .await
            .with_context(|| format!("Cannot open essay {}", id))
    }

    pub fn writer(&self, record_id: &str) -> WriteThrough {
        WriteThrough::new(self.gateway.clone(), record_id)
    }
}
