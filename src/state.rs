use std::path::Path;
use std::sync::Arc;

use tokio::sync::Mutex;

use crate::config::Config;
use crate::error::Result;
use crate::ollama::OllamaClient;
use crate::store::EntryStore;

pub struct AppState {
    pub store: Mutex<EntryStore>,
    pub ollama: OllamaClient,
}

impl AppState {
    pub fn new(config: &Config, data_dir: &Path) -> Result<Arc<Self>> {
        let store = EntryStore::open(data_dir)?;

        Ok(Arc::new(Self {
            store: Mutex::new(store),
            ollama: OllamaClient::new(config),
        }))
    }
}
