use crate::config::AppConfig;
use crate::graphql::{EmpdeskSchema, build_schema};
use crate::storage::Store;
use anyhow::{Context, Result};

/// Common context passed to all command handlers
pub struct CommandContext {
    pub config: AppConfig,
}

impl CommandContext {
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    /// Connects to the configured store and builds the schema on top of it.
    pub async fn schema(&self) -> Result<EmpdeskSchema> {
        let store = Store::connect(&self.config.database)
            .await
            .context("Failed to open the employee store")?;
        Ok(build_schema(store))
    }
}
