//! Feature lifecycle: enable starts the engine and registers the provider,
//! disable unregisters it and stops the engine.

use crate::shell::SearchSystem;
use migemo_core::config::EngineConfig;
use migemo_core::provider::MIGEMO_PROVIDER_ID;
use migemo_core::{
    Catalog, EngineError, LiteralProvider, MigemoProvider, SearchController, Transliterator,
};
use migemo_engine::ProcessTransliterator;
use std::sync::Arc;

pub struct MigemoExtension {
    config: EngineConfig,
    enabled: bool,
}

impl MigemoExtension {
    pub fn new(config: EngineConfig) -> Self {
        Self {
            config,
            enabled: false,
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Start the engine and register the provider. If the engine cannot be
    /// spawned nothing is registered and the error is returned.
    pub fn enable(
        &mut self,
        system: &mut SearchSystem,
        catalog: Arc<dyn Catalog>,
    ) -> Result<(), EngineError> {
        if self.enabled {
            tracing::warn!("migemo search already enabled");
            return Ok(());
        }
        let engine = ProcessTransliterator::start(&self.config).inspect_err(|e| {
            tracing::error!(error = %e, "migemo search disabled: engine unavailable");
        })?;
        tracing::debug!(pid = engine.pid(), timeout = ?engine.timeout(), "engine ready");
        self.enable_with_engine(system, catalog, Box::new(engine));
        Ok(())
    }

    /// Register the provider around an already running engine.
    pub fn enable_with_engine(
        &mut self,
        system: &mut SearchSystem,
        catalog: Arc<dyn Catalog>,
        engine: Box<dyn Transliterator>,
    ) {
        let controller = SearchController::new(engine, catalog.clone());
        let companion = Box::new(LiteralProvider::new(catalog));
        let replaced = system.add_provider(Box::new(MigemoProvider::new(controller, companion)));
        if replaced.is_some() {
            // dropping the old provider kills its engine
            tracing::warn!("replaced an already registered migemo provider");
        }
        self.enabled = true;
    }

    /// Unregister the provider and stop its engine. Safe to call when not
    /// enabled.
    pub async fn disable(&mut self, system: &mut SearchSystem) {
        if let Some(mut provider) = system.remove_provider(MIGEMO_PROVIDER_ID) {
            provider.dispose().await;
        }
        self.enabled = false;
    }
}
