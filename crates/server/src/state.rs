use std::sync::Arc;
use lunchbot_core::{Config, Dispatcher, RestaurantCache, SanitizedConfig};

/// Shared application state
pub struct AppState {
    config: Config,
    dispatcher: Arc<Dispatcher>,
    cache: Arc<dyn RestaurantCache>,
}

impl AppState {
    pub fn new(
        config: Config,
        dispatcher: Arc<Dispatcher>,
        cache: Arc<dyn RestaurantCache>,
    ) -> Self {
        Self {
            config,
            dispatcher,
            cache,
        }
    }

    pub fn sanitized_config(&self) -> SanitizedConfig {
        SanitizedConfig::from(&self.config)
    }

    pub fn dispatcher(&self) -> &Dispatcher {
        self.dispatcher.as_ref()
    }

    pub fn cache(&self) -> &dyn RestaurantCache {
        self.cache.as_ref()
    }
}
