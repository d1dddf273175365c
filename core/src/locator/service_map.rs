use crate::config::{ApplicationConfig, CONFIG_SERVICE_KEY};
use crate::locator::types::{ServiceLocator, ServiceNotFound};
use crate::types::Service;
use std::any::Any;
use std::collections::HashMap;
use std::sync::Arc;

/// In-memory locator backed by a plain map of ready-made services.
#[derive(Debug, Clone, Default)]
pub struct ServiceMap {
    services: HashMap<String, Service>,
}

impl ServiceMap {
    pub fn new() -> Self {
        Self {
            services: HashMap::new(),
        }
    }

    /// Map pre-populated with `config` under the `"config"` key.
    pub fn with_config(config: ApplicationConfig) -> Self {
        let mut map = Self::new();
        map.set(CONFIG_SERVICE_KEY, config);
        map
    }

    pub fn set<T: Any + Send + Sync>(&mut self, key: impl Into<String>, value: T) -> &mut Self {
        self.set_service(key, Arc::new(value))
    }

    pub fn set_service(&mut self, key: impl Into<String>, service: Service) -> &mut Self {
        self.services.insert(key.into(), service);
        self
    }

    pub fn with<T: Any + Send + Sync>(mut self, key: impl Into<String>, value: T) -> Self {
        self.set(key, value);
        self
    }

    pub fn len(&self) -> usize {
        self.services.len()
    }

    pub fn is_empty(&self) -> bool {
        self.services.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.services.keys().map(String::as_str)
    }
}

impl ServiceLocator for ServiceMap {
    fn get(&self, key: &str) -> Result<Service, ServiceNotFound> {
        self.services
            .get(key)
            .cloned()
            .ok_or_else(|| ServiceNotFound::new(key))
    }

    fn has(&self, key: &str) -> bool {
        self.services.contains_key(key)
    }
}
