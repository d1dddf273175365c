use crate::types::Service;
use thiserror::Error;

/// Key → value resolution capability consulted during dependency resolution.
///
/// Implementations are read-only from the dispatcher's point of view; nothing
/// in this crate registers or removes services through this trait.
pub trait ServiceLocator {
    /// Looks up the service registered under `key`.
    fn get(&self, key: &str) -> Result<Service, ServiceNotFound>;

    fn has(&self, key: &str) -> bool {
        self.get(key).is_ok()
    }
}

/// Raised by a [`ServiceLocator`] when a key is not registered.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ServiceNotFound {
    key: String,
    message: String,
}

impl ServiceNotFound {
    pub fn new(key: impl Into<String>) -> Self {
        let key = key.into();
        let message = format!(
            "Unable to resolve service \"{}\" to a factory; are you certain you provided it during configuration?",
            key
        );
        Self { key, message }
    }

    /// Not-found signal carrying a locator-specific message.
    pub fn with_message(key: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            message: message.into(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}
