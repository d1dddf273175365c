//! # INJECTION CONFIG DEFINITIONS
//!
//! **SHAPE**:
//!
//! ```text
//! controller_action_injections:
//!   <controller identifier>:
//!     <method name>: [ <descriptor>, ... ]
//! ```

use crate::errors::{BoxError, DispatchError};
use crate::locator::ServiceLocator;
use crate::types::Service;
use serde::{Deserialize, Deserializer};
use std::any::Any;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// **CONFIG SERVICE KEY** - Locator entry holding the [`ApplicationConfig`]
pub const CONFIG_SERVICE_KEY: &str = "config";

/// **INLINE FACTORY**
///
/// **PARAMETERS**: the service locator and the controller instance
pub type InlineFactory =
    Arc<dyn Fn(&dyn ServiceLocator, &dyn Any) -> Result<Service, BoxError> + Send + Sync>;

/// **DEPENDENCY DESCRIPTOR**
///
/// **PURPOSE**: Describes how one injected value is obtained
#[derive(Clone)]
pub enum DependencyDescriptor {
    /// **NAMED SERVICE** - Looked up through the service locator
    Named(String),

    /// **INLINE FACTORY** - Invoked directly, bypassing named lookup
    Factory(InlineFactory),
}

impl DependencyDescriptor {
    pub fn named(key: impl Into<String>) -> Self {
        DependencyDescriptor::Named(key.into())
    }

    pub fn factory<F>(factory: F) -> Self
    where
        F: Fn(&dyn ServiceLocator, &dyn Any) -> Result<Service, BoxError> + Send + Sync + 'static,
    {
        DependencyDescriptor::Factory(Arc::new(factory))
    }

    pub fn as_named(&self) -> Option<&str> {
        match self {
            DependencyDescriptor::Named(key) => Some(key),
            DependencyDescriptor::Factory(_) => None,
        }
    }

    pub fn is_factory(&self) -> bool {
        matches!(self, DependencyDescriptor::Factory(_))
    }
}

impl fmt::Debug for DependencyDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DependencyDescriptor::Named(key) => f.debug_tuple("Named").field(key).finish(),
            DependencyDescriptor::Factory(_) => f.write_str("Factory(..)"),
        }
    }
}

impl From<&str> for DependencyDescriptor {
    fn from(key: &str) -> Self {
        DependencyDescriptor::named(key)
    }
}

impl From<String> for DependencyDescriptor {
    fn from(key: String) -> Self {
        DependencyDescriptor::Named(key)
    }
}

// Factories cannot be expressed in a config document, so only keys deserialize.
impl<'de> Deserialize<'de> for DependencyDescriptor {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        String::deserialize(deserializer).map(DependencyDescriptor::Named)
    }
}

/// **DECLARATION TABLE**
///
/// **PURPOSE**: controller identifier → method name → ordered descriptors
/// **GUARANTEE**: Lookups never reorder, filter, or deduplicate descriptors
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(transparent)]
pub struct DeclarationTable {
    controllers: HashMap<String, HashMap<String, Vec<DependencyDescriptor>>>,
}

impl DeclarationTable {
    /// **CONSTRUCTOR**
    pub fn new() -> Self {
        Self {
            controllers: HashMap::new(),
        }
    }

    /// **DECLARE DEPENDENCIES**
    ///
    /// Replaces any list already declared for the same pair.
    pub fn declare<I, D>(
        &mut self,
        controller: impl Into<String>,
        method: impl Into<String>,
        descriptors: I,
    ) -> &mut Self
    where
        I: IntoIterator<Item = D>,
        D: Into<DependencyDescriptor>,
    {
        self.controllers
            .entry(controller.into())
            .or_default()
            .insert(method.into(), descriptors.into_iter().map(Into::into).collect());
        self
    }

    /// **LOOKUP**
    ///
    /// **RETURNS**: declared descriptors, or an empty slice when the
    /// controller or the method is absent
    pub fn lookup(&self, controller: &str, method: &str) -> &[DependencyDescriptor] {
        self.controllers
            .get(controller)
            .and_then(|methods| methods.get(method))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn contains(&self, controller: &str, method: &str) -> bool {
        self.controllers
            .get(controller)
            .map_or(false, |methods| methods.contains_key(method))
    }

    pub fn controllers(&self) -> impl Iterator<Item = &str> {
        self.controllers.keys().map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.controllers.is_empty()
    }

    /// **MERGE**
    ///
    /// Method lists in `other` replace lists for the same pair; everything
    /// else is unioned.
    pub fn merge(&mut self, other: DeclarationTable) {
        for (controller, methods) in other.controllers {
            let target = self.controllers.entry(controller).or_default();
            for (method, descriptors) in methods {
                target.insert(method, descriptors);
            }
        }
    }
}

/// **APPLICATION CONFIG**
///
/// **PURPOSE**: The object stored in the locator under [`CONFIG_SERVICE_KEY`].
/// Keys other than `controller_action_injections` are ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ApplicationConfig {
    #[serde(default)]
    pub controller_action_injections: DeclarationTable,
}

impl ApplicationConfig {
    /// **CONSTRUCTOR**
    pub fn new() -> Self {
        Self::default()
    }

    /// **PARSE FROM JSON TEXT**
    pub fn from_json_str(json: &str) -> Result<Self, DispatchError> {
        super::parser::parse_config(json.as_bytes())
    }

    /// **PARSE FROM JSON VALUE**
    pub fn from_json_value(value: serde_json::Value) -> Result<Self, DispatchError> {
        super::parser::parse_config_value(value)
    }

    /// **BUILDER** - Declare dependencies for one (controller, method) pair
    pub fn with_injection<I, D>(
        mut self,
        controller: impl Into<String>,
        method: impl Into<String>,
        descriptors: I,
    ) -> Self
    where
        I: IntoIterator<Item = D>,
        D: Into<DependencyDescriptor>,
    {
        self.controller_action_injections
            .declare(controller, method, descriptors);
        self
    }

    pub fn injections(&self) -> &DeclarationTable {
        &self.controller_action_injections
    }

    /// **MERGE** - Later module config wins per (controller, method)
    pub fn merge(mut self, other: ApplicationConfig) -> Self {
        self.controller_action_injections
            .merge(other.controller_action_injections);
        self
    }
}
