use crate::config::{ApplicationConfig, DependencyDescriptor, CONFIG_SERVICE_KEY};
use crate::dependencies::types::DispatchContext;
use crate::errors::DispatchError;
use crate::locator::ServiceLocator;
use crate::types::ResolvedArguments;
use log::trace;
use std::any::Any;
use std::sync::Arc;

pub struct DependencyResolver<'a> {
    locator: &'a dyn ServiceLocator,
}

impl<'a> DependencyResolver<'a> {
    pub fn new(locator: &'a dyn ServiceLocator) -> Self {
        Self { locator }
    }

    /// Fetches the [`ApplicationConfig`] stored under the `"config"` key.
    pub fn load_config(&self) -> Result<Arc<ApplicationConfig>, DispatchError> {
        let config = self.locator.get(CONFIG_SERVICE_KEY)?;
        config.downcast::<ApplicationConfig>().map_err(|_| {
            DispatchError::invalid_config(format!(
                "service \"{}\" is not an application config",
                CONFIG_SERVICE_KEY
            ))
        })
    }

    /// Resolves the dependencies declared for `context`, reading the
    /// declarations from the locator's config entry.
    pub fn resolve(
        &self,
        context: &DispatchContext,
        controller: &dyn Any,
    ) -> Result<ResolvedArguments, DispatchError> {
        let config = self.load_config()?;
        self.resolve_with(&config, context, controller)
    }

    /// Same as [`resolve`](Self::resolve) against an already loaded config.
    ///
    /// Stops at the first named dependency the locator cannot provide.
    pub fn resolve_with(
        &self,
        config: &ApplicationConfig,
        context: &DispatchContext,
        controller: &dyn Any,
    ) -> Result<ResolvedArguments, DispatchError> {
        let declared = config
            .injections()
            .lookup(&context.controller_identifier, &context.method_name);

        let mut resolved = ResolvedArguments::with_capacity(declared.len());
        for (position, descriptor) in declared.iter().enumerate() {
            let value = match descriptor {
                DependencyDescriptor::Factory(factory) => {
                    trace!("{}: invoking inline factory at position {}", context, position);
                    factory(self.locator, controller).map_err(DispatchError::Factory)?
                }
                DependencyDescriptor::Named(key) => {
                    trace!("{}: looking up '{}' at position {}", context, key, position);
                    self.locator
                        .get(key)
                        .map_err(|source| DispatchError::DependencyNotResolved { source })?
                }
            };
            resolved.push(value);
        }

        Ok(resolved)
    }
}
