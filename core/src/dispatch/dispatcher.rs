//! # ACTION DISPATCHER
//!
//! **PIPELINE**:
//!
//! 1. **ROUTE** - Read the `action` parameter from the event's route match
//! 2. **METHOD** - Map the action to a registered method, or `notFoundAction`
//! 3. **RESOLVE** - Build the argument list declared for (controller, method)
//! 4. **INVOKE** - Call the method and store its return value in the event

use crate::dependencies::{DependencyResolver, DispatchContext};
use crate::dispatch::controller::{
    method_from_action, ActionController, ActionHandler, ActionTable, DEFAULT_ACTION,
    NOT_FOUND_ACTION,
};
use crate::dispatch::event::MvcEvent;
use crate::errors::DispatchError;
use crate::locator::ServiceLocator;
use crate::routing::ACTION_PARAM;
use crate::types::Service;
use log::debug;
use std::any::type_name;
use std::sync::Arc;

/// **ACTION DISPATCHER**
///
/// **PURPOSE**: Owns one controller instance and dispatches events to it
/// **GUARANTEE**: The event result is written only after the action returns `Ok`
pub struct ActionDispatcher<C: ActionController> {
    /// **CONTROLLER INSTANCE**
    controller: C,

    /// **REQUESTED NAME** - Identifier override for aliased controllers
    requested_name: Option<String>,

    /// **ACTION REGISTRY** - Built once at construction
    actions: ActionTable<C>,
}

impl<C: ActionController> ActionDispatcher<C> {
    /// **CONSTRUCTOR**
    pub fn new(controller: C) -> Self {
        Self {
            controller,
            requested_name: None,
            actions: ActionTable::for_controller(),
        }
    }

    /// **CONSTRUCTOR WITH REQUESTED NAME**
    ///
    /// Declarations are then looked up under `name` instead of the
    /// controller's type name.
    pub fn with_requested_name(mut self, name: impl Into<String>) -> Self {
        self.requested_name = Some(name.into());
        self
    }

    /// **CONTROLLER IDENTIFIER**
    ///
    /// **RETURNS**: the requested name when set, else `type_name::<C>()`
    pub fn controller_identifier(&self) -> &str {
        self.requested_name
            .as_deref()
            .unwrap_or_else(|| type_name::<C>())
    }

    pub fn controller(&self) -> &C {
        &self.controller
    }

    pub fn controller_mut(&mut self) -> &mut C {
        &mut self.controller
    }

    pub fn into_controller(self) -> C {
        self.controller
    }

    pub fn actions(&self) -> &ActionTable<C> {
        &self.actions
    }

    /// **METHOD SELECTION**
    ///
    /// **RETURNS**: the method name for `action` and its handler, or the
    /// not-found pair when no such method is registered
    pub fn target(&self, action: &str) -> (String, ActionHandler<C>) {
        let method = method_from_action(action);
        match self.actions.get(&method) {
            Some(handler) => (method, handler),
            None => (NOT_FOUND_ACTION.to_string(), self.actions.fallback()),
        }
    }

    /// **DISPATCH**
    ///
    /// **PARAMETERS**:
    /// - `event: &mut MvcEvent` - Must carry a route match
    /// - `locator: &dyn ServiceLocator` - Source of the config and named services
    ///
    /// **RETURNS**: the action's return value, also stored in `event`
    pub fn on_dispatch(
        &mut self,
        event: &mut MvcEvent,
        locator: &dyn ServiceLocator,
    ) -> Result<Service, DispatchError> {
        let route_match = event.route_match().ok_or(DispatchError::MissingRoute)?;
        let action = route_match.param_or(ACTION_PARAM, DEFAULT_ACTION);
        let (method, handler) = self.target(action);

        let context = DispatchContext::new(self.controller_identifier(), method);
        debug!("Dispatching action '{}' to {}", action, context);

        let arguments = DependencyResolver::new(locator).resolve(&context, &self.controller)?;
        debug!("{}: resolved {} argument(s)", context, arguments.len());

        let result = handler(&mut self.controller, arguments).map_err(DispatchError::Action)?;
        event.set_result(Arc::clone(&result));

        Ok(result)
    }
}
