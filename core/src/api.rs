pub use crate::config::{ApplicationConfig, DeclarationTable, DependencyDescriptor, CONFIG_SERVICE_KEY};
pub use crate::dependencies::{DependencyResolver, DispatchContext};
pub use crate::dispatch::{
    method_from_action, ActionController, ActionDispatcher, ActionTable, MvcEvent, NOT_FOUND_ACTION,
};
pub use crate::errors::{BoxError, DispatchError};
pub use crate::locator::{ServiceLocator, ServiceMap, ServiceNotFound};
pub use crate::routing::{parse_route_pattern, RouteMatch, RouteMatcher};
pub use crate::types::{service, ActionResult, ResolvedArguments, Service};
