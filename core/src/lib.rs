//! # ACTION INJECTIONS CORE LIBRARY
//!
//! **PER-ACTION DEPENDENCY INJECTION FOR MVC CONTROLLER DISPATCH**
//!
//! **ARCHITECTURE**: Dispatcher → resolver → service locator, one pass per request
//! **GUARANTEE**: Arguments arrive in declaration order; the first unresolved
//! named dependency aborts the dispatch before the action runs
//!
//! ## USAGE
//!
//! ```rust
//! use action_injections::api::*;
//!
//! struct AlbumController;
//!
//! impl AlbumController {
//!     fn list_action(&mut self, args: ResolvedArguments) -> ActionResult {
//!         let table = args.get::<String>(0).cloned().unwrap_or_default();
//!         Ok(service(format!("albums from {}", table)))
//!     }
//! }
//!
//! impl ActionController for AlbumController {
//!     fn register_actions(actions: &mut ActionTable<Self>) {
//!         actions.action("list", Self::list_action);
//!     }
//! }
//!
//! let config = ApplicationConfig::new().with_injection("Album", "listAction", ["album.table"]);
//! let locator = ServiceMap::with_config(config).with("album.table", "albums".to_string());
//!
//! let mut dispatcher = ActionDispatcher::new(AlbumController).with_requested_name("Album");
//! let mut event = MvcEvent::with_route_match(RouteMatch::new("album").with_param("action", "list"));
//!
//! let result = dispatcher.on_dispatch(&mut event, &locator).unwrap();
//! assert_eq!(result.downcast_ref::<String>().unwrap(), "albums from albums");
//! ```

pub mod api;
pub mod config;
pub mod dependencies;
pub mod dispatch;
pub mod errors;
pub mod locator;
pub mod routing;
pub mod types;
