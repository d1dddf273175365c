pub mod controller;
pub mod dispatcher;
pub mod event;

pub use controller::{
    method_from_action, ActionController, ActionHandler, ActionTable, NotFoundResult,
    DEFAULT_ACTION, NOT_FOUND_ACTION,
};
pub use dispatcher::ActionDispatcher;
pub use event::MvcEvent;

#[cfg(test)]
mod tests;
