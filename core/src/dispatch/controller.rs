use crate::types::{service, ActionResult, ResolvedArguments};
use std::any::Any;
use std::collections::HashMap;
use std::fmt;

/// Method invoked when the requested action has no handler.
pub const NOT_FOUND_ACTION: &str = "notFoundAction";
/// Action assumed when the route match carries no `action` parameter.
pub const DEFAULT_ACTION: &str = "not-found";

pub type ActionHandler<C> = fn(&mut C, ResolvedArguments) -> ActionResult;

/// Result produced by the default not-found action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotFoundResult {
    pub content: String,
}

impl Default for NotFoundResult {
    fn default() -> Self {
        Self {
            content: "Page not found".to_string(),
        }
    }
}

/// A controller whose actions receive injected dependencies.
pub trait ActionController: Any + Sized {
    /// Registers the controller's action methods.
    fn register_actions(actions: &mut ActionTable<Self>);

    /// Fallback for unknown actions. A handler registered under
    /// [`NOT_FOUND_ACTION`] takes precedence.
    fn not_found_action(&mut self, _args: ResolvedArguments) -> ActionResult {
        Ok(service(NotFoundResult::default()))
    }
}

/// Method name → handler registry for one controller type.
pub struct ActionTable<C> {
    handlers: HashMap<String, ActionHandler<C>>,
}

impl<C: ActionController> ActionTable<C> {
    /// Table holding the fallback plus everything `C` registers.
    pub fn for_controller() -> Self {
        let mut table = Self {
            handlers: HashMap::new(),
        };
        table.add(NOT_FOUND_ACTION, C::not_found_action);
        C::register_actions(&mut table);
        table
    }

    /// Registers `handler` under an explicit method name.
    pub fn add(&mut self, method: impl Into<String>, handler: ActionHandler<C>) -> &mut Self {
        self.handlers.insert(method.into(), handler);
        self
    }

    /// Registers `handler` under the method name derived from `action`.
    pub fn action(&mut self, action: &str, handler: ActionHandler<C>) -> &mut Self {
        self.add(method_from_action(action), handler)
    }

    pub fn get(&self, method: &str) -> Option<ActionHandler<C>> {
        self.handlers.get(method).copied()
    }

    pub fn contains(&self, method: &str) -> bool {
        self.handlers.contains_key(method)
    }

    pub fn fallback(&self) -> ActionHandler<C> {
        self.get(NOT_FOUND_ACTION).unwrap_or(C::not_found_action)
    }

    pub fn methods(&self) -> impl Iterator<Item = &str> {
        self.handlers.keys().map(String::as_str)
    }
}

impl<C> fmt::Debug for ActionTable<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.handlers.keys()).finish()
    }
}

/// Converts a route action into its method name: `.`, `-` and `_` separate
/// words, words after the first are capitalised, and `Action` is appended.
pub fn method_from_action(action: &str) -> String {
    let mut method = String::with_capacity(action.len() + "Action".len());
    for (i, word) in action
        .split(['.', '-', '_'])
        .filter(|word| !word.is_empty())
        .enumerate()
    {
        let mut chars = word.chars();
        if let Some(first) = chars.next() {
            if i == 0 {
                method.extend(first.to_lowercase());
            } else {
                method.extend(first.to_uppercase());
            }
            method.push_str(chars.as_str());
        }
    }
    method.push_str("Action");
    method
}
