use std::fmt;

/// Key pair used to look up declared dependencies.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DispatchContext {
    pub controller_identifier: String,
    pub method_name: String,
}

impl DispatchContext {
    pub fn new(controller_identifier: impl Into<String>, method_name: impl Into<String>) -> Self {
        Self {
            controller_identifier: controller_identifier.into(),
            method_name: method_name.into(),
        }
    }
}

impl fmt::Display for DispatchContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}::{}", self.controller_identifier, self.method_name)
    }
}
