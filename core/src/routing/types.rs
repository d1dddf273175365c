use std::collections::HashMap;

/// Route parameter naming the requested action.
pub const ACTION_PARAM: &str = "action";
/// Route parameter naming the requested controller.
pub const CONTROLLER_PARAM: &str = "controller";

#[derive(Debug, Clone)]
pub struct Route {
    pub name: String,
    pub pattern: String,
    pub path_regex: regex::Regex,
    pub param_names: Vec<String>,
    pub defaults: HashMap<String, String>,
}

impl Route {
    pub fn with_default(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.defaults.insert(name.into(), value.into());
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RouteMatch {
    pub route_name: String,
    pub params: HashMap<String, String>,
}

impl RouteMatch {
    pub fn new(route_name: impl Into<String>) -> Self {
        Self {
            route_name: route_name.into(),
            params: HashMap::new(),
        }
    }

    pub fn with_param(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.set_param(name, value);
        self
    }

    pub fn set_param(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.params.insert(name.into(), value.into());
    }

    pub fn param(&self, name: &str) -> Option<&str> {
        self.params.get(name).map(String::as_str)
    }

    pub fn param_or<'a>(&'a self, name: &str, default: &'a str) -> &'a str {
        self.param(name).unwrap_or(default)
    }
}
