use crate::errors::DispatchError;
use crate::routing::types::Route;
use regex::Regex;
use std::collections::HashMap;

/// Compiles a segment pattern such as `/app/{controller}/{action}` into a
/// [`Route`].
pub fn parse_route_pattern(pattern: &str, name: &str) -> Result<Route, DispatchError> {
    let mut regex_pattern = String::from("^");
    let mut param_names = Vec::new();

    let parts: Vec<&str> = pattern.split('/').collect();
    for part in parts {
        if part.starts_with('{') && part.ends_with('}') && part.len() > 2 {
            let param_name = &part[1..part.len() - 1];
            param_names.push(param_name.to_string());
            regex_pattern.push_str(r"/([^/]+)");
        } else if !part.is_empty() {
            regex_pattern.push('/');
            regex_pattern.push_str(&regex::escape(part));
        }
    }
    if param_names.is_empty() && regex_pattern.len() == 1 {
        regex_pattern.push('/');
    }
    regex_pattern.push('$');

    let path_regex = Regex::new(&regex_pattern).map_err(|e| {
        DispatchError::invalid_config(format!("Invalid route pattern '{}': {}", pattern, e))
    })?;

    Ok(Route {
        name: name.to_string(),
        pattern: pattern.to_string(),
        path_regex,
        param_names,
        defaults: HashMap::new(),
    })
}
