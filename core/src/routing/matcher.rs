use crate::routing::types::{Route, RouteMatch};
use log::trace;

/// First-match router producing [`RouteMatch`] values for dispatch.
pub struct RouteMatcher {
    routes: Vec<Route>,
}

impl RouteMatcher {
    pub fn new() -> Self {
        Self { routes: Vec::new() }
    }

    pub fn add_route(&mut self, route: Route) {
        self.routes.push(route);
    }

    /// Matches `path` against the registered routes in insertion order.
    /// Route defaults are applied first and overridden by captured segments.
    pub fn match_path(&self, path: &str) -> Option<RouteMatch> {
        for route in &self.routes {
            let Some(captures) = route.path_regex.captures(path) else {
                continue;
            };

            let mut route_match = RouteMatch::new(route.name.clone());
            for (name, value) in &route.defaults {
                route_match.set_param(name.clone(), value.clone());
            }
            for (i, param_name) in route.param_names.iter().enumerate() {
                if let Some(value) = captures.get(i + 1) {
                    let decoded = urlencoding::decode(value.as_str())
                        .map(|v| v.into_owned())
                        .unwrap_or_else(|_| value.as_str().to_string());
                    route_match.set_param(param_name.clone(), decoded);
                }
            }

            trace!("Path {} matched route '{}'", path, route.name);
            return Some(route_match);
        }

        None
    }
}

impl Default for RouteMatcher {
    fn default() -> Self {
        Self::new()
    }
}
