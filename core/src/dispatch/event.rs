use crate::routing::RouteMatch;
use crate::types::Service;

/// **DISPATCH EVENT**
///
/// **PURPOSE**: Carries the route match in and the action result out
#[derive(Debug, Clone, Default)]
pub struct MvcEvent {
    route_match: Option<RouteMatch>,
    result: Option<Service>,
}

impl MvcEvent {
    /// **CONSTRUCTOR**
    pub fn new() -> Self {
        Self::default()
    }

    /// **CONSTRUCTOR WITH ROUTE MATCH**
    pub fn with_route_match(route_match: RouteMatch) -> Self {
        Self {
            route_match: Some(route_match),
            result: None,
        }
    }

    pub fn route_match(&self) -> Option<&RouteMatch> {
        self.route_match.as_ref()
    }

    pub fn set_route_match(&mut self, route_match: RouteMatch) {
        self.route_match = Some(route_match);
    }

    pub fn result(&self) -> Option<&Service> {
        self.result.as_ref()
    }

    pub fn set_result(&mut self, result: Service) {
        self.result = Some(result);
    }

    pub fn take_result(&mut self) -> Option<Service> {
        self.result.take()
    }
}
