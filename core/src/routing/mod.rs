pub mod matcher;
pub mod parser;
pub mod types;

pub use matcher::RouteMatcher;
pub use parser::parse_route_pattern;
pub use types::{Route, RouteMatch, ACTION_PARAM, CONTROLLER_PARAM};
