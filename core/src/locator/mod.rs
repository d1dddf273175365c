pub mod service_map;
pub mod types;

pub use service_map::ServiceMap;
pub use types::{ServiceLocator, ServiceNotFound};
