pub mod resolver;
pub mod types;

pub use resolver::DependencyResolver;
pub use types::DispatchContext;
