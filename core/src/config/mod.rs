pub mod parser;
pub mod types;

pub use parser::{parse_config, parse_config_value};
pub use types::{
    ApplicationConfig, DeclarationTable, DependencyDescriptor, InlineFactory, CONFIG_SERVICE_KEY,
};
