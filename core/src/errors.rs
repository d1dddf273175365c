use crate::locator::ServiceNotFound;
use thiserror::Error;

/// Boxed error returned by inline factories and action handlers.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

#[derive(Debug, Error)]
pub enum DispatchError {
    #[error("Missing route matches; unsure how to retrieve action")]
    MissingRoute,

    #[error("Controller action dependency not resolved: {source}")]
    DependencyNotResolved {
        #[source]
        source: ServiceNotFound,
    },

    #[error(transparent)]
    Factory(BoxError),

    #[error(transparent)]
    Locator(#[from] ServiceNotFound),

    #[error("Invalid controller action injections config: {message}")]
    InvalidConfig { message: String },

    #[error(transparent)]
    Action(BoxError),
}

impl DispatchError {
    /// Stable error code for the variant.
    pub fn code(&self) -> &'static str {
        match self {
            DispatchError::MissingRoute => error_codes::MISSING_ROUTE,
            DispatchError::DependencyNotResolved { .. } => error_codes::DEPENDENCY_NOT_RESOLVED,
            DispatchError::Factory(_) => error_codes::FACTORY_FAILED,
            DispatchError::Locator(_) => error_codes::SERVICE_NOT_FOUND,
            DispatchError::InvalidConfig { .. } => error_codes::INVALID_CONFIG,
            DispatchError::Action(_) => error_codes::ACTION_FAILED,
        }
    }

    pub(crate) fn invalid_config(message: impl Into<String>) -> Self {
        DispatchError::InvalidConfig {
            message: message.into(),
        }
    }
}

/// **DISPATCH ERROR CODES**
///
/// **MANDATE**: Use these standardized error codes for consistent error reporting.
pub mod error_codes {
    pub const MISSING_ROUTE: &str = "RUST_CORE_DISPATCH_MISSING_ROUTE";
    pub const DEPENDENCY_NOT_RESOLVED: &str = "RUST_CORE_DISPATCH_DEPENDENCY_NOT_RESOLVED";
    pub const FACTORY_FAILED: &str = "RUST_CORE_DISPATCH_FACTORY_FAILED";
    pub const SERVICE_NOT_FOUND: &str = "RUST_CORE_DISPATCH_SERVICE_NOT_FOUND";
    pub const INVALID_CONFIG: &str = "RUST_CORE_DISPATCH_INVALID_CONFIG";
    pub const ACTION_FAILED: &str = "RUST_CORE_DISPATCH_ACTION_FAILED";
}
