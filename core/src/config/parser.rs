use crate::config::types::ApplicationConfig;
use crate::errors::DispatchError;

pub fn parse_config(data: &[u8]) -> Result<ApplicationConfig, DispatchError> {
    serde_json::from_slice(data)
        .map_err(|e| DispatchError::invalid_config(format!("Invalid JSON: {}", e)))
}

pub fn parse_config_value(value: serde_json::Value) -> Result<ApplicationConfig, DispatchError> {
    serde_json::from_value(value)
        .map_err(|e| DispatchError::invalid_config(format!("Invalid config value: {}", e)))
}
