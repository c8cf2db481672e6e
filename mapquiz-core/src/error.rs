use itertools::Itertools;

/// Startup-time configuration defects. Region lists are validated once at
/// load; nothing here is recoverable at play time.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("no regions configured")]
    Empty,

    #[error("region {index} has an empty name")]
    EmptyName { index: usize },

    #[error("region {index} ({name:?}) has non-finite center ({lat}, {lng})")]
    BadCenter {
        index: usize,
        name: String,
        lat: f64,
        lng: f64,
    },

    #[error("region {index} ({name:?}) has invalid {field}: {value}")]
    BadDimension {
        index: usize,
        name: String,
        field: &'static str,
        value: f64,
    },

    #[error("duplicate region names: {}", .0.iter().join(", "))]
    DuplicateNames(Vec<String>),

    #[error("invalid region config: {0}")]
    Parse(#[from] serde_json::Error),
}
