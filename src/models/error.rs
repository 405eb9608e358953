#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum AppError {
    #[error("Fetch error: {0}")]
    FetchError(String),

    #[error("No data for energy type: {0}")]
    SelectionError(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}
