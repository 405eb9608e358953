use crate::config::Config;
use crate::models::{
    error::AppError,
    price::{PriceHistory, PricePoint},
    prod_cons::ProdConsData,
};

// CONSTANTS
const FALLBACK_BASE_URL: &str = "http://127.0.0.1:8000";

// API CONFIGURATION
/// Configuration for the dashboard API client.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    base_url: String,
}

impl ApiConfig {
    /// Creates a builder for constructing an `ApiConfig`.
    pub fn builder() -> ApiConfigBuilder {
        ApiConfigBuilder::default()
    }

    /// Returns the base URL requests are issued against.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Constructs the full URL for the price history endpoint.
    pub fn price_url(&self) -> String {
        format!("{}{}", self.base_url, Config::PRICE_PATH)
    }

    /// Constructs the full URL for the production/consumption endpoint.
    pub fn prod_cons_url(&self) -> String {
        format!("{}{}", self.base_url, Config::PROD_CONS_PATH)
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        ApiConfigBuilder::default().build()
    }
}

// API CONFIGURATION BUILDER
/// Builder for constructing an `ApiConfig` with custom settings.
#[derive(Debug, Default)]
pub struct ApiConfigBuilder {
    base_url: Option<String>,
}

impl ApiConfigBuilder {
    /// Sets a custom base URL (primarily for testing).
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Builds the `ApiConfig`, resolving the base URL from the page origin
    /// when no override was given.
    pub fn build(self) -> ApiConfig {
        ApiConfig {
            base_url: self.base_url.unwrap_or_else(page_origin),
        }
    }
}

/// Origin of the page the app is served from, or the dev server address
/// outside a browser context.
fn page_origin() -> String {
    web_sys::window()
        .and_then(|w| w.location().origin().ok())
        .unwrap_or_else(|| FALLBACK_BASE_URL.to_string())
}

// DASHBOARD CLIENT
/// HTTP client for the dashboard's two data endpoints.
pub struct DashboardClient {
    http: reqwest::Client,
    config: ApiConfig,
}

impl DashboardClient {
    /// Creates a new client with default configuration.
    pub fn new() -> Result<Self, AppError> {
        Self::with_config(ApiConfig::default())
    }

    /// Creates a new client with the specified configuration.
    pub fn with_config(config: ApiConfig) -> Result<Self, AppError> {
        let http = reqwest::Client::builder()
            .build()
            .map_err(|e| AppError::ConfigError(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self { http, config })
    }

    /// Returns a reference to the client's configuration.
    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    /// Fetches the full price history.
    pub async fn fetch_price(&self) -> Result<PriceHistory, AppError> {
        let points: Vec<PricePoint> = self.fetch_json(&self.config.price_url()).await?;
        Ok(PriceHistory::new(points))
    }

    /// Fetches production/consumption data for all energy types.
    pub async fn fetch_prod_cons(&self) -> Result<ProdConsData, AppError> {
        self.fetch_json(&self.config.prod_cons_url()).await
    }

    /// Executes a single fetch attempt and deserializes the JSON body.
    async fn fetch_json<T>(&self, url: &str) -> Result<T, AppError>
    where
        T: serde::de::DeserializeOwned,
    {
        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| classify_error(&e))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(error_for_status(status, &body));
        }

        response
            .json()
            .await
            .map_err(|e| AppError::FetchError(format!("Failed to parse response: {e}")))
    }
}

/// Converts a reqwest transport error into an `AppError`.
fn classify_error(error: &reqwest::Error) -> AppError {
    if error.is_timeout() {
        AppError::FetchError(format!("Request timeout: {error}"))
    } else if error.is_request() {
        AppError::FetchError(format!("Request error: {error}"))
    } else {
        AppError::FetchError(format!("Network error: {error}"))
    }
}

/// Creates an error for a non-success HTTP status.
fn error_for_status(status: reqwest::StatusCode, body: &str) -> AppError {
    match status.as_u16() {
        400..=499 => AppError::FetchError(format!("Client error {status}: {body}")),
        500..=599 => AppError::FetchError(format!("Server error {status}: {body}")),
        _ => AppError::FetchError(format!("Unexpected status {status}: {body}")),
    }
}

// CONVENIENCE FUNCTIONS
/// Fetches the price history using default configuration.
pub async fn fetch_price() -> Result<PriceHistory, AppError> {
    DashboardClient::new()?.fetch_price().await
}

/// Fetches production/consumption data using default configuration.
pub async fn fetch_prod_cons() -> Result<ProdConsData, AppError> {
    DashboardClient::new()?.fetch_prod_cons().await
}
