/// Configuration constants for the application
pub struct Config;

impl Config {
    /// Path of the price history endpoint
    pub const PRICE_PATH: &'static str = "/api/price";

    /// Path of the production/consumption endpoint
    pub const PROD_CONS_PATH: &'static str = "/api/prod-cons";

    /// Height in pixels of the line and scatter panels
    pub const PANEL_CHART_HEIGHT: u32 = 260;

    /// Height in pixels of the world map panel
    pub const MAP_CHART_HEIGHT: u32 = 420;

    /// Opacity applied to chart lines
    pub const LINE_OPACITY: f64 = 0.45;

    /// Quiet period before a window resize triggers a chart re-render
    pub const RESIZE_DEBOUNCE_MS: u32 = 150;
}
