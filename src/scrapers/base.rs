use crate::config::Config;
use crate::errors::Result;
use async_trait::async_trait;

/// Base trait for historical market data sources
#[async_trait]
pub trait HistoricalSource {
    /// Get the code identifying this data source
    fn source_code(&self) -> &'static str;

    /// Fetch the raw historical-data page markup for the configured instrument
    async fn fetch_history_page(&self, config: &Config) -> Result<String>;

    /// Fetch the current quote for the configured instrument
    async fn fetch_latest_price(&self, config: &Config) -> Result<f64>;
}
