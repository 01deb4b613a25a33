use crate::models::stock::Stock;
use crate::errors::Result;
use async_trait::async_trait;

/// Base trait for stock data sources
#[async_trait]
pub trait StockSource {
    /// Short name of the source, used in logs
    fn name(&self) -> &'static str;

    /// Fetch the complete stock collection.
    /// A load either returns every stock or fails; there is no partial result.
    async fn fetch_stocks(&self) -> Result<Vec<Stock>>;
}
