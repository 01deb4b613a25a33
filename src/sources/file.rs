use crate::models::stock::{validate_collection, Stock};
use crate::errors::{Result, SignalBoardError};
use crate::sources::base::StockSource;
use async_trait::async_trait;
use log::info;
use std::path::PathBuf;

/// 从本地 JSON 文件读取股票集合
pub struct FileStockSource {
    path: PathBuf,
}

impl FileStockSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl StockSource for FileStockSource {
    fn name(&self) -> &'static str {
        "file"
    }

    async fn fetch_stocks(&self) -> Result<Vec<Stock>> {
        info!("Reading stocks from {}", self.path.display());

        let text = tokio::fs::read_to_string(&self.path).await.map_err(|e| {
            SignalBoardError::DataLoadFailure(format!("{}: {}", self.path.display(), e))
        })?;
        let stocks: Vec<Stock> = serde_json::from_str(&text)?;
        validate_collection(&stocks)?;

        info!("Loaded {} stocks from file", stocks.len());
        Ok(stocks)
    }
}
