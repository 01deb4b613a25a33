use crate::config::{Config, SourceKind};
use crate::data_provider::StockBoard;
use crate::errors::{Result, SignalBoardError};
use crate::models::chart::ChartData;
use crate::sources::base::StockSource;
use crate::sources::file::FileStockSource;
use crate::sources::http::HttpStockSource;
use crate::sources::mock::MockStockSource;
use chrono::NaiveDate;
use log::{error, info};
use std::sync::Arc;

/// 加载生命周期
#[derive(Debug, Clone)]
pub enum LoadState {
    Loading,
    Ready(StockBoard),
    Failed { message: String },
}

impl LoadState {
    pub fn board(&self) -> Option<&StockBoard> {
        match self {
            LoadState::Ready(board) => Some(board),
            _ => None,
        }
    }

    pub fn board_mut(&mut self) -> Option<&mut StockBoard> {
        match self {
            LoadState::Ready(board) => Some(board),
            _ => None,
        }
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, LoadState::Failed { .. })
    }
}

/// 根据配置创建数据源
pub fn build_source(config: &Config) -> Result<Arc<dyn StockSource + Send + Sync>> {
    let source: Arc<dyn StockSource + Send + Sync> = match config.source {
        SourceKind::Mock => Arc::new(MockStockSource::new(config.mock_delay)),
        SourceKind::File => Arc::new(FileStockSource::new(&config.data_path)),
        SourceKind::Http => {
            let url = config.url.as_deref().ok_or_else(|| {
                SignalBoardError::ConfigError("http source requires a url".to_string())
            })?;
            Arc::new(HttpStockSource::new(url, config.http_timeout)?)
        }
    };
    Ok(source)
}

/// 看板服务：负责一次性加载数据，并为图表提供数据
pub struct SignalBoardService {
    config: Config,
    source: Arc<dyn StockSource + Send + Sync>,
}

impl SignalBoardService {
    /// 创建新的看板服务实例
    pub fn new(config: Config, source: Arc<dyn StockSource + Send + Sync>) -> Self {
        Self { config, source }
    }

    /// 按配置选择数据源
    pub fn from_config(config: Config) -> Result<Self> {
        let source = build_source(&config)?;
        Ok(Self::new(config, source))
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// 加载全量股票；任何错误都转为 `Failed` 状态而不是向上抛出
    pub async fn load(&self) -> LoadState {
        info!("Loading stocks from {} source", self.source.name());

        match self.try_load().await {
            Ok(board) => LoadState::Ready(board),
            Err(e) => {
                error!("Error loading stocks data: {}", e);
                LoadState::Failed {
                    message: format!("Failed to load stocks data: {}", e),
                }
            }
        }
    }

    /// 错误状态下的重试，与首次加载相同
    pub async fn retry(&self) -> LoadState {
        info!("Retrying stock load");
        self.load().await
    }

    async fn try_load(&self) -> Result<StockBoard> {
        let stocks = self.source.fetch_stocks().await?;
        StockBoard::new_with_data(stocks)
    }

    /// 指定股票的模拟图表数据，找不到时返回 None
    pub fn chart(&self, board: &StockBoard, symbol: &str, end_date: NaiveDate) -> Option<ChartData> {
        board
            .get_stock_by_symbol(symbol)
            .map(|stock| ChartData::simulate(stock, end_date, self.config.chart_window))
    }
}
