use crate::errors::{Result, SignalBoardError};
use std::time::Duration;

/// 数据文件路径的环境变量覆盖
pub const DATA_PATH_ENV: &str = "EMA_BOARD_DATA";

/// 数据源类型
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceKind {
    Mock,
    File,
    Http,
}

impl SourceKind {
    pub fn parse(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "mock" => Ok(SourceKind::Mock),
            "file" => Ok(SourceKind::File),
            "http" => Ok(SourceKind::Http),
            other => Err(SignalBoardError::ConfigError(format!("Unknown source: {}", other))),
        }
    }
}

pub struct Config {
    pub source: SourceKind,
    pub data_path: String,
    pub url: Option<String>,
    pub mock_delay: Duration,
    pub http_timeout: Duration,
    pub chart_window: usize,
}

impl Config {
    pub fn new() -> Self {
        Self {
            source: SourceKind::Mock,
            data_path: std::env::var(DATA_PATH_ENV).unwrap_or_else(|_| "data/stocks.json".to_string()),
            url: None,
            mock_delay: Duration::from_millis(1000),
            http_timeout: Duration::from_secs(30),
            chart_window: 30,
        }
    }

    pub fn with_source(mut self, source: SourceKind) -> Self {
        self.source = source;
        self
    }

    pub fn with_data_path(mut self, path: &str) -> Self {
        self.data_path = path.to_string();
        self
    }

    pub fn with_url(mut self, url: &str) -> Self {
        self.url = Some(url.to_string());
        self
    }

    pub fn with_mock_delay(mut self, delay: Duration) -> Self {
        self.mock_delay = delay;
        self
    }

    pub fn with_http_timeout(mut self, timeout: Duration) -> Self {
        self.http_timeout = timeout;
        self
    }

    pub fn with_chart_window(mut self, window: usize) -> Self {
        self.chart_window = window;
        self
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}
