use thiserror::Error;

#[derive(Error, Debug)]
pub enum SignalBoardError {
    /// 数据源加载失败（传输层错误），界面上展示为可重试的错误状态
    #[error("Data load failure: {0}")]
    DataLoadFailure(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("HTTP request error: {0}")]
    RequestError(#[from] reqwest::Error),

    #[error("JSON parsing error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Date parsing error: {0}")]
    DateError(#[from] chrono::ParseError),

    #[error("Invalid stock: {0}")]
    InvalidStock(String),

    #[error("Config error: {0}")]
    ConfigError(String),

    #[error("Unknown error: {0}")]
    Unknown(String),
}

pub type Result<T> = std::result::Result<T, SignalBoardError>;

// 用于从字符串创建错误
impl From<String> for SignalBoardError {
    fn from(s: String) -> Self {
        SignalBoardError::Unknown(s)
    }
}

// 用于从&str创建错误
impl From<&str> for SignalBoardError {
    fn from(s: &str) -> Self {
        SignalBoardError::Unknown(s.to_string())
    }
}
