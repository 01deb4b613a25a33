use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use crate::errors::{Result, SignalBoardError};

/// 信号标签：多头 / 空头 / 中性
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Signal {
    Bullish,
    Bearish,
    Neutral,
}

impl Signal {
    /// 小写标识，与数据源中的 `signal` 字段一致
    pub fn as_str(&self) -> &'static str {
        match self {
            Signal::Bullish => "bullish",
            Signal::Bearish => "bearish",
            Signal::Neutral => "neutral",
        }
    }
}

impl fmt::Display for Signal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Signal {
    type Err = SignalBoardError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "bullish" => Ok(Signal::Bullish),
            "bearish" => Ok(Signal::Bearish),
            "neutral" => Ok(Signal::Neutral),
            other => Err(SignalBoardError::InvalidStock(format!("Unknown signal: {}", other))),
        }
    }
}

/// 股票记录，字段名与数据源 JSON 保持一致（camelCase）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Stock {
    pub symbol: String,
    pub name: String,
    pub price: f64,
    pub change: f64,
    pub change_percent: f64,
    pub ema20: f64,
    pub ema50: f64,
    pub ema200: f64,
    /// 数据源给出的信号，可能与本地分类结果不一致
    pub signal: Signal,
    pub sector: String,
    pub volume: u64,
    pub market_cap: String,
}

impl Stock {
    /// 校验单条记录的不变量
    pub fn validate(&self) -> Result<()> {
        if self.symbol.trim().is_empty() {
            return Err(SignalBoardError::InvalidStock("empty symbol".to_string()));
        }

        let fields = [
            ("price", self.price),
            ("ema20", self.ema20),
            ("ema50", self.ema50),
            ("ema200", self.ema200),
        ];
        for (field, value) in fields {
            if !value.is_finite() || value < 0.0 {
                return Err(SignalBoardError::InvalidStock(format!(
                    "{}: {} must be a non-negative number, got {}",
                    self.symbol, field, value
                )));
            }
        }

        if !self.change.is_finite() || !self.change_percent.is_finite() {
            return Err(SignalBoardError::InvalidStock(format!(
                "{}: change values must be finite",
                self.symbol
            )));
        }

        Ok(())
    }
}

/// 校验整个集合：逐条校验并检查代码唯一
pub fn validate_collection(stocks: &[Stock]) -> Result<()> {
    let mut seen = HashSet::new();
    for stock in stocks {
        stock.validate()?;
        if !seen.insert(stock.symbol.as_str()) {
            return Err(SignalBoardError::InvalidStock(format!(
                "duplicate symbol: {}",
                stock.symbol
            )));
        }
    }
    Ok(())
}
