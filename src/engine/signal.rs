use crate::models::stock::{Signal, Stock};

/// 根据价格与 EMA20、EMA50 的严格大小关系分类。
///
/// - `price > ema20 > ema50` 为多头
/// - `price < ema20 < ema50` 为空头
/// - 其余情况（含任意相等）为中性
pub fn classify(price: f64, ema20: f64, ema50: f64) -> Signal {
    if price > ema20 && ema20 > ema50 {
        Signal::Bullish
    } else if price < ema20 && ema20 < ema50 {
        Signal::Bearish
    } else {
        Signal::Neutral
    }
}

impl Signal {
    /// 卡片上展示的文本
    pub fn label(&self) -> &'static str {
        match self {
            Signal::Bullish => "Bullish",
            Signal::Bearish => "Bearish",
            Signal::Neutral => "Neutral",
        }
    }

    /// 展示用的颜色样式类
    pub fn color_class(&self) -> &'static str {
        match self {
            Signal::Bullish => "text-success",
            Signal::Bearish => "text-danger",
            Signal::Neutral => "text-warning",
        }
    }
}

/// 同时保留数据源信号与本地推导信号
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SignalAssessment {
    pub stored: Signal,
    pub derived: Signal,
}

impl SignalAssessment {
    pub fn diverges(&self) -> bool {
        self.stored != self.derived
    }
}

pub fn assess(stock: &Stock) -> SignalAssessment {
    SignalAssessment {
        stored: stock.signal,
        derived: classify(stock.price, stock.ema20, stock.ema50),
    }
}
