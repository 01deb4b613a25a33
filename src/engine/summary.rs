use crate::engine::signal::classify;
use crate::models::stock::{Signal, Stock};

/// 看板首页的多空统计，按 EMA 分类计数
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SignalSummary {
    pub total: usize,
    pub bullish_count: usize,
    pub bearish_count: usize,
    pub neutral_count: usize,
    pub bullish_percentage: u32,
    pub bearish_percentage: u32,
    /// 取余数，三项百分比之和恒为 100（集合为空时为 0）
    pub neutral_percentage: u32,
}

impl SignalSummary {
    pub fn from_stocks(stocks: &[Stock]) -> Self {
        let total = stocks.len();
        if total == 0 {
            return Self::default();
        }

        let mut bullish_count = 0;
        let mut bearish_count = 0;
        for stock in stocks {
            match classify(stock.price, stock.ema20, stock.ema50) {
                Signal::Bullish => bullish_count += 1,
                Signal::Bearish => bearish_count += 1,
                Signal::Neutral => {}
            }
        }

        // 百分比向下取整
        let bullish_percentage = (bullish_count * 100 / total) as u32;
        let bearish_percentage = (bearish_count * 100 / total) as u32;

        Self {
            total,
            bullish_count,
            bearish_count,
            neutral_count: total - bullish_count - bearish_count,
            bullish_percentage,
            bearish_percentage,
            neutral_percentage: 100 - bullish_percentage - bearish_percentage,
        }
    }
}
