use crate::models::stock::{Signal, Stock};
use crate::errors::Result;
use crate::sources::base::StockSource;
use async_trait::async_trait;
use log::{debug, info};
use std::time::Duration;

/// 内置样例数据源，模拟一次网络往返延迟
pub struct MockStockSource {
    delay: Duration,
}

impl MockStockSource {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

impl Default for MockStockSource {
    fn default() -> Self {
        Self::new(Duration::from_millis(1000))
    }
}

#[async_trait]
impl StockSource for MockStockSource {
    fn name(&self) -> &'static str {
        "mock"
    }

    async fn fetch_stocks(&self) -> Result<Vec<Stock>> {
        if !self.delay.is_zero() {
            debug!("模拟网络延迟 {:?}", self.delay);
            tokio::time::sleep(self.delay).await;
        }

        let stocks = sample_stocks();
        info!("Loaded {} sample stocks", stocks.len());
        Ok(stocks)
    }
}

#[allow(clippy::too_many_arguments)]
fn stock(
    symbol: &str,
    name: &str,
    price: f64,
    change: f64,
    change_percent: f64,
    emas: [f64; 3],
    signal: Signal,
    sector: &str,
    volume: u64,
    market_cap: &str,
) -> Stock {
    Stock {
        symbol: symbol.to_string(),
        name: name.to_string(),
        price,
        change,
        change_percent,
        ema20: emas[0],
        ema50: emas[1],
        ema200: emas[2],
        signal,
        sector: sector.to_string(),
        volume,
        market_cap: market_cap.to_string(),
    }
}

/// 六只样例股票
pub fn sample_stocks() -> Vec<Stock> {
    vec![
        stock("AAPL", "Apple Inc.", 182.63, 1.24, 0.68, [180.45, 178.92, 175.34],
              Signal::Bullish, "technology", 45_678_900, "2.87T"),
        stock("MSFT", "Microsoft Corporation", 374.58, -2.34, -0.62, [372.15, 368.92, 355.67],
              Signal::Neutral, "technology", 23_456_700, "2.78T"),
        stock("GOOGL", "Alphabet Inc.", 138.21, 0.89, 0.65, [136.45, 134.78, 128.92],
              Signal::Bullish, "technology", 34_567_800, "1.75T"),
        stock("TSLA", "Tesla Inc.", 248.42, -5.67, -2.23, [252.34, 245.67, 238.45],
              Signal::Bearish, "automotive", 56_789_000, "789.45B"),
        stock("AMZN", "Amazon.com Inc.", 154.67, 1.23, 0.8, [152.89, 149.34, 142.56],
              Signal::Bullish, "consumer", 45_678_900, "1.59T"),
        stock("META", "Meta Platforms Inc.", 346.89, 3.45, 1.0, [342.15, 338.67, 325.89],
              Signal::Bullish, "technology", 23_456_700, "889.34B"),
    ]
}
