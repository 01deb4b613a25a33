use crate::models::stock::{Signal, Stock};

/// 组合筛选条件：搜索词、板块、信号
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StockFilter {
    pub query: String,
    pub sector: Option<String>,
    pub signal: Option<Signal>,
}

impl StockFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_query(mut self, query: &str) -> Self {
        self.query = query.to_string();
        self
    }

    /// 空字符串视为不限板块
    pub fn with_sector(mut self, sector: Option<&str>) -> Self {
        self.sector = sector.filter(|s| !s.is_empty()).map(|s| s.to_string());
        self
    }

    pub fn with_signal(mut self, signal: Option<Signal>) -> Self {
        self.signal = signal;
        self
    }

    pub fn is_unconstrained(&self) -> bool {
        self.query.is_empty() && self.sector.is_none() && self.signal.is_none()
    }

    /// 单只股票是否满足全部条件
    pub fn matches(&self, stock: &Stock) -> bool {
        let query = self.query.to_lowercase();
        let matches_search = query.is_empty()
            || stock.symbol.to_lowercase().contains(&query)
            || stock.name.to_lowercase().contains(&query);
        let matches_sector = self.sector.as_deref().map_or(true, |s| stock.sector == s);
        let matches_signal = self.signal.map_or(true, |s| stock.signal == s);

        matches_search && matches_sector && matches_signal
    }
}

/// 保序筛选，不修改源集合
pub fn filter_stocks<'a>(stocks: &'a [Stock], filter: &StockFilter) -> Vec<&'a Stock> {
    stocks.iter().filter(|stock| filter.matches(stock)).collect()
}
