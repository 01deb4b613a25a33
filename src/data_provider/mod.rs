use log::{info, warn};

use crate::engine::{assess, filter_stocks, SignalSummary, StockFilter};
use crate::errors::Result;
use crate::models::stock::{validate_collection, Stock};
use std::collections::HashMap;

/// 看板状态：加载后不可变的全量股票，以及当前筛选条件
#[derive(Debug, Clone)]
pub struct StockBoard {
    data: Vec<Stock>,
    filter: StockFilter,
    // 索引用于快速查找
    symbol_index: HashMap<String, usize>,
}

impl StockBoard {
    /// 使用提供的数据创建看板，数据需满足代码唯一等约束
    pub fn new_with_data(data: Vec<Stock>) -> Result<Self> {
        validate_collection(&data)?;

        let mut board = Self {
            data,
            filter: StockFilter::default(),
            symbol_index: HashMap::new(),
        };

        board.rebuild_indices();
        board.report_divergences();

        Ok(board)
    }

    /// 获取所有股票列表
    pub fn get_all_stocks(&self) -> &[Stock] {
        &self.data
    }

    /// 获取指定股票
    pub fn get_stock_by_symbol(&self, symbol: &str) -> Option<&Stock> {
        self.symbol_index.get(symbol).map(|&idx| &self.data[idx])
    }

    /// 板块列表，按首次出现顺序
    pub fn sectors(&self) -> Vec<&str> {
        let mut sectors: Vec<&str> = Vec::new();
        for stock in &self.data {
            if !sectors.contains(&stock.sector.as_str()) {
                sectors.push(&stock.sector);
            }
        }
        sectors
    }

    /// 全量数据的多空统计，不受当前筛选影响
    pub fn summary(&self) -> SignalSummary {
        SignalSummary::from_stocks(&self.data)
    }

    pub fn filter(&self) -> &StockFilter {
        &self.filter
    }

    /// 替换筛选条件，视图下次读取时重新计算
    pub fn set_filter(&mut self, filter: StockFilter) {
        self.filter = filter;
    }

    /// 当前筛选结果，每次从全量数据重新计算
    pub fn view(&self) -> Vec<&Stock> {
        filter_stocks(&self.data, &self.filter)
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// 重建索引
    fn rebuild_indices(&mut self) {
        self.symbol_index.clear();

        for (i, stock) in self.data.iter().enumerate() {
            self.symbol_index.insert(stock.symbol.clone(), i);
        }
    }

    // 数据源信号与本地分类不一致时只记录，不做修正
    fn report_divergences(&self) {
        let mut divergent = 0;
        for stock in &self.data {
            let assessment = assess(stock);
            if assessment.diverges() {
                divergent += 1;
                warn!(
                    "{}: stored signal {} disagrees with EMA classification {}",
                    stock.symbol, assessment.stored, assessment.derived
                );
            }
        }
        info!("Board ready: {} stocks, {} with divergent signals", self.data.len(), divergent);
    }
}
