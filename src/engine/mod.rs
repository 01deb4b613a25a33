//! 信号引擎：分类与筛选，均为纯函数

pub mod signal;
pub mod filter;
pub mod summary;

pub use filter::{filter_stocks, StockFilter};
pub use signal::{assess, classify, SignalAssessment};
pub use summary::SignalSummary;
