// 公开导出的模块，供外部使用
pub mod models;
pub mod engine;
pub mod data_provider;
pub mod errors;
pub mod sources;
pub mod services;
pub mod render;
pub mod navigation;
pub mod util;

// 主程序使用的配置，库使用场景中一般直接构造
#[doc(hidden)]
pub mod config;

// 重新导出常用类型，方便使用
pub use models::stock::{Signal, Stock};
pub use models::chart::ChartData;
pub use engine::{assess, classify, filter_stocks, SignalSummary, StockFilter};
pub use data_provider::StockBoard;
pub use sources::base::StockSource;
pub use services::board_service::{LoadState, SignalBoardService};
pub use errors::{Result, SignalBoardError};
