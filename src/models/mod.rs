pub mod stock;
pub mod chart;
