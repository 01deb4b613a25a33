use chrono::{Duration, NaiveDate};
use serde::Serialize;

use crate::models::stock::Stock;

/// 默认图表窗口（样本数）
pub const DEFAULT_WINDOW: usize = 30;

/// 单条曲线的配置，字段名按图表库的 camelCase 约定输出
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Dataset {
    pub label: String,
    pub data: Vec<f64>,
    pub border_color: String,
    /// 填充区域颜色，仅在 `fill` 为 true 时有意义
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_dash: Option<[u8; 2]>,
    pub tension: f64,
    pub fill: bool,
}

/// 单只股票的价格 / EMA20 / EMA50 三线图数据
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartData {
    pub symbol: String,
    pub title: String,
    pub modal_title: String,
    pub labels: Vec<String>,
    pub datasets: Vec<Dataset>,
}

impl ChartData {
    /// 以当前价格和 EMA 合成一段平滑振荡序列，作为真实历史数据的替身。
    ///
    /// `end_date` 为最后一个样本的日期，样本按日期升序排列。
    pub fn simulate(stock: &Stock, end_date: NaiveDate, window: usize) -> Self {
        let labels = (0..window)
            .map(|i| {
                let offset = (window - 1 - i) as i64;
                (end_date - Duration::days(offset)).format("%-m/%-d/%Y").to_string()
            })
            .collect();

        let prices = (0..window)
            .map(|i| {
                let base_price = stock.price * 0.9;
                let variation = (i as f64 * 0.3).sin() * stock.price * 0.1;
                base_price + variation
            })
            .collect();

        let ema20 = (0..window)
            .map(|i| stock.ema20 * (1.0 + (i as f64 * 0.3).sin() * 0.05))
            .collect();

        let ema50 = (0..window)
            .map(|i| stock.ema50 * (1.0 + (i as f64 * 0.2).sin() * 0.03))
            .collect();

        Self {
            symbol: stock.symbol.clone(),
            title: format!("EMA Crossover Analysis - {}", stock.symbol),
            modal_title: format!("{} - {} Analysis", stock.symbol, stock.name),
            labels,
            datasets: vec![
                Dataset {
                    label: "Price".to_string(),
                    data: prices,
                    border_color: "#0d6efd".to_string(),
                    background_color: Some("rgba(13, 110, 253, 0.1)".to_string()),
                    border_dash: None,
                    tension: 0.4,
                    fill: true,
                },
                Dataset {
                    label: "EMA 20".to_string(),
                    data: ema20,
                    border_color: "#ff6b6b".to_string(),
                    background_color: None,
                    border_dash: Some([5, 5]),
                    tension: 0.4,
                    fill: false,
                },
                Dataset {
                    label: "EMA 50".to_string(),
                    data: ema50,
                    border_color: "#51cf66".to_string(),
                    background_color: None,
                    border_dash: Some([5, 5]),
                    tension: 0.4,
                    fill: false,
                },
            ],
        }
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn dataset(&self, label: &str) -> Option<&Dataset> {
        self.datasets.iter().find(|d| d.label == label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sources::mock::sample_stocks;

    fn aapl_chart() -> ChartData {
        let stock = sample_stocks().remove(0);
        let end = NaiveDate::from_ymd_opt(2024, 3, 30).unwrap();
        ChartData::simulate(&stock, end, DEFAULT_WINDOW)
    }

    #[test]
    fn has_three_series_over_fixed_window() {
        let chart = aapl_chart();
        assert_eq!(chart.len(), 30);
        assert_eq!(chart.datasets.len(), 3);
        for dataset in &chart.datasets {
            assert_eq!(dataset.data.len(), 30);
        }
    }

    #[test]
    fn labels_end_on_requested_date() {
        let chart = aapl_chart();
        assert_eq!(chart.labels.first().unwrap(), "3/1/2024");
        assert_eq!(chart.labels.last().unwrap(), "3/30/2024");
    }

    #[test]
    fn first_sample_starts_at_ninety_percent_of_price() {
        let chart = aapl_chart();
        let price = chart.dataset("Price").unwrap();
        assert!((price.data[0] - 182.63 * 0.9).abs() < 1e-9);

        let ema20 = chart.dataset("EMA 20").unwrap();
        assert!((ema20.data[0] - 180.45).abs() < 1e-9);
    }

    #[test]
    fn titles_name_the_stock() {
        let chart = aapl_chart();
        assert_eq!(chart.title, "EMA Crossover Analysis - AAPL");
        assert_eq!(chart.modal_title, "AAPL - Apple Inc. Analysis");
    }

    #[test]
    fn serializes_for_chart_library() {
        let json = serde_json::to_value(aapl_chart()).unwrap();
        assert_eq!(json["datasets"][0]["borderColor"], "#0d6efd");
        assert!(json["datasets"][0].get("borderDash").is_none());
        assert_eq!(json["datasets"][0]["backgroundColor"], "rgba(13, 110, 253, 0.1)");
        assert_eq!(json["datasets"][0]["fill"], true);
        assert!(json["datasets"][1].get("backgroundColor").is_none());
        assert_eq!(json["datasets"][1]["borderDash"][0], 5);
        assert_eq!(json["modalTitle"], "AAPL - Apple Inc. Analysis");
    }
}
