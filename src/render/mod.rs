//! 文本展示层：股票卡片网格、空结果、错误状态、多空统计与图表表格

use std::fmt;

use crate::engine::{classify, SignalSummary};
use crate::models::chart::ChartData;
use crate::models::stock::Stock;
use crate::navigation::Section;
use crate::services::board_service::LoadState;
use crate::util::{format_change, format_compact, format_currency};

pub const EMPTY_TITLE: &str = "No stocks found";
pub const EMPTY_HINT: &str = "Try adjusting your search or filters";
pub const ERROR_TITLE: &str = "Error Loading Data";
pub const RETRY_LABEL: &str = "Try Again";
pub const LOADING_TEXT: &str = "Loading stocks...";
pub const SUMMARY_TITLE: &str = "Market Sentiment";

/// 单张股票卡片
struct Card<'a>(&'a Stock);

impl fmt::Display for Card<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let stock = self.0;
        let derived = classify(stock.price, stock.ema20, stock.ema50);

        writeln!(f, "{:<8} [{}]", stock.symbol, stock.signal)?;
        writeln!(f, "{}", stock.name)?;
        writeln!(f, "{}  {}", format_currency(stock.price), format_change(stock.change, stock.change_percent))?;
        writeln!(
            f,
            "EMA 20: {}  EMA 50: {}  EMA 200: {}  Signal: {} ({})",
            format_currency(stock.ema20),
            format_currency(stock.ema50),
            format_currency(stock.ema200),
            derived.label(),
            derived.color_class(),
        )?;
        writeln!(f, "Volume: {}  Mkt Cap: {}", format_compact(stock.volume), stock.market_cap)
    }
}

/// 图表的文本表格
struct ChartTable<'a>(&'a ChartData);

impl fmt::Display for ChartTable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let chart = self.0;
        writeln!(f, "{}", chart.modal_title)?;
        writeln!(f, "{}", chart.title)?;

        write!(f, "{:<12}", "Date")?;
        for dataset in &chart.datasets {
            write!(f, "{:>12}", dataset.label)?;
        }
        writeln!(f)?;

        for (i, label) in chart.labels.iter().enumerate() {
            write!(f, "{:<12}", label)?;
            for dataset in &chart.datasets {
                write!(f, "{:>12.2}", dataset.data[i])?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

pub fn render_card(stock: &Stock) -> String {
    Card(stock).to_string()
}

/// 卡片网格；空列表渲染为明确的“无结果”状态
pub fn render_grid(stocks: &[&Stock]) -> String {
    if stocks.is_empty() {
        return render_empty();
    }

    let separator = format!("{:-<60}\n", "");
    stocks
        .iter()
        .map(|stock| render_card(stock))
        .collect::<Vec<_>>()
        .join(separator.as_str())
}

pub fn render_empty() -> String {
    format!("{}\n{}\n", EMPTY_TITLE, EMPTY_HINT)
}

pub fn render_error(message: &str) -> String {
    format!("{}\n{}\n[{}]\n", ERROR_TITLE, message, RETRY_LABEL)
}

pub fn render_load_state(state: &LoadState) -> String {
    match state {
        LoadState::Loading => format!("{}\n", LOADING_TEXT),
        LoadState::Ready(board) => render_grid(&board.view()),
        LoadState::Failed { message } => render_error(message),
    }
}

/// 首页多空统计
pub fn render_summary(summary: &SignalSummary) -> String {
    format!(
        "{}\nTotal: {}\nBullish: {} ({}%)\nBearish: {} ({}%)\nNeutral: {} ({}%)\n",
        SUMMARY_TITLE,
        summary.total,
        summary.bullish_count,
        summary.bullish_percentage,
        summary.bearish_count,
        summary.bearish_percentage,
        summary.neutral_count,
        summary.neutral_percentage,
    )
}

/// 按导航所在板块渲染：首页为统计，股票页为卡片网格
pub fn render_section(section: Section, state: &LoadState) -> String {
    match (section, state) {
        (Section::Dashboard, LoadState::Ready(board)) => render_summary(&board.summary()),
        _ => render_load_state(state),
    }
}

pub fn render_chart(chart: &ChartData) -> String {
    ChartTable(chart).to_string()
}
