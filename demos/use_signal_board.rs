use ema_signal_board::sources::mock::MockStockSource;
use ema_signal_board::config::Config;
use ema_signal_board::{assess, SignalBoardService, StockFilter};
use std::sync::Arc;
use std::time::Duration;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 创建看板服务，使用内置样例数据
    let source = Arc::new(MockStockSource::new(Duration::from_millis(200)));
    let service = SignalBoardService::new(Config::new(), source);

    let mut state = service.load().await;
    let board = match state.board_mut() {
        Some(board) => board,
        None => return Err("failed to load sample stocks".into()),
    };

    println!("板块: {:?}", board.sectors());
    println!("股票数量: {}", board.len());

    // 信号对比
    println!("\n{:<8} {:<10} {:<10}", "代码", "数据源", "EMA分类");
    println!("{:-<30}", "");
    for stock in board.get_all_stocks() {
        let assessment = assess(stock);
        let marker = if assessment.diverges() { " *" } else { "" };
        println!("{:<8} {:<10} {:<10}{}", stock.symbol, assessment.stored, assessment.derived, marker);
    }

    // 科技板块筛选
    board.set_filter(StockFilter::new().with_sector(Some("technology")));
    println!("\n科技板块:");
    for stock in board.view() {
        println!("  {} - {}", stock.symbol, stock.name);
    }

    Ok(())
}
