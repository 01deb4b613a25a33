use ema_signal_board::config::{Config, SourceKind};
use ema_signal_board::engine::{classify, StockFilter};
use ema_signal_board::models::stock::Signal;
use ema_signal_board::navigation::Section;
use ema_signal_board::render;
use ema_signal_board::services::board_service::{LoadState, SignalBoardService};

use clap::{App, Arg, ArgMatches, SubCommand};
use log::{info, warn};
use std::error::Error;
use std::time::Duration;

fn source_args<'a>(app: App<'a>) -> App<'a> {
    app.arg(
        Arg::with_name("source")
            .long("source")
            .value_name("SOURCE")
            .help("Data source to load stocks from (mock, file, http)")
            .takes_value(true)
            .global(true)
            .default_value("mock"),
    )
    .arg(
        Arg::with_name("path")
            .long("path")
            .value_name("PATH")
            .help("JSON file for the file source (defaults to $EMA_BOARD_DATA or data/stocks.json)")
            .takes_value(true)
            .global(true),
    )
    .arg(
        Arg::with_name("url")
            .long("url")
            .value_name("URL")
            .help("Endpoint returning the stock collection as JSON")
            .takes_value(true)
            .global(true),
    )
    .arg(
        Arg::with_name("delay-ms")
            .long("delay-ms")
            .value_name("MILLIS")
            .help("Simulated latency of the mock source")
            .takes_value(true)
            .global(true)
            .default_value("1000"),
    )
}

fn build_config(matches: &ArgMatches) -> Result<Config, Box<dyn Error>> {
    let source = SourceKind::parse(matches.value_of("source").unwrap_or("mock"))?;
    let delay_ms = matches.value_of("delay-ms")
        .unwrap_or("1000")
        .parse::<u64>()?;

    let mut config = Config::new()
        .with_source(source)
        .with_mock_delay(Duration::from_millis(delay_ms));

    if let Some(path) = matches.value_of("path") {
        config = config.with_data_path(path);
    }
    if let Some(url) = matches.value_of("url") {
        config = config.with_url(url);
    }

    Ok(config)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // Initialize logger
    env_logger::init();

    let app = App::new("EMA Signal Board")
        .version("1.0.0")
        .about("EMA crossover signal board for a stock watchlist");

    let app = source_args(app)
        .subcommand(
            SubCommand::with_name("list")
                .about("List stocks matching the search and filters")
                .arg(
                    Arg::with_name("search")
                        .short('q')
                        .long("search")
                        .value_name("QUERY")
                        .help("Case-insensitive match on symbol or name")
                        .takes_value(true),
                )
                .arg(
                    Arg::with_name("sector")
                        .short('s')
                        .long("sector")
                        .value_name("SECTOR")
                        .help("Only show stocks in this sector")
                        .takes_value(true),
                )
                .arg(
                    Arg::with_name("signal")
                        .long("signal")
                        .value_name("SIGNAL")
                        .help("Only show stocks with this stored signal (bullish, bearish, neutral)")
                        .takes_value(true),
                ),
        )
        .subcommand(
            SubCommand::with_name("chart")
                .about("Show the simulated price / EMA chart of one stock")
                .arg(
                    Arg::with_name("symbol")
                        .short('s')
                        .long("symbol")
                        .value_name("SYMBOL")
                        .help("Stock symbol to chart")
                        .required(true)
                        .takes_value(true),
                )
                .arg(
                    Arg::with_name("json")
                        .long("json")
                        .help("Print the chart payload as JSON")
                        .takes_value(false),
                ),
        )
        .subcommand(
            SubCommand::with_name("summary")
                .about("Show bullish / bearish / neutral counts of the whole board"),
        )
        .subcommand(
            SubCommand::with_name("classify")
                .about("Classify a price / EMA20 / EMA50 triple")
                .arg(Arg::with_name("price").long("price").takes_value(true).required(true))
                .arg(Arg::with_name("ema20").long("ema20").takes_value(true).required(true))
                .arg(Arg::with_name("ema50").long("ema50").takes_value(true).required(true)),
        );

    let matches = app.get_matches();

    if let Some(matches) = matches.subcommand_matches("classify") {
        let price = matches.value_of("price").unwrap_or_default().parse::<f64>()?;
        let ema20 = matches.value_of("ema20").unwrap_or_default().parse::<f64>()?;
        let ema50 = matches.value_of("ema50").unwrap_or_default().parse::<f64>()?;

        let signal = classify(price, ema20, ema50);
        println!("{} ({})", signal.label(), signal.color_class());
        return Ok(());
    }

    let config = build_config(&matches)?;
    let service = SignalBoardService::from_config(config)?;

    if let Some(matches) = matches.subcommand_matches("list") {
        let signal = matches.value_of("signal")
            .filter(|s| !s.is_empty())
            .map(|s| s.parse::<Signal>())
            .transpose()?;
        let filter = StockFilter::new()
            .with_query(matches.value_of("search").unwrap_or_default())
            .with_sector(matches.value_of("sector"))
            .with_signal(signal);

        println!("{}", render::LOADING_TEXT);
        let mut state = service.load().await;
        if let Some(board) = state.board_mut() {
            board.set_filter(filter);
            info!("Filtered to {} of {} stocks", board.view().len(), board.len());
        }
        print!("{}", render::render_load_state(&state));
    } else if matches.subcommand_matches("summary").is_some() {
        let state = service.load().await;
        print!("{}", render::render_section(Section::Dashboard, &state));
    } else if let Some(matches) = matches.subcommand_matches("chart") {
        let symbol = matches.value_of("symbol").unwrap_or_default().to_uppercase();

        match service.load().await {
            LoadState::Ready(board) => {
                let today = chrono::Local::now().date_naive();
                match service.chart(&board, &symbol, today) {
                    Some(chart) if matches.is_present("json") => {
                        println!("{}", serde_json::to_string_pretty(&chart)?);
                    }
                    Some(chart) => print!("{}", render::render_chart(&chart)),
                    None => warn!("Stock not found: {}", symbol),
                }
            }
            state => print!("{}", render::render_load_state(&state)),
        }
    } else {
        info!("No command specified. Use --help for usage information.");
    }

    Ok(())
}
