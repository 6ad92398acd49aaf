use clap::Parser;
use fulcrum::config::Config;
use fulcrum::error::AppError;
use fulcrum::services::TradePlanner;
use fulcrum::sources::SimulatedFeed;
use fulcrum::tui;
use fulcrum::types::RiskLevel;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Plan a leveraged long from a target price, timeframe, and risk tolerance.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Target asset price; omit to launch the interactive TUI
    #[arg(short, long)]
    target: Option<f64>,

    /// Timeframe for the trade in days
    #[arg(short = 'd', long, default_value_t = 7)]
    days: u32,

    /// Risk tolerance: low, medium, or high
    #[arg(short, long, default_value = "medium")]
    risk: String,

    /// Print the suggestion as JSON instead of text
    #[arg(long)]
    json: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    let args = Args::parse();

    // The TUI owns the terminal, so logging is one-shot mode only. Logs go
    // to stderr to keep --json output parseable.
    if args.target.is_some() {
        tracing_subscriber::registry()
            .with(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| "fulcrum=info".into()),
            )
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }

    let risk = RiskLevel::from_str(&args.risk.to_lowercase()).ok_or_else(|| {
        AppError::InvalidInput(format!(
            "unknown risk level '{}', expected low, medium, or high",
            args.risk
        ))
    })?;
    if args.days == 0 {
        return Err(AppError::InvalidInput("timeframe must be at least 1 day".to_string()).into());
    }

    // Load configuration and fetch the entry price once
    let config = Config::from_env();
    let feed = SimulatedFeed::new(
        config.symbol.clone(),
        config.base_price,
        config.order_size,
        config.price_jitter,
    );
    let market = feed.fetch().await?;
    info!(symbol = %market.symbol, entry = market.entry_price, "market snapshot ready");

    let planner = TradePlanner::new(market, config.fees);

    match args.target {
        Some(target) => run_once(&planner, target, args.days, risk, args.json),
        None => {
            tui::run_tui(planner).await?;
            Ok(())
        }
    }
}

/// Compute a single suggestion and print it to stdout.
fn run_once(
    planner: &TradePlanner,
    target: f64,
    days: u32,
    risk: RiskLevel,
    json: bool,
) -> anyhow::Result<()> {
    let suggestion = planner.suggest_trade(target, days, risk);
    let market = planner.market();

    if json {
        let out = serde_json::json!({
            "market": market,
            "suggestion": suggestion,
        });
        println!("{}", serde_json::to_string_pretty(&out)?);
        return Ok(());
    }

    let fees = planner.fees();
    println!(
        "{} entry ${:.4} (order size {:.2})",
        market.symbol, market.entry_price, market.order_size
    );
    println!("Target ${:.4} over {} days, {} risk", target, days, risk);
    println!(
        "Fees: {:.2}% per side, {:.2}% roundtrip, borrow {:.3}%/day",
        fees.leverage_fee_one_way * 100.0,
        fees.leverage_fee_roundtrip * 100.0,
        fees.daily_borrow_rate * 100.0
    );
    println!();

    if suggestion.is_viable() {
        println!("  Leverage:     {}x", suggestion.optimal_leverage);
        println!("  PnL:          {:+.2}%", suggestion.potential_pnl_pct);
        println!("  Liquidation:  ${:.2}", suggestion.liquidation_price);
        println!("  Breakeven:    ${:.2}", suggestion.breakeven_price);
        if let Some(borrow) = suggestion.estimated_borrow_fees {
            println!("  Borrow fees:  ${:.2}", borrow);
        }
        println!(
            "  Spot PnL:     {:+.2}% (no leverage)",
            planner.spot_pnl_percent(target)
        );
        println!();
    }

    println!("{}", suggestion.message);
    Ok(())
}
