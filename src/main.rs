//! CrisisTruth CLI
//!
//! Command-line client for the CrisisTruth verification backend:
//! - Show the dashboard, optionally refreshing on an interval
//! - List flagged and verified news with the feed filters
//! - Verify a single claim, or chat interactively

use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use std::time::Duration;
use tokio::io::AsyncBufReadExt;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crisistruth::chat::ChatTurn;
use crisistruth::config::generate_default_config;
use crisistruth::dashboard::{stat_cards, threat_badge, topic_bars, DashboardView, TOPIC_CHART_HEIGHT};
use crisistruth::feed::{distinct_sources, evidence_preview, CategoryFilter, FeedView, ImpactFilter};
use crisistruth::text::{format_time, truncate_text};
use crisistruth::{
    ApiClient, ChatSession, Config, DashboardSnapshot, FakeNewsItem, LoggingConfig, Poller,
    RealNewsItem,
};

#[derive(Parser)]
#[command(name = "crisistruth")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "CrisisTruth AI misinformation verification client")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Backend URL (overrides config and CRISISTRUTH_API_URL)
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Table, global = true)]
    pub format: OutputFormat,

    /// Config file (default: search the standard locations)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show dashboard statistics
    Dashboard {
        /// Refresh every N seconds until interrupted
        #[arg(short, long)]
        watch: Option<u64>,
    },

    /// List news flagged as fake
    FakeNews {
        /// Category (all, Health, Finance, Environment, Science, Technology, Legal)
        #[arg(long, default_value = "all")]
        category: String,
        /// Match title or description
        #[arg(short, long)]
        search: Option<String>,
    },

    /// List verified news
    RealNews {
        #[arg(long, default_value = "all")]
        category: String,
        /// Impact level (all, critical, high, medium)
        #[arg(long, default_value = "all")]
        impact: String,
        #[arg(short, long)]
        search: Option<String>,
    },

    /// Verify a single claim
    Verify {
        /// Claim text
        claim: String,
    },

    /// Interactive verification chat
    Chat,

    /// Generate default config file
    Config {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => Config::load_with_env(path)?,
        None => Config::load_default(),
    };
    if let Some(url) = &cli.api_url {
        config.api.base_url = url.clone();
    }

    init_logging(&config.logging);

    let client = ApiClient::new(&config.api).context("Failed to create HTTP client")?;
    tracing::debug!("Using backend at {}", client.base_url());

    match cli.command {
        Commands::Dashboard { watch } => {
            let interval = watch
                .filter(|secs| *secs > 0)
                .map(Duration::from_secs)
                .or_else(|| config.dashboard.poll_interval());

            match interval {
                Some(every) => watch_dashboard(client, every, cli.format).await?,
                None => {
                    let snapshot = client
                        .dashboard_stats()
                        .await
                        .with_context(|| unreachable_hint(&client))?;
                    print_dashboard(&snapshot, cli.format)?;
                }
            }
        }

        Commands::FakeNews { category, search } => {
            let mut view: FeedView<FakeNewsItem> = FeedView::new();
            let filter = view.filter_mut();
            filter.select_category(CategoryFilter::parse(&category));
            filter.set_query(search.unwrap_or_default());

            let items = client
                .fake_news()
                .await
                .with_context(|| unreachable_hint(&client))?;
            view.settle::<crisistruth::ApiError>(Ok(items));
            print_fake_news(&view, cli.format)?;
        }

        Commands::RealNews {
            category,
            impact,
            search,
        } => {
            let mut view: FeedView<RealNewsItem> = FeedView::new();
            let filter = view.filter_mut();
            filter.select_category(CategoryFilter::parse(&category));
            filter.select_impact(ImpactFilter::parse(&impact).map_err(anyhow::Error::msg)?);
            filter.set_query(search.unwrap_or_default());

            let items = client
                .real_news()
                .await
                .with_context(|| unreachable_hint(&client))?;
            view.settle::<crisistruth::ApiError>(Ok(items));
            print_real_news(&view, cli.format)?;
        }

        Commands::Verify { claim } => {
            let mut session = ChatSession::new(chrono::Utc::now());
            session.set_input(claim);

            let Some(turn) = session.send(&client).await else {
                anyhow::bail!("Nothing to verify: the claim is empty");
            };
            print_turn(turn, cli.format)?;
            if turn.is_error {
                std::process::exit(1);
            }
        }

        Commands::Chat => run_chat(client, cli.format).await?,

        Commands::Config { output } => {
            let content = generate_default_config();
            match output {
                Some(path) => {
                    std::fs::write(&path, content)
                        .with_context(|| format!("Failed to write {:?}", path))?;
                    println!("Config written to {:?}", path);
                }
                None => print!("{}", content),
            }
        }
    }

    Ok(())
}

/// Logs go to stderr so `--format json` output stays parseable
fn init_logging(logging: &LoggingConfig) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| format!("crisistruth={}", logging.level).into());

    let registry = tracing_subscriber::registry().with(filter);
    if logging.format == "json" {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}

fn unreachable_hint(client: &ApiClient) -> String {
    format!(
        "Cannot reach the CrisisTruth backend at {}. Make sure it is running.",
        client.base_url()
    )
}

async fn watch_dashboard(client: ApiClient, every: Duration, format: OutputFormat) -> anyhow::Result<()> {
    let mut view = DashboardView::new();

    let _poller = Poller::start(
        every,
        move || {
            let client = client.clone();
            async move { client.dashboard_stats().await }
        },
        move |result| {
            view.begin_refresh();
            if view.settle(result) {
                if let Some(snapshot) = view.payload() {
                    if let Err(e) = print_dashboard(snapshot, format) {
                        tracing::error!("Failed to render dashboard: {}", e);
                    }
                }
            } else if view.shows_placeholder() {
                println!("Loading intelligence...");
            }
        },
    );

    tokio::signal::ctrl_c().await?;
    tracing::info!("Stopping dashboard refresh");
    Ok(())
}

async fn run_chat(client: ApiClient, format: OutputFormat) -> anyhow::Result<()> {
    let mut session = ChatSession::new(chrono::Utc::now());
    for turn in session.transcript() {
        print_turn(turn, format)?;
    }
    println!("(type a claim and press Enter; \"exit\" to quit)");

    let mut lines = tokio::io::BufReader::new(tokio::io::stdin()).lines();
    loop {
        let line = tokio::select! {
            line = lines.next_line() => line?,
            _ = tokio::signal::ctrl_c() => None,
        };
        let Some(line) = line else {
            break;
        };
        if matches!(line.trim(), "exit" | "quit") {
            break;
        }

        session.set_input(line);
        if !session.can_send() {
            continue;
        }
        if format == OutputFormat::Table {
            println!("{}", crisistruth::chat::TYPING_TEXT);
        }
        if let Some(turn) = session.send(&client).await {
            print_turn(turn, format)?;
        }
    }

    Ok(())
}

// ============================================
// Rendering
// ============================================

fn print_dashboard(snapshot: &DashboardSnapshot, format: OutputFormat) -> anyhow::Result<()> {
    if format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(snapshot)?);
        return Ok(());
    }

    println!("CrisisTruth AI - Intelligence Dashboard");
    println!("Threat level: {}", threat_badge(&snapshot.stats.threat_level));
    println!();
    for card in stat_cards(&snapshot.stats) {
        println!("  {} {:<15} {:>12}", card.icon, card.label, card.display_value());
    }

    if !snapshot.category_distribution.is_empty() {
        println!();
        println!("Topic Analysis");
        for bar in topic_bars(&snapshot.category_distribution) {
            println!("  {:<14} {}", bar.name, "█".repeat(topic_blocks(bar.height_px)));
        }
    }

    if !snapshot.trending_fake.is_empty() {
        println!();
        println!("Recent Deceptions");
        for item in &snapshot.trending_fake {
            println!("  {:>5}% FAKE  {}", item.fake_score, truncate_text(&item.title, 60));
        }
    }

    if !snapshot.trending_real.is_empty() {
        println!();
        println!("Verified Intel");
        for item in &snapshot.trending_real {
            println!("  VERIFIED     {}", truncate_text(&item.title, 60));
        }
    }
    println!();
    Ok(())
}

/// One block per 10px of bar height, never wider than a full plot
fn topic_blocks(height_px: f64) -> usize {
    let max = (TOPIC_CHART_HEIGHT / 10.0) as usize;
    ((height_px / 10.0).round().max(0.0) as usize).min(max)
}

fn print_fake_news(view: &FeedView<FakeNewsItem>, format: OutputFormat) -> anyhow::Result<()> {
    let visible = view.visible();
    if format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(&visible)?);
        return Ok(());
    }

    if visible.is_empty() {
        println!("No flagged news matches the current filters.");
        return Ok(());
    }

    println!(
        "{:<6} {:<10} {:<12} {:<8} {}",
        "ID", "Severity", "Category", "Score", "Title"
    );
    println!("{}", "-".repeat(90));
    for item in &visible {
        println!(
            "{:<6} {:<10} {:<12} {:<8.2} {}",
            item.id,
            item.severity,
            item.category,
            item.verdict_score,
            truncate_text(&item.title, 50)
        );
        if !item.real_evidence.is_empty() {
            println!("       {}", evidence_preview(&item.real_evidence, false).text);
        }
    }
    println!();
    println!("{} of {} items", visible.len(), view.items().len());
    Ok(())
}

fn print_real_news(view: &FeedView<RealNewsItem>, format: OutputFormat) -> anyhow::Result<()> {
    let visible = view.visible();
    if format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(&visible)?);
        return Ok(());
    }

    if visible.is_empty() {
        println!("No verified news matches the current filters.");
        return Ok(());
    }

    println!(
        "{:<6} {:<10} {:<12} {:<20} {}",
        "ID", "Impact", "Category", "Source", "Title"
    );
    println!("{}", "-".repeat(90));
    for item in &visible {
        println!(
            "{:<6} {:<10} {:<12} {:<20} {}",
            item.id,
            item.impact_level,
            item.category,
            truncate_text(&item.source_name, 18),
            truncate_text(&item.title, 40)
        );
    }
    println!();
    println!(
        "{} of {} items from {} sources",
        visible.len(),
        view.items().len(),
        distinct_sources(view.items())
    );
    Ok(())
}

fn print_turn(turn: &ChatTurn, format: OutputFormat) -> anyhow::Result<()> {
    if format == OutputFormat::Json {
        println!("{}", serde_json::to_string(turn)?);
        return Ok(());
    }

    let who = if turn.is_user() { "You" } else { "CrisisTruth AI" };
    println!("[{}] {}:", format_time(&turn.created_at), who);
    println!("  {}", turn.body);
    if let Some(verdict) = &turn.verdict {
        println!("  {} {}", verdict.tone().icon(), verdict.badge_text());
        println!("  Confidence: {}", verdict.confidence_score);
        println!("  Sources: {}", verdict.source_list.join(", "));
    }
    println!();
    Ok(())
}
