//! TratonAI terminal driver - composition root.
//!
//! 1. Parse CLI args and load configuration from TOML
//! 2. Initialize tracing
//! 3. Open a conversation session
//! 4. Answer one `--query`, or read questions from stdin until EOF or `/quit`

mod cli;

use clap::Parser;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};

use traton_chat::{ConversationSession, SubmitOutcome, QUICK_ACTIONS, TYPING_INDICATOR};
use traton_core::config::TratonConfig;
use traton_core::types::{ChartPayload, Message};

use cli::CliArgs;

fn init_tracing(level: &str) {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level)),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn print_message(message: &Message) {
    println!("[{}] {}", message.role, message.created_at.format("%H:%M:%S"));
    println!("{}", message.content);
    for line in chart_lines(&message.chart) {
        println!("{}", line);
    }
    println!();
}

/// Plain-text rendition of a chart payload.
fn chart_lines(chart: &ChartPayload) -> Vec<String> {
    match chart {
        ChartPayload::None => Vec::new(),
        ChartPayload::BarPair {
            ocean_series,
            depth_series,
        } => {
            let mut lines = vec!["Salinity by Ocean Basin (PSU)".to_string()];
            lines.extend(ocean_series.iter().map(|o| {
                format!("  {:<12} {:>6.2}  {}", o.ocean_name, o.salinity_psu, o.region)
            }));
            lines.push("Salinity by Depth Layer (PSU)".to_string());
            lines.extend(
                depth_series
                    .iter()
                    .map(|d| format!("  {:<12} {:>6.2}", d.depth_label, d.salinity_psu)),
            );
            lines
        }
        ChartPayload::LineSeries { points } => {
            let mut lines = vec!["Temperature Trends (°C)".to_string()];
            lines.extend(
                points
                    .iter()
                    .map(|p| format!("  {:<12} {:>6.1}", p.month_label, p.temperature_c)),
            );
            lines
        }
    }
}

/// Submit one line and print everything the session appended for it.
async fn exchange(session: &mut ConversationSession, text: &str) {
    let before = session.message_count();
    match session.submit(text) {
        SubmitOutcome::Accepted => {}
        SubmitOutcome::RejectedEmpty => return,
        SubmitOutcome::RejectedPending => {
            tracing::warn!("Still waiting on the previous answer");
            return;
        }
    }

    eprintln!("{}", TYPING_INDICATOR);
    session.wait_for_reply().await;

    for message in session.messages().iter().skip(before + 1) {
        print_message(message);
    }
}

async fn run_interactive(session: &mut ConversationSession) -> std::io::Result<()> {
    for message in session.messages() {
        print_message(&message);
    }

    answer_lines(session, BufReader::new(tokio::io::stdin())).await
}

/// Feed each input line to the session until EOF or `/quit`.
///
/// `next_line` already drops the line terminator; the rest is submitted as typed.
async fn answer_lines<R>(session: &mut ConversationSession, reader: R) -> std::io::Result<()>
where
    R: AsyncBufRead + Unpin,
{
    let mut lines = reader.lines();
    while let Some(line) = lines.next_line().await? {
        if line.trim() == "/quit" {
            break;
        }
        exchange(session, &line).await;
    }
    Ok(())
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = CliArgs::parse();

    // Config is read before tracing exists so the configured level can apply.
    let config_file = args.resolve_config_path();
    let (mut config, load_error) = match TratonConfig::load(&config_file) {
        Ok(config) => (config, None),
        Err(e) => (TratonConfig::default(), Some(e)),
    };

    init_tracing(&args.resolve_log_level(&config.general.log_level));
    tracing::info!("Starting TratonAI v{}", env!("CARGO_PKG_VERSION"));
    match load_error {
        Some(e) => tracing::warn!(
            path = %config_file.display(),
            error = %e,
            "Failed to load config. Using defaults."
        ),
        None => tracing::info!(path = %config_file.display(), "Configuration loaded"),
    }

    if args.suggestions {
        for action in QUICK_ACTIONS {
            println!("{:<12} {}", action.label, action.query);
        }
        return Ok(());
    }

    config.chat.thinking_delay_ms = args.resolve_delay_ms(config.chat.thinking_delay_ms);

    if let Some(ref query) = args.query {
        config.chat.show_welcome = false;
        let mut session = ConversationSession::from_config(&config.chat);
        exchange(&mut session, query).await;
        session.close();
        return Ok(());
    }

    let mut session = ConversationSession::from_config(&config.chat);
    run_interactive(&mut session).await?;
    session.close();

    tracing::info!("TratonAI shut down");
    Ok(())
}
