//! $Astro Dashboard CLI
//!
//! Command-line front end for the dashboard:
//! - Show the summary counters
//! - Show one page (or an address search) of the leaderboard
//! - Browse the leaderboard interactively
//! - Generate a config file

use anyhow::Context;
use astro_dashboard::client::{load_dashboard, DashboardClient, DashboardSource};
use astro_dashboard::config::{generate_default_config, Config, LoggingConfig};
use astro_dashboard::render::{render_dashboard, render_rows, render_summary};
use astro_dashboard::view::DashboardState;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "astro-dashboard")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Summary counters and address leaderboard for $Astro")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Config file (default: searched in the user config dir, then ./config.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Dashboard API host, overrides the config file
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table", global = true)]
    pub format: OutputFormat,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show the summary counters
    Summary,

    /// Show one page of the leaderboard
    List {
        /// Page number (1-based)
        #[arg(short, long, default_value = "1", value_parser = clap::value_parser!(u64).range(1..))]
        page: u64,
        /// Full owner address to look up (case-insensitive)
        #[arg(short, long, default_value = "")]
        search: String,
    },

    /// Browse the dashboard interactively
    Browse,

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
    if let Some(url) = &cli.base_url {
        config.endpoints.base_url = url.clone();
    }

    init_logging(&config.logging);
    tracing::debug!("astro-dashboard v{}", env!("CARGO_PKG_VERSION"));

    match cli.command {
        Commands::Summary => {
            let client = dashboard_client(&config)?;
            let mut state = DashboardState::new();
            state.apply_summary(client.fetch_summary().await);

            match cli.format {
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(state.summary())?),
                OutputFormat::Table => print!("{}", render_summary(state.summary())),
            }
            if let Some(e) = &state.errors().summary {
                eprintln!("warning: summary unavailable: {}", e);
            }
        }

        Commands::List { page, search } => {
            let client = dashboard_client(&config)?;
            let mut state = DashboardState::new();
            state.apply_list(client.fetch_list().await);
            state.set_search_term(search);
            if let Some(notice) = seek_page(&mut state, page) {
                eprintln!("{}", notice);
            }

            let mode = state.mode();
            let page_number = state.page_number();
            let rows = state.current_view();
            match cli.format {
                OutputFormat::Json => {
                    let body = serde_json::json!({
                        "mode": mode,
                        "page": page_number,
                        "rows": rows,
                    });
                    println!("{}", serde_json::to_string_pretty(&body)?);
                }
                OutputFormat::Table => print!("{}", render_rows(rows)),
            }
            if let Some(e) = &state.errors().list {
                eprintln!("warning: list unavailable: {}", e);
            }
        }

        Commands::Browse => browse(&dashboard_client(&config)?).await?,

        Commands::Config { output } => {
            let content = generate_default_config();
            match output {
                Some(path) => {
                    if let Some(parent) = path.parent() {
                        std::fs::create_dir_all(parent)?;
                    }
                    std::fs::write(&path, &content)
                        .with_context(|| format!("writing config to {:?}", path))?;
                    println!("Config written to {:?}", path);
                }
                None => print!("{}", content),
            }
        }
    }

    Ok(())
}

fn dashboard_client(config: &Config) -> anyhow::Result<DashboardClient> {
    let client = DashboardClient::new(config.endpoints.client_config())?;
    tracing::info!(base_url = %client.config().base_url, "Using dashboard API");
    Ok(client)
}

/// Step forward to `page` with Next. Returns a notice when the list ran out
/// first; nothing when the list failed to load or a search is active.
fn seek_page(state: &mut DashboardState, page: u64) -> Option<String> {
    for _ in 1..page {
        if !state.go_to_next_page() {
            break;
        }
    }

    let reached = state.page_number() as u64 == page;
    if reached || !state.pagination_visible() || state.errors().list.is_some() {
        return None;
    }
    Some(format!(
        "Page {} is past the end, showing page {}",
        page,
        state.page_number()
    ))
}

/// Interactive session: render, read a command, apply it, re-render
async fn browse(client: &DashboardClient) -> anyhow::Result<()> {
    let mut state = DashboardState::new();
    let load = load_dashboard(client).await;
    let mut last_refresh = load.fetched_at;
    load.apply(&mut state);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        print!("{}", render_dashboard(&mut state));
        println!("Last refresh: {}", last_refresh.format("%H:%M:%S"));
        println!("{}", BrowseCommand::HELP);

        let Some(line) = lines.next_line().await? else {
            break;
        };

        match BrowseCommand::parse(&line) {
            Some(BrowseCommand::Next) => {
                if !state.go_to_next_page() {
                    println!("(no next page)");
                }
            }
            Some(BrowseCommand::Prev) => {
                if !state.go_to_previous_page() {
                    println!("(no previous page)");
                }
            }
            Some(BrowseCommand::Search(term)) => state.set_search_term(term),
            Some(BrowseCommand::Clear) => state.set_search_term(""),
            Some(BrowseCommand::Refresh) => {
                let load = load_dashboard(client).await;
                last_refresh = load.fetched_at;
                load.apply(&mut state);
            }
            Some(BrowseCommand::Quit) => break,
            None => println!("Unknown command: {}", line.trim()),
        }
    }

    Ok(())
}

#[derive(Debug, PartialEq, Eq)]
enum BrowseCommand {
    Next,
    Prev,
    Search(String),
    Clear,
    Refresh,
    Quit,
}

impl BrowseCommand {
    const HELP: &'static str = "[n]ext  [p]rev  [s]earch <address>  clear  [r]efresh  [q]uit";

    fn parse(line: &str) -> Option<Self> {
        let line = line.trim();
        let (cmd, arg) = line.split_once(char::is_whitespace).unwrap_or((line, ""));

        match cmd.to_lowercase().as_str() {
            "n" | "next" => Some(BrowseCommand::Next),
            "p" | "prev" => Some(BrowseCommand::Prev),
            "s" | "search" => Some(BrowseCommand::Search(arg.trim().to_string())),
            "clear" => Some(BrowseCommand::Clear),
            "r" | "refresh" => Some(BrowseCommand::Refresh),
            "q" | "quit" | "exit" => Some(BrowseCommand::Quit),
            _ => None,
        }
    }
}

fn init_logging(logging: &LoggingConfig) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| format!("astro_dashboard={}", logging.level).into());

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

#[cfg(test)]
mod tests {
    use super::*;
    use astro_dashboard::model::{assign_indices, ListRecord};
    use astro_dashboard::DashboardError;

    fn leaderboard(count: usize) -> Vec<ListRecord> {
        assign_indices(
            (0..count)
                .map(|i| ListRecord::new(format!("0x{:040x}", i), "1"))
                .collect(),
        )
    }

    #[test]
    fn test_seek_page() {
        let mut state = DashboardState::new();
        state.apply_list(Ok(leaderboard(120)));
        assert_eq!(seek_page(&mut state, 2), None);
        assert_eq!(state.page_number(), 2);

        let mut state = DashboardState::new();
        state.apply_list(Ok(leaderboard(120)));
        assert_eq!(
            seek_page(&mut state, 9).as_deref(),
            Some("Page 9 is past the end, showing page 3")
        );
    }

    #[test]
    fn test_seek_page_quiet_when_list_failed() {
        let mut state = DashboardState::new();
        state.apply_list(Err(DashboardError::Timeout));

        assert_eq!(seek_page(&mut state, 4), None);
        assert_eq!(state.page_number(), 1);
    }

    #[test]
    fn test_parse_browse_commands() {
        assert_eq!(BrowseCommand::parse("n"), Some(BrowseCommand::Next));
        assert_eq!(BrowseCommand::parse("  PREV "), Some(BrowseCommand::Prev));
        assert_eq!(
            BrowseCommand::parse("s 0xABC"),
            Some(BrowseCommand::Search("0xABC".to_string()))
        );
        assert_eq!(
            BrowseCommand::parse("search"),
            Some(BrowseCommand::Search(String::new()))
        );
        assert_eq!(BrowseCommand::parse("q"), Some(BrowseCommand::Quit));
        assert_eq!(BrowseCommand::parse("jump 3"), None);
    }

    #[test]
    fn test_cli_rejects_page_zero() {
        assert!(Cli::try_parse_from(["astro-dashboard", "list", "--page", "0"]).is_err());

        let cli = Cli::try_parse_from(["astro-dashboard", "list", "-p", "3", "--format", "json"])
            .unwrap();
        assert!(matches!(cli.command, Commands::List { page: 3, .. }));
        assert!(cli.format == OutputFormat::Json);
    }
}
