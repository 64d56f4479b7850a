#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

use std::io::{self, stdout};
use std::path::PathBuf;
use std::sync::Arc;
use std::sync::mpsc;

use clap::Parser;
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use daytrip::api::PlannerClient;
use daytrip::config::{AppConfig, SuggestionErrorPolicy};
use daytrip::logging::init_logging;
use daytrip::places::PlacesClient;
use daytrip::tui::{App, Job, JobRunner};

#[derive(Parser, Debug)]
#[command(name = "daytrip")]
#[command(about = "Terminal client for planning a trip itinerary")]
struct Args {
    /// Trip-planner service base URL
    #[arg(long, default_value = "http://localhost:8080")]
    server_url: String,

    /// Places API base URL
    #[arg(long, default_value = "https://maps.googleapis.com/maps/api/place")]
    places_url: String,

    /// Places API key
    #[arg(long, env = "PLACES_API_KEY", default_value = "")]
    places_key: String,

    /// Data directory for logs (default: platform data dir + /daytrip)
    #[arg(long)]
    data_dir: Option<PathBuf>,

    /// Log level (debug, info, warn, error)
    #[arg(long, default_value = "info")]
    log_level: String,

    /// How a failed suggested-location fetch is handled
    #[arg(long, value_enum, default_value = "silent")]
    suggestion_errors: SuggestionErrorPolicy,
}

fn default_data_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("daytrip")
}

#[cfg_attr(coverage_nightly, coverage(off))]
#[mutants::skip]
fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    let data_dir = args.data_dir.clone().unwrap_or_else(default_data_dir);
    init_logging(&data_dir, &args.log_level)?;

    let runtime = tokio::runtime::Runtime::new()?;
    let planner = Arc::new(PlannerClient::new(args.server_url)?);
    let places = Arc::new(PlacesClient::new(args.places_url, args.places_key)?);
    let (tx, rx) = mpsc::channel();
    let runner = JobRunner::new(runtime.handle().clone(), tx, planner, places);

    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = restore_terminal();
        original_hook(info);
    }));

    enable_raw_mode()?;
    execute!(stdout(), EnterAlternateScreen)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout()))?;

    let mut app = App::new(AppConfig {
        suggestion_errors: args.suggestion_errors,
    });
    runner.dispatch(Job::CheckAuth);
    let result = app.run(&mut terminal, &runner, &rx);

    let restore_result = restore_terminal();
    match result {
        Err(e) => Err(e.into()),
        Ok(()) => restore_result.map_err(Into::into),
    }
}

#[cfg_attr(coverage_nightly, coverage(off))]
#[mutants::skip]
fn restore_terminal() -> Result<(), io::Error> {
    let raw_result = disable_raw_mode();
    let screen_result = execute!(stdout(), LeaveAlternateScreen);
    raw_result.and(screen_result)
}
