use std::io::stdout;
use std::path::PathBuf;

use clap::Parser;
use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;
use crossterm::terminal::{EnterAlternateScreen, LeaveAlternateScreen};

use tempo_dashboard::app::App;
use tempo_dashboard::calendar::YearMonth;

/// Tempo Dashboard — terminal month-view dashboard for personal
/// time-tracking data.
#[derive(Parser, Debug)]
#[command(name = "tempo-dashboard", version, about)]
struct Cli {
    /// Path to the metrics JSON file (omit for an undecorated calendar)
    #[arg(long)]
    data_file: Option<PathBuf>,

    /// Disable file watching (static mode)
    #[arg(long)]
    no_watch: bool,

    /// Month to open on, as YYYY-MM (defaults to the current month)
    #[arg(long, value_parser = parse_year_month)]
    month: Option<YearMonth>,
}

fn parse_year_month(s: &str) -> Result<YearMonth, String> {
    let (year, month) = s
        .split_once('-')
        .ok_or_else(|| format!("expected YYYY-MM, got {s:?}"))?;
    let year: i32 = year.parse().map_err(|_| format!("invalid year in {s:?}"))?;
    let month: u32 = month
        .parse()
        .map_err(|_| format!("invalid month in {s:?}"))?;
    YearMonth::new(year, month).map_err(|e| e.to_string())
}

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();

    // Set up logging to file (we own the terminal)
    let log_dir = std::env::var("TEMPO_DASHBOARD_LOG_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|_| std::env::temp_dir().join("tempo-dashboard"));
    std::fs::create_dir_all(&log_dir)?;

    let file_appender = tracing_appender::rolling::daily(&log_dir, "dashboard.log");
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);
    tracing_subscriber::fmt()
        .with_writer(non_blocking)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("tempo_dashboard=info".parse()?),
        )
        .init();

    // Install panic hook to restore terminal
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = execute!(stdout(), LeaveAlternateScreen, DisableMouseCapture);
        ratatui::restore();
        original_hook(panic_info);
    }));

    // Set up terminal with mouse capture enabled
    execute!(stdout(), EnterAlternateScreen, EnableMouseCapture)?;
    let mut terminal = ratatui::init();

    // Run the app
    let mut app = App::new(cli.data_file, cli.no_watch, cli.month)?;
    let result = app.run(&mut terminal).await;

    // Restore terminal — disable mouse capture before restoring
    execute!(stdout(), LeaveAlternateScreen, DisableMouseCapture)?;
    ratatui::restore();

    result
}
