// Binary includes library modules - some public API items are only for library consumers
#![allow(unused)]

use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{bail, Context, Result};
use clap::Parser;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, layout::Rect, Terminal};
use tracing::info;

mod app;
mod data;
mod events;
mod logging;
mod settings;
mod ui;

use app::App;
use data::{Dashboard, Metric, TimeWindow};
use settings::Settings;
use ui::{ScreenLayout, Theme};

#[derive(Parser, Debug)]
#[command(name = "healthdash")]
#[command(about = "Terminal dashboard for exploring mock health metrics")]
struct Args {
    /// Settings file (TOML, YAML or JSON)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Seed for reproducible series
    #[arg(short, long)]
    seed: Option<u64>,

    /// Time window for new charts (e.g., "1 Week", "6m")
    #[arg(short, long)]
    window: Option<String>,

    /// Directory for log files (logging is off without it)
    #[arg(long)]
    log_dir: Option<PathBuf>,

    /// Write the selected charts to a JSON file and exit
    #[arg(short, long, requires = "metric")]
    export: Option<PathBuf>,

    /// Metric to select in export mode
    #[arg(short, long, requires = "export")]
    metric: Option<String>,

    /// Device to enable in export mode (repeatable)
    #[arg(short, long, requires = "metric")]
    device: Vec<String>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let mut settings = Settings::load(args.config.as_deref())?;
    if let Some(seed) = args.seed {
        settings.seed = Some(seed);
    }
    if let Some(ref window) = args.window {
        settings.default_window = window.clone();
    }
    if let Some(ref dir) = args.log_dir {
        settings.log_dir = Some(dir.clone());
    }

    // Keep the guard alive so buffered log lines are flushed on exit
    let _log_guard = match settings.log_dir {
        Some(ref dir) => Some(logging::init_tracing(dir)?),
        None => None,
    };

    let catalog = settings.catalog().context("invalid device catalog")?;
    let window = settings.window()?;
    info!(devices = catalog.devices().len(), %window, seed = ?settings.seed, "starting");

    let dashboard = Dashboard::new(catalog, window, settings.seed);

    // Handle export mode (non-interactive)
    if let Some(ref export_path) = args.export {
        return run_export(dashboard, &args, export_path);
    }

    run_tui(dashboard, Duration::from_millis(settings.refresh_ms))
}

/// Apply the requested selection and write it to `export_path`.
fn run_export(mut dashboard: Dashboard, args: &Args, export_path: &Path) -> Result<()> {
    let Some(ref metric) = args.metric else {
        bail!("--export requires --metric");
    };
    let metric: Metric = metric.parse()?;

    let window: Option<TimeWindow> = args.window.as_deref().map(str::parse).transpose()?;

    data::apply_selection(&mut dashboard, metric, &args.device, window)?;

    data::export_to_file(&dashboard, export_path)?;
    println!("Exported dashboard to: {}", export_path.display());
    Ok(())
}

/// Run the TUI on the given dashboard
fn run_tui(dashboard: Dashboard, poll_interval: Duration) -> Result<()> {
    // Detect the theme before raw mode takes over the terminal
    let theme = Theme::auto_detect();

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Setup panic hook to restore terminal
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture);
        original_hook(panic);
    }));

    let mut app = App::new(dashboard, theme);

    // Run the main loop
    let result = run_app(&mut terminal, &mut app, poll_interval);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    poll_interval: Duration,
) -> Result<()> {
    while app.running {
        terminal.draw(|frame| ui::draw(frame, app))?;

        // Poll for events with a short timeout so status messages expire
        if let Some(event) = events::poll_event(poll_interval)? {
            match event {
                Event::Key(key) => events::handle_key_event(app, key),
                Event::Mouse(mouse) => {
                    let size = terminal.size()?;
                    let layout = ScreenLayout::new(Rect::new(0, 0, size.width, size.height));
                    events::handle_mouse_event(app, mouse, &layout);
                }
                Event::Resize(_, _) => {
                    // Terminal will redraw on next iteration
                }
                _ => {}
            }
        }
    }

    info!("exiting");
    Ok(())
}
