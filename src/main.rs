use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEvent, MouseEvent},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, layout::Rect, Terminal};
use std::{
    fs::{self, OpenOptions},
    io,
    path::PathBuf,
    sync::Mutex,
    time::Duration,
};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use themedeck::catalog::Catalog;
use themedeck::config::Config;
use themedeck::logic::clock::Clock;
use themedeck::model::Model;

/// Theme catalog with a swipeable testimonial carousel
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Enable debug logging to /tmp/themedeck-debug.log
    #[arg(short, long)]
    debug: bool,

    /// Enable vim keybindings (h/l to page)
    #[arg(long)]
    vim: bool,

    /// Path to config file (default: platform-specific, see docs)
    #[arg(short, long)]
    config: Option<String>,

    /// Catalog file with themes and reviews (overrides config)
    #[arg(long)]
    catalog: Option<PathBuf>,

    /// Reviews per carousel page (overrides config)
    #[arg(long)]
    page_size: Option<usize>,
}

mod app;
mod handlers;
mod ui;
mod utils;

pub struct App {
    pub model: Model,

    /// Reference time for review timestamps
    pub clock: Clock,

    /// Drag units per terminal column
    pub cell_width: f64,

    /// Column where the current drag started (None when not dragging)
    pub drag_origin: Option<u16>,

    /// Carousel area from the last frame, for mouse hit-testing
    pub carousel_area: Option<Rect>,
}

impl App {
    fn new(config: &Config, catalog: Catalog) -> Self {
        Self {
            model: Model::new(catalog, config.model_options()),
            clock: config.clock(),
            cell_width: config.cell_width,
            drag_origin: None,
            carousel_area: None,
        }
    }

    fn handle_key(&mut self, key: KeyEvent) {
        handlers::keyboard::handle_key(self, key);
    }

    fn handle_mouse(&mut self, mouse: MouseEvent) {
        handlers::mouse::handle_mouse(self, mouse);
    }
}

/// Send tracing output to the debug log file; the terminal belongs to the TUI
fn init_debug_logging() -> Result<()> {
    let path = utils::get_debug_log_path();
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("Failed to open debug log {}", path.display()))?;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();

    Ok(())
}

/// Determine the config file path with fallback logic
///
/// Returns `None` when no config file exists; defaults are used then.
fn get_config_path(cli_path: Option<String>) -> Result<Option<PathBuf>> {
    // If CLI argument provided, it must exist
    if let Some(path) = cli_path {
        let p = PathBuf::from(&path);
        if p.exists() {
            return Ok(Some(p));
        } else {
            anyhow::bail!("Config file not found at specified path: {}", path);
        }
    }

    // Try ~/.config/themedeck/config.yaml
    if let Some(config_dir) = dirs::config_dir() {
        let config_path = config_dir.join("themedeck").join("config.yaml");
        if config_path.exists() {
            return Ok(Some(config_path));
        }
    }

    // Fallback to ./config.yaml
    let local_config = PathBuf::from("config.yaml");
    if local_config.exists() {
        return Ok(Some(local_config));
    }

    Ok(None)
}

fn load_config(args: &Args) -> Result<Config> {
    let mut config = match get_config_path(args.config.clone())? {
        Some(path) => {
            debug!("Loading config from: {:?}", path);
            let contents = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read config {}", path.display()))?;
            Config::from_yaml(&contents)
                .with_context(|| format!("Failed to parse config {}", path.display()))?
        }
        None => {
            debug!("No config file found, using defaults");
            Config::default()
        }
    };

    // Override config with CLI flags
    if args.vim {
        config.vim_mode = true;
    }
    if let Some(catalog) = &args.catalog {
        config.catalog_path = catalog.clone();
    }
    if let Some(page_size) = args.page_size {
        config.page_size = page_size;
    }

    config.validate()?;
    Ok(config)
}

fn main() -> Result<()> {
    let args = Args::parse();

    if args.debug {
        init_debug_logging()?;
        info!("Debug mode enabled");
    }

    let config = load_config(&args)?;

    let catalog = Catalog::load(&config.catalog_path).with_context(|| {
        format!("Failed to load catalog from {}", config.catalog_path.display())
    })?;
    info!(
        themes = catalog.themes.len(),
        reviews = catalog.reviews.len(),
        page_size = config.page_size,
        threshold = config.threshold(),
        "Catalog loaded"
    );

    let mut app = App::new(&config, catalog);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app with error handler
    let result = run_app(&mut terminal, &mut app);

    // Cleanup terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    // Return result after cleanup
    result
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> Result<()> {
    loop {
        terminal.draw(|f| {
            ui::render(f, app);
        })?;

        if app.model.ui.should_quit {
            break;
        }

        // Redraw at least every 250ms so relative timestamps stay current
        if event::poll(Duration::from_millis(250))? {
            match event::read()? {
                Event::Key(key) => app.handle_key(key),
                Event::Mouse(mouse) => app.handle_mouse(mouse),
                _ => {}
            }
        }
    }

    Ok(())
}
