mod app;
mod config;
mod error;
mod event;
mod series;
mod sim;
mod ui;

use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use log::info;
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

use app::App;
use config::SimConfig;
use event::{Event, EventHandler};

/// Two balls fall side by side, one integrated with Euler and one with Verlet.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// YAML scenario file; unset fields keep their defaults
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Gravitational acceleration (px per time unit squared)
    #[arg(long)]
    gravity: Option<f64>,

    /// Fixed integration step
    #[arg(long)]
    dt: Option<f64>,

    /// Frame clock period in milliseconds
    #[arg(long)]
    frame_ms: Option<u64>,

    /// Energy sample clock period in milliseconds
    #[arg(long)]
    sample_ms: Option<u64>,

    /// Log output; the terminal belongs to the UI
    #[arg(long, default_value = "bouncelab.log")]
    log_file: PathBuf,
}

impl Args {
    fn load_config(&self) -> error::Result<SimConfig> {
        let mut config = match &self.config {
            Some(path) => SimConfig::load(path)?,
            None => SimConfig::default(),
        };
        if let Some(g) = self.gravity {
            config.gravity = g;
        }
        if let Some(dt) = self.dt {
            config.dt = dt;
        }
        if let Some(ms) = self.frame_ms {
            config.frame_ms = ms;
        }
        if let Some(ms) = self.sample_ms {
            config.sample_ms = ms;
        }
        config.validate()?;
        Ok(config)
    }
}

fn init_logging(path: &Path) -> error::Result<()> {
    let file = File::create(path)?;
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .try_init()?;
    Ok(())
}

fn run(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App, events: &EventHandler) -> io::Result<()> {
    loop {
        match events.next()? {
            Event::Frame => app.frame(terminal)?,
            Event::Sample => app.sample(terminal)?,
            Event::Key(key) => app.on_key(key),
        }

        if app.should_quit {
            return Ok(());
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(&args.log_file)
        .with_context(|| format!("failed to open log file {}", args.log_file.display()))?;
    let config = args.load_config().context("invalid configuration")?;
    info!(
        "starting: g={} dt={} radius={} surface={}x{} frame={}ms sample={}ms",
        config.gravity,
        config.dt,
        config.ball_radius,
        config.surface.width,
        config.surface.height,
        config.frame_ms,
        config.sample_ms
    );

    // Setup terminal
    enable_raw_mode().context("terminal does not support raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    let mut app = App::new(&config);
    let events = EventHandler::new(config.frame_ms, config.sample_ms);
    let result = run(&mut terminal, &mut app, &events);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result.context("render loop failed")?;
    info!("bye");
    Ok(())
}
