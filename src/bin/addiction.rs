use addiction::game::ShuffleLimit;
use addiction::settings::Settings;
use addiction::tui::{app::AppState, controller};
use clap::Parser;
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use log::LevelFilter;
use ratatui::prelude::*;
use std::io::{self, IsTerminal, Stdout};
use std::path::PathBuf;
use std::time::Duration;

/// Addiction Solitaire in the terminal.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// YAML settings file; created or updated when settings are applied
    #[arg(long)]
    settings: Option<PathBuf>,

    /// Shuffles per game: a count or "unlimited" (overrides the settings file)
    #[arg(long)]
    shuffles: Option<ShuffleLimit>,

    /// Seed for reproducible deals (overrides the settings file)
    #[arg(long)]
    seed: Option<u64>,

    /// Write logs to this file
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Log level when --log-file is given
    #[arg(long, default_value_t = LevelFilter::Info)]
    log_level: LevelFilter,
}

impl Args {
    fn settings(&self) -> Settings {
        let mut settings = match &self.settings {
            Some(path) if path.exists() => Settings::load_or_default(path),
            _ => Settings::default(),
        };
        if let Some(shuffles) = self.shuffles {
            settings.shuffles = shuffles;
        }
        if self.seed.is_some() {
            settings.seed = self.seed;
        }
        settings
    }
}

fn setup_terminal() -> io::Result<Terminal<CrosstermBackend<Stdout>>> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    crossterm::execute!(stdout, crossterm::terminal::EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

fn restore_terminal(mut terminal: Terminal<CrosstermBackend<Stdout>>) -> io::Result<()> {
    disable_raw_mode()?;
    crossterm::execute!(terminal.backend_mut(), crossterm::terminal::LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}

fn main() -> io::Result<()> {
    let args = Args::parse();

    if let Some(path) = &args.log_file {
        if let Err(err) = addiction::logging::init(path, args.log_level) {
            eprintln!("logging disabled: {err}");
        }
    }

    if !io::stdout().is_terminal() {
        println!(
            "addiction TUI requires a real terminal (TTY).\nRun in Terminal and press q to quit. Version: {}",
            addiction::VERSION
        );
        return Ok(());
    }

    let settings = args.settings();
    log::info!("starting with {settings:?}");
    let mut terminal = setup_terminal()?;
    let tick_rate = Duration::from_millis(250);
    let mut app = AppState::new(settings, args.settings.clone());

    let res = controller::run(&mut terminal, &mut app, tick_rate);

    // Always attempt to restore terminal
    restore_terminal(terminal)?;
    res
}
