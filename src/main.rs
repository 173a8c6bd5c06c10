//! funcplot - a terminal function plotter.

use anyhow::Result;
use clap::Parser;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use funcplot::app::App;
use funcplot::input::{handle_key, Flow};
use funcplot::registry::Registry;
use funcplot::{ui, FuncplotError};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::fs::OpenOptions;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::time::Duration;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[derive(Parser, Debug)]
#[command(name = "funcplot", version)]
#[command(about = "Plot a function from a fixed list in the terminal", long_about = None)]
struct Args {
    /// Enable logging to specified file
    #[arg(long)]
    log: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Set up logging if --log option is provided
    if let Some(log_path) = &args.log {
        init_logging(log_path)?;
        tracing::info!("Starting funcplot");
    }

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let mut app = App::new(Registry::builtin());
    let res = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        tracing::error!("Event loop failed: {}", err);
        eprintln!("Error: {}", err);
    }

    tracing::info!("funcplot exited");

    Ok(())
}

fn init_logging(path: &Path) -> Result<()> {
    let file = OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(path)
        .map_err(|e| FuncplotError::log_file(path.to_path_buf(), e))?;

    let subscriber = FmtSubscriber::builder()
        .with_env_filter(EnvFilter::new("funcplot=debug"))
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()> {
    loop {
        if app.take_redraw() {
            terminal.draw(|f| ui::draw(f, app))?;
        }

        if event::poll(Duration::from_millis(100))? {
            match event::read()? {
                // Windows reports releases as well
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if handle_key(app, key) == Flow::Quit {
                        return Ok(());
                    }
                }
                Event::Resize(width, height) => app.handle_resize(width, height),
                _ => {}
            }
        }
    }
}
