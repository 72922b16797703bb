use std::io::stdout;
use std::path::PathBuf;

use clap::Parser;
use color_eyre::Result;
use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;
use ratatui::DefaultTerminal;

use snipdeck::App;
use snipdeck::config::load_config;
use snipdeck::library::load_library;

/// Browse and run shell snippets in the terminal
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Snippet library (TOML, or JSON with a .json extension).
    /// Defaults to ~/.config/snipdeck/snippets.toml
    library: Option<PathBuf>,
}

fn main() -> Result<()> {
    // Install color-eyre panic hook for better error messages
    color_eyre::install()?;

    let args = Args::parse();

    #[cfg(debug_assertions)]
    init_logging();

    // Load everything before touching the terminal so errors print normally
    let config_result = load_config();
    let library = load_library(args.library.as_deref())?;

    let mut app = App::new(library, &config_result.config);
    if let Some(warning) = config_result.warning {
        app.notification.show_warning(&warning);
    }

    // Initialize terminal (handles raw mode, alternate screen, etc.)
    let terminal = ratatui::init();

    let result = run(terminal, &mut app);

    // Restore terminal (automatic cleanup)
    let _ = execute!(stdout(), DisableMouseCapture);
    ratatui::restore();

    result?;

    // Print the chosen snippet once the alternate screen is gone
    if let Some(body) = app.take_output() {
        println!("{}", body);
    }

    Ok(())
}

fn run(mut terminal: DefaultTerminal, app: &mut App) -> Result<()> {
    execute!(stdout(), EnableMouseCapture)?;

    loop {
        // Render the UI
        terminal.draw(|frame| app.render(frame))?;

        // A tooltip measured in this frame gets placed and drawn right away
        if app.on_frame_rendered() {
            continue;
        }

        app.handle_events()?;

        if app.should_quit() {
            break;
        }
    }

    Ok(())
}

/// Debug builds log to a file; stderr would draw over the alternate screen.
#[cfg(debug_assertions)]
fn init_logging() {
    let path = std::env::temp_dir().join("snipdeck-debug.log");
    let Ok(file) = std::fs::File::create(&path) else {
        return;
    };
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .try_init();
}
