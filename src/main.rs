mod app;
mod config;
mod error;
mod event;
mod logging;
mod sim;
mod surface;
mod terminal;
mod ui;

use std::io;

use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

use app::App;
use config::Config;
use error::AppError;
use event::{Event, EventHandler};
use terminal::TerminalGuard;

fn main() -> Result<(), AppError> {
    logging::init_default()?;
    log::info!("rustroids {} starting", env!("CARGO_PKG_VERSION"));

    let config = Config::load_or_default(&Config::default_path());

    // Setup terminal; the guard restores it on every exit path.
    let guard = TerminalGuard::enter(io::stdout())?;
    let backend = CrosstermBackend::new(io::stdout());
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    let mut app = App::new(&config, guard.key_release);
    let result = run(&mut terminal, &mut app, &config);
    drop(guard);

    if let Err(e) = &result {
        log::error!("{}", e);
    }
    log::info!("exiting after {} ticks", app.sim.ticks);
    result
}

fn run(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    config: &Config,
) -> Result<(), AppError> {
    let event_handler = EventHandler::new(config.tick_rate());

    loop {
        terminal.draw(|frame| ui::render(frame, app))?;

        match event_handler.next()? {
            Event::Tick => app.on_tick(),
            Event::Key(key) => app.on_key(key),
        }

        if app.should_quit {
            return Ok(());
        }
    }
}
