use ratatui::{
    backend::CrosstermBackend,
    crossterm::{
        event::{self, Event as TermEvent, KeyEventKind},
        execute,
        terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    },
    Terminal,
};
use std::io;
use std::sync::mpsc::{Receiver, Sender};
use std::sync::{mpsc, Arc, RwLock};

mod actions;
mod background;
mod dispatcher;
mod logger;
mod middleware;
mod reducers;
mod state;
mod theme;
mod view_models;
mod views;

use actions::{Action, Event, GlobalAction};
use background::SharedState;
use middleware::keyboard_middleware::KeyboardMiddleware;
use middleware::logging_middleware::LoggingMiddleware;
use middleware::search_middleware::SearchMiddleware;
use middleware::Middleware;
use repo_search_config::AppConfig;
use state::AppState;

fn main() -> anyhow::Result<()> {
    // Load .env first so the token fallback can see it
    dotenvy::dotenv().ok();

    logger::init();
    log::info!("Starting repo-search");

    let config = AppConfig::load();

    // Build the middleware chain before touching the terminal so a client
    // construction error surfaces as a plain message
    let search_middleware = SearchMiddleware::new(&config)?;
    let middleware: Vec<Box<dyn Middleware + Send>> = vec![
        Box::new(LoggingMiddleware::new()),
        Box::new(KeyboardMiddleware::new()),
        Box::new(search_middleware),
    ];

    // Channels: actions flow to the background worker, non-consumed
    // actions flow back to the main thread for reducing
    let (action_tx, action_rx) = mpsc::channel::<Action>();
    let (result_tx, result_rx) = mpsc::channel::<Action>();

    let mut app_state = AppState::new(config.query.clone());
    let shared_state: SharedState = Arc::new(RwLock::new(app_state.clone()));

    background::spawn_background_worker(
        action_rx,
        action_tx.clone(),
        result_tx,
        Arc::clone(&shared_state),
        middleware,
    );

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // The screen is up - this kicks off the initial search
    action_tx.send(Action::event(Event::ScreenPresented)).ok();

    let result = run_app(
        &mut terminal,
        &mut app_state,
        &shared_state,
        &action_tx,
        &result_rx,
    );

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = result {
        eprintln!("Error: {}", err);
    }

    log::info!("Exiting repo-search");
    Ok(())
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    state: &mut AppState,
    shared_state: &SharedState,
    action_tx: &Sender<Action>,
    result_rx: &Receiver<Action>,
) -> io::Result<()> {
    loop {
        // Apply actions the background worker forwarded for reducing
        let mut reduced = false;
        while let Ok(action) = result_rx.try_recv() {
            *state = reducers::app_reducer::reduce(state.clone(), &action);
            reduced = true;
        }
        if reduced {
            // Publish the new state snapshot for middleware reads
            if let Ok(mut shared) = shared_state.write() {
                *shared = state.clone();
            }
        }

        // Render
        terminal.draw(|frame| {
            let area = frame.area();
            views::render(state, area, frame);
        })?;

        // Check if we should quit
        if !state.running {
            break;
        }

        // Handle events
        if event::poll(std::time::Duration::from_millis(100))? {
            if let TermEvent::Key(key) = event::read()? {
                // Only process key press events (ignore key release)
                if key.kind == KeyEventKind::Press
                    && action_tx
                        .send(Action::Global(GlobalAction::KeyPressed(key)))
                        .is_err()
                {
                    break;
                }
            }
        }
    }

    Ok(())
}
