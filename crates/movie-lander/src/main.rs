use anyhow::{Context, Result};
use ratatui::{
    backend::CrosstermBackend,
    crossterm::{
        event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind},
        execute,
        terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    },
    Terminal,
};
use std::cell::RefCell;
use std::io;
use std::rc::Rc;
use std::time::Duration;

mod actions;
mod connect;
mod data;
mod dispatcher;
mod domain_models;
mod logger;
mod middleware;
mod reducers;
mod state;
mod store;
mod view_models;
mod views;

use actions::{Action, GlobalAction};
use connect::{select_app_props, AppProps, Connect};
use domain_models::Movie;
use middleware::{KeyboardMiddleware, LoggingMiddleware, SearchMiddleware};
use movie_lander_config::AppConfig;
use state::AppState;
use store::Store;
use views::AppView;

type Binding = Rc<RefCell<Connect<AppProps>>>;

fn main() -> Result<()> {
    let log_file = logger::init()?;

    log::info!("Starting movie-lander, logging to {}", log_file.display());

    let app_config = AppConfig::load();
    let dataset = data::load_dataset(app_config.dataset_path.as_deref())
        .context("Failed to load movie dataset")?;
    let catalog = data::load_catalog(app_config.catalog_path.as_deref())
        .context("Failed to load search catalog")?;

    // Initialize store with middleware
    let mut store = Store::new(AppState::with_config(app_config));

    // Add middleware in order (they execute in this order)
    store.add_middleware(Box::new(LoggingMiddleware::new()));
    store.add_middleware(Box::new(KeyboardMiddleware::new()));
    store.add_middleware(Box::new(SearchMiddleware::new(catalog)));

    // Bind the app view to the store
    let binding: Binding = Rc::new(RefCell::new(Connect::new(
        select_app_props,
        store.dispatcher().clone(),
    )));
    binding.borrow_mut().on_state_change(store.state());
    let bound = Rc::clone(&binding);
    let subscription = store.subscribe(move |state| {
        bound.borrow_mut().on_state_change(state);
    });

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Main event loop
    let result = run_app(&mut terminal, &mut store, &binding, &dataset);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen, DisableMouseCapture)?;
    terminal.show_cursor()?;

    subscription.unsubscribe();

    if let Err(err) = &result {
        log::error!("Exiting with error: {:#}", err);
    }
    log::info!("Exiting movie-lander");
    result
}

/// Current props of the app view
fn current_props(binding: &Binding) -> AppProps {
    binding.borrow().props().cloned().unwrap_or_default()
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    store: &mut Store,
    binding: &Binding,
    dataset: &[Movie],
) -> Result<()> {
    let dispatcher = binding.borrow().dispatcher().clone();
    let poll_interval = Duration::from_millis(store.state().app_config.poll_interval_ms);

    let mut view = AppView::new();
    view.mount(dataset, &dispatcher);
    store.process_pending();

    let mut needs_redraw = true;
    loop {
        let dirty = binding.borrow_mut().take_dirty();
        if dirty || needs_redraw {
            let props = current_props(binding);
            let theme = &store.state().theme;
            terminal.draw(|frame| {
                let area = frame.area();
                view.render(frame, area, &props, theme);
            })?;
            needs_redraw = false;
        }

        // Check if we should quit
        if !store.state().running {
            break;
        }

        // Handle events
        if event::poll(poll_interval)? {
            let props = current_props(binding);
            match event::read()? {
                // Only process key press events (ignore key release)
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    let outcome = view.handle_key(&key, &props, &dispatcher);
                    if !outcome.is_handled() {
                        dispatcher.dispatch(Action::Global(GlobalAction::KeyPressed(key)));
                    }
                    needs_redraw = outcome.needs_redraw();
                }
                Event::Mouse(mouse) => {
                    needs_redraw = view.handle_mouse(&mouse, &props, &dispatcher).needs_redraw();
                }
                Event::Resize(_, _) => needs_redraw = true,
                _ => {}
            }
        }

        store.process_pending();
    }

    Ok(())
}
