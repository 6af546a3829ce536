//! reelhang-tui - terminal hangman over a movie catalog
//!
//! Owns the event loop: terminal events go through the pure reducer,
//! while network fetches and random round selection happen here and are
//! fed back in as actions.

use crossterm::event::{KeyCode, KeyModifiers};
use rand::thread_rng;

use libreelhang::identity::IdentityHandles;
use libreelhang::round::start_round;
use libreelhang::types::gallery_items;
use libreelhang::{Config, ReelhangError};

use reelhang_tui::{
    app::{event::EventHandler, reduce, Action, AppState, Screen},
    error::Result,
    services::{CatalogEvent, ServiceHandle},
    terminal::{install_panic_hook, restore_terminal, setup_terminal},
    ui,
};

fn main() -> Result<()> {
    libreelhang::logging::init_default();

    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(e.exit_code());
        }
    };

    // Identity handles are initialized once at startup and consumed by
    // nothing else; the game logic never touches them.
    let _identity = config.identity.as_ref().map(IdentityHandles::initialize);

    install_panic_hook();
    let mut terminal = setup_terminal()?;

    let result = run_app(&mut terminal, &config);

    restore_terminal(terminal)?;

    result
}

fn run_app(terminal: &mut reelhang_tui::terminal::Tui, config: &Config) -> Result<()> {
    let mut state = AppState::new();
    state.config.tick_rate_ms = config.ui.tick_rate_ms;

    let services = ServiceHandle::new(config.catalog.endpoint.clone())?;

    // In-flight fetches, one per screen. The game screen mounts first,
    // so its catalog read goes out immediately.
    state = reduce(state, Action::CatalogRequested);
    let mut game_rx = Some(services.fetch_films());
    let mut gallery_rx: Option<crossbeam_channel::Receiver<CatalogEvent>> = None;

    let event_handler = EventHandler::new(state.config.tick_rate_ms);

    loop {
        terminal.draw(|frame| {
            ui::render(frame, &state);
        })?;

        let tui_event = event_handler.next()?;

        // Round restarts need randomness, so they are handled here
        // instead of inside the pure reducer.
        let wants_new_round = matches!(
            &tui_event,
            reelhang_tui::app::event::TuiEvent::Key(key)
                if key.code == KeyCode::Char('n') && key.modifiers == KeyModifiers::NONE
        ) && state.current_screen == Screen::Game
            && !state.help_visible
            && state.error.is_none()
            && state.can_restart();

        let screen_before = state.current_screen;
        state = reduce(state, tui_event.into());

        if wants_new_round {
            state = dispatch_new_round(state);
        }

        // Entering the gallery counts as an activation: one fresh read
        if screen_before != Screen::Gallery
            && state.current_screen == Screen::Gallery
            && !state.gallery.loading
        {
            state = reduce(state, Action::GalleryRequested);
            gallery_rx = Some(services.fetch_films());
        }

        // Drain the game-screen fetch
        if let Some(rx) = game_rx.as_ref() {
            if let Ok(event) = rx.try_recv() {
                game_rx = None;
                state = match event {
                    CatalogEvent::Loaded(records) => {
                        let state = reduce(state, Action::CatalogLoaded(records));
                        dispatch_new_round(state)
                    }
                    CatalogEvent::Failed(error) => {
                        reduce(state, Action::CatalogFailed(error))
                    }
                };
            }
        }

        // Drain the gallery fetch; failures leave the list empty
        if let Some(rx) = gallery_rx.as_ref() {
            if let Ok(event) = rx.try_recv() {
                gallery_rx = None;
                state = match event {
                    CatalogEvent::Loaded(records) => {
                        reduce(state, Action::GalleryLoaded(gallery_items(&records)))
                    }
                    CatalogEvent::Failed(error) => {
                        tracing::warn!(%error, "gallery fetch failed, list stays empty");
                        reduce(state, Action::GalleryFailed(error))
                    }
                };
            }
        }

        if state.should_quit {
            break;
        }
    }

    Ok(())
}

/// Start a round from the current candidates and feed it back through
/// the reducer. An empty candidate list is surfaced as an error overlay.
fn dispatch_new_round(state: AppState) -> AppState {
    match start_round(&state.game.candidates, &mut thread_rng()) {
        Ok(round) => reduce(state, Action::RoundStarted(round)),
        Err(ReelhangError::InvalidInput(message)) => {
            reduce(state, Action::ShowError(message))
        }
        Err(e) => reduce(state, Action::ShowError(e.to_string())),
    }
}
