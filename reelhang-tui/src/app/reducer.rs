//! Pure reducer function for state transitions
//!
//! `(State, Action) -> State` with no side effects. Network reads and
//! random title selection happen in the event loop and come back in as
//! `CatalogLoaded`/`RoundStarted` actions.

use crossterm::event::{KeyCode, KeyModifiers};
use libreelhang::round;

use super::actions::{Action, Screen};
use super::state::AppState;

/// Pure reducer function
///
/// Takes current state and an action, returns new state. Deterministic:
/// same inputs yield the same output.
pub fn reduce(state: AppState, action: Action) -> AppState {
    match action {
        // === UI Events ===
        Action::Key(key) => handle_key(state, key),
        Action::Tick => state,
        Action::Resize(_, _) => state, // Terminal auto-handles resize

        // === Navigation ===
        Action::NavigateTo(screen) => AppState {
            current_screen: screen,
            ..state
        },

        Action::Quit => AppState {
            should_quit: true,
            ..state
        },

        Action::ShowHelp => AppState {
            help_visible: true,
            ..state
        },

        Action::HideHelp => AppState {
            help_visible: false,
            ..state
        },

        // === Game screen ===
        Action::CatalogRequested => {
            let mut game = state.game.clone();
            game.loading = true;
            AppState { game, ..state }
        }

        Action::CatalogLoaded(candidates) => {
            let mut game = state.game.clone();
            game.loading = false;
            game.candidates = candidates;
            AppState { game, ..state }
        }

        Action::CatalogFailed(error) => {
            let mut game = state.game.clone();
            game.loading = false;
            // One user-facing notification, no retry, no fallback list.
            AppState {
                game,
                error: Some(error),
                ..state
            }
        }

        Action::RoundStarted(round) => {
            let mut game = state.game.clone();
            game.round = Some(round);
            AppState {
                game,
                status: None,
                ..state
            }
        }

        Action::LetterSelected(letter) => {
            let mut game = state.game.clone();
            match game.round.take() {
                Some(current) => {
                    game.round = Some(round::select_letter(current, letter));
                    AppState { game, ..state }
                }
                None => state,
            }
        }

        Action::NewRoundRequested => {
            // Needs randomness; the event loop runs start_round and
            // dispatches RoundStarted.
            state
        }

        // === Gallery screen ===
        Action::GalleryRequested => {
            let mut gallery = state.gallery.clone();
            gallery.loading = true;
            AppState { gallery, ..state }
        }

        Action::GalleryLoaded(items) => {
            let mut gallery = state.gallery.clone();
            gallery.loading = false;
            gallery.items = items;
            AppState { gallery, ..state }
        }

        Action::GalleryFailed(_) => {
            // The gallery swallows fetch failures: the list stays empty.
            let mut gallery = state.gallery.clone();
            gallery.loading = false;
            AppState { gallery, ..state }
        }

        // === Error Handling ===
        Action::ShowError(error) => AppState {
            error: Some(error),
            ..state
        },

        Action::DismissError => AppState {
            error: None,
            ..state
        },

        // === Status Bar ===
        Action::SetStatus(message) => AppState {
            status: Some(message),
            ..state
        },

        Action::ClearStatus => AppState {
            status: None,
            ..state
        },
    }
}

/// Handle keyboard input
///
/// Maps keys to high-level actions. This is where keybindings live.
/// During an active round every letter key is a guess, so quitting from
/// the game screen goes through Esc.
fn handle_key(state: AppState, key: crossterm::event::KeyEvent) -> AppState {
    // Global keybindings
    match (key.code, key.modifiers) {
        (KeyCode::F(1), _) => {
            let action = if state.help_visible {
                Action::HideHelp
            } else {
                Action::ShowHelp
            };
            return reduce(state, action);
        }

        (KeyCode::F(2), _) => {
            return reduce(state, Action::NavigateTo(Screen::Game));
        }
        (KeyCode::F(3), _) => {
            return reduce(state, Action::NavigateTo(Screen::Gallery));
        }

        // Esc: dismiss error, then help, then quit
        (KeyCode::Esc, _) => {
            let action = if state.error.is_some() {
                Action::DismissError
            } else if state.help_visible {
                Action::HideHelp
            } else {
                Action::Quit
            };
            return reduce(state, action);
        }

        _ => {}
    }

    if state.help_visible || state.error.is_some() {
        return state;
    }

    match state.current_screen {
        Screen::Game => handle_game_key(state, key),
        Screen::Gallery => handle_gallery_key(state, key),
    }
}

/// Handle game-screen keys
fn handle_game_key(state: AppState, key: crossterm::event::KeyEvent) -> AppState {
    match (key.code, key.modifiers) {
        (KeyCode::Char(ch), KeyModifiers::NONE | KeyModifiers::SHIFT)
            if ch.is_ascii_alphabetic() && state.can_guess() =>
        {
            reduce(state, Action::LetterSelected(ch.to_ascii_uppercase()))
        }

        // New round once the current one is over (or none has started)
        (KeyCode::Char('n'), KeyModifiers::NONE) if state.can_restart() => {
            reduce(state, Action::NewRoundRequested)
        }

        // 'q' only quits when it cannot be a guess
        (KeyCode::Char('q'), KeyModifiers::NONE) if !state.can_guess() => {
            reduce(state, Action::Quit)
        }

        _ => state,
    }
}

/// Handle gallery-screen keys
fn handle_gallery_key(state: AppState, key: crossterm::event::KeyEvent) -> AppState {
    match (key.code, key.modifiers) {
        (KeyCode::Char('q'), KeyModifiers::NONE) => reduce(state, Action::Quit),
        _ => state,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use libreelhang::round::start_round;
    use libreelhang::MovieRecord;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn candidates() -> Vec<MovieRecord> {
        vec![MovieRecord {
            id: "1".to_string(),
            title: "Ponyo".to_string(),
            image: None,
            url: None,
        }]
    }

    fn state_with_round() -> AppState {
        let mut rng = StdRng::seed_from_u64(5);
        let round = start_round(&candidates(), &mut rng).unwrap();
        let state = AppState::new();
        let state = reduce(state, Action::CatalogLoaded(candidates()));
        reduce(state, Action::RoundStarted(round))
    }

    #[test]
    fn test_reducer_is_pure() {
        let state = AppState::new();
        let state_clone = state.clone();

        let new_state = reduce(state_clone.clone(), Action::SetStatus("Test".to_string()));

        assert!(state_clone.status.is_none());
        assert_eq!(new_state.status, Some("Test".to_string()));
    }

    #[test]
    fn test_quit_action() {
        let state = AppState::new();
        assert!(!state.should_quit);

        let new_state = reduce(state, Action::Quit);
        assert!(new_state.should_quit);
    }

    #[test]
    fn test_catalog_flow() {
        let state = AppState::new();

        let state = reduce(state, Action::CatalogRequested);
        assert!(state.game.loading);

        let state = reduce(state, Action::CatalogLoaded(candidates()));
        assert!(!state.game.loading);
        assert_eq!(state.game.candidates.len(), 1);
    }

    #[test]
    fn test_catalog_failure_shows_error() {
        let state = AppState::new();
        let state = reduce(state, Action::CatalogRequested);

        let state = reduce(state, Action::CatalogFailed("no movies".to_string()));

        assert!(!state.game.loading);
        assert_eq!(state.error, Some("no movies".to_string()));
        assert!(state.game.candidates.is_empty());
    }

    #[test]
    fn test_gallery_failure_stays_silent() {
        let state = AppState::new();
        let state = reduce(state, Action::GalleryRequested);

        let state = reduce(state, Action::GalleryFailed("no movies".to_string()));

        assert!(!state.gallery.loading);
        assert!(state.gallery.items.is_empty());
        assert!(state.error.is_none());
    }

    #[test]
    fn test_letter_selected_advances_round() {
        let state = state_with_round();

        let state = reduce(state, Action::LetterSelected('P'));

        let round = state.game.round.as_ref().unwrap();
        assert!(round.used_letters.contains(&'P'));
        assert!(round.masked_progress.starts_with('P'));
    }

    #[test]
    fn test_letter_selected_without_round_is_noop() {
        let state = AppState::new();
        let new_state = reduce(state.clone(), Action::LetterSelected('P'));

        assert!(new_state.game.round.is_none());
    }

    #[test]
    fn test_round_started_replaces_round_wholesale() {
        let state = state_with_round();
        let first_id = state.game.round.as_ref().unwrap().id;
        let state = reduce(state, Action::LetterSelected('X'));

        let mut rng = StdRng::seed_from_u64(9);
        let fresh = start_round(&candidates(), &mut rng).unwrap();
        let state = reduce(state, Action::RoundStarted(fresh));

        let round = state.game.round.as_ref().unwrap();
        assert_ne!(round.id, first_id);
        assert_eq!(round.error_count, 0);
        assert!(round.used_letters.is_empty());
    }
}
