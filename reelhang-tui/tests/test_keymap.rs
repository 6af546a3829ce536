//! Test keybinding mappings to actions
//!
//! Verifies that keyboard input is correctly mapped to actions
//! through the reducer.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use libreelhang::round::start_round;
use libreelhang::MovieRecord;
use rand::rngs::StdRng;
use rand::SeedableRng;
use reelhang_tui::app::{reduce, Action, AppState, Screen};

fn key_event(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
    KeyEvent::new(code, modifiers)
}

fn movie(title: &str) -> MovieRecord {
    MovieRecord {
        id: "1".to_string(),
        title: title.to_string(),
        image: None,
        url: None,
    }
}

fn state_with_active_round(title: &str) -> AppState {
    let candidates = vec![movie(title)];
    let mut rng = StdRng::seed_from_u64(1);
    let round = start_round(&candidates, &mut rng).unwrap();

    let state = reduce(AppState::new(), Action::CatalogLoaded(candidates));
    reduce(state, Action::RoundStarted(round))
}

#[test]
fn test_f1_toggles_help() {
    let state = AppState::new();
    assert!(!state.help_visible);

    let key = key_event(KeyCode::F(1), KeyModifiers::NONE);
    let state = reduce(state, Action::Key(key));
    assert!(state.help_visible);

    let key = key_event(KeyCode::F(1), KeyModifiers::NONE);
    let state = reduce(state, Action::Key(key));
    assert!(!state.help_visible);
}

#[test]
fn test_f3_navigates_to_gallery() {
    let state = AppState::new();
    assert_eq!(state.current_screen, Screen::Game);

    let key = key_event(KeyCode::F(3), KeyModifiers::NONE);
    let new_state = reduce(state, Action::Key(key));

    assert_eq!(new_state.current_screen, Screen::Gallery);
}

#[test]
fn test_f2_navigates_back_to_game() {
    let state = AppState::new();
    let state = reduce(state, Action::NavigateTo(Screen::Gallery));

    let key = key_event(KeyCode::F(2), KeyModifiers::NONE);
    let new_state = reduce(state, Action::Key(key));

    assert_eq!(new_state.current_screen, Screen::Game);
}

#[test]
fn test_esc_dismisses_error() {
    let state = reduce(AppState::new(), Action::ShowError("Test error".to_string()));

    let key = key_event(KeyCode::Esc, KeyModifiers::NONE);
    let new_state = reduce(state, Action::Key(key));

    assert!(new_state.error.is_none());
    assert!(!new_state.should_quit);
}

#[test]
fn test_esc_hides_help_before_quitting() {
    let state = reduce(AppState::new(), Action::ShowHelp);

    let key = key_event(KeyCode::Esc, KeyModifiers::NONE);
    let new_state = reduce(state, Action::Key(key));

    assert!(!new_state.help_visible);
    assert!(!new_state.should_quit);
}

#[test]
fn test_esc_quits_with_no_overlays() {
    let state = AppState::new();

    let key = key_event(KeyCode::Esc, KeyModifiers::NONE);
    let new_state = reduce(state, Action::Key(key));

    assert!(new_state.should_quit);
}

#[test]
fn test_letter_key_is_a_guess_during_round() {
    let state = state_with_active_round("Ponyo");

    let key = key_event(KeyCode::Char('p'), KeyModifiers::NONE);
    let new_state = reduce(state, Action::Key(key));

    let round = new_state.game.round.as_ref().unwrap();
    assert!(round.used_letters.contains(&'P'));
}

#[test]
fn test_shift_letter_is_also_a_guess() {
    let state = state_with_active_round("Ponyo");

    let key = key_event(KeyCode::Char('P'), KeyModifiers::SHIFT);
    let new_state = reduce(state, Action::Key(key));

    let round = new_state.game.round.as_ref().unwrap();
    assert!(round.used_letters.contains(&'P'));
}

#[test]
fn test_q_is_a_guess_not_a_quit_during_round() {
    let state = state_with_active_round("Ponyo");

    let key = key_event(KeyCode::Char('q'), KeyModifiers::NONE);
    let new_state = reduce(state, Action::Key(key));

    assert!(!new_state.should_quit);
    let round = new_state.game.round.as_ref().unwrap();
    assert!(round.used_letters.contains(&'Q'));
    assert_eq!(round.error_count, 1);
}

#[test]
fn test_q_quits_game_screen_without_round() {
    let state = AppState::new();

    let key = key_event(KeyCode::Char('q'), KeyModifiers::NONE);
    let new_state = reduce(state, Action::Key(key));

    assert!(new_state.should_quit);
}

#[test]
fn test_q_quits_gallery_screen() {
    let state = reduce(AppState::new(), Action::NavigateTo(Screen::Gallery));

    let key = key_event(KeyCode::Char('q'), KeyModifiers::NONE);
    let new_state = reduce(state, Action::Key(key));

    assert!(new_state.should_quit);
}

#[test]
fn test_letters_ignored_while_help_visible() {
    let state = reduce(state_with_active_round("Ponyo"), Action::ShowHelp);

    let key = key_event(KeyCode::Char('p'), KeyModifiers::NONE);
    let new_state = reduce(state, Action::Key(key));

    let round = new_state.game.round.as_ref().unwrap();
    assert!(round.used_letters.is_empty());
}

#[test]
fn test_letters_ignored_while_error_visible() {
    let state = reduce(
        state_with_active_round("Ponyo"),
        Action::ShowError("boom".to_string()),
    );

    let key = key_event(KeyCode::Char('p'), KeyModifiers::NONE);
    let new_state = reduce(state, Action::Key(key));

    let round = new_state.game.round.as_ref().unwrap();
    assert!(round.used_letters.is_empty());
}

#[test]
fn test_ctrl_letter_is_not_a_guess() {
    let state = state_with_active_round("Ponyo");

    let key = key_event(KeyCode::Char('p'), KeyModifiers::CONTROL);
    let new_state = reduce(state, Action::Key(key));

    let round = new_state.game.round.as_ref().unwrap();
    assert!(round.used_letters.is_empty());
}

#[test]
fn test_n_is_a_guess_during_active_round() {
    let state = state_with_active_round("Ponyo");

    let key = key_event(KeyCode::Char('n'), KeyModifiers::NONE);
    let new_state = reduce(state, Action::Key(key));

    // 'n' lands as a guess; the restart branch only applies once the
    // round has reached a terminal outcome.
    let round = new_state.game.round.as_ref().unwrap();
    assert!(round.used_letters.contains(&'N'));
    assert!(round.masked_progress.contains('N'));
}
