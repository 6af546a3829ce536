//! Actions for the reducer pattern
//!
//! All state transitions are triggered by actions. Actions are immutable
//! descriptions of what happened; the reducer applies them to state.

use crossterm::event::KeyEvent;
use libreelhang::{GalleryItem, MovieRecord, RoundState};

/// Actions that trigger state transitions
#[derive(Debug, Clone)]
pub enum Action {
    // === UI Events ===
    /// Keyboard input event
    Key(KeyEvent),

    /// Periodic tick
    Tick,

    /// Terminal resize event
    Resize(u16, u16),

    // === Navigation ===
    /// Navigate to a different screen
    NavigateTo(Screen),

    /// Quit the application
    Quit,

    /// Show help overlay
    ShowHelp,

    /// Hide help overlay
    HideHelp,

    // === Game screen ===
    /// Catalog fetch for the game screen has been started
    CatalogRequested,

    /// Catalog fetch resolved with the candidate list
    CatalogLoaded(Vec<MovieRecord>),

    /// Catalog fetch failed; the game stays unplayable this activation
    CatalogFailed(String),

    /// A fresh round has been created from the candidates
    RoundStarted(RoundState),

    /// Player selected a letter from the grid
    LetterSelected(char),

    /// Player asked for a new round after a terminal outcome.
    /// Handled outside the reducer (needs randomness).
    NewRoundRequested,

    // === Gallery screen ===
    /// Gallery fetch has been started
    GalleryRequested,

    /// Gallery fetch resolved with derived tiles
    GalleryLoaded(Vec<GalleryItem>),

    /// Gallery fetch failed; the list silently stays empty
    GalleryFailed(String),

    // === Error Handling ===
    /// Show error overlay
    ShowError(String),

    /// Dismiss error overlay
    DismissError,

    // === Status Bar ===
    /// Update status message
    SetStatus(String),

    /// Clear status message
    ClearStatus,
}

/// Screen/View identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    /// The guessing game
    Game,

    /// The movie gallery
    Gallery,
}
