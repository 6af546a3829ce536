//! Application state
//!
//! Immutable state structure; all transitions happen through the reducer
//! (see `reducer.rs`).

use libreelhang::{GalleryItem, MovieRecord, RoundState};

use super::actions::Screen;

/// Root application state
///
/// Single source of truth for the whole application. Transitions are
/// pure functions returning new state values.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Should the application quit?
    pub should_quit: bool,

    /// Current active screen
    pub current_screen: Screen,

    /// Help overlay visible?
    pub help_visible: bool,

    /// Game screen state
    pub game: GameScreenState,

    /// Gallery screen state
    pub gallery: GalleryScreenState,

    /// Error overlay state
    pub error: Option<String>,

    /// Status bar message
    pub status: Option<String>,

    /// UI configuration
    pub config: UiConfig,
}

/// Game screen state
///
/// The candidate list survives across rounds within one activation;
/// the round itself is replaced wholesale on restart.
#[derive(Debug, Clone, Default)]
pub struct GameScreenState {
    /// Catalog fetch in flight?
    pub loading: bool,

    /// Movie pool the secret title is drawn from
    pub candidates: Vec<MovieRecord>,

    /// The active round, if one has been started
    pub round: Option<RoundState>,
}

/// Gallery screen state
#[derive(Debug, Clone, Default)]
pub struct GalleryScreenState {
    /// Catalog fetch in flight?
    pub loading: bool,

    /// Derived tiles; stays empty when the fetch fails
    pub items: Vec<GalleryItem>,
}

/// UI configuration
#[derive(Debug, Clone)]
pub struct UiConfig {
    /// Use unicode symbols (false = ASCII fallback)
    pub unicode_enabled: bool,

    /// Tick rate in milliseconds
    pub tick_rate_ms: u64,
}

impl Default for UiConfig {
    fn default() -> Self {
        let unicode_enabled = std::env::var("NO_COLOR").is_err();

        let tick_rate_ms = std::env::var("REELHANG_TUI_TICK_MS")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(100);

        Self {
            unicode_enabled,
            tick_rate_ms,
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            should_quit: false,
            current_screen: Screen::Game,
            help_visible: false,
            game: GameScreenState::default(),
            gallery: GalleryScreenState::default(),
            error: None,
            status: None,
            config: UiConfig::default(),
        }
    }
}

impl AppState {
    /// Create new application state with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Check whether letter input should currently be accepted.
    pub fn can_guess(&self) -> bool {
        self.current_screen == Screen::Game
            && !self.help_visible
            && self.error.is_none()
            && self
                .game
                .round
                .as_ref()
                .is_some_and(|round| !round.is_terminal())
    }

    /// Check whether a new round can be requested: candidates are loaded
    /// and no round is running.
    pub fn can_restart(&self) -> bool {
        !self.game.candidates.is_empty()
            && self
                .game
                .round
                .as_ref()
                .map_or(true, |round| round.is_terminal())
    }
}
