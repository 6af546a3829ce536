//! Application module
//!
//! Contains the core application architecture:
//! - Actions: What can happen
//! - State: What is true right now
//! - Reducer: Pure function (State, Action) -> State
//!
//! Randomness and network I/O stay outside the reducer; the event loop
//! in `main` performs those side effects and feeds results back in as
//! actions.

pub mod actions;
pub mod event;
pub mod reducer;
pub mod state;

// Re-export commonly used types
pub use actions::{Action, Screen};
pub use reducer::reduce;
pub use state::{AppState, GalleryScreenState, GameScreenState, UiConfig};
