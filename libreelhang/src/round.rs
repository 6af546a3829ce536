//! The guessing-round engine
//!
//! A round owns the secret movie title, the partially revealed progress
//! string, the letters used so far, and the error count. All transitions
//! are pure functions `(RoundState, input) -> RoundState`; randomness is
//! injected so callers (and tests) control title selection.

use std::collections::BTreeSet;

use rand::Rng;
use uuid::Uuid;

use crate::error::{ReelhangError, Result};
use crate::types::MovieRecord;

/// A round ends in a loss after this many wrong letters.
pub const MAX_ERRORS: u8 = 6;

/// Character standing in for an unrevealed letter position.
pub const PLACEHOLDER: char = '_';

/// Outcome of a round. `InProgress` is initial; `Won` and `Lost` are
/// terminal and only a fresh `start_round` leaves them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    InProgress,
    Won,
    Lost,
}

/// The single mutable aggregate of the game.
///
/// Invariants:
/// - `masked_progress` has the same character count as the upper-cased
///   secret title, with spaces always revealed.
/// - `error_count <= MAX_ERRORS`.
/// - Once the outcome is terminal, `used_letters` and `error_count` are
///   frozen until a new round replaces the state wholesale.
#[derive(Debug, Clone, PartialEq)]
pub struct RoundState {
    /// Round identifier, used only for tracing.
    pub id: Uuid,
    /// The chosen movie title, verbatim from the catalog record.
    pub secret_title: String,
    /// Upper-cased progress string; placeholders for unrevealed letters.
    pub masked_progress: String,
    /// Letters already selected this round. Grows monotonically.
    pub used_letters: BTreeSet<char>,
    /// Count of selected letters absent from the secret title.
    pub error_count: u8,
    pub outcome: Outcome,
}

impl RoundState {
    /// The secret title in the form guesses are scored against.
    pub fn secret_upper(&self) -> String {
        self.secret_title.to_uppercase()
    }

    pub fn is_terminal(&self) -> bool {
        self.outcome != Outcome::InProgress
    }
}

/// Start a new round from a non-empty candidate list.
///
/// Selects one record uniformly at random. Selection is memoryless, so a
/// restart may pick the same title again.
///
/// # Errors
///
/// Returns `ReelhangError::InvalidInput` if `candidates` is empty.
pub fn start_round<R: Rng + ?Sized>(
    candidates: &[MovieRecord],
    rng: &mut R,
) -> Result<RoundState> {
    if candidates.is_empty() {
        return Err(ReelhangError::InvalidInput(
            "cannot start a round from an empty candidate list".to_string(),
        ));
    }

    let chosen = &candidates[rng.gen_range(0..candidates.len())];
    let state = RoundState {
        id: Uuid::new_v4(),
        secret_title: chosen.title.clone(),
        masked_progress: mask_title(&chosen.title),
        used_letters: BTreeSet::new(),
        error_count: 0,
        outcome: Outcome::InProgress,
    };

    tracing::info!(
        round_id = %state.id,
        title_len = state.secret_title.chars().count(),
        "round started"
    );

    Ok(state)
}

/// Build the initial progress string: spaces pre-revealed, everything
/// else masked.
fn mask_title(title: &str) -> String {
    title
        .to_uppercase()
        .chars()
        .map(|ch| if ch == ' ' { ' ' } else { PLACEHOLDER })
        .collect()
}

/// Apply one letter selection to a round.
///
/// Pure transition. Repeated letters and input after a terminal outcome
/// are no-ops, not errors. Non-alphabetic input is ignored; the letter
/// grid only offers A-Z, so anything else is a caller bug we absorb.
pub fn select_letter(state: RoundState, letter: char) -> RoundState {
    let letter = letter.to_ascii_uppercase();
    if !letter.is_ascii_uppercase() {
        return state;
    }
    if state.is_terminal() || state.used_letters.contains(&letter) {
        return state;
    }

    let secret_upper = state.secret_upper();

    let mut used_letters = state.used_letters.clone();
    used_letters.insert(letter);

    // Per-selection scan of the secret: reveal every matching position,
    // leave the rest of the progress untouched.
    let masked_progress: String = secret_upper
        .chars()
        .zip(state.masked_progress.chars())
        .map(|(secret_ch, masked_ch)| {
            if secret_ch == letter {
                letter
            } else {
                masked_ch
            }
        })
        .collect();

    let hit = secret_upper.chars().any(|ch| ch == letter);
    let error_count = if hit {
        state.error_count
    } else {
        state.error_count + 1
    };

    // Won takes precedence. A wrong letter can never complete the word,
    // so Won and Lost are exclusive by construction; the ordering here is
    // a guard, not a tiebreak.
    let outcome = if masked_progress == secret_upper {
        Outcome::Won
    } else if error_count >= MAX_ERRORS {
        Outcome::Lost
    } else {
        Outcome::InProgress
    };

    tracing::debug!(
        round_id = %state.id,
        %letter,
        hit,
        error_count,
        "letter selected"
    );
    if outcome != Outcome::InProgress {
        tracing::info!(round_id = %state.id, ?outcome, "round finished");
    }

    RoundState {
        id: state.id,
        secret_title: state.secret_title,
        masked_progress,
        used_letters,
        error_count,
        outcome,
    }
}

const GALLOWS: [&str; 7] = [
    "  +---+\n  |   |\n      |\n      |\n      |\n      |\n=========",
    "  +---+\n  |   |\n  O   |\n      |\n      |\n      |\n=========",
    "  +---+\n  |   |\n  O   |\n  |   |\n      |\n      |\n=========",
    "  +---+\n  |   |\n  O   |\n /|   |\n      |\n      |\n=========",
    "  +---+\n  |   |\n  O   |\n /|\\  |\n      |\n      |\n=========",
    "  +---+\n  |   |\n  O   |\n /|\\  |\n /    |\n      |\n=========",
    "  +---+\n  |   |\n  O   |\n /|\\  |\n / \\  |\n      |\n=========",
];

/// ASCII gallows figure for a given error count. Counts above the
/// maximum clamp to the final figure.
pub fn progress_art(error_count: u8) -> &'static str {
    GALLOWS[usize::from(error_count.min(MAX_ERRORS))]
}
