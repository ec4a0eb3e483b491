//! Render contract for typing sessions.
//!
//! The frontier and cursor split the passage into four contiguous regions:
//! correct `[0, frontier)`, incorrect `[frontier, cursor)`, the current
//! character at the cursor, and pending `(cursor, len)`. Renderers either
//! walk the passage character by character through [`TypingSession::render`]
//! or take the regions wholesale via [`TypingSession::segments`]. Styling is
//! entirely the renderer's concern.

use crate::session::TypingSession;

/// Display classification of a single passage character.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharState {
    /// Confirmed typed correctly.
    Correct,
    /// Attempted but not confirmed - sits between frontier and cursor.
    Incorrect,
    /// The character under the cursor.
    Current,
    /// Not yet reached.
    Pending,
}

/// Per-character context handed to a renderer closure.
pub struct RenderContext {
    pub ch: char,
    pub index: usize,
    pub state: CharState,
    pub has_cursor: bool,
}

/// The four regions of the passage, materialized as strings.
///
/// `current` is empty exactly when the cursor sits past the last character.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segments {
    pub correct: String,
    pub incorrect: String,
    pub current: String,
    pub pending: String,
}

impl TypingSession {
    /// Classify the character at `index` for display.
    pub fn state_of(&self, index: usize) -> CharState {
        if index < self.frontier() {
            CharState::Correct
        } else if index < self.cursor() {
            CharState::Incorrect
        } else if index == self.cursor() {
            CharState::Current
        } else {
            CharState::Pending
        }
    }

    /// Render every passage character through `renderer`, in order.
    pub fn render<T, F: FnMut(RenderContext) -> T>(&self, mut renderer: F) -> Vec<T> {
        let cursor = self.cursor();

        self.passage()
            .chars()
            .enumerate()
            .map(|(index, ch)| {
                renderer(RenderContext {
                    ch,
                    index,
                    state: self.state_of(index),
                    has_cursor: index == cursor,
                })
            })
            .collect()
    }

    /// Split the passage into its four display regions.
    pub fn segments(&self) -> Segments {
        let frontier = self.frontier();
        let cursor = self.cursor();
        let len = self.len();

        let (current, pending) = if cursor < len {
            (
                self.passage().slice(cursor..cursor + 1),
                self.passage().slice(cursor + 1..len),
            )
        } else {
            (String::new(), String::new())
        };

        Segments {
            correct: self.passage().slice(0..frontier),
            incorrect: self.passage().slice(frontier..cursor),
            current,
            pending,
        }
    }
}
