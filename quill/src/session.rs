//! The keystroke-driven typing session.
//!
//! A [`TypingSession`] owns the normalized passage, the indentation skip map
//! and two indices: the cursor (the position the next keystroke is judged
//! against) and the frontier (the position up to which everything has been
//! confirmed correct). Every keystroke is one pure, synchronous transition;
//! the host event loop feeds events in and re-renders from the resulting
//! state. The invariant `first <= frontier <= cursor <= len` holds before and
//! after every event.

use crate::adjacency::AdjacencyMap;
use crate::passage::Passage;

/// A single decoded keystroke.
///
/// Decoding raw terminal events (including the ctrl-c cancel combination)
/// into these is the caller's job; the session itself never sees the input
/// backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    /// A printable character.
    Char(char),
    /// The return key, matching a literal newline in the passage.
    Enter,
    Backspace,
    /// The interrupt combination. Ends the session unconditionally.
    Cancel,
    /// Any key the session does not react to. Applying it changes nothing,
    /// but the caller still gets an outcome to re-render on.
    Other,
}

/// Result of applying one keystroke.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    InProgress,
    /// The frontier reached the end of the passage. Terminal.
    Complete,
    /// The user interrupted the session. Terminal.
    Cancelled,
}

/// State machine for typing a single passage.
#[derive(Debug, Clone)]
pub struct TypingSession {
    passage: Passage,
    adjacency: AdjacencyMap,
    /// First typeable position. The cursor never moves before it.
    first: usize,
    /// Everything before this position has been typed correctly.
    frontier: usize,
    /// Position the next keystroke is judged against.
    cursor: usize,
    cancelled: bool,
}

impl TypingSession {
    /// Create a session from raw text.
    ///
    /// The text is normalized first; leading indentation on the first line is
    /// skipped, so the session starts at the first typeable character. An
    /// input that normalizes to the empty passage yields a session that is
    /// complete from the start.
    pub fn new(raw: &str) -> Self {
        let passage = Passage::normalize(raw);
        let first = passage.first_typeable();
        let adjacency = AdjacencyMap::build(&passage, first);

        Self {
            passage,
            adjacency,
            first,
            frontier: first,
            cursor: first,
            cancelled: false,
        }
    }

    /// Apply one keystroke and report the session outcome.
    ///
    /// Cancel always reports [`Outcome::Cancelled`] and latches, regardless
    /// of prior state. Once the session is complete no further keystroke
    /// changes it. Backspace moves the cursor back (jumping a whole
    /// indentation run where the skip map has an edge) and can only shrink
    /// the frontier. A character or Enter keystroke advances the frontier
    /// exactly when the cursor sits on the frontier and the key matches the
    /// passage character there; a correctly typed newline also credits the
    /// indentation run that follows it. [`Key::Other`] is a no-op.
    pub fn apply(&mut self, key: Key) -> Outcome {
        if self.cancelled || key == Key::Cancel {
            self.cancelled = true;
            return Outcome::Cancelled;
        }

        if self.is_complete() {
            return Outcome::Complete;
        }

        match key {
            Key::Backspace => {
                self.cursor = self
                    .adjacency
                    .prev_skip(self.cursor)
                    .unwrap_or_else(|| self.cursor.saturating_sub(1).max(self.first));
                self.frontier = self.frontier.min(self.cursor);
            }
            Key::Char(_) | Key::Enter => {
                if self.frontier == self.cursor && self.matches(key) {
                    self.frontier += 1;
                }

                if let Some(target) = self.adjacency.next_skip(self.cursor) {
                    // The newline was typed correctly: credit the whole
                    // indentation run without requiring it to be typed
                    if self.frontier == self.cursor + 1 {
                        self.frontier = target;
                    }
                    self.cursor = target;
                } else {
                    self.cursor = (self.cursor + 1).min(self.passage.len());
                }
            }
            Key::Other => {}
            // Handled above
            Key::Cancel => {}
        }

        if self.is_complete() {
            Outcome::Complete
        } else {
            Outcome::InProgress
        }
    }

    /// Does `key` match the passage character under the cursor?
    fn matches(&self, key: Key) -> bool {
        match (key, self.passage.get(self.cursor)) {
            (Key::Enter, Some('\n')) => true,
            (Key::Char(typed), Some(expected)) => typed == expected,
            _ => false,
        }
    }

    /// The normalized passage being typed.
    pub fn passage(&self) -> &Passage {
        &self.passage
    }

    /// Passage length in characters.
    pub fn len(&self) -> usize {
        self.passage.len()
    }

    /// Returns true for the empty passage.
    pub fn is_empty(&self) -> bool {
        self.passage.is_empty()
    }

    /// First typeable position, fixed at session start.
    pub fn first_typeable(&self) -> usize {
        self.first
    }

    /// Position up to which every character is confirmed correct.
    pub fn frontier(&self) -> usize {
        self.frontier
    }

    /// Position currently being evaluated against the next keystroke.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Returns true when the whole passage has been typed correctly.
    pub fn is_complete(&self) -> bool {
        self.frontier == self.passage.len()
    }

    /// Returns true once a cancel keystroke has been applied.
    pub fn is_cancelled(&self) -> bool {
        self.cancelled
    }
}
