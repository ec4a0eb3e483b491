//! A library for building passage-typing practice tools.
//!
//! The pipeline is small and one-directional: raw text is normalized into a
//! [`Passage`], an [`AdjacencyMap`] indexes the indentation runs that may be
//! skipped, and a [`TypingSession`] consumes one decoded [`Key`] at a time,
//! moving its cursor and correctness frontier until the passage has been
//! typed correctly. The render contract in [`render`] turns that state into
//! four display regions; what they look like is up to the caller.

mod adjacency;
mod passage;
mod render;
mod session;

pub use adjacency::AdjacencyMap;
pub use passage::Passage;
pub use render::{CharState, RenderContext, Segments};
pub use session::{Key, Outcome, TypingSession};
