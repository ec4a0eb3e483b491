//! Bidirectional skip map over indentation runs.
//!
//! For every newline followed by a run of spaces/tabs, the map records a
//! shortcut from the newline to the first character after the run, and back.
//! The typing session uses it to jump over indentation in one step, in both
//! the typing and the backspacing direction.

use std::collections::HashMap;

use crate::passage::Passage;

/// Skip map built from all whitespace runs that follow a newline.
///
/// For every recorded edge `(a, b)`, `next_skip(a) == Some(b)` and
/// `prev_skip(b) == Some(a)`. Positions without an edge have no entry - only
/// runs *after* a newline are indexed, interior whitespace must be typed.
#[derive(Debug, Clone, Default)]
pub struct AdjacencyMap {
    next: HashMap<usize, usize>,
    prev: HashMap<usize, usize>,
}

impl AdjacencyMap {
    /// Scan the passage from `first` and index every indentation run.
    ///
    /// At each newline found at `i`, the spaces/tabs immediately following it
    /// are consumed; the edge runs from `i` to the first index past the run.
    /// The scan resumes after the run.
    pub fn build(passage: &Passage, first: usize) -> Self {
        let mut next = HashMap::new();
        let mut prev = HashMap::new();

        let mut i = first;
        while i < passage.len() {
            if passage.get(i) == Some('\n') {
                let mut j = i + 1;
                while matches!(passage.get(j), Some(' ' | '\t')) {
                    j += 1;
                }

                next.insert(i, j);
                prev.insert(j, i);
                i = j + 1;
            } else {
                i += 1;
            }
        }

        Self { next, prev }
    }

    /// Forward skip target for `position`, if the character there is a
    /// newline with an indexed run after it.
    pub fn next_skip(&self, position: usize) -> Option<usize> {
        self.next.get(&position).copied()
    }

    /// Backward skip target for `position`, if an indexed run ends there.
    pub fn prev_skip(&self, position: usize) -> Option<usize> {
        self.prev.get(&position).copied()
    }

    /// Returns true if no edges were indexed.
    pub fn is_empty(&self) -> bool {
        self.next.is_empty()
    }

    /// Number of indexed edges.
    pub fn len(&self) -> usize {
        self.next.len()
    }

    /// Iterate over all edges as `(newline_index, after_run_index)` pairs.
    pub fn edges(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.next.iter().map(|(&a, &b)| (a, b))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn build(text: &str) -> (Passage, AdjacencyMap) {
        let passage = Passage::normalize(text);
        let first = passage.first_typeable();
        let map = AdjacencyMap::build(&passage, first);
        (passage, map)
    }

    #[test]
    fn test_indentation_run_is_indexed() {
        // "a\n  b": newline at 1, run ends at 4 ('b')
        let (_, map) = build("a\n  b");
        assert_eq!(map.len(), 1);
        assert_eq!(map.next_skip(1), Some(4));
        assert_eq!(map.prev_skip(4), Some(1));
    }

    #[test]
    fn test_newline_without_run_gets_trivial_edge() {
        // "a\nb": the edge degenerates to a plain one-step advance
        let (_, map) = build("a\nb");
        assert_eq!(map.next_skip(1), Some(2));
        assert_eq!(map.prev_skip(2), Some(1));
    }

    #[test]
    fn test_interior_whitespace_is_not_indexed() {
        let (passage, map) = build("hello  world");
        assert!(map.is_empty());
        for i in 0..=passage.len() {
            assert_eq!(map.next_skip(i), None);
            assert_eq!(map.prev_skip(i), None);
        }
    }

    #[test]
    fn test_empty_passage() {
        let (passage, map) = build("   \n \t\n");
        assert!(passage.is_empty());
        assert!(map.is_empty());
        assert_eq!(map.len(), 0);
    }

    #[test]
    fn test_multiple_runs() {
        // " for i\n  print(1)\nyes" after normalization: newlines at 6 and
        // 17, runs ending at 9 and 18
        let (passage, map) = build("\n\n\n\n for i \n  print(1)  \t\nyes");
        assert_eq!(passage.to_string(), " for i\n  print(1)\nyes");
        assert_eq!(map.next_skip(6), Some(9));
        assert_eq!(map.prev_skip(9), Some(6));
        assert_eq!(map.next_skip(17), Some(18));
        assert_eq!(map.prev_skip(18), Some(17));
        assert_eq!(map.len(), 2);
    }

    #[test]
    fn test_edges_are_symmetric() {
        let inputs = [
            "a\n  b",
            "a\n\nb",
            "\tindent\n\t\tdeeper\nflat",
            " for i\n  print(1)\nyes",
            "plain text without newlines",
        ];

        for input in inputs {
            let (_, map) = build(input);
            for (a, b) in map.edges() {
                assert_eq!(map.prev_skip(b), Some(a), "asymmetric edge in {input:?}");
                assert_eq!(map.next_skip(a), Some(b));
            }
            // And nothing beyond the recorded edges
            assert_eq!(map.edges().count(), map.len());
        }
    }
}
