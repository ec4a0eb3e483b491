//! Passage normalization.
//!
//! A [`Passage`] is the canonical form of the text a user is asked to type:
//! no leading blank lines, no trailing whitespace, and no spaces or tabs
//! sitting right before a newline. Normalization is idempotent, so feeding a
//! passage back through it changes nothing.

use std::ops::Range;

/// An immutable, normalized passage of text.
///
/// Positions index Unicode scalar values, `0..len`. The passage is built once
/// and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Passage {
    chars: Vec<char>,
}

impl Passage {
    /// Normalize raw text into a passage.
    ///
    /// Applied in order: strip leading blank lines, strip all trailing
    /// whitespace, then remove spaces/tabs immediately preceding each
    /// newline. A whitespace-only input normalizes to the empty passage.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use quill::Passage;
    ///
    /// let passage = Passage::normalize("   \n\n\ttest\n  ");
    /// assert_eq!(passage.to_string(), "test");
    /// ```
    pub fn normalize(raw: &str) -> Self {
        let text = strip_leading_blank(raw);
        let text = strip_trailing_whitespace(text);
        let text = strip_space_before_newlines(text);

        Self {
            chars: text.chars().collect(),
        }
    }

    /// Returns the number of characters in the passage.
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    /// Returns true if the passage contains no characters.
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// Returns the character at `index`, if within bounds.
    pub fn get(&self, index: usize) -> Option<char> {
        self.chars.get(index).copied()
    }

    /// Iterate over the passage characters in order.
    pub fn chars(&self) -> impl Iterator<Item = char> + '_ {
        self.chars.iter().copied()
    }

    /// Collect a character range into a string.
    ///
    /// Out-of-bounds ranges are clamped rather than panicking.
    pub fn slice(&self, range: Range<usize>) -> String {
        let start = range.start.min(self.chars.len());
        let end = range.end.clamp(start, self.chars.len());
        self.chars[start..end].iter().collect()
    }

    /// Index of the first character that is not a space or tab.
    ///
    /// Leading indentation on the very first line is skippable just like any
    /// other line's, so a session starts here. Returns `len` for the empty
    /// passage (and only then - a non-empty normalized passage always ends in
    /// a non-whitespace character).
    pub fn first_typeable(&self) -> usize {
        self.chars
            .iter()
            .position(|&ch| ch != ' ' && ch != '\t')
            .unwrap_or(self.chars.len())
    }
}

impl std::fmt::Display for Passage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.chars.iter().try_for_each(|ch| write!(f, "{ch}"))
    }
}

/// Remove leading blank lines.
///
/// Tracks the last newline seen; at the first character that is neither
/// newline, space nor tab, the text resumes right after that newline. Spaces
/// and tabs between that newline and the first real character are kept - they
/// are first-line indentation, handled by the skip map instead.
fn strip_leading_blank(text: &str) -> &str {
    let mut resume = 0;

    for (index, ch) in text.char_indices() {
        match ch {
            '\n' => resume = index + 1,
            ' ' | '\t' => {}
            _ => return &text[resume..],
        }
    }

    text
}

/// Remove all trailing newlines, spaces and tabs.
fn strip_trailing_whitespace(text: &str) -> &str {
    text.trim_end_matches(['\n', ' ', '\t'])
}

/// Remove spaces/tabs immediately preceding each newline.
///
/// This targets trailing whitespace on a line, never the indentation of the
/// following line.
fn strip_space_before_newlines(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut pending = String::new();

    for ch in text.chars() {
        match ch {
            ' ' | '\t' => pending.push(ch),
            '\n' => {
                pending.clear();
                out.push('\n');
            }
            _ => {
                out.push_str(&pending);
                pending.clear();
                out.push(ch);
            }
        }
    }

    out.push_str(&pending);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_basic() {
        let passage = Passage::normalize("test");
        assert_eq!(passage.to_string(), "test");
        assert_eq!(passage.len(), 4);
        assert_eq!(passage.first_typeable(), 0);
    }

    #[test]
    fn test_normalize_leading_blank_lines() {
        // Blank lines and their whitespace go away, up to the last newline
        // before the first real character
        let passage = Passage::normalize("   \n\n\ttest");
        assert_eq!(passage.to_string(), "\ttest");

        // First-line indentation without any newline is kept
        let passage = Passage::normalize("   testing");
        assert_eq!(passage.to_string(), "   testing");
        assert_eq!(passage.first_typeable(), 3);
    }

    #[test]
    fn test_normalize_trailing_whitespace() {
        let passage = Passage::normalize("test\n  \t\n");
        assert_eq!(passage.to_string(), "test");

        let passage = Passage::normalize("   \n\n\ttest\n  ");
        assert_eq!(passage.to_string(), "test");
    }

    #[test]
    fn test_normalize_space_before_newlines() {
        // Trailing whitespace on a line is dropped, the next line's
        // indentation is not
        let passage = Passage::normalize("for {   \n\tprint(1);\n}");
        assert_eq!(passage.to_string(), "for {\n\tprint(1);\n}");
    }

    #[test]
    fn test_normalize_whitespace_only() {
        let passage = Passage::normalize("   \n\n\t\n \t\n   \n");
        assert!(passage.is_empty());
        assert_eq!(passage.len(), 0);
        assert_eq!(passage.first_typeable(), 0);
    }

    #[test]
    fn test_normalize_mixed() {
        let passage = Passage::normalize("\n\n\n\n for i \n  print(1)  \t\nyes");
        assert_eq!(passage.to_string(), " for i\n  print(1)\nyes");
        assert_eq!(passage.first_typeable(), 1);
    }

    #[test]
    fn test_normalize_is_idempotent() {
        let inputs = [
            "",
            "test",
            "   \n\n\ttest\n  ",
            "   \n\n\t\n \t\n   testing  \n\n\t testing\n",
            "\n\n\n\n for i \n  print(1)  \t\nyes",
            "for {\n    print(1);\n\t}",
            " \t ",
            "a\n\nb",
        ];

        for input in inputs {
            let once = Passage::normalize(input);
            let twice = Passage::normalize(&once.to_string());
            assert_eq!(once, twice, "normalize not idempotent for {input:?}");
        }
    }

    #[test]
    fn test_slice_is_clamped() {
        let passage = Passage::normalize("abc");
        assert_eq!(passage.slice(0..2), "ab");
        assert_eq!(passage.slice(2..10), "c");
        assert_eq!(passage.slice(5..10), "");
    }

    #[test]
    fn test_get() {
        let passage = Passage::normalize("ab");
        assert_eq!(passage.get(0), Some('a'));
        assert_eq!(passage.get(1), Some('b'));
        assert_eq!(passage.get(2), None);
    }
}
