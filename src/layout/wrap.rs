//! Greedy paragraph wrapping.

use alloc::string::String;
use alloc::vec::Vec;

/// Wrap `text` into lines no wider than `max_width`.
///
/// `measure` returns the rendered pixel width of a fragment for the active
/// font. Words split on whitespace and pack greedily: when the next word
/// would push the running width past `max_width`, the current line closes
/// and the word opens a new one. The first word of a line is taken
/// unconditionally, so a single word wider than `max_width` produces an
/// overflowing line; detecting that is the caller's job.
///
/// This is nowhere near Knuth and Plass. There is no hyphenation and no
/// look-ahead, which keeps it one linear pass over the words.
pub fn wrap<M>(text: &str, max_width: u32, measure: M) -> Vec<String>
where
    M: Fn(&str) -> u32,
{
    let mut lines = Vec::new();
    let mut words = text.split_whitespace();
    let Some(first) = words.next() else {
        return lines;
    };

    // The space width holds for the duration of one call.
    let space_width = measure(" ");

    let mut line = String::from(first);
    let mut used = measure(first);

    for word in words {
        let word_width = measure(word);
        if used + space_width + word_width > max_width {
            lines.push(line);
            line = String::from(word);
            used = word_width;
        } else {
            line.push(' ');
            line.push_str(word);
            used += space_width + word_width;
        }
    }
    lines.push(line);
    lines
}

// =============================================================================
// Unit Tests
// =============================================================================
