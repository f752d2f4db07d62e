//! Split text and staggered reveals.

#[cfg(test)]
#[path = "reveal_test.rs"]
mod reveal_test;

use crate::consts::{REVEAL_STAGGER_CYCLE, REVEAL_STAGGER_MS};

/// One character of a split heading.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharSpan {
    /// Text to render; spaces become non-breaking so they keep their width.
    pub text: String,
    pub index: usize,
    pub is_space: bool,
}

/// Split trimmed `text` into one span per character.
#[must_use]
pub fn split_chars(text: &str) -> Vec<CharSpan> {
    text.trim()
        .chars()
        .enumerate()
        .map(|(index, c)| {
            let is_space = c == ' ';
            let text = if is_space { '\u{00A0}'.to_string() } else { c.to_string() };
            CharSpan { text, index, is_space }
        })
        .collect()
}

/// Transition delay for the `index`-th reveal target.
#[must_use]
pub fn reveal_delay_ms(index: usize) -> u32 {
    let step = u32::try_from(index % REVEAL_STAGGER_CYCLE).unwrap_or(0);
    step * REVEAL_STAGGER_MS
}
