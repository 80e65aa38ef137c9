//! Boundary splitting of buffered text runs
//!
//! Splits text into content tokens on whitespace and a fixed punctuation
//! set. The delimiters themselves are discarded. The inline markers the
//! extractor writes for `<lb/>` and `<pb/>` are recognized as whole words
//! before punctuation splitting, so a punctuation set containing `+` does
//! not break them apart.

use std::str::{Split, SplitWhitespace};

use crate::types::Marker;

/// Inline marker written into the text buffer for a line break
pub const LINE_MARKER: &str = "+L+";

/// Inline marker written into the text buffer for a page break
pub const PAGE_MARKER: &str = "+PAGE+";

/// Default punctuation delimiters
pub const DEFAULT_PUNCTUATION: &str =
    "([•*,:;?.!/)-−–‐«»„\"“”‘’'`$#@]*\u{2666}\u{2665}\u{2663}\u{2660}\u{00A0}（）\u{037E}";

/// Set of characters that split tokens in addition to whitespace
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PunctuationSet {
    chars: Vec<char>,
}

impl PunctuationSet {
    /// Build a set from the characters of `punctuation`.
    ///
    /// Whitespace is dropped since it always splits.
    pub fn new(punctuation: &str) -> Self {
        let mut chars: Vec<char> = punctuation.chars().filter(|c| !c.is_whitespace()).collect();
        chars.sort_unstable();
        chars.dedup();
        Self { chars }
    }

    /// Whether `c` is a punctuation delimiter
    pub fn contains(&self, c: char) -> bool {
        self.chars.binary_search(&c).is_ok()
    }

    /// The delimiter characters, sorted
    pub fn chars(&self) -> &[char] {
        &self.chars
    }
}

impl Default for PunctuationSet {
    fn default() -> Self {
        Self::new(DEFAULT_PUNCTUATION)
    }
}

/// A token produced by [`tokenize`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token<'a> {
    /// Non-empty content token
    Content(&'a str),
    /// Layout marker
    Marker(Marker),
}

/// Lazy token iterator over a text buffer
#[derive(Debug)]
pub struct Tokens<'a> {
    words: SplitWhitespace<'a>,
    pieces: Option<Split<'a, &'a [char]>>,
    punctuation: &'a [char],
}

impl<'a> Iterator for Tokens<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Token<'a>> {
        loop {
            if let Some(pieces) = self.pieces.as_mut() {
                if let Some(piece) = pieces.find(|piece| !piece.is_empty()) {
                    return Some(Token::Content(piece));
                }
                self.pieces = None;
            }

            match self.words.next()? {
                LINE_MARKER => return Some(Token::Marker(Marker::Newline)),
                PAGE_MARKER => return Some(Token::Marker(Marker::Newpage)),
                word => self.pieces = Some(word.split(self.punctuation)),
            }
        }
    }
}

/// Tokenize `text`, splitting on whitespace and `punctuation`
pub fn tokenize<'a>(text: &'a str, punctuation: &'a PunctuationSet) -> Tokens<'a> {
    Tokens {
        words: text.split_whitespace(),
        pieces: None,
        punctuation: punctuation.chars(),
    }
}
