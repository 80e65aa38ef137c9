//! Label extraction from structural markup events
//!
//! [`LabelExtractor`] consumes start-element, end-element and character
//! events for one document and produces its [`LabeledToken`] sequence.
//! Text is buffered until the next scope boundary and flushed under the
//! label that was active while it accumulated:
//!
//! - on a recognized start tag, the buffer belongs to the enclosing scope
//!   and is flushed before the push;
//! - on a recognized end tag, the buffer belongs to the closing scope and is
//!   flushed before the pop.
//!
//! The first content token of each flush is a begin token. `lb` and `pb`
//! do not open scopes; they write inline markers into the buffer.

use crate::{
    label::StructuralLabel,
    tag_stack::TagStack,
    tokenizer::{tokenize, PunctuationSet, Token, LINE_MARKER, PAGE_MARKER},
    types::LabeledToken,
};

/// Line-break pseudo-element
pub const LINE_BREAK_TAG: &str = "lb";

/// Page-break pseudo-element
pub const PAGE_BREAK_TAG: &str = "pb";

/// Extraction settings
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtractorOptions {
    /// Token delimiters besides whitespace
    pub punctuation: PunctuationSet,
}

/// Labeled sequence of one document
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Extraction {
    /// Ordered labeled tokens
    pub tokens: Vec<LabeledToken>,
    /// Scopes still open when the document ended
    pub unclosed_scopes: usize,
    /// Content tokens dropped because no label was active
    pub discarded_tokens: usize,
}

impl Extraction {
    /// Number of content (non-marker) tokens
    pub fn content_tokens(&self) -> usize {
        self.tokens.iter().filter(|t| !t.is_marker()).count()
    }

    /// Whether every scope was closed
    pub fn is_balanced(&self) -> bool {
        self.unclosed_scopes == 0
    }
}

/// Event-driven walker turning markup into labeled tokens
#[derive(Debug)]
pub struct LabelExtractor {
    stack: TagStack,
    buffer: String,
    tokens: Vec<LabeledToken>,
    punctuation: PunctuationSet,
    discarded_tokens: usize,
}

impl LabelExtractor {
    /// Create an extractor for one document
    pub fn new(options: ExtractorOptions) -> Self {
        Self {
            stack: TagStack::new(),
            buffer: String::new(),
            tokens: Vec::new(),
            punctuation: options.punctuation,
            discarded_tokens: 0,
        }
    }

    /// Handle a start-element event
    pub fn start_element(&mut self, name: &str) {
        match name {
            LINE_BREAK_TAG => self.push_marker(LINE_MARKER),
            PAGE_BREAK_TAG => self.push_marker(PAGE_MARKER),
            _ if StructuralLabel::from_tag_name(name).is_some() => {
                self.flush(self.stack.active());
                self.stack.enter(name);
            }
            _ => {}
        }
    }

    /// Handle an end-element event
    pub fn end_element(&mut self, name: &str) {
        if matches!(name, LINE_BREAK_TAG | PAGE_BREAK_TAG) {
            return;
        }
        if StructuralLabel::from_tag_name(name).is_some() {
            self.flush(self.stack.active());
            self.stack.exit(name);
        }
    }

    /// Handle character data
    pub fn characters(&mut self, text: &str) {
        self.buffer.push_str(text);
    }

    /// Currently open scopes
    pub fn scopes(&self) -> &TagStack {
        &self.stack
    }

    /// Finish the document.
    ///
    /// Text still buffered is lost; it either trails the last scope or sits
    /// inside a scope that was never closed.
    pub fn finish(mut self) -> Extraction {
        let leftover = self.count_content(&self.buffer);
        self.discarded_tokens += leftover;
        Extraction {
            tokens: self.tokens,
            unclosed_scopes: self.stack.depth(),
            discarded_tokens: self.discarded_tokens,
        }
    }

    fn push_marker(&mut self, marker: &str) {
        self.buffer.push(' ');
        self.buffer.push_str(marker);
        self.buffer.push(' ');
    }

    fn flush(&mut self, label: Option<StructuralLabel>) {
        match label {
            Some(label) => {
                let mut begin = true;
                for token in tokenize(&self.buffer, &self.punctuation) {
                    match token {
                        Token::Marker(marker) => self.tokens.push(LabeledToken::Marker(marker)),
                        Token::Content(text) => {
                            self.tokens.push(LabeledToken::content(text, label, begin));
                            begin = false;
                        }
                    }
                }
            }
            None => {
                let dropped = self.count_content(&self.buffer);
                self.discarded_tokens += dropped;
            }
        }
        self.buffer.clear();
    }

    fn count_content(&self, text: &str) -> usize {
        tokenize(text, &self.punctuation)
            .filter(|token| matches!(token, Token::Content(_)))
            .count()
    }
}

impl Default for LabelExtractor {
    fn default() -> Self {
        Self::new(ExtractorOptions::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Marker;

    fn content(text: &str, label: StructuralLabel, begin: bool) -> LabeledToken {
        LabeledToken::content(text, label, begin)
    }

    #[test]
    fn test_single_scope() {
        let mut extractor = LabelExtractor::default();
        extractor.start_element("title");
        extractor.characters("Hello World");
        extractor.end_element("title");

        let extraction = extractor.finish();
        assert_eq!(
            extraction.tokens,
            vec![
                content("Hello", StructuralLabel::Title, true),
                content("World", StructuralLabel::Title, false),
            ]
        );
        assert!(extraction.is_balanced());
    }

    #[test]
    fn test_text_before_child_belongs_to_parent() {
        let mut extractor = LabelExtractor::default();
        extractor.start_element("unit");
        extractor.characters("Chapter one");
        extractor.start_element("reference");
        extractor.characters("Smith 1999");
        extractor.end_element("reference");
        extractor.characters("continues");
        extractor.end_element("unit");

        let extraction = extractor.finish();
        assert_eq!(
            extraction.tokens,
            vec![
                content("Chapter", StructuralLabel::Unit, true),
                content("one", StructuralLabel::Unit, false),
                content("Smith", StructuralLabel::Reference, true),
                content("1999", StructuralLabel::Reference, false),
                content("continues", StructuralLabel::Unit, true),
            ]
        );
    }

    #[test]
    fn test_markers_do_not_consume_begin() {
        let mut extractor = LabelExtractor::default();
        extractor.start_element("cover");
        extractor.start_element("pb");
        extractor.end_element("pb");
        extractor.characters("Volume");
        extractor.start_element("lb");
        extractor.end_element("lb");
        extractor.characters("II");
        extractor.end_element("cover");

        let extraction = extractor.finish();
        assert_eq!(
            extraction.tokens,
            vec![
                LabeledToken::Marker(Marker::Newpage),
                content("Volume", StructuralLabel::Cover, true),
                LabeledToken::Marker(Marker::Newline),
                content("II", StructuralLabel::Cover, false),
            ]
        );
    }

    #[test]
    fn test_unlabeled_text_is_discarded() {
        let mut extractor = LabelExtractor::default();
        extractor.characters("front matter noise");
        extractor.start_element("title");
        extractor.characters("Kept");
        extractor.end_element("title");

        let extraction = extractor.finish();
        assert_eq!(
            extraction.tokens,
            vec![content("Kept", StructuralLabel::Title, true)]
        );
        assert_eq!(extraction.discarded_tokens, 3);
    }

    #[test]
    fn test_unrecognized_elements_are_transparent() {
        let mut extractor = LabelExtractor::default();
        extractor.start_element("title");
        extractor.characters("Big ");
        extractor.start_element("hi");
        extractor.characters("Bold");
        extractor.end_element("hi");
        extractor.characters(" Title");
        extractor.end_element("title");

        let extraction = extractor.finish();
        assert_eq!(
            extraction.tokens,
            vec![
                content("Big", StructuralLabel::Title, true),
                content("Bold", StructuralLabel::Title, false),
                content("Title", StructuralLabel::Title, false),
            ]
        );
    }

    #[test]
    fn test_unclosed_scope_loses_buffer() {
        let mut extractor = LabelExtractor::default();
        extractor.start_element("preface");
        extractor.characters("never flushed");

        let extraction = extractor.finish();
        assert!(extraction.tokens.is_empty());
        assert_eq!(extraction.unclosed_scopes, 1);
        assert_eq!(extraction.discarded_tokens, 2);
        assert!(!extraction.is_balanced());
    }

    #[test]
    fn test_scope_state_is_observable() {
        let mut extractor = LabelExtractor::default();
        extractor.start_element("back");
        extractor.start_element("index");
        assert_eq!(extractor.scopes().active(), Some(StructuralLabel::Index));
        assert_eq!(extractor.scopes().depth(), 2);
    }
}
