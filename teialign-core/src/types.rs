//! Core data types shared by the extractor and the aligner

use std::fmt;

use crate::label::StructuralLabel;

/// Layout break carried through the labeled sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Marker {
    /// Line break (`<lb/>`)
    Newline,
    /// Page break (`<pb/>`)
    Newpage,
}

impl Marker {
    /// Spelling in the labeled sequence
    pub fn as_str(&self) -> &'static str {
        match self {
            Marker::Newline => "@newline",
            Marker::Newpage => "@newpage",
        }
    }
}

impl fmt::Display for Marker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One entry of a document's labeled sequence
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LabeledToken {
    /// Structural marker, carries no label
    Marker(Marker),
    /// Content token under a structural label
    Content {
        /// Token text
        text: String,
        /// Scope the token was flushed under
        label: StructuralLabel,
        /// First content token of its flush
        is_begin: bool,
    },
}

impl LabeledToken {
    /// Create a content token
    pub fn content(text: impl Into<String>, label: StructuralLabel, is_begin: bool) -> Self {
        LabeledToken::Content {
            text: text.into(),
            label,
            is_begin,
        }
    }

    /// Token text; markers yield their `@` spelling
    pub fn text(&self) -> &str {
        match self {
            LabeledToken::Marker(marker) => marker.as_str(),
            LabeledToken::Content { text, .. } => text,
        }
    }

    /// Label of a content token
    pub fn label(&self) -> Option<StructuralLabel> {
        match self {
            LabeledToken::Marker(_) => None,
            LabeledToken::Content { label, .. } => Some(*label),
        }
    }

    /// Whether this is a begin content token
    pub fn is_begin(&self) -> bool {
        matches!(self, LabeledToken::Content { is_begin: true, .. })
    }

    /// Whether this is a structural marker
    pub fn is_marker(&self) -> bool {
        matches!(self, LabeledToken::Marker(_))
    }
}

/// Renders the trainer-style line: `text I-<label>`, `text <label>` or `@newline`
impl fmt::Display for LabeledToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LabeledToken::Marker(marker) => write!(f, "{marker}"),
            LabeledToken::Content {
                text,
                label,
                is_begin: true,
            } => write!(f, "{text} I-{label}"),
            LabeledToken::Content { text, label, .. } => write!(f, "{text} {label}"),
        }
    }
}

/// Raw line paired with the structural label the aligner attached to it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputLine {
    /// Original raw line text
    pub raw: String,
    /// Attached label
    pub label: StructuralLabel,
    /// Rendered with the `I-` begin prefix
    pub begin: bool,
}

impl fmt::Display for OutputLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.begin {
            write!(f, "{} I-{}", self.raw, self.label)
        } else {
            write!(f, "{} {}", self.raw, self.label)
        }
    }
}
