//! Tag-scope tracking
//!
//! The stack of currently open structural scopes. Kept as an explicit
//! sequence (rather than recursion in the markup walker) so the scope state
//! can be inspected and tested on its own.

use smallvec::SmallVec;

use crate::label::StructuralLabel;

/// Typical monograph markup nests only a few recognized scopes deep
const INLINE_DEPTH: usize = 8;

/// Stack of open structural scopes; the top is the active label
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagStack {
    scopes: SmallVec<[StructuralLabel; INLINE_DEPTH]>,
}

impl TagStack {
    /// Create an empty stack
    pub fn new() -> Self {
        Self::default()
    }

    /// Open a scope for `tag` if it names a structural label.
    ///
    /// Returns the pushed label; unrecognized tags are transparent.
    pub fn enter(&mut self, tag: &str) -> Option<StructuralLabel> {
        let label = StructuralLabel::from_tag_name(tag)?;
        self.scopes.push(label);
        Some(label)
    }

    /// Close the innermost scope if `tag` names a structural label.
    ///
    /// The pop is positional: the closed tag is not compared with the top,
    /// well-formedness is the markup reader's job.
    pub fn exit(&mut self, tag: &str) -> Option<StructuralLabel> {
        StructuralLabel::from_tag_name(tag)?;
        self.scopes.pop()
    }

    /// Label of the innermost open scope
    pub fn active(&self) -> Option<StructuralLabel> {
        self.scopes.last().copied()
    }

    /// Number of open scopes
    pub fn depth(&self) -> usize {
        self.scopes.len()
    }

    /// Whether no scope is open
    pub fn is_empty(&self) -> bool {
        self.scopes.is_empty()
    }

    /// Open scopes from outermost to innermost
    pub fn scopes(&self) -> &[StructuralLabel] {
        &self.scopes
    }
}
