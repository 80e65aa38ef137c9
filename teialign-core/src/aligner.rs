//! Raw/labeled stream alignment
//!
//! The raw token stream and the labeled sequence come from independent
//! tokenizers and do not agree on boundaries, so rows cannot be zipped by
//! position. Each raw row is instead located by content, searching forward
//! from a cursor that follows the last match:
//!
//! 1. when the cursor has reached the last token, it falls back to the
//!    bookmark (index of the last successful match);
//! 2. the first content token at or after the cursor whose text contains
//!    either normalized raw reading wins, and becomes the new bookmark;
//! 3. the cursor moves just past the match; rows without a match are
//!    skipped and leave the cursor where it was.
//!
//! First match wins. No attempt is made to find a better candidate further
//! on, so heavy drift can produce false positives.

use crate::{
    raw::RawRow,
    types::{LabeledToken, OutputLine},
};

/// Default raw-line hint marking the start of a block
pub const DEFAULT_BLOCK_START_HINT: &str = "BLOCKSTART";

/// Default raw-line hint marking the start of a page
pub const DEFAULT_PAGE_START_HINT: &str = "PAGESTART";

/// How raw readings and token texts are normalized before comparison
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Normalization {
    /// Compare as-is
    Exact,
    /// Strip all whitespace
    #[default]
    RemoveWhitespace,
    /// Strip whitespace and compare lowercase
    CaseFold,
}

impl Normalization {
    /// Apply the normalization
    pub fn apply(&self, text: &str) -> String {
        match self {
            Normalization::Exact => text.to_string(),
            Normalization::RemoveWhitespace => {
                text.chars().filter(|c| !c.is_whitespace()).collect()
            }
            Normalization::CaseFold => text
                .chars()
                .filter(|c| !c.is_whitespace())
                .flat_map(char::to_lowercase)
                .collect(),
        }
    }
}

/// Alignment tuning
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlignerOptions {
    /// Maximum number of tokens examined per row (None = to the end)
    pub scan_window: Option<usize>,
    /// Comparison normalization
    pub normalization: Normalization,
    /// Substring marking a block start in the raw line
    pub block_start_hint: String,
    /// Substring marking a page start in the raw line
    pub page_start_hint: String,
}

impl Default for AlignerOptions {
    fn default() -> Self {
        Self {
            scan_window: None,
            normalization: Normalization::default(),
            block_start_hint: DEFAULT_BLOCK_START_HINT.to_string(),
            page_start_hint: DEFAULT_PAGE_START_HINT.to_string(),
        }
    }
}

/// Result of aligning one raw row
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowOutcome {
    /// The row was attached to the labeled token at `index`
    Matched {
        /// Index of the matched token
        index: usize,
        /// Labeled raw line
        line: OutputLine,
    },
    /// Nothing in the scan range contained either reading
    Unmatched,
}

/// Aligned output of one document
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Alignment {
    /// Labeled raw lines in raw order
    pub lines: Vec<OutputLine>,
    /// Rows that found a match
    pub matched: usize,
    /// Rows skipped for lack of a match
    pub unmatched: usize,
}

/// Stateful aligner over one document's labeled sequence
#[derive(Debug)]
pub struct Aligner<'a> {
    labeled: &'a [LabeledToken],
    haystack: Vec<Option<String>>,
    options: &'a AlignerOptions,
    cursor: usize,
    bookmark: usize,
}

impl<'a> Aligner<'a> {
    /// Prepare an aligner; token texts are normalized once up front
    pub fn new(labeled: &'a [LabeledToken], options: &'a AlignerOptions) -> Self {
        let haystack = labeled
            .iter()
            .map(|token| match token {
                LabeledToken::Marker(_) => None,
                LabeledToken::Content { text, .. } => Some(options.normalization.apply(text)),
            })
            .collect();

        Self {
            labeled,
            haystack,
            options,
            cursor: 0,
            bookmark: 0,
        }
    }

    /// Where the next scan starts
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Index of the last successful match
    pub fn bookmark(&self) -> usize {
        self.bookmark
    }

    /// Locate one raw row in the labeled sequence
    pub fn align_row(&mut self, row: &RawRow) -> RowOutcome {
        let len = self.labeled.len();
        if self.cursor + 1 >= len {
            self.cursor = self.bookmark;
        }

        let first = self.options.normalization.apply(&row.first);
        let second = self.options.normalization.apply(&row.second);

        let end = match self.options.scan_window {
            Some(window) => self.cursor.saturating_add(window).min(len),
            None => len,
        };

        let found = (self.cursor..end).find(|&index| {
            self.haystack[index]
                .as_deref()
                .is_some_and(|text| contains_reading(text, &first) || contains_reading(text, &second))
        });

        let Some(index) = found else {
            return RowOutcome::Unmatched;
        };

        let LabeledToken::Content {
            label, is_begin, ..
        } = &self.labeled[index]
        else {
            return RowOutcome::Unmatched;
        };

        let begin = *is_begin
            || (row.has_hint(&self.options.block_start_hint)
                && row.has_hint(&self.options.page_start_hint));

        self.bookmark = index;
        self.cursor = index + 1;

        RowOutcome::Matched {
            index,
            line: OutputLine {
                raw: row.line.clone(),
                label: *label,
                begin,
            },
        }
    }

    /// Align every row in order
    pub fn align_rows<'r, I>(&mut self, rows: I) -> Alignment
    where
        I: IntoIterator<Item = &'r RawRow>,
    {
        let mut alignment = Alignment::default();
        for row in rows {
            match self.align_row(row) {
                RowOutcome::Matched { line, .. } => {
                    alignment.lines.push(line);
                    alignment.matched += 1;
                }
                RowOutcome::Unmatched => alignment.unmatched += 1,
            }
        }
        alignment
    }
}

/// Align a document's raw rows against its labeled sequence
pub fn align(labeled: &[LabeledToken], rows: &[RawRow], options: &AlignerOptions) -> Alignment {
    Aligner::new(labeled, options).align_rows(rows)
}

/// An empty reading would match every token, so it never matches
fn contains_reading(text: &str, reading: &str) -> bool {
    !reading.is_empty() && text.contains(reading)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::label::StructuralLabel;
    use crate::types::Marker;

    fn row(line: &str) -> RawRow {
        RawRow::parse(line).unwrap()
    }

    fn sequence(words: &[&str]) -> Vec<LabeledToken> {
        words
            .iter()
            .enumerate()
            .map(|(i, w)| LabeledToken::content(*w, StructuralLabel::Unit, i == 0))
            .collect()
    }

    #[test]
    fn test_normalization() {
        assert_eq!(Normalization::Exact.apply(" A b "), " A b ");
        assert_eq!(Normalization::RemoveWhitespace.apply(" A\tb "), "Ab");
        assert_eq!(Normalization::CaseFold.apply(" Ab C"), "abc");
    }

    #[test]
    fn test_cursor_progression() {
        let labeled = sequence(&["t0", "t1", "t2", "alpha", "t4", "beta", "t6", "t7"]);
        let options = AlignerOptions::default();
        let mut aligner = Aligner::new(&labeled, &options);
        assert_eq!(aligner.cursor(), 0);

        let outcome = aligner.align_row(&row("alpha x"));
        assert!(matches!(outcome, RowOutcome::Matched { index: 3, .. }));
        assert_eq!(aligner.cursor(), 4);

        let outcome = aligner.align_row(&row("beta y"));
        assert!(matches!(outcome, RowOutcome::Matched { index: 5, .. }));
        assert_eq!(aligner.cursor(), 6);
        assert_eq!(aligner.bookmark(), 5);
    }

    #[test]
    fn test_unmatched_row_leaves_cursor() {
        let labeled = sequence(&["one", "two", "three", "four"]);
        let options = AlignerOptions::default();
        let mut aligner = Aligner::new(&labeled, &options);

        aligner.align_row(&row("two 2"));
        assert_eq!(aligner.cursor(), 2);

        assert_eq!(aligner.align_row(&row("zebra zzz")), RowOutcome::Unmatched);
        assert_eq!(aligner.cursor(), 2);
    }

    #[test]
    fn test_second_reading_matches() {
        let labeled = sequence(&["Introduction"]);
        let options = AlignerOptions::default();
        let mut aligner = Aligner::new(&labeled, &options);

        let outcome = aligner.align_row(&row("Intr0duction Intro"));
        assert!(matches!(outcome, RowOutcome::Matched { index: 0, .. }));
    }

    #[test]
    fn test_reset_to_bookmark_when_exhausted() {
        let labeled = sequence(&["a1", "b2", "c3"]);
        let options = AlignerOptions::default();
        let mut aligner = Aligner::new(&labeled, &options);

        aligner.align_row(&row("b2 b2"));
        assert_eq!(aligner.cursor(), 2);
        assert_eq!(aligner.bookmark(), 1);

        // cursor sits on the last token, so the scan restarts at the bookmark
        let outcome = aligner.align_row(&row("b2 b2"));
        assert!(matches!(outcome, RowOutcome::Matched { index: 1, .. }));
        assert_eq!(aligner.cursor(), 2);
    }

    #[test]
    fn test_markers_are_never_matched() {
        let labeled = vec![
            LabeledToken::Marker(Marker::Newline),
            LabeledToken::content("page", StructuralLabel::Toc, true),
        ];
        let options = AlignerOptions::default();
        let mut aligner = Aligner::new(&labeled, &options);

        let outcome = aligner.align_row(&row("newline @newline"));
        assert_eq!(outcome, RowOutcome::Unmatched);
    }

    #[test]
    fn test_begin_label_from_token() {
        let labeled = vec![
            LabeledToken::content("Hello", StructuralLabel::Title, true),
            LabeledToken::content("World", StructuralLabel::Title, false),
        ];
        let alignment = align(
            &labeled,
            &[row("Hello hello"), row("World world")],
            &AlignerOptions::default(),
        );

        let rendered: Vec<String> = alignment.lines.iter().map(|l| l.to_string()).collect();
        assert_eq!(
            rendered,
            vec!["Hello hello I-<title>", "World world <title>"]
        );
    }

    #[test]
    fn test_begin_escalation_needs_both_hints() {
        let labeled = sequence(&["first", "second", "third", "fourth"]);
        let options = AlignerOptions::default();
        let mut aligner = Aligner::new(&labeled, &options);
        aligner.align_row(&row("first f"));

        match aligner.align_row(&row("second s BLOCKSTART")) {
            RowOutcome::Matched { line, .. } => assert!(!line.begin),
            RowOutcome::Unmatched => panic!("expected a match"),
        }
        match aligner.align_row(&row("third t BLOCKSTART PAGESTART")) {
            RowOutcome::Matched { line, .. } => assert!(line.begin),
            RowOutcome::Unmatched => panic!("expected a match"),
        }
    }

    #[test]
    fn test_scan_window_limits_search() {
        let labeled = sequence(&["a", "b", "c", "d", "target"]);
        let options = AlignerOptions {
            scan_window: Some(3),
            ..AlignerOptions::default()
        };
        let mut aligner = Aligner::new(&labeled, &options);
        assert_eq!(aligner.align_row(&row("target t")), RowOutcome::Unmatched);

        let options = AlignerOptions::default();
        let mut aligner = Aligner::new(&labeled, &options);
        assert!(matches!(
            aligner.align_row(&row("target t")),
            RowOutcome::Matched { index: 4, .. }
        ));
    }

    #[test]
    fn test_case_fold_normalization() {
        let labeled = sequence(&["PREFACE"]);
        let options = AlignerOptions {
            normalization: Normalization::CaseFold,
            ..AlignerOptions::default()
        };
        let alignment = align(&labeled, &[row("preface Preface")], &options);
        assert_eq!(alignment.matched, 1);
    }

    #[test]
    fn test_empty_labeled_sequence() {
        let alignment = align(&[], &[row("a b"), row("c d")], &AlignerOptions::default());
        assert!(alignment.lines.is_empty());
        assert_eq!(alignment.unmatched, 2);
    }

    #[test]
    fn test_substring_match() {
        // raw readings are often fragments of the TEI token
        let labeled = sequence(&["well-known"]);
        let alignment = align(&labeled, &[row("known kn0wn")], &AlignerOptions::default());
        assert_eq!(alignment.matched, 1);
    }
}
