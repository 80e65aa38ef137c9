//! Structural label vocabulary

use std::fmt;
use std::str::FromStr;

/// One of the fixed document-section categories used to annotate monographs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum StructuralLabel {
    /// Cover page
    Cover,
    /// Title page
    Title,
    /// Publisher information
    Publisher,
    /// Summary / abstract
    Summary,
    /// Author biography
    Biography,
    /// Advertisement pages
    Advertisement,
    /// Table of contents
    Toc,
    /// Table of figures
    Tof,
    /// Preface
    Preface,
    /// Dedication
    Dedication,
    /// Body unit (chapter, part)
    Unit,
    /// Bibliographic references
    Reference,
    /// Annex / appendix
    Annex,
    /// Index
    Index,
    /// Glossary
    Glossary,
    /// Back matter
    Back,
    /// Anything else
    Other,
}

impl StructuralLabel {
    /// Every label, in vocabulary order
    pub const ALL: [StructuralLabel; 17] = [
        StructuralLabel::Cover,
        StructuralLabel::Title,
        StructuralLabel::Publisher,
        StructuralLabel::Summary,
        StructuralLabel::Biography,
        StructuralLabel::Advertisement,
        StructuralLabel::Toc,
        StructuralLabel::Tof,
        StructuralLabel::Preface,
        StructuralLabel::Dedication,
        StructuralLabel::Unit,
        StructuralLabel::Reference,
        StructuralLabel::Annex,
        StructuralLabel::Index,
        StructuralLabel::Glossary,
        StructuralLabel::Back,
        StructuralLabel::Other,
    ];

    /// Look up a label by its element name (`"title"`, `"toc"`, ...)
    pub fn from_tag_name(name: &str) -> Option<Self> {
        let label = match name {
            "cover" => StructuralLabel::Cover,
            "title" => StructuralLabel::Title,
            "publisher" => StructuralLabel::Publisher,
            "summary" => StructuralLabel::Summary,
            "biography" => StructuralLabel::Biography,
            "advertisement" => StructuralLabel::Advertisement,
            "toc" => StructuralLabel::Toc,
            "tof" => StructuralLabel::Tof,
            "preface" => StructuralLabel::Preface,
            "dedication" => StructuralLabel::Dedication,
            "unit" => StructuralLabel::Unit,
            "reference" => StructuralLabel::Reference,
            "annex" => StructuralLabel::Annex,
            "index" => StructuralLabel::Index,
            "glossary" => StructuralLabel::Glossary,
            "back" => StructuralLabel::Back,
            "other" => StructuralLabel::Other,
            _ => return None,
        };
        Some(label)
    }

    /// Bare element name
    pub fn tag_name(&self) -> &'static str {
        match self {
            StructuralLabel::Cover => "cover",
            StructuralLabel::Title => "title",
            StructuralLabel::Publisher => "publisher",
            StructuralLabel::Summary => "summary",
            StructuralLabel::Biography => "biography",
            StructuralLabel::Advertisement => "advertisement",
            StructuralLabel::Toc => "toc",
            StructuralLabel::Tof => "tof",
            StructuralLabel::Preface => "preface",
            StructuralLabel::Dedication => "dedication",
            StructuralLabel::Unit => "unit",
            StructuralLabel::Reference => "reference",
            StructuralLabel::Annex => "annex",
            StructuralLabel::Index => "index",
            StructuralLabel::Glossary => "glossary",
            StructuralLabel::Back => "back",
            StructuralLabel::Other => "other",
        }
    }
}

/// Angle-bracket spelling used in labeled output, e.g. `<title>`
impl fmt::Display for StructuralLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}>", self.tag_name())
    }
}

/// Error returned when parsing an unknown label name
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown structural label: {0}")]
pub struct UnknownLabel(pub String);

impl FromStr for StructuralLabel {
    type Err = UnknownLabel;

    /// Accepts both `title` and `<title>`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bare = s
            .strip_prefix('<')
            .and_then(|rest| rest.strip_suffix('>'))
            .unwrap_or(s);
        Self::from_tag_name(bare).ok_or_else(|| UnknownLabel(s.to_string()))
    }
}
