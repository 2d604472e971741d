//! Core types for the help-center FAQ.

use serde::{Deserialize, Serialize};
use std::ops::Range;

/// A single FAQ entry as delivered by the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FaqItem {
    pub id: String,
    pub question: String,
    pub answer: String,
    pub category: String,
}

impl FaqItem {
    pub fn new(
        id: impl Into<String>,
        question: impl Into<String>,
        answer: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            question: question.into(),
            answer: answer.into(),
            category: category.into(),
        }
    }
}

/// Kind of a parsed answer section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionKind {
    Header,
    ListBlock,
    Paragraph,
    Important,
    Tip,
}

/// One typed, renderable chunk of an answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerSection {
    pub kind: SectionKind,
    /// Section prose. Empty for list blocks.
    pub text: String,
    /// List entries, only populated for list blocks.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub items: Vec<String>,
}

impl AnswerSection {
    pub fn header(text: impl Into<String>) -> Self {
        Self::with_text(SectionKind::Header, text)
    }

    pub fn paragraph(text: impl Into<String>) -> Self {
        Self::with_text(SectionKind::Paragraph, text)
    }

    pub fn important(text: impl Into<String>) -> Self {
        Self::with_text(SectionKind::Important, text)
    }

    pub fn tip(text: impl Into<String>) -> Self {
        Self::with_text(SectionKind::Tip, text)
    }

    pub fn list(items: Vec<String>) -> Self {
        Self {
            kind: SectionKind::ListBlock,
            text: String::new(),
            items,
        }
    }

    fn with_text(kind: SectionKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
            items: Vec::new(),
        }
    }
}

/// Half-open byte range `[start, end)` marking a query match.
///
/// Offsets always fall on char boundaries of the text they were computed
/// from, so `&text[span.as_range()]` never panics for that text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct HighlightSpan {
    pub start: usize,
    pub end: usize,
}

impl HighlightSpan {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    pub fn as_range(&self) -> Range<usize> {
        self.start..self.end
    }
}

/// Which occurrences of a query get highlighted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HighlightMode {
    /// Every non-overlapping occurrence (result lists, suggestions).
    All,
    /// Only the leftmost occurrence (article detail view).
    First,
}

impl Default for HighlightMode {
    fn default() -> Self {
        Self::All
    }
}

impl HighlightMode {
    /// Get the mode name as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::All => "all",
            Self::First => "first",
        }
    }

    /// Parse from string.
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "all" => Some(Self::All),
            "first" => Some(Self::First),
            _ => None,
        }
    }
}

/// A run of text that is either plain or highlighted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HighlightSegment {
    pub text: String,
    pub highlighted: bool,
}

/// A matching FAQ item with the spans a renderer should emphasize.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    pub item: FaqItem,
    /// Spans into `item.question`.
    pub question_spans: Vec<HighlightSpan>,
    /// Flattened, truncated answer text shown under the question.
    pub answer_preview: String,
    /// Spans into `answer_preview`.
    pub answer_preview_spans: Vec<HighlightSpan>,
}

/// One category bucket of an insertion-ordered grouping.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryGroup<T> {
    pub category: String,
    pub items: Vec<T>,
}

/// Category name with the number of items filed under it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategorySummary {
    pub name: String,
    pub count: usize,
}
