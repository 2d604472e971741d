//! Case-insensitive substring matching and highlight extraction.

use crate::parser::{answer_preview, SEARCH_PREVIEW_CHARS};
use crate::types::{FaqItem, HighlightMode, HighlightSegment, HighlightSpan, SearchResult};

/// Shortest trimmed query callers should send to the matcher.
///
/// This is a caller policy; the matcher itself accepts any query.
pub const MIN_QUERY_CHARS: usize = 2;

/// Whether a raw user query is long enough to trigger a search.
pub fn is_searchable(query: &str) -> bool {
    query.trim().chars().count() >= MIN_QUERY_CHARS
}

/// True if `query` is non-empty and occurs in the question or the answer.
pub fn matches(item: &FaqItem, query: &str) -> bool {
    if query.is_empty() {
        return false;
    }
    let needle = fold(query);
    find_from(&item.question, 0, &needle).is_some()
        || find_from(&item.answer, 0, &needle).is_some()
}

/// Locate occurrences of `query` in `text`, left to right, never overlapping.
///
/// Spans are byte offsets into `text`. An empty query yields no spans.
pub fn highlight(text: &str, query: &str, mode: HighlightMode) -> Vec<HighlightSpan> {
    if query.is_empty() {
        return Vec::new();
    }

    let needle = fold(query);
    let mut spans = Vec::new();
    let mut pos = 0;

    while let Some(span) = find_from(text, pos, &needle) {
        spans.push(span);
        if mode == HighlightMode::First {
            break;
        }
        pos = span.end;
    }

    spans
}

/// Keep the items matching `query`, preserving input order.
///
/// Ordering by relevance is the store's job; this only filters.
pub fn rank_and_filter(items: &[FaqItem], query: &str) -> Vec<FaqItem> {
    items
        .iter()
        .filter(|item| matches(item, query))
        .cloned()
        .collect()
}

/// Build renderable results for every matching item, preserving input order.
pub fn build_results(items: &[FaqItem], query: &str, mode: HighlightMode) -> Vec<SearchResult> {
    items
        .iter()
        .filter(|item| matches(item, query))
        .map(|item| {
            let answer_preview = answer_preview(&item.answer, SEARCH_PREVIEW_CHARS);
            SearchResult {
                question_spans: highlight(&item.question, query, mode),
                answer_preview_spans: highlight(&answer_preview, query, mode),
                answer_preview,
                item: item.clone(),
            }
        })
        .collect()
}

/// Split `text` into plain and highlighted runs.
///
/// Expects sorted, non-overlapping spans as produced by [`highlight`].
/// Spans that are out of order or out of bounds are ignored.
pub fn segments(text: &str, spans: &[HighlightSpan]) -> Vec<HighlightSegment> {
    let mut result = Vec::new();
    let mut cursor = 0;

    for span in spans {
        if span.start < cursor || span.is_empty() {
            continue;
        }
        let (Some(before), Some(marked)) = (text.get(cursor..span.start), text.get(span.as_range()))
        else {
            continue;
        };

        if !before.is_empty() {
            result.push(HighlightSegment {
                text: before.to_string(),
                highlighted: false,
            });
        }
        result.push(HighlightSegment {
            text: marked.to_string(),
            highlighted: true,
        });
        cursor = span.end;
    }

    if cursor < text.len() {
        result.push(HighlightSegment {
            text: text[cursor..].to_string(),
            highlighted: false,
        });
    }

    result
}

/// Lowercase a query code point by code point.
fn fold(s: &str) -> Vec<char> {
    s.chars().flat_map(char::to_lowercase).collect()
}

/// Leftmost match of `needle` in `text` at or after byte `from`.
fn find_from(text: &str, from: usize, needle: &[char]) -> Option<HighlightSpan> {
    if needle.is_empty() {
        return None;
    }

    let rest = text.get(from..)?;
    rest.char_indices().find_map(|(offset, _)| {
        let start = from + offset;
        match_at(text, start, needle).map(|end| HighlightSpan::new(start, end))
    })
}

/// End offset if `needle` matches `text` starting exactly at `start`.
///
/// A text character whose lowercase form only partly overlaps the needle
/// is not a match.
fn match_at(text: &str, start: usize, needle: &[char]) -> Option<usize> {
    let mut matched = 0;

    for (offset, c) in text[start..].char_indices() {
        for lower in c.to_lowercase() {
            if matched == needle.len() || needle[matched] != lower {
                return None;
            }
            matched += 1;
        }
        if matched == needle.len() {
            return Some(start + offset + c.len_utf8());
        }
    }

    None
}
