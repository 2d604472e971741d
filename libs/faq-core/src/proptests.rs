//! Property-based tests for parsing and highlighting.

use crate::matching::highlight;
use crate::parser::parse_answer;
use crate::types::{HighlightMode, SectionKind};
use proptest::prelude::*;

fn answer_line() -> impl Strategy<Value = String> {
    prop_oneof![
        "[a-zA-ZäöüÄÖÜ][a-zA-Z äöü]{0,12}",
        "[0-9]{1,2}\\. [a-z ]{0,8}",
        "\\*\\*[a-zA-Z]{1,6}\\*\\*",
        "(Wichtig|Achtung|wichtig): [a-z ]{0,8}",
        "Tipp: [a-z ]{0,8}",
    ]
}

fn blank_line() -> impl Strategy<Value = String> {
    "[ \t]{0,3}"
}

proptest! {
    #[test]
    fn blank_lines_never_change_sections(
        lines in prop::collection::vec((answer_line(), prop::option::of(blank_line())), 0..12)
    ) {
        let compact: Vec<&str> = lines.iter().map(|(line, _)| line.as_str()).collect();
        let mut spaced = Vec::new();
        for (line, blank) in &lines {
            spaced.push(line.clone());
            if let Some(blank) = blank {
                spaced.push(blank.clone());
            }
        }

        prop_assert_eq!(parse_answer(&compact.join("\n")), parse_answer(&spaced.join("\n")));
    }

    #[test]
    fn every_line_lands_in_exactly_one_section(
        lines in prop::collection::vec(answer_line(), 0..12)
    ) {
        let sections = parse_answer(&lines.join("\n"));
        let covered: usize = sections
            .iter()
            .map(|s| if s.kind == SectionKind::ListBlock { s.items.len() } else { 1 })
            .sum();
        prop_assert_eq!(covered, lines.len());
    }

    #[test]
    fn list_blocks_are_never_adjacent(
        lines in prop::collection::vec(answer_line(), 0..12)
    ) {
        let sections = parse_answer(&lines.join("\n"));
        for pair in sections.windows(2) {
            prop_assert!(
                !(pair[0].kind == SectionKind::ListBlock && pair[1].kind == SectionKind::ListBlock)
            );
        }
        for section in &sections {
            if section.kind == SectionKind::ListBlock {
                prop_assert!(!section.items.is_empty());
                prop_assert!(section.text.is_empty());
            }
        }
    }

    #[test]
    fn spans_are_ordered_valid_and_match(
        text in "[a-zA-ZäÄß .]{0,40}",
        query in "[a-zA-ZäÄ]{1,3}",
    ) {
        let spans = highlight(&text, &query, HighlightMode::All);
        let folded_query = query.to_lowercase();
        let mut last_end = 0;
        for span in &spans {
            prop_assert!(span.start >= last_end);
            prop_assert!(span.start < span.end);
            let slice = text.get(span.as_range());
            prop_assert!(slice.is_some());
            prop_assert_eq!(slice.unwrap().to_lowercase(), folded_query.clone());
            last_end = span.end;
        }
    }

    #[test]
    fn first_mode_is_prefix_of_all(
        text in "[a-c ]{0,30}",
        query in "[a-c]{1,2}",
    ) {
        let all = highlight(&text, &query, HighlightMode::All);
        let first = highlight(&text, &query, HighlightMode::First);
        prop_assert_eq!(first.len(), all.len().min(1));
        prop_assert_eq!(first.first(), all.first());
    }
}
