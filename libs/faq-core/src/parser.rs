//! Section parser for FAQ answers.
//!
//! # Format
//! ```markdown
//! **Screenshot:**
//! 1. Drücke gleichzeitig die Ein-/Aus-Taste und die Lauter-Taste
//! 2. Das Bild erscheint kurz in der Ecke
//!
//! Tipp: Erstelle separate Ordner für jedes Fach.
//! Wichtig: Teile deine Anmeldedaten niemals.
//! Alles andere ist ein Absatz.
//! ```
//!
//! Each non-blank line is classified on its own, in this order:
//! header > list entry > important > tip > paragraph. Consecutive list
//! entries are collected into one list block; blank lines between them do
//! not break the block.

use crate::types::AnswerSection;

/// Preview length used by search results.
pub const SEARCH_PREVIEW_CHARS: usize = 200;

const BOLD_MARKER: &str = "**";
const IMPORTANT_WORDS: [&str; 2] = ["wichtig", "achtung"];
const TIP_WORD: &str = "Tipp";

/// Parse an answer into ordered, typed sections.
///
/// Never fails; empty or blank input yields no sections.
pub fn parse_answer(answer: &str) -> Vec<AnswerSection> {
    let mut parser = Parser::new();

    for line in answer.lines() {
        parser.process_line(line);
    }

    parser.finalize()
}

/// Flatten an answer into a single-line preview.
///
/// Bold markers are removed and line breaks (`\n` or `\r\n`) become spaces.
/// Results longer than `max_chars` characters are cut and suffixed with `...`.
pub fn answer_preview(answer: &str, max_chars: usize) -> String {
    let flat = answer.lines().collect::<Vec<_>>().join(" ").replace(BOLD_MARKER, "");
    let flat = flat.trim();

    match flat.char_indices().nth(max_chars) {
        Some((cut, _)) => format!("{}...", &flat[..cut]),
        None => flat.to_string(),
    }
}

enum LineType<'a> {
    Header(&'a str),
    ListEntry(&'a str),
    Important(&'a str),
    Tip(&'a str),
    Paragraph(&'a str),
    Blank,
}

struct Parser {
    sections: Vec<AnswerSection>,
    pending_list: Vec<String>,
}

impl Parser {
    fn new() -> Self {
        Self {
            sections: Vec::new(),
            pending_list: Vec::new(),
        }
    }

    fn process_line(&mut self, line: &str) {
        match Self::parse_line(line) {
            LineType::Blank => {}
            LineType::ListEntry(text) => self.pending_list.push(text.to_string()),
            LineType::Header(text) => self.emit(AnswerSection::header(text)),
            LineType::Important(text) => self.emit(AnswerSection::important(text)),
            LineType::Tip(text) => self.emit(AnswerSection::tip(text)),
            LineType::Paragraph(text) => self.emit(AnswerSection::paragraph(text)),
        }
    }

    fn parse_line(line: &str) -> LineType<'_> {
        let trimmed = line.trim();

        if trimmed.is_empty() {
            return LineType::Blank;
        }

        if let Some(inner) = strip_bold(trimmed) {
            LineType::Header(inner.trim())
        } else if is_list_entry(trimmed) {
            LineType::ListEntry(trimmed)
        } else {
            let word = first_word(trimmed);
            if IMPORTANT_WORDS.iter().any(|w| word.to_lowercase() == *w) {
                LineType::Important(trimmed)
            } else if word == TIP_WORD {
                LineType::Tip(trimmed)
            } else {
                LineType::Paragraph(trimmed)
            }
        }
    }

    fn emit(&mut self, section: AnswerSection) {
        self.flush_list();
        self.sections.push(section);
    }

    fn flush_list(&mut self) {
        if self.pending_list.is_empty() {
            return;
        }

        let items = std::mem::take(&mut self.pending_list);
        self.sections.push(AnswerSection::list(items));
    }

    fn finalize(mut self) -> Vec<AnswerSection> {
        self.flush_list();
        self.sections
    }
}

/// Inner text of a line that is one single `**` span.
fn strip_bold(line: &str) -> Option<&str> {
    if line.len() < 2 * BOLD_MARKER.len() {
        return None;
    }
    let inner = line.strip_prefix(BOLD_MARKER)?.strip_suffix(BOLD_MARKER)?;
    (!inner.contains(BOLD_MARKER)).then_some(inner)
}

/// One or more ASCII digits immediately followed by a period.
fn is_list_entry(line: &str) -> bool {
    let digits = line.bytes().take_while(u8::is_ascii_digit).count();
    digits > 0 && line.as_bytes().get(digits) == Some(&b'.')
}

/// Leading alphabetic run.
fn first_word(line: &str) -> &str {
    let end = line
        .char_indices()
        .find(|(_, c)| !c.is_alphabetic())
        .map_or(line.len(), |(i, _)| i);
    &line[..end]
}
