use std::ops::Range;

use super::content::FaqEntry;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Segment<'a> {
    Plain(&'a str),
    Mark(&'a str),
}

fn same_letter(a: char, b: char) -> bool {
    a == b || a.to_lowercase().eq(b.to_lowercase())
}

/// Byte ranges of every non-overlapping, case-insensitive occurrence of
/// `query` in `text`.
pub fn find_matches(text: &str, query: &str) -> Vec<Range<usize>> {
    let needle: Vec<char> = query.chars().collect();
    if needle.is_empty() {
        return Vec::new();
    }
    let hay: Vec<(usize, char)> = text.char_indices().collect();

    let mut found = Vec::new();
    let mut i = 0;
    while i + needle.len() <= hay.len() {
        let window = &hay[i..i + needle.len()];
        if window.iter().zip(&needle).all(|((_, t), n)| same_letter(*t, *n)) {
            let start = hay[i].0;
            let end = hay.get(i + needle.len()).map_or(text.len(), |(at, _)| *at);
            found.push(start..end);
            i += needle.len();
        } else {
            i += 1;
        }
    }
    found
}

/// Splits `text` into plain and highlighted runs for `query`.
pub fn highlight<'a>(text: &'a str, query: &str) -> Vec<Segment<'a>> {
    let mut segments = Vec::new();
    let mut cursor = 0;
    for range in find_matches(text, query) {
        if range.start > cursor {
            segments.push(Segment::Plain(&text[cursor..range.start]));
        }
        segments.push(Segment::Mark(&text[range.clone()]));
        cursor = range.end;
    }
    if cursor < text.len() {
        segments.push(Segment::Plain(&text[cursor..]));
    }
    segments
}

pub fn normalize_query(raw: &str) -> &str {
    raw.trim()
}

/// An empty query matches everything.
pub fn entry_matches(entry: &FaqEntry, query: &str) -> bool {
    query.is_empty()
        || !find_matches(entry.question, query).is_empty()
        || !find_matches(entry.answer, query).is_empty()
}

pub fn show_no_results(visible: usize, query: &str) -> bool {
    visible == 0 && !query.is_empty()
}
