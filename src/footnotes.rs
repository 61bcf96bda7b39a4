//! Footnote Detection and Linking
//!
//! Source documents mark footnotes with superscript digits, bracketed or
//! parenthetical numbers, asterisks or daggers. The linker resolves numeric
//! markers positionally against the footnote list supplied by the document
//! parser; unmatched markers are skipped, never an error.

use lazy_static::lazy_static;
use regex::Regex;

use crate::logger::debug;
use crate::types::{FootnoteDef, FootnoteLink, FootnoteMarker};

lazy_static! {
    static ref RE_SUPERSCRIPT: Regex = Regex::new(r"[¹²³⁴⁵⁶⁷⁸⁹⁰]+").unwrap();
    static ref RE_BRACKETED: Regex = Regex::new(r"\[(\d+)\]").unwrap();
    static ref RE_PARENTHETICAL: Regex = Regex::new(r"\((\d+)\)").unwrap();
    static ref RE_ASTERISK: Regex = Regex::new(r"\*+").unwrap();
    static ref RE_DAGGER: Regex = Regex::new(r"[†‡]+").unwrap();

    // "1. content" or "1) content"; a bare "1 content" line also counts
    static ref RE_DEF_NUMBERED: Regex = Regex::new(r"^\s*(\d+)[.)\s]\s*(.*)$").unwrap();
    static ref RE_DEF_BRACKETED: Regex = Regex::new(r"^\s*\[(\d+)\]\s*(.*)$").unwrap();
    static ref RE_DEF_SUPERSCRIPT: Regex = Regex::new(r"^\s*([¹²³⁴⁵⁶⁷⁸⁹⁰]+)\s*(.*)$").unwrap();

    // "1. ", "1) ", "¹ ", "* ", "† " prefixes on a raw footnote string
    static ref RE_CONTENT_PREFIX: Regex =
        Regex::new(r"^\s*(?:\d+|[¹²³⁴⁵⁶⁷⁸⁹⁰]+|\*+|[†‡]+)[.)\]\s]+").unwrap();
    static ref RE_CONTENT_BRACKET_PREFIX: Regex = Regex::new(r"^\[(\d+)\]\s*").unwrap();
}

fn superscript_to_digit(c: char) -> char {
    match c {
        '¹' => '1',
        '²' => '2',
        '³' => '3',
        '⁴' => '4',
        '⁵' => '5',
        '⁶' => '6',
        '⁷' => '7',
        '⁸' => '8',
        '⁹' => '9',
        '⁰' => '0',
        _ => c,
    }
}

fn superscript_run_to_digits(run: &str) -> String {
    run.chars().map(superscript_to_digit).collect()
}

/// Detect footnote markers in paragraph text, sorted by position.
pub fn detect_footnote_markers(text: &str) -> Vec<FootnoteMarker> {
    if text.is_empty() {
        return Vec::new();
    }

    let mut markers: Vec<FootnoteMarker> = Vec::new();

    for m in RE_SUPERSCRIPT.find_iter(text) {
        markers.push(FootnoteMarker {
            marker: superscript_run_to_digits(m.as_str()),
            raw: m.as_str().to_string(),
            position: m.start(),
        });
    }

    for caps in RE_BRACKETED.captures_iter(text) {
        let whole = caps.get(0).unwrap();
        markers.push(FootnoteMarker {
            marker: caps[1].to_string(),
            raw: whole.as_str().to_string(),
            position: whole.start(),
        });
    }

    // Parenthetical numbers only count at a non-digit boundary, so that
    // "(2:255)" style citations and decimal spans are left alone.
    for caps in RE_PARENTHETICAL.captures_iter(text) {
        let whole = caps.get(0).unwrap();
        let prev_ok = text[..whole.start()]
            .chars()
            .next_back()
            .map(|c| !c.is_ascii_digit())
            .unwrap_or(false);
        let next_ok = text[whole.end()..]
            .chars()
            .next()
            .map(|c| !c.is_ascii_digit())
            .unwrap_or(true);
        if prev_ok && next_ok {
            markers.push(FootnoteMarker {
                marker: caps[1].to_string(),
                raw: whole.as_str().to_string(),
                position: whole.start(),
            });
        }
    }

    // An asterisk run preceded by whitespace is emphasis, not a marker
    for m in RE_ASTERISK.find_iter(text) {
        let attached = text[..m.start()]
            .chars()
            .next_back()
            .map(|c| !matches!(c, ' ' | '\t' | '\n'))
            .unwrap_or(true);
        if attached {
            markers.push(FootnoteMarker {
                marker: m.as_str().to_string(),
                raw: m.as_str().to_string(),
                position: m.start(),
            });
        }
    }

    for m in RE_DAGGER.find_iter(text) {
        markers.push(FootnoteMarker {
            marker: m.as_str().to_string(),
            raw: m.as_str().to_string(),
            position: m.start(),
        });
    }

    markers.sort_by_key(|m| m.position);

    debug(&format!(
        "footnote_markers_detected: count={} text_length={}",
        markers.len(),
        text.len()
    ));
    markers
}

/// Parse a footnote section into numbered definitions.
///
/// Recognizes "1. content", "1) content", "[1] content" and "¹ content"
/// lines; lines that start no new definition continue the previous one.
/// The first definition for a number wins.
pub fn detect_footnotes(text: &str) -> Vec<FootnoteDef> {
    if text.is_empty() {
        return Vec::new();
    }

    let mut footnotes: Vec<FootnoteDef> = Vec::new();
    let mut current: Option<FootnoteDef> = None;

    for line in text.lines() {
        let parsed = RE_DEF_BRACKETED
            .captures(line)
            .map(|c| (c[1].to_string(), c[2].trim().to_string()))
            .or_else(|| {
                RE_DEF_SUPERSCRIPT
                    .captures(line)
                    .map(|c| (superscript_run_to_digits(&c[1]), c[2].trim().to_string()))
            })
            .or_else(|| {
                RE_DEF_NUMBERED
                    .captures(line)
                    .map(|c| (c[1].to_string(), c[2].trim().to_string()))
            });

        match parsed {
            Some((number, content)) => {
                if let Some(def) = current.take() {
                    footnotes.push(def);
                }
                current = Some(FootnoteDef { number, content });
            }
            None => {
                if let Some(def) = current.as_mut() {
                    let cont = line.trim();
                    if !cont.is_empty() {
                        if !def.content.is_empty() {
                            def.content.push(' ');
                        }
                        def.content.push_str(cont);
                    }
                }
            }
        }
    }
    if let Some(def) = current.take() {
        footnotes.push(def);
    }

    // First definition per number wins; empty definitions are dropped
    let mut seen: Vec<String> = Vec::new();
    footnotes.retain(|f| {
        if f.content.is_empty() || seen.contains(&f.number) {
            false
        } else {
            seen.push(f.number.clone());
            true
        }
    });

    debug(&format!("footnotes_detected: count={} text_length={}", footnotes.len(), text.len()));
    footnotes
}

/// Strip the number/marker prefix from a raw footnote string,
/// e.g. "1. Bukhari 123" -> "Bukhari 123".
pub fn extract_footnote_content(raw_footnote: &str) -> String {
    if raw_footnote.is_empty() {
        return String::new();
    }

    let content = raw_footnote.trim();
    let content = RE_CONTENT_BRACKET_PREFIX.replace(content, "");
    let content = RE_CONTENT_PREFIX.replace(&content, "");
    content.trim().to_string()
}

/// Link footnote markers in paragraph text to the supplied footnote list.
///
/// A numeric marker with value n resolves to the n-th list entry
/// (1-indexed). Non-numeric markers and out-of-range values are skipped.
/// Output preserves the left-to-right order of markers in the text.
pub fn link_footnotes(text: &str, footnotes: &[String]) -> Vec<FootnoteLink> {
    if text.is_empty() || footnotes.is_empty() {
        return Vec::new();
    }

    let markers = detect_footnote_markers(text);
    let mut links: Vec<FootnoteLink> = Vec::new();

    for marker in &markers {
        let n: usize = match marker.marker.parse() {
            Ok(n) => n,
            Err(_) => continue,
        };
        if n < 1 || n > footnotes.len() {
            continue;
        }
        links.push(FootnoteLink {
            marker: marker.marker.clone(),
            definition_text: footnotes[n - 1].clone(),
            definition_index: n - 1,
            position: marker.position,
        });
    }

    debug(&format!(
        "footnotes_linked: markers_found={} links_created={}",
        markers.len(),
        links.len()
    ));
    links
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_superscript_run_is_one_marker() {
        let markers = detect_footnote_markers("Quote here¹²³");
        assert_eq!(markers.len(), 1);
        assert_eq!(markers[0].marker, "123");
    }

    #[test]
    fn test_parenthetical_boundary() {
        assert_eq!(detect_footnote_markers("As mentioned (1)").len(), 1);
        // Digit boundary on either side disqualifies the match
        assert!(detect_footnote_markers("12(3)").is_empty());
    }

    #[test]
    fn test_emphasis_asterisk_is_not_a_marker() {
        let markers = detect_footnote_markers("this is *emphasis* only");
        assert_eq!(markers.len(), 1);
        assert_eq!(markers[0].marker, "*");
    }

    #[test]
    fn test_extract_footnote_content() {
        assert_eq!(extract_footnote_content("1. Bukhari 123"), "Bukhari 123");
        assert_eq!(extract_footnote_content("[2] Quran 2:255"), "Quran 2:255");
        assert_eq!(extract_footnote_content("¹ First note"), "First note");
        assert_eq!(extract_footnote_content(""), "");
    }
}
