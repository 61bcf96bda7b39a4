//! Hadith Reference Detection
//!
//! Matches citations of the recognized hadith collections, resolving alias
//! spellings through the canonical collection index. A collection keyword
//! without a trailing number is not a citation and produces nothing.

use std::collections::HashSet;

use lazy_static::lazy_static;
use regex::Regex;

use crate::canon::collection_display_name;
use crate::logger::debug;
use crate::types::{HadithCollection, HadithReference};

pub use crate::canon::normalize_collection_name;

// Alias spellings of the recognized collections, shared by both patterns.
const COLLECTION_KEYWORDS: &str = concat!(
    r"bukhari|bukhaari|bukhaaree",
    r"|muslim",
    r"|abu\s*(?:dawud|dawood|daud)",
    r"|tirmidhi|tirmizi|tirmidhee",
    r"|ibn\s*majah?",
    r"|nasa['’]?i|nasaai",
    r"|muwatta(?:\s+malik)?|malik['’]?s?\s+muwatta",
    r"|ahmad|ahmed",
    r"|darimi|daarimi",
    r"|bayhaqi|bayhaqee",
);

lazy_static! {
    // Bukhari 1234; Sahih al-Bukhari, no. 1234; Bukhari #1234; Bukhari: 1234
    static ref RE_COLLECTION_NUMBER: Regex = Regex::new(&format!(
        r"(?i)\b(?:(?:sahih|saheeh|sunan|jami|musnad)\s+)?(?:al-|an-|at-|ad-)?({COLLECTION_KEYWORDS})[\s,.:]*(?:(?:no\.?|#|hadith)\s*)?(\d+)\b"
    )).unwrap();

    // Bukhari, Book 1, Hadith 1; Muslim Book 5 Hadith 23; Tirmidhi Vol. 3, No. 456
    static ref RE_COLLECTION_BOOK: Regex = Regex::new(&format!(
        r"(?i)\b(?:(?:sahih|saheeh|sunan|jami|musnad)\s+)?(?:al-|an-|at-|ad-)?({COLLECTION_KEYWORDS})[\s,]*(?:book|vol\.?|volume)\s*(\d+)[\s,]*(?:(?:hadith|no\.?|#)\s*)?(\d+)\b"
    )).unwrap();
}

#[derive(Debug, Clone)]
struct Candidate {
    start: usize,
    end: usize,
    collection: HadithCollection,
    hadith_number: u32,
    book_number: Option<u32>,
    raw_text: String,
}

/// Detect hadith references in text, ordered by position of appearance.
///
/// The book/volume form takes precedence over the bare collection+number
/// form on overlapping spans (leftmost-longest). Duplicate
/// (collection, book, number) keys are emitted once.
pub fn detect_hadith_refs(text: &str) -> Vec<HadithReference> {
    if text.trim().is_empty() {
        return Vec::new();
    }

    let mut candidates: Vec<Candidate> = Vec::new();

    for caps in RE_COLLECTION_BOOK.captures_iter(text) {
        let whole = match caps.get(0) {
            Some(m) => m,
            None => continue,
        };
        let collection = match normalize_collection_name(&caps[1]) {
            Some(c) => c,
            None => continue,
        };
        let (book, number) = match (caps[2].parse::<u32>(), caps[3].parse::<u32>()) {
            (Ok(b), Ok(n)) if n > 0 => (b, n),
            _ => continue,
        };
        candidates.push(Candidate {
            start: whole.start(),
            end: whole.end(),
            collection,
            hadith_number: number,
            book_number: Some(book),
            raw_text: whole.as_str().trim().to_string(),
        });
    }

    for caps in RE_COLLECTION_NUMBER.captures_iter(text) {
        let whole = match caps.get(0) {
            Some(m) => m,
            None => continue,
        };
        let collection = match normalize_collection_name(&caps[1]) {
            Some(c) => c,
            None => continue,
        };
        let number = match caps[2].parse::<u32>() {
            Ok(n) if n > 0 => n,
            _ => continue,
        };
        candidates.push(Candidate {
            start: whole.start(),
            end: whole.end(),
            collection,
            hadith_number: number,
            book_number: None,
            raw_text: whole.as_str().trim().to_string(),
        });
    }

    // Leftmost-longest across both forms
    candidates.sort_by(|a, b| a.start.cmp(&b.start).then(b.end.cmp(&a.end)));

    let mut accepted_spans: Vec<(usize, usize)> = Vec::new();
    let mut seen: HashSet<(HadithCollection, Option<u32>, u32)> = HashSet::new();
    let mut refs: Vec<HadithReference> = Vec::new();

    for cand in candidates {
        let overlaps = accepted_spans
            .iter()
            .any(|(s, e)| cand.start < *e && *s < cand.end);
        if overlaps {
            continue;
        }
        accepted_spans.push((cand.start, cand.end));

        let key = (cand.collection, cand.book_number, cand.hadith_number);
        if !seen.insert(key) {
            continue;
        }

        refs.push(HadithReference {
            collection: cand.collection,
            collection_name: collection_display_name(cand.collection).to_string(),
            hadith_number: cand.hadith_number,
            book_number: cand.book_number,
            raw_text: cand.raw_text,
            position: cand.start,
        });
    }

    debug(&format!("hadith_refs_detected: count={} text_length={}", refs.len(), text.len()));
    refs
}
