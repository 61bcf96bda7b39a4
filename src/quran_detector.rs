//! Quran Reference Detection
//!
//! Scans paragraph text for Quran citations in several surface forms and
//! validates every candidate against the canonical surah index before it is
//! emitted. Candidates that fail validation are dropped silently; malformed
//! citations are common in scanned source text and must not abort a pass.

use std::collections::HashSet;

use lazy_static::lazy_static;
use regex::Regex;

use crate::canon::surah_display_name;
use crate::logger::debug;
use crate::types::QuranReference;

pub use crate::canon::{is_valid_reference, normalize_surah_name};

lazy_static! {
    // Quran 2:255; Qur'an 2:255-257; Q. 2:255; quran, 36:1
    static ref RE_KEYWORD_NUMERIC: Regex = Regex::new(
        r"(?i)\b(?:qur['’ʻʼ]?[aā]n|q\.)\s*,?\s*(\d{1,3})\s*:\s*(\d{1,3})(?:\s*[-–—]\s*(\d{1,3}))?"
    ).unwrap();

    // (2:255); ( 2: 255 ); (2:1-5)
    static ref RE_PAREN_NUMERIC: Regex = Regex::new(
        r"\(\s*(\d{1,3})\s*:\s*(\d{1,3})(?:\s*[-–—]\s*(\d{1,3}))?\s*\)"
    ).unwrap();

    // Surah Al-Baqarah; Sura Fatiha; Surah Al-Baqarah: 255; Surah Yasin verse 40
    static ref RE_NAMED: Regex = Regex::new(
        r"(?i)\b(?:surah|sura)\s+([a-zā'’][a-zā'’\-]*)(?:[\s:,]+(?:verse\s+)?(\d{1,3})(?:\s*[-–—]\s*(\d{1,3}))?)?"
    ).unwrap();

    // Al-Baqarah: 255; Al-Baqarah, verse 255; Al-Fatiha: 1-7
    static ref RE_NAME_VERSE: Regex = Regex::new(
        r"(?i)\b([a-zā'’][a-zā'’\-]*)[\s:,]+(?:verse\s+)?(\d{1,3})(?:\s*[-–—]\s*(\d{1,3}))?"
    ).unwrap();
}

/// A raw match before validation, carrying its byte span for
/// overlap resolution.
#[derive(Debug, Clone)]
struct Candidate {
    start: usize,
    end: usize,
    surah: u16,
    ayah_start: Option<u32>,
    ayah_end: Option<u32>,
    raw_text: String,
}

/// Detect Quran references in text, ordered by position of appearance.
///
/// Overlapping matches from different surface forms are resolved
/// leftmost-longest: the earlier start wins, and at equal starts the longer
/// match wins. Duplicate (surah, ayah_start, ayah_end) keys are emitted once.
pub fn detect_quran_refs(text: &str) -> Vec<QuranReference> {
    if text.trim().is_empty() {
        return Vec::new();
    }

    let mut candidates: Vec<Candidate> = Vec::new();

    for caps in RE_KEYWORD_NUMERIC.captures_iter(text) {
        if let Some(c) = numeric_candidate(&caps) {
            candidates.push(c);
        }
    }

    for caps in RE_PAREN_NUMERIC.captures_iter(text) {
        if let Some(c) = numeric_candidate(&caps) {
            candidates.push(c);
        }
    }

    for caps in RE_NAMED.captures_iter(text) {
        if let Some(c) = named_candidate(&caps) {
            candidates.push(c);
        }
    }

    // The reversed form requires a verse number, so it never produces
    // surah-only candidates.
    for caps in RE_NAME_VERSE.captures_iter(text) {
        if let Some(c) = named_candidate(&caps) {
            candidates.push(c);
        }
    }

    let refs = resolve_and_validate(candidates);
    debug(&format!("quran_refs_detected: count={} text_length={}", refs.len(), text.len()));
    refs
}

/// Candidate from a numeric pattern: group 1 surah, group 2 ayah start,
/// optional group 3 ayah end.
fn numeric_candidate(caps: &regex::Captures) -> Option<Candidate> {
    let whole = caps.get(0)?;
    let surah: u16 = caps.get(1)?.as_str().parse().ok()?;
    let ayah_start: u32 = caps.get(2)?.as_str().parse().ok()?;
    let ayah_end: Option<u32> = match caps.get(3) {
        Some(m) => Some(m.as_str().parse().ok()?),
        None => None,
    };

    Some(Candidate {
        start: whole.start(),
        end: whole.end(),
        surah,
        ayah_start: Some(ayah_start),
        ayah_end,
        raw_text: whole.as_str().trim().to_string(),
    })
}

/// Candidate from a named pattern: group 1 surah name, optional groups 2-3
/// for the ayah. Yields nothing when the name does not resolve.
fn named_candidate(caps: &regex::Captures) -> Option<Candidate> {
    let whole = caps.get(0)?;
    let surah = normalize_surah_name(caps.get(1)?.as_str())?;

    let ayah_start: Option<u32> = match caps.get(2) {
        Some(m) => Some(m.as_str().parse().ok()?),
        None => None,
    };
    let ayah_end: Option<u32> = match caps.get(3) {
        Some(m) => Some(m.as_str().parse().ok()?),
        None => None,
    };

    Some(Candidate {
        start: whole.start(),
        end: whole.end(),
        surah,
        ayah_start,
        ayah_end,
        raw_text: whole.as_str().trim().to_string(),
    })
}

fn resolve_and_validate(mut candidates: Vec<Candidate>) -> Vec<QuranReference> {
    // Leftmost-longest: earlier start first, longer span first at equal start
    candidates.sort_by(|a, b| a.start.cmp(&b.start).then(b.end.cmp(&a.end)));

    let mut accepted_spans: Vec<(usize, usize)> = Vec::new();
    let mut seen: HashSet<(u16, Option<u32>, Option<u32>)> = HashSet::new();
    let mut refs: Vec<QuranReference> = Vec::new();

    for cand in candidates {
        let overlaps = accepted_spans
            .iter()
            .any(|(s, e)| cand.start < *e && *s < cand.end);
        if overlaps {
            continue;
        }

        if let Some(start) = cand.ayah_start {
            if !is_valid_reference(cand.surah, start, cand.ayah_end) {
                continue;
            }
        }

        accepted_spans.push((cand.start, cand.end));

        let key = (cand.surah, cand.ayah_start, cand.ayah_end);
        if !seen.insert(key) {
            continue;
        }

        refs.push(QuranReference {
            surah: cand.surah,
            ayah_start: cand.ayah_start,
            ayah_end: cand.ayah_end,
            surah_name: surah_display_name(cand.surah).map(|s| s.to_string()),
            raw_text: cand.raw_text,
            position: cand.start,
        });
    }

    refs
}
