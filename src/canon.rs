//! Canonical Lookup Tables
//!
//! The surah index (114 entries with ayah counts and name aliases) and the
//! hadith collection index are loaded from static JSON strings embedded at
//! compile time and cached for the process lifetime. They are never mutated
//! at runtime, so concurrent detection calls can share them freely.

use std::collections::HashMap;
use std::str::FromStr;
use std::sync::OnceLock;

use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::helpers::{latinize, normalize_apostrophes};
use crate::types::HadithCollection;

static QURAN_SURAHS_JSON: &str = include_str!("../assets/quran_surahs.json");
static HADITH_COLLECTIONS_JSON: &str = include_str!("../assets/hadith_collections.json");

// ============================================================================
// Data Structures (matching JSON schema)
// ============================================================================

/// One surah entry from the canonical index
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SurahEntry {
    /// Surah number, 1-114
    pub number: u16,

    /// Canonical display name, e.g. "Al-Baqarah"
    pub name: String,

    /// Number of ayahs, used to validate citations
    pub ayah_count: u32,

    /// Normalized alias spellings (lowercase, no article, no separators)
    pub aliases: Vec<String>,
}

/// One hadith collection entry from the canonical index
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CollectionEntry {
    pub key: String,
    pub name: String,
    pub aliases: Vec<String>,
}

/// The parsed surah index with lookup maps built once at load time
#[derive(Debug)]
pub struct SurahIndex {
    pub entries: Vec<SurahEntry>,
    by_number: HashMap<u16, usize>,
    by_alias: HashMap<String, u16>,
}

#[derive(Debug)]
pub struct CollectionIndex {
    pub entries: Vec<CollectionEntry>,
    by_alias: HashMap<String, HadithCollection>,
    names: HashMap<HadithCollection, String>,
}

// ============================================================================
// Global Cache
// ============================================================================

static SURAH_INDEX_CACHE: OnceLock<SurahIndex> = OnceLock::new();
static COLLECTION_INDEX_CACHE: OnceLock<CollectionIndex> = OnceLock::new();

lazy_static! {
    // "Al-Baqarah", "an-Nisa", "Ash-Shams", "Aal-E-Imran"
    static ref RE_SURAH_ARTICLE: Regex =
        Regex::new(r"^(?:aal|ash|al|an|as|at|ad|az|ar)-?").unwrap();

    // "Sahih al-Bukhari", "Sunan an-Nasai", "Jami at-Tirmidhi"
    static ref RE_COLLECTION_HONORIFIC: Regex =
        Regex::new(r"^(?:sahih|saheeh|sunan|jami|musnad)\s*").unwrap();
    static ref RE_COLLECTION_ARTICLE: Regex =
        Regex::new(r"^(?:al-|an-|at-|ad-)").unwrap();
}

// ============================================================================
// Public API
// ============================================================================

/// Load and parse the surah index. Cached after the first call.
pub fn surah_index() -> &'static SurahIndex {
    SURAH_INDEX_CACHE.get_or_init(|| {
        let entries: Vec<SurahEntry> = serde_json::from_str(QURAN_SURAHS_JSON)
            .expect("Failed to parse quran_surahs.json");

        let mut by_number = HashMap::new();
        let mut by_alias = HashMap::new();
        for (idx, entry) in entries.iter().enumerate() {
            by_number.insert(entry.number, idx);
            for alias in &entry.aliases {
                by_alias.insert(alias.clone(), entry.number);
            }
        }

        SurahIndex { entries, by_number, by_alias }
    })
}

/// Load and parse the hadith collection index. Cached after the first call.
pub fn collection_index() -> &'static CollectionIndex {
    COLLECTION_INDEX_CACHE.get_or_init(|| {
        let entries: Vec<CollectionEntry> = serde_json::from_str(HADITH_COLLECTIONS_JSON)
            .expect("Failed to parse hadith_collections.json");

        let mut by_alias = HashMap::new();
        let mut names = HashMap::new();
        for entry in &entries {
            let collection = HadithCollection::from_str(&entry.key)
                .expect("hadith_collections.json key must match HadithCollection");
            names.insert(collection, entry.name.clone());
            for alias in &entry.aliases {
                by_alias.insert(alias.clone(), collection);
            }
        }

        CollectionIndex { entries, by_alias, names }
    })
}

/// Canonical display name for a surah number, e.g. 2 -> "Al-Baqarah".
pub fn surah_display_name(surah: u16) -> Option<&'static str> {
    let index = surah_index();
    index.by_number.get(&surah).map(|i| index.entries[*i].name.as_str())
}

/// Ayah count for a surah number, None for out-of-range numbers.
pub fn max_ayah(surah: u16) -> Option<u32> {
    let index = surah_index();
    index.by_number.get(&surah).map(|i| index.entries[*i].ayah_count)
}

/// Resolve a surah name in any common spelling to its number.
///
/// Lowercases, folds apostrophes and diacritics, removes hyphens and
/// spaces, and tries the alias table both with and without the leading
/// Arabic article ("al-baqarah" and "baqarah" both resolve to 2).
pub fn normalize_surah_name(name: &str) -> Option<u16> {
    if name.trim().is_empty() {
        return None;
    }

    let normalized = latinize(&normalize_apostrophes(name.trim()));

    let direct: String = normalized
        .chars()
        .filter(|c| *c != '-' && *c != ' ' && *c != '\'')
        .collect();

    let index = surah_index();
    if let Some(number) = index.by_alias.get(&direct) {
        return Some(*number);
    }

    let stripped = RE_SURAH_ARTICLE.replace(&normalized, "");
    let stripped: String = stripped
        .chars()
        .filter(|c| *c != '-' && *c != ' ' && *c != '\'')
        .collect();

    index.by_alias.get(&stripped).copied()
}

/// Check a Quran citation against the canonical ayah counts.
pub fn is_valid_reference(surah: u16, ayah_start: u32, ayah_end: Option<u32>) -> bool {
    let max = match max_ayah(surah) {
        Some(m) => m,
        None => return false,
    };

    if ayah_start < 1 || ayah_start > max {
        return false;
    }

    if let Some(end) = ayah_end {
        if end < ayah_start || end > max {
            return false;
        }
    }

    true
}

/// Resolve a hadith collection name in any common spelling.
///
/// Strips honorific prefixes (Sahih, Sunan, Jami, Musnad) and the Arabic
/// article, removes separators, then looks up the alias table.
pub fn normalize_collection_name(name: &str) -> Option<HadithCollection> {
    if name.trim().is_empty() {
        return None;
    }

    let normalized = latinize(&normalize_apostrophes(name.trim()));
    let normalized = RE_COLLECTION_HONORIFIC.replace(&normalized, "");
    let normalized = RE_COLLECTION_ARTICLE.replace(&normalized, "");
    let normalized: String = normalized
        .chars()
        .filter(|c| *c != '-' && *c != ' ' && *c != '\'')
        .collect();

    collection_index().by_alias.get(&normalized).copied()
}

/// Full display name for a collection, e.g. Bukhari -> "Sahih al-Bukhari".
pub fn collection_display_name(collection: HadithCollection) -> &'static str {
    collection_index()
        .names
        .get(&collection)
        .map(|s| s.as_str())
        .unwrap_or_else(|| collection.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_surah_index_has_all_114() {
        let index = surah_index();
        assert_eq!(index.entries.len(), 114);
        for n in 1..=114u16 {
            assert!(max_ayah(n).is_some(), "surah {} missing", n);
        }
    }

    #[test]
    fn test_total_ayah_count_is_canonical() {
        let total: u32 = surah_index().entries.iter().map(|e| e.ayah_count).sum();
        assert_eq!(total, 6236);
    }

    #[test]
    fn test_normalize_surah_name_variants() {
        assert_eq!(normalize_surah_name("Al-Baqarah"), Some(2));
        assert_eq!(normalize_surah_name("al-baqarah"), Some(2));
        assert_eq!(normalize_surah_name("AL-BAQARAH"), Some(2));
        assert_eq!(normalize_surah_name("Baqara"), Some(2));
        assert_eq!(normalize_surah_name("Fatiha"), Some(1));
        assert_eq!(normalize_surah_name("Al-Fatihah"), Some(1));
        assert_eq!(normalize_surah_name("Ya-Sin"), Some(36));
        assert_eq!(normalize_surah_name("Yaseen"), Some(36));
        assert_eq!(normalize_surah_name("An-Nas"), Some(114));
    }

    #[test]
    fn test_normalize_surah_name_article_is_not_greedy() {
        // Names that begin with article-like letters must still resolve
        assert_eq!(normalize_surah_name("Asr"), Some(103));
        assert_eq!(normalize_surah_name("Alaq"), Some(96));
        assert_eq!(normalize_surah_name("Anam"), Some(6));
    }

    #[test]
    fn test_normalize_surah_name_unknown() {
        assert_eq!(normalize_surah_name("NotASurah"), None);
        assert_eq!(normalize_surah_name(""), None);
    }

    #[test]
    fn test_is_valid_reference() {
        assert!(is_valid_reference(2, 255, None));
        assert!(is_valid_reference(1, 1, Some(7)));
        assert!(!is_valid_reference(999, 1, None));
        assert!(!is_valid_reference(0, 1, None));
        assert!(!is_valid_reference(2, 300, None));
        assert!(!is_valid_reference(2, 0, None));
        assert!(!is_valid_reference(1, 5, Some(3)));
        assert!(!is_valid_reference(1, 1, Some(8)));
    }

    #[test]
    fn test_normalize_collection_name() {
        assert_eq!(normalize_collection_name("Bukhari"), Some(HadithCollection::Bukhari));
        assert_eq!(normalize_collection_name("Sahih al-Bukhari"), Some(HadithCollection::Bukhari));
        assert_eq!(normalize_collection_name("Jami at-Tirmidhi"), Some(HadithCollection::Tirmidhi));
        assert_eq!(normalize_collection_name("Abu Dawood"), Some(HadithCollection::AbuDawud));
        assert_eq!(normalize_collection_name("Malik's Muwatta"), Some(HadithCollection::Muwatta));
        assert_eq!(normalize_collection_name("Smith"), None);
    }

    #[test]
    fn test_collection_display_name() {
        assert_eq!(collection_display_name(HadithCollection::Bukhari), "Sahih al-Bukhari");
        assert_eq!(collection_display_name(HadithCollection::Muwatta), "Muwatta Malik");
    }
}
