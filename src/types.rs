use std::str::FromStr;

use serde::{Serialize, Deserialize};
use thiserror::Error;

/// A validated Quran verse citation found in paragraph text.
///
/// `ayah_start`/`ayah_end` are absent for surah-name-only mentions
/// (e.g. "Surah Al-Kahf" without a verse number).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuranReference {
    pub surah: u16,
    pub ayah_start: Option<u32>,
    pub ayah_end: Option<u32>,
    /// Canonical display name, e.g. "Al-Baqarah"
    pub surah_name: Option<String>,
    /// The matched substring, trimmed
    pub raw_text: String,
    /// Byte offset of the match in the source text
    pub position: usize,
}

/// The fixed set of recognized hadith collections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HadithCollection {
    #[serde(rename = "bukhari")]
    Bukhari,
    #[serde(rename = "muslim")]
    Muslim,
    #[serde(rename = "abudawud")]
    AbuDawud,
    #[serde(rename = "tirmidhi")]
    Tirmidhi,
    #[serde(rename = "ibnmajah")]
    IbnMajah,
    #[serde(rename = "nasai")]
    Nasai,
    #[serde(rename = "muwatta")]
    Muwatta,
    #[serde(rename = "ahmad")]
    Ahmad,
    #[serde(rename = "darimi")]
    Darimi,
    #[serde(rename = "bayhaqi")]
    Bayhaqi,
}

impl HadithCollection {
    pub fn as_str(&self) -> &'static str {
        match self {
            HadithCollection::Bukhari => "bukhari",
            HadithCollection::Muslim => "muslim",
            HadithCollection::AbuDawud => "abudawud",
            HadithCollection::Tirmidhi => "tirmidhi",
            HadithCollection::IbnMajah => "ibnmajah",
            HadithCollection::Nasai => "nasai",
            HadithCollection::Muwatta => "muwatta",
            HadithCollection::Ahmad => "ahmad",
            HadithCollection::Darimi => "darimi",
            HadithCollection::Bayhaqi => "bayhaqi",
        }
    }
}

#[derive(Error, Debug, PartialEq, Eq)]
#[error("Unrecognized hadith collection key: {0}")]
pub struct ParseHadithCollectionError(String);

impl FromStr for HadithCollection {
    type Err = ParseHadithCollectionError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "bukhari" => Ok(HadithCollection::Bukhari),
            "muslim" => Ok(HadithCollection::Muslim),
            "abudawud" => Ok(HadithCollection::AbuDawud),
            "tirmidhi" => Ok(HadithCollection::Tirmidhi),
            "ibnmajah" => Ok(HadithCollection::IbnMajah),
            "nasai" => Ok(HadithCollection::Nasai),
            "muwatta" => Ok(HadithCollection::Muwatta),
            "ahmad" => Ok(HadithCollection::Ahmad),
            "darimi" => Ok(HadithCollection::Darimi),
            "bayhaqi" => Ok(HadithCollection::Bayhaqi),
            _ => Err(ParseHadithCollectionError(s.to_string())),
        }
    }
}

/// A hadith citation found in paragraph text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HadithReference {
    pub collection: HadithCollection,
    /// Full display name, e.g. "Sahih al-Bukhari"
    pub collection_name: String,
    pub hadith_number: u32,
    /// Book or volume number for "Bukhari, Book 1, Hadith 1" style citations
    pub book_number: Option<u32>,
    pub raw_text: String,
    pub position: usize,
}

/// A footnote marker token found in paragraph text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FootnoteMarker {
    /// Normalized marker token: digits for numeric markers, the raw
    /// symbol run for asterisk/dagger markers
    pub marker: String,
    /// The matched text as it appears in the source, e.g. "¹" or "[1]"
    pub raw: String,
    pub position: usize,
}

/// A numbered footnote definition parsed out of a footnote section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FootnoteDef {
    pub number: String,
    pub content: String,
}

/// A marker resolved against the supplied footnote list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FootnoteLink {
    pub marker: String,
    /// The footnote list entry, verbatim
    pub definition_text: String,
    /// Zero-based index into the supplied footnote list
    pub definition_index: usize,
    pub position: usize,
}

/// Grouping input: a paragraph id with its externally computed token count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Paragraph {
    pub id: i64,
    pub token_count: i64,
}

/// A contiguous run of paragraphs whose token sum falls in the target band.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParagraphGroup {
    pub order_index: usize,
    pub token_count: i64,
    pub paragraph_ids: Vec<i64>,
}

/// Caller-contract violations in the grouper. Detection failures are never
/// errors; these indicate a programming error in the caller.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum GroupingError {
    #[error("Invalid token band: min_tokens={min_tokens}, max_tokens={max_tokens}")]
    InvalidTokenBand { min_tokens: i64, max_tokens: i64 },

    #[error("Paragraph {paragraph_id} has negative token_count {token_count}")]
    NegativeTokenCount { paragraph_id: i64, token_count: i64 },
}

/// A taxonomy tag assigned by keyword-lexicon matching.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConceptTag {
    pub category: String,
    pub subcategory: String,
}
