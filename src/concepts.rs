//! Concept Tagging
//!
//! Keyword-lexicon matching against the embedded taxonomy. Each taxonomy
//! entry names a category, a default subcategory and its trigger keywords;
//! a paragraph receives at most one tag per category, in taxonomy order.

use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

use crate::logger::debug;
use crate::types::ConceptTag;

static CONCEPT_TAXONOMY_JSON: &str = include_str!("../assets/concept_taxonomy.json");

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaxonomyEntry {
    pub category: String,
    pub display_name: String,
    pub subcategory: String,
    pub keywords: Vec<String>,
}

static TAXONOMY_CACHE: OnceLock<Vec<TaxonomyEntry>> = OnceLock::new();

/// Load and parse the taxonomy. Cached after the first call.
pub fn taxonomy() -> &'static [TaxonomyEntry] {
    TAXONOMY_CACHE.get_or_init(|| {
        serde_json::from_str(CONCEPT_TAXONOMY_JSON)
            .expect("Failed to parse concept_taxonomy.json")
    })
}

/// Tag a paragraph with taxonomy concepts by keyword matching.
pub fn extract_concepts(text: &str) -> Vec<ConceptTag> {
    if text.trim().is_empty() {
        return Vec::new();
    }

    let text_lower = text.to_lowercase();
    let mut tags: Vec<ConceptTag> = Vec::new();

    for entry in taxonomy() {
        if entry.keywords.iter().any(|kw| text_lower.contains(kw.as_str())) {
            tags.push(ConceptTag {
                category: entry.category.clone(),
                subcategory: entry.subcategory.clone(),
            });
        }
    }

    debug(&format!("concepts_extracted: count={} text_length={}", tags.len(), text.len()));
    tags
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_taxonomy_loads() {
        assert!(!taxonomy().is_empty());
    }

    #[test]
    fn test_keyword_match() {
        let tags = extract_concepts("Patience and gratitude bring inner peace.");
        let categories: Vec<&str> = tags.iter().map(|t| t.category.as_str()).collect();
        assert!(categories.contains(&"SPIRITUALITY"));
        assert!(categories.contains(&"PEACE"));
    }

    #[test]
    fn test_one_tag_per_category() {
        let tags = extract_concepts("peace peaceful harmony");
        assert_eq!(tags.iter().filter(|t| t.category == "PEACE").count(), 1);
    }

    #[test]
    fn test_no_match() {
        assert!(extract_concepts("Unrelated administrative text").is_empty());
        assert!(extract_concepts("").is_empty());
    }
}
