//! Export Building
//!
//! Builds the Book JSON and retrieval-chunk JSON documents from annotated
//! paragraphs and their group assignments. The excluded persistence
//! collaborator writes the strings out; nothing here touches disk.

use anyhow::Result;
use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::logger::debug;
use crate::types::{ConceptTag, FootnoteLink, HadithReference, ParagraphGroup, QuranReference};

/// A fully annotated paragraph as assembled by the ingestion pipeline.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AnnotatedParagraph {
    pub id: i64,
    pub text: String,
    pub order_index: usize,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub chapter_title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_number: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_heading: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub heading_level: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token_count: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_id: Option<usize>,

    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub quran_refs: Vec<QuranReference>,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub hadith_refs: Vec<HadithReference>,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub footnotes: Vec<FootnoteLink>,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub concepts: Vec<ConceptTag>,
}

/// Book-level input to the exporters.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BookExport {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_file: Option<String>,
    pub paragraphs: Vec<AnnotatedParagraph>,
    pub groups: Vec<ParagraphGroup>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportStats {
    pub paragraph_count: usize,
    pub group_count: usize,
    pub total_tokens: i64,
}

#[derive(Debug, Clone, Serialize)]
struct BookJsonDocument<'a> {
    exported_at: String,
    format: &'static str,
    version: &'static str,
    #[serde(flatten)]
    book: &'a BookExport,
    stats: ExportStats,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChunkMetadata {
    pub source: String,
    pub title: String,
    pub author: String,
    pub chunk_index: usize,
    pub token_count: i64,
    pub paragraph_ids: Vec<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chapter: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_start: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_end: Option<u32>,
}

/// One retrieval chunk per group: the member texts joined with blank lines.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChunkExport {
    pub content: String,
    pub metadata: ChunkMetadata,
}

pub fn export_stats(book: &BookExport) -> ExportStats {
    ExportStats {
        paragraph_count: book.paragraphs.len(),
        group_count: book.groups.len(),
        total_tokens: book.groups.iter().map(|g| g.token_count).sum(),
    }
}

/// Export the full book: metadata, annotated paragraphs, groups and stats.
pub fn export_book_json(book: &BookExport) -> Result<String> {
    let doc = BookJsonDocument {
        exported_at: Utc::now().to_rfc3339(),
        format: "book_json",
        version: "1.0",
        book,
        stats: export_stats(book),
    };

    let json = serde_json::to_string_pretty(&doc)?;
    debug(&format!(
        "book_json_exported: title={} paragraphs={} groups={}",
        book.title,
        book.paragraphs.len(),
        book.groups.len()
    ));
    Ok(json)
}

/// Build one retrieval chunk per group.
pub fn build_retrieval_chunks(book: &BookExport) -> Vec<ChunkExport> {
    let mut chunks: Vec<ChunkExport> = Vec::new();

    for group in &book.groups {
        let members: Vec<&AnnotatedParagraph> = group
            .paragraph_ids
            .iter()
            .filter_map(|id| book.paragraphs.iter().find(|p| p.id == *id))
            .collect();

        let content = members
            .iter()
            .map(|p| p.text.as_str())
            .collect::<Vec<_>>()
            .join("\n\n");

        // Chapter only when the members that carry one agree on it
        let chapters: Vec<&str> = members
            .iter()
            .filter_map(|p| p.chapter_title.as_deref())
            .collect();
        let chapter = match chapters.first() {
            Some(first) if chapters.iter().all(|c| c == first) => Some(first.to_string()),
            _ => None,
        };

        let pages: Vec<u32> = members.iter().filter_map(|p| p.page_number).collect();
        let page_start = pages.iter().min().copied();
        let page_end = pages.iter().max().copied();

        chunks.push(ChunkExport {
            content,
            metadata: ChunkMetadata {
                source: book.slug.clone().unwrap_or_default(),
                title: book.title.clone(),
                author: book.author.clone().unwrap_or_default(),
                chunk_index: group.order_index,
                token_count: group.token_count,
                paragraph_ids: group.paragraph_ids.clone(),
                chapter,
                page_start,
                page_end,
            },
        });
    }

    chunks
}

/// Export the retrieval chunks as a JSON array.
pub fn export_retrieval_chunks(book: &BookExport) -> Result<String> {
    let chunks = build_retrieval_chunks(book);
    let json = serde_json::to_string_pretty(&chunks)?;
    debug(&format!(
        "retrieval_chunks_exported: title={} chunks={}",
        book.title,
        chunks.len()
    ));
    Ok(json)
}
