//! Paragraph Grouping
//!
//! Partitions an ordered paragraph sequence into contiguous groups whose
//! token sums fall inside a target band, for retrieval-chunk export. Token
//! counts are supplied by the caller; this module never tokenizes.

use std::collections::HashMap;

use crate::logger::debug;
use crate::types::{GroupingError, Paragraph, ParagraphGroup};

pub use crate::helpers::count_tokens;

pub const DEFAULT_MIN_TOKENS: i64 = 512;
pub const DEFAULT_MAX_TOKENS: i64 = 800;

struct ClosedGroup {
    paragraph_ids: Vec<i64>,
    token_count: i64,
    /// A single paragraph over max_tokens; never merged with neighbors
    oversize: bool,
}

/// Group paragraphs by greedy forward accumulation.
///
/// A group closes as soon as its running sum reaches `min_tokens`, so a
/// group only overshoots `max_tokens` when closing earlier would have left
/// it under the minimum. A paragraph larger than `max_tokens` is emitted
/// alone. The trailing remainder (always under the minimum) is merged into
/// the previous group when the combined sum still fits under `max_tokens`;
/// otherwise it is emitted as an undersized final group.
///
/// Band or token-count contract violations are caller programming errors
/// and fail fast; everything else is normal input.
pub fn create_groups(
    paragraphs: &[Paragraph],
    min_tokens: i64,
    max_tokens: i64,
) -> Result<Vec<ParagraphGroup>, GroupingError> {
    if min_tokens <= 0 || max_tokens <= 0 || min_tokens > max_tokens {
        return Err(GroupingError::InvalidTokenBand { min_tokens, max_tokens });
    }

    for para in paragraphs {
        if para.token_count < 0 {
            return Err(GroupingError::NegativeTokenCount {
                paragraph_id: para.id,
                token_count: para.token_count,
            });
        }
    }

    if paragraphs.is_empty() {
        return Ok(Vec::new());
    }

    let mut closed: Vec<ClosedGroup> = Vec::new();
    let mut current_ids: Vec<i64> = Vec::new();
    let mut current_sum: i64 = 0;

    for para in paragraphs {
        if para.token_count > max_tokens {
            if !current_ids.is_empty() {
                closed.push(ClosedGroup {
                    paragraph_ids: std::mem::take(&mut current_ids),
                    token_count: current_sum,
                    oversize: false,
                });
                current_sum = 0;
            }
            closed.push(ClosedGroup {
                paragraph_ids: vec![para.id],
                token_count: para.token_count,
                oversize: true,
            });
            continue;
        }

        current_ids.push(para.id);
        current_sum += para.token_count;

        if current_sum >= min_tokens {
            closed.push(ClosedGroup {
                paragraph_ids: std::mem::take(&mut current_ids),
                token_count: current_sum,
                oversize: false,
            });
            current_sum = 0;
        }
    }

    // Trailing remainder, always under min_tokens at this point
    if !current_ids.is_empty() {
        let merged = match closed.last_mut() {
            Some(prev) if !prev.oversize && prev.token_count + current_sum <= max_tokens => {
                prev.paragraph_ids.append(&mut current_ids);
                prev.token_count += current_sum;
                true
            }
            _ => false,
        };
        if !merged {
            closed.push(ClosedGroup {
                paragraph_ids: current_ids,
                token_count: current_sum,
                oversize: false,
            });
        }
    }

    let groups: Vec<ParagraphGroup> = closed
        .into_iter()
        .enumerate()
        .map(|(order_index, g)| ParagraphGroup {
            order_index,
            token_count: g.token_count,
            paragraph_ids: g.paragraph_ids,
        })
        .collect();

    debug(&format!(
        "groups_created: paragraph_count={} group_count={}",
        paragraphs.len(),
        groups.len()
    ));

    Ok(groups)
}

/// Total token count over a paragraph slice.
pub fn group_token_count(paragraphs: &[Paragraph]) -> i64 {
    paragraphs.iter().map(|p| p.token_count).sum()
}

/// Map each member paragraph id to its group's order_index.
pub fn assign_paragraphs_to_groups(groups: &[ParagraphGroup]) -> HashMap<i64, usize> {
    let mut para_to_group = HashMap::new();
    for group in groups {
        for id in &group.paragraph_ids {
            para_to_group.insert(*id, group.order_index);
        }
    }
    para_to_group
}
