//! Splits one free-text posting blob into description / requirements /
//! benefits. Scraped postings have no reliable delimiters: sections arrive
//! in any order, run together, sometimes entity-encoded. The splitter is
//! total — malformed input degrades to "everything is the description",
//! never to an error, and it never invents text absent from the input.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::content::entities::decode_entities;
use crate::content::keywords::{fold, fold_with_map, Section, SectionKeywords};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NormalizedJobContent {
    pub description: String,
    pub requirements: String,
    pub benefits: String,
}

/// A located section header, in folded-string byte offsets.
struct Marker {
    section: Section,
    start: usize,
    end: usize,
}

static RE_WHITESPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

/// Partitions `raw` into the three sections using the given keyword table.
///
/// Entity decoding runs first (encoded entities can split a keyword across
/// the reference boundary), then a single accent-folded scan locates the
/// first occurrence of each section's keyword. Each section's text spans
/// from just after its keyword to the next located keyword. Sections are
/// independent: a missing keyword yields `""` for that section only.
pub fn normalize_content(raw: &str, keywords: &SectionKeywords) -> NormalizedJobContent {
    if raw.trim().is_empty() {
        return NormalizedJobContent::default();
    }

    let decoded = decode_entities(raw);
    let (folded, offset_map) = fold_with_map(&decoded);

    let mut markers: Vec<Marker> = Vec::new();
    for section in Section::ALL {
        if let Some((start, end)) = locate_section(&folded, keywords, section) {
            markers.push(Marker {
                section,
                start,
                end,
            });
        }
    }

    // No header anywhere: the whole blob is the description.
    if markers.is_empty() {
        return NormalizedJobContent {
            description: clean_section(&decoded),
            ..NormalizedJobContent::default()
        };
    }

    markers.sort_by_key(|m| m.start);

    let mut content = NormalizedJobContent::default();
    for (i, marker) in markers.iter().enumerate() {
        let next_start = markers
            .get(i + 1)
            .map(|m| m.start)
            .unwrap_or(folded.len())
            // Guards against a later header overlapping this one's keyword.
            .max(marker.end);

        let text = clean_section(&decoded[offset_map[marker.end]..offset_map[next_start]]);
        match marker.section {
            Section::Description => content.description = text,
            Section::Requirements => content.requirements = text,
            Section::Benefits => content.benefits = text,
        }
    }

    content
}

/// Earliest match of any keyword variant for `section` in the folded text.
/// On a tie at the same start offset the longer variant wins, so
/// "mô tả công việc" is not truncated to its prefix "mô tả".
fn locate_section(
    folded: &str,
    keywords: &SectionKeywords,
    section: Section,
) -> Option<(usize, usize)> {
    let mut best: Option<(usize, usize)> = None;
    for variant in keywords.variants(section) {
        let needle = fold(variant);
        if needle.is_empty() {
            continue;
        }
        if let Some(pos) = folded.find(&needle) {
            let candidate = (pos, pos + needle.len());
            best = match best {
                Some(b) if b.0 < candidate.0 || (b.0 == candidate.0 && b.1 >= candidate.1) => {
                    Some(b)
                }
                _ => Some(candidate),
            };
        }
    }
    best
}

/// Trims a raw section slice: drops the delimiter left over after the
/// keyword (": ", " - ") and collapses whitespace runs into single spaces.
fn clean_section(text: &str) -> String {
    let trimmed = text
        .trim()
        .trim_start_matches([':', '-', '–', '—'])
        .trim();
    RE_WHITESPACE.replace_all(trimmed, " ").into_owned()
}
