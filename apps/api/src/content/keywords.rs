//! Section-header vocabulary and the accent folding used to match it.
//!
//! The keyword table is injectable configuration, not hard-coded into the
//! splitting algorithm, so adding a locale means adding variants here and
//! nowhere else. Matching is case-insensitive and accent-insensitive:
//! scraped postings spell the same header as "Quyền lợi", "QUYỀN LỢI" or
//! "quyen loi" depending on the source site.

use serde::{Deserialize, Serialize};
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// The three semantic sections of a posting body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Section {
    Description,
    Requirements,
    Benefits,
}

impl Section {
    pub const ALL: [Section; 3] = [
        Section::Description,
        Section::Requirements,
        Section::Benefits,
    ];
}

/// Keyword variants per section. Longer variants are listed first so
/// "mô tả công việc" is claimed before its prefix "mô tả".
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SectionKeywords {
    pub description: Vec<String>,
    pub requirements: Vec<String>,
    pub benefits: Vec<String>,
}

impl SectionKeywords {
    pub fn variants(&self, section: Section) -> &[String] {
        match section {
            Section::Description => &self.description,
            Section::Requirements => &self.requirements,
            Section::Benefits => &self.benefits,
        }
    }
}

impl Default for SectionKeywords {
    fn default() -> Self {
        fn owned(items: &[&str]) -> Vec<String> {
            items.iter().map(|s| s.to_string()).collect()
        }
        SectionKeywords {
            description: owned(&[
                "mô tả công việc",
                "job description",
                "mô tả",
                "description",
            ]),
            requirements: owned(&[
                "yêu cầu công việc",
                "yêu cầu ứng viên",
                "requirements",
                "qualifications",
                "yêu cầu",
            ]),
            benefits: owned(&["quyền lợi", "phúc lợi", "benefits", "perks"]),
        }
    }
}

/// Case- and accent-folds one char. Vietnamese đ/Đ do not decompose under
/// NFD, so they get a special case.
fn fold_char(c: char, out: &mut String) {
    match c {
        'đ' | 'Đ' => out.push('d'),
        _ => {
            for d in c.nfd() {
                if is_combining_mark(d) {
                    continue;
                }
                out.extend(d.to_lowercase());
            }
        }
    }
}

/// Folds a keyword (or any needle) for comparison.
pub fn fold(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        fold_char(c, &mut out);
    }
    out
}

/// Folds a haystack and keeps, per folded byte, the byte offset of the
/// original char it came from. `map` carries one trailing sentinel equal to
/// `text.len()`, so `map[folded_end]` is always valid for a match end.
pub fn fold_with_map(text: &str) -> (String, Vec<usize>) {
    let mut folded = String::with_capacity(text.len());
    let mut map = Vec::with_capacity(text.len() + 1);
    for (orig_idx, c) in text.char_indices() {
        let before = folded.len();
        fold_char(c, &mut folded);
        for _ in before..folded.len() {
            map.push(orig_idx);
        }
    }
    map.push(text.len());
    (folded, map)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fold_lowercases_and_strips_accents() {
        assert_eq!(fold("QUYỀN LỢI"), "quyen loi");
        assert_eq!(fold("Mô Tả Công Việc"), "mo ta cong viec");
        assert_eq!(fold("Requirements"), "requirements");
    }

    #[test]
    fn test_fold_handles_d_bar() {
        assert_eq!(fold("Tốt nghiệp đại học"), "tot nghiep dai hoc");
    }

    #[test]
    fn test_fold_with_map_offsets_point_into_original() {
        let text = "Yêu cầu: x";
        let (folded, map) = fold_with_map(text);
        assert_eq!(folded, "yeu cau: x");

        let start = folded.find("yeu cau").unwrap();
        let end = start + "yeu cau".len();
        // Mapped end lands on the ':' of the original string.
        assert_eq!(&text[map[end]..], ": x");
    }

    #[test]
    fn test_fold_with_map_sentinel_covers_string_end() {
        let (folded, map) = fold_with_map("ab");
        assert_eq!(map[folded.len()], 2);
    }

    #[test]
    fn test_default_table_lists_longer_variants_first() {
        let table = SectionKeywords::default();
        assert_eq!(table.variants(Section::Description)[0], "mô tả công việc");
        assert!(table
            .variants(Section::Requirements)
            .iter()
            .any(|v| v == "yêu cầu"));
    }
}
