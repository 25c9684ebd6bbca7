//! HTML entity decoding for scraped posting text.
//!
//! Decoding must run before any keyword search: an encoded `&amp;` or
//! `&nbsp;` in the middle of a section header splits the keyword across
//! the entity boundary and the scan misses it.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

/// Named entities that actually show up in scraped postings. Anything not
/// listed passes through verbatim rather than being guessed at.
const NAMED_ENTITIES: &[(&str, &str)] = &[
    ("&amp;", "&"),
    ("&nbsp;", " "),
    ("&lt;", "<"),
    ("&gt;", ">"),
    ("&quot;", "\""),
    ("&#39;", "'"),
    ("&apos;", "'"),
    ("&hellip;", "…"),
    ("&ndash;", "–"),
    ("&mdash;", "—"),
];

static RE_NUMERIC_ENTITY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"&#(?:x([0-9a-fA-F]{1,6})|([0-9]{1,7}));").unwrap());

/// Decodes the known named entities plus numeric `&#NNN;` / `&#xHH;` forms.
/// Total over arbitrary input; malformed references are left as-is.
pub fn decode_entities(text: &str) -> String {
    let mut decoded = text.to_string();
    for (entity, replacement) in NAMED_ENTITIES {
        if decoded.contains(entity) {
            decoded = decoded.replace(entity, replacement);
        }
    }

    RE_NUMERIC_ENTITY
        .replace_all(&decoded, |caps: &Captures| {
            let parsed = match (caps.get(1), caps.get(2)) {
                (Some(hex), _) => u32::from_str_radix(hex.as_str(), 16).ok(),
                (_, Some(dec)) => dec.as_str().parse::<u32>().ok(),
                _ => None,
            };
            match parsed.and_then(char::from_u32) {
                Some(c) => c.to_string(),
                None => caps[0].to_string(),
            }
        })
        .into_owned()
}
