//! Schedule fit sub-score.
//!
//! Keyword-overlap heuristic, not a calendar intersection: both sides are
//! free text ("part-time, ca tối", "Làm ca sáng cuối tuần"), so the best we
//! can do is map each side onto a small shared vocabulary of shift and
//! arrangement tokens and compare the token sets.

use std::collections::HashSet;

use crate::content::keywords::fold;

/// Canonical schedule tokens with their folded surface variants.
const SCHEDULE_VOCABULARY: &[(&str, &[&str])] = &[
    ("full_time", &["full time", "fulltime", "toan thoi gian"]),
    ("part_time", &["part time", "parttime", "ban thoi gian"]),
    ("remote", &["remote", "tu xa", "lam tai nha", "online"]),
    ("morning", &["ca sang", "buoi sang", "morning"]),
    ("evening", &["ca toi", "buoi toi", "ca dem", "evening", "night"]),
    ("weekend", &["cuoi tuan", "weekend"]),
    ("flexible", &["linh hoat", "xoay ca", "flexible"]),
];

/// Tokens recognized in one side's text. Matching runs over the folded
/// form with separator punctuation spaced out, so "Part-Time", "part time"
/// and "ca tối"/"ca toi" all land on the same tokens.
fn extract_tokens(text: &str) -> HashSet<&'static str> {
    let folded = fold(text).replace(['-', '_', '/'], " ");
    SCHEDULE_VOCABULARY
        .iter()
        .filter(|(_, variants)| variants.iter().any(|v| folded.contains(v)))
        .map(|(token, _)| *token)
        .collect()
}

/// Fraction of the candidate's asserted schedule tokens the job also
/// mentions. `None` when either side has no text or no recognizable tokens
/// — unknown, excluded from the weighted sum.
pub fn evaluate_schedule(
    job_schedule: Option<&str>,
    job_work_type: Option<&str>,
    availability: Option<&str>,
) -> Option<f64> {
    let availability = availability?;
    let wanted = extract_tokens(availability);
    if wanted.is_empty() {
        return None;
    }

    let mut offered = HashSet::new();
    if let Some(text) = job_schedule {
        offered.extend(extract_tokens(text));
    }
    if let Some(text) = job_work_type {
        offered.extend(extract_tokens(text));
    }
    if offered.is_empty() {
        return None;
    }

    let matched = wanted.intersection(&offered).count();
    Some(matched as f64 / wanted.len() as f64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_arrangement_match() {
        let score = evaluate_schedule(Some("part-time, ca tối"), None, Some("part time ca tối"));
        assert_eq!(score, Some(1.0));
    }

    #[test]
    fn test_partial_overlap() {
        let score =
            evaluate_schedule(Some("ca sáng"), None, Some("ca sáng hoặc cuối tuần")).unwrap();
        assert!((score - 0.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_work_type_counts_as_job_schedule() {
        let score = evaluate_schedule(None, Some("remote"), Some("làm từ xa"));
        assert_eq!(score, Some(1.0));
    }

    #[test]
    fn test_cross_language_variants_share_tokens() {
        let score = evaluate_schedule(Some("weekend shifts"), None, Some("cuối tuần"));
        assert_eq!(score, Some(1.0));
    }

    #[test]
    fn test_missing_availability_is_unknown() {
        assert_eq!(evaluate_schedule(Some("full time"), None, None), None);
    }

    #[test]
    fn test_unrecognizable_text_is_unknown_not_zero() {
        assert_eq!(
            evaluate_schedule(Some("full time"), None, Some("tùy sắp xếp")),
            None
        );
        assert_eq!(
            evaluate_schedule(Some("giờ hành chính"), None, Some("ca tối")),
            None
        );
    }

    #[test]
    fn test_no_overlap_scores_zero() {
        let score = evaluate_schedule(Some("ca sáng"), None, Some("ca tối")).unwrap();
        assert_eq!(score, 0.0);
    }
}
