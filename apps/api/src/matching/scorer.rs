//! The composite match scorer.
//!
//! Pure and deterministic: identical inputs always produce the identical
//! `MatchResult`, no I/O, no hidden state. Sub-scores that cannot be
//! computed (missing coordinates, no salary data, no schedule text) are
//! excluded and the weights renormalized over what remains — a job is
//! never penalized for data it doesn't have. Skills always produce a score
//! (empty requirement lists score the neutral constant), so the total is
//! defined for every job/profile pair.
//!
//! The scorer sits behind a trait carried in `AppState` as
//! `Arc<dyn MatchScorer>`, so an alternative backend can be swapped in
//! without touching handlers.

use serde::{Deserialize, Serialize};

use crate::matching::location::evaluate_location;
use crate::matching::salary::{evaluate_salary, WorkHoursBaseline};
use crate::matching::schedule::evaluate_schedule;
use crate::matching::skills::skills_score;
use crate::models::job::{GeoPoint, JobPosting};
use crate::models::profile::CandidateProfile;

/// Fixed weights for the four dimensions. Renormalized at scoring time over
/// whichever sub-scores are known.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct MatchWeights {
    pub skills: f64,
    pub location: f64,
    pub salary: f64,
    pub schedule: f64,
}

impl Default for MatchWeights {
    fn default() -> Self {
        MatchWeights {
            skills: 0.40,
            location: 0.25,
            salary: 0.20,
            schedule: 0.15,
        }
    }
}

/// Per-dimension sub-scores. `None` means "unknown", never 0 — that
/// dimension contributed nothing to the total. `distance_km` is the raw
/// haversine distance, not a score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchBreakdown {
    pub skills_score: f64,
    pub location_score: Option<f64>,
    pub salary_score: Option<f64>,
    pub schedule_score: Option<f64>,
    pub distance_km: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    /// Weighted average of the known sub-scores, in [0, 1].
    pub total_score: f64,
    pub breakdown: MatchBreakdown,
}

/// Scorer seam. `candidate_location` overrides the profile's stored
/// coordinates when the caller has a fresher device fix; `None` falls back
/// to the profile.
pub trait MatchScorer: Send + Sync {
    fn score(
        &self,
        job: &JobPosting,
        profile: &CandidateProfile,
        candidate_location: Option<GeoPoint>,
    ) -> MatchResult;
}

/// Default weighted-linear scorer.
#[derive(Debug, Clone, Default)]
pub struct WeightedMatchScorer {
    pub weights: MatchWeights,
    pub baseline: WorkHoursBaseline,
}

impl MatchScorer for WeightedMatchScorer {
    fn score(
        &self,
        job: &JobPosting,
        profile: &CandidateProfile,
        candidate_location: Option<GeoPoint>,
    ) -> MatchResult {
        compute_match(job, profile, candidate_location, self.weights, self.baseline)
    }
}

/// The core computation, exposed for direct testing.
pub fn compute_match(
    job: &JobPosting,
    profile: &CandidateProfile,
    candidate_location: Option<GeoPoint>,
    weights: MatchWeights,
    baseline: WorkHoursBaseline,
) -> MatchResult {
    let skills = skills_score(&job.skills, &profile.skills);

    let candidate_point = candidate_location.or(profile.coordinates);
    let location = evaluate_location(job.coordinates, candidate_point);
    let (distance_km, location_score) = match location {
        Some((d, s)) => (Some(d), Some(s)),
        None => (None, None),
    };

    let salary_score = evaluate_salary(job.salary.as_ref(), profile.desired_hourly_rate, baseline);

    let schedule_score = evaluate_schedule(
        job.schedule_text.as_deref(),
        job.work_type.as_deref(),
        profile.availability.as_deref(),
    );

    let mut weighted_sum = weights.skills * skills;
    let mut known_weight = weights.skills;
    for (weight, score) in [
        (weights.location, location_score),
        (weights.salary, salary_score),
        (weights.schedule, schedule_score),
    ] {
        if let Some(score) = score {
            weighted_sum += weight * score;
            known_weight += weight;
        }
    }

    // known_weight ≥ weights.skills > 0, so the division is always defined.
    let total_score = (weighted_sum / known_weight).clamp(0.0, 1.0);

    MatchResult {
        total_score,
        breakdown: MatchBreakdown {
            skills_score: skills,
            location_score,
            salary_score,
            schedule_score,
            distance_km,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::job::Salary;
    use uuid::Uuid;

    fn job(skills: &[&str]) -> JobPosting {
        JobPosting {
            id: Uuid::new_v4(),
            title: "Nhân viên bán hàng".to_string(),
            raw_description: None,
            location: None,
            coordinates: None,
            work_type: None,
            skills: skills.iter().map(|s| s.to_string()).collect(),
            salary: None,
            schedule_text: None,
        }
    }

    fn profile(skills: &[&str]) -> CandidateProfile {
        CandidateProfile {
            id: Uuid::new_v4(),
            skills: skills.iter().map(|s| s.to_string()).collect(),
            desired_hourly_rate: None,
            coordinates: None,
            availability: None,
        }
    }

    fn score(job: &JobPosting, profile: &CandidateProfile) -> MatchResult {
        WeightedMatchScorer::default().score(job, profile, None)
    }

    #[test]
    fn test_skills_only_job_total_equals_skills_score() {
        // No salary, location, or schedule data anywhere: weights renormalize
        // to 100% skills.
        let result = score(&job(&["React", "Node"]), &profile(&["React"]));
        assert_eq!(result.total_score, result.breakdown.skills_score);
        assert!((result.total_score - 0.5).abs() < f64::EPSILON);
        assert!(result.breakdown.location_score.is_none());
        assert!(result.breakdown.salary_score.is_none());
        assert!(result.breakdown.schedule_score.is_none());
    }

    #[test]
    fn test_renormalization_over_known_subset() {
        let mut j = job(&["Excel"]);
        j.salary = Some(Salary::Hourly { rate: 40_000.0 });
        let mut p = profile(&["Excel"]);
        p.desired_hourly_rate = Some(30_000.0);

        let result = score(&j, &p);
        // skills 1.0 (w 0.40) + salary 1.0 (w 0.20), renormalized over 0.60.
        assert!((result.total_score - 1.0).abs() < 1e-12);
        assert_eq!(result.breakdown.salary_score, Some(1.0));
    }

    #[test]
    fn test_partial_subscores_weighted_correctly() {
        let mut j = job(&["Excel", "Word"]);
        j.salary = Some(Salary::Hourly { rate: 20_000.0 });
        let mut p = profile(&["Excel"]);
        p.desired_hourly_rate = Some(40_000.0);

        let result = score(&j, &p);
        // (0.40*0.5 + 0.20*0.5) / 0.60 = 0.5
        assert!((result.total_score - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_identical_coordinates_full_location_score() {
        let point = GeoPoint {
            latitude: 10.7769,
            longitude: 106.7009,
        };
        let mut j = job(&[]);
        j.coordinates = Some(point);
        let mut p = profile(&[]);
        p.coordinates = Some(point);

        let result = score(&j, &p);
        assert_eq!(result.breakdown.location_score, Some(1.0));
        assert_eq!(result.breakdown.distance_km, Some(0.0));
    }

    #[test]
    fn test_caller_location_overrides_profile() {
        let job_point = GeoPoint {
            latitude: 10.0,
            longitude: 106.0,
        };
        let far_away = GeoPoint {
            latitude: 21.0,
            longitude: 105.8,
        };
        let mut j = job(&[]);
        j.coordinates = Some(job_point);
        let mut p = profile(&[]);
        p.coordinates = Some(far_away);

        let fresh = WeightedMatchScorer::default().score(&j, &p, Some(job_point));
        assert_eq!(fresh.breakdown.location_score, Some(1.0));

        let stored = score(&j, &p);
        assert_eq!(stored.breakdown.location_score, Some(0.0));
    }

    #[test]
    fn test_empty_job_skills_neutral_in_total() {
        let result = score(&job(&[]), &profile(&["anything"]));
        assert!((result.total_score - 0.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_total_is_bounded() {
        let mut j = job(&["a", "b", "c"]);
        j.salary = Some(Salary::Hourly { rate: 1_000_000.0 });
        let mut p = profile(&["a", "b", "c"]);
        p.desired_hourly_rate = Some(1.0);

        let result = score(&j, &p);
        assert!(result.total_score <= 1.0);
        assert!(result.total_score >= 0.0);
    }

    #[test]
    fn test_scoring_is_deterministic() {
        let mut j = job(&["Excel"]);
        j.salary = Some(Salary::Text {
            raw: "7-10 triệu".to_string(),
        });
        j.schedule_text = Some("ca tối, cuối tuần".to_string());
        let mut p = profile(&["excel", "word"]);
        p.desired_hourly_rate = Some(45_000.0);
        p.availability = Some("ca tối".to_string());

        let first = score(&j, &p);
        let second = score(&j, &p);
        assert_eq!(first, second);
    }
}
