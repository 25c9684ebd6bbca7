//! Skills overlap sub-score.

use crate::content::keywords::fold;

/// Score when the job states no skill requirements at all. Absence of
/// requirements is neither a match nor a mismatch, so the midpoint.
pub const NEUTRAL_SKILLS_SCORE: f64 = 0.5;

/// |job.skills ∩ profile.skills| / |job.skills|, compared case- and
/// accent-insensitively. An empty requirement list scores the neutral
/// constant, never 0.
pub fn skills_score(job_skills: &[String], profile_skills: &[String]) -> f64 {
    if job_skills.is_empty() {
        return NEUTRAL_SKILLS_SCORE;
    }

    let candidate: Vec<String> = profile_skills.iter().map(|s| fold(s.trim())).collect();
    let matched = job_skills
        .iter()
        .filter(|required| {
            let required = fold(required.trim());
            candidate.iter().any(|have| *have == required)
        })
        .count();

    matched as f64 / job_skills.len() as f64
}
