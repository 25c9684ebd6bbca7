//! Salary fit sub-score.
//!
//! Upstream salary data is heterogeneous (explicit hourly rate, structured
//! monthly range, scraped free text), already collapsed into [`Salary`] at
//! the data-access boundary. This module reduces any of those to an
//! effective hourly rate and compares it to the candidate's ask.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::content::keywords::fold;
use crate::models::job::Salary;

/// Monthly-to-hourly conversion baseline.
///
/// TODO(product): the 22 days × 8 hours assumption was inherited from the
/// original posting pipeline unverified — confirm before relying on salary
/// scores for anything beyond ranking.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct WorkHoursBaseline {
    pub days_per_month: f64,
    pub hours_per_day: f64,
}

impl Default for WorkHoursBaseline {
    fn default() -> Self {
        WorkHoursBaseline {
            days_per_month: 22.0,
            hours_per_day: 8.0,
        }
    }
}

impl WorkHoursBaseline {
    pub fn hours_per_month(&self) -> f64 {
        self.days_per_month * self.hours_per_day
    }
}

// One number token with an optional magnitude word, matched against the
// accent-folded text ("triệu" folds to "trieu").
static RE_AMOUNT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(\d+(?:[.,]\d{3})*(?:[.,]\d{1,2})?)\s*(trieu|tr\b|million|k\b)?").unwrap()
});

/// Reduces a salary to VND per hour, `None` when it cannot be determined.
pub fn effective_hourly_rate(salary: &Salary, baseline: WorkHoursBaseline) -> Option<f64> {
    match salary {
        Salary::Hourly { rate } => Some(*rate),
        Salary::MonthlyRange { min, max } => {
            let monthly = match (min, max) {
                (Some(lo), Some(hi)) => (lo + hi) / 2.0,
                (Some(lo), None) => *lo,
                (None, Some(hi)) => *hi,
                (None, None) => return None,
            };
            Some(monthly / baseline.hours_per_month())
        }
        Salary::Text { raw } => {
            parse_monthly_from_text(raw).map(|monthly| monthly / baseline.hours_per_month())
        }
    }
}

/// 1.0 when the job meets or exceeds the candidate's ask, linear decay
/// below it. `None` when either side is unknown — a job without salary data
/// is excluded from the weighted sum, not penalized.
pub fn evaluate_salary(
    job_salary: Option<&Salary>,
    desired_hourly: Option<f64>,
    baseline: WorkHoursBaseline,
) -> Option<f64> {
    let desired = desired_hourly?;
    let offered = effective_hourly_rate(job_salary?, baseline)?;

    if desired <= 0.0 || offered >= desired {
        Some(1.0)
    } else {
        Some((offered / desired).clamp(0.0, 1.0))
    }
}

/// Parses a monthly VND amount out of free text ("7-10 triệu", "Lương
/// 8.000.000"). Returns the midpoint when the text carries a range, `None`
/// for negotiable-only or numberless text.
fn parse_monthly_from_text(raw: &str) -> Option<f64> {
    let folded = fold(raw);
    if folded.contains("thoa thuan") || folded.contains("negotiable") {
        return None;
    }

    let mut amounts: Vec<(f64, Option<f64>)> = Vec::new();
    for caps in RE_AMOUNT.captures_iter(&folded) {
        let value = parse_number(&caps[1])?;
        let multiplier = caps.get(2).map(|m| match m.as_str() {
            "k" => 1_000.0,
            _ => 1_000_000.0,
        });
        amounts.push((value, multiplier));
    }
    if amounts.is_empty() {
        return None;
    }

    // "7-10 triệu": the bare 7 inherits the multiplier of the next amount
    // that has one.
    let mut pending: Option<f64> = None;
    for i in (0..amounts.len()).rev() {
        match amounts[i].1 {
            Some(m) => pending = Some(m),
            None => amounts[i].1 = pending,
        }
    }

    let values: Vec<f64> = amounts
        .iter()
        .map(|(v, m)| v * m.unwrap_or(1.0))
        .collect();
    let min = values.iter().cloned().fold(f64::INFINITY, f64::min);
    let max = values.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
    Some((min + max) / 2.0)
}

/// Number token → f64. A separator followed by exactly three digits is a
/// thousands separator ("8.000.000"); a trailing 1–2 digit group is a
/// decimal ("7,5").
fn parse_number(token: &str) -> Option<f64> {
    let mut integral = String::new();
    let mut decimal = String::new();
    for part in token.split(['.', ',']) {
        if integral.is_empty() {
            integral.push_str(part);
        } else if part.len() == 3 {
            integral.push_str(part);
        } else {
            decimal = part.to_string();
        }
    }
    let joined = if decimal.is_empty() {
        integral
    } else {
        format!("{integral}.{decimal}")
    };
    joined.parse::<f64>().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASELINE: WorkHoursBaseline = WorkHoursBaseline {
        days_per_month: 22.0,
        hours_per_day: 8.0,
    };

    #[test]
    fn test_hourly_rate_passes_through() {
        let rate = effective_hourly_rate(&Salary::Hourly { rate: 40_000.0 }, BASELINE);
        assert_eq!(rate, Some(40_000.0));
    }

    #[test]
    fn test_monthly_range_uses_midpoint_over_baseline_hours() {
        let salary = Salary::MonthlyRange {
            min: Some(7_000_000.0),
            max: Some(9_000_000.0),
        };
        let rate = effective_hourly_rate(&salary, BASELINE).unwrap();
        // 8,000,000 / 176
        assert!((rate - 45_454.54).abs() < 1.0, "rate was {rate}");
    }

    #[test]
    fn test_half_open_range_uses_known_bound() {
        let salary = Salary::MonthlyRange {
            min: None,
            max: Some(8_800_000.0),
        };
        let rate = effective_hourly_rate(&salary, BASELINE).unwrap();
        assert!((rate - 50_000.0).abs() < 1e-6);
    }

    #[test]
    fn test_text_range_with_trieu_multiplier() {
        let salary = Salary::Text {
            raw: "Lương 7-10 triệu/tháng".to_string(),
        };
        let rate = effective_hourly_rate(&salary, BASELINE).unwrap();
        // midpoint 8.5M / 176
        assert!((rate - 48_295.45).abs() < 1.0, "rate was {rate}");
    }

    #[test]
    fn test_text_with_dot_separated_thousands() {
        let salary = Salary::Text {
            raw: "8.800.000 VND".to_string(),
        };
        let rate = effective_hourly_rate(&salary, BASELINE).unwrap();
        assert!((rate - 50_000.0).abs() < 1e-6);
    }

    #[test]
    fn test_negotiable_text_is_unknown() {
        let salary = Salary::Text {
            raw: "Thỏa thuận".to_string(),
        };
        assert_eq!(effective_hourly_rate(&salary, BASELINE), None);
    }

    #[test]
    fn test_job_meets_ask_scores_one() {
        let salary = Salary::Hourly { rate: 40_000.0 };
        let score = evaluate_salary(Some(&salary), Some(30_000.0), BASELINE);
        assert_eq!(score, Some(1.0));
    }

    #[test]
    fn test_job_below_ask_decays_linearly() {
        let salary = Salary::Hourly { rate: 20_000.0 };
        let score = evaluate_salary(Some(&salary), Some(40_000.0), BASELINE).unwrap();
        assert!((score - 0.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_unknown_either_side_is_none() {
        let salary = Salary::Hourly { rate: 40_000.0 };
        assert_eq!(evaluate_salary(None, Some(30_000.0), BASELINE), None);
        assert_eq!(evaluate_salary(Some(&salary), None, BASELINE), None);
    }

    #[test]
    fn test_zero_ask_never_divides() {
        let salary = Salary::Hourly { rate: 10_000.0 };
        assert_eq!(evaluate_salary(Some(&salary), Some(0.0), BASELINE), Some(1.0));
    }

    #[test]
    fn test_decimal_comma_amount() {
        let salary = Salary::Text {
            raw: "7,5 triệu".to_string(),
        };
        let rate = effective_hourly_rate(&salary, BASELINE).unwrap();
        assert!((rate - 7_500_000.0 / 176.0).abs() < 1.0);
    }
}
