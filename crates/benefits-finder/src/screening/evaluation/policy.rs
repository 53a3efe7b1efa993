use std::cmp::Ordering;

use super::super::domain::{ApplicantProfile, ScoredBenefit};
use super::config::ScoringPolicy;

/// Add the veteran and disability bonuses, capping after each addition.
pub(crate) fn apply_household_bonuses(
    base_confidence: f64,
    profile: &ApplicantProfile,
    policy: &ScoringPolicy,
) -> f64 {
    let mut confidence = base_confidence;
    if profile.is_veteran {
        confidence = (confidence + policy.veteran_bonus).min(policy.confidence_ceiling);
    }
    if profile.is_disabled {
        confidence = (confidence + policy.disability_bonus).min(policy.confidence_ceiling);
    }
    confidence
}

/// Strictly above the threshold, judged on the unrounded confidence. A score of 30.04
/// passes here and is then reported as `30.0`.
pub(crate) fn is_reportable(confidence: f64, policy: &ScoringPolicy) -> bool {
    confidence > policy.minimum_confidence
}

pub(crate) fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Descending by score; `sort_by` is stable so ties keep catalog order.
pub(crate) fn rank(benefits: &mut Vec<ScoredBenefit>, max_results: usize) {
    benefits.sort_by(|left, right| {
        right
            .confidence_score
            .partial_cmp(&left.confidence_score)
            .unwrap_or(Ordering::Equal)
    });
    benefits.truncate(max_results);
}
