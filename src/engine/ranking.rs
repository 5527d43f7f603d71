// ==========================================
// Train Induction Planner - Priority Ranker
// ==========================================
// Responsibility: optionally reorder the eligible subset by
// advertiser branding priority and attach exposure data.
// Rule: stable sort; units of equal priority keep their relative
// input (unit-list) order.
// ==========================================

use crate::domain::assessment::{RankedCandidate, ReadinessAssessment};
use crate::domain::fleet::BrandingAssignment;
use crate::domain::types::BrandingPriority;
use std::cmp::Reverse;

// ==========================================
// PriorityRanker
// ==========================================
pub struct PriorityRanker {
    // stateless engine, no injected dependencies
}

impl PriorityRanker {
    pub fn new() -> Self {
        Self {}
    }

    /// Rank the eligible subset
    ///
    /// With `prioritize_by_branding` off, candidates keep the
    /// evaluator's input order and carry no branding data. With it
    /// on, each unit resolves to at most one assignment (Low / 0.0
    /// when absent) and the sequence is stable-sorted descending by
    /// priority rank (High=3, Medium=2, Low=1).
    pub fn rank(
        &self,
        eligible: Vec<ReadinessAssessment>,
        branding: &[BrandingAssignment],
        prioritize_by_branding: bool,
    ) -> Vec<RankedCandidate> {
        if !prioritize_by_branding {
            return eligible.into_iter().map(RankedCandidate::unranked).collect();
        }

        let mut candidates: Vec<RankedCandidate> = eligible
            .into_iter()
            .map(|assessment| {
                let assignment = Self::resolve_assignment(assessment.unit_id, branding);
                let (priority, exposure_hours) = match assignment {
                    Some(b) => (b.priority, b.exposure_hours),
                    None => (BrandingPriority::Low, 0.0),
                };
                RankedCandidate {
                    assessment,
                    priority: Some(priority),
                    exposure_hours: Some(exposure_hours),
                }
            })
            .collect();

        // Vec::sort_by_key is stable, so equal-priority units keep
        // their relative input order.
        candidates.sort_by_key(|c| {
            Reverse(c.priority.map(|p| p.rank()).unwrap_or(0))
        });
        candidates
    }

    /// Resolve the single assignment consulted for a unit
    ///
    /// When duplicates exist the highest priority rank wins, ties
    /// broken by larger exposure, then by first store position, so
    /// the outcome is deterministic whatever the row order.
    fn resolve_assignment<'a>(
        unit_id: i64,
        branding: &'a [BrandingAssignment],
    ) -> Option<&'a BrandingAssignment> {
        branding
            .iter()
            .filter(|b| b.unit_id == unit_id)
            .reduce(|best, candidate| {
                let best_key = (best.priority.rank(), best.exposure_hours);
                let candidate_key = (candidate.priority.rank(), candidate.exposure_hours);
                if candidate_key > best_key {
                    candidate
                } else {
                    best
                }
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assessment(unit_id: i64, identifier: &str) -> ReadinessAssessment {
        ReadinessAssessment::new(unit_id, identifier.to_string(), vec![])
    }

    fn branding(unit_id: i64, priority: BrandingPriority, exposure: f64) -> BrandingAssignment {
        BrandingAssignment {
            unit_id,
            campaign: "Metro Cola".to_string(),
            priority,
            exposure_hours: exposure,
        }
    }

    #[test]
    fn ranking_off_keeps_input_order_and_no_branding_data() {
        let ranker = PriorityRanker::new();
        let eligible = vec![assessment(3, "KM-03"), assessment(1, "KM-01")];
        let branding_rows = vec![branding(1, BrandingPriority::High, 40.0)];

        let ranked = ranker.rank(eligible, &branding_rows, false);
        let ids: Vec<i64> = ranked.iter().map(|c| c.assessment.unit_id).collect();
        assert_eq!(ids, vec![3, 1]);
        assert!(ranked.iter().all(|c| c.priority.is_none()));
        assert!(ranked.iter().all(|c| c.exposure_hours.is_none()));
    }

    #[test]
    fn sorts_descending_by_priority_rank() {
        let ranker = PriorityRanker::new();
        let eligible = vec![assessment(1, "KM-01"), assessment(2, "KM-02"), assessment(3, "KM-03")];
        let branding_rows = vec![
            branding(1, BrandingPriority::Low, 5.0),
            branding(2, BrandingPriority::High, 40.0),
            branding(3, BrandingPriority::Medium, 20.0),
        ];

        let ranked = ranker.rank(eligible, &branding_rows, true);
        let ids: Vec<i64> = ranked.iter().map(|c| c.assessment.unit_id).collect();
        assert_eq!(ids, vec![2, 3, 1]);
    }

    #[test]
    fn equal_priorities_preserve_relative_input_order() {
        let ranker = PriorityRanker::new();
        let eligible = vec![assessment(7, "KM-07"), assessment(4, "KM-04")];
        let branding_rows = vec![
            branding(7, BrandingPriority::Medium, 10.0),
            branding(4, BrandingPriority::Medium, 30.0),
        ];

        let ranked = ranker.rank(eligible, &branding_rows, true);
        let ids: Vec<i64> = ranked.iter().map(|c| c.assessment.unit_id).collect();
        assert_eq!(ids, vec![7, 4]);
    }

    #[test]
    fn unit_without_assignment_defaults_to_low_and_zero_exposure() {
        let ranker = PriorityRanker::new();
        let ranked = ranker.rank(vec![assessment(1, "KM-01")], &[], true);
        assert_eq!(ranked[0].priority, Some(BrandingPriority::Low));
        assert_eq!(ranked[0].exposure_hours, Some(0.0));
    }

    #[test]
    fn duplicate_assignments_resolve_to_highest_priority() {
        let ranker = PriorityRanker::new();
        let branding_rows = vec![
            branding(1, BrandingPriority::Low, 99.0),
            branding(1, BrandingPriority::High, 12.0),
            branding(1, BrandingPriority::Medium, 50.0),
        ];
        let ranked = ranker.rank(vec![assessment(1, "KM-01")], &branding_rows, true);
        assert_eq!(ranked[0].priority, Some(BrandingPriority::High));
        assert_eq!(ranked[0].exposure_hours, Some(12.0));
    }

    #[test]
    fn duplicate_same_priority_resolves_to_larger_exposure() {
        let ranker = PriorityRanker::new();
        let branding_rows = vec![
            branding(1, BrandingPriority::High, 12.0),
            branding(1, BrandingPriority::High, 30.0),
        ];
        let ranked = ranker.rank(vec![assessment(1, "KM-01")], &branding_rows, true);
        assert_eq!(ranked[0].exposure_hours, Some(30.0));
    }
}
