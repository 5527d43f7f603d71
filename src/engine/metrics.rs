// ==========================================
// Train Induction Planner - Metrics Aggregator
// ==========================================
// Responsibility: derive the four scalar outcome metrics from the
// selected set. Computation stays unrounded; the simulator applies
// two-decimal rounding to the final output.
// ==========================================

use crate::domain::assessment::{MetricSet, RankedCandidate};

// ==========================================
// MetricsAggregator
// ==========================================
pub struct MetricsAggregator {
    // stateless engine, no injected dependencies
}

impl MetricsAggregator {
    pub fn new() -> Self {
        Self {}
    }

    /// Aggregate outcome metrics for one selection
    ///
    /// - punctuality: percentage of the whole fleet inducted,
    ///   0 when the fleet is empty
    /// - cost: base cost per selected unit plus one penalty per
    ///   overridden unit (a unit with three retained issues pays the
    ///   penalty once, not three times)
    /// - safety_score: mean retained issue count, 0 when empty
    /// - advertiser_exposure: summed exposure hours; candidates
    ///   without a ranked exposure value contribute 0
    pub fn aggregate(
        &self,
        selected: &[RankedCandidate],
        total_unit_count: usize,
        base_cost_per_unit: f64,
        cost_penalty_per_issue: f64,
    ) -> MetricSet {
        let selected_count = selected.len();

        let punctuality = if total_unit_count == 0 {
            0.0
        } else {
            100.0 * selected_count as f64 / total_unit_count as f64
        };

        let overridden_count = selected
            .iter()
            .filter(|c| c.assessment.issue_count > 0)
            .count();
        let cost = selected_count as f64 * base_cost_per_unit
            + overridden_count as f64 * cost_penalty_per_issue;

        let safety_score = if selected_count == 0 {
            0.0
        } else {
            let total_issues: usize = selected.iter().map(|c| c.assessment.issue_count).sum();
            total_issues as f64 / selected_count as f64
        };

        let advertiser_exposure = selected
            .iter()
            .map(|c| c.exposure_hours.unwrap_or(0.0))
            .sum();

        MetricSet {
            punctuality,
            cost,
            safety_score,
            advertiser_exposure,
        }
    }
}
