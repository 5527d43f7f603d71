// ==========================================
// Train Induction Planner - Induction Selector
// ==========================================
// Responsibility: truncate the ranked eligible sequence to the
// configured induction quota, preserving order.
// ==========================================

use crate::domain::assessment::RankedCandidate;

// ==========================================
// InductionSelector
// ==========================================
pub struct InductionSelector {
    // stateless engine, no injected dependencies
}

impl InductionSelector {
    pub fn new() -> Self {
        Self {}
    }

    /// Take the first `min(quota, len)` candidates in order
    ///
    /// `quota <= 0` yields an empty selection; it is never treated
    /// as "unlimited". A caller wanting no limit must pass a quota
    /// at least as large as the candidate count.
    pub fn select(&self, mut candidates: Vec<RankedCandidate>, quota: i64) -> Vec<RankedCandidate> {
        if quota <= 0 {
            return Vec::new();
        }
        let cap = usize::try_from(quota).unwrap_or(usize::MAX);
        candidates.truncate(cap);
        candidates
    }
}
