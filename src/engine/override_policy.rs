// ==========================================
// Train Induction Planner - Override Policy
// ==========================================
// Responsibility: reclassify units whose issue count is within
// the configured risk tolerance.
// Rule: pure re-flagging; issue evidence is never discarded and
// eligibility is never revoked.
// ==========================================

use crate::domain::assessment::ReadinessAssessment;

// ==========================================
// OverridePolicy
// ==========================================
pub struct OverridePolicy {
    allow_override: bool,
    max_issues_allowed: usize,
}

impl OverridePolicy {
    /// # Parameters
    /// - `allow_override`: master switch for risk-tolerant induction
    /// - `max_issues_allowed`: inclusive upper bound on retained issues
    pub fn new(allow_override: bool, max_issues_allowed: usize) -> Self {
        Self {
            allow_override,
            max_issues_allowed,
        }
    }

    /// Possibly reclassify one assessment
    ///
    /// Flips `eligible` to true when the policy is active and the
    /// issue count is within tolerance; already-eligible units pass
    /// through unchanged. Never flips true to false.
    pub fn apply(&self, assessment: ReadinessAssessment) -> ReadinessAssessment {
        if self.allow_override
            && !assessment.eligible
            && assessment.issue_count <= self.max_issues_allowed
        {
            return assessment.reclassified_eligible();
        }
        assessment
    }
}
