// ==========================================
// Train Induction Planner - Assessment Entities
// ==========================================
// Derived, engine-internal records. Created fresh on every
// simulation run and never persisted.
// ==========================================

use crate::domain::types::{BrandingPriority, IssueKind};
use serde::{Deserialize, Serialize};

// ==========================================
// ReadinessAssessment
// ==========================================
// Invariant: issue_count == issues.len() (guaranteed by the
// constructors; there is no other way to build or reclassify one)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReadinessAssessment {
    pub unit_id: i64,
    pub identifier: String,
    /// Detected defects in fixed check order: fitness, maintenance, cleaning
    pub issues: Vec<IssueKind>,
    pub issue_count: usize,
    pub eligible: bool,
}

impl ReadinessAssessment {
    /// Build an assessment from the detected issue list
    ///
    /// `eligible` is derived: true exactly when `issues` is empty.
    pub fn new(unit_id: i64, identifier: String, issues: Vec<IssueKind>) -> Self {
        let issue_count = issues.len();
        let eligible = issues.is_empty();
        Self {
            unit_id,
            identifier,
            issues,
            issue_count,
            eligible,
        }
    }

    /// Reclassify the unit as inductable, retaining the issue evidence
    ///
    /// Used by the override policy; the original issues stay on the
    /// record for audit and for the cost penalty in the metrics step.
    pub fn reclassified_eligible(mut self) -> Self {
        self.eligible = true;
        self
    }
}

// ==========================================
// RankedCandidate
// ==========================================
/// An eligible unit as it flows through ranking and selection
///
/// `priority` and `exposure_hours` are `None` when branding
/// prioritization was skipped for the run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedCandidate {
    #[serde(flatten)]
    pub assessment: ReadinessAssessment,
    pub priority: Option<BrandingPriority>,
    pub exposure_hours: Option<f64>,
}

impl RankedCandidate {
    /// Wrap an assessment without branding data (ranking skipped)
    pub fn unranked(assessment: ReadinessAssessment) -> Self {
        Self {
            assessment,
            priority: None,
            exposure_hours: None,
        }
    }
}

// ==========================================
// MetricSet
// ==========================================
/// Scalar outcome metrics for one selection
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MetricSet {
    /// Percentage of the whole fleet inducted (0 when the fleet is empty)
    pub punctuality: f64,
    /// Base cost per selected unit plus one penalty per overridden unit
    pub cost: f64,
    /// Mean retained issue count over the selection (0 when empty)
    pub safety_score: f64,
    /// Total advertiser exposure hours over the selection
    pub advertiser_exposure: f64,
}

impl MetricSet {
    pub fn zero() -> Self {
        Self {
            punctuality: 0.0,
            cost: 0.0,
            safety_score: 0.0,
            advertiser_exposure: 0.0,
        }
    }

    /// Output form: every metric rounded to two decimal places
    ///
    /// Internal computation stays unrounded; only the final result
    /// presented to the caller is rounded.
    pub fn rounded(&self) -> Self {
        Self {
            punctuality: round2(self.punctuality),
            cost: round2(self.cost),
            safety_score: round2(self.safety_score),
            advertiser_exposure: round2(self.advertiser_exposure),
        }
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

// ==========================================
// SimulationResult
// ==========================================
/// Final, immutable output of one simulation run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationResult {
    /// Selected units in induction order
    pub selected: Vec<RankedCandidate>,
    pub metrics: MetricSet,
}
