// ==========================================
// Train Induction Planner - Scenario Parameters
// ==========================================
// The full what-if parameter set for one simulation run.
// Validation happens before any store access; a bad parameter
// aborts the whole run with no partial result.
// ==========================================

use crate::engine::error::SimulationError;
use serde::{Deserialize, Serialize};

/// Default fixed cost per inducted unit
pub const DEFAULT_BASE_COST_PER_UNIT: f64 = 1000.0;

/// Default penalty charged once per overridden unit in the selection
pub const DEFAULT_COST_PENALTY_PER_ISSUE: f64 = 500.0;

/// What-if scenario variables for one induction run
///
/// `quota <= 0` is a documented empty-selection case, not "unlimited";
/// a caller wanting no limit must pass a quota at least as large as
/// the fleet size.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioParameters {
    /// Permit induction of units with a bounded number of open issues
    pub allow_override: bool,
    /// Upper issue bound for the override policy (inclusive)
    pub max_issues_allowed: i64,
    /// Re-rank eligible units by advertiser branding priority
    pub prioritize_by_branding: bool,
    /// Maximum number of units to induct this run
    pub quota: i64,
    pub base_cost_per_unit: f64,
    pub cost_penalty_per_issue: f64,
}

impl Default for ScenarioParameters {
    fn default() -> Self {
        Self {
            allow_override: false,
            max_issues_allowed: 1,
            prioritize_by_branding: false,
            quota: 10,
            base_cost_per_unit: DEFAULT_BASE_COST_PER_UNIT,
            cost_penalty_per_issue: DEFAULT_COST_PENALTY_PER_ISSUE,
        }
    }
}

impl ScenarioParameters {
    /// Check parameter-level invariants
    ///
    /// # Returns
    /// - Ok(()): parameters usable
    /// - Err(SimulationError::InvalidParameter): computation must abort
    pub fn validate(&self) -> Result<(), SimulationError> {
        if self.max_issues_allowed < 0 {
            return Err(SimulationError::InvalidParameter {
                field: "max_issues_allowed".to_string(),
                message: format!("must be >= 0, got {}", self.max_issues_allowed),
            });
        }
        if !self.base_cost_per_unit.is_finite() {
            return Err(SimulationError::InvalidParameter {
                field: "base_cost_per_unit".to_string(),
                message: "must be a finite number".to_string(),
            });
        }
        if !self.cost_penalty_per_issue.is_finite() {
            return Err(SimulationError::InvalidParameter {
                field: "cost_penalty_per_issue".to_string(),
                message: "must be a finite number".to_string(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        assert!(ScenarioParameters::default().validate().is_ok());
    }

    #[test]
    fn negative_issue_bound_is_rejected() {
        let params = ScenarioParameters {
            max_issues_allowed: -1,
            ..Default::default()
        };
        let err = params.validate().unwrap_err();
        assert!(matches!(
            err,
            SimulationError::InvalidParameter { ref field, .. } if field == "max_issues_allowed"
        ));
    }

    #[test]
    fn non_finite_costs_are_rejected() {
        let params = ScenarioParameters {
            base_cost_per_unit: f64::NAN,
            ..Default::default()
        };
        assert!(params.validate().is_err());

        let params = ScenarioParameters {
            cost_penalty_per_issue: f64::INFINITY,
            ..Default::default()
        };
        assert!(params.validate().is_err());
    }
}
