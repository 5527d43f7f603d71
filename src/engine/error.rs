// ==========================================
// Train Induction Planner - Engine Errors
// ==========================================
// Parameter-level anomalies abort the whole run; per-unit data
// anomalies never surface here (they degrade only that unit's
// assessment inside the readiness evaluator).
// ==========================================

use crate::repository::RepositoryError;
use thiserror::Error;

/// Simulation-level error type
#[derive(Error, Debug)]
pub enum SimulationError {
    #[error("invalid parameter (field={field}): {message}")]
    InvalidParameter { field: String, message: String },

    #[error(transparent)]
    Store(#[from] RepositoryError),
}
