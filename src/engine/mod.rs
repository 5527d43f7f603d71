// ==========================================
// Train Induction Planner - Engine Layer
// ==========================================
// Responsibility: the eligibility-and-selection pipeline as pure
// stages over immutable snapshots. Data flows strictly left to
// right: issue lists -> reclassification -> ranking -> bounded
// selection -> aggregate metrics.
// Constraint: engines hold no SQL and mutate no input collection.
// ==========================================

pub mod error;
pub mod metrics;
pub mod override_policy;
pub mod ranking;
pub mod readiness;
pub mod selector;
pub mod simulator;

// Re-export core engines
pub use error::SimulationError;
pub use metrics::MetricsAggregator;
pub use override_policy::OverridePolicy;
pub use ranking::PriorityRanker;
pub use readiness::ReadinessEvaluator;
pub use selector::InductionSelector;
pub use simulator::InductionSimulator;
