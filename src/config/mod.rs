// ==========================================
// Train Induction Planner - Configuration Layer
// ==========================================
// Scenario parameters supplied by the caller per simulation run.
// The engine holds no configuration state of its own.
// ==========================================

pub mod scenario;

pub use scenario::ScenarioParameters;
