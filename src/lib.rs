// ==========================================
// Train Induction Planner - Core Library
// ==========================================
// Decision support for nightly service induction: which rail
// units are fit to run tomorrow, under configurable risk
// tolerance and advertiser-priority rules, and what the selection
// costs in punctuality, money, safety and exposure.
// The surrounding CRUD application is an external collaborator
// behind the FleetStore trait; this crate holds the engine only.
// ==========================================

// ==========================================
// Module declarations
// ==========================================

// Domain layer - entities and types
pub mod domain;

// Data store layer - the external fleet collaborator
pub mod repository;

// Engine layer - the eligibility-and-selection pipeline
pub mod engine;

// Configuration layer - per-run scenario parameters
pub mod config;

// Database infrastructure (connection init / unified PRAGMA)
pub mod db;

// Logging system
pub mod logging;

// ==========================================
// Re-export core types
// ==========================================

// Domain types
pub use domain::types::{
    BrandingPriority, CertificateStatus, CleaningStatus, IssueKind, TicketStatus,
};

// Domain entities
pub use domain::{
    BrandingAssignment, CertificateRecord, CleaningTask, MaintenanceTicket, MetricSet,
    RankedCandidate, ReadinessAssessment, SimulationResult, Unit,
};

// Engines
pub use engine::{
    InductionSelector, InductionSimulator, MetricsAggregator, OverridePolicy, PriorityRanker,
    ReadinessEvaluator, SimulationError,
};

// Store
pub use repository::{FleetStore, InMemoryFleetStore, RepositoryError, SqliteFleetStore};

// Configuration
pub use config::ScenarioParameters;

// ==========================================
// Constants
// ==========================================

// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// Application name
pub const APP_NAME: &str = "Train Induction Planner";
