// ==========================================
// Train Induction Planner - Domain Layer
// ==========================================
// Fleet input records, derived assessment records, domain types.
// Contains no data access logic and no engine logic.
// ==========================================

pub mod assessment;
pub mod fleet;
pub mod types;

// Re-export core types
pub use assessment::{MetricSet, RankedCandidate, ReadinessAssessment, SimulationResult};
pub use fleet::{BrandingAssignment, CertificateRecord, CleaningTask, MaintenanceTicket, Unit};
pub use types::{
    BrandingPriority, CertificateStatus, CleaningStatus, IssueKind, TicketStatus,
};
