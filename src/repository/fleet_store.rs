// ==========================================
// Train Induction Planner - Fleet Store Interface
// ==========================================
// The engine's only view of the external data collaborator.
// Implementations must return rows in stable insertion order;
// that order defines the "natural" candidate order downstream.
// ==========================================

use crate::domain::fleet::{
    BrandingAssignment, CertificateRecord, CleaningTask, MaintenanceTicket, Unit,
};
use crate::repository::error::RepositoryResult;

/// Read access to the five fleet record collections
///
/// The engine reads each collection at most once per simulation run
/// and never writes through this interface. Retry, caching and
/// batching, if needed, belong to the implementation.
pub trait FleetStore {
    fn list_units(&self) -> RepositoryResult<Vec<Unit>>;
    fn list_certificates(&self) -> RepositoryResult<Vec<CertificateRecord>>;
    fn list_tickets(&self) -> RepositoryResult<Vec<MaintenanceTicket>>;
    fn list_cleaning_tasks(&self) -> RepositoryResult<Vec<CleaningTask>>;
    fn list_branding(&self) -> RepositoryResult<Vec<BrandingAssignment>>;
}
