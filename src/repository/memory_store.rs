// ==========================================
// Train Induction Planner - In-Memory Fleet Store
// ==========================================
// Fixture collaborator: lets the engine be exercised against
// hand-built snapshots without a live database.
// ==========================================

use crate::domain::fleet::{
    BrandingAssignment, CertificateRecord, CleaningTask, MaintenanceTicket, Unit,
};
use crate::repository::error::RepositoryResult;
use crate::repository::fleet_store::FleetStore;

/// Plain-vector fleet snapshot
///
/// Rows are served back in push order, which makes the natural
/// candidate order explicit in tests.
#[derive(Debug, Default, Clone)]
pub struct InMemoryFleetStore {
    pub units: Vec<Unit>,
    pub certificates: Vec<CertificateRecord>,
    pub tickets: Vec<MaintenanceTicket>,
    pub cleaning_tasks: Vec<CleaningTask>,
    pub branding: Vec<BrandingAssignment>,
}

impl InMemoryFleetStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a unit and return its id (sequential from 1)
    pub fn add_unit(&mut self, identifier: &str) -> i64 {
        let id = self.units.len() as i64 + 1;
        self.units.push(Unit {
            id,
            identifier: identifier.to_string(),
            description: None,
        });
        id
    }

    pub fn add_certificate(&mut self, record: CertificateRecord) {
        self.certificates.push(record);
    }

    pub fn add_ticket(&mut self, record: MaintenanceTicket) {
        self.tickets.push(record);
    }

    pub fn add_cleaning_task(&mut self, record: CleaningTask) {
        self.cleaning_tasks.push(record);
    }

    pub fn add_branding(&mut self, record: BrandingAssignment) {
        self.branding.push(record);
    }
}

impl FleetStore for InMemoryFleetStore {
    fn list_units(&self) -> RepositoryResult<Vec<Unit>> {
        Ok(self.units.clone())
    }

    fn list_certificates(&self) -> RepositoryResult<Vec<CertificateRecord>> {
        Ok(self.certificates.clone())
    }

    fn list_tickets(&self) -> RepositoryResult<Vec<MaintenanceTicket>> {
        Ok(self.tickets.clone())
    }

    fn list_cleaning_tasks(&self) -> RepositoryResult<Vec<CleaningTask>> {
        Ok(self.cleaning_tasks.clone())
    }

    fn list_branding(&self) -> RepositoryResult<Vec<BrandingAssignment>> {
        Ok(self.branding.clone())
    }
}
