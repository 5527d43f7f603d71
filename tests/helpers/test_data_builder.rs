// ==========================================
// Test data builder - fleet fixtures for integration tests
// ==========================================

use train_induction::domain::fleet::{
    BrandingAssignment, CertificateRecord, CleaningTask, MaintenanceTicket,
};
use train_induction::domain::types::{
    BrandingPriority, CertificateStatus, CleaningStatus, TicketStatus,
};
use train_induction::InMemoryFleetStore;

// ==========================================
// Fleet fixture builder
// ==========================================

/// Builds an in-memory fleet snapshot record by record
///
/// Unit ids are sequential from 1 in registration order, so tests
/// can refer to them directly.
pub struct FleetFixtureBuilder {
    store: InMemoryFleetStore,
    ticket_seq: u32,
}

impl FleetFixtureBuilder {
    pub fn new() -> Self {
        Self {
            store: InMemoryFleetStore::new(),
            ticket_seq: 0,
        }
    }

    /// Register a unit and return its id
    pub fn unit(&mut self, identifier: &str) -> i64 {
        self.store.add_unit(identifier)
    }

    pub fn certificate(&mut self, unit_id: i64, status: CertificateStatus, valid_until: &str) {
        self.store.add_certificate(CertificateRecord {
            unit_id,
            status,
            valid_until: valid_until.to_string(),
            issuer: "Commissioner of Metro Rail Safety".to_string(),
        });
    }

    pub fn valid_certificate(&mut self, unit_id: i64, valid_until: &str) {
        self.certificate(unit_id, CertificateStatus::Valid, valid_until);
    }

    pub fn ticket(&mut self, unit_id: i64, status: TicketStatus) {
        self.ticket_seq += 1;
        self.store.add_ticket(MaintenanceTicket {
            unit_id,
            ticket_no: format!("JC-{:03}", self.ticket_seq),
            status,
        });
    }

    pub fn cleaning(&mut self, unit_id: i64, status: CleaningStatus) {
        self.store.add_cleaning_task(CleaningTask {
            unit_id,
            slot_name: "Night Bay".to_string(),
            status,
        });
    }

    pub fn branding(&mut self, unit_id: i64, priority: BrandingPriority, exposure_hours: f64) {
        self.store.add_branding(BrandingAssignment {
            unit_id,
            campaign: "Metro Cola".to_string(),
            priority,
            exposure_hours,
        });
    }

    pub fn build(self) -> InMemoryFleetStore {
        self.store
    }
}

/// A ready-to-induct unit: valid future certificate, closed ticket,
/// cleaning done
pub fn ready_unit(builder: &mut FleetFixtureBuilder, identifier: &str) -> i64 {
    let id = builder.unit(identifier);
    builder.valid_certificate(id, "2099-12-31");
    builder.ticket(id, TicketStatus::Closed);
    builder.cleaning(id, CleaningStatus::Done);
    id
}
