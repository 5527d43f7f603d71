// ==========================================
// Train Induction Planner - Fleet Entities
// ==========================================
// Read-only input records supplied by the fleet store.
// The engine never mutates these; every evaluation run works
// on an immutable snapshot of the five collections.
// ==========================================

use crate::domain::types::{BrandingPriority, CertificateStatus, CleaningStatus, TicketStatus};
use serde::{Deserialize, Serialize};

/// A single rail vehicle tracked by the system
///
/// Root entity; all other records reference it by `id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Unit {
    pub id: i64,
    /// Operator-facing unit number, e.g. "KM-07"
    pub identifier: String,
    pub description: Option<String>,
}

/// Fitness certificate issued for a unit
///
/// Zero or many per unit. `valid_until` is kept as the raw stored
/// text and parsed during evaluation, so one malformed date degrades
/// only its own unit's certification check instead of aborting the run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CertificateRecord {
    pub unit_id: i64,
    pub status: CertificateStatus,
    /// ISO date text (YYYY-MM-DD) as supplied by the store
    pub valid_until: String,
    pub issuer: String,
}

/// Maintenance job card raised against a unit
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaintenanceTicket {
    pub unit_id: i64,
    pub ticket_no: String,
    pub status: TicketStatus,
}

/// Scheduled cleaning slot for a unit
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CleaningTask {
    pub unit_id: i64,
    pub slot_name: String,
    pub status: CleaningStatus,
}

/// Advertiser branding campaign assigned to a unit
///
/// A unit may carry several assignments; the ranker consults at
/// most one per unit (highest priority wins, see PriorityRanker).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BrandingAssignment {
    pub unit_id: i64,
    pub campaign: String,
    pub priority: BrandingPriority,
    pub exposure_hours: f64,
}
