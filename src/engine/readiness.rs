// ==========================================
// Train Induction Planner - Readiness Evaluator
// ==========================================
// Responsibility: one ReadinessAssessment per unit from three
// independent checks (fitness certification, open maintenance
// tickets, pending cleaning).
// Rule: a unit with zero certificate records fails certification;
// absence of certification is a failure, not "no issue".
// Rule: the evaluation date is injected, never read from a clock.
// ==========================================

use crate::domain::assessment::ReadinessAssessment;
use crate::domain::fleet::{CertificateRecord, CleaningTask, MaintenanceTicket, Unit};
use crate::domain::types::{CertificateStatus, CleaningStatus, IssueKind, TicketStatus};
use chrono::NaiveDate;
use tracing::{instrument, warn};

// ==========================================
// ReadinessEvaluator
// ==========================================
pub struct ReadinessEvaluator {
    // stateless engine, no injected dependencies
}

impl ReadinessEvaluator {
    pub fn new() -> Self {
        Self {}
    }

    /// Assess every unit in the fleet
    ///
    /// Output preserves the unit-list order; that order is the
    /// natural candidate order for the downstream ranking step.
    ///
    /// # Parameters
    /// - `units`: full unit list (snapshot)
    /// - `certificates` / `tickets` / `tasks`: the three check collections
    /// - `today`: evaluation date; certificates expiring strictly
    ///   before this date fail the fitness check
    #[instrument(skip_all, fields(unit_count = units.len()))]
    pub fn evaluate_fleet(
        &self,
        units: &[Unit],
        certificates: &[CertificateRecord],
        tickets: &[MaintenanceTicket],
        tasks: &[CleaningTask],
        today: NaiveDate,
    ) -> Vec<ReadinessAssessment> {
        units
            .iter()
            .map(|unit| self.evaluate_single(unit, certificates, tickets, tasks, today))
            .collect()
    }

    /// Assess a single unit
    ///
    /// Issue order is fixed: fitness, maintenance, cleaning.
    pub fn evaluate_single(
        &self,
        unit: &Unit,
        certificates: &[CertificateRecord],
        tickets: &[MaintenanceTicket],
        tasks: &[CleaningTask],
        today: NaiveDate,
    ) -> ReadinessAssessment {
        let mut issues = Vec::new();

        if self.fitness_check_fails(unit, certificates, today) {
            issues.push(IssueKind::InvalidOrExpiredFitness);
        }

        let has_open_ticket = tickets
            .iter()
            .any(|t| t.unit_id == unit.id && t.status != TicketStatus::Closed);
        if has_open_ticket {
            issues.push(IssueKind::OpenMaintenanceTicket);
        }

        let has_pending_cleaning = tasks
            .iter()
            .any(|c| c.unit_id == unit.id && c.status != CleaningStatus::Done);
        if has_pending_cleaning {
            issues.push(IssueKind::PendingCleaning);
        }

        ReadinessAssessment::new(unit.id, unit.identifier.clone(), issues)
    }

    /// Any-fails semantics across all certificate records of the unit
    ///
    /// A unit holding one valid and one expired certificate is still
    /// flagged. This conservative posture is deliberate and must not
    /// be relaxed to most-recent-record semantics.
    fn fitness_check_fails(
        &self,
        unit: &Unit,
        certificates: &[CertificateRecord],
        today: NaiveDate,
    ) -> bool {
        let mut found_any = false;
        for cert in certificates.iter().filter(|c| c.unit_id == unit.id) {
            found_any = true;
            if cert.status != CertificateStatus::Valid {
                return true;
            }
            match NaiveDate::parse_from_str(&cert.valid_until, "%Y-%m-%d") {
                Ok(valid_until) => {
                    if valid_until < today {
                        return true;
                    }
                }
                Err(_) => {
                    // One malformed row degrades only this unit's check,
                    // never the whole run.
                    warn!(
                        unit_id = unit.id,
                        valid_until = %cert.valid_until,
                        "unparseable certificate expiry date, treating as expired"
                    );
                    return true;
                }
            }
        }
        !found_any
    }
}
