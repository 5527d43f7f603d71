// ==========================================
// ReadinessEvaluator integration tests
// ==========================================
// Target: the three independent checks over a whole fleet
// snapshot, including the certificate-absence invariant and the
// issue_count bookkeeping.
// ==========================================

mod helpers;

use chrono::NaiveDate;
use helpers::test_data_builder::{ready_unit, FleetFixtureBuilder};
use train_induction::domain::types::{
    CertificateStatus, CleaningStatus, IssueKind, TicketStatus,
};
use train_induction::{FleetStore, ReadinessEvaluator};

fn eval_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 3, 10).unwrap()
}

#[test]
fn certificate_absence_is_a_failure_for_any_evaluation_date() {
    let mut builder = FleetFixtureBuilder::new();
    builder.unit("KM-01");
    let store = builder.build();

    let evaluator = ReadinessEvaluator::new();
    let units = store.list_units().unwrap();

    for date in [
        NaiveDate::from_ymd_opt(1990, 1, 1).unwrap(),
        eval_date(),
        NaiveDate::from_ymd_opt(2150, 12, 31).unwrap(),
    ] {
        let assessments = evaluator.evaluate_fleet(&units, &[], &[], &[], date);
        assert!(!assessments[0].eligible);
        assert_eq!(
            assessments[0].issues,
            vec![IssueKind::InvalidOrExpiredFitness]
        );
    }
}

#[test]
fn checks_are_independent_and_counts_match_issue_lists() {
    let mut builder = FleetFixtureBuilder::new();
    let ready = ready_unit(&mut builder, "KM-01");

    // expired certificate only
    let expired = builder.unit("KM-02");
    builder.certificate(expired, CertificateStatus::Expired, "2025-01-01");

    // valid certificate but open maintenance and pending cleaning
    let dirty = builder.unit("KM-03");
    builder.valid_certificate(dirty, "2099-12-31");
    builder.ticket(dirty, TicketStatus::Open);
    builder.cleaning(dirty, CleaningStatus::Pending);

    // everything wrong at once
    let worst = builder.unit("KM-04");
    builder.ticket(worst, TicketStatus::Open);
    builder.cleaning(worst, CleaningStatus::Pending);

    let store = builder.build();
    let evaluator = ReadinessEvaluator::new();
    let assessments = evaluator.evaluate_fleet(
        &store.list_units().unwrap(),
        &store.list_certificates().unwrap(),
        &store.list_tickets().unwrap(),
        &store.list_cleaning_tasks().unwrap(),
        eval_date(),
    );

    assert_eq!(assessments.len(), 4);
    for assessment in &assessments {
        assert_eq!(assessment.issue_count, assessment.issues.len());
        assert_eq!(assessment.eligible, assessment.issues.is_empty());
    }

    let by_id = |id: i64| assessments.iter().find(|a| a.unit_id == id).unwrap();
    assert!(by_id(ready).eligible);
    assert_eq!(
        by_id(expired).issues,
        vec![IssueKind::InvalidOrExpiredFitness]
    );
    assert_eq!(
        by_id(dirty).issues,
        vec![IssueKind::OpenMaintenanceTicket, IssueKind::PendingCleaning]
    );
    assert_eq!(by_id(worst).issue_count, 3);
}

#[test]
fn suspended_certificate_fails_even_with_future_expiry() {
    let mut builder = FleetFixtureBuilder::new();
    let id = builder.unit("KM-01");
    builder.certificate(id, CertificateStatus::Suspended, "2099-12-31");
    let store = builder.build();

    let evaluator = ReadinessEvaluator::new();
    let assessments = evaluator.evaluate_fleet(
        &store.list_units().unwrap(),
        &store.list_certificates().unwrap(),
        &[],
        &[],
        eval_date(),
    );
    assert_eq!(
        assessments[0].issues,
        vec![IssueKind::InvalidOrExpiredFitness]
    );
}

#[test]
fn malformed_certificate_date_degrades_only_its_own_unit() {
    let mut builder = FleetFixtureBuilder::new();
    let healthy = ready_unit(&mut builder, "KM-01");
    let broken = builder.unit("KM-02");
    builder.valid_certificate(broken, "31/12/2099");
    let store = builder.build();

    let evaluator = ReadinessEvaluator::new();
    let assessments = evaluator.evaluate_fleet(
        &store.list_units().unwrap(),
        &store.list_certificates().unwrap(),
        &store.list_tickets().unwrap(),
        &store.list_cleaning_tasks().unwrap(),
        eval_date(),
    );

    let by_id = |id: i64| assessments.iter().find(|a| a.unit_id == id).unwrap();
    assert!(by_id(healthy).eligible);
    assert_eq!(
        by_id(broken).issues,
        vec![IssueKind::InvalidOrExpiredFitness]
    );
}
