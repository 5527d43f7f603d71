// ==========================================
// Train Induction Planner - Induction Simulator
// ==========================================
// Responsibility: orchestrate the what-if pipeline over one fleet
// snapshot: readiness -> override -> ranking -> selection -> metrics.
// Rule: stateless between calls; safe for concurrent invocation.
// Rule: the evaluation date is injected by the caller, never read
// from the wall clock inside the engine.
// ==========================================

use crate::config::ScenarioParameters;
use crate::domain::assessment::SimulationResult;
use crate::engine::error::SimulationError;
use crate::engine::metrics::MetricsAggregator;
use crate::engine::override_policy::OverridePolicy;
use crate::engine::ranking::PriorityRanker;
use crate::engine::readiness::ReadinessEvaluator;
use crate::engine::selector::InductionSelector;
use crate::repository::FleetStore;
use chrono::NaiveDate;
use std::sync::Arc;
use tracing::{debug, info, instrument};

// ==========================================
// InductionSimulator
// ==========================================
pub struct InductionSimulator<S>
where
    S: FleetStore,
{
    store: Arc<S>,
    evaluator: ReadinessEvaluator,
    ranker: PriorityRanker,
    selector: InductionSelector,
    aggregator: MetricsAggregator,
}

impl<S> InductionSimulator<S>
where
    S: FleetStore,
{
    /// # Parameters
    /// - `store`: the external fleet data collaborator
    pub fn new(store: Arc<S>) -> Self {
        Self {
            store,
            evaluator: ReadinessEvaluator::new(),
            ranker: PriorityRanker::new(),
            selector: InductionSelector::new(),
            aggregator: MetricsAggregator::new(),
        }
    }

    /// Run one induction simulation over the current snapshot
    ///
    /// Parameters are validated before any store access; a bad
    /// parameter aborts the run with no partial result. Per-unit
    /// data anomalies (e.g. a malformed certificate date) degrade
    /// only that unit's assessment.
    ///
    /// # Parameters
    /// - `evaluation_date`: reference date for certificate expiry
    /// - `params`: the what-if scenario variables
    #[instrument(skip(self, params), fields(quota = params.quota))]
    pub fn simulate(
        &self,
        evaluation_date: NaiveDate,
        params: &ScenarioParameters,
    ) -> Result<SimulationResult, SimulationError> {
        params.validate()?;

        let units = self.store.list_units()?;
        let certificates = self.store.list_certificates()?;
        let tickets = self.store.list_tickets()?;
        let cleaning_tasks = self.store.list_cleaning_tasks()?;
        let branding = self.store.list_branding()?;
        debug!(
            units = units.len(),
            certificates = certificates.len(),
            tickets = tickets.len(),
            cleaning_tasks = cleaning_tasks.len(),
            "fleet snapshot loaded"
        );

        let assessments = self.evaluator.evaluate_fleet(
            &units,
            &certificates,
            &tickets,
            &cleaning_tasks,
            evaluation_date,
        );

        let policy = OverridePolicy::new(params.allow_override, params.max_issues_allowed as usize);
        let eligible: Vec<_> = assessments
            .into_iter()
            .map(|a| policy.apply(a))
            .filter(|a| a.eligible)
            .collect();

        let ranked = self
            .ranker
            .rank(eligible, &branding, params.prioritize_by_branding);
        let selected = self.selector.select(ranked, params.quota);

        let metrics = self
            .aggregator
            .aggregate(
                &selected,
                units.len(),
                params.base_cost_per_unit,
                params.cost_penalty_per_issue,
            )
            .rounded();

        info!(
            selected = selected.len(),
            fleet = units.len(),
            punctuality = metrics.punctuality,
            "induction simulation complete"
        );

        Ok(SimulationResult { selected, metrics })
    }
}
