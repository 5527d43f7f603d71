// ==========================================
// Train Induction Planner - Demo Entry Point
// ==========================================
// Opens (or creates) a fleet database, runs one default what-if
// scenario for tonight's induction and prints the result as JSON.
// All UI concerns live outside this crate; this binary only
// translates the edge (clock, db path) into engine parameters.
// ==========================================

use anyhow::Context;
use chrono::Local;
use std::sync::Arc;
use train_induction::{logging, InductionSimulator, ScenarioParameters, SqliteFleetStore};

fn main() -> anyhow::Result<()> {
    logging::init();

    tracing::info!("==================================================");
    tracing::info!("{}", train_induction::APP_NAME);
    tracing::info!("version: {}", train_induction::VERSION);
    tracing::info!("==================================================");

    let db_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "fleet.db".to_string());
    tracing::info!("using database: {}", db_path);

    let store = SqliteFleetStore::new(&db_path)
        .with_context(|| format!("cannot open fleet database at {db_path}"))?;
    store.init_schema().context("cannot initialize fleet schema")?;

    // The wall clock stops here; the engine only ever sees the
    // injected evaluation date.
    let evaluation_date = Local::now().date_naive();
    let params = ScenarioParameters::default();

    let simulator = InductionSimulator::new(Arc::new(store));
    let result = simulator
        .simulate(evaluation_date, &params)
        .context("simulation failed")?;

    println!("{}", serde_json::to_string_pretty(&result)?);
    Ok(())
}
