// ==========================================
// Train Induction Planner - Data Store Layer
// ==========================================
// Responsibility: expose the five fleet record collections,
// shield the engine from database details.
// Constraint: no business logic; all queries parameterized.
// ==========================================

pub mod error;
pub mod fleet_store;
pub mod memory_store;
pub mod sqlite_store;

// Re-export core store types
pub use error::{RepositoryError, RepositoryResult};
pub use fleet_store::FleetStore;
pub use memory_store::InMemoryFleetStore;
pub use sqlite_store::SqliteFleetStore;
