// ==========================================
// Train Induction Planner - SQLite Fleet Store
// ==========================================
// Responsibility: manage the five fleet tables, no business logic.
// Constraint: all queries parameterized, listings ORDER BY id so
// insertion order is the stable natural order seen by the engine.
// ==========================================

use crate::db::{open_in_memory_connection, open_sqlite_connection};
use crate::domain::fleet::{
    BrandingAssignment, CertificateRecord, CleaningTask, MaintenanceTicket, Unit,
};
use crate::domain::types::{BrandingPriority, CertificateStatus, CleaningStatus, TicketStatus};
use crate::repository::error::{RepositoryError, RepositoryResult};
use crate::repository::fleet_store::FleetStore;
use rusqlite::{params, Connection};
use std::sync::{Arc, Mutex};

// ==========================================
// SqliteFleetStore
// ==========================================
pub struct SqliteFleetStore {
    conn: Arc<Mutex<Connection>>,
}

impl SqliteFleetStore {
    /// Open (or create) a fleet database at the given path
    pub fn new(db_path: &str) -> RepositoryResult<Self> {
        let conn = open_sqlite_connection(db_path)
            .map_err(|e| RepositoryError::DatabaseConnectionError(e.to_string()))?;
        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    /// Open a private in-memory fleet database
    pub fn in_memory() -> RepositoryResult<Self> {
        let conn = open_in_memory_connection()
            .map_err(|e| RepositoryError::DatabaseConnectionError(e.to_string()))?;
        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    /// Build a store from an already-configured connection
    pub fn from_connection(conn: Arc<Mutex<Connection>>) -> Self {
        Self { conn }
    }

    fn get_conn(&self) -> RepositoryResult<std::sync::MutexGuard<'_, Connection>> {
        self.conn
            .lock()
            .map_err(|e| RepositoryError::LockError(e.to_string()))
    }

    /// Create the fleet tables when they do not yet exist
    pub fn init_schema(&self) -> RepositoryResult<()> {
        let conn = self.get_conn()?;
        conn.execute_batch(
            r#"
            CREATE TABLE IF NOT EXISTS units (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                identifier TEXT UNIQUE NOT NULL,
                description TEXT
            );

            CREATE TABLE IF NOT EXISTS fitness_certificates (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                unit_id INTEGER NOT NULL,
                status TEXT NOT NULL,
                valid_until TEXT NOT NULL,
                issuer TEXT NOT NULL,
                FOREIGN KEY (unit_id) REFERENCES units(id)
            );

            CREATE TABLE IF NOT EXISTS maintenance_tickets (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                unit_id INTEGER NOT NULL,
                ticket_no TEXT NOT NULL,
                status TEXT NOT NULL,
                FOREIGN KEY (unit_id) REFERENCES units(id)
            );

            CREATE TABLE IF NOT EXISTS cleaning_tasks (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                unit_id INTEGER NOT NULL,
                slot_name TEXT NOT NULL,
                status TEXT NOT NULL,
                FOREIGN KEY (unit_id) REFERENCES units(id)
            );

            CREATE TABLE IF NOT EXISTS branding_assignments (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                unit_id INTEGER NOT NULL,
                campaign TEXT NOT NULL,
                priority TEXT NOT NULL,
                exposure_hours REAL NOT NULL DEFAULT 0,
                FOREIGN KEY (unit_id) REFERENCES units(id)
            );
            "#,
        )?;
        Ok(())
    }

    // ==========================================
    // Insert helpers (fixtures, import edge)
    // ==========================================

    /// Insert a unit and return its generated id
    pub fn insert_unit(&self, identifier: &str, description: Option<&str>) -> RepositoryResult<i64> {
        let conn = self.get_conn()?;
        conn.execute(
            "INSERT INTO units (identifier, description) VALUES (?1, ?2)",
            params![identifier, description],
        )?;
        Ok(conn.last_insert_rowid())
    }

    pub fn insert_certificate(
        &self,
        unit_id: i64,
        status: CertificateStatus,
        valid_until: &str,
        issuer: &str,
    ) -> RepositoryResult<()> {
        let conn = self.get_conn()?;
        conn.execute(
            "INSERT INTO fitness_certificates (unit_id, status, valid_until, issuer)
             VALUES (?1, ?2, ?3, ?4)",
            params![unit_id, status.to_db_str(), valid_until, issuer],
        )?;
        Ok(())
    }

    pub fn insert_ticket(
        &self,
        unit_id: i64,
        ticket_no: &str,
        status: TicketStatus,
    ) -> RepositoryResult<()> {
        let conn = self.get_conn()?;
        conn.execute(
            "INSERT INTO maintenance_tickets (unit_id, ticket_no, status) VALUES (?1, ?2, ?3)",
            params![unit_id, ticket_no, status.to_db_str()],
        )?;
        Ok(())
    }

    pub fn insert_cleaning_task(
        &self,
        unit_id: i64,
        slot_name: &str,
        status: CleaningStatus,
    ) -> RepositoryResult<()> {
        let conn = self.get_conn()?;
        conn.execute(
            "INSERT INTO cleaning_tasks (unit_id, slot_name, status) VALUES (?1, ?2, ?3)",
            params![unit_id, slot_name, status.to_db_str()],
        )?;
        Ok(())
    }

    pub fn insert_branding(
        &self,
        unit_id: i64,
        campaign: &str,
        priority: BrandingPriority,
        exposure_hours: f64,
    ) -> RepositoryResult<()> {
        let conn = self.get_conn()?;
        conn.execute(
            "INSERT INTO branding_assignments (unit_id, campaign, priority, exposure_hours)
             VALUES (?1, ?2, ?3, ?4)",
            params![unit_id, campaign, priority.to_db_str(), exposure_hours],
        )?;
        Ok(())
    }
}

// Status TEXT columns are decoded through the domain enums; unknown
// text is a data quality error, never a silently-passing check.
fn parse_field<T>(
    parsed: Option<T>,
    field: &str,
    raw: &str,
) -> RepositoryResult<T> {
    parsed.ok_or_else(|| RepositoryError::FieldValueError {
        field: field.to_string(),
        message: format!("unknown value '{raw}'"),
    })
}

impl FleetStore for SqliteFleetStore {
    fn list_units(&self) -> RepositoryResult<Vec<Unit>> {
        let conn = self.get_conn()?;
        let mut stmt =
            conn.prepare("SELECT id, identifier, description FROM units ORDER BY id")?;
        let rows = stmt.query_map([], |row| {
            Ok(Unit {
                id: row.get(0)?,
                identifier: row.get(1)?,
                description: row.get(2)?,
            })
        })?;
        rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
    }

    fn list_certificates(&self) -> RepositoryResult<Vec<CertificateRecord>> {
        let conn = self.get_conn()?;
        let mut stmt = conn.prepare(
            "SELECT unit_id, status, valid_until, issuer FROM fitness_certificates ORDER BY id",
        )?;
        let rows = stmt.query_map([], |row| {
            Ok((
                row.get::<_, i64>(0)?,
                row.get::<_, String>(1)?,
                row.get::<_, String>(2)?,
                row.get::<_, String>(3)?,
            ))
        })?;

        let mut records = Vec::new();
        for row in rows {
            let (unit_id, status, valid_until, issuer) = row?;
            records.push(CertificateRecord {
                unit_id,
                status: parse_field(
                    CertificateStatus::from_str(&status),
                    "fitness_certificates.status",
                    &status,
                )?,
                valid_until,
                issuer,
            });
        }
        Ok(records)
    }

    fn list_tickets(&self) -> RepositoryResult<Vec<MaintenanceTicket>> {
        let conn = self.get_conn()?;
        let mut stmt =
            conn.prepare("SELECT unit_id, ticket_no, status FROM maintenance_tickets ORDER BY id")?;
        let rows = stmt.query_map([], |row| {
            Ok((
                row.get::<_, i64>(0)?,
                row.get::<_, String>(1)?,
                row.get::<_, String>(2)?,
            ))
        })?;

        let mut records = Vec::new();
        for row in rows {
            let (unit_id, ticket_no, status) = row?;
            records.push(MaintenanceTicket {
                unit_id,
                ticket_no,
                status: parse_field(
                    TicketStatus::from_str(&status),
                    "maintenance_tickets.status",
                    &status,
                )?,
            });
        }
        Ok(records)
    }

    fn list_cleaning_tasks(&self) -> RepositoryResult<Vec<CleaningTask>> {
        let conn = self.get_conn()?;
        let mut stmt =
            conn.prepare("SELECT unit_id, slot_name, status FROM cleaning_tasks ORDER BY id")?;
        let rows = stmt.query_map([], |row| {
            Ok((
                row.get::<_, i64>(0)?,
                row.get::<_, String>(1)?,
                row.get::<_, String>(2)?,
            ))
        })?;

        let mut records = Vec::new();
        for row in rows {
            let (unit_id, slot_name, status) = row?;
            records.push(CleaningTask {
                unit_id,
                slot_name,
                status: parse_field(
                    CleaningStatus::from_str(&status),
                    "cleaning_tasks.status",
                    &status,
                )?,
            });
        }
        Ok(records)
    }

    fn list_branding(&self) -> RepositoryResult<Vec<BrandingAssignment>> {
        let conn = self.get_conn()?;
        let mut stmt = conn.prepare(
            "SELECT unit_id, campaign, priority, exposure_hours FROM branding_assignments ORDER BY id",
        )?;
        let rows = stmt.query_map([], |row| {
            Ok((
                row.get::<_, i64>(0)?,
                row.get::<_, String>(1)?,
                row.get::<_, String>(2)?,
                row.get::<_, f64>(3)?,
            ))
        })?;

        let mut records = Vec::new();
        for row in rows {
            let (unit_id, campaign, priority, exposure_hours) = row?;
            records.push(BrandingAssignment {
                unit_id,
                campaign,
                priority: parse_field(
                    BrandingPriority::from_str(&priority),
                    "branding_assignments.priority",
                    &priority,
                )?,
                exposure_hours,
            });
        }
        Ok(records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn in_memory_store_roundtrip() {
        let store = SqliteFleetStore::in_memory().unwrap();
        store.init_schema().unwrap();

        let id = store.insert_unit("KM-01", None).unwrap();
        store
            .insert_certificate(id, CertificateStatus::Valid, "2099-12-31", "CMRS")
            .unwrap();
        store.insert_ticket(id, "JC-001", TicketStatus::Open).unwrap();
        store
            .insert_cleaning_task(id, "Bay 1", CleaningStatus::Pending)
            .unwrap();
        store
            .insert_branding(id, "Metro Cola", BrandingPriority::Medium, 12.5)
            .unwrap();

        assert_eq!(store.list_units().unwrap().len(), 1);
        assert_eq!(
            store.list_certificates().unwrap()[0].status,
            CertificateStatus::Valid
        );
        assert_eq!(store.list_tickets().unwrap()[0].ticket_no, "JC-001");
        assert_eq!(
            store.list_cleaning_tasks().unwrap()[0].status,
            CleaningStatus::Pending
        );
        assert_eq!(
            store.list_branding().unwrap()[0].priority,
            BrandingPriority::Medium
        );
    }

    #[test]
    fn init_schema_is_idempotent() {
        let store = SqliteFleetStore::in_memory().unwrap();
        store.init_schema().unwrap();
        store.init_schema().unwrap();
    }
}
