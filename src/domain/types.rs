// ==========================================
// Train Induction Planner - Domain Types
// ==========================================
// Status enums use explicit variants instead of free-form
// strings so a typo in stored data fails loudly at the
// store boundary instead of silently passing a check.
// Serialization format: SCREAMING_SNAKE_CASE (same as the database)
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;

// ==========================================
// Fitness Certificate Status
// ==========================================
// Readiness rule: anything other than Valid fails the fitness check
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CertificateStatus {
    Valid,
    Expired,
    Suspended,
}

impl fmt::Display for CertificateStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_db_str())
    }
}

impl CertificateStatus {
    /// Parse a stored status string
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_uppercase().as_str() {
            "VALID" => Some(CertificateStatus::Valid),
            "EXPIRED" => Some(CertificateStatus::Expired),
            "SUSPENDED" => Some(CertificateStatus::Suspended),
            _ => None,
        }
    }

    /// String form stored in the database
    pub fn to_db_str(&self) -> &'static str {
        match self {
            CertificateStatus::Valid => "VALID",
            CertificateStatus::Expired => "EXPIRED",
            CertificateStatus::Suspended => "SUSPENDED",
        }
    }
}

// ==========================================
// Maintenance Ticket Status
// ==========================================
// Readiness rule: any ticket not Closed blocks induction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TicketStatus {
    Open,
    Closed,
}

impl fmt::Display for TicketStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_db_str())
    }
}

impl TicketStatus {
    /// Parse a stored status string
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_uppercase().as_str() {
            "OPEN" => Some(TicketStatus::Open),
            "CLOSED" => Some(TicketStatus::Closed),
            _ => None,
        }
    }

    /// String form stored in the database
    pub fn to_db_str(&self) -> &'static str {
        match self {
            TicketStatus::Open => "OPEN",
            TicketStatus::Closed => "CLOSED",
        }
    }
}

// ==========================================
// Cleaning Task Status
// ==========================================
// Readiness rule: any task not Done blocks induction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CleaningStatus {
    Pending,
    Done,
}

impl fmt::Display for CleaningStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_db_str())
    }
}

impl CleaningStatus {
    /// Parse a stored status string
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_uppercase().as_str() {
            "PENDING" => Some(CleaningStatus::Pending),
            "DONE" => Some(CleaningStatus::Done),
            _ => None,
        }
    }

    /// String form stored in the database
    pub fn to_db_str(&self) -> &'static str {
        match self {
            CleaningStatus::Pending => "PENDING",
            CleaningStatus::Done => "DONE",
        }
    }
}

// ==========================================
// Branding Priority
// ==========================================
// Advertiser campaign priority; drives the optional re-ranking
// of eligible units before selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BrandingPriority {
    High,
    Medium,
    Low,
}

impl fmt::Display for BrandingPriority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_db_str())
    }
}

impl BrandingPriority {
    /// Numeric rank used for descending sort: High=3, Medium=2, Low=1
    pub fn rank(&self) -> u8 {
        match self {
            BrandingPriority::High => 3,
            BrandingPriority::Medium => 2,
            BrandingPriority::Low => 1,
        }
    }

    /// Parse a stored priority string
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_uppercase().as_str() {
            "HIGH" => Some(BrandingPriority::High),
            "MEDIUM" => Some(BrandingPriority::Medium),
            "LOW" => Some(BrandingPriority::Low),
            _ => None,
        }
    }

    /// String form stored in the database
    pub fn to_db_str(&self) -> &'static str {
        match self {
            BrandingPriority::High => "HIGH",
            BrandingPriority::Medium => "MEDIUM",
            BrandingPriority::Low => "LOW",
        }
    }
}

// ==========================================
// Issue Kind
// ==========================================
// A detected readiness defect; retained on the assessment even
// when the override policy re-flags the unit as inductable
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum IssueKind {
    InvalidOrExpiredFitness,
    OpenMaintenanceTicket,
    PendingCleaning,
}

impl fmt::Display for IssueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IssueKind::InvalidOrExpiredFitness => write!(f, "Invalid/Expired Fitness"),
            IssueKind::OpenMaintenanceTicket => write!(f, "Open Maintenance Ticket"),
            IssueKind::PendingCleaning => write!(f, "Pending Cleaning"),
        }
    }
}
