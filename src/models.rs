//! Frontend Models
//!
//! Plain records held by the views. No cross-entity references except the
//! free-text client name on invoices.

use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{DashboardError, DashboardResult};
use crate::money::Money;

/// Top-level dashboard sections, in sidebar order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Section {
    Analytics,
    Clients,
    Content,
    Workflow,
    Finance,
}

impl Section {
    pub const ALL: [Section; 5] = [
        Section::Analytics,
        Section::Clients,
        Section::Content,
        Section::Workflow,
        Section::Finance,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Section::Analytics => "Analytics & Reporting",
            Section::Clients => "Client Management",
            Section::Content => "Content Planning",
            Section::Workflow => "Creative Workflows",
            Section::Finance => "Finance & Invoices",
        }
    }
}

// ========================
// Clients
// ========================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ClientStatus {
    Active,
    Inactive,
    Lead,
}

impl ClientStatus {
    pub const ALL: [ClientStatus; 3] = [ClientStatus::Active, ClientStatus::Inactive, ClientStatus::Lead];

    pub fn as_str(&self) -> &'static str {
        match self {
            ClientStatus::Active => "Active",
            ClientStatus::Inactive => "Inactive",
            ClientStatus::Lead => "Lead",
        }
    }
}

impl FromStr for ClientStatus {
    type Err = DashboardError;

    fn from_str(s: &str) -> DashboardResult<Self> {
        ClientStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| DashboardError::unknown("client status", s))
    }
}

/// Status filter for the client table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ClientFilter {
    #[default]
    All,
    Only(ClientStatus),
}

impl ClientFilter {
    pub const ALL: [ClientFilter; 4] = [
        ClientFilter::All,
        ClientFilter::Only(ClientStatus::Active),
        ClientFilter::Only(ClientStatus::Inactive),
        ClientFilter::Only(ClientStatus::Lead),
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ClientFilter::All => "All",
            ClientFilter::Only(status) => status.as_str(),
        }
    }

    pub fn matches(&self, client: &Client) -> bool {
        match self {
            ClientFilter::All => true,
            ClientFilter::Only(status) => client.status == *status,
        }
    }
}

impl FromStr for ClientFilter {
    type Err = DashboardError;

    fn from_str(s: &str) -> DashboardResult<Self> {
        if s == "All" {
            return Ok(ClientFilter::All);
        }
        s.parse().map(ClientFilter::Only)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Client {
    pub id: u64,
    pub name: String,
    pub status: ClientStatus,
    pub contact: String,
    pub email: String,
    pub phone: String,
    pub last_contact: NaiveDate,
}

// ========================
// Content calendar
// ========================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ContentStatus {
    Draft,
    Scheduled,
    InReview,
}

impl ContentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ContentStatus::Draft => "Draft",
            ContentStatus::Scheduled => "Scheduled",
            ContentStatus::InReview => "In Review",
        }
    }

    /// CSS modifier for the status chip
    pub fn css_class(&self) -> &'static str {
        match self {
            ContentStatus::Draft => "status-draft",
            ContentStatus::Scheduled => "status-scheduled",
            ContentStatus::InReview => "status-review",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentItem {
    pub id: u32,
    /// Day of month, 1-based, inside the calendar grid
    pub day: u8,
    pub kind: String,
    pub status: ContentStatus,
    pub title: String,
}

// ========================
// Workflow (kanban)
// ========================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::High => "High",
            Priority::Medium => "Medium",
            Priority::Low => "Low",
        }
    }
}

/// Kanban columns. Declaration order is display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Column {
    ToDo,
    InProgress,
    ReadyForReview,
    Completed,
}

impl Column {
    pub const ALL: [Column; 4] = [Column::ToDo, Column::InProgress, Column::ReadyForReview, Column::Completed];

    pub fn as_str(&self) -> &'static str {
        match self {
            Column::ToDo => "To Do",
            Column::InProgress => "In Progress",
            Column::ReadyForReview => "Ready for Review",
            Column::Completed => "Completed",
        }
    }
}

impl FromStr for Column {
    type Err = DashboardError;

    fn from_str(s: &str) -> DashboardResult<Self> {
        Column::ALL
            .into_iter()
            .find(|column| column.as_str() == s)
            .ok_or_else(|| DashboardError::unknown("column", s))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkflowCard {
    pub id: u32,
    pub title: String,
    /// Assignee initials
    pub assignee: String,
    pub priority: Priority,
}

// ========================
// Finance
// ========================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InvoiceStatus {
    Open,
    Paid,
    Overdue,
}

impl InvoiceStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            InvoiceStatus::Open => "Open",
            InvoiceStatus::Paid => "Paid",
            InvoiceStatus::Overdue => "Overdue",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Invoice {
    /// Formatted token, e.g. `INV-1024`
    pub id: String,
    pub client: String,
    pub amount: Money,
    pub status: InvoiceStatus,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_filter_parsing() {
        assert_eq!("All".parse::<ClientFilter>(), Ok(ClientFilter::All));
        assert_eq!("Lead".parse::<ClientFilter>(), Ok(ClientFilter::Only(ClientStatus::Lead)));
        assert!("Aktiv".parse::<ClientFilter>().is_err());
    }

    #[test]
    fn test_filter_labels_round_trip() {
        for filter in ClientFilter::ALL {
            assert_eq!(filter.as_str().parse::<ClientFilter>(), Ok(filter));
        }
    }

    #[test]
    fn test_columns_in_display_order() {
        let mut sorted = Column::ALL;
        sorted.sort();
        assert_eq!(sorted, Column::ALL);
        assert_eq!("Ready for Review".parse::<Column>(), Ok(Column::ReadyForReview));
    }
}
