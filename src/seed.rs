//! Seed Data
//!
//! Fixed sample records each view starts from when it mounts.

use chrono::NaiveDate;

use crate::models::{
    Client, ClientStatus, Column, ContentItem, ContentStatus, Invoice, InvoiceStatus, Priority, WorkflowCard,
};
use crate::money::Money;

/// Static KPI tile
#[derive(Debug, Clone, PartialEq)]
pub struct Kpi {
    pub label: &'static str,
    pub value: &'static str,
    /// Percentage change against the previous period
    pub diff: f64,
}

impl Kpi {
    pub fn is_positive(&self) -> bool {
        self.diff >= 0.0
    }
}

pub const KPIS: &[Kpi] = &[
    Kpi { label: "MRR", value: "€ 48.900", diff: 12.4 },
    Kpi { label: "New clients", value: "128", diff: 4.1 },
    Kpi { label: "Churn", value: "2.3%", diff: -0.6 },
    Kpi { label: "NPS", value: "62", diff: 3.0 },
];

/// Monthly revenue samples for the line chart
pub const REVENUE_SAMPLES: &[f64] = &[8.0, 20.0, 12.0, 28.0, 18.0, 36.0, 24.0, 40.0, 26.0, 44.0, 38.0, 52.0];
pub const REVENUE_SCALE_MAX: f64 = 60.0;

/// Client distribution shares for the donut (active, inactive/lead)
pub const CLIENT_SHARES: &[(&str, f64)] = &[("Active", 62.0), ("Inactive/Lead", 38.0)];
pub const DONUT_RADIUS: f64 = 42.0;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default()
}

fn client(id: u64, name: &str, status: ClientStatus, contact: &str, email: &str, phone: &str, last_contact: NaiveDate) -> Client {
    Client {
        id,
        name: name.to_string(),
        status,
        contact: contact.to_string(),
        email: email.to_string(),
        phone: phone.to_string(),
        last_contact,
    }
}

pub fn clients() -> Vec<Client> {
    vec![
        client(1, "Oceanic Labs", ClientStatus::Active, "Mara Chen", "mara@oceanic.io", "+49 30 1234 555", date(2025, 11, 2)),
        client(2, "Amber Wood GmbH", ClientStatus::Lead, "Leon Hart", "leon@amberwood.de", "+49 40 9876 210", date(2025, 11, 10)),
        client(3, "Tealwave Studio", ClientStatus::Inactive, "Rina Falk", "rina@tealwave.co", "+49 89 4567 111", date(2025, 10, 28)),
    ]
}

fn content(id: u32, day: u8, kind: &str, status: ContentStatus, title: &str) -> ContentItem {
    ContentItem {
        id,
        day,
        kind: kind.to_string(),
        status,
        title: title.to_string(),
    }
}

pub fn content_items() -> Vec<ContentItem> {
    vec![
        content(1, 1, "Blogpost", ContentStatus::Draft, "Dark Mode Best Practices"),
        content(2, 4, "Social Post", ContentStatus::Scheduled, "Q4 Launch Teaser"),
        content(3, 12, "Newsletter", ContentStatus::InReview, "November Updates"),
        content(4, 18, "Blogpost", ContentStatus::Scheduled, "Case Study: Tealwave"),
    ]
}

fn card(id: u32, title: &str, assignee: &str, priority: Priority) -> WorkflowCard {
    WorkflowCard {
        id,
        title: title.to_string(),
        assignee: assignee.to_string(),
        priority,
    }
}

pub fn workflow_cards() -> Vec<(Column, WorkflowCard)> {
    vec![
        (Column::ToDo, card(1, "Wireframe Landing", "MC", Priority::High)),
        (Column::ToDo, card(2, "Audit Content Plan", "LF", Priority::Low)),
        (Column::InProgress, card(3, "Design Dashboard Widgets", "RF", Priority::Medium)),
        (Column::ReadyForReview, card(4, "Marketing Copy v2", "AK", Priority::High)),
        (Column::Completed, card(5, "Client Onboarding Guide", "MC", Priority::Low)),
    ]
}

fn invoice(id: &str, client: &str, units: u64, status: InvoiceStatus) -> Invoice {
    Invoice {
        id: id.to_string(),
        client: client.to_string(),
        amount: Money::from_units(units),
        status,
    }
}

pub fn invoices() -> Vec<Invoice> {
    vec![
        invoice("INV-1024", "Oceanic Labs", 4200, InvoiceStatus::Open),
        invoice("INV-1025", "Amber Wood GmbH", 2100, InvoiceStatus::Paid),
        invoice("INV-1026", "Tealwave Studio", 980, InvoiceStatus::Overdue),
    ]
}
