//! Client Book
//!
//! Client list owned by the clients view, with its id sequence and the
//! create-client form buffer.

use chrono::NaiveDate;

use crate::error::{DashboardError, DashboardResult};
use crate::ids::IdSequence;
use crate::models::{Client, ClientFilter, ClientStatus};

/// Draft buffer of the "new client" modal
#[derive(Debug, Clone, PartialEq)]
pub struct ClientForm {
    pub name: String,
    pub status: ClientStatus,
    pub contact: String,
    pub email: String,
    pub phone: String,
    pub last_contact: NaiveDate,
}

impl ClientForm {
    /// Empty form: status Lead, last contact today
    pub fn new(today: NaiveDate) -> Self {
        Self {
            name: String::new(),
            status: ClientStatus::Lead,
            contact: String::new(),
            email: String::new(),
            phone: String::new(),
            last_contact: today,
        }
    }

    /// Apply a `<input type="date">` value
    pub fn set_last_contact(&mut self, value: &str) -> DashboardResult<()> {
        self.last_contact = parse_form_date(value)?;
        Ok(())
    }
}

pub fn parse_form_date(value: &str) -> DashboardResult<NaiveDate> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map_err(|_| DashboardError::InvalidDate(value.to_string()))
}

#[derive(Debug, Clone, PartialEq)]
pub struct ClientBook {
    clients: Vec<Client>,
    ids: IdSequence,
}

impl ClientBook {
    pub fn new(seed: Vec<Client>) -> Self {
        let ids = IdSequence::after(seed.iter().map(|c| c.id));
        Self { clients: seed, ids }
    }

    pub fn clients(&self) -> &[Client] {
        &self.clients
    }

    /// Create a client from the form and put it first. Returns the new id.
    pub fn add(&mut self, form: ClientForm) -> u64 {
        let id = self.ids.next_id();
        self.clients.insert(
            0,
            Client {
                id,
                name: form.name,
                status: form.status,
                contact: form.contact,
                email: form.email,
                phone: form.phone,
                last_contact: form.last_contact,
            },
        );
        id
    }

    pub fn filtered(&self, filter: ClientFilter) -> Vec<Client> {
        filter_clients(&self.clients, filter)
    }
}

/// Matching clients in their original order. `All` returns every client.
pub fn filter_clients(clients: &[Client], filter: ClientFilter) -> Vec<Client> {
    clients.iter().filter(|c| filter.matches(c)).cloned().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 11, 18).unwrap()
    }

    fn ids(clients: &[Client]) -> Vec<u64> {
        clients.iter().map(|c| c.id).collect()
    }

    #[test]
    fn test_filter_all_returns_everything() {
        let book = ClientBook::new(seed::clients());
        assert_eq!(book.filtered(ClientFilter::All), book.clients().to_vec());
    }

    #[test]
    fn test_filter_by_status_keeps_order_and_list() {
        let mut book = ClientBook::new(seed::clients());
        let mut form = ClientForm::new(today());
        form.name = "Second Lead".to_string();
        book.add(form);
        let before = book.clients().to_vec();

        for status in ClientStatus::ALL {
            let filtered = book.filtered(ClientFilter::Only(status));
            assert!(filtered.iter().all(|c| c.status == status));
            let expected: Vec<u64> = before.iter().filter(|c| c.status == status).map(|c| c.id).collect();
            assert_eq!(ids(&filtered), expected);
        }
        assert_eq!(book.clients(), before.as_slice());
    }

    #[test]
    fn test_add_prepends_with_fresh_id() {
        let mut book = ClientBook::new(seed::clients());
        let existing = ids(book.clients());

        let mut form = ClientForm::new(today());
        form.name = "Acme".to_string();
        form.status = ClientStatus::Lead;
        let id = book.add(form);

        let first = &book.clients()[0];
        assert_eq!(first.name, "Acme");
        assert_eq!(first.status, ClientStatus::Lead);
        assert_eq!(first.id, id);
        assert!(!existing.contains(&id));
        assert_eq!(ids(&book.clients()[1..]), existing);
    }

    #[test]
    fn test_add_accepts_empty_form() {
        let mut book = ClientBook::new(Vec::new());
        let a = book.add(ClientForm::new(today()));
        let b = book.add(ClientForm::new(today()));
        assert_ne!(a, b);
        assert_eq!(book.clients()[0].name, "");
        assert_eq!(book.clients()[0].last_contact, today());
    }

    #[test]
    fn test_form_date_parsing() {
        let mut form = ClientForm::new(today());
        form.set_last_contact("2025-10-28").unwrap();
        assert_eq!(form.last_contact, NaiveDate::from_ymd_opt(2025, 10, 28).unwrap());

        assert!(form.set_last_contact("28.10.2025").is_err());
        assert_eq!(form.last_contact, NaiveDate::from_ymd_opt(2025, 10, 28).unwrap());
    }
}
