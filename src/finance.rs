//! Invoice Ledger
//!
//! Invoice list owned by the finance view, the create-invoice draft, and the
//! open/paid summaries derived from the list.

use crate::error::DashboardResult;
use crate::ids::InvoiceNumbers;
use crate::models::{Invoice, InvoiceStatus};
use crate::money::Money;

/// One row of the invoice draft; the amount stays raw form input
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LineItemDraft {
    pub description: String,
    pub amount: String,
}

impl LineItemDraft {
    pub fn new(description: &str, amount: &str) -> Self {
        Self {
            description: description.to_string(),
            amount: amount.to_string(),
        }
    }

    pub fn parsed_amount(&self) -> DashboardResult<Money> {
        Money::parse(&self.amount)
    }
}

/// Draft buffer of the "new invoice" modal
#[derive(Debug, Clone, PartialEq)]
pub struct InvoiceDraft {
    pub client: String,
    pub items: Vec<LineItemDraft>,
}

impl Default for InvoiceDraft {
    /// Starts with one empty line item
    fn default() -> Self {
        Self {
            client: String::new(),
            items: vec![LineItemDraft::default()],
        }
    }
}

impl InvoiceDraft {
    pub fn add_item(&mut self) {
        self.items.push(LineItemDraft::default());
    }

    pub fn set_description(&mut self, index: usize, value: String) {
        if let Some(item) = self.items.get_mut(index) {
            item.description = value;
        }
    }

    pub fn set_amount(&mut self, index: usize, value: String) {
        if let Some(item) = self.items.get_mut(index) {
            item.amount = value;
        }
    }

    /// Sum of line items. Rows that do not parse count as zero.
    pub fn total(&self) -> Money {
        self.items.iter().filter_map(|item| item.parsed_amount().ok()).sum()
    }

    /// Indexes of rows whose amount does not parse
    pub fn invalid_rows(&self) -> Vec<usize> {
        self.items
            .iter()
            .enumerate()
            .filter(|(_, item)| item.parsed_amount().is_err())
            .map(|(i, _)| i)
            .collect()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InvoiceSummary {
    pub count: usize,
    pub sum: Money,
}

impl InvoiceSummary {
    fn of<'a>(invoices: impl Iterator<Item = &'a Invoice>) -> Self {
        invoices.fold(InvoiceSummary::default(), |acc, inv| InvoiceSummary {
            count: acc.count + 1,
            sum: acc.sum + inv.amount,
        })
    }
}

/// Open (anything not paid) and paid totals, folded from the current list
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FinanceSummary {
    pub open: InvoiceSummary,
    pub paid: InvoiceSummary,
}

impl FinanceSummary {
    pub fn of(invoices: &[Invoice]) -> Self {
        Self {
            open: InvoiceSummary::of(invoices.iter().filter(|i| i.status != InvoiceStatus::Paid)),
            paid: InvoiceSummary::of(invoices.iter().filter(|i| i.status == InvoiceStatus::Paid)),
        }
    }

    pub fn revenue(&self) -> Money {
        self.open.sum + self.paid.sum
    }

    pub fn outstanding(&self) -> Money {
        self.open.sum
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Ledger {
    invoices: Vec<Invoice>,
    numbers: InvoiceNumbers,
}

impl Ledger {
    pub fn new(seed: Vec<Invoice>) -> Self {
        let numbers = InvoiceNumbers::after(seed.iter().map(|i| i.id.as_str()));
        Self { invoices: seed, numbers }
    }

    pub fn invoices(&self) -> &[Invoice] {
        &self.invoices
    }

    pub fn summary(&self) -> FinanceSummary {
        FinanceSummary::of(&self.invoices)
    }

    /// Commit a draft as a new open invoice at the top of the list
    pub fn create(&mut self, draft: &InvoiceDraft) -> &Invoice {
        let invoice = Invoice {
            id: self.numbers.next_token(),
            client: draft.client.clone(),
            amount: draft.total(),
            status: InvoiceStatus::Open,
        };
        self.invoices.insert(0, invoice);
        &self.invoices[0]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed;

    fn draft(client: &str, amounts: &[&str]) -> InvoiceDraft {
        InvoiceDraft {
            client: client.to_string(),
            items: amounts.iter().map(|a| LineItemDraft::new("Work", a)).collect(),
        }
    }

    #[test]
    fn test_create_sums_line_items() {
        let mut ledger = Ledger::new(seed::invoices());
        let created = ledger.create(&draft("Acme", &["100", "250"])).clone();

        assert_eq!(created.amount, Money::from_units(350));
        assert_eq!(created.status, InvoiceStatus::Open);
        assert_eq!(created.client, "Acme");
        assert_eq!(created.id, "INV-1027");
        assert_eq!(ledger.invoices()[0], created);
        assert_eq!(ledger.invoices().len(), 4);
    }

    #[test]
    fn test_created_ids_are_unique() {
        let mut ledger = Ledger::new(seed::invoices());
        let a = ledger.create(&InvoiceDraft::default()).id.clone();
        let b = ledger.create(&InvoiceDraft::default()).id.clone();
        assert_ne!(a, b);
        let ids: Vec<&str> = ledger.invoices().iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, vec![b.as_str(), a.as_str(), "INV-1024", "INV-1025", "INV-1026"]);
    }

    #[test]
    fn test_seed_summary() {
        let summary = FinanceSummary::of(&seed::invoices());
        assert_eq!(summary.open, InvoiceSummary { count: 2, sum: Money::from_units(5180) });
        assert_eq!(summary.paid, InvoiceSummary { count: 1, sum: Money::from_units(2100) });
        assert_eq!(summary.revenue(), Money::from_units(7280));
        assert_eq!(summary.outstanding(), Money::from_units(5180));
    }

    #[test]
    fn test_open_plus_paid_equals_total() {
        let mut ledger = Ledger::new(seed::invoices());
        ledger.create(&draft("Acme", &["12.5", "7,25"]));
        ledger.create(&draft("Beta", &["1000"]));

        let summary = ledger.summary();
        let total: Money = ledger.invoices().iter().map(|i| i.amount).sum();
        assert_eq!(summary.open.sum + summary.paid.sum, total);
        assert_eq!(summary.open.count + summary.paid.count, ledger.invoices().len());
    }

    #[test]
    fn test_summary_of_empty_list() {
        assert_eq!(FinanceSummary::of(&[]), FinanceSummary::default());
    }

    #[test]
    fn test_draft_editing_and_total() {
        let mut d = InvoiceDraft::default();
        assert_eq!(d.items.len(), 1);
        assert_eq!(d.total(), Money::ZERO);

        d.set_amount(0, "100".to_string());
        d.add_item();
        d.set_amount(1, "abc".to_string());
        d.set_description(1, "Typo".to_string());
        d.set_amount(7, "999".to_string());

        assert_eq!(d.total(), Money::from_units(100));
        assert_eq!(d.invalid_rows(), vec![1]);
        assert_eq!(d.items[1].description, "Typo");
    }
}
