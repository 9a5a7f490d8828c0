//! Identifier Generation
//!
//! Strictly monotonic sequences. Each list owns one, started after the
//! largest seeded identifier so new records never collide with seed data.

/// Monotonic numeric id source
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdSequence {
    next: u64,
}

impl IdSequence {
    pub fn starting_at(first: u64) -> Self {
        Self { next: first }
    }

    /// Start after the largest of `existing` (or at 1 when empty)
    pub fn after<I: IntoIterator<Item = u64>>(existing: I) -> Self {
        let max = existing.into_iter().max().unwrap_or(0);
        Self::starting_at(max + 1)
    }

    pub fn next_id(&mut self) -> u64 {
        let id = self.next;
        self.next += 1;
        id
    }

    pub fn peek(&self) -> u64 {
        self.next
    }
}

/// Invoice number tokens: `INV-1027`, `INV-1028`, ...
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvoiceNumbers {
    seq: IdSequence,
}

pub const INVOICE_PREFIX: &str = "INV-";

/// First number handed out when no seeded token parses
const FIRST_INVOICE_NUMBER: u64 = 1000;

impl InvoiceNumbers {
    /// Continue after the highest parseable existing token
    pub fn after<'a, I: IntoIterator<Item = &'a str>>(existing: I) -> Self {
        let max = existing.into_iter().filter_map(parse_invoice_number).max();
        let seq = match max {
            Some(n) => IdSequence::starting_at(n + 1),
            None => IdSequence::starting_at(FIRST_INVOICE_NUMBER),
        };
        Self { seq }
    }

    pub fn next_token(&mut self) -> String {
        format!("{}{}", INVOICE_PREFIX, self.seq.next_id())
    }
}

pub fn parse_invoice_number(token: &str) -> Option<u64> {
    token.strip_prefix(INVOICE_PREFIX)?.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sequence_is_strictly_increasing() {
        let mut seq = IdSequence::after([3, 1, 2]);
        assert_eq!(seq.next_id(), 4);
        assert_eq!(seq.next_id(), 5);
        assert_eq!(seq.peek(), 6);
    }

    #[test]
    fn test_sequence_empty_starts_at_one() {
        let mut seq = IdSequence::after(std::iter::empty());
        assert_eq!(seq.next_id(), 1);
    }

    #[test]
    fn test_invoice_numbers_continue_after_seed() {
        let mut numbers = InvoiceNumbers::after(["INV-1024", "INV-1026", "INV-1025", "draft"]);
        assert_eq!(numbers.next_token(), "INV-1027");
        assert_eq!(numbers.next_token(), "INV-1028");
    }

    #[test]
    fn test_invoice_numbers_without_seed() {
        let mut numbers = InvoiceNumbers::after(std::iter::empty());
        assert_eq!(numbers.next_token(), "INV-1000");
        assert_eq!(parse_invoice_number("INV-1000"), Some(1000));
        assert_eq!(parse_invoice_number("1000"), None);
    }
}
