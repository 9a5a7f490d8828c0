//! Display Formatting
//!
//! Fixed German convention: `.` groups thousands, `,` separates decimals,
//! dates read `DD.MM.YYYY`.

use chrono::NaiveDate;

use crate::money::Money;

/// `4200` -> `4.200`, `1234.50` -> `1.234,5`, `0.05` -> `0,05`
pub fn format_amount(amount: Money) -> String {
    let grouped = group_thousands(amount.units());
    match amount.cents() % 100 {
        0 => grouped,
        c if c % 10 == 0 => format!("{},{}", grouped, c / 10),
        c => format!("{},{:02}", grouped, c),
    }
}

/// `€ 4.200`
pub fn format_currency(amount: Money, symbol: &str) -> String {
    format!("{} {}", symbol, format_amount(amount))
}

pub fn format_date(date: NaiveDate) -> String {
    date.format("%d.%m.%Y").to_string()
}

/// Calendar cell heading, e.g. `4. Nov`
pub fn format_day_label(day: u8, month: &str) -> String {
    format!("{}. {}", day, month)
}

/// KPI delta with explicit sign, e.g. `+12.4%`, `-0.6%`, `+3%`
pub fn format_diff(diff: f64) -> String {
    if diff >= 0.0 {
        format!("+{}%", diff)
    } else {
        format!("{}%", diff)
    }
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push('.');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_amount() {
        assert_eq!(format_amount(Money::ZERO), "0");
        assert_eq!(format_amount(Money::from_units(980)), "980");
        assert_eq!(format_amount(Money::from_units(4200)), "4.200");
        assert_eq!(format_amount(Money::from_units(1_234_567)), "1.234.567");
        assert_eq!(format_amount(Money::from_cents(123_450)), "1.234,5");
        assert_eq!(format_amount(Money::from_cents(5)), "0,05");
    }

    #[test]
    fn test_format_currency_and_dates() {
        assert_eq!(format_currency(Money::from_units(48_900), "€"), "€ 48.900");
        let date = NaiveDate::from_ymd_opt(2025, 11, 2).unwrap();
        assert_eq!(format_date(date), "02.11.2025");
        assert_eq!(format_day_label(4, "Nov"), "4. Nov");
    }

    #[test]
    fn test_format_diff() {
        assert_eq!(format_diff(12.4), "+12.4%");
        assert_eq!(format_diff(-0.6), "-0.6%");
        assert_eq!(format_diff(3.0), "+3%");
    }
}
