//! Dashboard Errors
//!
//! Errors only arise at input boundaries: form fields, select values and
//! startup configuration. Drag-drop no-ops are not errors.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DashboardError {
    #[error("invalid amount {0:?}")]
    InvalidAmount(String),
    #[error("amount must not be negative: {0:?}")]
    NegativeAmount(String),
    #[error("invalid date {0:?}, expected YYYY-MM-DD")]
    InvalidDate(String),
    #[error("unknown {kind} {value:?}")]
    UnknownVariant { kind: &'static str, value: String },
    #[error("config error: {0}")]
    Config(String),
}

impl DashboardError {
    pub fn unknown(kind: &'static str, value: &str) -> Self {
        DashboardError::UnknownVariant {
            kind,
            value: value.to_string(),
        }
    }
}

pub type DashboardResult<T> = Result<T, DashboardError>;
