//! List-query normalization
//!
//! Pagination parameters arrive as raw query strings. Anything
//! non-numeric or non-positive silently falls back to the defaults
//! instead of failing the request; the optional status/priority filters
//! are strict enum values.

use serde::Deserialize;
use shared::models::{TicketPriority, TicketStatus};

pub const DEFAULT_PAGE: i64 = 1;
pub const DEFAULT_PAGE_SIZE: i64 = 10;

/// Raw query-string parameters for ticket listing
#[derive(Debug, Default, Deserialize)]
pub struct TicketListParams {
    pub page: Option<String>,
    pub limit: Option<String>,
    pub status: Option<TicketStatus>,
    pub priority: Option<TicketPriority>,
}

/// Normalized ticket list query
#[derive(Debug, Clone, PartialEq)]
pub struct TicketListQuery {
    pub page: i64,
    pub page_size: i64,
    pub status: Option<TicketStatus>,
    pub priority: Option<TicketPriority>,
}

impl Default for TicketListQuery {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            page_size: DEFAULT_PAGE_SIZE,
            status: None,
            priority: None,
        }
    }
}

impl TicketListParams {
    /// Coerce raw parameters into a valid query
    pub fn normalize(self) -> TicketListQuery {
        TicketListQuery {
            page: coerce_positive(self.page.as_deref(), DEFAULT_PAGE),
            page_size: coerce_positive(self.limit.as_deref(), DEFAULT_PAGE_SIZE),
            status: self.status,
            priority: self.priority,
        }
    }
}

impl TicketListQuery {
    /// Row offset for the requested page
    pub fn offset(&self) -> i64 {
        (self.page - 1) * self.page_size
    }
}

fn coerce_positive(raw: Option<&str>, default: i64) -> i64 {
    raw.and_then(|s| s.trim().parse::<i64>().ok())
        .filter(|v| *v > 0)
        .unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(page: Option<&str>, limit: Option<&str>) -> TicketListParams {
        TicketListParams {
            page: page.map(String::from),
            limit: limit.map(String::from),
            status: None,
            priority: None,
        }
    }

    #[test]
    fn test_defaults_when_absent() {
        let q = params(None, None).normalize();
        assert_eq!(q.page, 1);
        assert_eq!(q.page_size, 10);
        assert_eq!(q.offset(), 0);
    }

    #[test]
    fn test_valid_values_pass_through() {
        let q = params(Some("3"), Some("25")).normalize();
        assert_eq!(q.page, 3);
        assert_eq!(q.page_size, 25);
        assert_eq!(q.offset(), 50);
    }

    #[test]
    fn test_non_numeric_input_coerces_to_default() {
        let q = params(Some("banana"), Some("1e3")).normalize();
        assert_eq!(q.page, 1);
        assert_eq!(q.page_size, 10);
    }

    #[test]
    fn test_non_positive_input_coerces_to_default() {
        let q = params(Some("0"), Some("-5")).normalize();
        assert_eq!(q.page, 1);
        assert_eq!(q.page_size, 10);
    }

    #[test]
    fn test_filters_are_preserved() {
        let q = TicketListParams {
            page: None,
            limit: None,
            status: Some(TicketStatus::Open),
            priority: Some(TicketPriority::High),
        }
        .normalize();
        assert_eq!(q.status, Some(TicketStatus::Open));
        assert_eq!(q.priority, Some(TicketPriority::High));
    }
}
