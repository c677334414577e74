//! Ticket status lifecycle
//!
//! The status machine is linear: `OPEN -> IN_PROGRESS -> RESOLVED ->
//! CLOSED`, advancing by exactly one step per transition. Anything else
//! (skip, regression, self-transition, or any request from the terminal
//! state) is invalid. The rule is an adjacency comparison on the ordered
//! enum, not a transition table.
//!
//! Role eligibility for invoking a transition is enforced at the route
//! boundary via [`super::capability`]; this module is role-agnostic.

use shared::error::{AppError, AppResult, ErrorCode};
use shared::models::TicketStatus;

/// Validate a requested status transition
///
/// Succeeds only when `requested` is the immediate successor of
/// `current`. The denial message is stable and names the rejected pair.
pub fn validate_transition(current: TicketStatus, requested: TicketStatus) -> AppResult<()> {
    match current.next() {
        Some(next) if next == requested => Ok(()),
        _ => Err(AppError::with_message(
            ErrorCode::InvalidStatusTransition,
            format!("invalid status transition: {current} -> {requested}"),
        )
        .with_detail("from", current.as_str())
        .with_detail("to", requested.as_str())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use TicketStatus::*;

    #[test]
    fn test_only_adjacent_forward_steps_are_valid() {
        // Full 4x4 matrix: exactly the three forward edges pass.
        for current in TicketStatus::FLOW {
            for requested in TicketStatus::FLOW {
                let valid = current.next() == Some(requested);
                assert_eq!(
                    validate_transition(current, requested).is_ok(),
                    valid,
                    "{current} -> {requested}"
                );
            }
        }
    }

    #[test]
    fn test_from_open_only_in_progress_succeeds() {
        assert!(validate_transition(Open, InProgress).is_ok());
        assert!(validate_transition(Open, Resolved).is_err());
        assert!(validate_transition(Open, Closed).is_err());
        assert!(validate_transition(Open, Open).is_err());
    }

    #[test]
    fn test_closed_is_terminal() {
        for requested in TicketStatus::FLOW {
            assert!(validate_transition(Closed, requested).is_err());
        }
    }

    #[test]
    fn test_no_regression() {
        assert!(validate_transition(Resolved, InProgress).is_err());
        assert!(validate_transition(InProgress, Open).is_err());
    }

    #[test]
    fn test_denial_names_the_pair() {
        let err = validate_transition(InProgress, Closed).unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidStatusTransition);
        assert_eq!(
            err.message,
            "invalid status transition: IN_PROGRESS -> CLOSED"
        );

        let details = err.details.unwrap();
        assert_eq!(details.get("from").unwrap(), "IN_PROGRESS");
        assert_eq!(details.get("to").unwrap(), "CLOSED");
    }

    #[test]
    fn test_failure_is_stable_on_repeat() {
        let a = validate_transition(Open, Closed).unwrap_err();
        let b = validate_transition(Open, Closed).unwrap_err();
        assert_eq!(a.code, b.code);
        assert_eq!(a.message, b.message);
    }
}
