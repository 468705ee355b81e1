//! Order status and the legal transition table

use serde::{Deserialize, Serialize};
use std::fmt;

/// Order status
///
/// Lifecycle: OPEN → SENT_TO_KITCHEN → SERVED → PAID, with CANCELLED
/// reachable from OPEN and SENT_TO_KITCHEN. PAID and CANCELLED are
/// terminal.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatus {
    #[default]
    Open,
    SentToKitchen,
    Served,
    Paid,
    Cancelled,
}

impl OrderStatus {
    /// Allowed transition targets from this status
    pub fn allowed_targets(self) -> &'static [OrderStatus] {
        match self {
            Self::Open => &[Self::SentToKitchen, Self::Cancelled],
            Self::SentToKitchen => &[Self::Served, Self::Cancelled],
            Self::Served => &[Self::Paid],
            Self::Paid | Self::Cancelled => &[],
        }
    }

    /// Whether a transition to `next` is legal
    pub fn can_transition_to(self, next: OrderStatus) -> bool {
        self.allowed_targets().contains(&next)
    }

    /// Whether this status ends the order lifecycle
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Paid | Self::Cancelled)
    }

    /// Wire/display name, matching the serde representation
    pub fn name(&self) -> &'static str {
        match self {
            Self::Open => "OPEN",
            Self::SentToKitchen => "SENT_TO_KITCHEN",
            Self::Served => "SERVED",
            Self::Paid => "PAID",
            Self::Cancelled => "CANCELLED",
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transition_table() {
        use OrderStatus::*;
        assert!(Open.can_transition_to(SentToKitchen));
        assert!(Open.can_transition_to(Cancelled));
        assert!(!Open.can_transition_to(Paid));
        assert!(!Open.can_transition_to(Served));

        assert!(SentToKitchen.can_transition_to(Served));
        assert!(SentToKitchen.can_transition_to(Cancelled));
        assert!(!SentToKitchen.can_transition_to(Paid));

        assert!(Served.can_transition_to(Paid));
        assert!(!Served.can_transition_to(Cancelled));
    }

    #[test]
    fn test_terminal_states_have_no_targets() {
        assert!(OrderStatus::Paid.allowed_targets().is_empty());
        assert!(OrderStatus::Cancelled.allowed_targets().is_empty());
        assert!(OrderStatus::Paid.is_terminal());
        assert!(OrderStatus::Cancelled.is_terminal());
        assert!(!OrderStatus::Open.is_terminal());
    }

    #[test]
    fn test_serde_names() {
        let json = serde_json::to_string(&OrderStatus::SentToKitchen).unwrap();
        assert_eq!(json, "\"SENT_TO_KITCHEN\"");
    }
}
