//! Priority levels and the items that flow through the buffer
//!
//! Items are immutable once constructed. The ordering relation used for
//! queue placement is priority first (most urgent wins), creation time
//! second (FIFO within a priority level); the buffer adds a monotonic
//! admission sequence as the final tiebreaker so the order stays total
//! even for identical timestamps.

use serde::{Deserialize, Serialize};
use std::time::SystemTime;
use strum_macros::{Display, EnumIter, EnumString};

/// Sentinel id carried by manually injected items (see
/// [`SystemController::add_item`](crate::controller::SystemController::add_item)).
/// Producer-generated items always carry non-negative ids.
pub const MANUAL_ITEM_ID: i64 = -1;

/// Urgency classes for buffered items, ordered from most to least urgent.
///
/// The numeric rank (CRITICAL=1 .. LOW=4) matches the representation the
/// front end uses; a lower rank is served first. The set is closed: adding
/// a level means updating [`Priority::ALL`].
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
)]
#[serde(rename_all = "UPPERCASE")]
#[strum(serialize_all = "UPPERCASE")]
pub enum Priority {
    Critical = 1,
    High = 2,
    Medium = 3,
    Low = 4,
}

impl Priority {
    /// All priorities in urgency order (most urgent first).
    pub const ALL: [Priority; 4] = [
        Priority::Critical,
        Priority::High,
        Priority::Medium,
        Priority::Low,
    ];

    /// Numeric rank; lower means served first.
    pub const fn rank(self) -> u8 {
        self as u8
    }
}

/// One unit of work.
///
/// `created_at` defaults to construction time; use
/// [`PriorityItem::with_created_at`] to supply an explicit timestamp.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PriorityItem {
    pub priority: Priority,
    pub id: i64,
    pub payload: String,
    pub created_at: SystemTime,
}

impl PriorityItem {
    pub fn new(priority: Priority, id: i64, payload: String) -> Self {
        Self::with_created_at(priority, id, payload, SystemTime::now())
    }

    pub fn with_created_at(
        priority: Priority,
        id: i64,
        payload: String,
        created_at: SystemTime,
    ) -> Self {
        Self {
            priority,
            id,
            payload,
            created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_priority_rank_order() {
        assert_eq!(Priority::Critical.rank(), 1);
        assert_eq!(Priority::High.rank(), 2);
        assert_eq!(Priority::Medium.rank(), 3);
        assert_eq!(Priority::Low.rank(), 4);
        assert!(Priority::Critical < Priority::High);
        assert!(Priority::High < Priority::Medium);
        assert!(Priority::Medium < Priority::Low);
    }

    #[test]
    fn test_priority_all_is_urgency_ordered() {
        let mut sorted = Priority::ALL;
        sorted.sort();
        assert_eq!(sorted, Priority::ALL);
        assert_eq!(Priority::ALL.len(), 4);
    }

    #[test]
    fn test_priority_name_round_trip() {
        for priority in Priority::ALL {
            let name = priority.to_string();
            assert_eq!(Priority::from_str(&name).unwrap(), priority);
        }
        assert_eq!(Priority::from_str("CRITICAL").unwrap(), Priority::Critical);
        assert!(Priority::from_str("URGENT").is_err());
        // Names are case-sensitive, matching the fixed enumeration.
        assert!(Priority::from_str("critical").is_err());
    }

    #[test]
    fn test_item_created_at_defaults_to_now() {
        let before = SystemTime::now();
        let item = PriorityItem::new(Priority::Medium, 7, "payload".to_string());
        let after = SystemTime::now();

        assert!(item.created_at >= before);
        assert!(item.created_at <= after);
        assert_eq!(item.id, 7);
        assert_eq!(item.payload, "payload");
    }
}
