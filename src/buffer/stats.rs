//! Point-in-time buffer statistics
//!
//! Snapshots are plain data: the core hands them to whatever transport the
//! host application uses (the reference front end streams them as JSON).

use crate::buffer::item::Priority;
use serde::Serialize;
use std::collections::BTreeMap;

/// Consistent snapshot of the buffer's occupancy and cumulative counters.
///
/// `produced_by_priority` counts successful produces per priority level; it
/// is cumulative, never a live gauge, and never decreases.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BufferStats {
    pub size: usize,
    pub max_size: usize,
    pub total_produced: u64,
    pub total_consumed: u64,
    pub produced_by_priority: BTreeMap<Priority, u64>,
}

impl BufferStats {
    /// Sum of the per-priority production counters.
    ///
    /// Always equals `total_produced`; exposed so callers can verify the
    /// partition without re-deriving it.
    pub fn produced_sum(&self) -> u64 {
        self.produced_by_priority.values().sum()
    }
}
