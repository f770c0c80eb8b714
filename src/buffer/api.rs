//! Public API for the buffer component
//!
//! External modules should import from here rather than from the internal
//! modules directly.

pub use crate::buffer::error::{BufferError, BufferResult};
pub use crate::buffer::internal::PriorityBoundedBuffer;
pub use crate::buffer::item::{Priority, PriorityItem, MANUAL_ITEM_ID};
pub use crate::buffer::stats::BufferStats;
