//! Priority Bounded Buffer Component
//!
//! The synchronization core of the crate: a capacity-bounded buffer shared
//! by any number of producer and consumer workers, dequeuing in priority
//! order rather than arrival order.
//!
//! # Overview
//!
//! - **Blocking, not failing**: a full buffer suspends producers and an
//!   empty buffer suspends consumers; neither condition is surfaced as an
//!   error.
//! - **Priority order**: consumers always receive the most urgent buffered
//!   item; ties are broken by creation time and then by admission order, so
//!   equal-priority items never reorder relative to each other.
//! - **Live statistics**: consistent snapshots of occupancy and cumulative
//!   counters, taken under the same exclusion as the mutating operations.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐     ┌──────────────┐     ┌──────────────┐
//! │  Producer 1  │     │  Producer 2  │     │  Producer N  │
//! └──────┬───────┘     └──────┬───────┘     └──────┬───────┘
//!        │ produce            │ produce            │ produce
//!        ▼                    ▼                    ▼
//! ┌─────────────────────────────────────────────────────────┐
//! │               PriorityBoundedBuffer                     │
//! │   empty-slot permits ──► ordered container ──► filled-  │
//! │   (capacity gate)        (mutex, priority     slot      │
//! │                           heap + counters)    permits   │
//! └────────┬────────────────────┬───────────────────┬───────┘
//!          │ consume            │ consume           │ consume
//! ┌────────┴─────┐     ┌────────┴─────┐     ┌───────┴──────┐
//! │  Consumer 1  │     │  Consumer 2  │     │  Consumer M  │
//! └──────────────┘     └──────────────┘     └──────────────┘
//! ```
//!
//! # Example
//!
//! ```rust,no_run
//! use prioflow::buffer::{Priority, PriorityBoundedBuffer, PriorityItem};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let buffer = PriorityBoundedBuffer::new(10)?;
//!
//! buffer
//!     .produce(PriorityItem::new(Priority::High, 0, "first".to_string()))
//!     .await;
//!
//! let item = buffer.consume().await;
//! println!("got {} ({})", item.payload, item.priority);
//! # Ok(())
//! # }
//! ```

pub mod api;
mod error;
mod internal;
mod item;
mod stats;

pub use error::{BufferError, BufferResult};
pub use internal::PriorityBoundedBuffer;
pub use item::{Priority, PriorityItem, MANUAL_ITEM_ID};
pub use stats::BufferStats;

#[cfg(test)]
mod tests;
