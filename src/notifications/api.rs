//! Public API for the notification system
//!
//! External modules should import from here rather than directly from the
//! internal modules. There is no global service: the manager instance lives
//! inside whatever component publishes events (the controller, in this
//! crate) and observers reach it through that owner.

pub use crate::notifications::error::{NotificationError, NotificationResult};
pub use crate::notifications::event::{
    BufferEvent, Event, EventFilter, SessionEvent, SessionEventType,
};
pub use crate::notifications::manager::NotificationManager;
