//! Session Controller Component
//!
//! One [`SystemController`] instance coordinates one session at a time: it
//! owns the shared buffer and the producer/consumer worker sets, and
//! exposes the start/stop/add-item/status operations consumed by the host
//! application's external interface.

mod config;
mod error;
mod system;

pub use config::SessionConfig;
pub use error::{ControlError, ControlResult};
pub use system::{SystemController, SystemStatus};
