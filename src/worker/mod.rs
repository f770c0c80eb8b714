//! Producer and Consumer Workers
//!
//! Workers are plain data plus a run function executed on a tokio task; a
//! handle owns the task, a cooperative stop flag and the counters the
//! controller reads for liveness reporting. Handles never touch the
//! buffer's internal exclusion: counters are simple atomics, liveness is
//! the task's completion state.
//!
//! Stopping is cooperative and asynchronous: `stop()` requests cessation
//! and returns immediately; the worker observes the flag at its next cycle
//! boundary, never mid-call.
//!
//! Failures are isolated per worker: a panic inside a run loop is contained
//! by its task boundary and surfaces as that worker going inactive. Other
//! workers and the session keep running.

mod consumer;
mod policy;
mod producer;

pub use consumer::{ConsumerConfig, ConsumerHandle};
pub use policy::{FixedPolicy, PriorityPolicy, UniformPolicy};
pub use producer::{ProducerConfig, ProducerHandle};

use rand::Rng;
use std::ops::RangeInclusive;
use std::time::Duration;

/// Sleep for a random number of milliseconds drawn from `delay_ms`.
///
/// The RNG handle is dropped before awaiting so worker futures stay `Send`.
pub(crate) async fn idle_delay(delay_ms: &RangeInclusive<u64>) {
    let millis = {
        let mut rng = rand::thread_rng();
        rng.gen_range(delay_ms.clone())
    };
    if millis > 0 {
        tokio::time::sleep(Duration::from_millis(millis)).await;
    }
}
