//! Consumer worker: pulls items from the shared buffer in priority order

use crate::buffer::PriorityBoundedBuffer;
use crate::worker::idle_delay;
use std::ops::RangeInclusive;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;
use tokio::task::JoinHandle;

/// Per-consumer tuning.
#[derive(Debug, Clone)]
pub struct ConsumerConfig {
    /// Simulated processing delay per item, drawn uniformly from this
    /// range (ms).
    pub process_ms: RangeInclusive<u64>,
}

impl Default for ConsumerConfig {
    fn default() -> Self {
        Self {
            process_ms: 100..=300,
        }
    }
}

/// Owning handle for a spawned consumer task.
///
/// Consumers are long-running: they have no item budget and terminate only
/// via [`ConsumerHandle::stop`].
pub struct ConsumerHandle {
    id: usize,
    stop: Arc<AtomicBool>,
    consumed: Arc<AtomicU64>,
    task: JoinHandle<()>,
}

impl ConsumerHandle {
    /// Launch a consumer task against the shared buffer.
    ///
    /// Must be called from within a tokio runtime.
    pub fn spawn(id: usize, buffer: Arc<PriorityBoundedBuffer>, config: ConsumerConfig) -> Self {
        let stop = Arc::new(AtomicBool::new(false));
        let consumed = Arc::new(AtomicU64::new(0));
        let task = tokio::spawn(run(
            id,
            buffer,
            config,
            Arc::clone(&stop),
            Arc::clone(&consumed),
        ));
        Self {
            id,
            stop,
            consumed,
            task,
        }
    }

    pub fn id(&self) -> usize {
        self.id
    }

    /// Items processed so far. Plain atomic read; no buffer lock involved.
    pub fn items_consumed(&self) -> u64 {
        self.consumed.load(Ordering::Acquire)
    }

    /// Whether the worker task is still running.
    pub fn is_running(&self) -> bool {
        !self.task.is_finished()
    }

    /// Request cessation after the in-flight `consume` returns. Idempotent
    /// and asynchronous.
    ///
    /// Known liveness gap: a consumer parked on an empty buffer stays
    /// parked until another item arrives, so it will not observe the stop
    /// request until then. Dropping the runtime cancels parked consumers
    /// outright.
    pub fn stop(&self) {
        self.stop.store(true, Ordering::Release);
    }

    /// Wait for the worker task to exit.
    pub async fn join(self) {
        let _ = self.task.await;
    }
}

async fn run(
    id: usize,
    buffer: Arc<PriorityBoundedBuffer>,
    config: ConsumerConfig,
    stop: Arc<AtomicBool>,
    consumed: Arc<AtomicU64>,
) {
    let mut count: u64 = 0;
    while !stop.load(Ordering::Acquire) {
        let item = buffer.consume().await;
        count += 1;
        consumed.store(count, Ordering::Release);

        let waited = item.created_at.elapsed().unwrap_or_default();
        log::debug!(
            "consumer {id}: processing {} ({}, waited {:.0?})",
            item.payload,
            item.priority,
            waited
        );

        idle_delay(&config.process_ms).await;
        log::debug!("consumer {id}: finished {}", item.payload);
    }

    log::info!("consumer {id}: stopped after {count} items");
}
