//! Producer worker: synthesizes items and pushes them into the shared buffer

use crate::buffer::{PriorityBoundedBuffer, PriorityItem};
use crate::worker::idle_delay;
use crate::worker::policy::PriorityPolicy;
use std::ops::RangeInclusive;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;
use tokio::task::JoinHandle;

/// Per-producer tuning.
#[derive(Debug, Clone)]
pub struct ProducerConfig {
    /// Item budget; the producer finishes once it has produced this many.
    pub item_budget: u64,
    /// Idle delay between cycles, drawn uniformly from this range (ms).
    pub delay_ms: RangeInclusive<u64>,
}

impl Default for ProducerConfig {
    fn default() -> Self {
        Self {
            item_budget: 20,
            delay_ms: 100..=500,
        }
    }
}

/// Owning handle for a spawned producer task.
///
/// The producer runs until its item budget is exhausted (Finished) or a
/// stop request is observed at a cycle boundary (Stopped). A producer
/// parked inside `produce` completes that insert before honoring the stop.
pub struct ProducerHandle {
    id: usize,
    stop: Arc<AtomicBool>,
    produced: Arc<AtomicU64>,
    task: JoinHandle<()>,
}

impl ProducerHandle {
    /// Launch a producer task against the shared buffer.
    ///
    /// Must be called from within a tokio runtime.
    pub fn spawn(
        id: usize,
        buffer: Arc<PriorityBoundedBuffer>,
        config: ProducerConfig,
        policy: Box<dyn PriorityPolicy>,
    ) -> Self {
        let stop = Arc::new(AtomicBool::new(false));
        let produced = Arc::new(AtomicU64::new(0));
        let task = tokio::spawn(run(
            id,
            buffer,
            config,
            policy,
            Arc::clone(&stop),
            Arc::clone(&produced),
        ));
        Self {
            id,
            stop,
            produced,
            task,
        }
    }

    pub fn id(&self) -> usize {
        self.id
    }

    /// Items pushed so far. Plain atomic read; no buffer lock involved.
    pub fn items_produced(&self) -> u64 {
        self.produced.load(Ordering::Acquire)
    }

    /// Whether the worker task is still running.
    pub fn is_running(&self) -> bool {
        !self.task.is_finished()
    }

    /// Request cessation. Idempotent and asynchronous: the producer exits
    /// at its next cycle boundary; this call does not wait for it.
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
    config: ProducerConfig,
    mut policy: Box<dyn PriorityPolicy>,
    stop: Arc<AtomicBool>,
    produced: Arc<AtomicU64>,
) {
    let mut count: u64 = 0;
    while !stop.load(Ordering::Acquire) && count < config.item_budget {
        let priority = policy.next_priority();
        let item = PriorityItem::new(priority, count as i64, format!("producer-{id}-item-{count}"));
        log::debug!("producer {id}: producing {} ({priority})", item.payload);

        buffer.produce(item).await;
        count += 1;
        produced.store(count, Ordering::Release);

        idle_delay(&config.delay_ms).await;
    }

    if count >= config.item_budget {
        log::info!("producer {id}: finished after {count} items");
    } else {
        log::info!("producer {id}: stopped after {count} items");
    }
}
