//! Core PriorityBoundedBuffer implementation
//!
//! Capacity accounting and container mutation are two separate concerns,
//! composed so they cannot deadlock each other:
//!
//! - Admission is governed by a pair of counting semaphores (`empty_slots`
//!   starts at capacity, `filled_slots` at zero). A producer acquires an
//!   empty-slot permit *before* touching the container and releases a
//!   filled-slot permit after the insert; a consumer mirrors this. Permit
//!   waits never happen while the container lock is held.
//! - The ordered container and its counters live behind one mutex with
//!   short, await-free critical sections, so produce, consume and stats
//!   snapshots never observe a torn state.
//!
//! Each released permit wakes at most one parked worker, so exactly one
//! consumer wins each inserted item and exactly one producer wins each
//! freed slot.

use crate::buffer::error::{BufferError, BufferResult};
use crate::buffer::item::{Priority, PriorityItem};
use crate::buffer::stats::BufferStats;
use std::cmp::{Ordering, Reverse};
use std::collections::{BTreeMap, BinaryHeap};
use std::sync::Mutex;
use tokio::sync::Semaphore;

/// Container entry pairing an item with its admission sequence.
///
/// The sequence is assigned under the container lock and is strictly
/// monotonic, which keeps the ordering total and stable when two items of
/// equal priority carry identical creation timestamps.
#[derive(Debug)]
struct BufferEntry {
    item: PriorityItem,
    seq: u64,
}

impl PartialEq for BufferEntry {
    fn eq(&self, other: &Self) -> bool {
        self.seq == other.seq
    }
}

impl Eq for BufferEntry {}

impl PartialOrd for BufferEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for BufferEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        self.item
            .priority
            .cmp(&other.item.priority)
            .then_with(|| self.item.created_at.cmp(&other.item.created_at))
            .then_with(|| self.seq.cmp(&other.seq))
    }
}

/// Container plus counters, guarded by a single mutex.
#[derive(Debug)]
struct BufferState {
    heap: BinaryHeap<Reverse<BufferEntry>>,
    next_seq: u64,
    total_produced: u64,
    total_consumed: u64,
    produced_by_priority: BTreeMap<Priority, u64>,
}

/// Capacity-bounded buffer that dequeues in priority order.
///
/// Shared between any number of producers and consumers via `Arc`. A full
/// buffer suspends producers and an empty buffer suspends consumers; neither
/// condition is an error. See the module docs for the synchronization
/// discipline.
#[derive(Debug)]
pub struct PriorityBoundedBuffer {
    max_size: usize,
    empty_slots: Semaphore,
    filled_slots: Semaphore,
    state: Mutex<BufferState>,
}

impl PriorityBoundedBuffer {
    /// Create a buffer holding at most `max_size` items.
    ///
    /// A zero capacity is an invalid configuration, rejected here rather
    /// than at call time.
    pub fn new(max_size: usize) -> BufferResult<Self> {
        if max_size == 0 || max_size > Semaphore::MAX_PERMITS {
            return Err(BufferError::InvalidCapacity { capacity: max_size });
        }

        Ok(Self {
            max_size,
            empty_slots: Semaphore::new(max_size),
            filled_slots: Semaphore::new(0),
            state: Mutex::new(BufferState {
                heap: BinaryHeap::with_capacity(max_size),
                next_seq: 1,
                total_produced: 0,
                total_consumed: 0,
                produced_by_priority: Priority::ALL.iter().map(|p| (*p, 0)).collect(),
            }),
        })
    }

    /// Configured capacity.
    pub fn max_size(&self) -> usize {
        self.max_size
    }

    /// Number of items currently buffered.
    pub fn size(&self) -> usize {
        self.state.lock().unwrap().heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.size() == 0
    }

    /// Insert `item`, waiting for a free slot while the buffer is full.
    ///
    /// On return the item is visible to consumers and exactly one parked
    /// consumer (if any) has been woken. Cancelling the returned future
    /// while it waits for capacity leaves the buffer unchanged.
    pub async fn produce(&self, item: PriorityItem) {
        let permit = self
            .empty_slots
            .acquire()
            .await
            .expect("empty-slot semaphore closed");
        // Ownership of the slot transfers to the buffered item; the permit
        // is handed back to the pool by `consume`.
        permit.forget();

        {
            let mut state = self.state.lock().unwrap();
            let seq = state.next_seq;
            state.next_seq += 1;
            state.total_produced += 1;
            *state.produced_by_priority.entry(item.priority).or_insert(0) += 1;
            state.heap.push(Reverse(BufferEntry { item, seq }));
        }

        self.filled_slots.add_permits(1);
    }

    /// Remove and return the most urgent item, waiting while the buffer is
    /// empty.
    ///
    /// Ties between equal-priority items are broken by earliest creation
    /// time, then admission order. Exactly one parked producer (if any) is
    /// woken per removed item.
    pub async fn consume(&self) -> PriorityItem {
        let permit = self
            .filled_slots
            .acquire()
            .await
            .expect("filled-slot semaphore closed");
        permit.forget();

        let item = {
            let mut state = self.state.lock().unwrap();
            state.total_consumed += 1;
            let Reverse(entry) = state
                .heap
                .pop()
                .expect("filled-slot permit issued without a buffered item");
            entry.item
        };

        self.empty_slots.add_permits(1);
        item
    }

    /// Point-in-time consistent statistics snapshot.
    ///
    /// Taken under the same exclusion as produce/consume, so the size is
    /// always within `[0, max_size]` and `total_produced - total_consumed`
    /// always equals the size.
    pub fn stats(&self) -> BufferStats {
        let state = self.state.lock().unwrap();
        BufferStats {
            size: state.heap.len(),
            max_size: self.max_size,
            total_produced: state.total_produced,
            total_consumed: state.total_consumed,
            produced_by_priority: state.produced_by_priority.clone(),
        }
    }
}
