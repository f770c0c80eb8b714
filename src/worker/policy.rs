//! Priority generation policies for producers

use crate::buffer::Priority;
use rand::Rng;

/// Chooses the priority of each item a producer synthesizes.
///
/// A policy instance is owned by a single producer task, so implementations
/// may carry mutable state without synchronization.
pub trait PriorityPolicy: Send {
    fn next_priority(&mut self) -> Priority;
}

/// Default policy: uniformly random over the fixed enumeration.
#[derive(Debug, Default)]
pub struct UniformPolicy;

impl PriorityPolicy for UniformPolicy {
    fn next_priority(&mut self) -> Priority {
        let idx = rand::thread_rng().gen_range(0..Priority::ALL.len());
        Priority::ALL[idx]
    }
}

/// Emits a single priority; deterministic workloads and tests.
#[derive(Debug, Clone, Copy)]
pub struct FixedPolicy(pub Priority);

impl PriorityPolicy for FixedPolicy {
    fn next_priority(&mut self) -> Priority {
        self.0
    }
}
