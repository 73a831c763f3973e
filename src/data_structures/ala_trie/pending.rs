// Copyright (c) 2025 Mauka MCP Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! FIFO queue of writes submitted in deferred mode.

use std::collections::VecDeque;
use std::hash::Hash;

use parking_lot::Mutex;

use super::graph::NodeGraph;

/// One queued insertion.
#[derive(Debug)]
pub(crate) struct PendingWrite<T, V> {
    pub(crate) sequence: Vec<T>,
    pub(crate) value: Option<V>,
}

impl<T, V> PendingWrite<T, V>
where
    T: Eq + Hash + Clone,
{
    /// Applies the insertion to `graph`, returning `true` if a new sequence was stored.
    pub(crate) fn apply(self, graph: &mut NodeGraph<T, V>) -> bool {
        let end = graph.extend_path(self.sequence);
        graph.mark_end(end, self.value)
    }
}

/// Writes waiting to be applied, in submission order.
///
/// The order in which writes enter this queue is the order in which they reach
/// the graph.
#[derive(Debug)]
pub(crate) struct PendingWrites<T, V> {
    queue: Mutex<VecDeque<PendingWrite<T, V>>>,
}

impl<T, V> PendingWrites<T, V> {
    pub(crate) fn new() -> Self {
        Self {
            queue: Mutex::new(VecDeque::new()),
        }
    }

    /// Appends a write and returns the queue length afterwards.
    pub(crate) fn push(&self, write: PendingWrite<T, V>) -> usize {
        let mut queue = self.queue.lock();
        queue.push_back(write);
        queue.len()
    }

    pub(crate) fn len(&self) -> usize {
        self.queue.lock().len()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.queue.lock().is_empty()
    }

    /// Removes and returns every queued write.
    ///
    /// Callers must hold the graph's write lock so that batches taken by
    /// different threads are applied in the order they were taken.
    pub(crate) fn take(&self) -> VecDeque<PendingWrite<T, V>> {
        std::mem::take(&mut *self.queue.lock())
    }
}
