// Copyright (c) 2025 Mauka MCP Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Configuration for the Ala Trie.

use serde::{Deserialize, Serialize};

/// How `insert` hands its mutation to the shared graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WriteMode {
    /// The mutation is applied under the write lock before `insert` returns.
    #[default]
    Immediate,

    /// The mutation is queued and applied before the next operation that reads
    /// the graph, or as soon as the write lock is free.
    Deferred,
}

/// Configuration for the Ala Trie.
///
/// Controls how writes are scheduled against the shared node graph and how much
/// room is reserved for nodes up front.
#[derive(Debug, Clone)]
pub struct AlaTrieConfig {
    /// Scheduling used by `insert`
    write_mode: WriteMode,

    /// Number of node slots reserved at construction
    initial_capacity: usize,

    /// Queue length at which a deferred `insert` applies the queue itself
    max_pending_writes: usize,
}

impl AlaTrieConfig {
    /// Create a new default configuration.
    ///
    /// Default values:
    /// - write_mode: Immediate
    /// - initial_capacity: 64
    /// - max_pending_writes: 1,024
    pub fn new() -> Self {
        Self {
            write_mode: WriteMode::Immediate,
            initial_capacity: 64,
            max_pending_writes: 1_024,
        }
    }

    /// Set how `insert` schedules its mutation.
    pub fn with_write_mode(mut self, write_mode: WriteMode) -> Self {
        self.write_mode = write_mode;
        self
    }

    /// Reserve room for this many nodes when the trie is created.
    pub fn with_initial_capacity(mut self, initial_capacity: usize) -> Self {
        self.initial_capacity = initial_capacity;
        self
    }

    /// Set the deferred queue length that forces a synchronous drain.
    ///
    /// Only meaningful with [`WriteMode::Deferred`].
    pub fn with_max_pending_writes(mut self, max_pending_writes: usize) -> Self {
        if max_pending_writes == 0 {
            panic!("Maximum pending writes must be greater than 0");
        }
        self.max_pending_writes = max_pending_writes;
        self
    }

    /// Get the write mode
    pub fn get_write_mode(&self) -> WriteMode {
        self.write_mode
    }

    /// Get the initial node capacity
    pub fn get_initial_capacity(&self) -> usize {
        self.initial_capacity
    }

    /// Get the deferred queue limit
    pub fn get_max_pending_writes(&self) -> usize {
        self.max_pending_writes
    }
}

impl Default for AlaTrieConfig {
    fn default() -> Self {
        Self::new()
    }
}
