// Copyright (c) 2025 Mauka MCP Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Ala Trie Implementation
//!
//! A generic prefix tree over any hashable element type, shared between threads
//! behind a single-writer/multiple-reader lock.
//!
//! # Key Features
//!
//! * Exact and prefix membership for sequences of arbitrary elements
//! * Stored sequences rebuilt from parent links, no per-node key copies
//! * Lazy depth-first enumeration of everything stored
//! * Optional deferred (fire-and-forget) writes with FIFO ordering
//!
//! # Concurrency Safety
//!
//! All nodes live in one arena guarded by a `parking_lot::RwLock`:
//!
//! * **Writes** take the write lock, so no read or other write overlaps them.
//! * **Reads** share the read lock and never observe a half-linked node, since a
//!   node is pushed into the arena before its parent's child map refers to it.
//! * **Deferred writes** are queued in submission order and drained under the
//!   write lock by the next reader, which then downgrades to a read guard
//!   without letting another writer in.
//!
//! # Example
//!
//! ```
//! use ala_trie::data_structures::ala_trie::AlaTrie;
//!
//! let trie = AlaTrie::<char>::new();
//! trie.insert_str("cat");
//! trie.insert_str("car");
//! trie.insert_str("dog");
//!
//! assert!(!trie.contains_str("ca"));
//! assert!(trie.contains_prefix_str("ca"));
//! assert!(trie.contains_str("cat"));
//! assert_eq!(trie.count(), 3);
//! ```

mod config;
mod graph;
mod iter;
mod node;
mod pending;

use std::borrow::Borrow;
use std::hash::Hash;

use parking_lot::{RwLock, RwLockReadGuard, RwLockWriteGuard};
use tracing::{debug, trace};

pub use config::{AlaTrieConfig, WriteMode};
pub use iter::Sequences;

use crate::config::trie::TrieSettings;
use crate::config::ConfigResult;
use graph::NodeGraph;
use node::NodeId;
use pending::{PendingWrite, PendingWrites};

/// Ala Trie is a thread-safe prefix tree indexing sequences of hashable elements.
///
/// # Type Parameters
///
/// * `T` - Element type of the stored sequences. Must implement `Eq`, `Hash` and `Clone`.
/// * `V` - Optional payload attached to terminal nodes. Defaults to `()`.
#[derive(Debug)]
pub struct AlaTrie<T, V = ()> {
    /// Arena holding every node, root at index 0
    graph: RwLock<NodeGraph<T, V>>,

    /// Writes submitted in deferred mode but not yet applied
    pending: PendingWrites<T, V>,

    /// Configuration options
    config: AlaTrieConfig,
}

impl<T, V> AlaTrie<T, V>
where
    T: Eq + Hash + Clone,
{
    /// Creates a new empty `AlaTrie` with default configuration.
    pub fn new() -> Self {
        Self::with_config(AlaTrieConfig::default())
    }

    /// Creates a new empty `AlaTrie` with the specified configuration.
    ///
    /// # Arguments
    ///
    /// * `config` - Configuration for the trie.
    pub fn with_config(config: AlaTrieConfig) -> Self {
        debug!(
            write_mode = ?config.get_write_mode(),
            initial_capacity = config.get_initial_capacity(),
            "creating trie"
        );

        Self {
            graph: RwLock::new(NodeGraph::with_capacity(config.get_initial_capacity())),
            pending: PendingWrites::new(),
            config,
        }
    }

    /// Creates a new empty `AlaTrie` from loaded configuration settings.
    ///
    /// # Returns
    ///
    /// * `Ok(AlaTrie)` - The settings were valid.
    /// * `Err(ConfigError)` - The settings failed validation.
    pub fn from_settings(settings: &TrieSettings) -> ConfigResult<Self> {
        AlaTrieConfig::try_from(settings).map(Self::with_config)
    }

    /// Returns the configuration this trie was built with.
    pub fn config(&self) -> &AlaTrieConfig {
        &self.config
    }

    /// Inserts a sequence into the trie.
    ///
    /// Inserting a sequence that is already stored changes nothing. The empty
    /// sequence marks the root itself as terminal. In deferred mode the call may
    /// return before the mutation is applied; every operation started afterwards
    /// still observes it.
    pub fn insert<I>(&self, sequence: I)
    where
        I: IntoIterator<Item = T>,
    {
        self.submit(sequence, None);
    }

    /// Inserts a sequence and attaches `value` to its terminal node.
    ///
    /// Re-inserting the same sequence with a value replaces the earlier one.
    pub fn insert_with_value<I>(&self, sequence: I, value: V)
    where
        I: IntoIterator<Item = T>,
    {
        self.submit(sequence, Some(value));
    }

    fn submit<I>(&self, sequence: I, value: Option<V>)
    where
        I: IntoIterator<Item = T>,
    {
        match self.config.get_write_mode() {
            WriteMode::Immediate => {
                let mut graph = self.graph.write();
                let end = graph.extend_path(sequence);
                let is_new = graph.mark_end(end, value);
                trace!(is_new, nodes = graph.node_count(), "insert applied");
            }
            WriteMode::Deferred => {
                let queued = self.pending.push(PendingWrite {
                    sequence: sequence.into_iter().collect(),
                    value,
                });

                if queued >= self.config.get_max_pending_writes() {
                    debug!(queued, "deferred queue at limit, draining synchronously");
                    let mut graph = self.graph.write();
                    self.drain(&mut graph);
                } else if let Some(mut graph) = self.graph.try_write() {
                    self.drain(&mut graph);
                }
            }
        }
    }

    /// Applies every queued write. The caller holds the write lock.
    fn drain(&self, graph: &mut NodeGraph<T, V>) {
        let batch = self.pending.take();
        if batch.is_empty() {
            return;
        }

        let applied = batch.len();
        let stored = batch
            .into_iter()
            .map(|write| write.apply(graph))
            .filter(|is_new| *is_new)
            .count();
        trace!(applied, stored, nodes = graph.node_count(), "deferred writes applied");
    }

    /// Takes the read side of the lock after applying any deferred writes.
    pub(crate) fn read_graph(&self) -> RwLockReadGuard<'_, NodeGraph<T, V>> {
        if !self.pending.is_empty() {
            let mut graph = self.graph.write();
            self.drain(&mut graph);
            return RwLockWriteGuard::downgrade(graph);
        }

        self.graph.read()
    }

    /// Applies all deferred writes now. Does nothing in immediate mode.
    pub fn flush(&self) {
        if !self.pending.is_empty() {
            let mut graph = self.graph.write();
            self.drain(&mut graph);
        }
    }

    /// Number of deferred writes not yet applied to the graph.
    pub fn pending_writes(&self) -> usize {
        self.pending.len()
    }

    /// Checks whether `sequence` itself was inserted.
    ///
    /// Query elements may be owned or borrowed, so both `"cat".chars()` and
    /// `&[1, 2, 3]` work.
    pub fn contains<I>(&self, sequence: I) -> bool
    where
        I: IntoIterator,
        I::Item: Borrow<T>,
    {
        let graph = self.read_graph();
        graph
            .walk(sequence)
            .is_some_and(|id| graph.node(id).is_end)
    }

    /// Checks whether some inserted sequence starts with `prefix`.
    ///
    /// The empty prefix is always present, even in an empty trie.
    pub fn contains_prefix<I>(&self, prefix: I) -> bool
    where
        I: IntoIterator,
        I::Item: Borrow<T>,
    {
        self.read_graph().walk(prefix).is_some()
    }

    /// Returns an iterator over every stored sequence.
    ///
    /// Order is unspecified. Each call starts a fresh walk. The lock is only
    /// held inside each `next`, so the trie may be read or written while the
    /// iterator is alive.
    pub fn iter(&self) -> Sequences<'_, T, V> {
        Sequences::new(self, Some(NodeId::ROOT))
    }

    /// Returns an iterator over every stored sequence starting with `prefix`.
    ///
    /// Yielded sequences include the prefix.
    pub fn iter_prefix<I>(&self, prefix: I) -> Sequences<'_, T, V>
    where
        I: IntoIterator,
        I::Item: Borrow<T>,
    {
        let start = self.read_graph().walk(prefix);
        Sequences::new(self, start)
    }

    /// Returns the number of distinct stored sequences.
    ///
    /// This walks the entire trie, so it's an O(n) operation.
    pub fn count(&self) -> usize {
        self.read_graph().count_terminals(NodeId::ROOT)
    }

    /// Checks if nothing has been stored, not even the empty sequence.
    pub fn is_empty(&self) -> bool {
        self.count() == 0
    }

    /// Returns the number of nodes in the graph, root included.
    pub fn node_count(&self) -> usize {
        self.read_graph().node_count()
    }
}

impl<T, V> AlaTrie<T, V>
where
    T: Eq + Hash + Clone,
    V: Clone,
{
    /// Looks up the payload stored for exactly `sequence`.
    ///
    /// # Returns
    ///
    /// * `Some(value)` - The sequence was inserted with a payload.
    /// * `None` - The sequence is absent or was inserted without one.
    pub fn get<I>(&self, sequence: I) -> Option<V>
    where
        I: IntoIterator,
        I::Item: Borrow<T>,
    {
        let graph = self.read_graph();
        let node = graph.node(graph.walk(sequence)?);
        if node.is_end {
            node.value.clone()
        } else {
            None
        }
    }
}

impl<V> AlaTrie<char, V> {
    /// Inserts the characters of `word`.
    pub fn insert_str(&self, word: &str) {
        self.insert(word.chars());
    }

    /// Checks whether `word` itself was inserted.
    pub fn contains_str(&self, word: &str) -> bool {
        self.contains(word.chars())
    }

    /// Checks whether some inserted word starts with `prefix`.
    pub fn contains_prefix_str(&self, prefix: &str) -> bool {
        self.contains_prefix(prefix.chars())
    }

    /// Returns an iterator over every stored word.
    pub fn words(&self) -> impl Iterator<Item = String> + '_ {
        self.iter().map(String::from_iter)
    }
}

impl<T, V> Default for AlaTrie<T, V>
where
    T: Eq + Hash + Clone,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T, V, S> FromIterator<S> for AlaTrie<T, V>
where
    T: Eq + Hash + Clone,
    S: IntoIterator<Item = T>,
{
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut trie = Self::new();
        trie.extend(iter);
        trie
    }
}

impl<T, V, S> Extend<S> for AlaTrie<T, V>
where
    T: Eq + Hash + Clone,
    S: IntoIterator<Item = T>,
{
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        // Exclusive borrow, no locking needed.
        let graph = self.graph.get_mut();
        for write in self.pending.take() {
            write.apply(graph);
        }
        for sequence in iter {
            let end = graph.extend_path(sequence);
            graph.mark_end(end, None);
        }
    }
}
