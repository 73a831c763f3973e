// Copyright (c) 2025 Mauka MCP Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Lazy enumeration of stored sequences.

use std::fmt;
use std::hash::Hash;
use std::iter::FusedIterator;

use super::node::NodeId;
use super::AlaTrie;

/// Iterator over the sequences stored in an [`AlaTrie`](super::AlaTrie).
///
/// Walks the graph depth-first and rebuilds each terminal node's sequence from
/// its parent links. Only the frontier of node ids is kept between calls; each
/// step takes the read lock briefly, so the trie stays usable while the
/// iterator is alive. Nodes are never removed and ids never move, so the walk
/// stays valid across concurrent inserts. A sequence inserted under a subtree
/// the walk has already passed is not yielded; one inserted ahead of it is.
pub struct Sequences<'a, T, V> {
    trie: &'a AlaTrie<T, V>,
    stack: Vec<NodeId>,
}

impl<'a, T, V> Sequences<'a, T, V>
where
    T: Eq + Hash + Clone,
{
    /// Starts a walk at `start`, or yields nothing when `start` is `None`.
    pub(crate) fn new(trie: &'a AlaTrie<T, V>, start: Option<NodeId>) -> Self {
        Self {
            trie,
            stack: start.into_iter().collect(),
        }
    }
}

impl<T, V> Iterator for Sequences<'_, T, V>
where
    T: Eq + Hash + Clone,
{
    type Item = Vec<T>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.stack.is_empty() {
            return None;
        }

        let graph = self.trie.read_graph();
        while let Some(id) = self.stack.pop() {
            let node = graph.node(id);
            self.stack.extend(node.children.values().copied());

            if node.is_end {
                return Some(graph.reconstruct(id));
            }
        }

        None
    }
}

impl<T, V> FusedIterator for Sequences<'_, T, V> where T: Eq + Hash + Clone {}

impl<T, V> fmt::Debug for Sequences<'_, T, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Sequences")
            .field("remaining_frontier", &self.stack.len())
            .finish()
    }
}
