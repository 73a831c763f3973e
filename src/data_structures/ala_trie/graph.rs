// Copyright (c) 2025 Mauka MCP Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Arena-backed node graph for the Ala Trie.
//!
//! The graph owns every node and answers structural walks. It performs no
//! synchronization of its own; the engine in the parent module decides when it
//! may be read or mutated.

use std::borrow::Borrow;
use std::hash::Hash;

use super::node::{Node, NodeId};

/// The tree of nodes backing an [`AlaTrie`](super::AlaTrie).
#[derive(Debug)]
pub(crate) struct NodeGraph<T, V> {
    /// All nodes, indexed by [`NodeId`]. Slot 0 is the root.
    nodes: Vec<Node<T, V>>,
}

impl<T, V> NodeGraph<T, V>
where
    T: Eq + Hash + Clone,
{
    /// Creates a graph containing only the root, reserving room for `capacity` nodes.
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        let mut nodes = Vec::with_capacity(capacity.max(1));
        nodes.push(Node::root());
        Self { nodes }
    }

    pub(crate) fn node(&self, id: NodeId) -> &Node<T, V> {
        &self.nodes[id.index()]
    }

    /// Total number of nodes, root included.
    pub(crate) fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Returns the existing child of `from` labelled `element`.
    pub(crate) fn descend<Q>(&self, from: NodeId, element: &Q) -> Option<NodeId>
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.node(from).children.get(element).copied()
    }

    /// Returns the child of `from` labelled `element`, creating it if absent.
    ///
    /// The new node is pushed into the arena with its key and parent set before
    /// the parent's child map learns about it.
    pub(crate) fn ensure_child(&mut self, from: NodeId, element: T) -> NodeId {
        if let Some(existing) = self.descend(from, &element) {
            return existing;
        }

        let id = NodeId::new(self.nodes.len());
        self.nodes.push(Node::child(from, element.clone()));
        self.nodes[from.index()].children.insert(element, id);
        id
    }

    /// Follows `sequence` from the root, stopping at the first missing element.
    pub(crate) fn walk<I>(&self, sequence: I) -> Option<NodeId>
    where
        I: IntoIterator,
        I::Item: Borrow<T>,
    {
        sequence
            .into_iter()
            .try_fold(NodeId::ROOT, |node, element| {
                self.descend(node, Borrow::<T>::borrow(&element))
            })
    }

    /// Creates every missing node along `sequence` and returns the last one.
    pub(crate) fn extend_path<I>(&mut self, sequence: I) -> NodeId
    where
        I: IntoIterator<Item = T>,
    {
        sequence
            .into_iter()
            .fold(NodeId::ROOT, |node, element| self.ensure_child(node, element))
    }

    /// Marks `id` terminal, storing `value` when one is given.
    ///
    /// Returns `true` if the node was not terminal before.
    pub(crate) fn mark_end(&mut self, id: NodeId, value: Option<V>) -> bool {
        let node = &mut self.nodes[id.index()];
        let is_new = !node.is_end;
        node.is_end = true;
        if value.is_some() {
            node.value = value;
        }
        is_new
    }

    /// Rebuilds the path of keys from the root down to `id` using parent links.
    pub(crate) fn reconstruct(&self, id: NodeId) -> Vec<T> {
        let mut path = Vec::new();
        let mut current = self.node(id);

        while let (Some(key), Some(parent)) = (&current.key, current.parent) {
            path.push(key.clone());
            current = self.node(parent);
        }

        path.reverse();
        path
    }

    /// Counts terminal nodes in the subtree rooted at `from`.
    pub(crate) fn count_terminals(&self, from: NodeId) -> usize {
        let mut count = 0;
        let mut stack = vec![from];

        while let Some(id) = stack.pop() {
            let node = self.node(id);
            if node.is_end {
                count += 1;
            }
            stack.extend(node.children.values().copied());
        }

        count
    }
}
