// Copyright (c) 2025 Mauka MCP Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Node implementation for the Ala Trie.
//!
//! Nodes live inside the arena owned by [`NodeGraph`](super::graph::NodeGraph) and
//! refer to each other through [`NodeId`] indices. Children are owned through the
//! forward map; the parent link is a plain index and never owns anything.

use fnv::FnvBuildHasher;
use hashbrown::HashMap;

/// Stable index of a node inside the arena.
///
/// Nodes are never removed, so an id stays valid for the lifetime of the graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub(crate) struct NodeId(usize);

impl NodeId {
    /// The root always occupies the first arena slot.
    pub(crate) const ROOT: NodeId = NodeId(0);

    pub(crate) fn new(index: usize) -> Self {
        Self(index)
    }

    pub(crate) fn index(self) -> usize {
        self.0
    }
}

/// Child map keyed by element.
pub(crate) type Children<T> = HashMap<T, NodeId, FnvBuildHasher>;

/// A node in the Ala Trie.
///
/// Each non-root node represents one element of a stored path. Terminal nodes
/// mark the end of an inserted sequence and may carry a payload.
#[derive(Debug)]
pub(crate) struct Node<T, V> {
    /// Element labelling the edge from the parent, `None` for the root
    pub(crate) key: Option<T>,

    /// Index of the parent, `None` for the root
    pub(crate) parent: Option<NodeId>,

    /// Map of elements to child nodes
    pub(crate) children: Children<T>,

    /// Whether an inserted sequence ends at this node
    pub(crate) is_end: bool,

    /// Payload attached when the node became terminal
    pub(crate) value: Option<V>,
}

impl<T, V> Node<T, V> {
    /// Creates the parentless root node.
    pub(crate) fn root() -> Self {
        Self {
            key: None,
            parent: None,
            children: Children::with_hasher(FnvBuildHasher::default()),
            is_end: false,
            value: None,
        }
    }

    /// Creates a non-terminal node hanging off `parent` under `key`.
    pub(crate) fn child(parent: NodeId, key: T) -> Self {
        Self {
            key: Some(key),
            parent: Some(parent),
            children: Children::with_hasher(FnvBuildHasher::default()),
            is_end: false,
            value: None,
        }
    }
}
