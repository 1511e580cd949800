//! Undirected graph core — a keyed node registry with symmetric adjacency.
//!
//! Nodes live in an arena and are addressed by `NodeId` handles. Each
//! node's neighbour set holds handles rather than references, so two
//! mutually adjacent nodes never own each other.

use rustc_hash::{FxHashMap, FxHashSet};
use std::borrow::Borrow;
use std::fmt::Debug;
use std::hash::Hash;
use thiserror::Error;
use tracing::{debug, trace};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraphError<K: Debug> {
    #[error("duplicate key: {0:?}")]
    DuplicateKey(K),
    #[error("node not found: {0:?}")]
    NodeNotFound(K),
    #[error("cannot connect node {0:?} to itself")]
    SelfConnection(K),
}

/// Stable handle to a node in a `Graph` arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(usize);

impl NodeId {
    /// Position of the node in insertion order.
    pub fn index(self) -> usize {
        self.0
    }
}

/// A single vertex: the key it was registered under, its payload, and
/// the handles of its adjacent nodes.
#[derive(Debug, Clone)]
pub struct Node<K, T> {
    key: K,
    payload: T,
    neighbours: FxHashSet<NodeId>,
}

impl<K, T> Node<K, T> {
    pub fn new(key: K, payload: T) -> Self {
        Self::with_neighbours(key, payload, FxHashSet::default())
    }

    pub fn with_neighbours(key: K, payload: T, neighbours: FxHashSet<NodeId>) -> Self {
        Self {
            key,
            payload,
            neighbours,
        }
    }

    pub fn key(&self) -> &K {
        &self.key
    }

    pub fn payload(&self) -> &T {
        &self.payload
    }

    pub fn neighbours(&self) -> &FxHashSet<NodeId> {
        &self.neighbours
    }

    pub fn degree(&self) -> usize {
        self.neighbours.len()
    }

    pub fn is_adjacent_to(&self, id: NodeId) -> bool {
        self.neighbours.contains(&id)
    }
}

/// Registry of nodes keyed by a unique identity.
///
/// The registry only grows: nodes are inserted with `add_node` and linked
/// with `add_connection`. Adjacency is kept symmetric, and the node stored
/// under a key always reports that key from `Node::key`.
#[derive(Debug, Clone)]
pub struct Graph<K, T> {
    nodes: Vec<Node<K, T>>,
    index: FxHashMap<K, NodeId>,
}

impl<K, T> Default for Graph<K, T> {
    fn default() -> Self {
        Self {
            nodes: Vec::new(),
            index: FxHashMap::default(),
        }
    }
}

impl<K, T> Graph<K, T>
where
    K: Eq + Hash + Clone + Debug,
{
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(capacity),
            index: FxHashMap::with_capacity_and_hasher(capacity, Default::default()),
        }
    }

    /// Insert a new node with no neighbours under `key`.
    ///
    /// Fails with `DuplicateKey` if the key is already registered; the
    /// existing node is left as it was.
    pub fn add_node(&mut self, key: K, payload: T) -> Result<NodeId, GraphError<K>> {
        if self.index.contains_key(&key) {
            return Err(GraphError::DuplicateKey(key));
        }

        let id = NodeId(self.nodes.len());
        debug!(key = ?key, id = id.0, "node added");
        self.index.insert(key.clone(), id);
        self.nodes.push(Node::new(key, payload));
        Ok(id)
    }

    /// Link two distinct nodes, adding each to the other's neighbour set.
    ///
    /// Connecting an already adjacent pair is a no-op. Both keys are
    /// resolved before anything is mutated, so a failed call leaves every
    /// neighbour set unchanged.
    pub fn add_connection<Q>(&mut self, key1: &Q, key2: &Q) -> Result<(), GraphError<K>>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq + ToOwned<Owned = K>,
    {
        if key1 == key2 {
            return Err(GraphError::SelfConnection(key1.to_owned()));
        }
        let a = self.require(key1)?;
        let b = self.require(key2)?;

        let added = self.nodes[a.0].neighbours.insert(b);
        self.nodes[b.0].neighbours.insert(a);

        if added {
            debug!(
                from = ?self.nodes[a.0].key,
                to = ?self.nodes[b.0].key,
                "connection added"
            );
        } else {
            trace!(
                from = ?self.nodes[a.0].key,
                to = ?self.nodes[b.0].key,
                "connection already present"
            );
        }
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Number of undirected edges.
    pub fn edge_count(&self) -> usize {
        self.nodes.iter().map(Node::degree).sum::<usize>() / 2
    }

    pub fn contains<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.index.contains_key(key)
    }

    pub fn id_of<Q>(&self, key: &Q) -> Option<NodeId>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.index.get(key).copied()
    }

    pub fn get<Q>(&self, key: &Q) -> Option<&Node<K, T>>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.id_of(key).map(|id| &self.nodes[id.0])
    }

    pub fn node(&self, id: NodeId) -> Option<&Node<K, T>> {
        self.nodes.get(id.0)
    }

    /// Mutable access to a node's payload. Adjacency stays under the
    /// graph's control.
    pub fn payload_mut<Q>(&mut self, key: &Q) -> Option<&mut T>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        let id = self.id_of(key)?;
        Some(&mut self.nodes[id.0].payload)
    }

    /// Mutable access to the payloads of two distinct nodes at once.
    pub fn payloads_mut<Q>(&mut self, key1: &Q, key2: &Q) -> Result<(&mut T, &mut T), GraphError<K>>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq + ToOwned<Owned = K>,
    {
        if key1 == key2 {
            return Err(GraphError::SelfConnection(key1.to_owned()));
        }
        let a = self.require(key1)?.0;
        let b = self.require(key2)?.0;

        if a < b {
            let (lo, hi) = self.nodes.split_at_mut(b);
            Ok((&mut lo[a].payload, &mut hi[0].payload))
        } else {
            let (lo, hi) = self.nodes.split_at_mut(a);
            Ok((&mut hi[0].payload, &mut lo[b].payload))
        }
    }

    /// Returns true if both keys are registered and adjacent.
    pub fn are_adjacent<Q>(&self, key1: &Q, key2: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        match (self.get(key1), self.id_of(key2)) {
            (Some(node), Some(other)) => node.is_adjacent_to(other),
            _ => false,
        }
    }

    /// Keys of the nodes adjacent to `key`, or `None` if it is not registered.
    pub fn neighbours<Q>(&self, key: &Q) -> Option<impl Iterator<Item = &K> + '_>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        let node = self.get(key)?;
        Some(node.neighbours.iter().map(move |id| &self.nodes[id.0].key))
    }

    /// All nodes in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &Node<K, T>)> {
        self.nodes
            .iter()
            .enumerate()
            .map(|(i, node)| (NodeId(i), node))
    }

    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.nodes.iter().map(Node::key)
    }

    fn require<Q>(&self, key: &Q) -> Result<NodeId, GraphError<K>>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq + ToOwned<Owned = K>,
    {
        self.id_of(key).ok_or_else(|| GraphError::NodeNotFound(key.to_owned()))
    }
}
