//! Interfaces (traits) for graph implementations.

use std::collections::HashSet;
use std::fmt::Debug;
use std::hash::Hash;
use std::iter::FusedIterator;

use super::algo;
use crate::{Error, Result};

/// Interface provided by vertex keys.
///
/// Keys are opaque, comparable and hashable identifiers; a graph clones them
/// only when handing out owned sets or paths.
pub trait Key: Clone + Eq + Hash + Debug {}
impl<T> Key for T where T: Clone + Eq + Hash + Debug {}

/// Edge direction relative to a vertex.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Follow edges from source to target (successors).
    Outgoing,
    /// Follow edges from target to source (predecessors).
    Incoming,
}

/// Common interface for directed graphs over a fixed set of vertex keys.
///
/// Every operation that names a vertex fails with
/// [`Error::NoSuchKey`](../enum.Error.html) when the key is not part of the
/// graph; mutations either update both the successor and predecessor side of
/// an edge or change nothing.
///
/// The algorithms provided here (`strongly_connected_component`,
/// `shortest_path`, ...) are written purely in terms of the required methods,
/// so every representation gets identical results.
pub trait Graph {
    /// Type used to identify vertices.
    type Key: Key;

    /// Iterator returned from `keys`.
    type Keys<'a>: Iterator<Item = &'a Self::Key> + FusedIterator
        where Self: 'a;

    /// Iterator returned from `successors`.
    type Successors<'a>: Iterator<Item = &'a Self::Key> + FusedIterator
        where Self: 'a;

    /// Iterator returned from `predecessors`.
    type Predecessors<'a>: Iterator<Item = &'a Self::Key> + FusedIterator
        where Self: 'a;

    // --------------------------------

    /// Count the number of vertices in the graph.
    fn vertex_count(&self) -> usize;

    /// Count the number of directed edges currently present.
    fn edge_count(&self) -> usize;

    /// Check if a key names a vertex of this graph.
    fn contains_vertex(&self, key: &Self::Key) -> bool;

    /// Fetch an iterator over all vertex keys.  Order is unspecified.
    fn keys(&self) -> Self::Keys<'_>;

    /// Collect all vertex keys into a set.
    fn key_set(&self) -> HashSet<Self::Key> {
        self.keys().cloned().collect()
    }

    // --------------------------------

    /// Record the edge `from → to`.
    ///
    /// Returns `Ok(true)` if the edge was added and `Ok(false)` if it was
    /// already present, in which case the graph is unchanged.
    fn add_edge(&mut self, from: &Self::Key, to: &Self::Key) -> Result<bool>;

    /// Check whether the edge `from → to` is present.
    fn contains_edge(&self, from: &Self::Key, to: &Self::Key) -> Result<bool>;

    /// Delete the edge `from → to`.
    ///
    /// Returns `Ok(true)` if the edge existed and `Ok(false)` otherwise.
    fn remove_edge(&mut self, from: &Self::Key, to: &Self::Key) -> Result<bool>;

    /// Add every edge produced by `edges`, returning how many were new.
    ///
    /// All endpoints are checked before anything is inserted, so on error
    /// the graph is left untouched.
    ///
    /// ```rust
    /// use keygraph::graph::{AdjacencyMatrix, Graph};
    ///
    /// let mut g = AdjacencyMatrix::new(0..4).unwrap();
    /// assert_eq!(3, g.add_edges([(&0, &1), (&1, &2), (&0, &1), (&2, &3)]).unwrap());
    /// assert!(g.add_edges([(&3, &0), (&3, &9)]).is_err());
    /// assert_eq!(false, g.contains_edge(&3, &0).unwrap());
    /// ```
    fn add_edges<'k, I>(&mut self, edges: I) -> Result<usize>
        where I: IntoIterator<Item = (&'k Self::Key, &'k Self::Key)>,
              Self::Key: 'k
    {
        let edges: Vec<_> = edges.into_iter().collect();
        for &(from, to) in &edges {
            if !self.contains_vertex(from) {
                return Err(Error::no_such_key(from));
            }
            if !self.contains_vertex(to) {
                return Err(Error::no_such_key(to));
            }
        }

        let mut added = 0;
        for (from, to) in edges {
            if self.add_edge(from, to)? {
                added += 1;
            }
        }
        Ok(added)
    }

    // --------------------------------

    /// Count the edges leaving `key`.
    fn out_degree(&self, key: &Self::Key) -> Result<usize>;

    /// Count the edges arriving at `key`.
    fn in_degree(&self, key: &Self::Key) -> Result<usize>;

    /// Fetch a lazy iterator over the direct successors of `key`.
    ///
    /// The iterator borrows the graph, so the graph cannot be mutated while
    /// it is alive.  Order is unspecified.
    fn successors(&self, key: &Self::Key) -> Result<Self::Successors<'_>>;

    /// Fetch a lazy iterator over the direct predecessors of `key`.
    ///
    /// The iterator borrows the graph, so the graph cannot be mutated while
    /// it is alive.  Order is unspecified.
    fn predecessors(&self, key: &Self::Key) -> Result<Self::Predecessors<'_>>;

    /// Snapshot the direct successors of `key` into a set.
    fn successor_set(&self, key: &Self::Key) -> Result<HashSet<Self::Key>> {
        Ok(self.successors(key)?.cloned().collect())
    }

    /// Snapshot the direct predecessors of `key` into a set.
    fn predecessor_set(&self, key: &Self::Key) -> Result<HashSet<Self::Key>> {
        Ok(self.predecessors(key)?.cloned().collect())
    }

    // --------------------------------

    /// Find all vertices mutually reachable with `key`, including `key`.
    fn strongly_connected_component(&self, key: &Self::Key) -> Result<HashSet<Self::Key>>
        where Self: Sized
    {
        algo::strongly_connected_component(self, key)
    }

    /// Partition the whole graph into its strongly connected components.
    fn strongly_connected_components(&self) -> Result<Vec<HashSet<Self::Key>>>
        where Self: Sized
    {
        algo::strongly_connected_components(self)
    }

    /// Find a path with the fewest edges from `start` to `end`.
    ///
    /// The path includes both endpoints; `Ok(None)` means `end` is not
    /// reachable from `start`.  When several shortest paths exist, which one
    /// is returned is unspecified.
    fn shortest_path(&self, start: &Self::Key, end: &Self::Key) -> Result<Option<Vec<Self::Key>>>
        where Self: Sized
    {
        algo::shortest_path(self, start, end)
    }
}
