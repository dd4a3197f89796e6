//! Adjacency-list graph representation.

use std::slice;

use smallvec::SmallVec;
use tracing::trace;

use super::common::{DefaultIndexType, Id, IndexType, KeyIndex, VertexIndex};
use super::interface::{Graph, Key};
use super::iter::Neighbors;
use crate::Result;

// ----------------------------------------------------------------
// Vertex

/// Per-vertex edge lists.
///
/// `successors` and `predecessors` mirror each other across the graph: `v`
/// is in `u.successors` exactly when `u` is in `v.predecessors`.  Only
/// `AdjacencyList::add_edge` and `AdjacencyList::remove_edge` touch them.
#[derive(Clone, Debug)]
struct Vertex<Ix: IndexType> {
    successors: SmallVec<[VertexIndex<Ix>; 8]>,
    predecessors: SmallVec<[VertexIndex<Ix>; 8]>,
}

impl<Ix: IndexType> Vertex<Ix> {
    /// Create a vertex with no edges attached.
    fn new() -> Self {
        Vertex{successors: SmallVec::new(),
               predecessors: SmallVec::new()}
    }
}

/// Remove one occurrence of `ix` from `list`, reporting whether it was there.
#[inline]
fn unlink<Ix: IndexType>(list: &mut SmallVec<[VertexIndex<Ix>; 8]>, ix: VertexIndex<Ix>) -> bool {
    match list.iter().position(|&other| other == ix) {
        Some(pos) => {
            list.swap_remove(pos);
            true
        }
        None => false,
    }
}

// ----------------------------------------------------------------
// AdjacencyList

/// Sparse directed graph: every vertex keeps explicit lists of its successor
/// and predecessor indices.
///
/// The vertex set is fixed when the graph is built.  `Ix` is the integer type
/// used for the internal key↔index mapping.
///
/// ```rust
/// use keygraph::graph::{AdjacencyList, Graph};
///
/// let mut g = AdjacencyList::new(["red", "green", "blue"]).unwrap();
/// assert!(g.add_edge(&"red", &"green").unwrap());
/// assert!(!g.add_edge(&"red", &"green").unwrap());
/// assert_eq!(1, g.out_degree(&"red").unwrap());
/// assert!(g.add_edge(&"red", &"violet").is_err());
/// ```
#[derive(Clone, Debug)]
pub struct AdjacencyList<K, Ix: IndexType = DefaultIndexType> {
    keys: KeyIndex<K, Ix>,
    vertices: Vec<Vertex<Ix>>,
}

impl<K: Key> AdjacencyList<K> {
    /// Create an edgeless graph over the given keys, using the default index
    /// type.  Duplicate keys collapse.
    pub fn new<I>(keys: I) -> Result<Self>
        where I: IntoIterator<Item = K>
    {
        Self::with_index_type(keys)
    }
}

impl<K: Key, Ix: IndexType> AdjacencyList<K, Ix> {
    /// Create an edgeless graph over the given keys with an explicit index
    /// type.
    ///
    /// Fails with `InvalidArgument` if `Ix` cannot address every key.
    pub fn with_index_type<I>(keys: I) -> Result<Self>
        where I: IntoIterator<Item = K>
    {
        let keys = KeyIndex::from_keys(keys)?;
        let vertices = (0..keys.len()).map(|_| Vertex::new()).collect();
        Ok(AdjacencyList{keys, vertices})
    }

    #[inline(always)]
    fn vertex(&self, ix: VertexIndex<Ix>) -> &Vertex<Ix> {
        &self.vertices[ix.index()]
    }

    #[inline(always)]
    fn vertex_mut(&mut self, ix: VertexIndex<Ix>) -> &mut Vertex<Ix> {
        &mut self.vertices[ix.index()]
    }
}

impl<K: Key, Ix: IndexType> Graph for AdjacencyList<K, Ix> {
    type Key = K;
    type Keys<'a> = slice::Iter<'a, K> where Self: 'a;
    type Successors<'a> = Neighbors<'a, K, Ix> where Self: 'a;
    type Predecessors<'a> = Neighbors<'a, K, Ix> where Self: 'a;

    #[inline]
    fn vertex_count(&self) -> usize {
        self.keys.len()
    }

    fn edge_count(&self) -> usize {
        self.vertices.iter().map(|v| v.successors.len()).sum()
    }

    #[inline]
    fn contains_vertex(&self, key: &K) -> bool {
        self.keys.contains(key)
    }

    #[inline]
    fn keys(&self) -> Self::Keys<'_> {
        self.keys.keys()
    }

    fn add_edge(&mut self, from: &K, to: &K) -> Result<bool> {
        let (a, b) = self.keys.endpoints(from, to)?;
        if self.vertex(a).successors.contains(&b) {
            return Ok(false);
        }

        // Update cross-referenced edge lists for the connected vertices.
        self.vertex_mut(a).successors.push(b);
        self.vertex_mut(b).predecessors.push(a);
        trace!(?from, ?to, "added edge");
        Ok(true)
    }

    fn contains_edge(&self, from: &K, to: &K) -> Result<bool> {
        let (a, b) = self.keys.endpoints(from, to)?;
        Ok(self.vertex(a).successors.contains(&b))
    }

    fn remove_edge(&mut self, from: &K, to: &K) -> Result<bool> {
        let (a, b) = self.keys.endpoints(from, to)?;
        if !unlink(&mut self.vertex_mut(a).successors, b) {
            return Ok(false);
        }
        unlink(&mut self.vertex_mut(b).predecessors, a);
        trace!(?from, ?to, "removed edge");
        Ok(true)
    }

    fn out_degree(&self, key: &K) -> Result<usize> {
        let ix = self.keys.index(key)?;
        Ok(self.vertex(ix).successors.len())
    }

    fn in_degree(&self, key: &K) -> Result<usize> {
        let ix = self.keys.index(key)?;
        Ok(self.vertex(ix).predecessors.len())
    }

    fn successors(&self, key: &K) -> Result<Self::Successors<'_>> {
        let ix = self.keys.index(key)?;
        Ok(Neighbors::new(&self.keys, self.vertex(ix).successors.iter()))
    }

    fn predecessors(&self, key: &K) -> Result<Self::Predecessors<'_>> {
        let ix = self.keys.index(key)?;
        Ok(Neighbors::new(&self.keys, self.vertex(ix).predecessors.iter()))
    }
}
