//! Adjacency-matrix graph representation.

use std::slice;

use bit_set::BitSet;
use tracing::trace;

use super::common::{DefaultIndexType, Id, IndexType, KeyIndex};
use super::interface::{Graph, Key};
use super::iter::{ColumnScan, RowScan};
use crate::Result;

/// Dense directed graph: a square boolean matrix indexed through a key↔index
/// bijection.
///
/// Row `r` holds the successors of vertex `r`; column `c` holds the
/// predecessors of vertex `c`.  Each row is a `BitSet`, so the matrix costs
/// one bit per ordered vertex pair.  A single bit represents an edge from
/// both ends, which is what keeps the successor and predecessor views in
/// agreement.
///
/// ```rust
/// use keygraph::graph::{AdjacencyMatrix, Graph};
///
/// let mut g = AdjacencyMatrix::new(1..=3).unwrap();
/// g.add_edge(&1, &3).unwrap();
/// g.add_edge(&2, &3).unwrap();
/// assert_eq!(2, g.in_degree(&3).unwrap());
///
/// let mut preds: Vec<_> = g.predecessors(&3).unwrap().copied().collect();
/// preds.sort();
/// assert_eq!(vec![1, 2], preds);
/// ```
#[derive(Clone, Debug)]
pub struct AdjacencyMatrix<K, Ix: IndexType = DefaultIndexType> {
    keys: KeyIndex<K, Ix>,
    rows: Vec<BitSet>,
}

impl<K: Key> AdjacencyMatrix<K> {
    /// Create an edgeless graph over the given keys, using the default index
    /// type.  Duplicate keys collapse.
    pub fn new<I>(keys: I) -> Result<Self>
        where I: IntoIterator<Item = K>
    {
        Self::with_index_type(keys)
    }
}

impl<K: Key, Ix: IndexType> AdjacencyMatrix<K, Ix> {
    /// Create an edgeless graph over the given keys with an explicit index
    /// type.
    ///
    /// Fails with `InvalidArgument` if `Ix` cannot address every key.
    pub fn with_index_type<I>(keys: I) -> Result<Self>
        where I: IntoIterator<Item = K>
    {
        let keys = KeyIndex::from_keys(keys)?;
        let n = keys.len();
        let rows = (0..n).map(|_| BitSet::with_capacity(n)).collect();
        Ok(AdjacencyMatrix{keys, rows})
    }

    /// Resolve an edge's endpoints to (row, column) coordinates.
    #[inline]
    fn cell(&self, from: &K, to: &K) -> Result<(usize, usize)> {
        let (a, b) = self.keys.endpoints(from, to)?;
        Ok((a.index(), b.index()))
    }
}

impl<K: Key, Ix: IndexType> Graph for AdjacencyMatrix<K, Ix> {
    type Key = K;
    type Keys<'a> = slice::Iter<'a, K> where Self: 'a;
    type Successors<'a> = RowScan<'a, K, Ix> where Self: 'a;
    type Predecessors<'a> = ColumnScan<'a, K, Ix> where Self: 'a;

    #[inline]
    fn vertex_count(&self) -> usize {
        self.keys.len()
    }

    fn edge_count(&self) -> usize {
        self.rows.iter().map(BitSet::len).sum()
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
        let (row, col) = self.cell(from, to)?;
        let added = self.rows[row].insert(col);
        if added {
            trace!(?from, ?to, "added edge");
        }
        Ok(added)
    }

    fn contains_edge(&self, from: &K, to: &K) -> Result<bool> {
        let (row, col) = self.cell(from, to)?;
        Ok(self.rows[row].contains(col))
    }

    fn remove_edge(&mut self, from: &K, to: &K) -> Result<bool> {
        let (row, col) = self.cell(from, to)?;
        let removed = self.rows[row].remove(col);
        if removed {
            trace!(?from, ?to, "removed edge");
        }
        Ok(removed)
    }

    fn out_degree(&self, key: &K) -> Result<usize> {
        let row = self.keys.index(key)?.index();
        Ok(self.rows[row].len())
    }

    fn in_degree(&self, key: &K) -> Result<usize> {
        let col = self.keys.index(key)?.index();
        Ok(self.rows.iter().filter(|row| row.contains(col)).count())
    }

    fn successors(&self, key: &K) -> Result<Self::Successors<'_>> {
        let row = self.keys.index(key)?.index();
        Ok(RowScan::new(&self.keys, &self.rows[row]))
    }

    fn predecessors(&self, key: &K) -> Result<Self::Predecessors<'_>> {
        let col = self.keys.index(key)?.index();
        Ok(ColumnScan::new(&self.keys, &self.rows, col))
    }
}
