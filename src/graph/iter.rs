//! Iterators used by the graph implementations.
//!
//! All of them borrow the graph they were created from and yield keys
//! lazily; once exhausted they stay exhausted.

use std::iter::FusedIterator;
use std::slice;

use bit_set::BitSet;

use super::common::{IndexType, KeyIndex, VertexIndex};
use super::interface::Key;


/// Iterator over an adjacency list's successor or predecessor indices,
/// translated back to keys.
pub struct Neighbors<'a, K, Ix: IndexType> {
    keys: &'a KeyIndex<K, Ix>,
    iter: slice::Iter<'a, VertexIndex<Ix>>
}

impl<'a, K, Ix: IndexType> Neighbors<'a, K, Ix> {
    /// Create an iterator over the keys named by a vertex's edge list.
    pub(crate) fn new(keys: &'a KeyIndex<K, Ix>, iter: slice::Iter<'a, VertexIndex<Ix>>) -> Self {
        Neighbors{keys, iter}
    }
}

impl<'a, K: Key, Ix: IndexType> Iterator for Neighbors<'a, K, Ix> {
    type Item = &'a K;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let keys = self.keys;
        self.iter.next().map(|&ix| keys.key(ix))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }
}

impl<'a, K: Key, Ix: IndexType> ExactSizeIterator for Neighbors<'a, K, Ix> {}
impl<'a, K: Key, Ix: IndexType> FusedIterator for Neighbors<'a, K, Ix> {}


/// Iterator over the set bits of one adjacency-matrix row, i.e. the
/// successors of the row's vertex.
pub struct RowScan<'a, K, Ix: IndexType> {
    keys: &'a KeyIndex<K, Ix>,
    iter: bit_set::Iter<'a, u32>
}

impl<'a, K, Ix: IndexType> RowScan<'a, K, Ix> {
    pub(crate) fn new(keys: &'a KeyIndex<K, Ix>, row: &'a BitSet) -> Self {
        RowScan{keys, iter: row.iter()}
    }
}

impl<'a, K: Key, Ix: IndexType> Iterator for RowScan<'a, K, Ix> {
    type Item = &'a K;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let keys = self.keys;
        self.iter.next().map(|column| keys.key_at(column))
    }
}

impl<'a, K: Key, Ix: IndexType> FusedIterator for RowScan<'a, K, Ix> {}


/// Iterator that walks down one adjacency-matrix column, yielding the keys of
/// rows with that column's bit set, i.e. the predecessors of the column's
/// vertex.  Rows are examined only as the iterator is advanced.
pub struct ColumnScan<'a, K, Ix: IndexType> {
    keys: &'a KeyIndex<K, Ix>,
    rows: &'a [BitSet],
    column: usize,
    next_row: usize
}

impl<'a, K, Ix: IndexType> ColumnScan<'a, K, Ix> {
    pub(crate) fn new(keys: &'a KeyIndex<K, Ix>, rows: &'a [BitSet], column: usize) -> Self {
        ColumnScan{keys, rows, column, next_row: 0}
    }
}

impl<'a, K: Key, Ix: IndexType> Iterator for ColumnScan<'a, K, Ix> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        while self.next_row < self.rows.len() {
            let row = self.next_row;
            self.next_row += 1;
            if self.rows[row].contains(self.column) {
                return Some(self.keys.key_at(row));
            }
        }
        None
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(self.rows.len() - self.next_row))
    }
}

impl<'a, K: Key, Ix: IndexType> FusedIterator for ColumnScan<'a, K, Ix> {}
