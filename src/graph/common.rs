//! Common types used by both graph representations.

use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;
use std::slice;

use num_traits::{NumCast, ToPrimitive};

use super::interface::Key;
use crate::{Error, Result};

// ================================================================
// Indices: dense integer handles for vertices.

/// Default integer type used to identify vertices.
pub type DefaultIndexType = u32;

/// Any integer type used as the underlying type for vertex indices.
pub trait IndexType: Copy + Eq + Hash + Ord + Debug + NumCast + ToPrimitive + 'static {}
impl<T> IndexType for T where T: Copy + Eq + Hash + Ord + Debug + NumCast + ToPrimitive + 'static {}

/// Interface provided by vertex identifiers.
pub trait Id: Copy + Debug + PartialEq + PartialOrd {
    /// Retrieve the underlying integer value of the identifier.
    fn index(&self) -> usize;
}

/// Type used to identify and index the vertices of a graph.
#[derive(Copy, Clone, Debug, Hash, Eq, Ord, PartialEq, PartialOrd)]
pub struct VertexIndex<T: IndexType>(T);

impl<T: IndexType> VertexIndex<T> {
    /// Convert `v` into an index, or `None` if `T` cannot represent it.
    #[inline]
    pub fn checked(v: usize) -> Option<Self> {
        <T as NumCast>::from(v).map(VertexIndex)
    }
}

impl<T: IndexType> Id for VertexIndex<T> {
    #[inline(always)]
    fn index(&self) -> usize {
        self.0.to_usize().expect("vertex index does not fit in usize")
    }
}

// ----------------------------------------------------------------
// KeyIndex

/// Bijection between a fixed set of vertex keys and the dense range of
/// indices `0..len()`.
///
/// Keys are assigned indices in first-seen order; duplicates collapse.  The
/// mapping never changes after construction because graphs have no vertex
/// insertion or removal.
#[derive(Clone, Debug)]
pub struct KeyIndex<K, Ix: IndexType> {
    index_of: HashMap<K, VertexIndex<Ix>>,
    keys: Vec<K>,
}

impl<K: Key, Ix: IndexType> KeyIndex<K, Ix> {
    /// Build the bijection over `keys`.
    ///
    /// Fails with `InvalidArgument` if there are more distinct keys than
    /// `Ix` can address.
    pub fn from_keys<I>(keys: I) -> Result<Self>
        where I: IntoIterator<Item = K>
    {
        let mut index_of: HashMap<K, VertexIndex<Ix>> = HashMap::new();
        let mut ordered: Vec<K> = Vec::new();

        for key in keys {
            if index_of.contains_key(&key) {
                continue;
            }
            let ix = VertexIndex::checked(ordered.len()).ok_or_else(|| {
                Error::invalid_argument(format!(
                    "vertex count exceeds the capacity of index type {}",
                    std::any::type_name::<Ix>()
                ))
            })?;
            index_of.insert(key.clone(), ix);
            ordered.push(key);
        }

        Ok(KeyIndex { index_of, keys: ordered })
    }

    /// Number of distinct keys.
    #[inline]
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// Check if a key belongs to the set.
    #[inline]
    pub fn contains(&self, key: &K) -> bool {
        self.index_of.contains_key(key)
    }

    /// Look up the index of `key`, failing with `NoSuchKey` if it is absent.
    #[inline]
    pub fn index(&self, key: &K) -> Result<VertexIndex<Ix>> {
        self.index_of.get(key).copied().ok_or_else(|| Error::no_such_key(key))
    }

    /// Look up both endpoints of an edge.
    #[inline]
    pub fn endpoints(&self, from: &K, to: &K) -> Result<(VertexIndex<Ix>, VertexIndex<Ix>)> {
        Ok((self.index(from)?, self.index(to)?))
    }

    /// Fetch the key at `ix`.
    ///
    /// Indices are only ever produced by this mapping, so `ix` is always in
    /// range.
    #[inline(always)]
    pub fn key(&self, ix: VertexIndex<Ix>) -> &K {
        &self.keys[ix.index()]
    }

    /// Fetch the key at a raw position in `0..len()`.
    #[inline(always)]
    pub fn key_at(&self, position: usize) -> &K {
        &self.keys[position]
    }

    /// Iterate over all keys in index order.
    #[inline]
    pub fn keys(&self) -> slice::Iter<'_, K> {
        self.keys.iter()
    }
}
