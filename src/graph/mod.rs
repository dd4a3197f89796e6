//! Interfaces and implementations for directed graphs over a fixed key set.
//!
//! A graph is created from a set of caller-supplied vertex keys; after that
//! only edges change.  There are two implementations of the
//! [`Graph`](trait.Graph.html) interface:
//!
//!   * [`AdjacencyList`](struct.AdjacencyList.html), which keeps explicit
//!     successor and predecessor lists per vertex and suits sparse graphs, and
//!   * [`AdjacencyMatrix`](struct.AdjacencyMatrix.html), which keeps one bit
//!     per ordered vertex pair and suits dense graphs.
//!
//! Both map keys to dense integer indices internally (`Ix`, `u32` by
//! default), and both answer every query identically.  The traversal
//! algorithms in [`algo`](algo/) only use the interface's public operations.
//!
//! Successor and predecessor iterators borrow the graph, so edges cannot be
//! modified while one is alive; `successor_set`/`predecessor_set` return
//! owned snapshots instead.

mod common;
pub mod algo;
pub mod interface;
pub mod iter;
mod list;
mod matrix;

pub use self::common::{DefaultIndexType, IndexType};
pub use self::interface::{Direction, Graph, Key};
pub use self::list::AdjacencyList;
pub use self::matrix::AdjacencyMatrix;
