//! Textbook data structures over caller-supplied keys.
//!
//! The centrepiece is the [`graph`](graph/) module: a directed-graph
//! interface with two interchangeable representations (adjacency list and
//! adjacency matrix) over a vertex key set fixed at construction, plus
//! representation-agnostic reachability, strongly-connected-component and
//! shortest-path algorithms.
//!
//! [`tree`](tree/) and [`heap`](heap/) hold a binary search tree and an
//! array-backed binary-heap priority queue.
//!
//! ```rust
//! use keygraph::graph::{AdjacencyList, Graph};
//!
//! # fn main() -> keygraph::Result<()> {
//! let mut g = AdjacencyList::new(['a', 'b', 'c', 'd'])?;
//! g.add_edges([(&'a', &'b'), (&'b', &'c'), (&'c', &'a'), (&'c', &'d')])?;
//!
//! assert_eq!(g.strongly_connected_component(&'a')?.len(), 3);
//! assert_eq!(g.shortest_path(&'a', &'d')?, Some(vec!['a', 'b', 'c', 'd']));
//! assert_eq!(g.shortest_path(&'d', &'a')?, None);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

mod error;

pub mod graph;
pub mod heap;
pub mod tree;

pub use error::{Error, Result};
