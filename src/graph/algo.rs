//! Implementations of various algorithms.
//!
//! Everything here talks to a graph only through the [`Graph`] trait, so the
//! results are identical for every representation.

use std::collections::hash_map::Entry;
use std::collections::{HashMap, HashSet, VecDeque};

use tracing::debug;

use super::interface::{Direction, Graph};
use crate::{Error, Result};


/// Step from `key` to its direct neighbours in the given direction.
fn neighbors<'a, G>(g: &'a G, key: &G::Key, dir: Direction) -> Result<Vec<&'a G::Key>>
    where G: Graph
{
    Ok(match dir {
        Direction::Outgoing => g.successors(key)?.collect(),
        Direction::Incoming => g.predecessors(key)?.collect(),
    })
}

/// Collect `start` and every vertex reachable from it by following edges in
/// direction `dir`, using a breadth-first search.
///
/// Fails with `NoSuchKey` if `start` is not a vertex of `g`.
pub fn reachable<'a, G>(g: &'a G, start: &'a G::Key, dir: Direction) -> Result<HashSet<&'a G::Key>>
    where G: Graph
{
    if !g.contains_vertex(start) {
        return Err(Error::no_such_key(start));
    }

    let mut seen = HashSet::new();
    let mut queue = VecDeque::new();
    seen.insert(start);
    queue.push_back(start);

    while let Some(v) = queue.pop_front() {
        for w in neighbors(g, v, dir)? {
            if seen.insert(w) {
                queue.push_back(w);
            }
        }
    }
    Ok(seen)
}

/// Find the strongly connected component containing `key`: every vertex that
/// both reaches and is reached from `key`, `key` itself included.
///
/// Computed as the intersection of forward and backward reachability.
pub fn strongly_connected_component<G>(g: &G, key: &G::Key) -> Result<HashSet<G::Key>>
    where G: Graph
{
    let forward = reachable(g, key, Direction::Outgoing)?;
    let backward = reachable(g, key, Direction::Incoming)?;
    let component: HashSet<G::Key> = forward.intersection(&backward).map(|k| (*k).clone()).collect();

    debug!(?key, forward = forward.len(), backward = backward.len(), size = component.len(),
           "strongly connected component");
    Ok(component)
}


// ----------------------------------------------------------------
// Gabow's path-based SCC

/// Bookkeeping for the path-based strong component search.
struct Gabow<'g, G: Graph + 'g> {
    graph: &'g G,
    preorder: HashMap<&'g G::Key, usize>,
    assigned: HashSet<&'g G::Key>,
    path: Vec<&'g G::Key>,
    boundaries: Vec<&'g G::Key>,
    components: Vec<HashSet<G::Key>>,
}

impl<'g, G: Graph + 'g> Gabow<'g, G> {
    /// Depth-first part of Gabow's strongly-connected components algorithm.
    ///
    /// The DFS is driven by an explicit stack of `(vertex, successors)`
    /// frames, so its depth is bounded by the heap rather than the call
    /// stack.
    fn visit(&mut self, root: &'g G::Key) -> Result<()> {
        let mut stack = vec![(root, self.enter(root)?)];

        while let Some(frame) = stack.last_mut() {
            let v = frame.0;
            match frame.1.next() {
                Some(w) => match self.preorder.get(w).copied() {
                    // This successor has not yet been processed; follow it.
                    None => {
                        let successors = self.enter(w)?;
                        stack.push((w, successors));
                    }
                    // "contract if necessary"
                    Some(w_number) if !self.assigned.contains(w) => {
                        while let Some(&top) = self.boundaries.last() {
                            if self.preorder[top] > w_number {
                                self.boundaries.pop();
                            } else {
                                break;
                            }
                        }
                    }
                    Some(_) => (),
                },
                None => {
                    stack.pop();
                    self.finish(v);
                }
            }
        }
        Ok(())
    }

    /// Number `v` in preorder and push it onto both stacks.
    fn enter(&mut self, v: &'g G::Key) -> Result<G::Successors<'g>> {
        let number = self.preorder.len();
        self.preorder.insert(v, number);
        self.path.push(v);
        self.boundaries.push(v);
        let graph = self.graph;
        graph.successors(v)
    }

    /// Called once every successor of `v` has been explored: if `v` roots a
    /// strong component, pop that component off the path.
    fn finish(&mut self, v: &'g G::Key) {
        if self.boundaries.last() != Some(&v) {
            return;
        }
        self.boundaries.pop();
        let mut component = HashSet::new();
        while let Some(u) = self.path.pop() {
            self.assigned.insert(u);
            component.insert(u.clone());
            if u == v {
                break;
            }
        }
        self.components.push(component);
    }
}

/// Partition `g` into its strongly connected components using the algorithm
/// in [1](#1).
///
/// Every vertex lands in exactly one component.  Component order is
/// unspecified.
///
/// [<a name="1">1</a>]: Gabow, Harold N. (2000), "Path-based depth-first search for strong and biconnected components"
pub fn strongly_connected_components<G>(g: &G) -> Result<Vec<HashSet<G::Key>>>
    where G: Graph
{
    let mut state = Gabow{graph: g,
                          preorder: HashMap::with_capacity(g.vertex_count()),
                          assigned: HashSet::with_capacity(g.vertex_count()),
                          path: Vec::new(),
                          boundaries: Vec::new(),
                          components: Vec::new()};

    for v in g.keys() {
        if !state.preorder.contains_key(v) {
            state.visit(v)?;
        }
    }

    debug!(vertices = g.vertex_count(), components = state.components.len(),
           "strongly connected components");
    Ok(state.components)
}


// ----------------------------------------------------------------
// Shortest path

/// Find a path with the fewest edges from `start` to `end` by breadth-first
/// search.
///
/// Each discovered vertex records the vertex it was reached from; the first
/// time `end` is discovered the path is rebuilt by walking those links back
/// to `start`.  Returns `Ok(None)` if `end` is unreachable, and
/// `Ok(Some(vec![start]))` when `start == end`.
pub fn shortest_path<G>(g: &G, start: &G::Key, end: &G::Key) -> Result<Option<Vec<G::Key>>>
    where G: Graph
{
    if !g.contains_vertex(start) {
        return Err(Error::no_such_key(start));
    }
    if !g.contains_vertex(end) {
        return Err(Error::no_such_key(end));
    }
    if start == end {
        return Ok(Some(vec![start.clone()]));
    }

    // `start` is marked discovered up front, so a self-loop on it is ignored.
    let mut parent: HashMap<&G::Key, Option<&G::Key>> = HashMap::new();
    let mut queue = VecDeque::new();
    parent.insert(start, None);
    queue.push_back(start);

    while let Some(v) = queue.pop_front() {
        for w in g.successors(v)? {
            if let Entry::Vacant(slot) = parent.entry(w) {
                slot.insert(Some(v));
                if w == end {
                    let path = trace_back(&parent, w);
                    debug!(?start, ?end, edges = path.len() - 1, "shortest path");
                    return Ok(Some(path));
                }
                queue.push_back(w);
            }
        }
    }

    debug!(?start, ?end, explored = parent.len(), "no path");
    Ok(None)
}

/// Rebuild the path ending at `last` from breadth-first parent links.
fn trace_back<K: Clone + Eq + std::hash::Hash>(parent: &HashMap<&K, Option<&K>>, last: &K) -> Vec<K> {
    let mut path: Vec<K> = std::iter::successors(Some(last), |k| parent.get(k).copied().flatten())
        .cloned()
        .collect();
    path.reverse();
    path
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{AdjacencyList, AdjacencyMatrix};

    fn sorted<T: Ord>(set: impl IntoIterator<Item = T>) -> Vec<T> {
        let mut v: Vec<T> = set.into_iter().collect();
        v.sort();
        v
    }

    #[test]
    fn test_gabow_scc() {
        // (0)-->(1)-->(2)<->(3)
        // ↑ ↙↓    ↓   ↕
        // (4)-->(5)<->(6)<--(7)

        let mut g = AdjacencyList::new(0..8u8).unwrap();
        let edges = [(0, 1), (1, 4), (1, 5), (1, 2), (2, 3), (2, 6), (3, 2), (3, 7),
                     (4, 0), (4, 5), (5, 6), (6, 5), (7, 6), (7, 3)];
        g.add_edges(edges.iter().map(|(a, b)| (a, b))).unwrap();

        let mut components: Vec<Vec<u8>> =
            strongly_connected_components(&g).unwrap().into_iter().map(sorted).collect();
        components.sort();
        assert_eq!(vec![vec![0, 1, 4], vec![2, 3, 7], vec![5, 6]], components);

        for v in 0..8u8 {
            let single = sorted(strongly_connected_component(&g, &v).unwrap());
            assert!(components.contains(&single));
        }
    }

    #[test]
    fn cycle_with_tail() {
        let mut g = AdjacencyMatrix::new(['A', 'B', 'C', 'D']).unwrap();
        g.add_edges([(&'A', &'B'), (&'B', &'C'), (&'C', &'A'), (&'C', &'D')]).unwrap();

        assert_eq!(vec!['A', 'B', 'C'], sorted(g.strongly_connected_component(&'A').unwrap()));
        assert_eq!(vec!['D'], sorted(g.strongly_connected_component(&'D').unwrap()));
        assert_eq!(Some(vec!['A', 'B', 'C', 'D']), g.shortest_path(&'A', &'D').unwrap());
        assert_eq!(None, g.shortest_path(&'D', &'A').unwrap());
        assert_eq!(Some(vec!['A']), g.shortest_path(&'A', &'A').unwrap());
    }

    #[test]
    fn reachability_directions() {
        let mut g = AdjacencyList::new(1..=4).unwrap();
        g.add_edges([(&1, &2), (&2, &3)]).unwrap();

        assert_eq!(vec![&1, &2, &3], sorted(reachable(&g, &1, Direction::Outgoing).unwrap()));
        assert_eq!(vec![&1, &2, &3], sorted(reachable(&g, &3, Direction::Incoming).unwrap()));
        assert_eq!(vec![&4], sorted(reachable(&g, &4, Direction::Outgoing).unwrap()));
        assert!(reachable(&g, &5, Direction::Incoming).is_err());
    }

    #[test]
    fn self_loop_does_not_shortcut() {
        let mut g = AdjacencyList::new(['s', 't']).unwrap();
        g.add_edge(&'s', &'s').unwrap();
        assert_eq!(None, shortest_path(&g, &'s', &'t').unwrap());
        assert_eq!(Some(vec!['s']), shortest_path(&g, &'s', &'s').unwrap());
    }

    #[test]
    fn missing_endpoints() {
        let g = AdjacencyMatrix::new(["x"]).unwrap();
        assert_eq!(Err(Error::NoSuchKey { key: "\"y\"".to_string() }), shortest_path(&g, &"x", &"y"));
        assert!(shortest_path(&g, &"y", &"x").is_err());
        assert!(strongly_connected_component(&g, &"y").is_err());
    }

    #[test]
    fn long_chain_partition() {
        const N: u32 = 100_000;
        let mut g = AdjacencyList::new(0..N).unwrap();
        let edges: Vec<(u32, u32)> = (1..N).map(|v| (v - 1, v)).collect();
        g.add_edges(edges.iter().map(|(a, b)| (a, b))).unwrap();

        let components = strongly_connected_components(&g).unwrap();
        assert_eq!(N as usize, components.len());
        assert!(components.iter().all(|c| c.len() == 1));

        // Closing the chain into a ring merges everything.
        g.add_edge(&(N - 1), &0).unwrap();
        let components = strongly_connected_components(&g).unwrap();
        assert_eq!(1, components.len());
        assert_eq!(N as usize, components[0].len());
    }
}
