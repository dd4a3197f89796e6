//! Behaviour shared by every graph representation.  The same suite is
//! instantiated once per implementation.

use std::collections::HashSet;

use itertools::Itertools;
use keygraph::graph::{AdjacencyList, AdjacencyMatrix, Graph};
use keygraph::Error;
use pretty_assertions::assert_eq;

fn set<K: Clone + Eq + std::hash::Hash>(keys: &[K]) -> HashSet<K> {
    keys.iter().cloned().collect()
}

/// Check that `path` walks existing edges from `start` to `end`.
fn assert_valid_path<G: Graph>(g: &G, path: &[G::Key], start: &G::Key, end: &G::Key) {
    assert_eq!(Some(start), path.first());
    assert_eq!(Some(end), path.last());
    for (a, b) in path.iter().tuple_windows() {
        assert!(g.contains_edge(a, b).unwrap(), "{:?} -> {:?} is not an edge", a, b);
    }
}

macro_rules! graph_suite {
    ($name: ident, $G: ident) => {
        mod $name {
            use super::*;
            use pretty_assertions::assert_eq;

            type G<K> = $G<K>;

            /// {A,B,C,D} with the cycle A→B→C→A and the tail C→D.
            fn cycle_with_tail() -> G<char> {
                let mut g = G::new(['A', 'B', 'C', 'D']).unwrap();
                g.add_edges([(&'A', &'B'), (&'B', &'C'), (&'C', &'A'), (&'C', &'D')]).unwrap();
                g
            }

            #[test]
            fn cycle_with_tail_scenario() {
                let g = cycle_with_tail();
                assert_eq!(4, g.vertex_count());
                assert_eq!(4, g.edge_count());
                assert_eq!(set(&['A', 'B', 'C']), g.strongly_connected_component(&'A').unwrap());
                assert_eq!(Some(vec!['A', 'B', 'C', 'D']), g.shortest_path(&'A', &'D').unwrap());
                assert_eq!(None, g.shortest_path(&'D', &'A').unwrap());
                assert_eq!(Some(vec!['A']), g.shortest_path(&'A', &'A').unwrap());
            }

            #[test]
            fn add_contains_remove() {
                let mut g = G::new(1..=3).unwrap();
                assert!(!g.contains_edge(&1, &2).unwrap());

                assert!(g.add_edge(&1, &2).unwrap());
                assert!(g.contains_edge(&1, &2).unwrap());
                assert!(!g.contains_edge(&2, &1).unwrap());
                assert!(g.successor_set(&1).unwrap().contains(&2));
                assert!(g.predecessor_set(&2).unwrap().contains(&1));

                assert!(!g.add_edge(&1, &2).unwrap());
                assert_eq!(1, g.edge_count());

                assert!(!g.remove_edge(&2, &1).unwrap());
                assert!(g.remove_edge(&1, &2).unwrap());
                assert!(!g.contains_edge(&1, &2).unwrap());
                assert!(!g.remove_edge(&1, &2).unwrap());
                assert_eq!(0, g.edge_count());
                assert!(g.predecessor_set(&2).unwrap().is_empty());
            }

            #[test]
            fn self_loops_are_edges() {
                let mut g = G::new(["s", "t"]).unwrap();
                assert!(g.add_edge(&"s", &"s").unwrap());
                assert!(g.contains_edge(&"s", &"s").unwrap());
                assert_eq!(1, g.out_degree(&"s").unwrap());
                assert_eq!(1, g.in_degree(&"s").unwrap());
                assert_eq!(set(&["s"]), g.strongly_connected_component(&"s").unwrap());
                assert_eq!(None, g.shortest_path(&"s", &"t").unwrap());
            }

            #[test]
            fn duplicate_keys_collapse() {
                let g = G::new(vec!["x", "y", "x", "x"]).unwrap();
                assert_eq!(2, g.vertex_count());
                assert_eq!(set(&["x", "y"]), g.key_set());
                assert_eq!(2, g.keys().count());
            }

            #[test]
            fn unknown_keys_are_rejected() {
                let mut g = cycle_with_tail();
                let missing = || Error::NoSuchKey { key: "'Z'".to_string() };

                assert!(!g.contains_vertex(&'Z'));
                assert_eq!(Err(missing()), g.add_edge(&'A', &'Z'));
                assert_eq!(Err(missing()), g.add_edge(&'Z', &'A'));
                assert_eq!(Err(missing()), g.contains_edge(&'Z', &'A'));
                assert_eq!(Err(missing()), g.remove_edge(&'A', &'Z'));
                assert_eq!(Err(missing()), g.out_degree(&'Z'));
                assert_eq!(Err(missing()), g.in_degree(&'Z'));
                assert_eq!(Err(missing()), g.successor_set(&'Z'));
                assert_eq!(Err(missing()), g.predecessor_set(&'Z'));
                assert!(g.successors(&'Z').is_err());
                assert!(g.predecessors(&'Z').is_err());
                assert_eq!(Err(missing()), g.strongly_connected_component(&'Z'));
                assert_eq!(Err(missing()), g.shortest_path(&'Z', &'A'));
                assert_eq!(Err(missing()), g.shortest_path(&'A', &'Z'));
                assert_eq!(4, g.edge_count());
            }

            #[test]
            fn bulk_insert_is_all_or_nothing() {
                let mut g = cycle_with_tail();
                assert_eq!(Err(Error::NoSuchKey { key: "'Q'".to_string() }),
                           g.add_edges([(&'D', &'A'), (&'B', &'Q')]));
                assert!(!g.contains_edge(&'D', &'A').unwrap());
                assert_eq!(Ok(1), g.add_edges([(&'D', &'A'), (&'A', &'B')]));
                assert_eq!(set(&['A', 'B', 'C', 'D']), g.strongly_connected_component(&'D').unwrap());
            }

            #[test]
            fn degrees_match_neighbour_sets() {
                let mut g = G::new(0..6).unwrap();
                g.add_edges([(&0, &1), (&0, &2), (&0, &3), (&3, &0), (&2, &2), (&5, &2), (&4, &2)]).unwrap();
                for k in 0..6 {
                    assert_eq!(g.out_degree(&k).unwrap(), g.successor_set(&k).unwrap().len());
                    assert_eq!(g.in_degree(&k).unwrap(), g.predecessor_set(&k).unwrap().len());
                    assert_eq!(g.out_degree(&k).unwrap(), g.successors(&k).unwrap().count());
                    assert_eq!(g.in_degree(&k).unwrap(), g.predecessors(&k).unwrap().count());
                }
                assert_eq!(4, g.in_degree(&2).unwrap());
                assert_eq!(set(&[0, 2, 4, 5]), g.predecessor_set(&2).unwrap());
            }

            #[test]
            fn iterators_do_not_restart() {
                let g = cycle_with_tail();
                let mut succ = g.successors(&'C').unwrap();
                let mut seen: Vec<char> = succ.by_ref().copied().collect();
                seen.sort();
                assert_eq!(vec!['A', 'D'], seen);
                assert_eq!(None, succ.next());
                assert_eq!(None, succ.next());

                let mut pred = g.predecessors(&'A').unwrap();
                assert_eq!(Some(&'C'), pred.next());
                assert_eq!(None, pred.next());
                assert_eq!(None, pred.next());
            }

            #[test]
            fn isolated_and_disconnected_vertices() {
                let mut g = G::new(0..5).unwrap();
                g.add_edges([(&0, &1), (&1, &0), (&2, &3)]).unwrap();
                assert_eq!(None, g.shortest_path(&0, &4).unwrap());
                assert_eq!(None, g.shortest_path(&4, &0).unwrap());
                assert_eq!(None, g.shortest_path(&0, &3).unwrap());
                assert_eq!(Some(vec![2, 3]), g.shortest_path(&2, &3).unwrap());
                assert_eq!(set(&[4]), g.strongly_connected_component(&4).unwrap());
                assert_eq!(set(&[0, 1]), g.strongly_connected_component(&1).unwrap());
            }

            #[test]
            fn shortest_of_several_paths() {
                // 0 → 1 → 2 → 3 → 6
                // 0 → 4 → 5 → 6
                // 0 → 4 → 6
                let mut g = G::new(0..7).unwrap();
                g.add_edges([(&0, &1), (&1, &2), (&2, &3), (&3, &6),
                             (&0, &4), (&4, &5), (&5, &6), (&4, &6)]).unwrap();
                assert_eq!(Some(vec![0, 4, 6]), g.shortest_path(&0, &6).unwrap());

                // Two equally short routes: only the length is fixed.
                g.add_edge(&1, &6).unwrap();
                let path = g.shortest_path(&0, &6).unwrap().unwrap();
                assert_eq!(3, path.len());
                assert_valid_path(&g, &path, &0, &6);
            }

            #[test]
            fn scc_partition_covers_every_vertex() {
                // Two cycles joined one way, plus a lone vertex.
                let mut g = G::new("abcdefg".chars()).unwrap();
                g.add_edges([(&'a', &'b'), (&'b', &'c'), (&'c', &'a'), (&'c', &'d'),
                             (&'d', &'e'), (&'e', &'f'), (&'f', &'d'), (&'f', &'f')]).unwrap();

                let components = g.strongly_connected_components().unwrap();
                assert_eq!(3, components.len());
                assert_eq!(7, components.iter().map(HashSet::len).sum::<usize>());
                for component in &components {
                    for k in component {
                        assert_eq!(component, &g.strongly_connected_component(k).unwrap());
                    }
                }
            }

            #[test]
            fn long_chain_partition() {
                const N: u32 = 20_000;
                let mut g = G::new(0..N).unwrap();
                let edges: Vec<(u32, u32)> = (1..N).map(|v| (v - 1, v)).collect();
                g.add_edges(edges.iter().map(|(a, b)| (a, b))).unwrap();

                let components = g.strongly_connected_components().unwrap();
                assert_eq!(N as usize, components.len());
                assert!(components.iter().all(|c| c.len() == 1));

                g.add_edge(&(N - 1), &0).unwrap();
                let components = g.strongly_connected_components().unwrap();
                assert_eq!(1, components.len());
                assert_eq!(Some(vec![0, 1, 2]), g.shortest_path(&0, &2).unwrap());
            }

            #[test]
            fn empty_graph() {
                let g = G::<u32>::new(Vec::new()).unwrap();
                assert_eq!(0, g.vertex_count());
                assert_eq!(0, g.edge_count());
                assert!(g.key_set().is_empty());
                assert!(g.strongly_connected_components().unwrap().is_empty());
            }
        }
    };
}

graph_suite!(adjacency_list, AdjacencyList);
graph_suite!(adjacency_matrix, AdjacencyMatrix);
