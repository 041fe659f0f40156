/*
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use dsi_progress_logger::prelude::*;
use graph_visits::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Computes the set of nodes reachable from `root` with a plain flood
/// fill, independently of the visit engines under test.
fn reachable_set(graph: &VecGraph, root: usize) -> Vec<bool> {
    let mut reachable = vec![false; graph.num_nodes()];
    let mut stack = vec![root];
    reachable[root] = true;

    while let Some(node) = stack.pop() {
        for succ in graph.successors(node) {
            if !reachable[succ] {
                reachable[succ] = true;
                stack.push(succ);
            }
        }
    }

    reachable
}

fn seq_marked_set(graph: &VecGraph, root: usize) -> Vec<bool> {
    let mut visit = breadth_first::Seq::new(graph);
    visit.visit(root, |_| (), no_logging![]).unwrap();
    (0..graph.num_nodes()).map(|node| visit.visited(node)).collect()
}

fn par_marked_set(graph: &VecGraph, root: usize, num_threads: usize) -> Vec<bool> {
    let mut visit = breadth_first::Par::new(graph);
    let pool = Threads::NumThreads(num_threads).build();
    visit.visit(root, |_| (), &pool, no_logging![]).unwrap();
    (0..graph.num_nodes()).map(|node| visit.visited(node)).collect()
}

#[test]
fn test_seq_marks_exactly_the_reachable_set() {
    let mut rng = StdRng::seed_from_u64(0);
    let graph = VecGraph::random(200, 600, &mut rng);

    assert_eq!(seq_marked_set(&graph, 0), reachable_set(&graph, 0));
}

#[test]
fn test_par_marks_exactly_the_reachable_set() {
    let mut rng = StdRng::seed_from_u64(1);
    // Sparse on purpose: several connected components.
    let graph = VecGraph::random(2000, 3000, &mut rng);

    assert_eq!(par_marked_set(&graph, 0, 8), reachable_set(&graph, 0));
}

#[test]
fn test_par_matches_seq_on_random_graphs() {
    for seed in 0..8 {
        let mut rng = StdRng::seed_from_u64(seed);
        let graph = VecGraph::random(500, 1000, &mut rng);

        assert_eq!(
            par_marked_set(&graph, 0, 4),
            seq_marked_set(&graph, 0),
            "marked sets differ on seed {}",
            seed
        );
    }
}

#[test]
fn test_seq_level_order() {
    let graph = VecGraph::from_edges(6, [(0, 1), (0, 2), (1, 3), (2, 4), (3, 5)]);
    let mut visit = breadth_first::Seq::new(&graph);
    let mut order = Vec::new();

    visit
        .visit(
            0,
            |event| {
                if let Event::Unknown { node, .. } = event {
                    order.push(node);
                }
            },
            no_logging![],
        )
        .unwrap();

    // The single-worker queue yields the classical level order.
    assert_eq!(order, vec![0, 1, 2, 3, 4, 5]);
}

#[test]
fn test_disconnected_graph() {
    // Edges only among {0, 1, 2}: a visit from 0 must leave 3..=9 alone.
    let graph = VecGraph::from_edges(10, [(0, 1), (1, 2)]);
    let expected: Vec<bool> = (0..10).map(|node| node < 3).collect();

    assert_eq!(seq_marked_set(&graph, 0), expected);
    assert_eq!(par_marked_set(&graph, 0, 4), expected);
}

#[test]
fn test_single_node_graph() {
    let graph = VecGraph::from_edges(1, []);

    assert_eq!(seq_marked_set(&graph, 0), vec![true]);
    assert_eq!(par_marked_set(&graph, 0, 4), vec![true]);
}

#[test]
fn test_each_node_claimed_at_most_once() {
    let mut rng = StdRng::seed_from_u64(2);
    let graph = VecGraph::random(1000, 5000, &mut rng);
    let claims: Vec<AtomicUsize> = (0..graph.num_nodes()).map(|_| AtomicUsize::new(0)).collect();

    let mut visit = breadth_first::Par::new(&graph);
    let pool = Threads::NumThreads(8).build();
    visit
        .visit(
            0,
            |event| {
                if let Event::Unknown { node, .. } = event {
                    claims[node].fetch_add(1, Ordering::Relaxed);
                }
            },
            &pool,
            no_logging![],
        )
        .unwrap();

    let reachable = reachable_set(&graph, 0);
    for node in 0..graph.num_nodes() {
        let claimed = claims[node].load(Ordering::Relaxed);
        assert!(claimed <= 1, "node {} claimed {} times", node, claimed);
        assert_eq!(claimed == 1, reachable[node]);
    }
}

#[test]
fn test_rerun_after_reset_yields_the_same_marked_set() {
    let mut rng = StdRng::seed_from_u64(3);
    let graph = VecGraph::random(800, 2400, &mut rng);
    let pool = Threads::NumThreads(8).build();

    let mut visit = breadth_first::Par::new(&graph);
    visit.visit(0, |_| (), &pool, no_logging![]).unwrap();
    let first: Vec<bool> = (0..graph.num_nodes()).map(|node| visit.visited(node)).collect();

    visit.reset();
    assert!((0..graph.num_nodes()).all(|node| !visit.visited(node)));

    visit.visit(0, |_| (), &pool, no_logging![]).unwrap();
    let second: Vec<bool> = (0..graph.num_nodes()).map(|node| visit.visited(node)).collect();

    assert_eq!(first, second);
}

#[test]
fn test_visiting_an_already_visited_root_is_a_noop() {
    let graph = VecGraph::from_edges(3, [(0, 1), (1, 2)]);
    let pool = Threads::NumThreads(2).build();
    let mut visit = breadth_first::Par::new(&graph);

    visit.visit(0, |_| (), &pool, no_logging![]).unwrap();

    let events = AtomicUsize::new(0);
    visit
        .visit(
            1,
            |_| {
                events.fetch_add(1, Ordering::Relaxed);
            },
            &pool,
            no_logging![],
        )
        .unwrap();

    assert_eq!(events.load(Ordering::Relaxed), 0);
}

#[test]
fn test_root_out_of_bounds() {
    let graph = VecGraph::from_edges(3, [(0, 1)]);
    let pool = Threads::NumThreads(2).build();

    let mut visit = breadth_first::Seq::new(&graph);
    assert_eq!(
        visit.visit(3, |_| (), no_logging![]),
        Err(TraversalError::RootOutOfBounds {
            root: 3,
            num_nodes: 3
        })
    );

    let mut visit = breadth_first::Par::new(&graph);
    assert_eq!(
        visit.visit(10, |_| (), &pool, no_logging![]),
        Err(TraversalError::RootOutOfBounds {
            root: 10,
            num_nodes: 3
        })
    );
}

#[test]
fn test_termination_with_many_more_workers_than_average_degree() {
    let mut rng = StdRng::seed_from_u64(4);
    // Average degree about 4, visited by 32 workers.
    let graph = VecGraph::random(3000, 6000, &mut rng);

    assert_eq!(par_marked_set(&graph, 0, 32), reachable_set(&graph, 0));
}
