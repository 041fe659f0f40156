/*
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! The graph store: a fixed, undirected adjacency structure.
//!
//! Graphs are immutable once built and shared read-only by all visit
//! workers, so successor enumeration needs no locking.

use rand::Rng;

/// A graph with random access to the successors of each node.
///
/// Nodes are dense integer indices in `[0, num_nodes)`. All visit engines
/// are generic over this trait.
pub trait Graph {
    /// The enumeration of the successors of a node.
    type Successors<'a>: Iterator<Item = usize>
    where
        Self: 'a;

    /// Returns the number of nodes in the graph.
    fn num_nodes(&self) -> usize;

    /// Returns the successors of a node.
    ///
    /// # Panics
    ///
    /// May panic if `node` is not a valid index.
    fn successors(&self, node: usize) -> Self::Successors<'_>;

    /// Returns the number of successors of a node.
    fn degree(&self, node: usize) -> usize;
}

/// An undirected multigraph stored as a vector of adjacency lists.
///
/// Every edge `{u, v}` with `u != v` appears in both adjacency lists.
/// Duplicate edges between the same pair of nodes are kept as parallel
/// entries; visit correctness does not depend on adjacency lists being
/// duplicate-free. Self-loop samples are silently discarded.
#[derive(Debug, Clone)]
pub struct VecGraph {
    succ: Vec<Vec<usize>>,
}

impl VecGraph {
    /// Builds a random undirected graph by sampling `num_edges` endpoint
    /// pairs uniformly at random.
    ///
    /// Samples with equal endpoints are discarded and do not count toward
    /// the edge budget, so the resulting graph may have slightly fewer than
    /// `num_edges` edges.
    ///
    /// # Arguments
    /// * `num_nodes`: the number of nodes.
    /// * `num_edges`: the number of endpoint pairs to sample.
    /// * `rng`: the random number generator supplying the samples.
    pub fn random(num_nodes: usize, num_edges: usize, rng: &mut impl Rng) -> Self {
        let mut succ = vec![Vec::new(); num_nodes];

        for _ in 0..num_edges {
            let u = rng.random_range(0..num_nodes);
            let v = rng.random_range(0..num_nodes);

            if u != v {
                succ[u].push(v);
                succ[v].push(u);
            }
        }

        Self { succ }
    }

    /// Builds an undirected graph from an explicit edge list.
    ///
    /// Each edge `(u, v)` is inserted in both directions; edges with
    /// `u == v` are discarded like self-loop samples in [`random`](Self::random).
    ///
    /// # Panics
    ///
    /// Panics if an endpoint is not smaller than `num_nodes`.
    pub fn from_edges(num_nodes: usize, edges: impl IntoIterator<Item = (usize, usize)>) -> Self {
        let mut succ = vec![Vec::new(); num_nodes];

        for (u, v) in edges {
            assert!(
                u < num_nodes && v < num_nodes,
                "edge ({}, {}) out of bounds for a graph with {} nodes",
                u,
                v,
                num_nodes
            );
            if u != v {
                succ[u].push(v);
                succ[v].push(u);
            }
        }

        Self { succ }
    }

    /// Returns the number of arcs, that is, twice the number of accepted
    /// edges.
    pub fn num_arcs(&self) -> usize {
        self.succ.iter().map(Vec::len).sum()
    }
}

impl Graph for VecGraph {
    type Successors<'a> = std::iter::Copied<std::slice::Iter<'a, usize>>;

    fn num_nodes(&self) -> usize {
        self.succ.len()
    }

    fn successors(&self, node: usize) -> Self::Successors<'_> {
        self.succ[node].iter().copied()
    }

    fn degree(&self, node: usize) -> usize {
        self.succ[node].len()
    }
}
