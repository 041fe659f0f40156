/*
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use crate::frontier::Frontier;
use crate::graph::Graph;
use crate::visits::{Event, Parallel, TraversalError};
use dsi_progress_logger::ProgressLog;
use std::sync::atomic::{AtomicUsize, Ordering};
use sux::bits::AtomicBitVec;

/// A concurrent breadth-first visit.
///
/// One worker per thread of the provided pool loops on a shared
/// first-in-first-out [`Frontier`]: it pops a node, enumerates its
/// successors, claims each unclaimed successor with an atomic test-and-set
/// on the shared marker array and pushes it, then retries. A worker
/// observing an empty frontier abstains and retries until the frontier is
/// [quiescent](Frontier::is_quiescent).
///
/// The claim is the sole synchronization point on each node: exactly one
/// worker observes the false→true transition, so each node is expanded at
/// most once. Claiming always happens before the node is pushed.
///
/// Since workers at the queue head may already expand nodes of the next
/// level while others still drain the current one, the visit keeps queue
/// *intent* but not level-synchronous order; only the final claimed set is
/// specified, and it equals the set of nodes reachable from the root.
///
/// # Examples
///
/// ```
/// use graph_visits::prelude::*;
/// use dsi_progress_logger::no_logging;
///
/// let graph = VecGraph::from_edges(5, [(0, 1), (0, 2), (1, 3)]);
/// let mut visit = breadth_first::Par::new(&graph);
/// let pool = Threads::NumThreads(2).build();
///
/// visit.visit(0, |_| (), &pool, no_logging![])?;
///
/// assert!((0..4).all(|node| visit.visited(node)));
/// assert!(!visit.visited(4));
/// # Ok::<(), graph_visits::visits::TraversalError>(())
/// ```
pub struct Par<'a, G: Graph> {
    graph: &'a G,
    visited: AtomicBitVec,
}

impl<'a, G: Graph> Par<'a, G> {
    /// Creates a new concurrent breadth-first visit.
    ///
    /// # Arguments
    /// * `graph`: an immutable reference to the graph to visit.
    pub fn new(graph: &'a G) -> Self {
        Self {
            graph,
            visited: AtomicBitVec::new(graph.num_nodes()),
        }
    }
}

impl<'a, G: Graph + Sync> Parallel for Par<'a, G> {
    fn visit<C: Fn(Event) + Sync>(
        &mut self,
        root: usize,
        callback: C,
        thread_pool: &rayon::ThreadPool,
        pl: &mut impl ProgressLog,
    ) -> Result<(), TraversalError> {
        let num_nodes = self.graph.num_nodes();
        if root >= num_nodes {
            return Err(TraversalError::RootOutOfBounds { root, num_nodes });
        }
        if self.visited.get(root, Ordering::Relaxed) {
            return Ok(());
        }

        callback(Event::Init { root });

        // The root is claimed and pushed before any worker launches, so
        // the seed claim on the all-false marker array always succeeds.
        let frontier = Frontier::fifo();
        self.visited.set(root, true, Ordering::Relaxed);
        callback(Event::Unknown {
            node: root,
            pred: root,
        });
        frontier.push(root);

        let expanded = AtomicUsize::new(0);
        let graph = self.graph;
        let visited = &self.visited;
        let frontier = &frontier;
        let callback = &callback;
        let expanded_ref = &expanded;

        thread_pool.broadcast(|_| loop {
            let Some(node) = frontier.try_pop() else {
                if frontier.is_quiescent() {
                    break;
                }
                // Nothing available right now, but another worker is still
                // expanding and may push: abstain and retry.
                std::thread::yield_now();
                continue;
            };

            for succ in graph.successors(node) {
                if !visited.swap(succ, true, Ordering::Relaxed) {
                    callback(Event::Unknown { node: succ, pred: node });
                    frontier.push(succ);
                } else {
                    callback(Event::Known { node: succ, pred: node });
                }
            }
            // Every successor discovered by this expansion has been
            // pushed: only now may the expansion stop counting toward
            // quiescence.
            frontier.finish();
            expanded_ref.fetch_add(1, Ordering::Relaxed);
        });

        pl.update_with_count(expanded.load(Ordering::Relaxed));
        callback(Event::Done { root });

        Ok(())
    }

    fn visited(&self, node: usize) -> bool {
        self.visited.get(node, Ordering::Relaxed)
    }

    fn reset(&mut self) {
        self.visited.fill(false, Ordering::Relaxed);
    }
}
