/*
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use crate::graph::Graph;
use crate::visits::{Event, Sequential, TraversalError};
use dsi_progress_logger::ProgressLog;
use std::collections::VecDeque;
use sux::bits::BitVec;

/// A sequential breadth-first visit.
///
/// The visit claims each node when it is discovered and expands it when it
/// is extracted from the queue, which is the same claim-then-expand
/// discipline used by the [concurrent variant](super::Par), but with a
/// single worker and thus a fully deterministic order.
///
/// # Examples
///
/// ```
/// use graph_visits::prelude::*;
/// use dsi_progress_logger::no_logging;
///
/// let graph = VecGraph::from_edges(5, [(0, 1), (0, 2), (1, 3), (2, 4)]);
/// let mut visit = breadth_first::Seq::new(&graph);
/// let mut order = Vec::new();
///
/// visit.visit(
///     0,
///     |event| {
///         if let Event::Unknown { node, .. } = event {
///             order.push(node);
///         }
///     },
///     no_logging![],
/// )?;
///
/// assert_eq!(order, vec![0, 1, 2, 3, 4]);
/// # Ok::<(), graph_visits::visits::TraversalError>(())
/// ```
pub struct Seq<'a, G: Graph> {
    graph: &'a G,
    visited: BitVec,
    queue: VecDeque<usize>,
}

impl<'a, G: Graph> Seq<'a, G> {
    /// Creates a new sequential breadth-first visit.
    ///
    /// # Arguments
    /// * `graph`: an immutable reference to the graph to visit.
    pub fn new(graph: &'a G) -> Self {
        Self {
            graph,
            visited: BitVec::new(graph.num_nodes()),
            queue: VecDeque::new(),
        }
    }
}

impl<'a, G: Graph> Sequential for Seq<'a, G> {
    fn visit<C: FnMut(Event)>(
        &mut self,
        root: usize,
        mut callback: C,
        pl: &mut impl ProgressLog,
    ) -> Result<(), TraversalError> {
        let num_nodes = self.graph.num_nodes();
        if root >= num_nodes {
            return Err(TraversalError::RootOutOfBounds { root, num_nodes });
        }
        if self.visited[root] {
            return Ok(());
        }

        callback(Event::Init { root });

        self.visited.set(root, true);
        callback(Event::Unknown {
            node: root,
            pred: root,
        });
        self.queue.push_back(root);

        while let Some(node) = self.queue.pop_front() {
            for succ in self.graph.successors(node) {
                if !self.visited[succ] {
                    self.visited.set(succ, true);
                    callback(Event::Unknown { node: succ, pred: node });
                    self.queue.push_back(succ);
                } else {
                    callback(Event::Known { node: succ, pred: node });
                }
            }
            pl.light_update();
        }

        callback(Event::Done { root });

        Ok(())
    }

    fn visited(&self, node: usize) -> bool {
        self.visited[node]
    }

    fn reset(&mut self) {
        self.queue.clear();
        self.visited.fill(false);
    }
}
