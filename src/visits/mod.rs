/*
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Visits on graphs.
//!
//! Each visit engine is generic over a [`Graph`](crate::graph::Graph) and
//! reports what it sees through a callback receiving [`Event`] values. The
//! callback is called once when the visit starts, exactly once per node the
//! first time the node is claimed, every time an already-claimed node is
//! encountered again, and once when the visit completes.
//!
//! Sequential engines implement [`Sequential`]; concurrent engines
//! implement [`Parallel`] and additionally take the [`rayon::ThreadPool`]
//! whose threads act as visit workers.

pub mod breadth_first;
pub mod depth_first;

use dsi_progress_logger::ProgressLog;

/// Types of callback events generated during a visit.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub enum Event {
    /// The visit starts from the given root. This event should be used to
    /// set up state at the start of the visit.
    Init {
        /// The root of the visit.
        root: usize,
    },
    /// The node has been claimed for the first time: we are traversing a
    /// new tree arc, unless `node` and `pred` are both equal to the root.
    ///
    /// Under any interleaving of concurrent workers this event is
    /// generated at most once per node.
    Unknown {
        /// The claimed node.
        node: usize,
        /// The node whose expansion discovered it.
        pred: usize,
    },
    /// The node had already been claimed: we are traversing a back arc, a
    /// forward arc, or a cross arc.
    ///
    /// Note how in concurrent visits this does not guarantee that the
    /// callback with [`Unknown`](`Event::Unknown`) has already returned.
    Known {
        /// The already-claimed node.
        node: usize,
        /// The node whose expansion encountered it.
        pred: usize,
    },
    /// The visit from the given root is complete: every node reachable
    /// from the root has been claimed and expanded.
    Done {
        /// The root of the visit.
        root: usize,
    },
}

/// Errors that stop a visit before it starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum TraversalError {
    /// The start node is not a valid index for the graph being visited.
    #[error("start node {root} out of bounds for a graph with {num_nodes} nodes")]
    RootOutOfBounds {
        /// The offending start node.
        root: usize,
        /// The number of nodes of the graph.
        num_nodes: usize,
    },
}

/// A sequential visit.
///
/// The visit order of a sequential engine is fully deterministic.
pub trait Sequential {
    /// Visits the graph from the specified node.
    ///
    /// Nodes already claimed by a previous visit on the same engine are
    /// skipped; call [`reset`](Sequential::reset) first to start from a
    /// blank marker array.
    ///
    /// # Arguments
    /// * `root`: the node to start the visit from.
    /// * `callback`: the callback function.
    /// * `pl`: a progress logger. Use
    ///   [`no_logging![]`](dsi_progress_logger::no_logging) to disable
    ///   logging.
    fn visit<C: FnMut(Event)>(
        &mut self,
        root: usize,
        callback: C,
        pl: &mut impl ProgressLog,
    ) -> Result<(), TraversalError>;

    /// Returns true if the node has been claimed by a visit since the last
    /// [`reset`](Sequential::reset).
    fn visited(&self, node: usize) -> bool;

    /// Resets the visit status, making it possible to reuse the engine.
    fn reset(&mut self);
}

/// A concurrent visit.
///
/// The visit is performed by one worker per thread of the provided pool.
/// The visitation order is an unspecified interleaving: the only guarantee
/// is that a node's successors are enumerated only after the node has been
/// claimed.
pub trait Parallel {
    /// Visits the graph from the specified node using the threads of
    /// `thread_pool` as workers.
    ///
    /// Nodes already claimed by a previous visit on the same engine are
    /// skipped; call [`reset`](Parallel::reset) first to start from a
    /// blank marker array.
    ///
    /// # Arguments
    /// * `root`: the node to start the visit from.
    /// * `callback`: the callback function. It may be called concurrently
    ///   from all workers.
    /// * `thread_pool`: the pool providing the visit workers.
    /// * `pl`: a progress logger. Use
    ///   [`no_logging![]`](dsi_progress_logger::no_logging) to disable
    ///   logging.
    fn visit<C: Fn(Event) + Sync>(
        &mut self,
        root: usize,
        callback: C,
        thread_pool: &rayon::ThreadPool,
        pl: &mut impl ProgressLog,
    ) -> Result<(), TraversalError>;

    /// Returns true if the node has been claimed by a visit since the last
    /// [`reset`](Parallel::reset).
    fn visited(&self, node: usize) -> bool;

    /// Resets the visit status, making it possible to reuse the engine.
    fn reset(&mut self);
}
