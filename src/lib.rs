/*
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Sequential and concurrent visits on random undirected graphs.
//!
//! The crate builds a fixed, read-only adjacency structure
//! ([`graph::VecGraph`]) and explores it with four engines: sequential and
//! concurrent [breadth-first](visits::breadth_first) and
//! [depth-first](visits::depth_first) visits. The concurrent engines share a
//! per-vertex visited marker and a mutex-guarded [frontier](frontier::Frontier)
//! among a pool of workers, and terminate on quiescence, that is, when the
//! frontier is empty and no worker is mid-expansion.
//!
//! The binary harness runs all four engines on the same graph and reports
//! wall-clock durations and speedup ratios.

pub mod frontier;
pub mod graph;
pub mod utils;
pub mod visits;

/// Use `use graph_visits::prelude::*;` to import the graph types, the visit
/// modules and all traits.
pub mod prelude {
    pub use crate::frontier::Frontier;
    pub use crate::graph::{Graph, VecGraph};
    pub use crate::utils::Threads;
    pub use crate::visits::breadth_first;
    pub use crate::visits::depth_first;
    pub use crate::visits::{Event, Parallel, Sequential, TraversalError};
}
