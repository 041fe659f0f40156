/*
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Breadth-first visits.
//!
//! [`Seq`] is the deterministic single-worker baseline; [`Par`] shares a
//! first-in-first-out [frontier](crate::frontier::Frontier) among the
//! threads of a pool.
//!
//! Note that [`Par`] guarantees *frontier discipline*, not *level order*:
//! nodes are pushed in queue order, but concurrent workers pop and expand
//! them in an unspecified interleaving, so nodes at different distances
//! from the root may be expanded out of level order. The correctness
//! contract of both visits is restricted to reachability completeness.

mod seq;
pub use seq::*;

mod par;
pub use par::*;
