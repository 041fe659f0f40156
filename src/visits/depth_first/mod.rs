/*
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Depth-first visits.
//!
//! [`Seq`] is the deterministic single-worker baseline; [`Par`] shares a
//! last-in-first-out [frontier](crate::frontier::Frontier) among the
//! threads of a pool.
//!
//! Note that [`Par`] is *not* a strict recursive depth-first order: with
//! several workers expanding different branches concurrently, the
//! visitation order is an unspecified interleaving consistent only with "a
//! node is expanded only after being claimed". The correctness contract of
//! both visits is restricted to reachability completeness.

mod seq;
pub use seq::*;

mod par;
pub use par::*;
