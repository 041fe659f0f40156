/*
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! The shared frontier: a worklist of claimed-but-unexpanded nodes.
//!
//! A [`Frontier`] is a single deque guarded by one mutex, popped from the
//! back ([LIFO](Frontier::lifo)) or from the front ([FIFO](Frontier::fifo)).
//! Under concurrent expansion the discipline is an intent, not a strict
//! global order: workers interleave pops and pushes nondeterministically.
//!
//! Besides the worklist itself, the frontier tracks how many popped nodes
//! are still being expanded, which makes it possible to distinguish "no
//! node available right now" from "the visit is over": the visit is over
//! only when the frontier is [quiescent](Frontier::is_quiescent), that is,
//! when the deque is empty *and* no expansion is in flight. Checking
//! emptiness alone would race against a worker about to push.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Discipline {
    Lifo,
    Fifo,
}

/// A mutex-guarded worklist of nodes shared by the visit workers.
#[derive(Debug)]
pub struct Frontier {
    nodes: Mutex<VecDeque<usize>>,
    /// Number of nodes popped but whose expansion has not yet
    /// [finished](Frontier::finish). Incremented under the deque lock,
    /// decremented with release ordering after the last push of the
    /// expansion.
    in_flight: AtomicUsize,
    discipline: Discipline,
}

impl Frontier {
    /// Creates an empty last-in-first-out frontier (depth-first intent).
    pub fn lifo() -> Self {
        Self::new(Discipline::Lifo)
    }

    /// Creates an empty first-in-first-out frontier (breadth-first intent).
    pub fn fifo() -> Self {
        Self::new(Discipline::Fifo)
    }

    fn new(discipline: Discipline) -> Self {
        Self {
            nodes: Mutex::new(VecDeque::new()),
            in_flight: AtomicUsize::new(0),
            discipline,
        }
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, VecDeque<usize>> {
        self.nodes.lock().expect("frontier mutex poisoned")
    }

    /// Appends a node to the frontier.
    pub fn push(&self, node: usize) {
        self.lock().push_back(node);
    }

    /// Removes a node from the frontier, if one is available.
    ///
    /// A successful pop marks an expansion as in flight: the caller must
    /// invoke [`finish`](Frontier::finish) exactly once after pushing all
    /// the nodes discovered while expanding the returned node, or the
    /// frontier will never become quiescent.
    ///
    /// `None` means that no node is available *right now*: another worker
    /// may still push, so it must not be taken as a termination signal.
    pub fn try_pop(&self) -> Option<usize> {
        let mut nodes = self.lock();
        let node = match self.discipline {
            Discipline::Lifo => nodes.pop_back(),
            Discipline::Fifo => nodes.pop_front(),
        };
        if node.is_some() {
            // Under the lock, so a concurrent quiescence check cannot see
            // the deque shrink before the expansion is accounted for.
            self.in_flight.fetch_add(1, Ordering::Relaxed);
        }
        node
    }

    /// Marks the expansion of a previously popped node as complete.
    ///
    /// Must be called after all pushes of that expansion.
    pub fn finish(&self) {
        let prev = self.in_flight.fetch_sub(1, Ordering::Release);
        debug_assert!(prev > 0, "finish without a matching pop");
    }

    /// Returns true if the frontier is empty and no expansion is in
    /// flight.
    ///
    /// Once this returns true no further node can ever appear: pushes only
    /// happen during an in-flight expansion, and every in-flight expansion
    /// pushes before [`finish`](Frontier::finish).
    pub fn is_quiescent(&self) -> bool {
        let nodes = self.lock();
        nodes.is_empty() && self.in_flight.load(Ordering::Acquire) == 0
    }

    /// Returns the number of nodes currently in the frontier.
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// Returns true if no node is currently in the frontier.
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }
}
