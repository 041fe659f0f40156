/*
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Wall-clock measurement for the benchmark harness.

use std::time::{Duration, Instant};

/// Runs a closure and returns its result together with the elapsed
/// wall-clock time.
pub fn timed<T>(f: impl FnOnce() -> T) -> (T, Duration) {
    let start = Instant::now();
    let result = f();
    (result, start.elapsed())
}

/// Returns the speedup ratio of a concurrent run over a sequential one,
/// that is, the sequential duration divided by the concurrent duration.
///
/// Returns 0.0 when the concurrent duration is zero. This guards the
/// division, it is not a meaningful speedup value.
pub fn speedup(sequential: Duration, concurrent: Duration) -> f64 {
    if concurrent.is_zero() {
        0.0
    } else {
        sequential.as_secs_f64() / concurrent.as_secs_f64()
    }
}
