/*
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

/// Selects the number of worker threads for a concurrent visit.
///
/// [`Parallel`](crate::visits::Parallel) visits run one worker per thread
/// of the pool built by [`build`](Threads::build).
#[derive(Debug, Clone, Copy)]
pub enum Threads {
    /// Use the rayon default (the number of available CPUs).
    Default,
    /// Use the given number of threads.
    NumThreads(usize),
}

impl Threads {
    /// Builds a thread pool with the selected number of threads.
    pub fn build(self) -> rayon::ThreadPool {
        match self {
            Self::Default => rayon::ThreadPoolBuilder::new()
                .build()
                .expect("Should be able to build default threadpool"),
            Self::NumThreads(num_threads) => rayon::ThreadPoolBuilder::new()
                .num_threads(num_threads)
                .build()
                .unwrap_or_else(|_| {
                    panic!(
                        "Should be able to build custom threadpool with {} threads",
                        num_threads
                    )
                }),
        }
    }
}
