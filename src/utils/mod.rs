/*
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Ambient utilities: thread-pool selection and wall-clock measurement.

mod threadpool;
pub use threadpool::Threads;

pub mod timing;
