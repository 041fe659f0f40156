/*
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use anyhow::Result;
use dsi_progress_logger::prelude::*;
use graph_visits::prelude::*;
use graph_visits::utils::timing::{speedup, timed};

/// By convention all visits start from node 0.
const START_NODE: usize = 0;

fn main() -> Result<()> {
    stderrlog::new()
        .verbosity(2)
        .timestamp(stderrlog::Timestamp::Second)
        .init()?;

    let mut args = std::env::args().skip(1);
    let num_nodes: usize = match args.next() {
        Some(arg) => arg.parse()?,
        None => 1_000_000,
    };
    let num_edges: usize = match args.next() {
        Some(arg) => arg.parse()?,
        None => 10_000_000,
    };
    let threads = match args.next() {
        Some(arg) => Threads::NumThreads(arg.parse()?),
        None => Threads::Default,
    };

    let mut pl = progress_logger![display_memory = true];

    pl.info(format_args!(
        "Building a random graph with {} nodes and up to {} edges...",
        num_nodes, num_edges
    ));
    let (graph, build_time) = timed(|| VecGraph::random(num_nodes, num_edges, &mut rand::rng()));
    pl.info(format_args!(
        "Graph built in {:.3} seconds ({} arcs)",
        build_time.as_secs_f64(),
        graph.num_arcs()
    ));

    let thread_pool = threads.build();
    pl.info(format_args!(
        "Visiting from node {} with {} workers",
        START_NODE,
        thread_pool.current_num_threads()
    ));

    let mut visit = depth_first::Seq::new(&graph);
    let (result, time_seq_dfs) = timed(|| visit.visit(START_NODE, |_| (), no_logging![]));
    result?;
    pl.info(format_args!(
        "Time required for DFS sequential is: {:.6} seconds",
        time_seq_dfs.as_secs_f64()
    ));

    let mut visit = depth_first::Par::new(&graph);
    let (result, time_par_dfs) =
        timed(|| visit.visit(START_NODE, |_| (), &thread_pool, no_logging![]));
    result?;
    pl.info(format_args!(
        "Time required for DFS concurrent is: {:.6} seconds",
        time_par_dfs.as_secs_f64()
    ));

    let mut visit = breadth_first::Seq::new(&graph);
    let (result, time_seq_bfs) = timed(|| visit.visit(START_NODE, |_| (), no_logging![]));
    result?;
    pl.info(format_args!(
        "Time required for BFS sequential is: {:.6} seconds",
        time_seq_bfs.as_secs_f64()
    ));

    let mut visit = breadth_first::Par::new(&graph);
    let (result, time_par_bfs) =
        timed(|| visit.visit(START_NODE, |_| (), &thread_pool, no_logging![]));
    result?;
    pl.info(format_args!(
        "Time required for BFS concurrent is: {:.6} seconds",
        time_par_bfs.as_secs_f64()
    ));

    pl.info(format_args!(
        "DFS speedup: {:.3}",
        speedup(time_seq_dfs, time_par_dfs)
    ));
    pl.info(format_args!(
        "BFS speedup: {:.3}",
        speedup(time_seq_bfs, time_par_bfs)
    ));

    Ok(())
}
