//! Build the 7-vertex sample graph and print its traversals and paths.
//!
//! Run with `RUST_LOG=debug cargo run --example sample_graph` to see the
//! library's log output.

use digraph::*;

fn main() -> GraphResult<()> {
    env_logger::init();

    let mut builder = GraphBuilder::new();
    builder.vertices(1..=7).edges([
        (5, 3),
        (6, 3),
        (7, 1),
        (4, 7),
        (1, 2),
        (7, 6),
        (2, 4),
        (3, 5),
        (2, 3),
        (4, 6),
    ]);
    let graph = builder.build()?;

    println!(
        "Graph with {} vertices and {} edges",
        graph.vertex_count(),
        graph.edge_count()
    );
    let mut ids: Vec<u32> = graph.vertices().copied().collect();
    ids.sort_unstable();
    for id in &ids {
        let mut neighbors: Vec<u32> = graph.get_neighbors(id)?.iter().copied().collect();
        neighbors.sort_unstable();
        println!("  {} -> {:?}", id, neighbors);
    }

    println!("bft(1):           {:?}", graph.bft(&1)?);
    println!("dft(1):           {:?}", graph.dft(&1)?);
    println!("dft_recursive(1): {:?}", graph.dft_recursive(&1)?);
    println!("bfs(1, 6):           {:?}", graph.bfs(&1, &6)?);
    println!("dfs(1, 6):           {:?}", graph.dfs(&1, &6)?);
    println!("dfs_recursive(1, 6): {:?}", graph.dfs_recursive(&1, &6)?);

    Ok(())
}
