extern crate env_logger;
extern crate prim_mst;
use std::io::{BufWriter, Write};

fn main() -> std::io::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    let args: Vec<_> = std::env::args().collect();
    if args.len() < 2 {
        eprintln!("Usage: prim_mst <graph file>");
        std::process::exit(1);
    }
    let input = std::fs::read_to_string(&args[1])?;
    let graph = match prim_mst::graph::parse(&input) {
        Ok(graph) => graph,
        Err(why) => {
            eprintln!("Error: {}", why);
            std::process::exit(1);
        }
    };
    let forest = prim_mst::mst::spanning_forest(&graph);
    let stdout = std::io::stdout();
    let mut stdout = BufWriter::new(stdout.lock());
    for edge in forest.edges() {
        writeln!(&mut stdout, "{:04}-{:04} ({:.5})", edge.src, edge.dst, edge.weight)?;
    }
    writeln!(&mut stdout, "{:.5}", forest.total_weight())?;
    Ok(())
}
