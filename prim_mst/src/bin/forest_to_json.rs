extern crate env_logger;
extern crate prim_mst;
extern crate serde_json;

fn main() -> std::io::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    let args: Vec<_> = std::env::args().collect();
    if args.len() < 2 {
        eprintln!("Usage: forest_to_json <graph file>");
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
    let summary = prim_mst::summary::summarize(&graph, &forest);
    let result = serde_json::ser::to_string(&summary).unwrap();
    println!("{}", result);
    Ok(())
}
