#[macro_use]
extern crate log;
extern crate env_logger;
extern crate index_min_pq;
#[macro_use]
extern crate serde;
extern crate serde_json;
pub mod graph;
pub mod mst;
pub mod summary;
pub use graph::{Edge, Graph, ParseError};
pub use mst::{spanning_forest, SpanningForest};
