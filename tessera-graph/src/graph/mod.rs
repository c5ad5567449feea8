pub mod history;
pub mod stable_graph;
