pub mod graph;
pub mod tale;
