pub mod batch;
pub mod decoders;
pub mod graph;
pub mod timestamp;
