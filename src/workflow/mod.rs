pub mod precinct_flow;

pub use precinct_flow::PrecinctFlow;
