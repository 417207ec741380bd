pub mod address;
pub mod polling_place_resolver;
pub mod precinct_enumerator;
pub mod record_writer;

pub use polling_place_resolver::PollingPlaceResolver;
pub use precinct_enumerator::{CountyPrecincts, PrecinctEnumerator};
pub use record_writer::RecordWriter;
