pub mod address;
pub mod precinct;
pub mod record;

pub use address::PostalAddress;
pub use precinct::{decode_precinct_list, PrecinctDescriptor, PLACEHOLDER_DESCRIPTION};
pub use record::ResolvedRecord;
