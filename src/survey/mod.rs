pub mod batch;
pub mod records;

pub use batch::{BatchEntry, parse_batch, read_batch};
pub use records::{PlotRecord, write_records};
