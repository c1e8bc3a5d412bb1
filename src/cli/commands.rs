pub mod dump_dataset;
pub mod serve;

pub use dump_dataset::dump_dataset;
pub use serve::serve;
