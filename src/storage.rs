pub mod dot;
pub mod spec_file;

pub use spec_file::{LoadError, SpecFile, SpecFileLoader};
