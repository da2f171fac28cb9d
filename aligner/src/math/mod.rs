pub use statistics::*;

pub mod statistics;
