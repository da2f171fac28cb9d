pub mod band;
pub mod compare;
pub mod error;
pub mod export;
pub mod math;
pub mod render;
pub mod report;
pub mod signal;
pub mod source;

pub use band::*;
pub use compare::*;
pub use error::*;
pub use export::*;
pub use math::*;
pub use render::*;
pub use report::*;
pub use signal::*;
pub use source::*;
