//! Core conversion logic and application plumbing

pub mod config;
pub mod convert;
pub mod graph;
pub mod log;
pub mod path;
pub mod rate;

// Re-export main types for cleaner imports
pub use convert::{Conversion, convert, convert_with_route, rate};
pub use graph::{Edge, RateGraph};
pub use path::find_path;
pub use rate::Rate;
