pub mod coord;
pub mod error;

pub use coord::{Coordinate, degrees_to_microdeg, microdeg_to_degrees};
pub use error::{Result, UVoxError};
