pub mod cubic_bezier;

pub use cubic_bezier::*;
