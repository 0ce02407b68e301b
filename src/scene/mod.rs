//! Scene management

mod bounding_box;
mod camera;
mod shake;
mod transform;

pub use bounding_box::*;
pub use camera::*;
pub use shake::*;
pub use transform::*;
