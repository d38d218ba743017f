// Publicly exposed types
pub use axes_renderer::{AxesRender, AxisArrow, AxisColor};
pub use rotation::Rotation;
pub use transform::Transform;

mod axes_renderer;
mod rotation;
mod transform;
