use cgmath::{InnerSpace, Vector3, Zero};
use log::trace;

use crate::Rotation;

/// Color tags for the three body axis arrows; red, green, blue conventionally
/// mark the X, Y, Z axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AxisColor {
    Red,
    Green,
    Blue,
}

/// A single axis arrow, anchored at the origin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisArrow {
    pub origin: Vector3<f64>,
    pub direction: Vector3<f64>,
    pub color: AxisColor,
}

// Implemented by whatever backend actually puts arrows on screen
pub trait AxesRender {
    fn draw_arrow(&mut self, arrow: AxisArrow);
}

impl Rotation {
    /// Draws the rotation's body axes as three arrows from the origin.
    ///
    /// The arrow directions are the columns of the rotation matrix,
    /// normalized and scaled to length `size`, emitted red, green, blue for
    /// the body X, Y, Z axes in that order.
    pub fn draw_axes(&self, renderer: &mut impl AxesRender, size: f64) {
        let m = self.to_rotation_matrix();

        trace!("Drawing body axes with arrow size {}", size);

        for (column, color) in [
            (m.x, AxisColor::Red),
            (m.y, AxisColor::Green),
            (m.z, AxisColor::Blue),
        ] {
            renderer.draw_arrow(AxisArrow {
                origin: Vector3::zero(),
                direction: column.normalize() * size,
                color,
            });
        }
    }
}

#[cfg(test)]
mod test {
    use approx::assert_relative_eq;

    use super::*;

    #[derive(Default)]
    struct CollectedAxes {
        arrows: Vec<AxisArrow>,
    }

    impl AxesRender for CollectedAxes {
        fn draw_arrow(&mut self, arrow: AxisArrow) {
            self.arrows.push(arrow);
        }
    }

    #[test]
    fn test_identity_axes_are_scaled_basis_vectors() {
        let mut axes = CollectedAxes::default();

        Rotation::identity().draw_axes(&mut axes, 3.0);

        assert_eq!(axes.arrows.len(), 3);

        let expected = [
            (Vector3::new(3.0, 0.0, 0.0), AxisColor::Red),
            (Vector3::new(0.0, 3.0, 0.0), AxisColor::Green),
            (Vector3::new(0.0, 0.0, 3.0), AxisColor::Blue),
        ];

        for (arrow, (direction, color)) in axes.arrows.iter().zip(expected) {
            assert_eq!(arrow.origin, Vector3::zero());
            assert_eq!(arrow.color, color);
            assert_relative_eq!(arrow.direction, direction, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_arrow_length_matches_size() {
        let mut axes = CollectedAxes::default();

        Rotation::from_euler_zyx_deg(30.0, -60.0, 45.0).draw_axes(&mut axes, 2.0);

        for arrow in &axes.arrows {
            assert_relative_eq!(arrow.direction.magnitude(), 2.0, epsilon = 1e-9);
        }
    }
}
