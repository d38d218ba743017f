use cgmath::{Deg, InnerSpace, Matrix3, Quaternion, Rad, SquareMatrix};

/// A single 3D orientation, backed by a unit quaternion in `(x, y, z, w)`
/// order with `w` the scalar part.
///
/// Every named constructor normalizes before storing, so a `Rotation` always
/// holds a unit quaternion to floating point precision. Values are never
/// mutated after construction; each `from_*` produces a new instance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rotation {
    quaternion: Quaternion<f64>,
}

impl Default for Rotation {
    fn default() -> Self {
        Self::identity()
    }
}

impl Rotation {
    /// The rotation that maps every vector to itself.
    pub fn identity() -> Self {
        Self {
            quaternion: Quaternion::new(1.0, 0.0, 0.0, 0.0),
        }
    }

    // Single normalizing path every constructor funnels through; this is the
    // only place a quaternion is written into storage.
    fn from_normalized(quaternion: Quaternion<f64>) -> Self {
        Self {
            quaternion: quaternion.normalize(),
        }
    }

    /// Creates a rotation from a quaternion in `[x, y, z, w]` order.
    ///
    /// The input does not need to have unit norm; it is normalized before
    /// storage. A zero quaternion has no direction to normalize and yields
    /// non-finite components rather than an error.
    pub fn from_quaternion(quaternion: impl Into<Quaternion<f64>>) -> Self {
        Self::from_normalized(quaternion.into())
    }

    /// Returns a copy of the stored quaternion.
    pub fn to_quaternion(&self) -> Quaternion<f64> {
        self.quaternion
    }

    /// Creates a rotation from an orthonormal matrix with determinant +1.
    ///
    /// Branches on the trace and the dominant diagonal entry so that the
    /// square root is always taken of the largest of the four candidate
    /// quantities. Behavior is unspecified for matrices that are not proper
    /// rotations.
    pub fn from_rotation_matrix(matrix: impl Into<Matrix3<f64>>) -> Self {
        let m = matrix.into();
        let tr = m.trace();

        // cgmath matrices are column major: m.y.z is column 1, row 2
        let (w, x, y, z) = if tr > 0.0 {
            let s = (tr + 1.0).sqrt() * 2.0;
            (
                0.25 * s,
                (m.y.z - m.z.y) / s,
                (m.z.x - m.x.z) / s,
                (m.x.y - m.y.x) / s,
            )
        } else if m.x.x > m.y.y && m.x.x > m.z.z {
            let s = (1.0 + m.x.x - m.y.y - m.z.z).sqrt() * 2.0;
            (
                (m.y.z - m.z.y) / s,
                0.25 * s,
                (m.y.x + m.x.y) / s,
                (m.z.x + m.x.z) / s,
            )
        } else if m.y.y > m.z.z {
            let s = (1.0 + m.y.y - m.x.x - m.z.z).sqrt() * 2.0;
            (
                (m.z.x - m.x.z) / s,
                (m.y.x + m.x.y) / s,
                0.25 * s,
                (m.z.y + m.y.z) / s,
            )
        } else {
            let s = (1.0 + m.z.z - m.x.x - m.y.y).sqrt() * 2.0;
            (
                (m.x.y - m.y.x) / s,
                (m.z.x + m.x.z) / s,
                (m.z.y + m.y.z) / s,
                0.25 * s,
            )
        };

        // Renormalize to absorb floating point drift from the extraction
        Self::from_normalized(Quaternion::new(w, x, y, z))
    }

    /// Returns the equivalent 3×3 rotation matrix.
    ///
    /// For the unit quaternion held here the result is orthonormal with
    /// determinant +1, within floating point tolerance.
    pub fn to_rotation_matrix(&self) -> Matrix3<f64> {
        let Quaternion { v, s: w } = self.quaternion;
        let (x, y, z) = (v.x, v.y, v.z);

        let xx = x * x;
        let xy = x * y;
        let xz = x * z;
        let xw = x * w;
        let yy = y * y;
        let yz = y * z;
        let yw = y * w;
        let zz = z * z;
        let zw = z * w;

        Matrix3::new(
            // Column 0
            1.0 - 2.0 * (yy + zz),
            2.0 * (xy + zw),
            2.0 * (xz - yw),
            // Column 1
            2.0 * (xy - zw),
            1.0 - 2.0 * (xx + zz),
            2.0 * (yz + xw),
            // Column 2
            2.0 * (xz + yw),
            2.0 * (yz - xw),
            1.0 - 2.0 * (xx + yy),
        )
    }

    /// Creates a rotation from intrinsic Z-Y-X Euler angles in radians.
    ///
    /// The rotations are applied successively about the body Z, then Y, then
    /// X axes. The quaternion is computed directly from the half angle
    /// product formula rather than by composing three quaternions.
    pub fn from_euler_zyx(z: f64, y: f64, x: f64) -> Self {
        let c1 = (y / 2.0).cos();
        let s1 = (y / 2.0).sin();
        let c2 = (z / 2.0).cos();
        let s2 = (z / 2.0).sin();
        let c3 = (x / 2.0).cos();
        let s3 = (x / 2.0).sin();
        let c1c2 = c1 * c2;
        let s1s2 = s1 * s2;

        Self::from_normalized(Quaternion::new(
            c1c2 * c3 - s1s2 * s3,
            c1c2 * s3 + s1s2 * c3,
            s1 * c2 * c3 + c1 * s2 * s3,
            c1 * s2 * c3 - s1 * c2 * s3,
        ))
    }

    /// Same as [`Rotation::from_euler_zyx`] with the angles in degrees.
    pub fn from_euler_zyx_deg(z: f64, y: f64, x: f64) -> Self {
        Self::from_euler_zyx(
            Rad::from(Deg(z)).0,
            Rad::from(Deg(y)).0,
            Rad::from(Deg(x)).0,
        )
    }
}
