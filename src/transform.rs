//! Scale-rotation-translation transforms.

use crate::{
    consts::VEC_EPSILON,
    matrix::Matrix4,
    quaternion::Quaternion,
    vector::Vector3,
};
use bytemuck::{Pod, Zeroable};

/// A transform consisting of a per-axis scaling and a rotation followed by a
/// translation.
///
/// Applied to a point in local space, the scaling happens first, then the
/// rotation and finally the translation. The rotation is expected to have unit
/// length. The scale may be non-uniform and is not required to be non-zero;
/// see [`Self::inverted`] for how zero scale components are handled.
///
/// A non-uniform scale followed by a rotation and then composed with further
/// transforms would in general produce shear, which this representation
/// cannot hold. [`Self::combined`] and [`Self::from_matrix`] simply ignore it.
#[repr(C)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Copy, Debug, PartialEq, Zeroable, Pod)]
pub struct Transform {
    pub position: Vector3,
    pub rotation: Quaternion,
    pub scale: Vector3,
}

impl Transform {
    /// Creates the transform consisting of the given translation, rotation and
    /// scaling.
    #[inline]
    pub fn new(position: Vector3, rotation: Quaternion, scale: Vector3) -> Self {
        Self {
            position,
            rotation,
            scale,
        }
    }

    /// Creates the identity transform.
    #[inline]
    pub fn identity() -> Self {
        Self::new(Vector3::zeros(), Quaternion::identity(), Vector3::same(1.0))
    }

    /// Creates the transform consisting of the given translation and no
    /// rotation or scaling.
    #[inline]
    pub fn from_translation(position: Vector3) -> Self {
        Self::new(position, Quaternion::identity(), Vector3::same(1.0))
    }

    /// Creates the transform consisting of the given rotation and no
    /// translation or scaling.
    #[inline]
    pub fn from_rotation(rotation: Quaternion) -> Self {
        Self::new(Vector3::zeros(), rotation, Vector3::same(1.0))
    }

    /// Creates the transform consisting of the given per-axis scaling and no
    /// translation or rotation.
    #[inline]
    pub fn from_scale(scale: Vector3) -> Self {
        Self::new(Vector3::zeros(), Quaternion::identity(), scale)
    }

    /// Creates the transform consisting of the given uniform scaling and no
    /// translation or rotation.
    #[inline]
    pub fn from_uniform_scale(scale: f32) -> Self {
        Self::from_scale(Vector3::same(scale))
    }

    /// Recovers a transform from an affine matrix, for example the local
    /// matrix of an imported scene node.
    ///
    /// The translation is read directly from the last column and the rotation
    /// is extracted with [`Quaternion::from_matrix`]. The scale is the
    /// diagonal of what remains after multiplying the upper-left 3x3 block by
    /// the inverse rotation. This is exact for matrices built from a uniform
    /// scale, or from a non-uniform scale without rotation. A matrix that
    /// combines a non-uniform scale with a rotation, or that contains shear,
    /// decomposes to a transform that does not reproduce it.
    pub fn from_matrix(matrix: &Matrix4) -> Self {
        let position = matrix.translation();
        let rotation = Quaternion::from_matrix(matrix);

        let inverse_rotation_matrix = rotation.inverse().to_matrix();
        let scale_skew_matrix = matrix.linear_part() * inverse_rotation_matrix;

        Self::new(position, rotation, scale_skew_matrix.diagonal3())
    }

    /// Returns the transform obtained by applying `child` first and then this
    /// transform, i.e. `child` expressed in the space this transform maps
    /// into.
    ///
    /// The scales are multiplied componentwise. For a non-uniform scale on
    /// this transform combined with a rotation on the child, the true
    /// composition would contain shear; that part is dropped.
    pub fn combined(&self, child: &Self) -> Self {
        Self::new(
            self.position + self.rotation * self.scale.component_mul(&child.position),
            self.rotation * child.rotation,
            self.scale.component_mul(&child.scale),
        )
    }

    /// Computes the transform that undoes this one. Scale components with
    /// magnitude below [`VEC_EPSILON`] map to zero rather than infinity, so the
    /// inverse of a degenerate transform stays finite (and collapses the
    /// degenerate axes).
    pub fn inverted(&self) -> Self {
        let rotation = self.rotation.inverse();
        let scale = self.scale.mapped(|component| {
            if component.abs() < VEC_EPSILON {
                0.0
            } else {
                component.recip()
            }
        });
        let position = rotation * scale.component_mul(&-self.position);
        Self::new(position, rotation, scale)
    }

    /// Blends this transform (`t = 0`) with another (`t = 1`).
    ///
    /// Position and scale are interpolated linearly. The rotations are
    /// interpolated with [`Quaternion::nlerp`] after negating the other
    /// rotation if it lies in the opposite hemisphere, so the blend always
    /// takes the shorter way around.
    pub fn mixed(&self, other: &Self, t: f32) -> Self {
        let other_rotation = if self.rotation.dot(&other.rotation) < 0.0 {
            -other.rotation
        } else {
            other.rotation
        };

        Self::new(
            self.position.lerp(&other.position, t),
            self.rotation.nlerp(&other_rotation, t),
            self.scale.lerp(&other.scale, t),
        )
    }

    /// Converts the transform to a column-major 4x4 homogeneous matrix. The
    /// basis columns are the rotated world axes scaled by the corresponding
    /// scale component.
    pub fn to_matrix(&self) -> Matrix4 {
        let x_axis = self.rotation * Vector3::unit_x() * self.scale.x();
        let y_axis = self.rotation * Vector3::unit_y() * self.scale.y();
        let z_axis = self.rotation * Vector3::unit_z() * self.scale.z();
        Matrix4::from_basis(&x_axis, &y_axis, &z_axis, &self.position)
    }

    /// Applies the transform to the given point.
    #[inline]
    pub fn transform_point(&self, point: &Vector3) -> Vector3 {
        self.rotation * self.scale.component_mul(point) + self.position
    }

    /// Applies the transform to the given vector. The translation part of the
    /// transform is not applied to vectors.
    #[inline]
    pub fn transform_vector(&self, vector: &Vector3) -> Vector3 {
        self.rotation * self.scale.component_mul(vector)
    }

    /// Whether the two transforms are approximately equal, treating rotations
    /// that differ only in sign as equal.
    pub fn approx_eq(&self, other: &Self) -> bool {
        self.position.approx_eq(&other.position)
            && self.rotation.same_orientation(&other.rotation)
            && self.scale.approx_eq(&other.scale)
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::identity()
    }
}

impl_binop!(Mul, mul, Transform, Transform, Transform, |a, b| {
    a.combined(b)
});

impl_abs_diff_eq!(Transform, |a, b, epsilon| {
    a.position.abs_diff_eq(&b.position, epsilon)
        && a.rotation.abs_diff_eq(&b.rotation, epsilon)
        && a.scale.abs_diff_eq(&b.scale, epsilon)
});

impl_relative_eq!(Transform, |a, b, epsilon, max_relative| {
    a.position.relative_eq(&b.position, epsilon, max_relative)
        && a.rotation.relative_eq(&b.rotation, epsilon, max_relative)
        && a.scale.relative_eq(&b.scale, epsilon, max_relative)
});

/// Returns the transform obtained by applying `b` first and then `a`. See
/// [`Transform::combined`].
#[inline]
pub fn combine(a: &Transform, b: &Transform) -> Transform {
    a.combined(b)
}

/// See [`Transform::inverted`].
#[inline]
pub fn inverse(transform: &Transform) -> Transform {
    transform.inverted()
}

/// See [`Transform::mixed`].
#[inline]
pub fn mix(a: &Transform, b: &Transform, t: f32) -> Transform {
    a.mixed(b, t)
}

/// See [`Transform::to_matrix`].
#[inline]
pub fn transform_to_matrix(transform: &Transform) -> Matrix4 {
    transform.to_matrix()
}

/// See [`Transform::from_matrix`].
#[inline]
pub fn matrix_to_transform(matrix: &Matrix4) -> Transform {
    Transform::from_matrix(matrix)
}

/// See [`Transform::transform_point`].
#[inline]
pub fn transform_point(transform: &Transform, point: &Vector3) -> Vector3 {
    transform.transform_point(point)
}

/// See [`Transform::transform_vector`].
#[inline]
pub fn transform_vector(transform: &Transform, vector: &Vector3) -> Vector3 {
    transform.transform_vector(vector)
}
