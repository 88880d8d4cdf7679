//! Quaternions.

use crate::{
    consts::{PI, QUAT_EPSILON},
    matrix::Matrix4,
    vector::Vector3,
};
use bytemuck::{Pod, Zeroable};

/// A quaternion `(x, y, z, w)` where `(x, y, z)` is the imaginary part and `w`
/// the real part.
///
/// When used as a rotation the quaternion is expected to have unit length.
/// This is not enforced: sums, differences and scalar multiples generally
/// leave the unit sphere, so [`Self::normalized`] must be called before such a
/// value is used as a rotation again.
///
/// `q` and `-q` represent the same rotation. [`Self::approx_eq`] compares
/// components, while [`Self::same_orientation`] also accepts the negated
/// match.
#[repr(transparent)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(into = "[f32; 4]", from = "[f32; 4]")
)]
#[derive(Clone, Copy, Debug, PartialEq, Zeroable, Pod)]
pub struct Quaternion {
    inner: nalgebra::Quaternion<f32>,
}

impl Quaternion {
    /// Creates a quaternion with the given imaginary (`x`, `y`, `z`) and real
    /// (`w`) components.
    #[inline]
    pub fn new(x: f32, y: f32, z: f32, w: f32) -> Self {
        Self::wrap(nalgebra::Quaternion::new(w, x, y, z))
    }

    /// The identity rotation `(0, 0, 0, 1)`.
    #[inline]
    pub fn identity() -> Self {
        Self::new(0.0, 0.0, 0.0, 1.0)
    }

    /// Creates a quaternion from its real and imaginary parts.
    #[inline]
    pub fn from_parts(real: f32, imag: Vector3) -> Self {
        Self::new(imag.x(), imag.y(), imag.z(), real)
    }

    /// Creates the rotation by `angle` radians about `axis`. The axis is
    /// normalized internally and must be non-zero.
    pub fn from_axis_angle(axis: &Vector3, angle: f32) -> Self {
        let axis = axis.normalized();
        let (sin_half_angle, cos_half_angle) = (0.5 * angle).sin_cos();
        Self::from_parts(cos_half_angle, axis * sin_half_angle)
    }

    /// Creates the shortest-arc rotation taking the direction `from` onto the
    /// direction `to`. Neither needs unit length.
    ///
    /// When the directions are opposite there is no unique shortest arc, and a
    /// half turn about an axis perpendicular to `from` is returned. The axis is
    /// seeded with the world axis least aligned with `from`.
    pub fn from_to(from: &Vector3, to: &Vector3) -> Self {
        let from = from.normalized();
        let to = to.normalized();

        if from.approx_eq(&to) {
            return Self::identity();
        }

        if from.approx_eq(&-to) {
            let mut seed = Vector3::unit_x();
            if from.y().abs() < from.x().abs() {
                seed = Vector3::unit_y();
            }
            if from.z().abs() < from.y().abs() && from.z().abs() < from.x().abs() {
                seed = Vector3::unit_z();
            }
            let axis = from.cross(&seed).normalized();
            return Self::from_parts(0.0, axis);
        }

        let half = (from + to).normalized();
        Self::from_parts(from.dot(&half), from.cross(&half))
    }

    /// Creates the rotation that points the local +z axis along `direction`
    /// while keeping the local +y axis as close to `up` as possible.
    pub fn look_rotation(direction: &Vector3, up: &Vector3) -> Self {
        let forward = direction.normalized();
        let up = up.normalized();
        let right = up.cross(&forward);
        let up = forward.cross(&right);

        let world_to_object = Self::from_to(&Vector3::unit_z(), &forward);
        let object_up = world_to_object.rotate_vector(&Vector3::unit_y());
        // An upside-down up vector must be flipped about the forward axis, or
        // the half turn would also move the forward axis
        let up_to_up = if object_up.approx_eq(&-up) {
            Self::from_axis_angle(&forward, PI)
        } else {
            Self::from_to(&object_up, &up)
        };

        (up_to_up * world_to_object).normalized()
    }

    /// Extracts the rotation from the upper-left 3x3 block of the given
    /// matrix. Only the directions of the second (up) and third (forward)
    /// basis columns are used, so scaling in the matrix does not affect the
    /// result.
    pub fn from_matrix(matrix: &Matrix4) -> Self {
        let up = matrix.column3(1).normalized();
        let forward = matrix.column3(2).normalized();
        let right = up.cross(&forward);
        let up = forward.cross(&right);
        Self::look_rotation(&forward, &up)
    }

    /// The imaginary x-component.
    #[inline]
    pub fn x(&self) -> f32 {
        self.inner.i
    }

    /// The imaginary y-component.
    #[inline]
    pub fn y(&self) -> f32 {
        self.inner.j
    }

    /// The imaginary z-component.
    #[inline]
    pub fn z(&self) -> f32 {
        self.inner.k
    }

    /// The real component.
    #[inline]
    pub fn w(&self) -> f32 {
        self.inner.w
    }

    /// The real part.
    #[inline]
    pub fn real(&self) -> f32 {
        self.inner.w
    }

    /// The imaginary part.
    #[inline]
    pub fn imag(&self) -> Vector3 {
        Vector3::wrap(self.inner.imag())
    }

    /// The rotation axis, i.e. the normalized imaginary part. Poorly defined
    /// for rotations close to the identity.
    #[inline]
    pub fn axis(&self) -> Vector3 {
        self.imag().normalized()
    }

    /// The rotation angle in radians, in `[0, 2π]`.
    #[inline]
    pub fn angle(&self) -> f32 {
        2.0 * self.w().clamp(-1.0, 1.0).acos()
    }

    /// Computes the four-dimensional dot product with another quaternion.
    #[inline]
    pub fn dot(&self, other: &Self) -> f32 {
        self.inner.coords.dot(&other.inner.coords)
    }

    /// Computes the squared length.
    #[inline]
    pub fn norm_squared(&self) -> f32 {
        self.inner.coords.norm_squared()
    }

    /// Computes the length. Returns exactly zero when the squared length is
    /// below [`QUAT_EPSILON`].
    #[inline]
    pub fn norm(&self) -> f32 {
        let norm_squared = self.norm_squared();
        if norm_squared < QUAT_EPSILON {
            return 0.0;
        }
        norm_squared.sqrt()
    }

    /// Scales the quaternion to unit length in place. Does nothing if the
    /// length is below [`QUAT_EPSILON`].
    #[inline]
    pub fn normalize(&mut self) {
        *self = self.normalized();
    }

    /// Returns the quaternion scaled to unit length. A quaternion whose length
    /// is below [`QUAT_EPSILON`] is returned unchanged.
    #[inline]
    pub fn normalized(&self) -> Self {
        let norm = self.norm();
        if norm < QUAT_EPSILON {
            return *self;
        }
        self * norm.recip()
    }

    /// Returns the quaternion with the imaginary part negated.
    #[inline]
    pub fn conjugate(&self) -> Self {
        Self::wrap(self.inner.conjugate())
    }

    /// Computes the multiplicative inverse, which for a unit quaternion is the
    /// conjugate. Returns the identity if the length is below
    /// [`QUAT_EPSILON`].
    #[inline]
    pub fn inverse(&self) -> Self {
        if self.norm() < QUAT_EPSILON {
            return Self::identity();
        }
        self.conjugate() * self.norm_squared().recip()
    }

    /// Whether each component differs from the corresponding component of
    /// `other` by at most [`QUAT_EPSILON`].
    #[inline]
    pub fn approx_eq(&self, other: &Self) -> bool {
        self.inner
            .coords
            .iter()
            .zip(other.inner.coords.iter())
            .all(|(a, b)| (a - b).abs() <= QUAT_EPSILON)
    }

    /// Whether the two quaternions represent the same rotation, meaning that
    /// they are approximately equal either directly or after negating one of
    /// them.
    #[inline]
    pub fn same_orientation(&self, other: &Self) -> bool {
        self.approx_eq(other) || self.approx_eq(&-other)
    }

    /// Rotates the given vector. Assumes unit length.
    #[inline]
    pub fn rotate_vector(&self, vector: &Vector3) -> Vector3 {
        let imag = self.imag();
        let real = self.real();
        imag * (2.0 * imag.dot(vector))
            + vector * (real * real - imag.norm_squared())
            + imag.cross(vector) * (2.0 * real)
    }

    /// Blends the components linearly. The result generally does not have unit
    /// length.
    #[inline]
    pub fn mix(&self, other: &Self, t: f32) -> Self {
        self * (1.0 - t) + other * t
    }

    /// Blends the components linearly and renormalizes the result. Takes the
    /// long way around if the two rotations are in opposite hemispheres.
    #[inline]
    pub fn nlerp(&self, other: &Self, t: f32) -> Self {
        (self + (other - self) * t).normalized()
    }

    /// Interpolates with constant angular velocity along the shorter arc
    /// between the two rotations. Falls back to [`Self::nlerp`] when they are
    /// nearly the same orientation.
    pub fn slerp(&self, other: &Self, t: f32) -> Self {
        let other = if self.dot(other) < 0.0 { -other } else { *other };
        if self.dot(&other) > 1.0 - QUAT_EPSILON {
            return self.nlerp(&other, t);
        }
        let delta = self.inverse() * other;
        (self * delta.powf(t)).normalized()
    }

    /// Raises the rotation to the given power, which scales its angle.
    pub fn powf(&self, power: f32) -> Self {
        let angle = self.angle();
        let axis = self.axis();
        let (sin_half_angle, cos_half_angle) = (0.5 * power * angle).sin_cos();
        Self::from_parts(cos_half_angle, axis * sin_half_angle)
    }

    /// Converts the rotation to a 4x4 homogeneous matrix by rotating the world
    /// axes.
    pub fn to_matrix(&self) -> Matrix4 {
        Matrix4::from_basis(
            &self.rotate_vector(&Vector3::unit_x()),
            &self.rotate_vector(&Vector3::unit_y()),
            &self.rotate_vector(&Vector3::unit_z()),
            &Vector3::zeros(),
        )
    }

    #[inline]
    pub(crate) fn wrap(inner: nalgebra::Quaternion<f32>) -> Self {
        Self { inner }
    }
}

impl Default for Quaternion {
    fn default() -> Self {
        Self::identity()
    }
}

impl From<[f32; 4]> for Quaternion {
    #[inline]
    fn from([x, y, z, w]: [f32; 4]) -> Self {
        Self::new(x, y, z, w)
    }
}

impl From<Quaternion> for [f32; 4] {
    #[inline]
    fn from(quaternion: Quaternion) -> Self {
        [quaternion.x(), quaternion.y(), quaternion.z(), quaternion.w()]
    }
}

impl_binop!(Add, add, Quaternion, Quaternion, Quaternion, |a, b| {
    Quaternion::wrap(a.inner + b.inner)
});

impl_binop!(Sub, sub, Quaternion, Quaternion, Quaternion, |a, b| {
    Quaternion::wrap(a.inner - b.inner)
});

impl_binop!(Mul, mul, Quaternion, f32, Quaternion, |a, b| {
    Quaternion::wrap(nalgebra::Quaternion::from(a.inner.coords * *b))
});

// Hamilton product: rotating by `a * b` rotates by `b` first and then by `a`.
impl_binop!(Mul, mul, Quaternion, Quaternion, Quaternion, |a, b| {
    Quaternion::wrap(a.inner * b.inner)
});

impl_binop!(Mul, mul, Quaternion, Vector3, Vector3, |a, b| {
    a.rotate_vector(b)
});

impl_unary_op!(Neg, neg, Quaternion, Quaternion, |val| {
    Quaternion::wrap(-val.inner)
});

impl_abs_diff_eq!(Quaternion, |a, b, epsilon| {
    a.inner.abs_diff_eq(&b.inner, epsilon)
});

impl_relative_eq!(Quaternion, |a, b, epsilon, max_relative| {
    a.inner.relative_eq(&b.inner, epsilon, max_relative)
});
