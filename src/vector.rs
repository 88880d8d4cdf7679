//! Vectors.

use crate::consts::VEC_EPSILON;
use bytemuck::{Pod, Zeroable};
use std::ops::{Index, IndexMut};

/// A 2-dimensional vector.
#[repr(transparent)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(into = "[f32; 2]", from = "[f32; 2]")
)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Zeroable, Pod)]
pub struct Vector2 {
    inner: nalgebra::Vector2<f32>,
}

/// A 3-dimensional vector.
///
/// Used both for positions and directions, and as the per-axis scale of a
/// [`Transform`](crate::transform::Transform).
#[repr(transparent)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(into = "[f32; 3]", from = "[f32; 3]")
)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Zeroable, Pod)]
pub struct Vector3 {
    inner: nalgebra::Vector3<f32>,
}

impl Vector2 {
    /// Creates a new vector with the given components.
    #[inline]
    pub fn new(x: f32, y: f32) -> Self {
        Self::wrap(nalgebra::Vector2::new(x, y))
    }

    /// Creates a new vector with all zeros.
    #[inline]
    pub fn zeros() -> Self {
        Self::wrap(nalgebra::Vector2::zeros())
    }

    /// Creates a new vector with the same value for all components.
    #[inline]
    pub fn same(value: f32) -> Self {
        Self::new(value, value)
    }

    /// The x-component.
    #[inline]
    pub fn x(&self) -> f32 {
        self.inner.x
    }

    /// The y-component.
    #[inline]
    pub fn y(&self) -> f32 {
        self.inner.y
    }

    /// Converts the vector to 3D by appending the given z-component.
    #[inline]
    pub fn extended(&self, z: f32) -> Vector3 {
        Vector3::new(self.x(), self.y(), z)
    }

    /// Computes the dot product of this vector with another.
    #[inline]
    pub fn dot(&self, other: &Self) -> f32 {
        self.inner.dot(&other.inner)
    }

    /// Computes the square of the norm of the vector.
    #[inline]
    pub fn norm_squared(&self) -> f32 {
        self.inner.norm_squared()
    }

    /// Computes the norm (length) of the vector.
    #[inline]
    pub fn norm(&self) -> f32 {
        self.inner.norm()
    }

    /// Computes the normalized version of the vector. A vector whose squared
    /// length is below [`VEC_EPSILON`] is returned unchanged.
    #[inline]
    pub fn normalized(&self) -> Self {
        let norm_squared = self.norm_squared();
        if norm_squared < VEC_EPSILON {
            return *self;
        }
        Self::wrap(self.inner / norm_squared.sqrt())
    }

    /// Multiplies each component by the corresponding component in another
    /// vector.
    #[inline]
    pub fn component_mul(&self, other: &Self) -> Self {
        Self::wrap(self.inner.component_mul(&other.inner))
    }

    /// Linearly interpolates between this vector (`t = 0`) and another
    /// (`t = 1`).
    #[inline]
    pub fn lerp(&self, other: &Self, t: f32) -> Self {
        Self::wrap(self.inner.lerp(&other.inner, t))
    }

    /// Whether the squared distance between the two vectors is below
    /// [`VEC_EPSILON`].
    #[inline]
    pub fn approx_eq(&self, other: &Self) -> bool {
        (self.inner - other.inner).norm_squared() < VEC_EPSILON
    }

    #[inline]
    pub(crate) fn wrap(inner: nalgebra::Vector2<f32>) -> Self {
        Self { inner }
    }
}

impl From<[f32; 2]> for Vector2 {
    #[inline]
    fn from([x, y]: [f32; 2]) -> Self {
        Self::new(x, y)
    }
}

impl From<Vector2> for [f32; 2] {
    #[inline]
    fn from(vector: Vector2) -> Self {
        [vector.x(), vector.y()]
    }
}

impl_binop!(Add, add, Vector2, Vector2, Vector2, |a, b| {
    Vector2::wrap(a.inner + b.inner)
});

impl_binop!(Sub, sub, Vector2, Vector2, Vector2, |a, b| {
    Vector2::wrap(a.inner - b.inner)
});

impl_binop!(Mul, mul, Vector2, f32, Vector2, |a, b| {
    Vector2::wrap(a.inner * *b)
});

impl_binop!(Mul, mul, f32, Vector2, Vector2, |a, b| {
    Vector2::wrap(b.inner * *a)
});

impl_binop!(Div, div, Vector2, f32, Vector2, |a, b| {
    Vector2::wrap(a.inner / *b)
});

impl_unary_op!(Neg, neg, Vector2, Vector2, |val| {
    Vector2::wrap(-val.inner)
});

impl_abs_diff_eq!(Vector2, |a, b, epsilon| {
    a.inner.abs_diff_eq(&b.inner, epsilon)
});

impl_relative_eq!(Vector2, |a, b, epsilon, max_relative| {
    a.inner.relative_eq(&b.inner, epsilon, max_relative)
});

impl Vector3 {
    /// Creates a new vector with the given components.
    #[inline]
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self::wrap(nalgebra::Vector3::new(x, y, z))
    }

    /// Creates a new vector with all zeros.
    #[inline]
    pub fn zeros() -> Self {
        Self::wrap(nalgebra::Vector3::zeros())
    }

    /// Creates a new vector with the same value for all components.
    #[inline]
    pub fn same(value: f32) -> Self {
        Self::new(value, value, value)
    }

    /// The unit vector along the x-axis.
    #[inline]
    pub fn unit_x() -> Self {
        Self::new(1.0, 0.0, 0.0)
    }

    /// The unit vector along the y-axis.
    #[inline]
    pub fn unit_y() -> Self {
        Self::new(0.0, 1.0, 0.0)
    }

    /// The unit vector along the z-axis.
    #[inline]
    pub fn unit_z() -> Self {
        Self::new(0.0, 0.0, 1.0)
    }

    /// The x-component.
    #[inline]
    pub fn x(&self) -> f32 {
        self.inner.x
    }

    /// The y-component.
    #[inline]
    pub fn y(&self) -> f32 {
        self.inner.y
    }

    /// The z-component.
    #[inline]
    pub fn z(&self) -> f32 {
        self.inner.z
    }

    /// The x- and y-components.
    #[inline]
    pub fn xy(&self) -> Vector2 {
        Vector2::new(self.x(), self.y())
    }

    /// Computes the dot product of this vector with another.
    #[inline]
    pub fn dot(&self, other: &Self) -> f32 {
        self.inner.dot(&other.inner)
    }

    /// Computes the cross product of this vector with another.
    #[inline]
    pub fn cross(&self, other: &Self) -> Self {
        Self::wrap(self.inner.cross(&other.inner))
    }

    /// Computes the square of the norm of the vector.
    #[inline]
    pub fn norm_squared(&self) -> f32 {
        self.inner.norm_squared()
    }

    /// Computes the norm (length) of the vector. Returns exactly zero when the
    /// squared length is below [`VEC_EPSILON`].
    #[inline]
    pub fn norm(&self) -> f32 {
        let norm_squared = self.norm_squared();
        if norm_squared < VEC_EPSILON {
            return 0.0;
        }
        norm_squared.sqrt()
    }

    /// Computes the normalized version of the vector. A vector whose squared
    /// length is below [`VEC_EPSILON`] is returned unchanged.
    #[inline]
    pub fn normalized(&self) -> Self {
        let norm_squared = self.norm_squared();
        if norm_squared < VEC_EPSILON {
            return *self;
        }
        Self::wrap(self.inner / norm_squared.sqrt())
    }

    /// Multiplies each component by the corresponding component in another
    /// vector.
    #[inline]
    pub fn component_mul(&self, other: &Self) -> Self {
        Self::wrap(self.inner.component_mul(&other.inner))
    }

    /// Returns a vector with the given closure applied to each component.
    #[inline]
    pub fn mapped(&self, f: impl FnMut(f32) -> f32) -> Self {
        Self::wrap(self.inner.map(f))
    }

    /// Returns the smallest component in the vector.
    #[inline]
    pub fn min_component(&self) -> f32 {
        self.inner.min()
    }

    /// Returns the largest component in the vector.
    #[inline]
    pub fn max_component(&self) -> f32 {
        self.inner.max()
    }

    /// Linearly interpolates between this vector (`t = 0`) and another
    /// (`t = 1`).
    #[inline]
    pub fn lerp(&self, other: &Self, t: f32) -> Self {
        Self::wrap(self.inner.lerp(&other.inner, t))
    }

    /// Computes the angle in radians between this vector and another. Zero if
    /// either vector is degenerate.
    pub fn angle_between(&self, other: &Self) -> f32 {
        let norm_squared_a = self.norm_squared();
        let norm_squared_b = other.norm_squared();
        if norm_squared_a < VEC_EPSILON || norm_squared_b < VEC_EPSILON {
            return 0.0;
        }
        let cos_angle = self.dot(other) / (norm_squared_a * norm_squared_b).sqrt();
        cos_angle.clamp(-1.0, 1.0).acos()
    }

    /// Projects this vector onto another. Zero if the other vector is
    /// degenerate.
    pub fn project_onto(&self, other: &Self) -> Self {
        let norm_squared = other.norm_squared();
        if norm_squared < VEC_EPSILON {
            return Self::zeros();
        }
        other * (self.dot(other) / norm_squared)
    }

    /// The part of this vector perpendicular to another.
    #[inline]
    pub fn reject_from(&self, other: &Self) -> Self {
        self - self.project_onto(other)
    }

    /// Reflects this vector about the plane with the given normal. The normal
    /// need not have unit length.
    pub fn reflect(&self, normal: &Self) -> Self {
        let norm_squared = normal.norm_squared();
        if norm_squared < VEC_EPSILON {
            return *self;
        }
        self - normal * (2.0 * self.dot(normal) / norm_squared)
    }

    /// Whether the squared distance between the two vectors is below
    /// [`VEC_EPSILON`].
    #[inline]
    pub fn approx_eq(&self, other: &Self) -> bool {
        (self.inner - other.inner).norm_squared() < VEC_EPSILON
    }

    #[inline]
    pub(crate) fn wrap(inner: nalgebra::Vector3<f32>) -> Self {
        Self { inner }
    }

    #[inline]
    pub(crate) fn inner(&self) -> &nalgebra::Vector3<f32> {
        &self.inner
    }
}

impl From<[f32; 3]> for Vector3 {
    #[inline]
    fn from([x, y, z]: [f32; 3]) -> Self {
        Self::new(x, y, z)
    }
}

impl From<Vector3> for [f32; 3] {
    #[inline]
    fn from(vector: Vector3) -> Self {
        [vector.x(), vector.y(), vector.z()]
    }
}

impl Index<usize> for Vector3 {
    type Output = f32;

    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        self.inner.index(index)
    }
}

impl IndexMut<usize> for Vector3 {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        self.inner.index_mut(index)
    }
}

impl_binop!(Add, add, Vector3, Vector3, Vector3, |a, b| {
    Vector3::wrap(a.inner + b.inner)
});

impl_binop!(Sub, sub, Vector3, Vector3, Vector3, |a, b| {
    Vector3::wrap(a.inner - b.inner)
});

impl_binop!(Mul, mul, Vector3, f32, Vector3, |a, b| {
    Vector3::wrap(a.inner * *b)
});

impl_binop!(Mul, mul, f32, Vector3, Vector3, |a, b| {
    Vector3::wrap(b.inner * *a)
});

impl_binop!(Div, div, Vector3, f32, Vector3, |a, b| {
    Vector3::wrap(a.inner / *b)
});

impl_binop_assign!(AddAssign, add_assign, Vector3, Vector3, |a, b| {
    a.inner += b.inner;
});

impl_binop_assign!(SubAssign, sub_assign, Vector3, Vector3, |a, b| {
    a.inner -= b.inner;
});

impl_binop_assign!(MulAssign, mul_assign, Vector3, f32, |a, b| {
    a.inner *= *b;
});

impl_unary_op!(Neg, neg, Vector3, Vector3, |val| {
    Vector3::wrap(-val.inner)
});

impl_abs_diff_eq!(Vector3, |a, b, epsilon| {
    a.inner.abs_diff_eq(&b.inner, epsilon)
});

impl_relative_eq!(Vector3, |a, b, epsilon, max_relative| {
    a.inner.relative_eq(&b.inner, epsilon, max_relative)
});

#[cfg(test)]
mod tests {
    #![allow(clippy::op_ref)]

    use super::*;
    use crate::consts::FRAC_PI_2;
    use approx::assert_abs_diff_eq;

    const EPSILON: f32 = 1e-6;

    #[test]
    fn computing_vector2_norm_works() {
        let v = Vector2::new(3.0, 4.0);
        assert_abs_diff_eq!(v.norm(), 5.0, epsilon = EPSILON);
        assert_abs_diff_eq!(v.norm_squared(), 25.0, epsilon = EPSILON);
    }

    #[test]
    fn normalizing_zero_vector2_leaves_it_unchanged() {
        assert_eq!(Vector2::zeros().normalized(), Vector2::zeros());
    }

    #[test]
    fn vector2_lerp_works() {
        let a = Vector2::new(0.0, 2.0);
        let b = Vector2::new(4.0, -2.0);
        assert_abs_diff_eq!(a.lerp(&b, 0.25), Vector2::new(1.0, 1.0), epsilon = EPSILON);
    }

    #[test]
    fn vector3_cross_product_follows_right_hand_rule() {
        let z = Vector3::unit_x().cross(&Vector3::unit_y());
        assert_abs_diff_eq!(z, Vector3::unit_z(), epsilon = EPSILON);
    }

    #[test]
    fn normalizing_vector3_gives_unit_vector() {
        let v = Vector3::new(0.0, 3.0, 4.0).normalized();
        assert_abs_diff_eq!(v.norm(), 1.0, epsilon = EPSILON);
        assert_abs_diff_eq!(v, Vector3::new(0.0, 0.6, 0.8), epsilon = EPSILON);
    }

    #[test]
    fn normalizing_tiny_vector3_leaves_it_unchanged() {
        let v = Vector3::new(1e-4, 0.0, -1e-4);
        assert_eq!(v.normalized(), v);
    }

    #[test]
    fn norm_of_tiny_vector3_is_exactly_zero() {
        assert_eq!(Vector3::new(1e-4, 1e-4, 0.0).norm(), 0.0);
    }

    #[test]
    fn component_mul_scales_each_axis() {
        let v = Vector3::new(1.0, 2.0, 3.0).component_mul(&Vector3::new(2.0, 0.5, -1.0));
        assert_eq!(v, Vector3::new(2.0, 1.0, -3.0));
    }

    #[test]
    fn angle_between_perpendicular_vectors_is_right_angle() {
        let angle = Vector3::new(2.0, 0.0, 0.0).angle_between(&Vector3::new(0.0, 0.0, 5.0));
        assert_abs_diff_eq!(angle, FRAC_PI_2, epsilon = EPSILON);
    }

    #[test]
    fn angle_between_degenerate_vectors_is_zero() {
        assert_eq!(Vector3::zeros().angle_between(&Vector3::unit_x()), 0.0);
    }

    #[test]
    fn projection_and_rejection_sum_to_original() {
        let v = Vector3::new(1.0, 2.0, 3.0);
        let onto = Vector3::new(0.0, 2.0, 0.0);
        let projected = v.project_onto(&onto);
        let rejected = v.reject_from(&onto);
        assert_abs_diff_eq!(projected, Vector3::new(0.0, 2.0, 0.0), epsilon = EPSILON);
        assert_abs_diff_eq!(projected + rejected, v, epsilon = EPSILON);
    }

    #[test]
    fn reflecting_about_plane_flips_normal_component() {
        let v = Vector3::new(1.0, -1.0, 0.0);
        let reflected = v.reflect(&Vector3::new(0.0, 3.0, 0.0));
        assert_abs_diff_eq!(reflected, Vector3::new(1.0, 1.0, 0.0), epsilon = EPSILON);
    }

    #[test]
    fn approx_eq_tolerates_small_differences() {
        let a = Vector3::new(1.0, 2.0, 3.0);
        assert!(a.approx_eq(&Vector3::new(1.0001, 2.0, 3.0)));
        assert!(!a.approx_eq(&Vector3::new(1.01, 2.0, 3.0)));
    }

    #[test]
    fn vector3_operators_work() {
        let mut v = Vector3::new(1.0, 2.0, 3.0);
        v += Vector3::same(1.0);
        v -= &Vector3::new(0.0, 1.0, 0.0);
        v *= 2.0;
        assert_eq!(v, Vector3::new(4.0, 4.0, 8.0));
        assert_eq!(-&v / 4.0, Vector3::new(-1.0, -1.0, -2.0));
        assert_eq!(0.5 * v, v * 0.5);
    }
}
