//! Matrices.

use crate::vector::Vector3;
use bytemuck::{Pod, Zeroable};

/// A 4x4 homogeneous matrix stored in column-major order.
///
/// This is the interchange format for renderers and asset importers. The
/// translation occupies elements 12, 13 and 14 of [`Self::as_slice`] and the
/// bottom row of an affine transform is `(0, 0, 0, 1)`.
#[repr(transparent)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(into = "[f32; 16]", from = "[f32; 16]")
)]
#[derive(Clone, Copy, Debug, PartialEq, Zeroable, Pod)]
pub struct Matrix4 {
    inner: nalgebra::Matrix4<f32>,
}

impl Matrix4 {
    /// Creates the identity matrix.
    #[inline]
    pub fn identity() -> Self {
        Self::wrap(nalgebra::Matrix4::identity())
    }

    /// Creates a matrix with all zeros.
    #[inline]
    pub fn zeros() -> Self {
        Self::wrap(nalgebra::Matrix4::zeros())
    }

    /// Creates a matrix from 16 elements given in column-major order.
    #[inline]
    pub fn from_column_slice(elements: &[f32; 16]) -> Self {
        Self::wrap(nalgebra::Matrix4::from_column_slice(elements))
    }

    /// Creates the affine matrix whose upper-left 3x3 block has the given
    /// basis vectors as columns and whose last column holds the given
    /// translation.
    pub fn from_basis(
        x_axis: &Vector3,
        y_axis: &Vector3,
        z_axis: &Vector3,
        translation: &Vector3,
    ) -> Self {
        #[rustfmt::skip]
        let elements = [
            x_axis.x(),      x_axis.y(),      x_axis.z(),      0.0,
            y_axis.x(),      y_axis.y(),      y_axis.z(),      0.0,
            z_axis.x(),      z_axis.y(),      z_axis.z(),      0.0,
            translation.x(), translation.y(), translation.z(), 1.0,
        ];
        Self::from_column_slice(&elements)
    }

    /// The 16 elements in column-major order.
    #[inline]
    pub fn as_slice(&self) -> &[f32] {
        self.inner.as_slice()
    }

    /// Copies the 16 elements in column-major order into an array.
    #[inline]
    pub fn to_array(&self) -> [f32; 16] {
        let mut elements = [0.0; 16];
        elements.copy_from_slice(self.as_slice());
        elements
    }

    /// The element at the given row and column.
    #[inline]
    pub fn element(&self, row: usize, column: usize) -> f32 {
        self.inner[(row, column)]
    }

    /// The first three elements of the given column.
    #[inline]
    pub fn column3(&self, column: usize) -> Vector3 {
        Vector3::wrap(self.inner.fixed_view::<3, 1>(0, column).into_owned())
    }

    /// The translation column.
    #[inline]
    pub fn translation(&self) -> Vector3 {
        self.column3(3)
    }

    /// The diagonal of the upper-left 3x3 block.
    #[inline]
    pub fn diagonal3(&self) -> Vector3 {
        Vector3::new(
            self.element(0, 0),
            self.element(1, 1),
            self.element(2, 2),
        )
    }

    /// Returns the matrix with the translation column cleared and the bottom
    /// row reset to `(0, 0, 0, 1)`, keeping only the upper-left 3x3 block.
    pub fn linear_part(&self) -> Self {
        Self::from_basis(
            &self.column3(0),
            &self.column3(1),
            &self.column3(2),
            &Vector3::zeros(),
        )
    }

    /// Computes the transpose.
    #[inline]
    pub fn transposed(&self) -> Self {
        Self::wrap(self.inner.transpose())
    }

    /// Applies the matrix to the given point, treating it as having a
    /// homogeneous coordinate of one. No perspective division is performed.
    #[inline]
    pub fn transform_point(&self, point: &Vector3) -> Vector3 {
        self.transform_vector(point) + self.translation()
    }

    /// Applies the upper-left 3x3 block to the given vector.
    #[inline]
    pub fn transform_vector(&self, vector: &Vector3) -> Vector3 {
        Vector3::wrap(self.inner.fixed_view::<3, 3>(0, 0) * vector.inner())
    }

    #[inline]
    pub(crate) fn wrap(inner: nalgebra::Matrix4<f32>) -> Self {
        Self { inner }
    }
}

impl Default for Matrix4 {
    fn default() -> Self {
        Self::identity()
    }
}

impl From<[f32; 16]> for Matrix4 {
    #[inline]
    fn from(elements: [f32; 16]) -> Self {
        Self::from_column_slice(&elements)
    }
}

impl From<Matrix4> for [f32; 16] {
    #[inline]
    fn from(matrix: Matrix4) -> Self {
        matrix.to_array()
    }
}

impl_binop!(Mul, mul, Matrix4, Matrix4, Matrix4, |a, b| {
    Matrix4::wrap(a.inner * b.inner)
});

impl_abs_diff_eq!(Matrix4, |a, b, epsilon| {
    a.inner.abs_diff_eq(&b.inner, epsilon)
});

impl_relative_eq!(Matrix4, |a, b, epsilon, max_relative| {
    a.inner.relative_eq(&b.inner, epsilon, max_relative)
});
