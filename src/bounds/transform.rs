use crate::bounds::BoundingBox;
use crate::matrix::PointTransform;
use crate::scalar::Real;
use num_traits::AsPrimitive;

impl<T: Real, const D: usize> BoundingBox<T, D> {
    /// Returns the axis-aligned bound of this box after transformation by `matrix`.
    ///
    /// All `2^D` corners are transformed, so rotations and shears that flip the
    /// order of an axis are handled. The matrix may compute in a different float
    /// domain than the box. Empty and infinite boxes are returned unchanged.
    pub fn transformed<M>(&self, matrix: &M) -> Self
    where
        M: PointTransform<D>,
        T: AsPrimitive<M::Scalar>,
        M::Scalar: AsPrimitive<T>,
    {
        if self.is_empty() || self.is_infinite() {
            return *self;
        }

        let mut result = Self::empty();
        for corner in self.corners() {
            let p = matrix.transform_point(corner.map(|v| v.as_()));
            result.extend_by_point(&p.map(|v| v.as_()));
        }
        result
    }

    /// In-place variant of [`transformed`](Self::transformed).
    pub fn transform<M>(&mut self, matrix: &M)
    where
        M: PointTransform<D>,
        T: AsPrimitive<M::Scalar>,
        M::Scalar: AsPrimitive<T>,
    {
        *self = self.transformed(matrix);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matrix::{Matrix33, Matrix44};
    use std::f64::consts::FRAC_PI_4;

    #[test]
    fn test_scale_3d() {
        let b = BoundingBox::new([0.0, 0.0, 0.0], [1.0, 1.0, 1.0]);
        let t = b.transformed(&Matrix44::scaling([2.0, 2.0, 2.0]));
        assert_eq!(t, BoundingBox::new([0.0, 0.0, 0.0], [2.0, 2.0, 2.0]));
    }

    #[test]
    fn test_negative_scale_reorders_axes() {
        let b = BoundingBox::new([1.0, 2.0], [3.0, 4.0]);
        let t = b.transformed(&Matrix33::scaling([-1.0, 1.0]));
        assert_eq!(t, BoundingBox::new([-3.0, 2.0], [-1.0, 4.0]));
    }

    #[test]
    fn test_rotation_uses_all_corners() {
        // A unit square rotated by 45 degrees spans sqrt(2) on both axes.
        let b = BoundingBox::new([0.0, 0.0], [1.0, 1.0]);
        let t = b.transformed(&Matrix33::rotation(FRAC_PI_4));
        let half = std::f64::consts::SQRT_2 / 2.0;
        assert!((t.min[0] + half).abs() < 1e-12);
        assert!((t.max[0] - half).abs() < 1e-12);
        assert!(t.min[1].abs() < 1e-12);
        assert!((t.max[1] - 2.0 * half).abs() < 1e-12);
    }

    #[test]
    fn test_empty_and_infinite_unchanged() {
        let m = Matrix44::translation([1.0, 2.0, 3.0]) * Matrix44::rotation_z(0.3);
        let empty = BoundingBox::<f64, 3>::empty();
        assert!(empty.transformed(&m).is_empty());
        let infinite = BoundingBox::<f32, 3>::infinite();
        assert!(infinite.transformed(&m).is_infinite());
    }

    #[test]
    fn test_mixed_precision_matrix() {
        let mut b = BoundingBox::new([0.0f32, 0.0, 0.0], [1.0, 1.0, 1.0]);
        b.transform(&Matrix44::<f64>::translation([0.5, -1.0, 2.0]));
        assert_eq!(b, BoundingBox::new([0.5, -1.0, 2.0], [1.5, 0.0, 3.0]));
    }
}
