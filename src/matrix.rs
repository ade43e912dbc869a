use crate::scalar::Real;
use std::ops::Mul;

/// A matrix that maps `D`-dimensional points to `D`-dimensional points.
pub trait PointTransform<const D: usize> {
    /// Float domain the matrix computes in.
    type Scalar: Real;

    fn transform_point(&self, point: [Self::Scalar; D]) -> [Self::Scalar; D];
}

/// Homogeneous 3x3 matrix for 2D transforms.
///
/// Row-vector convention: points transform as `p' = p * M`, so the translation
/// lives in the last row. A non-trivial last column makes the transform
/// projective and each point is divided by its `w`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Matrix33<S> {
    pub m: [[S; 3]; 3],
}

/// Homogeneous 4x4 matrix for 3D transforms, same conventions as [`Matrix33`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Matrix44<S> {
    pub m: [[S; 4]; 4],
}

impl<S: Real> Matrix33<S> {
    pub fn new(m: [[S; 3]; 3]) -> Self {
        Self { m }
    }

    pub fn identity() -> Self {
        Self::scaling([S::one(), S::one()])
    }

    pub fn scaling(s: [S; 2]) -> Self {
        let (o, z) = (S::one(), S::zero());
        Self::new([[s[0], z, z], [z, s[1], z], [z, z, o]])
    }

    pub fn translation(t: [S; 2]) -> Self {
        let (o, z) = (S::one(), S::zero());
        Self::new([[o, z, z], [z, o, z], [t[0], t[1], o]])
    }

    /// Counter-clockwise rotation by `angle` radians.
    pub fn rotation(angle: S) -> Self {
        let (s, c) = angle.sin_cos();
        let (o, z) = (S::one(), S::zero());
        Self::new([[c, s, z], [-s, c, z], [z, z, o]])
    }
}

impl<S: Real> Matrix44<S> {
    pub fn new(m: [[S; 4]; 4]) -> Self {
        Self { m }
    }

    pub fn identity() -> Self {
        Self::scaling([S::one(), S::one(), S::one()])
    }

    pub fn scaling(s: [S; 3]) -> Self {
        let (o, z) = (S::one(), S::zero());
        Self::new([
            [s[0], z, z, z],
            [z, s[1], z, z],
            [z, z, s[2], z],
            [z, z, z, o],
        ])
    }

    pub fn translation(t: [S; 3]) -> Self {
        let (o, z) = (S::one(), S::zero());
        Self::new([
            [o, z, z, z],
            [z, o, z, z],
            [z, z, o, z],
            [t[0], t[1], t[2], o],
        ])
    }

    /// Counter-clockwise rotation about the Z axis by `angle` radians.
    pub fn rotation_z(angle: S) -> Self {
        let (s, c) = angle.sin_cos();
        let (o, z) = (S::one(), S::zero());
        Self::new([
            [c, s, z, z],
            [-s, c, z, z],
            [z, z, o, z],
            [z, z, z, o],
        ])
    }
}

impl<S: Real> PointTransform<2> for Matrix33<S> {
    type Scalar = S;

    fn transform_point(&self, p: [S; 2]) -> [S; 2] {
        let m = &self.m;
        let a = p[0] * m[0][0] + p[1] * m[1][0] + m[2][0];
        let b = p[0] * m[0][1] + p[1] * m[1][1] + m[2][1];
        let w = p[0] * m[0][2] + p[1] * m[1][2] + m[2][2];
        [a / w, b / w]
    }
}

impl<S: Real> PointTransform<3> for Matrix44<S> {
    type Scalar = S;

    fn transform_point(&self, p: [S; 3]) -> [S; 3] {
        let m = &self.m;
        let a = p[0] * m[0][0] + p[1] * m[1][0] + p[2] * m[2][0] + m[3][0];
        let b = p[0] * m[0][1] + p[1] * m[1][1] + p[2] * m[2][1] + m[3][1];
        let c = p[0] * m[0][2] + p[1] * m[1][2] + p[2] * m[2][2] + m[3][2];
        let w = p[0] * m[0][3] + p[1] * m[1][3] + p[2] * m[2][3] + m[3][3];
        [a / w, b / w, c / w]
    }
}

fn multiply<S: Real, const N: usize>(a: &[[S; N]; N], b: &[[S; N]; N]) -> [[S; N]; N] {
    std::array::from_fn(|i| {
        std::array::from_fn(|j| (0..N).fold(S::zero(), |acc, k| acc + a[i][k] * b[k][j]))
    })
}

/// `a * b` applies `a` first, then `b`.
impl<S: Real> Mul for Matrix33<S> {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        Self::new(multiply(&self.m, &rhs.m))
    }
}

/// `a * b` applies `a` first, then `b`.
impl<S: Real> Mul for Matrix44<S> {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        Self::new(multiply(&self.m, &rhs.m))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close<const D: usize>(a: [f64; D], b: [f64; D]) {
        for i in 0..D {
            assert!((a[i] - b[i]).abs() < 1e-9, "component {} differs: {:?} vs {:?}", i, a, b);
        }
    }

    #[test]
    fn test_translation_then_scaling() {
        let m = Matrix44::translation([1.0, 2.0, 3.0]) * Matrix44::scaling([2.0, 2.0, 2.0]);
        assert_close(m.transform_point([0.0, 0.0, 0.0]), [2.0, 4.0, 6.0]);
    }

    #[test]
    fn test_rotation_2d() {
        let m = Matrix33::rotation(std::f64::consts::FRAC_PI_2);
        assert_close(m.transform_point([1.0, 0.0]), [0.0, 1.0]);
    }

    #[test]
    fn test_projective_divide() {
        let mut m = Matrix44::<f64>::identity();
        m.m[3][3] = 2.0;
        assert_close(m.transform_point([2.0, 4.0, 6.0]), [1.0, 2.0, 3.0]);
    }
}
