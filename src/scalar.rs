use num_traits::{Bounded, Float};
use std::fmt::Debug;

/// A numeric domain that bounding boxes can be built over.
///
/// Implemented for `i16`, `i32`, `i64`, `f32` and `f64`. The arithmetic helpers
/// never fault: integer domains wrap on overflow, float domains follow IEEE rules.
/// This keeps `size()` and `center()` well defined on empty boxes.
pub trait Scalar: Copy + PartialOrd + Debug + Bounded + Send + Sync + 'static {
    /// The most negative representable value (`-MAX` for floats, not `-inf`).
    fn lowest() -> Self {
        Self::min_value()
    }

    /// The most positive representable value (`MAX` for floats, not `inf`).
    fn highest() -> Self {
        Self::max_value()
    }

    /// `self - rhs` in the native arithmetic of the domain.
    fn diff(self, rhs: Self) -> Self;

    /// `self + rhs` in the native arithmetic of the domain.
    fn sum(self, rhs: Self) -> Self;

    /// `self / 2`, truncating toward zero for integers.
    fn halve(self) -> Self;
}

/// Floating point scalar domains. Only these support matrix transforms.
pub trait Real: Scalar + Float {}

macro_rules! impl_integer_scalar {
    ($($t:ty),*) => {
        $(
            impl Scalar for $t {
                #[inline]
                fn diff(self, rhs: Self) -> Self {
                    self.wrapping_sub(rhs)
                }

                #[inline]
                fn sum(self, rhs: Self) -> Self {
                    self.wrapping_add(rhs)
                }

                #[inline]
                fn halve(self) -> Self {
                    self / 2
                }
            }
        )*
    };
}

macro_rules! impl_real_scalar {
    ($($t:ty),*) => {
        $(
            impl Scalar for $t {
                #[inline]
                fn diff(self, rhs: Self) -> Self {
                    self - rhs
                }

                #[inline]
                fn sum(self, rhs: Self) -> Self {
                    self + rhs
                }

                #[inline]
                fn halve(self) -> Self {
                    self / 2.0
                }
            }

            impl Real for $t {}
        )*
    };
}

impl_integer_scalar!(i16, i32, i64);
impl_real_scalar!(f32, f64);
