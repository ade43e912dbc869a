use crate::scalar::Scalar;
use num_traits::AsPrimitive;

pub mod transform;

/// Axis-aligned bounding box over a scalar domain `T` in `D` dimensions.
///
/// Emptiness is encoded in the bounds themselves: an empty box has `min` at the
/// highest and `max` at the lowest representable value on every axis, so plain
/// min/max extension turns it into the degenerate box around the first point.
/// A box inverted on only some axes is *not* empty. Together with [`has_volume`]
/// this gives a three-way classification: empty, degenerate, volumetric.
///
/// [`has_volume`]: BoundingBox::has_volume
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct BoundingBox<T, const D: usize> {
    pub min: [T; D],
    pub max: [T; D],
}

impl<T: Scalar, const D: usize> BoundingBox<T, D> {
    /// Creates a box from explicit corners. An inverted pair is kept as given.
    pub fn new(min: [T; D], max: [T; D]) -> Self {
        Self { min, max }
    }

    /// Creates the degenerate box containing exactly `point`.
    pub fn from_point(point: [T; D]) -> Self {
        Self { min: point, max: point }
    }

    pub fn empty() -> Self {
        Self { min: [T::highest(); D], max: [T::lowest(); D] }
    }

    pub fn infinite() -> Self {
        Self { min: [T::lowest(); D], max: [T::highest(); D] }
    }

    /// Builds a box of another scalar domain with `as` conversion per component.
    /// Float to integer truncates toward zero and saturates; narrowing integers
    /// keep the low bits.
    pub fn cast<U>(&self) -> BoundingBox<U, D>
    where
        T: AsPrimitive<U>,
        U: Scalar,
    {
        BoundingBox { min: self.min.map(|v| v.as_()), max: self.max.map(|v| v.as_()) }
    }

    pub fn make_empty(&mut self) {
        *self = Self::empty();
    }

    pub fn make_infinite(&mut self) {
        *self = Self::infinite();
    }

    pub fn min(&self) -> [T; D] {
        self.min
    }

    pub fn max(&self) -> [T; D] {
        self.max
    }

    pub fn set_min(&mut self, min: [T; D]) {
        self.min = min;
    }

    pub fn set_max(&mut self, max: [T; D]) {
        self.max = max;
    }

    /// True iff `min > max` on every axis.
    pub fn is_empty(&self) -> bool {
        (0..D).all(|i| self.min[i] > self.max[i])
    }

    pub fn is_infinite(&self) -> bool {
        (0..D).all(|i| self.min[i] == T::lowest() && self.max[i] == T::highest())
    }

    /// True iff `min < max` strictly on every axis.
    pub fn has_volume(&self) -> bool {
        (0..D).all(|i| self.min[i] < self.max[i])
    }

    /// Grows the box to contain `point`.
    pub fn extend_by_point(&mut self, point: &[T; D]) {
        for i in 0..D {
            if point[i] < self.min[i] {
                self.min[i] = point[i];
            }
            if point[i] > self.max[i] {
                self.max[i] = point[i];
            }
        }
    }

    /// Grows the box to contain `other`. Union is associative and commutative.
    pub fn extend_by_box(&mut self, other: &Self) {
        for i in 0..D {
            if other.min[i] < self.min[i] {
                self.min[i] = other.min[i];
            }
            if other.max[i] > self.max[i] {
                self.max[i] = other.max[i];
            }
        }
    }

    /// `max - min` per axis. Meaningless (but well defined) for an empty box.
    pub fn size(&self) -> [T; D] {
        std::array::from_fn(|i| self.max[i].diff(self.min[i]))
    }

    pub fn center(&self) -> [T; D] {
        std::array::from_fn(|i| self.min[i].sum(self.max[i]).halve())
    }

    /// Index of the longest axis, preferring the lowest index on ties.
    pub fn major_axis(&self) -> usize {
        let size = self.size();
        let mut major = 0;
        for i in 1..D {
            if size[i] > size[major] {
                major = i;
            }
        }
        major
    }

    /// Inclusive containment test.
    pub fn intersects_point(&self, point: &[T; D]) -> bool {
        (0..D).all(|i| self.min[i] <= point[i] && point[i] <= self.max[i])
    }

    /// Inclusive overlap test; touching faces count as overlapping.
    pub fn intersects_box(&self, other: &Self) -> bool {
        (0..D).all(|i| self.min[i] <= other.max[i] && other.min[i] <= self.max[i])
    }

    /// All `2^D` corners, ordered by bitmask: bit `i` selects `max[i]` over `min[i]`.
    pub fn corners(&self) -> impl Iterator<Item = [T; D]> + '_ {
        (0..1usize << D).map(move |mask| {
            std::array::from_fn(|i| if mask & (1 << i) != 0 { self.max[i] } else { self.min[i] })
        })
    }
}

impl<T: Scalar, const D: usize> Default for BoundingBox<T, D> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<T: Scalar, const D: usize> From<[T; D]> for BoundingBox<T, D> {
    fn from(point: [T; D]) -> Self {
        Self::from_point(point)
    }
}
