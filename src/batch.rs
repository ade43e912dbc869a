use crate::array::{FixedArray, PointArray};
use crate::bounds::BoundingBox;
use crate::error::{Error, Result};
use crate::parallel::{Dispatcher, ReduceTask, ScatterTask};
use crate::scalar::Scalar;
use std::ops::Range;

/// Extends a worker-private box by every point in its partition.
struct ExtendByTask<'a, T, const D: usize> {
    points: &'a [[T; D]],
}

impl<T: Scalar, const D: usize> ReduceTask for ExtendByTask<'_, T, D> {
    type Accumulator = BoundingBox<T, D>;

    fn identity(&self) -> BoundingBox<T, D> {
        BoundingBox::empty()
    }

    fn accumulate(&self, acc: &mut BoundingBox<T, D>, range: Range<usize>) {
        for point in &self.points[range] {
            acc.extend_by_point(point);
        }
    }

    fn combine(&self, into: &mut BoundingBox<T, D>, from: &BoundingBox<T, D>) {
        into.extend_by_box(from);
    }
}

/// Writes `bounds.intersects_point` for every point of its partition.
struct IntersectsTask<'a, T, const D: usize> {
    bounds: &'a BoundingBox<T, D>,
    points: &'a [[T; D]],
}

impl<T: Scalar, const D: usize> ScatterTask for IntersectsTask<'_, T, D> {
    type Output = bool;

    fn execute(&self, start: usize, out: &mut [bool]) {
        let points = &self.points[start..start + out.len()];
        for (slot, point) in out.iter_mut().zip(points) {
            *slot = self.bounds.intersects_point(point);
        }
    }
}

impl<T: Scalar, const D: usize> BoundingBox<T, D> {
    /// Grows the box to contain every point of `points`.
    ///
    /// Each worker bounds its own partition starting from an empty box; the
    /// partial boxes are then merged into `self` in worker-id order. The result
    /// equals extending by each point in turn, for any worker count.
    pub fn extend_by_points(&mut self, points: &PointArray<T, D>, dispatcher: &Dispatcher) {
        let task = ExtendByTask { points: points.as_slice() };
        dispatcher.reduce(&task, points.len(), self);
    }

    /// Tests every point of `points` for containment.
    pub fn intersects_points(&self, points: &PointArray<T, D>, dispatcher: &Dispatcher) -> FixedArray<bool> {
        let mut mask = FixedArray::filled(points.len(), false);
        let task = IntersectsTask { bounds: self, points: points.as_slice() };
        dispatcher.scatter(&task, mask.as_mut_slice());
        mask
    }

    /// Like [`intersects_points`](Self::intersects_points), writing into a
    /// caller-provided buffer of exactly `points.len()` entries.
    pub fn intersects_points_into(
        &self,
        points: &PointArray<T, D>,
        dispatcher: &Dispatcher,
        out: &mut [bool],
    ) -> Result<()> {
        if out.len() != points.len() {
            return Err(Error::LengthMismatch { expected: points.len(), actual: out.len() });
        }
        let task = IntersectsTask { bounds: self, points: points.as_slice() };
        dispatcher.scatter(&task, out);
        Ok(())
    }
}
