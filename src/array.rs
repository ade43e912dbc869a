use crate::error::{Error, Result};
use std::ops::Index;

/// A fixed-length, owned sequence of `D`-component points.
///
/// The length is fixed at construction. Points are read-only once stored, which
/// lets batch operations share the array across workers without synchronization.
#[derive(Clone, Debug, PartialEq)]
pub struct PointArray<T, const D: usize> {
    points: Box<[[T; D]]>,
}

impl<T: Copy, const D: usize> PointArray<T, D> {
    pub fn new(points: Vec<[T; D]>) -> Self {
        Self { points: points.into_boxed_slice() }
    }

    /// Builds an array from interleaved coordinates `[x, y, (z,) x, y, (z,) ...]`.
    pub fn from_flat(coords: &[T]) -> Result<Self> {
        if D == 0 || coords.len() % D != 0 {
            return Err(Error::ComponentCount { len: coords.len(), dim: D });
        }
        let points = coords
            .chunks_exact(D)
            .map(|chunk| std::array::from_fn(|i| chunk[i]))
            .collect();
        Ok(Self::new(points))
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&[T; D]> {
        self.points.get(index)
    }

    pub fn as_slice(&self) -> &[[T; D]] {
        &self.points
    }

    pub fn iter(&self) -> std::slice::Iter<'_, [T; D]> {
        self.points.iter()
    }
}

impl<T: Copy, const D: usize> From<Vec<[T; D]>> for PointArray<T, D> {
    fn from(points: Vec<[T; D]>) -> Self {
        Self::new(points)
    }
}

impl<T, const D: usize> Index<usize> for PointArray<T, D> {
    type Output = [T; D];

    fn index(&self, index: usize) -> &[T; D] {
        &self.points[index]
    }
}

/// A fixed-length, owned result buffer written by scatter dispatches.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FixedArray<E> {
    items: Box<[E]>,
}

impl<E: Clone> FixedArray<E> {
    /// Creates an array of `len` copies of `value`.
    pub fn filled(len: usize, value: E) -> Self {
        Self { items: vec![value; len].into_boxed_slice() }
    }
}

impl<E> FixedArray<E> {
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn as_slice(&self) -> &[E] {
        &self.items
    }

    pub fn as_mut_slice(&mut self) -> &mut [E] {
        &mut self.items
    }

    pub fn into_vec(self) -> Vec<E> {
        self.items.into_vec()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, E> {
        self.items.iter()
    }
}

impl<E> Index<usize> for FixedArray<E> {
    type Output = E;

    fn index(&self, index: usize) -> &E {
        &self.items[index]
    }
}
