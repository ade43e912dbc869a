//! # aabbkit
//!
//! `aabbkit` is a Rust library for axis-aligned bounding boxes in 2D and 3D over
//! integer (`i16`, `i32`, `i64`) and floating point (`f32`, `f64`) domains, with
//! batch operations that spread large point arrays across worker threads.
//!
//! ## Features
//!
//! - **Sentinel states**: empty and infinite boxes are encoded in the bounds, so
//!   extending an empty box by a point needs no special case.
//! - **Cross-domain conversion**: any box can be cast to another scalar domain.
//! - **Transforms**: float boxes can be transformed by 3x3 / 4x4 homogeneous
//!   matrices, bounding all `2^D` transformed corners.
//! - **Batch operations**: `extend_by_points` reduces per-worker boxes and merges
//!   them deterministically; `intersects_points` scatters results into disjoint
//!   output slices. Both run on rayon with an explicit [`DispatchConfig`].
//!
//! ## Main Interface
//!
//! The primary type is [`BoundingBox`]. The aliases [`Box2s`] through [`Box3d`]
//! name the supported instantiations.

mod array;
mod batch;
mod bounds;
mod error;
mod matrix;
pub mod parallel;
mod scalar;

pub use array::FixedArray;
pub use array::PointArray;
pub use bounds::BoundingBox;
pub use error::Error;
pub use error::Result;
pub use matrix::Matrix33;
pub use matrix::Matrix44;
pub use matrix::PointTransform;
pub use parallel::DispatchConfig;
pub use parallel::Dispatcher;
pub use scalar::Real;
pub use scalar::Scalar;

pub type Box2s = BoundingBox<i16, 2>;
pub type Box2i = BoundingBox<i32, 2>;
pub type Box2i64 = BoundingBox<i64, 2>;
pub type Box2f = BoundingBox<f32, 2>;
pub type Box2d = BoundingBox<f64, 2>;
pub type Box3s = BoundingBox<i16, 3>;
pub type Box3i = BoundingBox<i32, 3>;
pub type Box3i64 = BoundingBox<i64, 3>;
pub type Box3f = BoundingBox<f32, 3>;
pub type Box3d = BoundingBox<f64, 3>;

// Point arrays matching each box alias.
pub type V2sArray = PointArray<i16, 2>;
pub type V2iArray = PointArray<i32, 2>;
pub type V2i64Array = PointArray<i64, 2>;
pub type V2fArray = PointArray<f32, 2>;
pub type V2dArray = PointArray<f64, 2>;
pub type V3sArray = PointArray<i16, 3>;
pub type V3iArray = PointArray<i32, 3>;
pub type V3i64Array = PointArray<i64, 3>;
pub type V3fArray = PointArray<f32, 3>;
pub type V3dArray = PointArray<f64, 3>;
