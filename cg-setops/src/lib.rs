#![doc = document_features::document_features!()]
//! OGC-style set operations over planar shapes: boundary, interior, coercion to a canonical
//! family and pairwise intersection predicates, plus the minimum bounding circle and a set of
//! shape-compactness ratios built on top of it.

/// Geometric primitives and base algorithms
pub mod geometry;

/// Boundary, interior, coercion and the intersection dispatch
pub mod set_ops;

/// Minimum bounding circle and compactness measures
pub mod compact;

/// Helper functions which do not belong to any specific module
pub mod util;

pub const PI: f64 = std::f64::consts::PI;
