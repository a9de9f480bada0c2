//! Geometry computed from extracted coordinates.

pub mod distance;
