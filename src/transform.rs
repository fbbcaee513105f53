//! Geometry helpers applied to input images before blending.

pub mod resize;
