//! CPU reference rasterizer.
//!
//! Evaluates the masking and blob functions once per pixel centre and blends
//! the results into a premultiplied canvas. It is slow and exact; use it to
//! check what the GPU headers should produce.

mod canvas;

pub use canvas::{Canvas, QuadDraw};
