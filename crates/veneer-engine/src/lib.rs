//! Veneer engine crate.
//!
//! Shading building blocks for a UI renderer: the GLSL header fragments that
//! get injected into every shader, the CPU-side data layouts that feed them,
//! and a CPU reference of each shading function so that the math can be
//! exercised (and rasterized) without a GPU.

pub mod coords;
pub mod gpu;
pub mod logging;
pub mod masking;
pub mod noise;
pub mod paint;
pub mod progress;
pub mod raster;
pub mod shader;
