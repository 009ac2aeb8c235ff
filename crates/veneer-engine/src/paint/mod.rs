//! Colour model shared by the shading functions.
//!
//! Scope:
//! - four-channel colour with explicit premultiply/blend steps
//! - emissive encoding helpers
//! - HSV conversion
//! - the four-corner border gradient
//!
//! Geometry types remain in `coords`.

pub mod color;
pub mod gradient;
pub mod hsv;

pub use color::{blend, Rgba};
pub use gradient::BorderGradient;
pub use hsv::{hsv_to_rgb, rgb_to_hsv};
