//! Rounded-rectangle masking.
//!
//! CPU reference of the masking header: a superellipse distance field around
//! the masking rect, turned into an alpha falloff over the blend range, with
//! an optional border band and an optional hollow (discarded) interior.
//!
//! All functions are pure and evaluated per fragment; nothing here holds
//! state across fragments.

mod compositor;
mod distance;
mod error;
mod fragment;
mod info;

pub use compositor::{Coverage, Masking};
pub use distance::{distance_from_drawing_rect, distance_from_rounded_rect};
pub use error::MaskingError;
pub use fragment::FragmentInput;
pub use info::MaskingInfo;
