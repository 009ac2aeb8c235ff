//! Coordinate and geometry types shared by the shading functions.
//!
//! Canonical CPU space:
//! - Origin top-left
//! - +X right, +Y down
//!
//! Masking space is whatever space `MaskingInfo::to_masking_space` maps
//! into; the shading math only requires that the masking rect and the
//! fragment position live in the same space.

mod mat3;
mod rect;
mod vec2;

pub use mat3::Mat3;
pub use rect::Rect;
pub use vec2::Vec2;
