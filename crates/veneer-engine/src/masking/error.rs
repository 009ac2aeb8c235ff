use thiserror::Error;

/// Producer-side problems with a [`MaskingInfo`](super::MaskingInfo).
///
/// The shading functions never fail; these are reported by
/// `MaskingInfo::validate` so that callers can catch bad state before it is
/// uploaded.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MaskingError {
    #[error("masking field `{0}` is not finite")]
    NonFinite(&'static str),

    #[error("masking field `{field}` must be positive, got {value}")]
    NonPositive { field: &'static str, value: f32 },

    #[error("masking rect is inverted ({width} x {height})")]
    InvertedRect { width: f32, height: f32 },
}
