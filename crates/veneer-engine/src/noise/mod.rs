//! Procedural noise and the noisy blob outline built on it.

mod blob;
mod value;

pub use blob::{blob_alpha_at, BlobParams};
pub use value::{random, smoothstep, value_noise};
