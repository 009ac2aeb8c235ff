//! GPU-side data layouts consumed by the shader headers.
//!
//! Only layouts live here: `bytemuck` Pod mirrors of the std140 blocks, the
//! per-vertex attribute structs with their `wgpu` buffer layouts, and the
//! blend state the premultiplied output expects. Creating devices, buffers
//! and pipelines is the host renderer's job.

mod blend;
mod masking_buffer;
mod uniforms;
mod vertex;

pub use blend::premul_alpha_blend;
pub use masking_buffer::{MaskingBuffer, MASKING_UBO_CAPACITY};
pub use uniforms::{GlobalUniforms, GraphicsConventions, MaskingUniform, WrapMode};
pub use vertex::{ParticleVertex, PositionVertex, TexturedVertex2D, TexturedVertex3D};
