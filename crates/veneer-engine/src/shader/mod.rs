//! GLSL header fragments and the preprocessor that stitches them into
//! complete shader sources.
//!
//! Host shaders `#include` the public headers (`masking.glsl`,
//! `utils.glsl`, ...). The internal headers under `internal/` are never
//! included by hand; [`Preprocessor`] prepends them to every shader and
//! wraps vertex shaders' `main`.

mod error;
mod preprocess;
mod store;

pub use error::ShaderError;
pub use preprocess::{Preprocessor, ShaderCaps, ShaderStage};
pub use store::{builtin_header, DirectoryStore, EmbeddedStore, ShaderStore, BUILTIN_HEADERS};
