use std::borrow::Cow;
use std::collections::HashMap;
use std::path::{Component, Path, PathBuf};

/// Built-in headers, keyed by include name.
pub const BUILTIN_HEADERS: &[(&str, &str)] = &[
    ("internal/precision.glsl", include_str!("headers/internal/precision.glsl")),
    ("internal/global_uniforms.glsl", include_str!("headers/internal/global_uniforms.glsl")),
    ("internal/masking_info.glsl", include_str!("headers/internal/masking_info.glsl")),
    ("internal/masking_buffer_ssbo.glsl", include_str!("headers/internal/masking_buffer_ssbo.glsl")),
    ("internal/masking_buffer_ubo.glsl", include_str!("headers/internal/masking_buffer_ubo.glsl")),
    ("internal/vertex_output.glsl", include_str!("headers/internal/vertex_output.glsl")),
    ("texture2d_attributes.glsl", include_str!("headers/texture2d_attributes.glsl")),
    ("texture3d_attributes.glsl", include_str!("headers/texture3d_attributes.glsl")),
    ("particle_attributes.glsl", include_str!("headers/particle_attributes.glsl")),
    ("position_attributes.glsl", include_str!("headers/position_attributes.glsl")),
    ("utils.glsl", include_str!("headers/utils.glsl")),
    ("masking.glsl", include_str!("headers/masking.glsl")),
    ("blob.glsl", include_str!("headers/blob.glsl")),
    ("progress.glsl", include_str!("headers/progress.glsl")),
];

/// Looks up a built-in header by include name.
pub fn builtin_header(name: &str) -> Option<&'static str> {
    BUILTIN_HEADERS.iter().find(|(n, _)| *n == name).map(|(_, src)| *src)
}

/// Source of shader text, addressed by include name.
pub trait ShaderStore {
    fn load_raw(&self, name: &str) -> Option<Cow<'_, str>>;
}

/// Built-in headers with an in-memory layer of user sources on top.
#[derive(Debug, Default, Clone)]
pub struct EmbeddedStore {
    sources: HashMap<String, String>,
}

impl EmbeddedStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds (or shadows) a source.
    pub fn insert(&mut self, name: impl Into<String>, source: impl Into<String>) -> &mut Self {
        self.sources.insert(name.into(), source.into());
        self
    }

    pub fn with(mut self, name: impl Into<String>, source: impl Into<String>) -> Self {
        self.insert(name, source);
        self
    }
}

impl ShaderStore for EmbeddedStore {
    fn load_raw(&self, name: &str) -> Option<Cow<'_, str>> {
        self.sources
            .get(name)
            .map(|s| Cow::Borrowed(s.as_str()))
            .or_else(|| builtin_header(name).map(Cow::Borrowed))
    }
}

/// Reads sources from a directory, falling back to the built-in headers.
#[derive(Debug, Clone)]
pub struct DirectoryStore {
    root: PathBuf,
}

impl DirectoryStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

/// Whether `name` stays below the store root (no `..`, no absolute path).
fn is_contained(name: &str) -> bool {
    Path::new(name)
        .components()
        .all(|c| matches!(c, Component::Normal(_) | Component::CurDir))
}

impl ShaderStore for DirectoryStore {
    fn load_raw(&self, name: &str) -> Option<Cow<'_, str>> {
        if !is_contained(name) {
            log::warn!("rejected shader name `{name}` outside {}", self.root.display());
            return None;
        }

        let path = self.root.join(name);
        match std::fs::read_to_string(&path) {
            Ok(src) => Some(Cow::Owned(src)),
            Err(e) => {
                if e.kind() != std::io::ErrorKind::NotFound {
                    log::warn!("failed to read shader {}: {e}", path.display());
                }
                builtin_header(name).map(Cow::Borrowed)
            }
        }
    }
}
