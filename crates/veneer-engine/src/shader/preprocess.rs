use std::collections::HashSet;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::LazyLock;

use regex::{Captures, Regex};

use super::{ShaderError, ShaderStore};

const DEFAULT_VERSION: &str = "#version 450";
const VERTEX_OUTPUT_HEADER: &str = "internal/vertex_output.glsl";
const REAL_MAIN_MARKER: &str = "{{ real_main }}";

static INCLUDE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"^\s*#\s*include\s+["<]([^">]*)[">]"#).expect("include pattern is valid")
});

static INPUT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?m)^[ \t]*layout\s*\(\s*location\s*=\s*(-?\d+)\s*\)\s*(?:flat\s+)?in\s+(?:(?:lowp|mediump|highp)\s+)?\w+\s+\w+\s*;",
    )
    .expect("input pattern is valid")
});

static PLACEHOLDER_INPUT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)^([ \t]*)layout\s*\(\s*location\s*=\s*-1\s*\)\s+in\b")
        .expect("placeholder pattern is valid")
});

static BINDING_SET: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?m)^([ \t]*layout\s*\([^)\n]*?)set\s*=\s*(-?\d+)([^)\n]*\)\s*(?:(?:readonly\s+)?buffer|uniform))",
    )
    .expect("binding set pattern is valid")
});

static MAIN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"void\s+main\s*\([^)]*\)").expect("main pattern is valid")
});

static REAL_MAIN_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Pipeline stage a source is compiled for.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum ShaderStage {
    Vertex,
    Fragment,
}

impl ShaderStage {
    fn define(self) -> &'static str {
        match self {
            ShaderStage::Vertex => "#define VENEER_VERTEX_SHADER",
            ShaderStage::Fragment => "#define VENEER_FRAGMENT_SHADER",
        }
    }
}

/// Device capabilities that change the injected headers.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct ShaderCaps {
    /// Storage buffers are available for the masking array; otherwise a
    /// fixed-size uniform buffer is used.
    pub structured_buffer: bool,
}

impl Default for ShaderCaps {
    fn default() -> Self {
        Self { structured_buffer: true }
    }
}

/// Turns a shader plus its `#include`s into one self-contained source.
///
/// Steps, in order:
/// 1. internal headers (precision, global uniforms, masking info, masking
///    buffer) are expanded ahead of the shader;
/// 2. `#include` lines are replaced by the included source, once per file;
/// 3. `#version` is hoisted to the first line and `#extension` lines
///    right after it, followed by a stage define;
/// 4. vertex shaders get their `main` renamed and wrapped by the vertex
///    output header;
/// 5. the `location = -1` placeholder input is moved after the highest
///    declared input location;
/// 6. binding sets are shifted so that the lowest (negative, internal) set
///    becomes 0.
pub struct Preprocessor<'a, S: ShaderStore + ?Sized> {
    store: &'a S,
    caps: ShaderCaps,
}

impl<'a, S: ShaderStore + ?Sized> Preprocessor<'a, S> {
    pub fn new(store: &'a S) -> Self {
        Self { store, caps: ShaderCaps::default() }
    }

    pub fn with_caps(mut self, caps: ShaderCaps) -> Self {
        self.caps = caps;
        self
    }

    fn internal_headers(&self) -> [&'static str; 4] {
        let masking_buffer = if self.caps.structured_buffer {
            "internal/masking_buffer_ssbo.glsl"
        } else {
            "internal/masking_buffer_ubo.glsl"
        };
        [
            "internal/precision.glsl",
            "internal/global_uniforms.glsl",
            "internal/masking_info.glsl",
            masking_buffer,
        ]
    }

    fn load(&self, name: &str) -> Result<std::borrow::Cow<'a, str>, ShaderError> {
        self.store.load_raw(name).ok_or_else(|| ShaderError::NotFound(name.to_owned()))
    }

    /// Produces the complete source of `main_name` for `stage`.
    pub fn process(&self, main_name: &str, stage: ShaderStage) -> Result<String, ShaderError> {
        let mut expansion = Expansion::default();

        let mut code = String::new();
        for header in self.internal_headers() {
            let src = self.load(header)?;
            code.push_str(&expansion.expand(self.store, header, &src)?);
            code.push('\n');
        }

        let main_src = self.load(main_name)?;
        code.push_str(&expansion.expand(self.store, main_name, &main_src)?);

        if stage == ShaderStage::Vertex {
            code = self.wrap_vertex_main(main_name, &code, &mut expansion)?;
        }

        let code = renumber_placeholder_inputs(&code);
        let code = shift_binding_sets(&code);

        log::debug!(
            "preprocessed {main_name} ({stage:?}): {} files, {} bytes",
            expansion.included.len(),
            code.len()
        );

        Ok(expansion.assemble(stage, &code))
    }

    fn wrap_vertex_main(
        &self,
        main_name: &str,
        code: &str,
        expansion: &mut Expansion,
    ) -> Result<String, ShaderError> {
        if !MAIN.is_match(code) {
            return Err(ShaderError::MissingMain(main_name.to_owned()));
        }

        let id = REAL_MAIN_COUNTER.fetch_add(1, Ordering::Relaxed);
        let real_main = format!("real_main_{id:04x}");

        let wrapper_src = self.load(VERTEX_OUTPUT_HEADER)?;
        let wrapper = expansion.expand(self.store, VERTEX_OUTPUT_HEADER, &wrapper_src)?;

        let mut out = MAIN.replace_all(code, format!("void {real_main}()")).into_owned();
        out.push_str(&wrapper.replace(REAL_MAIN_MARKER, &real_main));
        out.push('\n');
        Ok(out)
    }
}

/// Include-expansion state shared across one `process` call.
#[derive(Debug, Default)]
struct Expansion {
    version: Option<String>,
    extensions: Vec<String>,
    chain: Vec<String>,
    included: HashSet<String>,
}

impl Expansion {
    fn expand<S: ShaderStore + ?Sized>(
        &mut self,
        store: &S,
        name: &str,
        src: &str,
    ) -> Result<String, ShaderError> {
        if let Some(start) = self.chain.iter().position(|n| n == name) {
            let mut cycle = self.chain[start..].to_vec();
            cycle.push(name.to_owned());
            return Err(ShaderError::IncludeCycle(cycle.join(" -> ")));
        }

        self.chain.push(name.to_owned());
        self.included.insert(name.to_owned());

        let mut code = String::with_capacity(src.len());
        for line in src.lines() {
            let trimmed = line.trim_start();

            if trimmed.starts_with("#version") {
                if self.version.is_none() {
                    self.version = Some(trimmed.trim_end().to_owned());
                }
                continue;
            }

            if trimmed.starts_with("#extension") {
                let ext = trimmed.trim_end();
                if !self.extensions.iter().any(|e| e == ext) {
                    self.extensions.push(ext.to_owned());
                }
                continue;
            }

            if let Some(caps) = INCLUDE.captures(line) {
                let include = caps[1].trim();

                if !self.chain.iter().any(|n| n == include) && self.included.contains(include) {
                    log::trace!("{name}: `{include}` already included");
                    continue;
                }

                let Some(include_src) = store.load_raw(include) else {
                    return Err(ShaderError::MissingInclude {
                        name: include.to_owned(),
                        included_from: name.to_owned(),
                    });
                };

                log::trace!("{name}: including `{include}`");
                code.push_str(&self.expand(store, include, &include_src)?);
                code.push('\n');
                continue;
            }

            code.push_str(line);
            code.push('\n');
        }

        self.chain.pop();
        Ok(code)
    }

    fn assemble(&self, stage: ShaderStage, code: &str) -> String {
        let version = self.version.as_deref().unwrap_or(DEFAULT_VERSION);

        let mut out = String::with_capacity(code.len() + 256);
        out.push_str(version);
        out.push('\n');
        for ext in &self.extensions {
            out.push_str(ext);
            out.push('\n');
        }
        out.push_str(stage.define());
        out.push('\n');
        out.push_str(code);
        out
    }
}

/// Moves `layout(location = -1) in` after the highest declared input.
fn renumber_placeholder_inputs(code: &str) -> String {
    let mut last = INPUT
        .captures_iter(code)
        .filter_map(|c| c[1].parse::<i32>().ok())
        .fold(0, i32::max);

    PLACEHOLDER_INPUT
        .replace_all(code, |caps: &Captures<'_>| {
            last += 1;
            format!("{}layout(location = {last}) in", &caps[1])
        })
        .into_owned()
}

/// Shifts every `set = N` so that the lowest one becomes 0.
fn shift_binding_sets(code: &str) -> String {
    let min = BINDING_SET
        .captures_iter(code)
        .filter_map(|c| c[2].parse::<i32>().ok())
        .min()
        .unwrap_or(0);

    if min >= 0 {
        return code.to_owned();
    }

    BINDING_SET
        .replace_all(code, |caps: &Captures<'_>| {
            let set = caps[2].parse::<i32>().unwrap_or(0) - min;
            format!("{}set = {set}{}", &caps[1], &caps[3])
        })
        .into_owned()
}
