use bytemuck::{Pod, Zeroable};

use crate::masking::MaskingInfo;

/// Texture wrap mode as encoded in the global uniform block.
#[repr(i32)]
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub enum WrapMode {
    #[default]
    None = 0,
    ClampToEdge = 1,
    ClampToBorder = 2,
    Repeat = 3,
}

/// Coordinate conventions of the active graphics backend.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct GraphicsConventions {
    /// Depth in `[0, 1]` rather than `[-1, 1]`.
    pub depth_range_zero_to_one: bool,
    /// Clip space Y runs from -1 at the top to 1 at the bottom.
    pub clip_space_y_inverted: bool,
    /// Texture coordinate `(0, 0)` is the top-left texel.
    pub uv_origin_top_left: bool,
}

impl GraphicsConventions {
    pub const OPENGL: GraphicsConventions = GraphicsConventions {
        depth_range_zero_to_one: false,
        clip_space_y_inverted: false,
        uv_origin_top_left: false,
    };

    /// Vulkan, Direct3D and Metal.
    pub const MODERN: GraphicsConventions = GraphicsConventions {
        depth_range_zero_to_one: true,
        clip_space_y_inverted: true,
        uv_origin_top_left: true,
    };
}

/// std140 mirror of the global uniform block.
///
/// Layout (96 bytes):
///
///  offset  0  backbuffer_draw             u32
///  offset  4  depth_range_zero_to_one     u32
///  offset  8  clip_space_y_inverted       u32
///  offset 12  uv_origin_top_left          u32
///  offset 16  proj_matrix                 [[f32; 4]; 4]
///  offset 80  wrap_mode_s                 i32
///  offset 84  wrap_mode_t                 i32
///  offset 88  texture_premultiplied       u32
///  offset 92  _pad                        u32
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct GlobalUniforms {
    pub backbuffer_draw: u32,
    pub depth_range_zero_to_one: u32,
    pub clip_space_y_inverted: u32,
    pub uv_origin_top_left: u32,
    pub proj_matrix: [[f32; 4]; 4],
    pub wrap_mode_s: i32,
    pub wrap_mode_t: i32,
    pub texture_premultiplied: u32,
    pub _pad: u32,
}

impl GlobalUniforms {
    pub fn new(conventions: GraphicsConventions, proj_matrix: [[f32; 4]; 4]) -> Self {
        Self {
            backbuffer_draw: 0,
            depth_range_zero_to_one: conventions.depth_range_zero_to_one as u32,
            clip_space_y_inverted: conventions.clip_space_y_inverted as u32,
            uv_origin_top_left: conventions.uv_origin_top_left as u32,
            proj_matrix,
            wrap_mode_s: WrapMode::None as i32,
            wrap_mode_t: WrapMode::None as i32,
            texture_premultiplied: 0,
            _pad: 0,
        }
    }

    pub fn with_backbuffer_draw(mut self, drawing: bool) -> Self {
        self.backbuffer_draw = drawing as u32;
        self
    }

    pub fn with_premultiplied_texture(mut self, premultiplied: bool) -> Self {
        self.texture_premultiplied = premultiplied as u32;
        self
    }

    pub fn with_wrap_modes(mut self, s: WrapMode, t: WrapMode) -> Self {
        self.wrap_mode_s = s as i32;
        self.wrap_mode_t = t as i32;
        self
    }

    /// Column-major orthographic projection mapping the screen rect
    /// `(0, 0)..(width, height)` (top-left origin) to clip space.
    pub fn orthographic(width: f32, height: f32, conventions: GraphicsConventions) -> [[f32; 4]; 4] {
        let (y_scale, y_offset) = if conventions.clip_space_y_inverted {
            (2.0 / height, -1.0)
        } else {
            (-2.0 / height, 1.0)
        };
        [
            [2.0 / width, 0.0, 0.0, 0.0],
            [0.0, y_scale, 0.0, 0.0],
            [0.0, 0.0, 1.0, 0.0],
            [-1.0, y_offset, 0.0, 1.0],
        ]
    }
}

/// std140 mirror of the per-draw `MaskingInfo` struct.
///
/// Layout (192 bytes):
///
///  offset   0  to_masking_space     mat3 as [[f32; 4]; 3]
///  offset  48  is_masking           u32
///  offset  52  corner_radius        f32
///  offset  56  corner_exponent      f32
///  offset  64  masking_rect         [f32; 4]  (left, top, right, bottom)
///  offset  80  border_thickness     f32       (in blend-range units)
///  offset  96  border_colour        mat4 as [[f32; 4]; 4]
///  offset 160  masking_blend_range  f32
///  offset 164  alpha_exponent       f32
///  offset 168  edge_offset          [f32; 2]
///  offset 176  discard_inner        u32
///  offset 180  inner_corner_radius  f32
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct MaskingUniform {
    pub to_masking_space: [[f32; 4]; 3],
    pub is_masking: u32,
    pub corner_radius: f32,
    pub corner_exponent: f32,
    pub _pad0: f32,
    pub masking_rect: [f32; 4],
    pub border_thickness: f32,
    pub _pad1: [f32; 3],
    pub border_colour: [[f32; 4]; 4],
    pub masking_blend_range: f32,
    pub alpha_exponent: f32,
    pub edge_offset: [f32; 2],
    pub discard_inner: u32,
    pub inner_corner_radius: f32,
    pub _pad2: [f32; 2],
}

impl From<&MaskingInfo> for MaskingUniform {
    fn from(info: &MaskingInfo) -> Self {
        let m = info.to_masking_space.cols;
        Self {
            to_masking_space: m.map(|c| [c[0], c[1], c[2], 0.0]),
            is_masking: info.is_masking as u32,
            corner_radius: info.corner_radius,
            corner_exponent: info.corner_exponent,
            _pad0: 0.0,
            masking_rect: info.masking_rect.to_ltrb(),
            border_thickness: info.normalized_border_thickness(),
            _pad1: [0.0; 3],
            border_colour: info.border_colour.to_cols(),
            masking_blend_range: info.masking_blend_range,
            alpha_exponent: info.alpha_exponent,
            edge_offset: info.edge_offset.into(),
            discard_inner: info.discard_inner as u32,
            inner_corner_radius: info.inner_corner_radius,
            _pad2: [0.0; 2],
        }
    }
}
