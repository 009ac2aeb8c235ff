//! Per-vertex attribute layouts.
//!
//! Each struct matches the `layout(location = N) in` declarations of its
//! vertex-attribute header; keep the two in sync.

use bytemuck::{Pod, Zeroable};

/// Textured 2D vertex (`texture2d_attributes.glsl`).
///
///  offset  0  position       [f32; 2]   loc 0
///  offset  8  colour         [f32; 4]   loc 1  (negative alpha = emissive)
///  offset 24  tex_coord      [f32; 2]   loc 2
///  offset 32  tex_rect       [f32; 4]   loc 3  (left, top, right, bottom)
///  offset 48  blend_range    [f32; 2]   loc 4
///  offset 56  masking_index  i32        loc 5
#[repr(C)]
#[derive(Debug, Copy, Clone, Default, PartialEq, Pod, Zeroable)]
pub struct TexturedVertex2D {
    pub position: [f32; 2],
    pub colour: [f32; 4],
    pub tex_coord: [f32; 2],
    pub tex_rect: [f32; 4],
    pub blend_range: [f32; 2],
    pub masking_index: i32,
}

impl TexturedVertex2D {
    const ATTRS: [wgpu::VertexAttribute; 6] = wgpu::vertex_attr_array![
        0 => Float32x2, // position
        1 => Float32x4, // colour
        2 => Float32x2, // tex_coord
        3 => Float32x4, // tex_rect
        4 => Float32x2, // blend_range
        5 => Sint32     // masking_index
    ];

    pub fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<TexturedVertex2D>() as u64,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRS,
        }
    }
}

/// Textured 3D vertex (`texture3d_attributes.glsl`).
#[repr(C)]
#[derive(Debug, Copy, Clone, Default, PartialEq, Pod, Zeroable)]
pub struct TexturedVertex3D {
    pub position: [f32; 3],
    pub colour: [f32; 4],
    pub tex_coord: [f32; 2],
}

impl TexturedVertex3D {
    const ATTRS: [wgpu::VertexAttribute; 3] = wgpu::vertex_attr_array![
        0 => Float32x3,
        1 => Float32x4,
        2 => Float32x2
    ];

    pub fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<TexturedVertex3D>() as u64,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRS,
        }
    }
}

/// Particle vertex (`particle_attributes.glsl`).
#[repr(C)]
#[derive(Debug, Copy, Clone, Default, PartialEq, Pod, Zeroable)]
pub struct ParticleVertex {
    pub position: [f32; 2],
    pub colour: [f32; 4],
    pub tex_coord: [f32; 2],
    /// Seconds since the particle spawned.
    pub time: f32,
    pub direction: [f32; 2],
}

impl ParticleVertex {
    const ATTRS: [wgpu::VertexAttribute; 5] = wgpu::vertex_attr_array![
        0 => Float32x2, // position
        1 => Float32x4, // colour
        2 => Float32x2, // tex_coord
        3 => Float32,   // time
        4 => Float32x2  // direction
    ];

    pub fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<ParticleVertex>() as u64,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRS,
        }
    }
}

/// Bare position (`position_attributes.glsl`).
#[repr(C)]
#[derive(Debug, Copy, Clone, Default, PartialEq, Pod, Zeroable)]
pub struct PositionVertex {
    pub position: [f32; 2],
}

impl PositionVertex {
    const ATTRS: [wgpu::VertexAttribute; 1] = wgpu::vertex_attr_array![0 => Float32x2];

    pub fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<PositionVertex>() as u64,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn offsets(layout: &wgpu::VertexBufferLayout<'_>) -> Vec<(u32, u64)> {
        layout.attributes.iter().map(|a| (a.shader_location, a.offset)).collect()
    }

    #[test]
    fn textured_2d_layout() {
        let l = TexturedVertex2D::layout();
        assert_eq!(l.array_stride, 60);
        assert_eq!(offsets(&l), vec![(0, 0), (1, 8), (2, 24), (3, 32), (4, 48), (5, 56)]);
    }

    #[test]
    fn textured_3d_layout() {
        let l = TexturedVertex3D::layout();
        assert_eq!(l.array_stride, 36);
        assert_eq!(offsets(&l), vec![(0, 0), (1, 12), (2, 28)]);
    }

    #[test]
    fn particle_layout() {
        let l = ParticleVertex::layout();
        assert_eq!(l.array_stride, 44);
        assert_eq!(offsets(&l), vec![(0, 0), (1, 8), (2, 24), (3, 32), (4, 36)]);
    }

    #[test]
    fn position_layout() {
        assert_eq!(PositionVertex::layout().array_stride, 8);
    }
}
