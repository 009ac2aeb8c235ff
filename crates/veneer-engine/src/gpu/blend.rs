/// Blend state for premultiplied-alpha output.
///
/// Fixed-function equivalent of `paint::blend`: `src + dst * (1 - src.a)`.
/// Emissive fragments (alpha 0) therefore add their colour.
pub fn premul_alpha_blend() -> wgpu::BlendState {
    let component = wgpu::BlendComponent {
        src_factor: wgpu::BlendFactor::One,
        dst_factor: wgpu::BlendFactor::OneMinusSrcAlpha,
        operation: wgpu::BlendOperation::Add,
    };
    wgpu::BlendState { color: component, alpha: component }
}
