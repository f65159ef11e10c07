use bytemuck::{Pod, Zeroable};

/// Per-frame uniforms for the line shader.
#[repr(C)]
#[derive(Copy, Clone, Debug, Pod, Zeroable)]
pub struct LineUniforms {
    /// Surface size in pixels, for pixel -> clip space.
    pub screen_size: [f32; 2],
    pub _padding: [f32; 2],
    pub color: [f32; 4],
}

/// Line shader: vertices arrive in window pixels (origin top-left, Y down).
pub const LINE_SHADER: &str = r#"
struct LineUniforms {
    screen_size: vec2<f32>,
    _padding: vec2<f32>,
    color: vec4<f32>,
};

@group(0) @binding(0) var<uniform> uniforms: LineUniforms;

@vertex
fn vs_main(@location(0) position: vec2<f32>) -> @builtin(position) vec4<f32> {
    let ndc = vec2<f32>(
        position.x / uniforms.screen_size.x * 2.0 - 1.0,
        1.0 - position.y / uniforms.screen_size.y * 2.0,
    );
    return vec4<f32>(ndc, 0.0, 1.0);
}

@fragment
fn fs_main() -> @location(0) vec4<f32> {
    return uniforms.color;
}
"#;
