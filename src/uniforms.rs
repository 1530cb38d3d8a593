use bytemuck::NoUninit;
use glam::{Mat4, Vec2, Vec4};

/// Interstage record for the fullscreen demo passes. `pos` is the value the
/// consumer's vertex stage hands to `#[spirv(position)]` (homogeneous
/// clip-space), `uv` rides along to the fragment stage.
#[derive(Copy, Clone, Debug, Default, NoUninit)]
#[repr(C)]
pub struct VertOut {
    pub pos: Vec4,
    pub uv: Vec2,
}

/// Per-frame parameter block for the demo shaders, uploaded by the host
/// with `bytemuck::bytes_of` each frame. Layout contract: three 16-byte
/// vec4 records, 48 bytes total, no interior padding.
///
/// Only `iResolution.xy`, `iTimeVec.x` and `iMouse` carry data today; the
/// remaining components are written as zero and left uninterpreted.
#[allow(non_snake_case)]
#[derive(Copy, Clone, Debug, Default, NoUninit)]
#[repr(C)]
pub struct DemoUniforms {
    /// Viewport width and height in `.xy`.
    pub iResolution: Vec4,
    /// Elapsed seconds in `.x`.
    pub iTimeVec: Vec4,
    /// Pointer position in `.xy`, last click position in `.zw`.
    pub iMouse: Vec4,
}

impl DemoUniforms {
    pub fn new(resolution: Vec2, time: f32, cursor: Vec2, click: Vec2) -> Self {
        Self {
            iResolution: resolution.extend(0.0).extend(0.0),
            iTimeVec: Vec4::new(time, 0.0, 0.0, 0.0),
            iMouse: Vec4::new(cursor.x, cursor.y, click.x, click.y),
        }
    }
}

/// Model/view/projection block for the mesh path: three column-major 4x4
/// blocks, 192 bytes.
#[derive(Copy, Clone, Debug, NoUninit)]
#[repr(C)]
pub struct SceneUniforms {
    pub model: Mat4,
    pub view: Mat4,
    pub projection: Mat4,
}

impl Default for SceneUniforms {
    fn default() -> Self {
        Self {
            model: Mat4::IDENTITY,
            view: Mat4::IDENTITY,
            projection: Mat4::IDENTITY,
        }
    }
}
