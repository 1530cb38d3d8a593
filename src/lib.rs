#![cfg_attr(target_arch = "spirv", no_std)]

//! GLSL-vocabulary compatibility layer for shader crates: lowercase type
//! names, the floored `mod` convention, the classic hash/value-noise pair,
//! and the uniform records shared between the host and the demo shaders.

pub mod intrinsics;
pub mod noise;
pub mod uniforms;

pub use glam;

pub use intrinsics::{fract, mix, smoothstep, FloorMod};
pub use noise::{hash, noise};
pub use uniforms::{DemoUniforms, SceneUniforms, VertOut};

use glam::{Mat2, Mat3, Mat4, Vec2, Vec3, Vec4};

pub use core::f32::consts::PI;

// GLSL spellings of the native glam types. The constructor functions of the
// same names come along below, so `let p: vec2 = vec2(0.5, 1.0);` reads as
// it would in a shader.
#[allow(non_camel_case_types)]
pub type vec2 = Vec2;
#[allow(non_camel_case_types)]
pub type vec3 = Vec3;
#[allow(non_camel_case_types)]
pub type vec4 = Vec4;
#[allow(non_camel_case_types)]
pub type mat2 = Mat2;
#[allow(non_camel_case_types)]
pub type mat3 = Mat3;
#[allow(non_camel_case_types)]
pub type mat4 = Mat4;

pub use glam::{mat2, mat3, mat4, vec2, vec3, vec4};
