use glam::{Vec2, Vec3};

#[cfg(target_arch = "spirv")]
use spirv_std::num_traits::Float;

/// GLSL `fract`: `x - floor(x)`, in `[0, 1)` for finite input. Not the same
/// as `f32::fract`, which truncates and goes negative for negative `x`.
#[inline]
pub fn fract(x: f32) -> f32 {
    x - x.floor()
}

/// GLSL `mix` in the `a + t * (b - a)` form.
#[inline]
pub fn mix(a: f32, b: f32, t: f32) -> f32 {
    a + t * (b - a)
}

#[inline]
pub fn smoothstep(edge0: f32, edge1: f32, x: f32) -> f32 {
    let t = ((x - edge0) / (edge1 - edge0)).clamp(0.0, 1.0);
    t * t * (3.0 - 2.0 * t)
}

/// Floored modulo, the GLSL `mod` convention: the result takes the sign of
/// the divisor, so `(-1.0).floor_mod(4.0)` is `3.0` where Rust's `%` would
/// give `-1.0`. Computed as `x - rhs * floor(x / rhs)` so the convention
/// holds on every target; a zero divisor follows native float semantics.
pub trait FloorMod {
    #[must_use]
    fn floor_mod(self, rhs: f32) -> Self;
}

impl FloorMod for f32 {
    #[inline]
    fn floor_mod(self, rhs: f32) -> Self {
        self - rhs * (self / rhs).floor()
    }
}

impl FloorMod for Vec2 {
    #[inline]
    fn floor_mod(self, rhs: f32) -> Self {
        self - rhs * (self / rhs).floor()
    }
}

impl FloorMod for Vec3 {
    #[inline]
    fn floor_mod(self, rhs: f32) -> Self {
        self - rhs * (self / rhs).floor()
    }
}
