use crate::intrinsics::{fract, mix};
use glam::{vec2, Vec2};

#[cfg(target_arch = "spirv")]
use spirv_std::num_traits::Float;

/// The classic 2D shader hash: `fract(sin(dot(p, k)) * 43758.5453)`.
/// Low statistical quality on purpose; the demo shaders depend on this
/// exact formula, so it must not be swapped for a better one.
#[inline]
pub fn hash(p: Vec2) -> f32 {
    fract(p.dot(vec2(12.9898, 78.233)).sin() * 43758.5453)
}

/// 2D value noise: `hash` sampled at the four corners of the containing
/// cell, blended with the Hermite weight `f * f * (3 - 2f)`. Interpolates
/// the lattice exactly and keeps a continuous first derivative across cell
/// boundaries; linear weights would reintroduce banding.
pub fn noise(p: Vec2) -> f32 {
    let i = p.floor();
    let f = p - i;
    let u = f * f * (3.0 - 2.0 * f);
    mix(
        mix(hash(i), hash(i + Vec2::X), u.x),
        mix(hash(i + Vec2::Y), hash(i + Vec2::ONE), u.x),
        u.y,
    )
}
