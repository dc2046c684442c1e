//! Math type aliases used by the geometry passes.
//!
//! Rendering data is always f32; these aliases keep the call sites short.

pub use nalgebra;

/// 2D vector (f32).
pub type Vec2 = nalgebra::Vector2<f32>;

/// 3D vector (f32).
pub type Vec3 = nalgebra::Vector3<f32>;

/// Normalize `v` in place, leaving zero-length vectors untouched.
pub fn normalize_or_zero(v: &mut Vec3) {
    let len_sq = v.norm_squared();
    if len_sq > 0.0 {
        *v /= len_sq.sqrt();
    }
}
