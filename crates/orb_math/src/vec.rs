//! Vector helpers for surface scattering.

use crate::Vec3;

/// Returns true if every component of the vector is very close to zero.
///
/// Scatter directions this small are degenerate (they would produce a
/// zero-length ray) and callers substitute the surface normal instead.
#[inline]
pub fn near_zero(v: Vec3) -> bool {
    const EPS: f32 = 1e-8;
    v.x.abs() < EPS && v.y.abs() < EPS && v.z.abs() < EPS
}

/// Reflect a vector about a normal.
#[inline]
pub fn reflect(v: Vec3, n: Vec3) -> Vec3 {
    v - 2.0 * v.dot(n) * n
}

/// Refract a unit vector through a surface with the given index ratio.
///
/// Implements Snell's law via the perpendicular/parallel decomposition.
/// The caller must already have ruled out total internal reflection;
/// `uv` must be unit length and `n` the unit normal on the incoming side.
#[inline]
pub fn refract(uv: Vec3, n: Vec3, etai_over_etat: f32) -> Vec3 {
    let cos_theta = (-uv).dot(n).min(1.0);
    let r_out_perp = etai_over_etat * (uv + cos_theta * n);
    let r_out_parallel = -(1.0 - r_out_perp.length_squared()).abs().sqrt() * n;
    r_out_perp + r_out_parallel
}
