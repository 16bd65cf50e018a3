//! Orb renderer - CPU path tracing.
//!
//! A Monte Carlo path tracer over spherical scenes: rays leave a thin-lens
//! camera, bounce through diffuse, metallic, and dielectric surfaces, and
//! accumulate attenuated sky light. Pixels are rendered in independent
//! buckets, each with its own seeded random stream, so frames are
//! reproducible for a given seed regardless of worker count.

mod bucket;
mod camera;
mod hittable;
mod material;
mod output;
mod renderer;
pub mod sampling;
mod sphere;

pub use bucket::{generate_buckets, render_bucket, Bucket, BucketResult, DEFAULT_BUCKET_SIZE};
pub use camera::Camera;
pub use hittable::{HitRecord, Hittable, HittableList};
pub use material::{Color, Dielectric, Lambertian, Material, Metal, Scatter};
pub use output::{save_png, save_ppm, write_ppm, OutputError};
pub use renderer::{
    color_to_rgb8, linear_to_gamma, ray_color, render, render_pixel, ImageBuffer, RenderConfig,
};
pub use sphere::Sphere;

/// Re-export common math types from orb_math
pub use orb_math::{Interval, Ray, Vec3};
