//! Core path tracing integrator and frame driver.
//!
//! Implements Monte Carlo path tracing with:
//! - Recursive ray tracing with configurable depth
//! - Gamma correction
//! - Anti-aliasing via multi-sampling
//! - Parallel bucket rendering with per-bucket random streams

use crate::bucket::{generate_buckets, render_bucket, BucketResult, DEFAULT_BUCKET_SIZE};
use crate::{Camera, Color, HitRecord, Hittable, Ray};
use orb_math::Interval;
use rand::rngs::SmallRng;
use rand::{RngCore, SeedableRng};
use rayon::prelude::*;

/// Render configuration.
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Samples per pixel for anti-aliasing
    pub samples_per_pixel: u32,
    /// Maximum ray bounce depth
    pub max_depth: u32,
    /// Background color when a ray escapes the scene
    pub background: Color,
    /// Whether to use the sky gradient instead of the solid background
    pub use_sky_gradient: bool,
    /// Base seed for the per-bucket random streams
    pub seed: u64,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            samples_per_pixel: 100,
            max_depth: 50,
            background: Color::ZERO,
            use_sky_gradient: true,
            seed: 0,
        }
    }
}

/// Compute the color seen by a ray.
///
/// This is the core path tracing function. It traces the ray through
/// the scene, bouncing off surfaces and accumulating attenuation.
pub fn ray_color(
    ray: &Ray,
    world: &dyn Hittable,
    depth: u32,
    config: &RenderConfig,
    rng: &mut dyn RngCore,
) -> Color {
    // Bounce budget exhausted: no light
    if depth == 0 {
        return Color::ZERO;
    }

    let mut rec = HitRecord::default();

    // The lower bound skips re-intersections with the originating surface
    if !world.hit(ray, Interval::new(0.001, f32::INFINITY), &mut rec) {
        if config.use_sky_gradient {
            return sky_gradient(ray);
        }
        return config.background;
    }

    match rec.material.scatter(ray, &rec, rng) {
        Some(scatter) => {
            scatter.attenuation * ray_color(&scatter.scattered, world, depth - 1, config, rng)
        }
        // Ray was absorbed
        None => Color::ZERO,
    }
}

/// Background gradient: white straight up, fading to blue straight down.
fn sky_gradient(ray: &Ray) -> Color {
    let unit_direction = ray.direction.normalize();
    let a = 0.5 * (unit_direction.y + 1.0);
    let white = Color::new(1.0, 1.0, 1.0);
    let blue = Color::new(0.5, 0.7, 1.0);
    white * a + blue * (1.0 - a)
}

/// Apply gamma correction (gamma = 2.0).
#[inline]
pub fn linear_to_gamma(linear: f32) -> f32 {
    if linear > 0.0 {
        linear.sqrt()
    } else {
        0.0
    }
}

/// Clamp range applied before quantization; one range for every output path.
static INTENSITY: Interval = Interval {
    min: 0.0,
    max: 0.999,
};

/// Convert a linear color to 8-bit RGB with gamma correction.
pub fn color_to_rgb8(color: Color) -> [u8; 3] {
    let r = (256.0 * INTENSITY.clamp(linear_to_gamma(color.x))) as u8;
    let g = (256.0 * INTENSITY.clamp(linear_to_gamma(color.y))) as u8;
    let b = (256.0 * INTENSITY.clamp(linear_to_gamma(color.z))) as u8;
    [r, g, b]
}

/// Render a single pixel with multi-sampling.
pub fn render_pixel(
    camera: &Camera,
    world: &dyn Hittable,
    x: u32,
    y: u32,
    config: &RenderConfig,
    rng: &mut dyn RngCore,
) -> Color {
    let mut pixel_color = Color::ZERO;

    for _ in 0..config.samples_per_pixel {
        // Camera.get_ray jitters within the pixel for anti-aliasing
        let ray = camera.get_ray(x, y, rng);
        pixel_color += ray_color(&ray, world, config.max_depth, config, rng);
    }

    // Average the samples
    pixel_color / config.samples_per_pixel as f32
}

/// Simple image buffer for storing render output.
///
/// Row 0 is the top scanline; pixels are stored row-major.
pub struct ImageBuffer {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<Color>,
}

impl ImageBuffer {
    /// Create a new image buffer filled with black.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![Color::ZERO; (width * height) as usize],
        }
    }

    /// Get the pixel at (x, y).
    pub fn get(&self, x: u32, y: u32) -> Color {
        self.pixels[(y * self.width + x) as usize]
    }

    /// Set the pixel at (x, y).
    pub fn set(&mut self, x: u32, y: u32, color: Color) {
        self.pixels[(y * self.width + x) as usize] = color;
    }

    /// Convert to 8-bit RGB bytes, row-major from the top scanline.
    pub fn to_rgb8(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity((self.width * self.height * 3) as usize);
        for color in &self.pixels {
            bytes.extend_from_slice(&color_to_rgb8(*color));
        }
        bytes
    }

    /// Copy a bucket's pixels into place.
    pub fn blit(&mut self, result: &BucketResult) {
        let bucket = result.bucket;
        for local_y in 0..bucket.height {
            for local_x in 0..bucket.width {
                let color = result.pixels[(local_y * bucket.width + local_x) as usize];
                self.set(bucket.x + local_x, bucket.y + local_y, color);
            }
        }
    }
}

/// Render the entire scene to an image buffer.
///
/// Buckets are rendered in parallel; each derives its own `SmallRng` from
/// the config seed and the bucket index, so results are reproducible for a
/// given seed and independent of scheduling.
pub fn render(camera: &Camera, world: &dyn Hittable, config: &RenderConfig) -> ImageBuffer {
    let buckets = generate_buckets(camera.image_width, camera.image_height, DEFAULT_BUCKET_SIZE);
    log::debug!(
        "rendering {}x{} in {} buckets",
        camera.image_width,
        camera.image_height,
        buckets.len()
    );

    let results: Vec<BucketResult> = buckets
        .into_par_iter()
        .map(|bucket| {
            let mut rng = SmallRng::seed_from_u64(bucket_seed(config.seed, bucket.index));
            let pixels = render_bucket(&bucket, camera, world, config, &mut rng);
            BucketResult::new(bucket, pixels)
        })
        .collect();

    let mut image = ImageBuffer::new(camera.image_width, camera.image_height);
    for result in &results {
        image.blit(result);
    }

    image
}

/// Derive a bucket's seed from the base seed and its index.
///
/// The golden-ratio stride keeps neighboring buckets on distant streams.
fn bucket_seed(seed: u64, index: usize) -> u64 {
    seed.wrapping_add((index as u64 + 1).wrapping_mul(0x9e37_79b9_7f4a_7c15))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{HittableList, Lambertian, Sphere, Vec3};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn one_sphere_world() -> HittableList {
        let mut world = HittableList::new();
        world.add(Box::new(Sphere::new(
            Vec3::new(0.0, 0.0, -1.0),
            0.5,
            Lambertian::new(Color::new(0.5, 0.5, 0.5)),
        )));
        world
    }

    #[test]
    fn test_ray_color_depth_zero_is_black() {
        let world = one_sphere_world();
        let config = RenderConfig::default();
        let mut rng = StdRng::seed_from_u64(31);

        for dir in [Vec3::Z, -Vec3::Z, Vec3::Y, Vec3::new(1.0, 2.0, 3.0)] {
            let ray = Ray::new(Vec3::ZERO, dir);
            assert_eq!(ray_color(&ray, &world, 0, &config, &mut rng), Color::ZERO);
        }
    }

    #[test]
    fn test_sky_gradient_anchor_points() {
        // Straight up is pure white, straight down is the blue tone
        let up = Ray::new(Vec3::ZERO, Vec3::new(0.0, 1.0, 0.0));
        assert_eq!(sky_gradient(&up), Color::new(1.0, 1.0, 1.0));

        let down = Ray::new(Vec3::ZERO, Vec3::new(0.0, -1.0, 0.0));
        assert_eq!(sky_gradient(&down), Color::new(0.5, 0.7, 1.0));
    }

    #[test]
    fn test_miss_returns_background() {
        let world = HittableList::new();
        let mut rng = StdRng::seed_from_u64(32);

        let config = RenderConfig {
            use_sky_gradient: true,
            ..Default::default()
        };
        let up = Ray::new(Vec3::ZERO, Vec3::new(0.0, 1.0, 0.0));
        assert_eq!(
            ray_color(&up, &world, 10, &config, &mut rng),
            Color::new(1.0, 1.0, 1.0)
        );

        let solid = RenderConfig {
            use_sky_gradient: false,
            background: Color::new(0.25, 0.5, 0.75),
            ..Default::default()
        };
        assert_eq!(
            ray_color(&up, &world, 10, &solid, &mut rng),
            Color::new(0.25, 0.5, 0.75)
        );
    }

    #[test]
    fn test_linear_to_gamma() {
        assert_eq!(linear_to_gamma(0.0), 0.0);
        assert_eq!(linear_to_gamma(-1.0), 0.0);
        assert!((linear_to_gamma(1.0) - 1.0).abs() < 0.0001);
        assert!((linear_to_gamma(0.25) - 0.5).abs() < 0.0001);
    }

    #[test]
    fn test_color_to_rgb8_clamp_range() {
        // Full white clamps to 0.999 and lands on 255, never wrapping
        assert_eq!(color_to_rgb8(Color::ONE), [255, 255, 255]);
        assert_eq!(color_to_rgb8(Color::splat(42.0)), [255, 255, 255]);
        assert_eq!(color_to_rgb8(Color::ZERO), [0, 0, 0]);
        assert_eq!(color_to_rgb8(Color::splat(-1.0)), [0, 0, 0]);

        // 0.25 linear -> 0.5 after gamma -> 128
        assert_eq!(color_to_rgb8(Color::splat(0.25)), [128, 128, 128]);
    }

    #[test]
    fn test_constant_background_averages_exactly() {
        // Every sample sees the same solid background, so the average must
        // equal it exactly, independent of the sample count.
        let world = HittableList::new();
        let background = Color::new(0.2, 0.4, 0.8);

        let mut camera = Camera::new().with_resolution(4, 4);
        camera.initialize();

        for samples in [1, 2, 7, 64] {
            let config = RenderConfig {
                samples_per_pixel: samples,
                max_depth: 5,
                background,
                use_sky_gradient: false,
                seed: 0,
            };
            let mut rng = StdRng::seed_from_u64(33);
            let color = render_pixel(&camera, &world, 2, 2, &config, &mut rng);
            assert!((color - background).length() < 1e-6, "samples={samples}");
        }
    }

    #[test]
    fn test_render_is_reproducible_per_seed() {
        let world = one_sphere_world();
        let mut camera = Camera::new().with_resolution(16, 16);
        camera.initialize();

        let config = RenderConfig {
            samples_per_pixel: 4,
            max_depth: 5,
            seed: 99,
            ..Default::default()
        };

        let a = render(&camera, &world, &config);
        let b = render(&camera, &world, &config);
        assert_eq!(a.pixels, b.pixels);

        let other = RenderConfig { seed: 100, ..config };
        let c = render(&camera, &world, &other);
        assert_ne!(a.pixels, c.pixels);
    }

    #[test]
    fn test_end_to_end_silhouette() {
        // Sphere of radius 0.5 at (0,0,-1), pinhole camera at the origin
        // looking down -z: the center pixel hits, a corner pixel sees sky.
        let world = one_sphere_world();
        let mut camera = Camera::new()
            .with_resolution(101, 101)
            .with_position(Vec3::ZERO, Vec3::new(0.0, 0.0, -1.0), Vec3::Y)
            .with_lens(90.0, 0.0, 1.0);
        camera.initialize();

        let background = Color::new(0.1, 0.2, 0.3);
        let config = RenderConfig {
            samples_per_pixel: 8,
            max_depth: 4,
            background,
            use_sky_gradient: false,
            seed: 1,
        };

        let mut rng = StdRng::seed_from_u64(34);

        // Center pixel: every sample scatters off the sphere, so the result
        // cannot equal the raw background
        let center = render_pixel(&camera, &world, 50, 50, &config, &mut rng);
        assert!((center - background).length() > 1e-3);

        // Corner pixel: entirely outside the projected disk
        let corner = render_pixel(&camera, &world, 0, 0, &config, &mut rng);
        assert!((corner - background).length() < 1e-6);
    }

    #[test]
    fn test_image_buffer_roundtrip() {
        let mut image = ImageBuffer::new(3, 2);
        image.set(2, 1, Color::ONE);
        assert_eq!(image.get(2, 1), Color::ONE);
        assert_eq!(image.get(0, 0), Color::ZERO);

        let bytes = image.to_rgb8();
        assert_eq!(bytes.len(), 3 * 2 * 3);
        // Last pixel is the one we set
        assert_eq!(&bytes[15..18], &[255, 255, 255]);
    }
}
