//! Sphere primitive for ray tracing.

use crate::{
    hittable::{HitRecord, Hittable},
    Material, Ray,
};
use orb_math::{Interval, Vec3};

/// A sphere primitive.
pub struct Sphere<M: Material> {
    center: Vec3,
    radius: f32,
    material: M,
}

impl<M: Material> Sphere<M> {
    /// Create a new sphere. Negative radii are clamped to zero.
    pub fn new(center: Vec3, radius: f32, material: M) -> Self {
        Self {
            center,
            radius: radius.max(0.0),
            material,
        }
    }

    /// Center of the sphere.
    pub fn center(&self) -> Vec3 {
        self.center
    }

    /// Radius of the sphere.
    pub fn radius(&self) -> f32 {
        self.radius
    }
}

impl<M: Material + 'static> Hittable for Sphere<M> {
    fn hit<'a>(&'a self, ray: &Ray, ray_t: Interval, rec: &mut HitRecord<'a>) -> bool {
        let oc = self.center - ray.origin;
        let a = ray.direction.length_squared();
        let h = ray.direction.dot(oc);
        let c = oc.length_squared() - self.radius * self.radius;

        let discriminant = h * h - a * c;
        if discriminant < 0.0 {
            return false;
        }

        let sqrtd = discriminant.sqrt();

        // Find the nearest root in the acceptable range
        let mut root = (h - sqrtd) / a;
        if !ray_t.surrounds(root) {
            root = (h + sqrtd) / a;
            if !ray_t.surrounds(root) {
                return false;
            }
        }

        rec.t = root;
        rec.p = ray.at(rec.t);
        let outward_normal = (rec.p - self.center) / self.radius;
        rec.set_face_normal(ray, outward_normal);
        rec.material = &self.material;

        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::material::Lambertian;
    use crate::sampling::gen_f32;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn test_sphere(center: Vec3, radius: f32) -> Sphere<Lambertian> {
        Sphere::new(center, radius, Lambertian::new(Vec3::splat(0.5)))
    }

    #[test]
    fn test_sphere_hit() {
        let sphere = test_sphere(Vec3::new(0.0, 0.0, -1.0), 0.5);

        let ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, 0.0, -1.0));
        let interval = Interval::new(0.001, f32::INFINITY);

        let mut rec = HitRecord::default();
        assert!(sphere.hit(&ray, interval, &mut rec));
        assert!((rec.t - 0.5).abs() < 0.001); // Should hit at t=0.5
        assert!(rec.front_face);
        assert!((rec.normal - Vec3::Z).length() < 1e-5);
    }

    #[test]
    fn test_sphere_miss() {
        let sphere = test_sphere(Vec3::new(0.0, 0.0, -1.0), 0.5);

        // Ray pointing away from sphere
        let ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, 1.0, 0.0));
        let interval = Interval::new(0.001, f32::INFINITY);

        let mut rec = HitRecord::default();
        assert!(!sphere.hit(&ray, interval, &mut rec));
    }

    #[test]
    fn test_hit_point_lies_on_surface() {
        // |ray.at(t) - center| == radius for randomized rays and spheres
        let mut rng = StdRng::seed_from_u64(11);
        let interval = Interval::new(0.001, f32::INFINITY);

        for _ in 0..200 {
            let center = Vec3::new(
                gen_f32(&mut rng) * 4.0 - 2.0,
                gen_f32(&mut rng) * 4.0 - 2.0,
                -3.0 - gen_f32(&mut rng) * 4.0,
            );
            let radius = 0.2 + gen_f32(&mut rng);
            let sphere = test_sphere(center, radius);

            // Aim roughly at the center with some jitter
            let target = center
                + Vec3::new(
                    (gen_f32(&mut rng) - 0.5) * radius,
                    (gen_f32(&mut rng) - 0.5) * radius,
                    (gen_f32(&mut rng) - 0.5) * radius,
                );
            let ray = Ray::new(Vec3::ZERO, target);

            let mut rec = HitRecord::default();
            if sphere.hit(&ray, interval, &mut rec) {
                let dist = (ray.at(rec.t) - center).length();
                assert!(
                    (dist - radius).abs() < 1e-3,
                    "hit point off surface: dist={dist} radius={radius}"
                );
            }
        }
    }

    #[test]
    fn test_hit_from_inside_uses_far_root() {
        let sphere = test_sphere(Vec3::ZERO, 1.0);
        let ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, 0.0, -1.0));
        let interval = Interval::new(0.001, f32::INFINITY);

        let mut rec = HitRecord::default();
        assert!(sphere.hit(&ray, interval, &mut rec));
        assert!((rec.t - 1.0).abs() < 1e-5);
        assert!(!rec.front_face);
        // Stored normal faces the ray, i.e. back toward the origin
        assert!((rec.normal - Vec3::Z).length() < 1e-5);
    }

    #[test]
    fn test_hit_respects_interval() {
        let sphere = test_sphere(Vec3::new(0.0, 0.0, -2.0), 0.5);
        let ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, 0.0, -1.0));

        // Both roots (1.5 and 2.5) lie outside [0.001, 1.0]
        let mut rec = HitRecord::default();
        assert!(!sphere.hit(&ray, Interval::new(0.001, 1.0), &mut rec));

        // Near root excluded, far root accepted
        let mut rec = HitRecord::default();
        assert!(sphere.hit(&ray, Interval::new(2.0, 3.0), &mut rec));
        assert!((rec.t - 2.5).abs() < 1e-5);
    }

    #[test]
    fn test_negative_radius_clamped() {
        let sphere = test_sphere(Vec3::new(0.0, 0.0, -1.0), -0.5);
        assert_eq!(sphere.radius(), 0.0);
    }
}
