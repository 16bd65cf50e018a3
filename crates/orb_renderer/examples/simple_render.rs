//! Simple path tracer example.
//!
//! Renders three spheres on a ground plane and saves to PPM format.

use orb_renderer::{
    render, save_ppm, Camera, Color, Dielectric, HittableList, Lambertian, Metal, RenderConfig,
    Sphere, Vec3,
};

fn main() {
    println!("Orb Path Tracer - Simple Example");
    println!("================================");

    let world = build_scene();

    let mut camera = Camera::new()
        .with_resolution(400, 225)
        .with_position(
            Vec3::new(-2.0, 2.0, 1.0), // look_from
            Vec3::new(0.0, 0.0, -1.0), // look_at
            Vec3::new(0.0, 1.0, 0.0),  // vup
        )
        .with_lens(20.0, 0.1, 3.4);
    camera.initialize();

    let config = RenderConfig {
        samples_per_pixel: 50,
        max_depth: 10,
        ..Default::default()
    };

    println!(
        "Rendering {}x{} @ {} spp...",
        camera.image_width, camera.image_height, config.samples_per_pixel
    );

    let start = std::time::Instant::now();
    let image = render(&camera, &world, &config);
    println!("Rendered in {:?}", start.elapsed());

    let filename = "output.ppm";
    save_ppm(&image, filename).expect("Failed to save image");
    println!("Saved to {}", filename);
}

fn build_scene() -> HittableList {
    let mut world = HittableList::new();

    // Ground
    world.add(Box::new(Sphere::new(
        Vec3::new(0.0, -100.5, -1.0),
        100.0,
        Lambertian::new(Color::new(0.8, 0.8, 0.0)),
    )));

    // Center diffuse sphere
    world.add(Box::new(Sphere::new(
        Vec3::new(0.0, 0.0, -1.2),
        0.5,
        Lambertian::new(Color::new(0.1, 0.2, 0.5)),
    )));

    // Hollow glass sphere on the left
    world.add(Box::new(Sphere::new(
        Vec3::new(-1.0, 0.0, -1.0),
        0.5,
        Dielectric::new(1.5),
    )));
    world.add(Box::new(Sphere::new(
        Vec3::new(-1.0, 0.0, -1.0),
        0.4,
        Dielectric::new(1.0 / 1.5),
    )));

    // Fuzzy metal sphere on the right
    world.add(Box::new(Sphere::new(
        Vec3::new(1.0, 0.0, -1.0),
        0.5,
        Metal::new(Color::new(0.8, 0.6, 0.2), 0.3),
    )));

    world
}
