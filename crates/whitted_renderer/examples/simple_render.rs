//! Simple Whitted render example.
//!
//! Builds a small mirror scene in code and saves it in PPM format.

use std::fs::File;
use std::io::{BufWriter, Write};

use whitted_renderer::{
    color_to_rgba, render, Color, ImageBuffer, Light, Plane, RenderSettings, Scene, Sphere,
    Surface, Vec3,
};

fn main() {
    println!("Whitted Ray Tracer - Simple Example");
    println!("===================================");

    let scene = build_scene();
    let settings = RenderSettings::default().with_resolution(400, 400).with_depth(3);

    println!(
        "Rendering {}x{} @ depth {}...",
        settings.width, settings.height, settings.depth
    );

    let start = std::time::Instant::now();
    let image = render(&scene, &settings);
    println!("Rendered in {:?}", start.elapsed());

    let filename = "output.ppm";
    save_ppm(&image, filename).expect("Failed to save image");
    println!("Saved to {}", filename);
}

fn build_scene() -> Scene {
    let mut scene = Scene::new();

    // Mirror ball and a small blue sphere over an orange floor
    scene.add_primitive(Sphere::new(
        Vec3::new(0.0, 0.0, 5.0),
        1.0,
        Surface::new(Color::new(3.0, 3.0, 3.0), 600.0, 7.0),
    ));
    scene.add_primitive(Sphere::new(
        Vec3::new(1.5, -0.5, 3.5),
        0.5,
        Surface::new(Color::new(0.0, 6.0, 9.0), 50.0, 1.0),
    ));
    scene.add_primitive(Plane::new(
        Vec3::new(0.0, -1.0, 0.0),
        Vec3::Y,
        Surface::new(Color::new(6.0, 3.0, 0.0), 0.0, 2.0),
    ));
    scene.add_primitive(Plane::new(
        Vec3::new(0.0, 0.0, 15.0),
        Vec3::new(0.0, 0.0, -1.0),
        Surface::new(Color::new(1.0, 1.0, 2.0), 0.0, 0.0),
    ));

    scene.add_light(Light::new(6.0, Vec3::new(-3.0, 4.0, 0.0)));
    scene.add_light(Light::new(3.0, Vec3::new(3.0, 2.0, 2.0)));

    println!(
        "Created {} primitives, {} lights",
        scene.primitive_count(),
        scene.light_count()
    );
    scene
}

fn save_ppm(image: &ImageBuffer, filename: &str) -> std::io::Result<()> {
    let file = File::create(filename)?;
    let mut writer = BufWriter::new(file);

    writeln!(writer, "P3")?;
    writeln!(writer, "{} {}", image.width, image.height)?;
    writeln!(writer, "255")?;

    for y in 0..image.height {
        for x in 0..image.width {
            let rgba = color_to_rgba(image.get(x, y));
            writeln!(writer, "{} {} {}", rgba[0], rgba[1], rgba[2])?;
        }
    }

    Ok(())
}
