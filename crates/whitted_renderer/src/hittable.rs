//! Hittable trait, HitRecord, and the nearest-hit resolver.

use whitted_core::{Primitive, Scene, ShadingModel};
use whitted_math::{Interval, Ray, Vec3};

/// Record of a ray-primitive intersection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HitRecord {
    /// Parameter t where the intersection occurs
    pub t: f32,
    /// Surface normal at the hit. Not normalized: for spheres its length is
    /// the radius, for planes it is the stored normal.
    pub normal: Vec3,
    /// Point of intersection
    pub p: Vec3,
}

/// Trait for primitives that can be hit by rays.
pub trait Hittable: Send + Sync {
    /// Test if a ray hits this primitive at a parameter greater than
    /// `epsilon`.
    ///
    /// Returns the nearest such hit. Non-finite parameters are never
    /// filtered here; the resolver's interval test rejects them.
    fn hit(&self, ray: &Ray, epsilon: f32) -> Option<HitRecord>;
}

impl Hittable for Primitive {
    #[inline]
    fn hit(&self, ray: &Ray, epsilon: f32) -> Option<HitRecord> {
        match self {
            Primitive::Sphere(sphere) => sphere.hit(ray, epsilon),
            Primitive::Plane(plane) => plane.hit(ray, epsilon),
        }
    }
}

/// The winning hit of a scene scan.
#[derive(Debug, Clone, Copy)]
pub struct SceneHit<'a> {
    pub record: HitRecord,
    /// Position of the primitive in the scene's scan order
    pub index: usize,
    pub primitive: &'a Primitive,
}

/// Find the nearest hit among all primitives with `t` strictly inside
/// `ray_t`.
///
/// The running minimum starts at `model.intersection_sentinel`, and a hit
/// only replaces it when strictly closer, so on equal `t` the primitive
/// earlier in scan order wins.
pub fn closest_intersection<'a>(
    scene: &'a Scene,
    ray: &Ray,
    ray_t: Interval,
    model: &ShadingModel,
) -> Option<SceneHit<'a>> {
    let mut closest_so_far = model.intersection_sentinel;
    let mut best = None;

    for (index, primitive) in scene.primitives.iter().enumerate() {
        let Some(record) = primitive.hit(ray, model.epsilon) else {
            continue;
        };

        if ray_t.surrounds(record.t) && record.t < closest_so_far {
            closest_so_far = record.t;
            best = Some(SceneHit {
                record,
                index,
                primitive,
            });
        }
    }

    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use whitted_core::{Plane, Sphere, Surface};
    use whitted_math::Color;

    fn surface(color: Color) -> Surface {
        Surface::new(color, 0.0, 0.0)
    }

    fn model() -> ShadingModel {
        ShadingModel::default()
    }

    #[test]
    fn test_nearest_of_overlapping() {
        let mut scene = Scene::new();
        scene.add_primitive(Sphere::new(Vec3::new(0.0, 0.0, 10.0), 1.0, surface(Color::X)));
        scene.add_primitive(Sphere::new(Vec3::new(0.0, 0.0, 5.0), 1.0, surface(Color::Y)));

        let ray = Ray::new(Vec3::ZERO, Vec3::Z);
        let hit = closest_intersection(&scene, &ray, Interval::new(0.01, 600.0), &model()).unwrap();

        assert_eq!(hit.index, 1);
        assert!((hit.record.t - 4.0).abs() < 1e-5);
        assert_eq!(hit.primitive.surface().color, Color::Y);
    }

    #[test]
    fn test_tie_goes_to_first_in_scan_order() {
        let mut scene = Scene::new();
        let plane = Plane::new(Vec3::new(0.0, 0.0, 5.0), Vec3::new(0.0, 0.0, -1.0), surface(Color::X));
        scene.add_primitive(plane);
        scene.add_primitive(Plane { surface: surface(Color::Y), ..plane });

        let ray = Ray::new(Vec3::ZERO, Vec3::Z);
        let hit = closest_intersection(&scene, &ray, Interval::new(0.01, 600.0), &model()).unwrap();
        assert_eq!(hit.index, 0);
        assert_eq!(hit.primitive.surface().color, Color::X);

        // Reversing the scan order reverses the winner
        scene.primitives.reverse();
        let hit = closest_intersection(&scene, &ray, Interval::new(0.01, 600.0), &model()).unwrap();
        assert_eq!(hit.index, 0);
        assert_eq!(hit.primitive.surface().color, Color::Y);
    }

    #[test]
    fn test_interval_bounds_are_exclusive() {
        let mut scene = Scene::new();
        scene.add_primitive(Plane::new(Vec3::new(0.0, 0.0, 2.0), Vec3::new(0.0, 0.0, -1.0), surface(Color::X)));

        let ray = Ray::new(Vec3::ZERO, Vec3::Z);
        assert!(closest_intersection(&scene, &ray, Interval::new(0.01, 2.0), &model()).is_none());
        assert!(closest_intersection(&scene, &ray, Interval::new(2.0, 10.0), &model()).is_none());
        assert!(closest_intersection(&scene, &ray, Interval::new(0.01, 2.5), &model()).is_some());
    }

    #[test]
    fn test_sentinel_caps_distance() {
        let mut scene = Scene::new();
        scene.add_primitive(Plane::new(
            Vec3::new(0.0, 0.0, 1500.0),
            Vec3::new(0.0, 0.0, -1.0),
            surface(Color::X),
        ));

        // Interval allows it, the sentinel does not
        let ray = Ray::new(Vec3::ZERO, Vec3::Z);
        assert!(closest_intersection(&scene, &ray, Interval::new(0.01, f32::INFINITY), &model()).is_none());
    }

    #[test]
    fn test_parallel_ray_never_selected() {
        let mut scene = Scene::new();
        scene.add_primitive(Plane::new(Vec3::new(0.0, -1.0, 0.0), Vec3::Y, surface(Color::X)));

        let ray = Ray::new(Vec3::ZERO, Vec3::X);
        assert!(closest_intersection(&scene, &ray, Interval::new(0.01, f32::INFINITY), &model()).is_none());
    }

    #[test]
    fn test_empty_scene() {
        let scene = Scene::new();
        let ray = Ray::new(Vec3::ZERO, Vec3::Z);
        assert!(closest_intersection(&scene, &ray, Interval::new(0.01, 600.0), &model()).is_none());
    }
}
