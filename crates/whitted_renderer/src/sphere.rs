//! Sphere intersection.

use crate::hittable::{HitRecord, Hittable};
use whitted_core::Sphere;
use whitted_math::Ray;

impl Hittable for Sphere {
    fn hit(&self, ray: &Ray, epsilon: f32) -> Option<HitRecord> {
        // a*t^2 + b*t + c = 0 with the full (not halved) b term
        let oc = ray.origin() - self.center;
        let a = ray.direction().dot(ray.direction());
        let b = 2.0 * oc.dot(ray.direction());
        let c = oc.dot(oc) - self.radius * self.radius;

        let discriminant = b * b - 4.0 * a * c;
        if discriminant < 0.0 {
            return None;
        }

        let e = discriminant.sqrt();
        let denom = 2.0 * a;

        // Smaller root first, then the far side (ray origin inside the sphere)
        [(-b - e) / denom, (-b + e) / denom]
            .into_iter()
            .find(|&t| t > epsilon)
            .map(|t| {
                let p = ray.at(t);
                HitRecord {
                    t,
                    normal: p - self.center,
                    p,
                }
            })
    }
}
