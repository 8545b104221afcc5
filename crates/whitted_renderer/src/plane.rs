//! Infinite plane intersection.

use crate::hittable::{HitRecord, Hittable};
use whitted_core::Plane;
use whitted_math::Ray;

impl Hittable for Plane {
    fn hit(&self, ray: &Ray, epsilon: f32) -> Option<HitRecord> {
        // A ray parallel to the plane divides by zero; the resulting
        // infinite or NaN t is left for the resolver's interval test.
        let t = (self.point - ray.origin()).dot(self.normal) / ray.direction().dot(self.normal);

        if t > epsilon {
            Some(HitRecord {
                t,
                normal: self.normal,
                p: ray.at(t),
            })
        } else {
            None
        }
    }
}
