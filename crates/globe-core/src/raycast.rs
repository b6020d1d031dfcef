use crate::scene::ObjectId;
use glam::Vec3;
use smallvec::SmallVec;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ray {
    pub origin: Vec3,
    /// Unit length.
    pub direction: Vec3,
}

impl Ray {
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        Self {
            origin,
            direction: direction.normalize_or_zero(),
        }
    }

    #[inline]
    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + self.direction * t
    }
}

/// Distance along a unit-direction ray to where it enters a sphere.
///
/// Only the entry point counts: `None` when the ray misses, when the sphere
/// is behind the origin, and also when the origin is already inside it.
#[inline]
pub fn ray_sphere(ray_origin: Vec3, ray_dir: Vec3, center: Vec3, radius: f32) -> Option<f32> {
    let oc = ray_origin - center;
    let b = oc.dot(ray_dir);
    let c = oc.dot(oc) - radius * radius;
    let disc = b * b - c;
    if disc < 0.0 {
        return None;
    }
    let t = -b - disc.sqrt();
    (t >= 0.0).then_some(t)
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Intersection {
    pub object: ObjectId,
    pub distance: f32,
    pub point: Vec3,
}

/// Bounding sphere of a pickable object in world space.
#[derive(Clone, Copy, Debug)]
pub struct PickSphere {
    pub object: ObjectId,
    pub center: Vec3,
    pub radius: f32,
}

pub type Intersections = SmallVec<[Intersection; 4]>;

pub struct Raycaster {
    pub ray: Ray,
}

impl Raycaster {
    pub fn new(ray: Ray) -> Self {
        Self { ray }
    }

    /// Every sphere the ray hits, nearest first.
    pub fn intersect_spheres<I>(&self, spheres: I) -> Intersections
    where
        I: IntoIterator<Item = PickSphere>,
    {
        let mut hits: Intersections = spheres
            .into_iter()
            .filter_map(|s| {
                ray_sphere(self.ray.origin, self.ray.direction, s.center, s.radius).map(|t| {
                    Intersection {
                        object: s.object,
                        distance: t,
                        point: self.ray.at(t),
                    }
                })
            })
            .collect();
        hits.sort_by(|a, b| a.distance.total_cmp(&b.distance));
        hits
    }
}
