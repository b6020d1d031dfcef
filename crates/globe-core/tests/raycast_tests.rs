use glam::{Vec2, Vec3};
use globe_core::raycast::{ray_sphere, PickSphere, Ray, Raycaster};
use globe_core::{MarkerTable, PerspectiveCamera, Scene, Viewport};

#[test]
fn ray_sphere_intersection_basic() {
    let t = ray_sphere(Vec3::ZERO, Vec3::Z, Vec3::new(0.0, 0.0, 5.0), 2.0);
    assert_eq!(t, Some(3.0));
}

#[test]
fn ray_sphere_intersection_miss() {
    let t = ray_sphere(Vec3::ZERO, Vec3::X, Vec3::new(0.0, 0.0, 5.0), 2.0);
    assert!(t.is_none());
}

#[test]
fn ray_sphere_from_inside_the_sphere_is_none() {
    let t = ray_sphere(Vec3::new(0.0, 0.0, 5.0), Vec3::Z, Vec3::new(0.0, 0.0, 5.0), 2.0);
    assert!(t.is_none());
}

#[test]
fn ray_sphere_behind_origin_is_ignored() {
    let t = ray_sphere(Vec3::ZERO, Vec3::Z, Vec3::new(0.0, 0.0, -5.0), 2.0);
    assert!(t.is_none());
}

#[test]
fn intersections_are_sorted_nearest_first() {
    let mut scene = Scene::new();
    let ids: Vec<_> = (0..3)
        .map(|_| {
            scene.add(globe_core::Node::new(
                globe_core::Geometry::Sphere {
                    radius: 0.5,
                    width_segments: 8,
                    height_segments: 8,
                },
                globe_core::Material::basic(0xffffff),
            ))
        })
        .collect();
    let centers = [
        Vec3::new(0.0, 0.0, 9.0),
        Vec3::new(0.0, 0.0, 3.0),
        Vec3::new(4.0, 0.0, 3.0),
    ];
    let spheres = ids.iter().zip(centers).map(|(&object, center)| PickSphere {
        object,
        center,
        radius: 0.5,
    });
    let ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, 0.0, 2.0));
    let hits = Raycaster::new(ray).intersect_spheres(spheres);
    assert_eq!(hits.len(), 2);
    assert_eq!(hits[0].object, ids[1]);
    assert_eq!(hits[1].object, ids[0]);
    assert!((hits[0].distance - 2.5).abs() < 1e-6);
    assert!((hits[0].point - Vec3::new(0.0, 0.0, 2.5)).length() < 1e-6);
}

#[test]
fn ndc_conversion_flips_the_vertical_axis() {
    let vp = Viewport::new(800, 600).unwrap();
    assert_eq!(vp.to_ndc(Vec2::new(0.0, 0.0)), Vec2::new(-1.0, 1.0));
    assert_eq!(vp.to_ndc(Vec2::new(800.0, 600.0)), Vec2::new(1.0, -1.0));
    assert_eq!(vp.to_ndc(Vec2::new(400.0, 300.0)), Vec2::ZERO);
    assert_eq!(vp.from_ndc(Vec2::new(-1.0, 1.0)), Vec2::ZERO);
    assert!(Viewport::new(0, 10).is_err());
}

#[test]
fn center_ray_points_down_the_view_axis() {
    let mut cam = PerspectiveCamera::new(75.0, 16.0 / 9.0, 0.1, 1000.0);
    cam.set_position(Vec3::new(0.0, 0.0, 15.0));
    let ray = cam.ray_from_ndc(Vec2::ZERO);
    assert_eq!(ray.origin, Vec3::new(0.0, 0.0, 15.0));
    assert!((ray.direction - Vec3::NEG_Z).length() < 1e-5);

    let up = cam.ray_from_ndc(Vec2::new(0.0, 1.0));
    assert!(up.direction.y > 0.0);
    let half_fov = up.direction.angle_between(Vec3::NEG_Z);
    assert!((half_fov - 37.5_f32.to_radians()).abs() < 1e-3);
}

#[test]
fn marker_table_maps_both_ways() {
    let mut scene = Scene::new();
    let node = || {
        globe_core::Node::new(
            globe_core::Geometry::Box {
                width: 1.0,
                height: 1.0,
                depth: 1.0,
            },
            globe_core::Material::basic(0),
        )
    };
    let a = scene.add(node());
    let b = scene.add(node());
    let mut table = MarkerTable::new();
    assert_eq!(table.push(b), 0);
    assert_eq!(table.push(a), 1);
    assert_eq!(table.destination_index(a), Some(1));
    assert_eq!(table.marker_for(0), Some(b));
    assert_eq!(table.marker_for(2), None);
    assert_eq!(table.ids(), &[b, a]);
}
