use globe_core::{lat_lon_to_vec3, GeoCoord, GlobeError};

#[test]
fn projected_points_lie_on_the_sphere() {
    for &radius in &[1.0_f32, 5.0, 6371.0] {
        for lat in (-90..=90).step_by(5) {
            for lon in (-180..=180).step_by(5) {
                let p = lat_lon_to_vec3(lat as f32, lon as f32, radius);
                let err = (p.length() - radius).abs();
                assert!(
                    err <= radius * 1e-5,
                    "lat={lat} lon={lon} r={radius}: |p|={} (err {err})",
                    p.length()
                );
            }
        }
    }
}

#[test]
fn north_pole_is_on_the_y_axis_for_any_longitude() {
    let r = 5.0;
    for lon in (-180..=180).step_by(15) {
        let p = lat_lon_to_vec3(90.0, lon as f32, r);
        assert!(p.x.abs() < 1e-6, "x={} at lon {lon}", p.x);
        assert!(p.z.abs() < 1e-6, "z={} at lon {lon}", p.z);
        assert_eq!(p.y, r);
    }
}

#[test]
fn south_pole_collapses_to_negative_y() {
    let r = 2.0;
    let p = lat_lon_to_vec3(-90.0, 42.0, r);
    assert!(p.x.abs() < 1e-5);
    assert!(p.z.abs() < 1e-5);
    assert!((p.y + r).abs() < 1e-5);
}

#[test]
fn projection_is_continuous_across_the_antimeridian() {
    let r = 5.0;
    for lat in (-80..=80).step_by(10) {
        let lat = lat as f32;
        let west = lat_lon_to_vec3(lat, -180.0, r);
        let east = lat_lon_to_vec3(lat, 180.0, r);
        assert!(west.distance(east) < 1e-4 * r, "seam jump at lat {lat}");

        let just_west = lat_lon_to_vec3(lat, -179.99, r);
        let just_east = lat_lon_to_vec3(lat, 179.99, r);
        // 0.02 degrees of arc at most
        assert!(just_west.distance(just_east) < r * 0.02_f32.to_radians() * 1.01);
    }
}

#[test]
fn equator_reference_points() {
    let r = 1.0;
    // lon 0 faces +X after the 180 degree azimuth offset
    let p = lat_lon_to_vec3(0.0, 0.0, r);
    assert!((p.x - 1.0).abs() < 1e-6);
    assert!(p.y.abs() < 1e-6);
    assert!(p.z.abs() < 1e-6);

    let p = lat_lon_to_vec3(0.0, 90.0, r);
    assert!(p.x.abs() < 1e-6);
    assert!((p.z + 1.0).abs() < 1e-6);
}

#[test]
fn geo_coord_rejects_out_of_range_values() {
    assert_eq!(
        GeoCoord::new(0.0, 90.5),
        Err(GlobeError::LatitudeOutOfRange(90.5))
    );
    assert_eq!(
        GeoCoord::new(-180.5, 0.0),
        Err(GlobeError::LongitudeOutOfRange(-180.5))
    );
    let c = GeoCoord::new(180.0, -90.0).unwrap();
    assert_eq!(c.longitude(), 180.0);
    assert_eq!(c.latitude(), -90.0);
    assert_eq!(c.to_vec3(3.0), lat_lon_to_vec3(-90.0, 180.0, 3.0));
}
