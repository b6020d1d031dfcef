use globe_core::{
    default_destinations, DemoScene, Destination, GlobeConfig, GlobeError, GlobeScene, Popup,
    Viewport,
};

fn make_globe() -> GlobeScene {
    let config = GlobeConfig {
        particle_seed: Some(42),
        ..GlobeConfig::default()
    };
    let viewport = Viewport::new(1280, 720).unwrap();
    GlobeScene::new(config, default_destinations(), viewport).unwrap()
}

fn screen_pos_of_marker(globe: &GlobeScene, index: usize) -> glam::Vec2 {
    let world = globe.marker_world_position(index).unwrap();
    let ndc = globe.camera().project(world).unwrap();
    globe.viewport().from_ndc(ndc)
}

#[test]
fn one_marker_per_destination_in_order() {
    let globe = make_globe();
    let dests = default_destinations();
    assert_eq!(dests.len(), 3);
    assert_eq!(globe.markers().len(), 3);
    assert_eq!(globe.destinations(), dests.as_slice());
    for (i, &id) in globe.markers().ids().iter().enumerate() {
        assert_eq!(globe.markers().destination_index(id), Some(i));
    }
    let names: Vec<&str> = globe.destinations().iter().map(|d| d.name.as_str()).collect();
    assert_eq!(names, ["Paris", "New York", "Tokyo"]);
}

#[test]
fn markers_sit_on_the_globe_surface() {
    let globe = make_globe();
    let r = globe.config().globe_radius;
    for &id in globe.markers().ids() {
        let node = globe.scene().get(id).unwrap();
        assert_eq!(node.parent, Some(globe.globe_id()));
        assert!((node.position.length() - r).abs() < 1e-4 * r);
    }
}

#[test]
fn hovering_the_paris_marker_shows_paris() {
    let globe = make_globe();
    let px = screen_pos_of_marker(&globe, 0);
    let hit = globe.hit_test(px).expect("pointer should hit the Paris marker");
    assert_eq!(hit.name, "Paris");
    match globe.hover(px) {
        Popup::Shown { name, description } => {
            assert_eq!(name, "Paris");
            assert_eq!(description, hit.description);
        }
        Popup::Hidden => panic!("popup should be visible"),
    }
}

#[test]
fn each_marker_is_found_at_its_own_screen_position() {
    let globe = make_globe();
    for (i, d) in globe.destinations().iter().enumerate() {
        let px = screen_pos_of_marker(&globe, i);
        assert_eq!(globe.hit_test(px).map(|h| h.name.as_str()), Some(d.name.as_str()));
    }
}

#[test]
fn pointer_far_from_markers_hides_popup() {
    let globe = make_globe();
    assert_eq!(globe.hover(glam::Vec2::new(2.0, 2.0)), Popup::Hidden);
    assert!(globe.hit_test(glam::Vec2::new(1278.0, 718.0)).is_none());
    // globe center has no marker in front of it
    assert!(!globe.hover(glam::Vec2::new(640.0, 360.0)).is_visible());
}

#[test]
fn markers_follow_the_spinning_globe() {
    let mut globe = make_globe();
    let before = globe.marker_world_position(0).unwrap();
    for _ in 0..500 {
        globe.advance();
    }
    let after = globe.marker_world_position(0).unwrap();
    assert!(before.distance(after) > 0.1);
    let r = globe.config().globe_radius;
    assert!((after.length() - r).abs() < 1e-3);

    let px = screen_pos_of_marker(&globe, 0);
    assert_eq!(globe.hit_test(px).map(|d| d.name.as_str()), Some("Paris"));
}

#[test]
fn advance_rotates_globe_and_particles_by_fixed_steps() {
    let mut globe = make_globe();
    for _ in 0..10 {
        globe.advance();
    }
    let g = globe.scene().get(globe.globe_id()).unwrap();
    let p = globe.scene().get(globe.particles_id()).unwrap();
    assert!((g.rotation.y - 0.01).abs() < 1e-6);
    assert_eq!(g.rotation.x, 0.0);
    assert!((p.rotation.y - 0.005).abs() < 1e-6);
}

#[test]
fn resize_sets_aspect_to_width_over_height() {
    let mut globe = make_globe();
    for &(w, h) in &[(800_u32, 600_u32), (1, 1000), (1920, 1080), (333, 7)] {
        globe.resize(w, h).unwrap();
        assert_eq!(globe.camera().aspect, w as f32 / h as f32);
        assert_eq!(globe.viewport(), Viewport::new(w, h).unwrap());
        let expected = glam::Mat4::perspective_rh(
            globe.camera().fov_y_degrees.to_radians(),
            w as f32 / h as f32,
            globe.camera().near,
            globe.camera().far,
        );
        assert_eq!(globe.camera().projection_matrix(), expected);
    }
}

#[test]
fn resize_to_zero_is_rejected_and_keeps_state() {
    let mut globe = make_globe();
    let aspect = globe.camera().aspect;
    assert_eq!(
        globe.resize(0, 600),
        Err(GlobeError::InvalidViewport {
            width: 0,
            height: 600
        })
    );
    assert_eq!(globe.camera().aspect, aspect);
    assert_eq!(globe.viewport().width, 1280);
}

#[test]
fn particle_field_is_reproducible_and_bounded() {
    let a = make_globe();
    let b = make_globe();
    let field = a.particle_field();
    assert_eq!(field.len(), 500);
    assert_eq!(field.positions(), b.particle_field().positions());
    let half = a.config().particle_spread / 2.0;
    for p in field.positions() {
        assert!(p.abs().max_element() <= half);
    }
}

#[test]
fn custom_destination_list_is_respected() {
    let dests = vec![
        Destination::new("North Pole", "Very cold.", 0.0, 90.0).unwrap(),
        Destination::new("Null Island", "Nobody lives here.", 0.0, 0.0).unwrap(),
    ];
    let globe = GlobeScene::new(
        GlobeConfig {
            particle_seed: Some(1),
            particle_count: 0,
            ..GlobeConfig::default()
        },
        dests,
        Viewport::new(640, 480).unwrap(),
    )
    .unwrap();
    assert_eq!(globe.markers().len(), 2);
    assert!(globe.particle_field().is_empty());
    let pole = globe.marker_world_position(0).unwrap();
    assert!((pole.y - globe.config().globe_radius).abs() < 1e-5);
}

#[test]
fn invalid_config_is_rejected() {
    let viewport = Viewport::new(100, 100).unwrap();
    let bad_radius = GlobeConfig {
        globe_radius: 0.0,
        ..GlobeConfig::default()
    };
    assert_eq!(
        GlobeScene::new(bad_radius, Vec::new(), viewport).err(),
        Some(GlobeError::InvalidRadius(0.0))
    );
    let bad_segments = GlobeConfig {
        globe_segments: 0,
        ..GlobeConfig::default()
    };
    assert!(matches!(
        GlobeScene::new(bad_segments, Vec::new(), viewport),
        Err(GlobeError::InvalidConfig(_))
    ));
}

fn null_island_globe(marker_radius: f32) -> GlobeScene {
    let config = GlobeConfig {
        marker_radius,
        particle_seed: Some(7),
        ..GlobeConfig::default()
    };
    let dests = vec![Destination::new("Null Island", "Nobody lives here.", 0.0, 0.0).unwrap()];
    GlobeScene::new(config, dests, Viewport::new(1280, 720).unwrap()).unwrap()
}

#[test]
fn pick_radius_follows_the_drawn_marker_mesh() {
    let big = null_island_globe(0.5);
    let small = null_island_globe(0.1);
    let id = big.markers().marker_for(0).unwrap();
    assert_eq!(big.scene().get(id).unwrap().geometry.bounding_radius(), 0.5);

    // a point 0.35 above the marker center: inside the big marker only
    let center = big.marker_world_position(0).unwrap();
    assert!((center - glam::Vec3::new(5.0, 0.0, 0.0)).length() < 1e-4);
    let offset = center + glam::Vec3::new(0.0, 0.35, 0.0);
    let px = big.viewport().from_ndc(big.camera().project(offset).unwrap());
    assert_eq!(big.hit_test(px).map(|d| d.name.as_str()), Some("Null Island"));
    assert!(small.hit_test(px).is_none());
}

#[test]
fn unseeded_particle_field_is_still_full_and_bounded() {
    let config = GlobeConfig {
        particle_seed: None,
        ..GlobeConfig::default()
    };
    let globe =
        GlobeScene::new(config, default_destinations(), Viewport::new(800, 600).unwrap()).unwrap();
    let field = globe.particle_field();
    assert_eq!(field.len(), 500);
    let half = globe.config().particle_spread / 2.0;
    assert!(field
        .positions()
        .iter()
        .all(|p| p.abs().max_element() <= half));
}
