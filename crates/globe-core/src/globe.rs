//! The destination globe: a wireframe sphere with one marker per
//! destination, a decorative particle field and a point light.

use crate::animation::DemoScene;
use crate::camera::{PerspectiveCamera, Viewport};
use crate::config::GlobeConfig;
use crate::destinations::Destination;
use crate::error::Result;
use crate::hover::{pick_nearest, Popup};
use crate::markers::MarkerTable;
use crate::particles::ParticleField;
use crate::raycast::PickSphere;
use crate::scene::{Geometry, Material, Node, ObjectId, PointLight, Scene};
use glam::{Vec2, Vec3};

pub struct GlobeScene {
    config: GlobeConfig,
    scene: Scene,
    camera: PerspectiveCamera,
    viewport: Viewport,
    globe: ObjectId,
    particles: ObjectId,
    particle_field: ParticleField,
    markers: MarkerTable,
    destinations: Vec<Destination>,
}

impl GlobeScene {
    pub fn new(
        config: GlobeConfig,
        destinations: Vec<Destination>,
        viewport: Viewport,
    ) -> Result<Self> {
        config.validate()?;

        let mut camera = PerspectiveCamera::new(
            config.camera.fov_y_degrees,
            viewport.aspect(),
            config.camera.near,
            config.camera.far,
        );
        camera.set_position(config.camera.position);

        let mut scene = Scene::new();
        let globe = scene.add(Node::new(
            Geometry::Sphere {
                radius: config.globe_radius,
                width_segments: config.globe_segments,
                height_segments: config.globe_segments,
            },
            Material::wireframe(config.globe_color),
        ));

        scene.add_light(PointLight {
            color: config.light.color,
            intensity: config.light.intensity,
            distance: config.light.distance,
            position: config.light.position,
        });

        let particle_field = match config.particle_seed {
            Some(seed) => {
                ParticleField::generate(config.particle_count, config.particle_spread, seed)
            }
            None => ParticleField::random(config.particle_count, config.particle_spread),
        };
        let particles = scene.add(Node::new(
            Geometry::Points {
                positions: particle_field.positions().to_vec(),
            },
            Material::basic(config.particle_color),
        ));

        // Markers hang off the globe so they turn with it.
        let mut markers = MarkerTable::new();
        for d in &destinations {
            let node = Node::new(
                Geometry::Sphere {
                    radius: config.marker_radius,
                    width_segments: config.marker_segments,
                    height_segments: config.marker_segments,
                },
                Material::lit(config.marker_color),
            )
            .with_position(d.coordinates.to_vec3(config.globe_radius));
            markers.push(scene.add_child(globe, node)?);
        }

        log::info!(
            "[globe] built: radius={} markers={} particles={} seed={:?}",
            config.globe_radius,
            markers.len(),
            particle_field.len(),
            config.particle_seed
        );

        Ok(Self {
            config,
            scene,
            camera,
            viewport,
            globe,
            particles,
            particle_field,
            markers,
            destinations,
        })
    }

    pub fn config(&self) -> &GlobeConfig {
        &self.config
    }

    pub fn globe_id(&self) -> ObjectId {
        self.globe
    }

    pub fn particles_id(&self) -> ObjectId {
        self.particles
    }

    pub fn particle_field(&self) -> &ParticleField {
        &self.particle_field
    }

    pub fn markers(&self) -> &MarkerTable {
        &self.markers
    }

    pub fn destinations(&self) -> &[Destination] {
        &self.destinations
    }

    /// World-space center of the marker for destination `index`.
    pub fn marker_world_position(&self, index: usize) -> Option<Vec3> {
        let id = self.markers.marker_for(index)?;
        let m = self.scene.world_matrix(id).ok()?;
        Some(m.transform_point3(Vec3::ZERO))
    }

    fn marker_spheres(&self) -> impl Iterator<Item = PickSphere> + '_ {
        self.markers.ids().iter().filter_map(move |&id| {
            let node = self.scene.get(id)?;
            let m = self.scene.world_matrix(id).ok()?;
            let (scale, _, center) = m.to_scale_rotation_translation();
            Some(PickSphere {
                object: id,
                center,
                radius: node.geometry.bounding_radius() * scale.max_element(),
            })
        })
    }

    /// Destination whose marker is nearest under the pointer.
    pub fn hit_test(&self, pointer_px: Vec2) -> Option<&Destination> {
        let hit = pick_nearest(
            &self.camera,
            &self.viewport,
            pointer_px,
            self.marker_spheres(),
        )?;
        let index = self.markers.destination_index(hit.object)?;
        self.destinations.get(index)
    }

    pub fn hover(&self, pointer_px: Vec2) -> Popup {
        Popup::for_destination(self.hit_test(pointer_px))
    }
}

impl DemoScene for GlobeScene {
    fn scene(&self) -> &Scene {
        &self.scene
    }

    fn camera(&self) -> &PerspectiveCamera {
        &self.camera
    }

    fn viewport(&self) -> Viewport {
        self.viewport
    }

    fn advance(&mut self) {
        let globe_step = self.config.globe_rotation_step;
        let particles_step = self.config.particles_rotation_step;
        if let Some(n) = self.scene.get_mut(self.globe) {
            n.rotation.y += globe_step;
        }
        if let Some(n) = self.scene.get_mut(self.particles) {
            n.rotation.y += particles_step;
        }
    }

    fn resize(&mut self, width: u32, height: u32) -> Result<()> {
        self.viewport = Viewport::new(width, height)?;
        self.camera.fit_viewport(&self.viewport);
        log::debug!("[resize] globe viewport {}x{}", width, height);
        Ok(())
    }
}
