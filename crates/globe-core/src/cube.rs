use crate::animation::DemoScene;
use crate::camera::{PerspectiveCamera, Viewport};
use crate::config::CubeConfig;
use crate::error::Result;
use crate::scene::{Geometry, Material, Node, ObjectId, Scene};

/// A unit wireframe cube spinning about X and Y.
pub struct CubeScene {
    config: CubeConfig,
    scene: Scene,
    camera: PerspectiveCamera,
    viewport: Viewport,
    cube: ObjectId,
}

impl CubeScene {
    pub fn new(config: CubeConfig, viewport: Viewport) -> Result<Self> {
        config.validate()?;
        let mut camera = PerspectiveCamera::new(
            config.camera.fov_y_degrees,
            viewport.aspect(),
            config.camera.near,
            config.camera.far,
        );
        camera.set_position(config.camera.position);

        let mut scene = Scene::new();
        let cube = scene.add(Node::new(
            Geometry::Box {
                width: 1.0,
                height: 1.0,
                depth: 1.0,
            },
            Material::wireframe(config.color),
        ));
        log::info!("[cube] built: viewport {}x{}", viewport.width, viewport.height);
        Ok(Self {
            config,
            scene,
            camera,
            viewport,
            cube,
        })
    }

    pub fn cube_id(&self) -> ObjectId {
        self.cube
    }
}

impl DemoScene for CubeScene {
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
        let step = self.config.rotation_step;
        if let Some(n) = self.scene.get_mut(self.cube) {
            n.rotation.x += step;
            n.rotation.y += step;
        }
    }

    fn resize(&mut self, width: u32, height: u32) -> Result<()> {
        self.viewport = Viewport::new(width, height)?;
        self.camera.fit_viewport(&self.viewport);
        log::debug!("[resize] cube viewport {}x{}", width, height);
        Ok(())
    }
}
