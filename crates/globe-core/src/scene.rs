//! Minimal scene graph: nodes with a transform, a geometry and a material.
//!
//! Nodes are stored in insertion order and addressed by [`ObjectId`]. A node
//! may have a parent; world transforms compose along the parent chain.

use crate::error::{GlobeError, Result};
use glam::{EulerRot, Mat4, Quat, Vec3};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObjectId(u32);

impl ObjectId {
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Geometry {
    Box {
        width: f32,
        height: f32,
        depth: f32,
    },
    Sphere {
        radius: f32,
        width_segments: u32,
        height_segments: u32,
    },
    Points {
        positions: Vec<Vec3>,
    },
}

impl Geometry {
    /// Radius of a sphere around the local origin enclosing the geometry.
    pub fn bounding_radius(&self) -> f32 {
        match self {
            Geometry::Box {
                width,
                height,
                depth,
            } => 0.5 * Vec3::new(*width, *height, *depth).length(),
            Geometry::Sphere { radius, .. } => *radius,
            Geometry::Points { positions } => positions
                .iter()
                .map(|p| p.length())
                .fold(0.0_f32, f32::max),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Material {
    pub color: u32,
    pub wireframe: bool,
    /// Shaded by the scene's point light; unlit materials draw flat color.
    pub lit: bool,
}

impl Material {
    pub fn basic(color: u32) -> Self {
        Self {
            color,
            wireframe: false,
            lit: false,
        }
    }

    pub fn wireframe(color: u32) -> Self {
        Self {
            color,
            wireframe: true,
            lit: false,
        }
    }

    pub fn lit(color: u32) -> Self {
        Self {
            color,
            wireframe: false,
            lit: true,
        }
    }

    /// Linear `[r, g, b]` in 0..1 from the packed `0xRRGGBB` color.
    #[inline]
    pub fn rgb(&self) -> [f32; 3] {
        hex_to_rgb(self.color)
    }
}

#[inline]
pub fn hex_to_rgb(color: u32) -> [f32; 3] {
    [
        ((color >> 16) & 0xff) as f32 / 255.0,
        ((color >> 8) & 0xff) as f32 / 255.0,
        (color & 0xff) as f32 / 255.0,
    ]
}

#[derive(Clone, Debug)]
pub struct Node {
    pub parent: Option<ObjectId>,
    pub geometry: Geometry,
    pub material: Material,
    pub position: Vec3,
    /// Euler angles in radians, applied in X, Y, Z order.
    pub rotation: Vec3,
    pub scale: Vec3,
}

impl Node {
    pub fn new(geometry: Geometry, material: Material) -> Self {
        Self {
            parent: None,
            geometry,
            material,
            position: Vec3::ZERO,
            rotation: Vec3::ZERO,
            scale: Vec3::ONE,
        }
    }

    pub fn with_position(mut self, position: Vec3) -> Self {
        self.position = position;
        self
    }

    pub fn local_matrix(&self) -> Mat4 {
        let q = Quat::from_euler(EulerRot::XYZ, self.rotation.x, self.rotation.y, self.rotation.z);
        Mat4::from_scale_rotation_translation(self.scale, q, self.position)
    }
}

#[derive(Clone, Debug)]
pub struct PointLight {
    pub color: u32,
    pub intensity: f32,
    /// Range of the light; 0 means unlimited.
    pub distance: f32,
    pub position: Vec3,
}

#[derive(Clone, Debug, Default)]
pub struct Scene {
    nodes: Vec<Node>,
    lights: Vec<PointLight>,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, node: Node) -> ObjectId {
        let id = ObjectId(self.nodes.len() as u32);
        self.nodes.push(node);
        id
    }

    pub fn add_child(&mut self, parent: ObjectId, mut node: Node) -> Result<ObjectId> {
        if self.get(parent).is_none() {
            return Err(GlobeError::UnknownObject(parent));
        }
        node.parent = Some(parent);
        Ok(self.add(node))
    }

    pub fn add_light(&mut self, light: PointLight) {
        self.lights.push(light);
    }

    #[inline]
    pub fn get(&self, id: ObjectId) -> Option<&Node> {
        self.nodes.get(id.index())
    }

    #[inline]
    pub fn get_mut(&mut self, id: ObjectId) -> Option<&mut Node> {
        self.nodes.get_mut(id.index())
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (ObjectId, &Node)> {
        self.nodes
            .iter()
            .enumerate()
            .map(|(i, n)| (ObjectId(i as u32), n))
    }

    pub fn lights(&self) -> &[PointLight] {
        &self.lights
    }

    /// Model matrix of `id` in world space. Parents always precede their
    /// children, so the chain is finite.
    pub fn world_matrix(&self, id: ObjectId) -> Result<Mat4> {
        let node = self.get(id).ok_or(GlobeError::UnknownObject(id))?;
        let local = node.local_matrix();
        match node.parent {
            Some(p) => Ok(self.world_matrix(p)? * local),
            None => Ok(local),
        }
    }
}
