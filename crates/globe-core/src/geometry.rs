//! CPU-side mesh generation for the scene's geometry kinds.

use crate::scene::Geometry;
use fnv::FnvHashSet;
use glam::Vec3;
use std::f32::consts::PI;

#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
}

impl Vertex {
    #[inline]
    fn new(position: Vec3, normal: Vec3) -> Self {
        Self {
            position: position.to_array(),
            normal: normal.to_array(),
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct MeshData {
    pub vertices: Vec<Vertex>,
    /// Triangle list; empty for point clouds.
    pub indices: Vec<u32>,
}

impl MeshData {
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Unique triangle edges as a line list (two vertices per edge).
    ///
    /// Edges are keyed by quantized endpoint positions, so coincident seam
    /// and pole vertices collapse into a single edge.
    pub fn wireframe_lines(&self) -> Vec<Vertex> {
        let mut seen: FnvHashSet<([i32; 3], [i32; 3])> = FnvHashSet::default();
        let mut lines = Vec::new();
        for tri in self.indices.chunks_exact(3) {
            for (a, b) in [(tri[0], tri[1]), (tri[1], tri[2]), (tri[2], tri[0])] {
                let va = self.vertices[a as usize];
                let vb = self.vertices[b as usize];
                let (ka, kb) = (quantize(va.position), quantize(vb.position));
                if ka == kb {
                    continue;
                }
                let key = if ka < kb { (ka, kb) } else { (kb, ka) };
                if seen.insert(key) {
                    lines.push(va);
                    lines.push(vb);
                }
            }
        }
        lines
    }
}

#[inline]
fn quantize(p: [f32; 3]) -> [i32; 3] {
    const SCALE: f32 = 1.0e4;
    [
        (p[0] * SCALE).round() as i32,
        (p[1] * SCALE).round() as i32,
        (p[2] * SCALE).round() as i32,
    ]
}

pub fn build(geometry: &Geometry) -> MeshData {
    match geometry {
        Geometry::Box {
            width,
            height,
            depth,
        } => box_mesh(*width, *height, *depth),
        Geometry::Sphere {
            radius,
            width_segments,
            height_segments,
        } => sphere_mesh(*radius, *width_segments, *height_segments),
        Geometry::Points { positions } => MeshData {
            vertices: positions.iter().map(|p| Vertex::new(*p, Vec3::ZERO)).collect(),
            indices: Vec::new(),
        },
    }
}

/// Axis-aligned box centered on the origin, four vertices per face.
pub fn box_mesh(width: f32, height: f32, depth: f32) -> MeshData {
    let half = Vec3::new(width, height, depth) * 0.5;
    // (normal, u, v) with u x v == normal so faces wind counter-clockwise
    let faces = [
        (Vec3::X, Vec3::NEG_Z, Vec3::Y),
        (Vec3::NEG_X, Vec3::Z, Vec3::Y),
        (Vec3::Y, Vec3::X, Vec3::NEG_Z),
        (Vec3::NEG_Y, Vec3::X, Vec3::Z),
        (Vec3::Z, Vec3::X, Vec3::Y),
        (Vec3::NEG_Z, Vec3::NEG_X, Vec3::Y),
    ];
    let mut mesh = MeshData::default();
    for (n, u, v) in faces {
        let hn = half.dot(n.abs());
        let hu = half.dot(u.abs());
        let hv = half.dot(v.abs());
        let base = mesh.vertices.len() as u32;
        for (su, sv) in [(-1.0, -1.0), (1.0, -1.0), (1.0, 1.0), (-1.0, 1.0)] {
            let p = n * hn + u * (hu * su) + v * (hv * sv);
            mesh.vertices.push(Vertex::new(p, n));
        }
        let quad = [base, base + 1, base + 2, base, base + 2, base + 3];
        mesh.indices.extend_from_slice(&quad);
    }
    mesh
}

/// UV sphere with the azimuth running from -X through +Z, the same frame
/// used by [`crate::geo::lat_lon_to_vec3`].
pub fn sphere_mesh(radius: f32, width_segments: u32, height_segments: u32) -> MeshData {
    let ws = width_segments.max(3);
    let hs = height_segments.max(2);
    let mut mesh = MeshData::default();
    let mut grid: Vec<Vec<u32>> = Vec::with_capacity(hs as usize + 1);

    for iy in 0..=hs {
        let v = iy as f32 / hs as f32;
        let theta = v * PI;
        let mut row = Vec::with_capacity(ws as usize + 1);
        for ix in 0..=ws {
            let u = ix as f32 / ws as f32;
            let phi = u * 2.0 * PI;
            let p = Vec3::new(
                -radius * phi.cos() * theta.sin(),
                radius * theta.cos(),
                radius * phi.sin() * theta.sin(),
            );
            row.push(mesh.vertices.len() as u32);
            mesh.vertices.push(Vertex::new(p, p.normalize_or_zero()));
        }
        grid.push(row);
    }

    for iy in 0..hs as usize {
        for ix in 0..ws as usize {
            let a = grid[iy][ix + 1];
            let b = grid[iy][ix];
            let c = grid[iy + 1][ix];
            let d = grid[iy + 1][ix + 1];
            // skip the degenerate triangles that touch the poles
            if iy != 0 {
                mesh.indices.extend_from_slice(&[a, b, d]);
            }
            if iy != hs as usize - 1 {
                mesh.indices.extend_from_slice(&[b, c, d]);
            }
        }
    }
    mesh
}
