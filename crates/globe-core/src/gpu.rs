//! wgpu renderer for a [`Scene`]: wireframe lines, lit solids and points.
//!
//! GPU buffers are uploaded lazily the first time a node is drawn; geometry
//! is treated as immutable after that; only transforms change per frame.

use crate::camera::PerspectiveCamera;
use crate::constants::{AMBIENT_LEVEL, CLEAR_COLOR};
use crate::geometry::{self, Vertex};
use crate::scene::{hex_to_rgb, Geometry, Node, ObjectId, Scene};
use fnv::FnvHashMap;
use glam::{Mat4, Vec3};
use wgpu::util::DeviceExt;

pub const DEPTH_FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Depth24Plus;

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
struct DrawUniforms {
    mvp: [[f32; 4]; 4],
    model: [[f32; 4]; 4],
    color: [f32; 4],
    light_position: [f32; 4],
    light_color: [f32; 4],
    params: [f32; 4],
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum DrawKind {
    Lines,
    Triangles,
    Points,
}

struct DrawItem {
    kind: DrawKind,
    vertex_buffer: wgpu::Buffer,
    index_buffer: Option<wgpu::Buffer>,
    count: u32,
    uniform_buffer: wgpu::Buffer,
    bind_group: wgpu::BindGroup,
}

pub struct SceneRenderer {
    line_pipeline: wgpu::RenderPipeline,
    solid_pipeline: wgpu::RenderPipeline,
    point_pipeline: wgpu::RenderPipeline,
    bind_group_layout: wgpu::BindGroupLayout,
    depth_view: wgpu::TextureView,
    // `None` marks nodes with nothing to draw so they are not re-examined
    draws: FnvHashMap<ObjectId, Option<DrawItem>>,
    clear_color: wgpu::Color,
}

impl SceneRenderer {
    pub fn new(
        device: &wgpu::Device,
        format: wgpu::TextureFormat,
        width: u32,
        height: u32,
    ) -> Self {
        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("scene_shader"),
            source: wgpu::ShaderSource::Wgsl(crate::SCENE_WGSL.into()),
        });
        let bind_group_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("scene_bgl"),
            entries: &[wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::VERTEX_FRAGMENT,
                ty: wgpu::BindingType::Buffer {
                    ty: wgpu::BufferBindingType::Uniform,
                    has_dynamic_offset: false,
                    min_binding_size: None,
                },
                count: None,
            }],
        });
        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("scene_pl"),
            bind_group_layouts: &[&bind_group_layout],
            push_constant_ranges: &[],
        });
        let make = |label: &str, topology: wgpu::PrimitiveTopology| {
            create_pipeline(device, &pipeline_layout, &shader, format, label, topology)
        };
        let line_pipeline = make("scene_lines", wgpu::PrimitiveTopology::LineList);
        let solid_pipeline = make("scene_solid", wgpu::PrimitiveTopology::TriangleList);
        let point_pipeline = make("scene_points", wgpu::PrimitiveTopology::PointList);
        let depth_view = create_depth_view(device, width, height);

        Self {
            line_pipeline,
            solid_pipeline,
            point_pipeline,
            bind_group_layout,
            depth_view,
            draws: FnvHashMap::default(),
            clear_color: wgpu::Color {
                r: CLEAR_COLOR[0],
                g: CLEAR_COLOR[1],
                b: CLEAR_COLOR[2],
                a: 1.0,
            },
        }
    }

    /// Recreate size-dependent targets after the surface changed size.
    pub fn resize(&mut self, device: &wgpu::Device, width: u32, height: u32) {
        self.depth_view = create_depth_view(device, width, height);
    }

    fn upload(&self, device: &wgpu::Device, id: ObjectId, node: &Node) -> Option<DrawItem> {
        let mesh = geometry::build(&node.geometry);
        let (kind, vertices, indices): (DrawKind, Vec<Vertex>, Option<Vec<u32>>) =
            match (&node.geometry, node.material.wireframe) {
                (Geometry::Points { .. }, _) => (DrawKind::Points, mesh.vertices, None),
                (_, true) => (DrawKind::Lines, mesh.wireframe_lines(), None),
                (_, false) => (DrawKind::Triangles, mesh.vertices, Some(mesh.indices)),
            };
        let count = indices.as_ref().map_or(vertices.len(), Vec::len) as u32;
        if count == 0 {
            log::debug!("[gpu] node {:?} has nothing to draw", id);
            return None;
        }

        let vertex_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("node_vb"),
            contents: bytemuck::cast_slice(&vertices),
            usage: wgpu::BufferUsages::VERTEX,
        });
        let index_buffer = indices.map(|idx| {
            device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some("node_ib"),
                contents: bytemuck::cast_slice(&idx),
                usage: wgpu::BufferUsages::INDEX,
            })
        });
        let uniform_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("node_uniforms"),
            size: std::mem::size_of::<DrawUniforms>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });
        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("node_bg"),
            layout: &self.bind_group_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: uniform_buffer.as_entire_binding(),
            }],
        });
        log::debug!("[gpu] uploaded node {:?} as {:?} ({} elements)", id, kind, count);
        Some(DrawItem {
            kind,
            vertex_buffer,
            index_buffer,
            count,
            uniform_buffer,
            bind_group,
        })
    }

    /// Draw every node of `scene` as seen from `camera` into `target`.
    pub fn render(
        &mut self,
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        target: &wgpu::TextureView,
        scene: &Scene,
        camera: &PerspectiveCamera,
    ) {
        for (id, node) in scene.iter() {
            if !self.draws.contains_key(&id) {
                let item = self.upload(device, id, node);
                self.draws.insert(id, item);
            }
        }

        let view_proj = camera.view_projection();
        let (light_position, light_color, light_range) = match scene.lights().first() {
            Some(l) => {
                let [r, g, b] = hex_to_rgb(l.color);
                (l.position, [r, g, b, l.intensity], l.distance)
            }
            None => (Vec3::ZERO, [1.0, 1.0, 1.0, 0.0], 0.0),
        };
        for (id, node) in scene.iter() {
            let Some(Some(item)) = self.draws.get(&id) else {
                continue;
            };
            let model = match scene.world_matrix(id) {
                Ok(m) => m,
                Err(e) => {
                    log::warn!("[gpu] {}", e);
                    Mat4::IDENTITY
                }
            };
            let [r, g, b] = node.material.rgb();
            let uniforms = DrawUniforms {
                mvp: (view_proj * model).to_cols_array_2d(),
                model: model.to_cols_array_2d(),
                color: [r, g, b, 1.0],
                light_position: light_position.extend(1.0).to_array(),
                light_color,
                params: [
                    if node.material.lit { 1.0 } else { 0.0 },
                    AMBIENT_LEVEL,
                    light_range,
                    0.0,
                ],
            };
            queue.write_buffer(&item.uniform_buffer, 0, bytemuck::bytes_of(&uniforms));
        }

        let mut encoder = device.create_command_encoder(&wgpu::CommandEncoderDescriptor {
            label: Some("scene_encoder"),
        });
        {
            let mut rpass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("scene_pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: target,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(self.clear_color),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                    view: &self.depth_view,
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(1.0),
                        store: wgpu::StoreOp::Store,
                    }),
                    stencil_ops: None,
                }),
                timestamp_writes: None,
                occlusion_query_set: None,
            });
            for (id, _) in scene.iter() {
                let Some(Some(item)) = self.draws.get(&id) else {
                    continue;
                };
                let pipeline = match item.kind {
                    DrawKind::Lines => &self.line_pipeline,
                    DrawKind::Triangles => &self.solid_pipeline,
                    DrawKind::Points => &self.point_pipeline,
                };
                rpass.set_pipeline(pipeline);
                rpass.set_bind_group(0, &item.bind_group, &[]);
                rpass.set_vertex_buffer(0, item.vertex_buffer.slice(..));
                match &item.index_buffer {
                    Some(ib) => {
                        rpass.set_index_buffer(ib.slice(..), wgpu::IndexFormat::Uint32);
                        rpass.draw_indexed(0..item.count, 0, 0..1);
                    }
                    None => rpass.draw(0..item.count, 0..1),
                }
            }
        }
        queue.submit(Some(encoder.finish()));
    }
}

fn create_pipeline(
    device: &wgpu::Device,
    layout: &wgpu::PipelineLayout,
    shader: &wgpu::ShaderModule,
    format: wgpu::TextureFormat,
    label: &str,
    topology: wgpu::PrimitiveTopology,
) -> wgpu::RenderPipeline {
    let vertex_buffers = [wgpu::VertexBufferLayout {
        array_stride: std::mem::size_of::<Vertex>() as u64,
        step_mode: wgpu::VertexStepMode::Vertex,
        attributes: &[
            wgpu::VertexAttribute {
                format: wgpu::VertexFormat::Float32x3,
                offset: 0,
                shader_location: 0,
            },
            wgpu::VertexAttribute {
                format: wgpu::VertexFormat::Float32x3,
                offset: 12,
                shader_location: 1,
            },
        ],
    }];
    device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
        label: Some(label),
        layout: Some(layout),
        vertex: wgpu::VertexState {
            module: shader,
            entry_point: Some("vs_main"),
            buffers: &vertex_buffers,
            compilation_options: wgpu::PipelineCompilationOptions::default(),
        },
        primitive: wgpu::PrimitiveState {
            topology,
            cull_mode: None,
            ..Default::default()
        },
        depth_stencil: Some(wgpu::DepthStencilState {
            format: DEPTH_FORMAT,
            depth_write_enabled: true,
            depth_compare: wgpu::CompareFunction::Less,
            stencil: wgpu::StencilState::default(),
            bias: wgpu::DepthBiasState::default(),
        }),
        multisample: wgpu::MultisampleState::default(),
        fragment: Some(wgpu::FragmentState {
            module: shader,
            entry_point: Some("fs_main"),
            targets: &[Some(wgpu::ColorTargetState {
                format,
                blend: Some(wgpu::BlendState::ALPHA_BLENDING),
                write_mask: wgpu::ColorWrites::ALL,
            })],
            compilation_options: wgpu::PipelineCompilationOptions::default(),
        }),
        cache: None,
        multiview: None,
    })
}

fn create_depth_view(device: &wgpu::Device, width: u32, height: u32) -> wgpu::TextureView {
    let tex = device.create_texture(&wgpu::TextureDescriptor {
        label: Some("depth_tex"),
        size: wgpu::Extent3d {
            width: width.max(1),
            height: height.max(1),
            depth_or_array_layers: 1,
        },
        mip_level_count: 1,
        sample_count: 1,
        dimension: wgpu::TextureDimension::D2,
        format: DEPTH_FORMAT,
        usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
        view_formats: &[],
    });
    tex.create_view(&wgpu::TextureViewDescriptor::default())
}
