//! Punkt-Renderer: instanzierte Quads, Line-Strip und Polygon-Fächer.

use super::types::{
    fan_indices, point_instance_desc, point_vertex_desc, QuadVertex, RenderContext, Uniforms,
};
use crate::core::{PointSet, RenderMode, TransformState};
use eframe::{egui_wgpu, wgpu};
use wgpu::util::DeviceExt;

/// Renderer für die Punktmenge in allen drei Zeichenmodi.
pub struct PointRenderer {
    point_pipeline: wgpu::RenderPipeline,
    line_pipeline: wgpu::RenderPipeline,
    polygon_pipeline: wgpu::RenderPipeline,
    quad_buffer: wgpu::Buffer,
    uniform_buffer: wgpu::Buffer,
    bind_group: wgpu::BindGroup,
    point_buffer: Option<wgpu::Buffer>,
    point_capacity: usize,
    index_buffer: Option<wgpu::Buffer>,
    index_capacity: usize,
    draw_call: Option<DrawCall>,
}

/// Vorbereiteter Draw-Call eines Frames
#[derive(Debug, Clone, Copy)]
struct DrawCall {
    mode: RenderMode,
    point_count: u32,
    index_count: u32,
}

impl PointRenderer {
    /// Erstellt einen neuen Punkt-Renderer
    pub fn new(render_state: &egui_wgpu::RenderState, shader: &wgpu::ShaderModule) -> Self {
        let device = &render_state.device;

        let uniform_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("Point Uniform Buffer"),
            size: std::mem::size_of::<Uniforms>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        let bind_group_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("Point Bind Group Layout"),
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

        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("Point Bind Group"),
            layout: &bind_group_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: uniform_buffer.as_entire_binding(),
            }],
        });

        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("Point Pipeline Layout"),
            bind_group_layouts: &[&bind_group_layout],
            push_constant_ranges: &[],
        });

        let point_pipeline = create_pipeline(
            render_state,
            shader,
            &pipeline_layout,
            PipelineSpec {
                label: "Point Pipeline",
                vs_entry: "vs_point",
                buffers: &[QuadVertex::desc(), point_instance_desc()],
                topology: wgpu::PrimitiveTopology::TriangleList,
            },
        );
        let line_pipeline = create_pipeline(
            render_state,
            shader,
            &pipeline_layout,
            PipelineSpec {
                label: "Line Pipeline",
                vs_entry: "vs_main",
                buffers: &[point_vertex_desc()],
                topology: wgpu::PrimitiveTopology::LineStrip,
            },
        );
        let polygon_pipeline = create_pipeline(
            render_state,
            shader,
            &pipeline_layout,
            PipelineSpec {
                label: "Polygon Pipeline",
                vs_entry: "vs_main",
                buffers: &[point_vertex_desc()],
                topology: wgpu::PrimitiveTopology::TriangleList,
            },
        );

        let quad_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Point Quad Buffer"),
            contents: bytemuck::cast_slice(&QuadVertex::QUAD),
            usage: wgpu::BufferUsages::VERTEX,
        });

        Self {
            point_pipeline,
            line_pipeline,
            polygon_pipeline,
            quad_buffer,
            uniform_buffer,
            bind_group,
            point_buffer: None,
            point_capacity: 0,
            index_buffer: None,
            index_capacity: 0,
            draw_call: None,
        }
    }

    /// Lädt Uniforms, Punkte und ggf. Polygon-Indizes für den nächsten Frame hoch.
    ///
    /// Lines zeichnet nur bei genau 2 Punkten, Polygon erst ab 3 Punkten.
    pub fn prepare(
        &mut self,
        ctx: &RenderContext,
        points: &PointSet,
        mode: RenderMode,
        style: &PointStyle,
    ) {
        self.draw_call = None;

        let [width, height] = ctx.viewport_size;
        if !width.is_finite() || !height.is_finite() || width <= 0.0 || height <= 0.0 {
            return;
        }
        if points.is_empty() || !mode.draws(points.len()) {
            return;
        }

        let uniforms = Uniforms::new(&style.transform, ctx.viewport_size, style.size, style.color);
        ctx.queue
            .write_buffer(&self.uniform_buffer, 0, bytemuck::cast_slice(&[uniforms]));

        self.upload_points(ctx, points);
        let index_count = if mode == RenderMode::Polygon {
            let indices = fan_indices(points.len());
            self.upload_indices(ctx, &indices);
            indices.len() as u32
        } else {
            0
        };

        self.draw_call = Some(DrawCall {
            mode,
            point_count: points.len() as u32,
            index_count,
        });
    }

    /// Zeichnet die in `prepare` hochgeladenen Daten.
    pub fn paint(&self, render_pass: &mut wgpu::RenderPass<'static>) {
        let Some(call) = self.draw_call else {
            return;
        };
        let Some(point_buffer) = self.point_buffer.as_ref() else {
            log::error!("PointRenderer: missing point buffer before draw call");
            return;
        };

        render_pass.set_bind_group(0, &self.bind_group, &[]);
        match call.mode {
            RenderMode::Points => {
                render_pass.set_pipeline(&self.point_pipeline);
                render_pass.set_vertex_buffer(0, self.quad_buffer.slice(..));
                render_pass.set_vertex_buffer(1, point_buffer.slice(..));
                render_pass.draw(0..QuadVertex::QUAD.len() as u32, 0..call.point_count);
            }
            RenderMode::Lines => {
                render_pass.set_pipeline(&self.line_pipeline);
                render_pass.set_vertex_buffer(0, point_buffer.slice(..));
                render_pass.draw(0..call.point_count, 0..1);
            }
            RenderMode::Polygon => {
                let Some(index_buffer) = self.index_buffer.as_ref() else {
                    log::error!("PointRenderer: missing index buffer before draw call");
                    return;
                };
                render_pass.set_pipeline(&self.polygon_pipeline);
                render_pass.set_vertex_buffer(0, point_buffer.slice(..));
                render_pass.set_index_buffer(index_buffer.slice(..), wgpu::IndexFormat::Uint32);
                render_pass.draw_indexed(0..call.index_count, 0, 0..1);
            }
        }
    }

    /// Schreibt die Punkte in den wiederverwendbaren Buffer (wächst bei Bedarf).
    fn upload_points(&mut self, ctx: &RenderContext, points: &PointSet) {
        if self.point_buffer.is_none() || points.len() > self.point_capacity {
            let size = std::mem::size_of_val(points.as_flat()) as u64;
            self.point_buffer = Some(ctx.device.create_buffer(&wgpu::BufferDescriptor {
                label: Some("Point Buffer"),
                size,
                usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
                mapped_at_creation: false,
            }));
            self.point_capacity = points.len();
        }
        if let Some(buffer) = &self.point_buffer {
            ctx.queue.write_buffer(buffer, 0, bytemuck::cast_slice(points.as_flat()));
        }
    }

    fn upload_indices(&mut self, ctx: &RenderContext, indices: &[u32]) {
        if self.index_buffer.is_none() || indices.len() > self.index_capacity {
            let size = std::mem::size_of_val(indices) as u64;
            self.index_buffer = Some(ctx.device.create_buffer(&wgpu::BufferDescriptor {
                label: Some("Polygon Index Buffer"),
                size,
                usage: wgpu::BufferUsages::INDEX | wgpu::BufferUsages::COPY_DST,
                mapped_at_creation: false,
            }));
            self.index_capacity = indices.len();
        }
        if let Some(buffer) = &self.index_buffer {
            ctx.queue.write_buffer(buffer, 0, bytemuck::cast_slice(indices));
        }
    }
}

/// Zeichenstil eines Frames (Transformation, Größe, Farbe).
pub struct PointStyle {
    /// Zeichenzeit-Transformation
    pub transform: TransformState,
    /// Punktgröße in Pixeln
    pub size: f32,
    /// RGBA-Farbe
    pub color: [f32; 4],
}

struct PipelineSpec<'a> {
    label: &'a str,
    vs_entry: &'a str,
    buffers: &'a [wgpu::VertexBufferLayout<'static>],
    topology: wgpu::PrimitiveTopology,
}

fn create_pipeline(
    render_state: &egui_wgpu::RenderState,
    shader: &wgpu::ShaderModule,
    layout: &wgpu::PipelineLayout,
    spec: PipelineSpec,
) -> wgpu::RenderPipeline {
    render_state
        .device
        .create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some(spec.label),
            layout: Some(layout),
            vertex: wgpu::VertexState {
                module: shader,
                entry_point: Some(spec.vs_entry),
                buffers: spec.buffers,
                compilation_options: Default::default(),
            },
            fragment: Some(wgpu::FragmentState {
                module: shader,
                entry_point: Some("fs_main"),
                targets: &[Some(wgpu::ColorTargetState {
                    format: render_state.target_format,
                    blend: Some(wgpu::BlendState::ALPHA_BLENDING),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
                compilation_options: Default::default(),
            }),
            primitive: wgpu::PrimitiveState {
                topology: spec.topology,
                strip_index_format: None,
                front_face: wgpu::FrontFace::Ccw,
                cull_mode: None,
                unclipped_depth: false,
                polygon_mode: wgpu::PolygonMode::Fill,
                conservative: false,
            },
            depth_stencil: None,
            multisample: wgpu::MultisampleState {
                count: 4,
                mask: !0,
                alpha_to_coverage_enabled: false,
            },
            multiview: None,
            cache: None,
        })
}
