//! Rendering-Typen, Vertex-Layouts und Uniforms.

use crate::core::{Point, TransformState};
use bytemuck::{Pod, Zeroable};

/// Gemeinsamer Kontext für alle Zeichenmodi.
///
/// Bündelt die GPU-Ressourcen und View-Parameter eines Frames.
pub(crate) struct RenderContext<'a> {
    /// wgpu Device für Buffer-Allokation
    pub device: &'a eframe::wgpu::Device,
    /// wgpu Queue für Buffer-Uploads
    pub queue: &'a eframe::wgpu::Queue,
    /// Viewport-Größe in Pixeln [width, height]
    pub viewport_size: [f32; 2],
}

/// Eckpunkt eines Punkt-Quads (Einheitsquadrat um den Mittelpunkt)
#[repr(C)]
#[derive(Copy, Clone, Debug, Pod, Zeroable)]
pub struct QuadVertex {
    /// Ecke in [-1, 1]²
    pub corner: [f32; 2],
}

impl QuadVertex {
    /// Zwei Dreiecke für ein Quad.
    pub const QUAD: [QuadVertex; 6] = [
        QuadVertex { corner: [-1.0, -1.0] },
        QuadVertex { corner: [1.0, -1.0] },
        QuadVertex { corner: [1.0, 1.0] },
        QuadVertex { corner: [-1.0, -1.0] },
        QuadVertex { corner: [1.0, 1.0] },
        QuadVertex { corner: [-1.0, 1.0] },
    ];

    /// Beschreibt das Vertex-Layout für wgpu.
    pub const fn desc() -> eframe::wgpu::VertexBufferLayout<'static> {
        eframe::wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<QuadVertex>() as eframe::wgpu::BufferAddress,
            step_mode: eframe::wgpu::VertexStepMode::Vertex,
            attributes: &[eframe::wgpu::VertexAttribute {
                offset: 0,
                shader_location: 0,
                format: eframe::wgpu::VertexFormat::Float32x2,
            }],
        }
    }
}

/// `Point` als Instanz-Attribut (Mittelpunkt eines Quads, Location 1).
pub const fn point_instance_desc() -> eframe::wgpu::VertexBufferLayout<'static> {
    eframe::wgpu::VertexBufferLayout {
        array_stride: std::mem::size_of::<Point>() as eframe::wgpu::BufferAddress,
        step_mode: eframe::wgpu::VertexStepMode::Instance,
        attributes: &[eframe::wgpu::VertexAttribute {
            offset: 0,
            shader_location: 1,
            format: eframe::wgpu::VertexFormat::Float32x3,
        }],
    }
}

/// `Point` als Vertex-Attribut (Linien und Polygon, Location 0).
pub const fn point_vertex_desc() -> eframe::wgpu::VertexBufferLayout<'static> {
    eframe::wgpu::VertexBufferLayout {
        array_stride: std::mem::size_of::<Point>() as eframe::wgpu::BufferAddress,
        step_mode: eframe::wgpu::VertexStepMode::Vertex,
        attributes: &[eframe::wgpu::VertexAttribute {
            offset: 0,
            shader_location: 0,
            format: eframe::wgpu::VertexFormat::Float32x3,
        }],
    }
}

/// Uniform-Buffer für Transformation, Viewport und Farbe
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct Uniforms {
    /// Lineare Abbildung (Rotation · Skalierung) als Mat2, Spalten hintereinander
    pub linear: [f32; 4],
    /// `[Breite, Höhe, Punktgröße, 0]` in Pixeln
    pub viewport: [f32; 4],
    /// RGBA-Zeichenfarbe
    pub color: [f32; 4],
}

impl Uniforms {
    /// Baut die Uniforms eines Frames.
    pub fn new(
        transform: &TransformState,
        viewport_size: [f32; 2],
        point_size: f32,
        color: [f32; 4],
    ) -> Self {
        Self {
            linear: transform.linear_map().to_cols_array(),
            viewport: [viewport_size[0], viewport_size[1], point_size, 0.0],
            color,
        }
    }
}

/// Dreiecks-Indizes eines Fächers um Punkt 0 (`[0, i, i+1]`).
pub(crate) fn fan_indices(point_count: usize) -> Vec<u32> {
    if point_count < 3 {
        return Vec::new();
    }
    (1..point_count as u32 - 1)
        .flat_map(|i| [0, i, i + 1])
        .collect()
}
