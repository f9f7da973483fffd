use bytemuck::{Pod, Zeroable};
use wgpu::util::DeviceExt;

/// Interleaved vertex: position, normal, texture coordinate.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    /// Object-space position.
    pub position: [f32; 3],
    /// Object-space normal.
    pub normal: [f32; 3],
    /// Texture coordinate before UV scaling.
    pub uv: [f32; 2],
}

const ATTRIBUTES: [wgpu::VertexAttribute; 3] =
    wgpu::vertex_attr_array![0 => Float32x3, 1 => Float32x3, 2 => Float32x2];

const POSITION_ONLY: [wgpu::VertexAttribute; 1] = wgpu::vertex_attr_array![0 => Float32x3];

impl Vertex {
    /// Split one table row (position, normal, uv).
    #[must_use]
    pub fn from_row(row: &[f32; 8]) -> Self {
        Self {
            position: [row[0], row[1], row[2]],
            normal: [row[3], row[4], row[5]],
            uv: [row[6], row[7]],
        }
    }

    /// Layout with all three attributes (lit pipeline).
    #[must_use]
    pub fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: size_of::<Self>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &ATTRIBUTES,
        }
    }

    /// Same stride, position only (lamp pipeline).
    #[must_use]
    pub fn position_layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: size_of::<Self>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &POSITION_ONLY,
        }
    }
}

/// A vertex buffer and the number of vertices to draw from it.
pub struct GpuMesh {
    /// Vertex buffer.
    pub buffer: wgpu::Buffer,
    /// Vertices in the buffer.
    pub vertex_count: u32,
}

impl GpuMesh {
    /// Upload a vertex table.
    #[must_use]
    pub fn upload(device: &wgpu::Device, label: &str, rows: &[[f32; 8]]) -> Self {
        let vertices: Vec<Vertex> = rows.iter().map(Vertex::from_row).collect();
        let buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(label),
            contents: bytemuck::cast_slice(&vertices),
            usage: wgpu::BufferUsages::VERTEX,
        });
        Self {
            buffer,
            vertex_count: vertices.len() as u32,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vertex_is_tightly_packed() {
        assert_eq!(size_of::<Vertex>(), 32);
        assert_eq!(Vertex::layout().array_stride, 32);
        assert_eq!(Vertex::position_layout().array_stride, 32);
    }

    #[test]
    fn attribute_offsets_follow_row_layout() {
        let offsets: Vec<u64> = Vertex::layout().attributes.iter().map(|a| a.offset).collect();
        assert_eq!(offsets, vec![0, 12, 24]);
    }

    #[test]
    fn row_split() {
        let v = Vertex::from_row(&[1.0, 2.0, 3.0, 0.0, 1.0, 0.0, 0.25, 0.75]);
        assert_eq!(v.position, [1.0, 2.0, 3.0]);
        assert_eq!(v.normal, [0.0, 1.0, 0.0]);
        assert_eq!(v.uv, [0.25, 0.75]);
    }
}
