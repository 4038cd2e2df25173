use bytemuck::Pod;
use wgpu::util::DeviceExt;

/// Immutable vertex + index buffer pair for one mesh.
///
/// Both buffers are uploaded at creation and never written again; the stored
/// index count is the draw count for `draw_indexed`. Indices are `u32`.
pub struct MeshBuffers {
    vertex: wgpu::Buffer,
    index: wgpu::Buffer,
    index_count: u32,
}

impl MeshBuffers {
    pub fn new<V: Pod>(
        device: &wgpu::Device,
        label: &str,
        vertices: &[V],
        indices: &[u32],
    ) -> Self {
        let vertex = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(&format!("{label} vbo")),
            contents: bytemuck::cast_slice(vertices),
            usage: wgpu::BufferUsages::VERTEX,
        });

        let index = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(&format!("{label} ibo")),
            contents: bytemuck::cast_slice(indices),
            usage: wgpu::BufferUsages::INDEX,
        });

        Self {
            vertex,
            index,
            index_count: indices.len() as u32,
        }
    }

    /// Number of indices uploaded at creation.
    pub fn index_count(&self) -> u32 {
        self.index_count
    }

    /// Binds the vertex buffer to slot 0 and the index buffer as `Uint32`.
    pub fn bind(&self, rpass: &mut wgpu::RenderPass<'_>) {
        rpass.set_vertex_buffer(0, self.vertex.slice(..));
        rpass.set_index_buffer(self.index.slice(..), wgpu::IndexFormat::Uint32);
    }
}
