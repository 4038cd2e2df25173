use bytemuck::{Pod, Zeroable};

/// One vertex: 3-D position + 2-D texture coordinate.
///
/// Immutable once uploaded; the layout must match the vertex inputs of the
/// scene shader.
#[repr(C)]
#[derive(Debug, Copy, Clone, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub tex_coord: [f32; 2],
}

impl Vertex {
    const ATTRS: [wgpu::VertexAttribute; 2] = wgpu::vertex_attr_array![
        0 => Float32x3, // position
        1 => Float32x2  // tex_coord
    ];

    pub fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Vertex>() as u64,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRS,
        }
    }
}

/// Plain mesh data: an ordered vertex list plus a `u32` triangle index list.
///
/// Built once at startup and uploaded verbatim; carries no behavior.
pub struct Mesh {
    pub vertices: Vec<Vertex>,
    pub indices: Vec<u32>,
}

const fn v(position: [f32; 3], tex_coord: [f32; 2]) -> Vertex {
    Vertex {
        position,
        tex_coord,
    }
}

/// Unit cube: 24 vertices (4 per face, so each face gets its own texture
/// coordinates) and 36 indices.
pub fn cube() -> Mesh {
    let vertices = vec![
        // top
        v([-1.0, 1.0, -1.0], [0.0, 0.0]),
        v([1.0, 1.0, -1.0], [1.0, 0.0]),
        v([1.0, 1.0, 1.0], [1.0, 1.0]),
        v([-1.0, 1.0, 1.0], [0.0, 1.0]),
        // bottom
        v([-1.0, -1.0, -1.0], [0.0, 0.0]),
        v([1.0, -1.0, -1.0], [1.0, 0.0]),
        v([1.0, -1.0, 1.0], [1.0, 1.0]),
        v([-1.0, -1.0, 1.0], [0.0, 1.0]),
        // left
        v([-1.0, -1.0, 1.0], [0.0, 0.0]),
        v([-1.0, -1.0, -1.0], [1.0, 0.0]),
        v([-1.0, 1.0, -1.0], [1.0, 1.0]),
        v([-1.0, 1.0, 1.0], [0.0, 1.0]),
        // right
        v([1.0, -1.0, 1.0], [0.0, 0.0]),
        v([1.0, -1.0, -1.0], [1.0, 0.0]),
        v([1.0, 1.0, -1.0], [1.0, 1.0]),
        v([1.0, 1.0, 1.0], [0.0, 1.0]),
        // front
        v([-1.0, -1.0, -1.0], [0.0, 0.0]),
        v([1.0, -1.0, -1.0], [1.0, 0.0]),
        v([1.0, 1.0, -1.0], [1.0, 1.0]),
        v([-1.0, 1.0, -1.0], [0.0, 1.0]),
        // back
        v([-1.0, -1.0, 1.0], [0.0, 0.0]),
        v([1.0, -1.0, 1.0], [1.0, 0.0]),
        v([1.0, 1.0, 1.0], [1.0, 1.0]),
        v([-1.0, 1.0, 1.0], [0.0, 1.0]),
    ];

    let indices = vec![
        3, 1, 0, 2, 1, 3, // top
        6, 4, 5, 7, 4, 6, // bottom
        11, 9, 8, 10, 9, 11, // left
        14, 12, 13, 15, 12, 14, // right
        19, 17, 16, 18, 17, 19, // front
        22, 20, 21, 23, 20, 22, // back
    ];

    Mesh { vertices, indices }
}

/// Ground quad spanning ±20 units at y = 0: 4 vertices, 6 indices.
pub fn ground_plane() -> Mesh {
    let vertices = vec![
        v([-20.0, 0.0, -20.0], [0.0, 0.0]),
        v([20.0, 0.0, -20.0], [1.0, 0.0]),
        v([20.0, 0.0, 20.0], [1.0, 1.0]),
        v([-20.0, 0.0, 20.0], [0.0, 1.0]),
    ];

    let indices = vec![0, 2, 1, 0, 3, 2];

    Mesh { vertices, indices }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cube_has_24_vertices_and_36_indices() {
        let mesh = cube();
        assert_eq!(mesh.vertices.len(), 24);
        assert_eq!(mesh.indices.len(), 36);
    }

    #[test]
    fn plane_has_4_vertices_and_6_indices() {
        let mesh = ground_plane();
        assert_eq!(mesh.vertices.len(), 4);
        assert_eq!(mesh.indices.len(), 6);
    }

    #[test]
    fn indices_stay_in_vertex_range() {
        for mesh in [cube(), ground_plane()] {
            let max = mesh.vertices.len() as u32;
            assert!(mesh.indices.iter().all(|&i| i < max));
        }
    }

    #[test]
    fn cube_vertices_lie_on_the_unit_cube() {
        for vert in cube().vertices {
            for c in vert.position {
                assert_eq!(c.abs(), 1.0);
            }
        }
    }

    #[test]
    fn plane_lies_at_ground_level() {
        assert!(ground_plane().vertices.iter().all(|v| v.position[1] == 0.0));
    }
}
