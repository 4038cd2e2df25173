//! GPU rendering subsystem.
//!
//! Thin typed wrappers over the GPU resources a scene owns. Each wrapper is
//! created once at initialization, holds exactly one wgpu object (plus its
//! view where applicable), and is destroyed by drop. Uniform buffers are the
//! only wrappers that mutate after creation.

mod ctx;
mod depth;
mod mesh;
mod texture;
mod uniform;

pub use ctx::{RenderCtx, RenderTarget};
pub use depth::DepthTarget;
pub use mesh::MeshBuffers;
pub use texture::{linear_sampler, Texture2d};
pub use uniform::UniformBuffer;
