use winit::dpi::PhysicalSize;

/// Depth/stencil render target sized to the drawable.
///
/// Owns the texture and its view. The target is recreated (not resized in
/// place) when the drawable size changes; `matches` tells the owner when.
pub struct DepthTarget {
    texture: wgpu::Texture,
    view: wgpu::TextureView,
    size: PhysicalSize<u32>,
}

impl DepthTarget {
    /// Combined 24-bit depth + 8-bit stencil, cleared together each frame.
    pub const FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Depth24PlusStencil8;

    pub fn new(device: &wgpu::Device, size: PhysicalSize<u32>) -> Self {
        let texture = device.create_texture(&wgpu::TextureDescriptor {
            label: Some("anshar depth target"),
            size: wgpu::Extent3d {
                width: size.width.max(1),
                height: size.height.max(1),
                depth_or_array_layers: 1,
            },
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format: Self::FORMAT,
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            view_formats: &[],
        });

        let view = texture.create_view(&wgpu::TextureViewDescriptor::default());

        Self {
            texture,
            view,
            size,
        }
    }

    /// True when this target was created for `size`.
    pub fn matches(&self, size: PhysicalSize<u32>) -> bool {
        self.size == size
    }

    pub fn view(&self) -> &wgpu::TextureView {
        &self.view
    }
}
