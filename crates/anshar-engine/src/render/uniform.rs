use std::marker::PhantomData;

use bytemuck::Pod;

/// Fixed-layout uniform block holding one `T`.
///
/// The buffer is created once and overwritten in place via `write`; it is the
/// only mutable GPU resource in the engine. One writer per frame, sequenced by
/// the frame loop, so no extra synchronization is required.
pub struct UniformBuffer<T: Pod> {
    buffer: wgpu::Buffer,
    _marker: PhantomData<T>,
}

impl<T: Pod> UniformBuffer<T> {
    pub fn new(device: &wgpu::Device, label: &str) -> Self {
        let buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some(label),
            size: std::mem::size_of::<T>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        Self {
            buffer,
            _marker: PhantomData,
        }
    }

    /// Overwrites the buffer contents with `value`.
    pub fn write(&self, queue: &wgpu::Queue, value: &T) {
        queue.write_buffer(&self.buffer, 0, bytemuck::bytes_of(value));
    }

    /// Binding resource for bind-group construction.
    pub fn binding(&self) -> wgpu::BindingResource<'_> {
        self.buffer.as_entire_binding()
    }

    /// Byte size of the uniform block, for `min_binding_size` declarations.
    pub fn byte_size() -> std::num::NonZeroU64 {
        std::num::NonZeroU64::new(std::mem::size_of::<T>() as u64)
            .expect("uniform type must not be zero-sized")
    }
}
