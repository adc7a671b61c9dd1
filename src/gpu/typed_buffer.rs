//! Fixed-size typed GPU buffers.
//!
//! The instance layout is immutable once generated; a layout change allocates
//! a fresh buffer at the exact new size rather than growing in place, so the
//! shader's `arrayLength` always reports the live instance count.

use wgpu::util::DeviceExt;

/// A GPU buffer holding a fixed slice of `T`, sized exactly to its contents.
pub struct TypedBuffer<T> {
    buffer: wgpu::Buffer,
    count: usize,
    _marker: std::marker::PhantomData<T>,
}

impl<T: bytemuck::Pod> TypedBuffer<T> {
    /// Buffer initialized from existing data.
    pub fn new_with_data(
        device: &wgpu::Device,
        label: &str,
        data: &[T],
        usage: wgpu::BufferUsages,
    ) -> Self {
        let buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(label),
            contents: bytemuck::cast_slice(data),
            usage,
        });

        Self {
            buffer,
            count: data.len(),
            _marker: std::marker::PhantomData,
        }
    }

    /// The underlying wgpu buffer.
    pub fn buffer(&self) -> &wgpu::Buffer {
        &self.buffer
    }

    /// Number of items stored.
    pub fn count(&self) -> usize {
        self.count
    }
}
