//! Builders for bind group layouts and bind groups.
//!
//! Bindings are numbered in declaration order, so the layout builder and
//! the matching bind group builder must be fed in the same order.

/// A bind group layout together with the entries it was built from.
pub struct BindGroupLayoutWithDesc {
    pub layout: wgpu::BindGroupLayout,
    pub entries: Vec<wgpu::BindGroupLayoutEntry>,
}

#[derive(Default)]
pub struct BindGroupLayoutBuilder {
    entries: Vec<wgpu::BindGroupLayoutEntry>,
    next_binding: u32,
}

impl BindGroupLayoutBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn binding(mut self, visibility: wgpu::ShaderStages, ty: wgpu::BindingType) -> Self {
        self.entries.push(wgpu::BindGroupLayoutEntry {
            binding: self.next_binding,
            visibility,
            ty,
            count: None,
        });
        self.next_binding += 1;
        self
    }

    /// Next binding, visible to the vertex stage only.
    pub fn next_binding_vertex(self, ty: wgpu::BindingType) -> Self {
        self.binding(wgpu::ShaderStages::VERTEX, ty)
    }

    /// Next binding, visible to the fragment stage only.
    pub fn next_binding_fragment(self, ty: wgpu::BindingType) -> Self {
        self.binding(wgpu::ShaderStages::FRAGMENT, ty)
    }

    /// Next binding, visible to both rasterization stages.
    pub fn next_binding_rendering(self, ty: wgpu::BindingType) -> Self {
        self.binding(
            wgpu::ShaderStages::VERTEX | wgpu::ShaderStages::FRAGMENT,
            ty,
        )
    }

    pub fn create(self, device: &wgpu::Device, label: &str) -> BindGroupLayoutWithDesc {
        let layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some(label),
            entries: &self.entries,
        });
        BindGroupLayoutWithDesc {
            layout,
            entries: self.entries,
        }
    }
}

pub struct BindGroupBuilder<'a> {
    layout: &'a BindGroupLayoutWithDesc,
    entries: Vec<wgpu::BindGroupEntry<'a>>,
}

impl<'a> BindGroupBuilder<'a> {
    pub fn new(layout: &'a BindGroupLayoutWithDesc) -> Self {
        Self {
            layout,
            entries: Vec::with_capacity(layout.entries.len()),
        }
    }

    /// Appends a resource for the next binding slot.
    pub fn resource(mut self, resource: wgpu::BindingResource<'a>) -> Self {
        self.entries.push(wgpu::BindGroupEntry {
            binding: self.entries.len() as u32,
            resource,
        });
        self
    }

    pub fn create(self, device: &wgpu::Device, label: &str) -> wgpu::BindGroup {
        debug_assert_eq!(
            self.entries.len(),
            self.layout.entries.len(),
            "bind group entry count does not match its layout"
        );
        device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some(label),
            layout: &self.layout.layout,
            entries: &self.entries,
        })
    }
}
