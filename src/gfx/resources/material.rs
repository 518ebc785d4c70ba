//! Material definitions and centralized management.
//!
//! Materials live in a [`MaterialManager`] and objects reference them by
//! name, so several objects can share one uniform buffer.

use std::collections::HashMap;

use wgpu::Device;

use crate::wgpu_utils::{
    binding_builder::{BindGroupBuilder, BindGroupLayoutBuilder, BindGroupLayoutWithDesc},
    binding_types,
    uniform_buffer::UniformBuffer,
};

/// GPU-side material parameters. Must match the `MaterialParams` struct
/// in `forward.wgsl` field for field.
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct MaterialUniform {
    pub base_color: [f32; 4],
    pub metallic: f32,
    pub roughness: f32,
    // vec3 emissive is 16-byte aligned on the WGSL side
    _pad0: [f32; 2],
    pub emissive: [f32; 3],
    _pad1: f32,
}

type MaterialUBO = UniformBuffer<MaterialUniform>;

/// Bind group plumbing for one material (slot 2 in the forward pipeline).
pub struct MaterialBindings {
    bind_group_layout: BindGroupLayoutWithDesc,
    bind_group: Option<wgpu::BindGroup>,
}

impl MaterialBindings {
    pub fn new(device: &Device) -> Self {
        let bind_group_layout = BindGroupLayoutBuilder::new()
            .next_binding_fragment(binding_types::uniform())
            .create(device, "Material Bind Group Layout");

        MaterialBindings {
            bind_group_layout,
            bind_group: None,
        }
    }

    pub fn create_bind_group(&mut self, device: &Device, ubo: &MaterialUBO) {
        self.bind_group = Some(
            BindGroupBuilder::new(&self.bind_group_layout)
                .resource(ubo.binding_resource())
                .create(device, "Material Bind Group"),
        );
    }

    pub fn bind_group_layout(&self) -> &wgpu::BindGroupLayout {
        &self.bind_group_layout.layout
    }

    pub fn bind_group(&self) -> Option<&wgpu::BindGroup> {
        self.bind_group.as_ref()
    }
}

/// A named material with its (lazily created) GPU resources.
pub struct Material {
    pub name: String,
    pub base_color: [f32; 4],
    pub metallic: f32,
    pub roughness: f32,
    pub emissive: [f32; 3],

    material_ubo: Option<MaterialUBO>,
    material_bindings: Option<MaterialBindings>,
}

impl Default for Material {
    fn default() -> Self {
        Self {
            name: "Default".to_string(),
            base_color: [0.8, 0.8, 0.8, 1.0],
            metallic: 0.0,
            roughness: 0.5,
            emissive: [0.0, 0.0, 0.0],
            material_ubo: None,
            material_bindings: None,
        }
    }
}

impl Material {
    pub fn new(name: &str, base_color: [f32; 4], metallic: f32, roughness: f32) -> Self {
        Self {
            name: name.to_string(),
            base_color,
            metallic: metallic.clamp(0.0, 1.0),
            roughness: roughness.clamp(0.0, 1.0),
            emissive: [0.0, 0.0, 0.0],
            material_ubo: None,
            material_bindings: None,
        }
    }

    pub fn with_emission(&mut self, r: f32, g: f32, b: f32) -> &mut Self {
        self.emissive = [r, g, b];
        self
    }

    /// Creates the uniform buffer and bind group on first call, then
    /// writes the current parameters (skipped when unchanged).
    pub fn update_gpu_resources(&mut self, device: &Device, queue: &wgpu::Queue) {
        if self.material_ubo.is_none() {
            self.material_ubo = Some(MaterialUBO::new(device));
        }

        if self.material_bindings.is_none() {
            let mut bindings = MaterialBindings::new(device);
            bindings.create_bind_group(device, self.material_ubo.as_ref().unwrap());
            self.material_bindings = Some(bindings);
        }

        let uniform_data = MaterialUniform {
            base_color: self.base_color,
            metallic: self.metallic,
            roughness: self.roughness,
            _pad0: [0.0; 2],
            emissive: self.emissive,
            _pad1: 0.0,
        };

        if let Some(ubo) = &mut self.material_ubo {
            ubo.update_content(queue, uniform_data);
        }
    }

    pub fn bind_group(&self) -> Option<&wgpu::BindGroup> {
        self.material_bindings
            .as_ref()
            .and_then(|bindings| bindings.bind_group())
    }
}

/// Central material storage, keyed by material name.
pub struct MaterialManager {
    materials: HashMap<String, Material>,
    default_material_id: String,
}

impl MaterialManager {
    pub fn new() -> Self {
        let mut manager = Self {
            materials: HashMap::new(),
            default_material_id: "default".to_string(),
        };

        manager
            .materials
            .insert("default".to_string(), Material::default());

        manager
    }

    pub fn add_material(&mut self, material: Material) {
        self.materials.insert(material.name.clone(), material);
    }

    pub fn get_material(&self, id: &str) -> Option<&Material> {
        self.materials.get(id)
    }

    pub fn get_material_mut(&mut self, id: &str) -> Option<&mut Material> {
        self.materials.get_mut(id)
    }

    pub fn get_default_material(&self) -> &Material {
        &self.materials[&self.default_material_id]
    }

    /// Resolves the material for an object, falling back to the default
    /// when nothing is assigned or the id is unknown.
    pub fn get_material_for_object(&self, material_id: Option<&str>) -> &Material {
        material_id
            .and_then(|id| self.get_material(id))
            .unwrap_or_else(|| self.get_default_material())
    }

    pub fn update_all_gpu_resources(&mut self, device: &Device, queue: &wgpu::Queue) {
        for material in self.materials.values_mut() {
            material.update_gpu_resources(device, queue);
        }
    }
}

impl Default for MaterialManager {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parameters_are_clamped() {
        let material = Material::new("test", [1.0, 0.0, 0.0, 1.0], 1.5, -0.5);
        assert_eq!(material.metallic, 1.0);
        assert_eq!(material.roughness, 0.0);
    }

    #[test]
    fn missing_id_resolves_to_default() {
        let manager = MaterialManager::new();
        assert_eq!(manager.get_material_for_object(Some("nope")).name, "Default");
        assert_eq!(manager.get_material_for_object(None).name, "Default");
    }
}
