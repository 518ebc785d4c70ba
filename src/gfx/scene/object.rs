use std::ops::Range;

use cgmath::{Deg, Matrix4, Vector3};
use wgpu::util::DeviceExt;

use crate::gfx::geometry::GeometryData;

use super::vertex::Vertex3D;

/// Geometry for one draw call. Buffers are created lazily the first time
/// the owning object is synced to the GPU.
pub struct Mesh {
    vertices: Vec<Vertex3D>,
    indices: Vec<u32>,
    vertex_buffer: Option<wgpu::Buffer>,
    index_buffer: Option<wgpu::Buffer>,
    index_count: u32,
}

impl Mesh {
    pub fn from_geometry(geometry: &GeometryData) -> Self {
        let vertices = geometry
            .positions
            .iter()
            .zip(geometry.normals.iter())
            .map(|(position, normal)| Vertex3D {
                position: *position,
                normal: *normal,
            })
            .collect();

        Self {
            vertices,
            indices: geometry.indices.clone(),
            vertex_buffer: None,
            index_buffer: None,
            index_count: geometry.indices.len() as u32,
        }
    }

    fn upload(&mut self, device: &wgpu::Device) {
        if self.vertex_buffer.is_some() {
            return;
        }

        self.vertex_buffer = Some(device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Vertex Buffer"),
            contents: bytemuck::cast_slice(&self.vertices),
            usage: wgpu::BufferUsages::VERTEX,
        }));
        self.index_buffer = Some(device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Index Buffer"),
            contents: bytemuck::cast_slice(&self.indices),
            usage: wgpu::BufferUsages::INDEX,
        }));
    }
}

/// Per-object GPU state: the transform uniform and its bind group.
pub struct ObjectGpuResources {
    pub transform_buffer: wgpu::Buffer,
    pub transform_bind_group: wgpu::BindGroup,
}

/// A named, transformable thing in the scene.
pub struct Object {
    pub name: String,
    pub meshes: Vec<Mesh>,
    pub position: Vector3<f32>,
    /// Euler rotation in degrees, applied Z then Y then X.
    pub rotation: Vector3<f32>,
    pub scale: Vector3<f32>,
    pub material_id: Option<String>,
    pub visible: bool,
    pub(crate) gpu_resources: Option<ObjectGpuResources>,
}

impl Object {
    pub fn new(name: impl Into<String>, meshes: Vec<Mesh>) -> Self {
        Self {
            name: name.into(),
            meshes,
            position: Vector3::new(0.0, 0.0, 0.0),
            rotation: Vector3::new(0.0, 0.0, 0.0),
            scale: Vector3::new(1.0, 1.0, 1.0),
            material_id: None,
            visible: true,
            gpu_resources: None,
        }
    }

    pub fn with_material(&mut self, material_id: &str) -> &mut Self {
        self.material_id = Some(material_id.to_string());
        self
    }

    pub fn with_position(&mut self, x: f32, y: f32, z: f32) -> &mut Self {
        self.position = Vector3::new(x, y, z);
        self
    }

    pub fn with_scale(&mut self, scale: f32) -> &mut Self {
        self.scale = Vector3::new(scale, scale, scale);
        self
    }

    pub fn with_scale_xyz(&mut self, x: f32, y: f32, z: f32) -> &mut Self {
        self.scale = Vector3::new(x, y, z);
        self
    }

    pub fn with_rotation(&mut self, x_deg: f32, y_deg: f32, z_deg: f32) -> &mut Self {
        self.rotation = Vector3::new(x_deg, y_deg, z_deg);
        self
    }

    /// Model matrix from the current TRS state.
    pub fn transform_matrix(&self) -> Matrix4<f32> {
        let translation = Matrix4::from_translation(self.position);
        let rotation = Matrix4::from_angle_z(Deg(self.rotation.z))
            * Matrix4::from_angle_y(Deg(self.rotation.y))
            * Matrix4::from_angle_x(Deg(self.rotation.x));
        let scale = Matrix4::from_nonuniform_scale(self.scale.x, self.scale.y, self.scale.z);
        translation * rotation * scale
    }

    /// Uploads mesh buffers and the transform uniform on first use, then
    /// writes the current transform. Called once per frame by the scene.
    pub(crate) fn sync_gpu(&mut self, device: &wgpu::Device, queue: &wgpu::Queue) {
        for mesh in &mut self.meshes {
            mesh.upload(device);
        }

        let transform = self.transform_matrix();
        let transform_data: &[f32; 16] = transform.as_ref();

        match &self.gpu_resources {
            Some(gpu) => {
                queue.write_buffer(&gpu.transform_buffer, 0, bytemuck::cast_slice(transform_data));
            }
            None => {
                let transform_buffer =
                    device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
                        label: Some("Transform Uniform Buffer"),
                        contents: bytemuck::cast_slice(transform_data),
                        usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
                    });

                let layout = Object::transform_bind_group_layout(device);
                let transform_bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
                    label: Some("Transform Bind Group"),
                    layout: &layout,
                    entries: &[wgpu::BindGroupEntry {
                        binding: 0,
                        resource: transform_buffer.as_entire_binding(),
                    }],
                });

                self.gpu_resources = Some(ObjectGpuResources {
                    transform_buffer,
                    transform_bind_group,
                });
            }
        }
    }

    /// Layout for binding slot 1 in the forward pipeline. Every object
    /// uses an identical layout, so pipelines can create their own copy.
    pub fn transform_bind_group_layout(device: &wgpu::Device) -> wgpu::BindGroupLayout {
        device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("Transform Bind Group Layout"),
            entries: &[wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::VERTEX,
                ty: wgpu::BindingType::Buffer {
                    ty: wgpu::BufferBindingType::Uniform,
                    has_dynamic_offset: false,
                    min_binding_size: None,
                },
                count: None,
            }],
        })
    }
}

/// Render pass extension for drawing scene objects.
pub trait DrawObject<'a> {
    fn draw_mesh(&mut self, mesh: &'a Mesh);
    fn draw_mesh_instanced(&mut self, mesh: &'a Mesh, instances: Range<u32>);
    /// Binds the object's transform at group 1 and draws all its meshes.
    fn draw_object(&mut self, object: &'a Object);
}

impl<'a, 'b> DrawObject<'b> for wgpu::RenderPass<'a>
where
    'b: 'a,
{
    fn draw_mesh(&mut self, mesh: &'b Mesh) {
        self.draw_mesh_instanced(mesh, 0..1);
    }

    fn draw_mesh_instanced(&mut self, mesh: &'b Mesh, instances: Range<u32>) {
        let (Some(vertex_buffer), Some(index_buffer)) = (&mesh.vertex_buffer, &mesh.index_buffer)
        else {
            return; // not uploaded yet
        };

        self.set_vertex_buffer(0, vertex_buffer.slice(..));
        self.set_index_buffer(index_buffer.slice(..), wgpu::IndexFormat::Uint32);
        self.draw_indexed(0..mesh.index_count, 0, instances);
    }

    fn draw_object(&mut self, object: &'b Object) {
        let Some(gpu) = &object.gpu_resources else {
            return;
        };
        self.set_bind_group(1, &gpu.transform_bind_group, &[]);
        for mesh in &object.meshes {
            self.draw_mesh(mesh);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gfx::geometry::generate_cube;
    use cgmath::Vector4;

    #[test]
    fn transform_applies_scale_then_translation() {
        let mut object = Object::new("cube", vec![Mesh::from_geometry(&generate_cube())]);
        object.with_position(1.0, 2.0, 3.0).with_scale(2.0);

        let transformed = object.transform_matrix() * Vector4::new(0.5, 0.0, 0.0, 1.0);
        assert!((transformed.x - 2.0).abs() < 1e-5);
        assert!((transformed.y - 2.0).abs() < 1e-5);
        assert!((transformed.z - 3.0).abs() < 1e-5);
    }

    #[test]
    fn mesh_counts_match_geometry() {
        let cube = generate_cube();
        let mesh = Mesh::from_geometry(&cube);
        assert_eq!(mesh.vertices.len(), cube.positions.len());
        assert_eq!(mesh.index_count as usize, cube.indices.len());
    }
}
