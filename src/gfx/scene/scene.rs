use crate::gfx::{
    camera::camera_utils::CameraManager,
    geometry::{self, GeometryData},
    resources::material::{Material, MaterialManager},
};

use super::object::{Mesh, Object};

/// Scene contents: camera, objects, and the material library.
pub struct Scene {
    pub camera_manager: CameraManager,
    pub objects: Vec<Object>,
    pub material_manager: MaterialManager,
}

impl Scene {
    pub fn new(camera_manager: CameraManager) -> Self {
        Self {
            camera_manager,
            objects: Vec::new(),
            material_manager: MaterialManager::new(),
        }
    }

    /// Updates per-frame scene state (camera matrices).
    pub fn update(&mut self) {
        self.camera_manager.camera.update_view_proj();
    }

    /// Adds an object built from generated geometry and returns it for
    /// builder-style configuration.
    pub fn add_geometry(&mut self, name: &str, geometry: GeometryData) -> &mut Object {
        let name = self.ensure_unique_name(name);
        let object = Object::new(name, vec![Mesh::from_geometry(&geometry)]);
        self.objects.push(object);
        self.objects.last_mut().unwrap()
    }

    pub fn add_cube(&mut self, name: &str) -> &mut Object {
        self.add_geometry(name, geometry::generate_cube())
    }

    pub fn add_plane(&mut self, name: &str, width: f32, depth: f32) -> &mut Object {
        self.add_geometry(name, geometry::generate_plane(width, depth, 1, 1))
    }

    pub fn add_sphere(&mut self, name: &str) -> &mut Object {
        self.add_geometry(name, geometry::generate_sphere(32, 16))
    }

    pub fn add_torus(
        &mut self,
        name: &str,
        ring_radius: f32,
        tube_radius: f32,
        ring_segments: u32,
        tube_segments: u32,
    ) -> &mut Object {
        self.add_geometry(
            name,
            geometry::generate_torus(ring_radius, tube_radius, ring_segments, tube_segments),
        )
    }

    /// Drops every object the predicate rejects. GPU buffers go with them.
    pub fn retain_objects<F>(&mut self, keep: F)
    where
        F: FnMut(&Object) -> bool,
    {
        self.objects.retain(keep);
    }

    pub fn object_mut(&mut self, name: &str) -> Option<&mut Object> {
        self.objects.iter_mut().find(|object| object.name == name)
    }

    pub fn object_count(&self) -> usize {
        self.objects.len()
    }

    /// Creates a material and adds it to the library.
    pub fn add_material(
        &mut self,
        name: &str,
        base_color: [f32; 4],
        metallic: f32,
        roughness: f32,
    ) -> &mut Material {
        let material = Material::new(name, base_color, metallic, roughness);
        self.material_manager.add_material(material);
        self.material_manager.get_material_mut(name).unwrap()
    }

    /// Convenience wrapper taking RGB components with full alpha.
    pub fn add_material_rgb(
        &mut self,
        name: &str,
        r: f32,
        g: f32,
        b: f32,
        metallic: f32,
        roughness: f32,
    ) -> &mut Material {
        self.add_material(name, [r, g, b, 1.0], metallic, roughness)
    }

    /// Material for rendering `object`, falling back to the default when
    /// none is assigned or the assigned id does not exist.
    pub fn material_for_object(&self, object: &Object) -> &Material {
        self.material_manager
            .get_material_for_object(object.material_id.as_deref())
    }

    /// Brings all GPU-side state in line with the CPU-side scene: lazily
    /// uploads new objects, rewrites transforms, and refreshes material
    /// uniforms. Objects created inside UI handlers this frame get their
    /// buffers here, before the render pass runs.
    pub fn sync_gpu(&mut self, device: &wgpu::Device, queue: &wgpu::Queue) {
        for object in &mut self.objects {
            object.sync_gpu(device, queue);
        }
        self.material_manager.update_all_gpu_resources(device, queue);
    }

    fn ensure_unique_name(&self, desired_name: &str) -> String {
        let mut counter = 0;
        let mut test_name = desired_name.to_string();

        while self.objects.iter().any(|object| object.name == test_name) {
            counter += 1;
            test_name = format!("{} ({})", desired_name, counter);
        }

        test_name
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gfx::camera::{CameraController, CameraManager, OrbitCamera};
    use cgmath::Vector3;

    fn test_scene() -> Scene {
        let camera = OrbitCamera::new(5.0, 0.3, 0.1, Vector3::new(0.0, 0.0, 0.0), 1.0);
        let controller = CameraController::new(0.005, 0.1);
        Scene::new(CameraManager::new(camera, controller))
    }

    #[test]
    fn names_are_made_unique() {
        let mut scene = test_scene();
        scene.add_cube("box");
        scene.add_cube("box");
        let names: Vec<_> = scene.objects.iter().map(|o| o.name.clone()).collect();
        assert_eq!(names, vec!["box", "box (1)"]);
    }

    #[test]
    fn retain_removes_matching_objects() {
        let mut scene = test_scene();
        scene.add_cube("box-0");
        scene.add_cube("box-1");
        scene.add_cube("pedestal");
        scene.retain_objects(|object| !object.name.starts_with("box-"));
        assert_eq!(scene.object_count(), 1);
        assert!(scene.object_mut("pedestal").is_some());
    }

    #[test]
    fn unknown_material_falls_back_to_default() {
        let mut scene = test_scene();
        scene.add_cube("box").with_material("missing");
        let object = &scene.objects[0];
        assert_eq!(scene.material_for_object(object).name, "Default");
    }
}
