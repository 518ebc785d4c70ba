//! Primitive shape generators.

use std::f32::consts::PI;

use super::GeometryData;

/// Generates a unit cube centered at the origin.
///
/// Vertices run from -0.5 to 0.5 on all axes; each face carries its own
/// four vertices so the normals stay flat.
pub fn generate_cube() -> GeometryData {
    let mut data = GeometryData::new();

    // (normal, u axis, v axis) per face
    let faces: [([f32; 3], [f32; 3], [f32; 3]); 6] = [
        ([0.0, 0.0, 1.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]), // top
        ([0.0, 0.0, -1.0], [0.0, 1.0, 0.0], [1.0, 0.0, 0.0]), // bottom
        ([1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]), // +x
        ([-1.0, 0.0, 0.0], [0.0, 0.0, 1.0], [0.0, 1.0, 0.0]), // -x
        ([0.0, 1.0, 0.0], [0.0, 0.0, 1.0], [1.0, 0.0, 0.0]), // +y
        ([0.0, -1.0, 0.0], [1.0, 0.0, 0.0], [0.0, 0.0, 1.0]), // -y
    ];

    for (normal, u_axis, v_axis) in faces {
        let base = data.positions.len() as u32;
        for (u, v) in [(-0.5, -0.5), (0.5, -0.5), (0.5, 0.5), (-0.5, 0.5)] {
            let position = [
                normal[0] * 0.5 + u_axis[0] * u + v_axis[0] * v,
                normal[1] * 0.5 + u_axis[1] * u + v_axis[1] * v,
                normal[2] * 0.5 + u_axis[2] * u + v_axis[2] * v,
            ];
            data.positions.push(position);
            data.normals.push(normal);
        }
        data.indices
            .extend_from_slice(&[base, base + 1, base + 2, base + 2, base + 3, base]);
    }

    data
}

/// Generates a flat plane in the XY plane, facing +Z.
///
/// # Arguments
/// * `width` / `depth` - extents along X and Y
/// * `subdivisions_x` / `subdivisions_y` - quad count per axis (min 1)
pub fn generate_plane(
    width: f32,
    depth: f32,
    subdivisions_x: u32,
    subdivisions_y: u32,
) -> GeometryData {
    let mut data = GeometryData::new();

    let subs_x = subdivisions_x.max(1);
    let subs_y = subdivisions_y.max(1);

    for y in 0..=subs_y {
        for x in 0..=subs_x {
            let fx = (x as f32 / subs_x as f32 - 0.5) * width;
            let fy = (y as f32 / subs_y as f32 - 0.5) * depth;
            data.positions.push([fx, fy, 0.0]);
            data.normals.push([0.0, 0.0, 1.0]);
        }
    }

    let stride = subs_x + 1;
    for y in 0..subs_y {
        for x in 0..subs_x {
            let i = y * stride + x;
            data.indices
                .extend_from_slice(&[i, i + 1, i + stride + 1, i + stride + 1, i + stride, i]);
        }
    }

    data
}

/// Generates a unit UV sphere centered at the origin.
///
/// # Arguments
/// * `longitude_segments` - segments around the Z axis (min 3)
/// * `latitude_segments` - segments from pole to pole (min 2)
pub fn generate_sphere(longitude_segments: u32, latitude_segments: u32) -> GeometryData {
    let mut data = GeometryData::new();

    let long_segs = longitude_segments.max(3);
    let lat_segs = latitude_segments.max(2);

    for lat in 0..=lat_segs {
        let theta = lat as f32 * PI / lat_segs as f32;
        let (sin_theta, cos_theta) = theta.sin_cos();

        for long in 0..=long_segs {
            let phi = long as f32 * 2.0 * PI / long_segs as f32;
            let (sin_phi, cos_phi) = phi.sin_cos();

            // Unit sphere: the position doubles as the normal.
            let point = [sin_theta * cos_phi, sin_theta * sin_phi, cos_theta];
            data.positions.push(point);
            data.normals.push(point);
        }
    }

    let stride = long_segs + 1;
    for lat in 0..lat_segs {
        for long in 0..long_segs {
            let current = lat * stride + long;
            let below = current + stride;
            data.indices
                .extend_from_slice(&[current, below, current + 1, current + 1, below, below + 1]);
        }
    }

    data
}

/// Generates a torus lying in the XY plane around the Z axis.
///
/// # Arguments
/// * `ring_radius` - distance from the torus center to the tube center
/// * `tube_radius` - radius of the tube itself
/// * `ring_segments` / `tube_segments` - resolution around the two circles
pub fn generate_torus(
    ring_radius: f32,
    tube_radius: f32,
    ring_segments: u32,
    tube_segments: u32,
) -> GeometryData {
    let mut data = GeometryData::new();

    let ring_segs = ring_segments.max(3);
    let tube_segs = tube_segments.max(3);

    for ring in 0..=ring_segs {
        let theta = ring as f32 * 2.0 * PI / ring_segs as f32;
        let (sin_theta, cos_theta) = theta.sin_cos();

        for tube in 0..=tube_segs {
            let phi = tube as f32 * 2.0 * PI / tube_segs as f32;
            let (sin_phi, cos_phi) = phi.sin_cos();

            let radial = ring_radius + tube_radius * cos_phi;
            data.positions
                .push([radial * cos_theta, radial * sin_theta, tube_radius * sin_phi]);
            data.normals
                .push([cos_phi * cos_theta, cos_phi * sin_theta, sin_phi]);
        }
    }

    let stride = tube_segs + 1;
    for ring in 0..ring_segs {
        for tube in 0..tube_segs {
            let current = ring * stride + tube;
            let next_ring = current + stride;
            data.indices.extend_from_slice(&[
                current,
                next_ring,
                current + 1,
                current + 1,
                next_ring,
                next_ring + 1,
            ]);
        }
    }

    data
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cube_generation() {
        let cube = generate_cube();
        assert_eq!(cube.positions.len(), 24); // 6 faces * 4 vertices
        assert_eq!(cube.indices.len(), 36); // 6 faces * 2 triangles * 3 indices
        assert_eq!(cube.triangle_count(), 12);
    }

    #[test]
    fn test_cube_normals_are_unit_length() {
        let cube = generate_cube();
        assert_eq!(cube.positions.len(), cube.normals.len());
        for normal in &cube.normals {
            let len_sq = normal[0] * normal[0] + normal[1] * normal[1] + normal[2] * normal[2];
            assert!((len_sq - 1.0).abs() < 1e-5);
        }
    }

    #[test]
    fn test_plane_generation() {
        let plane = generate_plane(2.0, 2.0, 2, 2);
        assert_eq!(plane.positions.len(), 9); // 3x3 grid
        assert_eq!(plane.indices.len(), 24); // 4 quads * 2 triangles * 3 indices
    }

    #[test]
    fn test_sphere_generation() {
        let sphere = generate_sphere(8, 6);
        assert_eq!(sphere.positions.len(), (8 + 1) * (6 + 1));
        assert!(!sphere.indices.is_empty());
        assert_eq!(sphere.positions.len(), sphere.normals.len());
        for index in &sphere.indices {
            assert!((*index as usize) < sphere.positions.len());
        }
    }

    #[test]
    fn test_torus_generation() {
        let torus = generate_torus(1.0, 0.5, 16, 8);
        assert_eq!(torus.positions.len(), (16 + 1) * (8 + 1));
        assert_eq!(torus.indices.len() as u32, 16 * 8 * 6);
        assert_eq!(torus.positions.len(), torus.normals.len());
        for index in &torus.indices {
            assert!((*index as usize) < torus.positions.len());
        }
    }
}
