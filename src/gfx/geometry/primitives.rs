//! # Primitive Shape Generation
//!
//! Unit-sized cube, sphere and floor plane meshes with outward normals, in the
//! Y-up world used by placement.

use super::GeometryData;
use std::f32::consts::PI;

/// Outward normal, then two in-face axes whose cross product is the normal
const CUBE_FACES: [([f32; 3], [f32; 3], [f32; 3]); 6] = [
    ([0.0, 0.0, 1.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]),
    ([0.0, 0.0, -1.0], [-1.0, 0.0, 0.0], [0.0, 1.0, 0.0]),
    ([1.0, 0.0, 0.0], [0.0, 0.0, -1.0], [0.0, 1.0, 0.0]),
    ([-1.0, 0.0, 0.0], [0.0, 0.0, 1.0], [0.0, 1.0, 0.0]),
    ([0.0, 1.0, 0.0], [1.0, 0.0, 0.0], [0.0, 0.0, -1.0]),
    ([0.0, -1.0, 0.0], [1.0, 0.0, 0.0], [0.0, 0.0, 1.0]),
];

/// Generate a unit cube centered at the origin
///
/// Vertices span -0.5 to 0.5 on every axis. Each face has its own four
/// vertices so normals stay flat.
pub fn generate_cube() -> GeometryData {
    let mut data = GeometryData::new();

    for (normal, u, v) in CUBE_FACES {
        let base = data.vertices.len() as u32;

        for (su, sv) in [(-0.5, -0.5), (0.5, -0.5), (0.5, 0.5), (-0.5, 0.5)] {
            let corner = [0, 1, 2].map(|axis| normal[axis] * 0.5 + u[axis] * su + v[axis] * sv);
            data.vertices.push(corner);
            data.normals.push(normal);
        }

        data.indices.extend_from_slice(&[base, base + 1, base + 2, base + 2, base + 3, base]);
    }

    data
}

/// Generate a UV sphere of radius 1.0 centered at the origin, poles on the Y axis
///
/// # Arguments
/// * `longitude_segments` - Number of vertical segments (at least 3)
/// * `latitude_segments` - Number of horizontal rings (at least 2)
pub fn generate_sphere(longitude_segments: u32, latitude_segments: u32) -> GeometryData {
    let mut data = GeometryData::new();

    let long_segs = longitude_segments.max(3);
    let lat_segs = latitude_segments.max(2);

    for lat in 0..=lat_segs {
        let theta = lat as f32 * PI / lat_segs as f32;

        for long in 0..=long_segs {
            let phi = long as f32 * 2.0 * PI / long_segs as f32;
            let point = [
                theta.sin() * phi.cos(),
                theta.cos(),
                theta.sin() * phi.sin(),
            ];

            // On a unit sphere the normal is the position
            data.vertices.push(point);
            data.normals.push(point);
        }
    }

    let row = long_segs + 1;
    for lat in 0..lat_segs {
        for long in 0..long_segs {
            let first = lat * row + long;
            let second = first + row;

            data.indices.extend_from_slice(&[
                first,
                second,
                first + 1,
                second,
                second + 1,
                first + 1,
            ]);
        }
    }

    data
}

/// Generate a plane in the XZ plane (horizontal in the Y-up world)
///
/// # Arguments
/// * `width` - Width of the plane (X direction)
/// * `depth` - Depth of the plane (Z direction)
/// * `width_segments` - Number of subdivisions along width
/// * `depth_segments` - Number of subdivisions along depth
///
/// Returns a plane centered at the origin with normal pointing up (positive Y).
pub fn generate_plane(
    width: f32,
    depth: f32,
    width_segments: u32,
    depth_segments: u32,
) -> GeometryData {
    let mut data = GeometryData::new();

    let w_segs = width_segments.max(1);
    let d_segs = depth_segments.max(1);

    for z in 0..=d_segs {
        let pos_z = (z as f32 / d_segs as f32 - 0.5) * depth;

        for x in 0..=w_segs {
            let pos_x = (x as f32 / w_segs as f32 - 0.5) * width;

            data.vertices.push([pos_x, 0.0, pos_z]);
            data.normals.push([0.0, 1.0, 0.0]);
        }
    }

    // Counter-clockwise when viewed from above
    for z in 0..d_segs {
        for x in 0..w_segs {
            let i = z * (w_segs + 1) + x;
            let next_row = i + w_segs + 1;

            data.indices.extend_from_slice(&[i, next_row, i + 1, next_row, next_row + 1, i + 1]);
        }
    }

    data
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dot(a: [f32; 3], b: [f32; 3]) -> f32 {
        a[0] * b[0] + a[1] * b[1] + a[2] * b[2]
    }

    fn cross(a: [f32; 3], b: [f32; 3]) -> [f32; 3] {
        [
            a[1] * b[2] - a[2] * b[1],
            a[2] * b[0] - a[0] * b[2],
            a[0] * b[1] - a[1] * b[0],
        ]
    }

    #[test]
    fn test_cube_generation() {
        let cube = generate_cube();
        assert_eq!(cube.vertices.len(), 24); // 6 faces * 4 vertices
        assert_eq!(cube.indices.len(), 36); // 6 faces * 2 triangles * 3 indices
        assert_eq!(cube.normals.len(), cube.vertices.len());
    }

    #[test]
    fn test_cube_faces_wind_outward() {
        let cube = generate_cube();

        for (vertex, normal) in cube.vertices.iter().zip(&cube.normals) {
            assert!((dot(*vertex, *normal) - 0.5).abs() < 1e-6);
        }

        for triangle in cube.indices.chunks_exact(3) {
            let [a, b, c] = [0, 1, 2].map(|i| cube.vertices[triangle[i] as usize]);
            let edge1 = [b[0] - a[0], b[1] - a[1], b[2] - a[2]];
            let edge2 = [c[0] - a[0], c[1] - a[1], c[2] - a[2]];
            let face_normal = cross(edge1, edge2);

            assert!(dot(face_normal, cube.normals[triangle[0] as usize]) > 0.0);
        }
    }

    #[test]
    fn test_sphere_generation() {
        let sphere = generate_sphere(8, 6);
        assert_eq!(sphere.vertices.len(), 9 * 7);
        assert_eq!(sphere.indices.len(), 8 * 6 * 6);
        assert!(sphere
            .vertices
            .iter()
            .all(|v| (dot(*v, *v).sqrt() - 1.0).abs() < 1e-5));
    }

    #[test]
    fn test_plane_generation() {
        let plane = generate_plane(2.0, 2.0, 2, 2);
        assert_eq!(plane.vertices.len(), 9); // 3x3 grid
        assert_eq!(plane.indices.len(), 24); // 4 quads * 2 triangles * 3 indices
        assert!(plane.vertices.iter().all(|v| v[1] == 0.0));
    }

    #[test]
    fn test_scaled_cube_bounds() {
        let cube = generate_cube().scaled(0.2);
        let max_x = cube.vertices.iter().map(|v| v[0]).fold(f32::MIN, f32::max);
        assert!((max_x - 0.1).abs() < 1e-6);

        let stretched = generate_cube().scaled_xyz([2.0, 1.0, 4.0]);
        let max_z = stretched.vertices.iter().map(|v| v[2]).fold(f32::MIN, f32::max);
        assert!((max_z - 2.0).abs() < 1e-6);
    }
}
