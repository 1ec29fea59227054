use std::path::Path;

use cgmath::{Quaternion, Vector3};
use log::{debug, warn};

use super::vertex::Vertex3D;
use crate::error::{PlacerError, Result};
use crate::gfx::geometry::GeometryData;
use crate::gfx::picking::{Pose, AABB};

#[derive(Debug, Clone)]
pub struct Mesh {
    vertices: Vec<Vertex3D>,
    indices: Vec<u32>,
}

impl Mesh {
    pub fn new(positions: Vec<f32>, normals: Vec<f32>, indices: Vec<u32>) -> Self {
        let vertices = positions
            .chunks_exact(3)
            .zip(normals.chunks_exact(3))
            .map(|(p, n)| Vertex3D {
                position: [p[0], p[1], p[2]],
                normal: [n[0], n[1], n[2]],
            })
            .collect();

        Self { vertices, indices }
    }

    pub fn from_geometry(geometry: &GeometryData) -> Self {
        let vertices = geometry
            .vertices
            .iter()
            .enumerate()
            .map(|(i, position)| Vertex3D {
                position: *position,
                normal: geometry.normals.get(i).copied().unwrap_or([0.0, 1.0, 0.0]),
            })
            .collect();

        Self {
            vertices,
            indices: geometry.indices.clone(),
        }
    }

    pub fn vertices(&self) -> &[Vertex3D] {
        &self.vertices
    }

    pub fn indices(&self) -> &[u32] {
        &self.indices
    }

    // Helper function to calculate face normals if OBJ doesn't have them
    pub fn calculate_face_normals(positions: &[f32], indices: &[u32]) -> Vec<f32> {
        let vertex_count = positions.len() / 3;
        let mut normals = vec![0.0; positions.len()];
        let mut counts = vec![0u32; vertex_count];

        let position = |i: usize| -> [f32; 3] {
            [positions[i * 3], positions[i * 3 + 1], positions[i * 3 + 2]]
        };

        // For each triangle, calculate face normal and add to vertices
        for triangle in indices.chunks_exact(3) {
            let (i0, i1, i2) = (
                triangle[0] as usize,
                triangle[1] as usize,
                triangle[2] as usize,
            );
            if i0 >= vertex_count || i1 >= vertex_count || i2 >= vertex_count {
                continue;
            }

            let (v0, v1, v2) = (position(i0), position(i1), position(i2));

            let edge1 = [v1[0] - v0[0], v1[1] - v0[1], v1[2] - v0[2]];
            let edge2 = [v2[0] - v0[0], v2[1] - v0[1], v2[2] - v0[2]];

            let face_normal = [
                edge1[1] * edge2[2] - edge1[2] * edge2[1],
                edge1[2] * edge2[0] - edge1[0] * edge2[2],
                edge1[0] * edge2[1] - edge1[1] * edge2[0],
            ];

            for &vertex_idx in &[i0, i1, i2] {
                normals[vertex_idx * 3] += face_normal[0];
                normals[vertex_idx * 3 + 1] += face_normal[1];
                normals[vertex_idx * 3 + 2] += face_normal[2];
                counts[vertex_idx] += 1;
            }
        }

        // Average and normalize the normals
        for i in 0..vertex_count {
            if counts[i] == 0 {
                continue;
            }
            let normal = &mut normals[i * 3..i * 3 + 3];
            let length = (normal[0].powi(2) + normal[1].powi(2) + normal[2].powi(2)).sqrt();
            if length > 0.0 {
                normal.iter_mut().for_each(|component| *component /= length);
            }
        }

        normals
    }
}

/// Template that placed objects are instantiated from
#[derive(Debug, Clone)]
pub struct Prototype {
    name: String,
    meshes: Vec<Mesh>,
    bounds: AABB,
}

impl Prototype {
    pub fn new(name: impl Into<String>, meshes: Vec<Mesh>) -> Self {
        let positions: Vec<[f32; 3]> = meshes
            .iter()
            .flat_map(|mesh| mesh.vertices().iter().map(|vertex| vertex.position))
            .collect();

        let bounds = if positions.is_empty() {
            // Fallback to unit cube if no vertices
            AABB::new(Vector3::new(-0.5, -0.5, -0.5), Vector3::new(0.5, 0.5, 0.5))
        } else {
            AABB::from_vertices(&positions)
        };

        Self {
            name: name.into(),
            meshes,
            bounds,
        }
    }

    pub fn from_geometry(name: impl Into<String>, geometry: &GeometryData) -> Self {
        Self::new(name, vec![Mesh::from_geometry(geometry)])
    }

    /// Loads a prototype from an OBJ file
    ///
    /// Normals missing from the file are rebuilt from the triangle faces.
    pub fn load_obj(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let (models, _materials) = tobj::load_obj(
            path,
            &tobj::LoadOptions {
                triangulate: true,
                single_index: true,
                ..Default::default()
            },
        )
        .map_err(|source| PlacerError::ModelLoad {
            path: path.to_path_buf(),
            source,
        })?;

        let meshes: Vec<Mesh> = models
            .iter()
            .filter(|model| !model.mesh.positions.is_empty())
            .map(|model| {
                let mesh = &model.mesh;
                // Use normals from OBJ if available, otherwise calculate them
                let normals = if mesh.normals.len() == mesh.positions.len() {
                    mesh.normals.clone()
                } else {
                    warn!("{} has no usable normals for '{}', computing face normals", path.display(), model.name);
                    Mesh::calculate_face_normals(&mesh.positions, &mesh.indices)
                };
                Mesh::new(mesh.positions.clone(), normals, mesh.indices.clone())
            })
            .collect();

        if meshes.is_empty() {
            return Err(PlacerError::EmptyModel(path.to_path_buf()));
        }

        let name = models
            .iter()
            .map(|model| model.name.as_str())
            .find(|name| !name.is_empty())
            .map(str::to_owned)
            .or_else(|| path.file_stem().map(|stem| stem.to_string_lossy().into_owned()))
            .unwrap_or_else(|| "model".to_string());

        debug!("loaded prototype '{}' with {} meshes from {}", name, meshes.len(), path.display());
        Ok(Self::new(name, meshes))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn meshes(&self) -> &[Mesh] {
        &self.meshes
    }

    /// Bounds in the prototype's local space
    pub fn bounds(&self) -> AABB {
        self.bounds
    }
}

/// Handle to an object in a [`Scene`](super::Scene)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ObjectId(pub(crate) usize);

#[derive(Debug)]
pub struct Object {
    id: ObjectId,
    name: String,
    prototype: String,
    meshes: Vec<Mesh>,
    local_bounds: AABB,
    pub position: Vector3<f32>,
    pub rotation: Quaternion<f32>,
    pub scale: f32,
    pub active: bool,
}

impl Object {
    pub(crate) fn from_prototype(id: ObjectId, prototype: &Prototype, pose: Pose) -> Self {
        Self {
            id,
            name: prototype.name().to_string(),
            prototype: prototype.name().to_string(),
            meshes: prototype.meshes().to_vec(),
            local_bounds: prototype.bounds(),
            position: pose.position,
            rotation: pose.rotation,
            scale: 1.0,
            active: true,
        }
    }

    pub fn id(&self) -> ObjectId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Name of the prototype this object was instantiated from
    pub fn prototype(&self) -> &str {
        &self.prototype
    }

    pub fn meshes(&self) -> &[Mesh] {
        &self.meshes
    }

    pub fn pose(&self) -> Pose {
        Pose::new(self.position, self.rotation)
    }

    pub fn local_bounds(&self) -> AABB {
        self.local_bounds
    }
}
