//! # Vertex Data Structures
//!
//! Vertex format shared by prototype meshes, whether they come from
//! procedural geometry or from an OBJ file.

/// A 3D vertex with position and normal data.
///
/// # Fields
///
/// - `position`: 3D position coordinates [x, y, z]
/// - `normal`: 3D normal vector [nx, ny, nz]
///
/// # Examples
///
/// ```
/// use arplace::gfx::scene::vertex::Vertex3D;
///
/// let vertex = Vertex3D {
///     position: [0.0, 1.0, 0.0],
///     normal: [0.0, 1.0, 0.0],
/// };
/// assert_eq!(vertex.position[1], 1.0);
/// ```
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Vertex3D {
    /// 3D position coordinates [x, y, z]
    pub position: [f32; 3],
    /// 3D normal vector [nx, ny, nz]
    pub normal: [f32; 3],
}
