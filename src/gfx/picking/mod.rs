//! # Ray Casting Primitives
//!
//! Rays, poses and bounding boxes shared by the plane and collider ray casts.
//!
//! ## How it works
//!
//! 1. **Screen to Ray**: [`screen_to_ray`] unprojects a window pixel through a
//!    view-projection matrix into a world-space ray
//! 2. **Ray-Surface Intersection**: detected planes and colliders test the
//!    ray against their own geometry
//! 3. **Hit Pose**: a successful cast reports a [`Pose`] where the object
//!    should be placed
//!
//! ## Usage
//!
//! ```rust
//! use arplace::gfx::picking::{Ray, AABB};
//! use cgmath::Vector3;
//!
//! let ray = Ray::new(Vector3::new(0.0, 0.0, -5.0), Vector3::new(0.0, 0.0, 1.0));
//! let aabb = AABB::new(Vector3::new(-1.0, -1.0, -1.0), Vector3::new(1.0, 1.0, 1.0));
//! assert!(aabb.intersect_ray(&ray).is_some());
//! ```

use cgmath::{
    ElementWise, InnerSpace, Matrix4, One, Point2, Quaternion, SquareMatrix, Vector3, Vector4,
    Zero,
};

/// A 3D ray for intersection testing
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    /// Ray origin point in world space
    pub origin: Vector3<f32>,
    /// Ray direction (normalized)
    pub direction: Vector3<f32>,
}

impl Ray {
    /// Create a new ray
    pub fn new(origin: Vector3<f32>, direction: Vector3<f32>) -> Self {
        Self {
            origin,
            direction: direction.normalize(),
        }
    }

    /// Get a point along the ray at distance t
    pub fn point_at(&self, t: f32) -> Vector3<f32> {
        self.origin + self.direction * t
    }

    /// Distance along the ray to an infinite plane, if the plane is in front
    /// of the origin and not parallel to the ray
    pub fn intersect_plane(&self, point: Vector3<f32>, normal: Vector3<f32>) -> Option<f32> {
        let denom = normal.dot(self.direction);
        if denom.abs() <= f32::EPSILON {
            return None;
        }

        let t = normal.dot(point - self.origin) / denom;
        (t >= 0.0).then_some(t)
    }

    /// Express this ray in the local space of a pose
    pub fn to_local(&self, pose: &Pose) -> Ray {
        let inverse = pose.rotation.conjugate();
        Ray {
            origin: inverse * (self.origin - pose.position),
            direction: inverse * self.direction,
        }
    }
}

/// A position and orientation in world space
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pose {
    pub position: Vector3<f32>,
    pub rotation: Quaternion<f32>,
}

impl Pose {
    pub fn new(position: Vector3<f32>, rotation: Quaternion<f32>) -> Self {
        Self { position, rotation }
    }

    /// Pose at `position` with no rotation
    pub fn from_position(position: Vector3<f32>) -> Self {
        Self::new(position, Quaternion::one())
    }

    /// Local +Y axis in world space
    pub fn up(&self) -> Vector3<f32> {
        self.rotation * Vector3::unit_y()
    }

    /// Local -Z axis in world space
    pub fn forward(&self) -> Vector3<f32> {
        self.rotation * -Vector3::unit_z()
    }
}

impl Default for Pose {
    fn default() -> Self {
        Self::from_position(Vector3::zero())
    }
}

/// Axis-aligned bounding box for intersection testing
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AABB {
    /// Minimum corner of the bounding box
    pub min: Vector3<f32>,
    /// Maximum corner of the bounding box
    pub max: Vector3<f32>,
}

impl AABB {
    /// Create a new AABB
    pub fn new(min: Vector3<f32>, max: Vector3<f32>) -> Self {
        Self { min, max }
    }

    /// Box centred on the origin with the given half extents
    pub fn from_half_extents(half_extents: Vector3<f32>) -> Self {
        Self::new(-half_extents, half_extents)
    }

    /// Create AABB from a set of vertices
    pub fn from_vertices(vertices: &[[f32; 3]]) -> Self {
        if vertices.is_empty() {
            return Self::new(Vector3::zero(), Vector3::zero());
        }

        let mut min = Vector3::new(vertices[0][0], vertices[0][1], vertices[0][2]);
        let mut max = min;

        for vertex in vertices.iter().skip(1) {
            let v = Vector3::new(vertex[0], vertex[1], vertex[2]);
            min.x = min.x.min(v.x);
            min.y = min.y.min(v.y);
            min.z = min.z.min(v.z);
            max.x = max.x.max(v.x);
            max.y = max.y.max(v.y);
            max.z = max.z.max(v.z);
        }

        Self::new(min, max)
    }

    pub fn center(&self) -> Vector3<f32> {
        (self.min + self.max) * 0.5
    }

    pub fn half_extents(&self) -> Vector3<f32> {
        (self.max - self.min) * 0.5
    }

    /// Test ray-AABB intersection
    /// Returns the distance to intersection point, or None if no intersection
    pub fn intersect_ray(&self, ray: &Ray) -> Option<f32> {
        let inv_dir = Vector3::new(
            1.0 / ray.direction.x,
            1.0 / ray.direction.y,
            1.0 / ray.direction.z,
        );

        let t_min = (self.min - ray.origin).mul_element_wise(inv_dir);
        let t_max = (self.max - ray.origin).mul_element_wise(inv_dir);

        let t1 = Vector3::new(
            t_min.x.min(t_max.x),
            t_min.y.min(t_max.y),
            t_min.z.min(t_max.z),
        );
        let t2 = Vector3::new(
            t_min.x.max(t_max.x),
            t_min.y.max(t_max.y),
            t_min.z.max(t_max.z),
        );

        let t_near = t1.x.max(t1.y.max(t1.z));
        let t_far = t2.x.min(t2.y.min(t2.z));

        if t_near <= t_far && t_far >= 0.0 {
            Some(if t_near >= 0.0 { t_near } else { t_far })
        } else {
            None
        }
    }
}

/// Convert window pixel coordinates to a world-space ray
///
/// `screen_point` is in physical pixels with the origin at the top-left
/// corner and +y pointing down. The projection is expected to use OpenGL
/// clip conventions (NDC depth from -1 to 1), as produced by
/// [`cgmath::perspective`].
///
/// Returns `None` for an empty viewport or a non-invertible matrix.
pub fn screen_to_ray(
    screen_point: Point2<f32>,
    screen_size: (f32, f32),
    view_proj: Matrix4<f32>,
) -> Option<Ray> {
    let (screen_width, screen_height) = screen_size;
    if screen_width <= 0.0 || screen_height <= 0.0 {
        return None;
    }

    // Convert screen coordinates to normalized device coordinates (-1 to 1)
    let ndc_x = (2.0 * screen_point.x) / screen_width - 1.0;
    let ndc_y = 1.0 - (2.0 * screen_point.y) / screen_height; // Flip Y axis

    let inv_view_proj = view_proj.invert()?;

    let world_near = inv_view_proj * Vector4::new(ndc_x, ndc_y, -1.0, 1.0);
    let world_far = inv_view_proj * Vector4::new(ndc_x, ndc_y, 1.0, 1.0);

    let near_3d = world_near.truncate() / world_near.w;
    let far_3d = world_far.truncate() / world_far.w;

    let direction = far_3d - near_3d;
    if direction.magnitude2() <= f32::EPSILON {
        return None;
    }

    Some(Ray::new(near_3d, direction))
}

#[cfg(test)]
mod tests {
    use super::*;
    use cgmath::{Deg, Rotation3};

    fn close(a: Vector3<f32>, b: Vector3<f32>) -> bool {
        (a - b).magnitude() < 1e-4
    }

    #[test]
    fn test_aabb_creation() {
        let vertices = vec![[0.0, 0.0, 0.0], [1.0, 1.0, 1.0], [-1.0, -1.0, -1.0]];
        let aabb = AABB::from_vertices(&vertices);

        assert_eq!(aabb.min, Vector3::new(-1.0, -1.0, -1.0));
        assert_eq!(aabb.max, Vector3::new(1.0, 1.0, 1.0));
        assert_eq!(aabb.center(), Vector3::zero());
        assert_eq!(aabb.half_extents(), Vector3::new(1.0, 1.0, 1.0));
    }

    #[test]
    fn test_ray_aabb_intersection() {
        let aabb = AABB::new(Vector3::new(-1.0, -1.0, -1.0), Vector3::new(1.0, 1.0, 1.0));

        // Ray hitting the box
        let ray = Ray::new(Vector3::new(0.0, 0.0, -5.0), Vector3::new(0.0, 0.0, 1.0));
        let distance = aabb.intersect_ray(&ray).expect("ray should hit the box");
        assert!((distance - 4.0).abs() < 1e-5);

        // Ray missing the box
        let ray_miss = Ray::new(Vector3::new(5.0, 0.0, -5.0), Vector3::new(0.0, 0.0, 1.0));
        assert!(aabb.intersect_ray(&ray_miss).is_none());

        // Box behind the origin
        let ray_away = Ray::new(Vector3::new(0.0, 0.0, -5.0), Vector3::new(0.0, 0.0, -1.0));
        assert!(aabb.intersect_ray(&ray_away).is_none());
    }

    #[test]
    fn test_ray_plane_intersection() {
        let ray = Ray::new(Vector3::new(0.0, 3.0, 0.0), Vector3::new(0.0, -1.0, 0.0));
        let t = ray
            .intersect_plane(Vector3::zero(), Vector3::unit_y())
            .expect("ray points at the plane");
        assert!((t - 3.0).abs() < 1e-5);

        let parallel = Ray::new(Vector3::new(0.0, 3.0, 0.0), Vector3::unit_x());
        assert!(parallel.intersect_plane(Vector3::zero(), Vector3::unit_y()).is_none());

        let away = Ray::new(Vector3::new(0.0, 3.0, 0.0), Vector3::unit_y());
        assert!(away.intersect_plane(Vector3::zero(), Vector3::unit_y()).is_none());
    }

    #[test]
    fn test_ray_to_local_undoes_pose() {
        let pose = Pose::new(
            Vector3::new(1.0, 0.0, 0.0),
            Quaternion::from_angle_y(Deg(90.0)),
        );
        let ray = Ray::new(Vector3::new(1.0, 0.0, -3.0), Vector3::unit_z());
        let local = ray.to_local(&pose);

        // World +Z maps to local -X under a 90 degree yaw
        assert!(close(local.origin, Vector3::new(3.0, 0.0, 0.0)));
        assert!(close(local.direction, Vector3::new(-1.0, 0.0, 0.0)));
    }

    #[test]
    fn test_screen_to_ray_rejects_empty_viewport() {
        let view_proj = Matrix4::identity();
        assert!(screen_to_ray(Point2::new(0.0, 0.0), (0.0, 600.0), view_proj).is_none());
    }

    #[test]
    fn test_screen_centre_looks_down_view_axis() {
        let view = Matrix4::look_at_rh(
            cgmath::Point3::new(0.0, 0.0, 5.0),
            cgmath::Point3::new(0.0, 0.0, 0.0),
            Vector3::unit_y(),
        );
        let proj = cgmath::perspective(Deg(60.0), 1.0, 0.1, 100.0);
        let ray = screen_to_ray(Point2::new(400.0, 400.0), (800.0, 800.0), proj * view)
            .expect("valid camera");

        assert!(close(ray.direction, Vector3::new(0.0, 0.0, -1.0)));
        assert!(ray.origin.z < 5.0 && ray.origin.z > 4.8);
    }
}
