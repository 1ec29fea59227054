use cgmath::{Point2, Vector3};

use crate::gfx::picking::{Pose, Ray};

/// Identifier assigned to a trackable by the plane-detection subsystem
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TrackableId(pub u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TrackingState {
    #[default]
    Tracking,
    /// Pose known but possibly stale
    Limited,
    /// Not tracked; ignored by ray casts
    None,
}

/// Which part of a detected plane counts as a hit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlaneFilter {
    /// Inside the detected boundary polygon
    #[default]
    WithinPolygon,
    /// Inside the boundary's local bounding rectangle
    WithinBounds,
    /// Anywhere on the plane's infinite extension
    WithinInfinity,
}

/// A flat surface reported by plane detection.
///
/// The plane passes through `pose.position` with normal `pose.up()`. The
/// boundary polygon lies in the plane's local XZ coordinates, stored as
/// `Point2 { x: local_x, y: local_z }`.
#[derive(Debug, Clone, PartialEq)]
pub struct DetectedPlane {
    pub id: TrackableId,
    pub pose: Pose,
    pub boundary: Vec<Point2<f32>>,
    pub tracking_state: TrackingState,
}

impl DetectedPlane {
    pub fn new(id: TrackableId, pose: Pose, boundary: Vec<Point2<f32>>) -> Self {
        Self {
            id,
            pose,
            boundary,
            tracking_state: TrackingState::Tracking,
        }
    }

    /// Axis-aligned rectangular plane of the given width (X) and depth (Z)
    pub fn rectangle(id: TrackableId, pose: Pose, width: f32, depth: f32) -> Self {
        let (hw, hd) = (width * 0.5, depth * 0.5);
        Self::new(
            id,
            pose,
            vec![
                Point2::new(-hw, -hd),
                Point2::new(hw, -hd),
                Point2::new(hw, hd),
                Point2::new(-hw, hd),
            ],
        )
    }

    pub fn normal(&self) -> Vector3<f32> {
        self.pose.up()
    }

    /// Distance along `ray` and world-space point where it crosses this plane
    /// inside the region selected by `filter`
    pub fn raycast(&self, ray: &Ray, filter: PlaneFilter) -> Option<(f32, Vector3<f32>)> {
        let distance = ray.intersect_plane(self.pose.position, self.normal())?;
        let point = ray.point_at(distance);

        let local = self.pose.rotation.conjugate() * (point - self.pose.position);
        let local = Point2::new(local.x, local.z);

        let inside = match filter {
            PlaneFilter::WithinPolygon => polygon_contains(&self.boundary, local),
            PlaneFilter::WithinBounds => bounds_contain(&self.boundary, local),
            PlaneFilter::WithinInfinity => true,
        };

        inside.then_some((distance, point))
    }
}

/// Even-odd crossing test. Polygons with fewer than three vertices contain nothing.
pub fn polygon_contains(polygon: &[Point2<f32>], point: Point2<f32>) -> bool {
    if polygon.len() < 3 {
        return false;
    }

    let mut inside = false;
    let mut j = polygon.len() - 1;
    for i in 0..polygon.len() {
        let (a, b) = (polygon[i], polygon[j]);
        if (a.y > point.y) != (b.y > point.y) {
            let crossing_x = (b.x - a.x) * (point.y - a.y) / (b.y - a.y) + a.x;
            if point.x < crossing_x {
                inside = !inside;
            }
        }
        j = i;
    }
    inside
}

fn bounds_contain(polygon: &[Point2<f32>], point: Point2<f32>) -> bool {
    let Some(first) = polygon.first() else {
        return false;
    };

    let (mut min, mut max) = (*first, *first);
    for vertex in polygon.iter().skip(1) {
        min.x = min.x.min(vertex.x);
        min.y = min.y.min(vertex.y);
        max.x = max.x.max(vertex.x);
        max.y = max.y.max(vertex.y);
    }

    point.x >= min.x && point.x <= max.x && point.y >= min.y && point.y <= max.y
}

#[cfg(test)]
mod tests {
    use super::*;
    use cgmath::{Deg, InnerSpace, Quaternion, Rotation3};

    fn l_shape() -> Vec<Point2<f32>> {
        vec![
            Point2::new(0.0, 0.0),
            Point2::new(2.0, 0.0),
            Point2::new(2.0, 1.0),
            Point2::new(1.0, 1.0),
            Point2::new(1.0, 2.0),
            Point2::new(0.0, 2.0),
        ]
    }

    #[test]
    fn test_polygon_contains_concave_shape() {
        let polygon = l_shape();

        assert!(polygon_contains(&polygon, Point2::new(0.5, 0.5)));
        assert!(polygon_contains(&polygon, Point2::new(0.5, 1.5)));
        assert!(!polygon_contains(&polygon, Point2::new(1.5, 1.5)));
        assert!(!polygon_contains(&polygon, Point2::new(-0.5, 0.5)));
    }

    #[test]
    fn test_degenerate_polygon_contains_nothing() {
        let line = vec![Point2::new(0.0, 0.0), Point2::new(1.0, 1.0)];
        assert!(!polygon_contains(&line, Point2::new(0.5, 0.5)));
    }

    #[test]
    fn test_filters_select_hit_region() {
        let plane = DetectedPlane::new(TrackableId(1), Pose::default(), l_shape());
        // Falls in the notch of the L: outside the polygon, inside its bounds
        let ray = Ray::new(Vector3::new(1.5, 2.0, 1.5), -Vector3::unit_y());

        assert!(plane.raycast(&ray, PlaneFilter::WithinPolygon).is_none());
        assert!(plane.raycast(&ray, PlaneFilter::WithinBounds).is_some());

        let far = Ray::new(Vector3::new(9.0, 2.0, 9.0), -Vector3::unit_y());
        assert!(plane.raycast(&far, PlaneFilter::WithinBounds).is_none());
        let (distance, point) = plane.raycast(&far, PlaneFilter::WithinInfinity).unwrap();
        assert!((distance - 2.0).abs() < 1e-5);
        assert!((point - Vector3::new(9.0, 0.0, 9.0)).magnitude() < 1e-5);
    }

    #[test]
    fn test_rotated_plane_uses_local_coordinates() {
        // A wall facing +Z: local +Y maps to world +Z
        let pose = Pose::new(
            Vector3::new(0.0, 1.0, -2.0),
            Quaternion::from_angle_x(Deg(90.0)),
        );
        let wall = DetectedPlane::rectangle(TrackableId(7), pose, 2.0, 2.0);

        let ray = Ray::new(Vector3::new(0.0, 1.0, 0.0), -Vector3::unit_z());
        let (distance, point) = wall.raycast(&ray, PlaneFilter::WithinPolygon).unwrap();

        assert!((distance - 2.0).abs() < 1e-5);
        assert!((point - Vector3::new(0.0, 1.0, -2.0)).magnitude() < 1e-5);

        let above = Ray::new(Vector3::new(0.0, 3.0, 0.0), -Vector3::unit_z());
        assert!(wall.raycast(&above, PlaneFilter::WithinPolygon).is_none());
    }
}
