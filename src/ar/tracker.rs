use std::collections::BTreeMap;

use cgmath::Point2;
use log::{debug, trace};

use super::plane::{DetectedPlane, PlaneFilter, TrackableId, TrackingState};
use crate::gfx::camera::Camera;
use crate::gfx::picking::Pose;

/// Where a screen ray crossed a detected plane
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlaneHit {
    pub trackable_id: TrackableId,
    /// Intersection point, oriented like the plane
    pub pose: Pose,
    /// Distance from the ray origin
    pub distance: f32,
}

/// Plane-detection ray casting, as exposed by an AR session.
///
/// Implementations clear `hits`, fill it with every plane crossed by the ray
/// through `screen_point`, and return whether anything was hit. Callers rely
/// on the documented ordering of `hits`; [`PlaneTracker`] orders them nearest
/// first.
pub trait PlaneRaycaster {
    fn raycast(
        &self,
        screen_point: Point2<f32>,
        camera: &dyn Camera,
        filter: PlaneFilter,
        hits: &mut Vec<PlaneHit>,
    ) -> bool;
}

/// Software plane-detection state: the set of planes an AR session has
/// reported so far
#[derive(Debug, Default)]
pub struct PlaneTracker {
    planes: BTreeMap<TrackableId, DetectedPlane>,
    next_id: u64,
}

impl PlaneTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a newly detected plane and returns its id
    pub fn add_plane(&mut self, pose: Pose, boundary: Vec<Point2<f32>>) -> TrackableId {
        // Ids handed in through `insert` may have pushed the counter to the top
        let mut candidate = self.next_id;
        while self.planes.contains_key(&TrackableId(candidate)) {
            candidate = candidate.wrapping_add(1);
        }
        let id = TrackableId(candidate);
        self.next_id = candidate.saturating_add(1);
        self.insert(DetectedPlane::new(id, pose, boundary));
        id
    }

    /// Inserts or replaces a plane under its own id
    pub fn insert(&mut self, plane: DetectedPlane) {
        debug!(
            "plane {:?} tracked with {} boundary points",
            plane.id,
            plane.boundary.len()
        );
        self.next_id = self.next_id.max(plane.id.0.saturating_add(1));
        self.planes.insert(plane.id, plane);
    }

    /// Refines an existing plane. Returns false if the id is unknown.
    pub fn update_plane(&mut self, id: TrackableId, pose: Pose, boundary: Vec<Point2<f32>>) -> bool {
        match self.planes.get_mut(&id) {
            Some(plane) => {
                plane.pose = pose;
                plane.boundary = boundary;
                true
            }
            None => false,
        }
    }

    pub fn set_tracking_state(&mut self, id: TrackableId, state: TrackingState) -> bool {
        match self.planes.get_mut(&id) {
            Some(plane) => {
                plane.tracking_state = state;
                true
            }
            None => false,
        }
    }

    pub fn remove_plane(&mut self, id: TrackableId) -> Option<DetectedPlane> {
        let removed = self.planes.remove(&id);
        if removed.is_some() {
            debug!("plane {:?} removed", id);
        }
        removed
    }

    pub fn get(&self, id: TrackableId) -> Option<&DetectedPlane> {
        self.planes.get(&id)
    }

    pub fn planes(&self) -> impl Iterator<Item = &DetectedPlane> {
        self.planes.values()
    }

    pub fn len(&self) -> usize {
        self.planes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.planes.is_empty()
    }
}

impl PlaneRaycaster for PlaneTracker {
    fn raycast(
        &self,
        screen_point: Point2<f32>,
        camera: &dyn Camera,
        filter: PlaneFilter,
        hits: &mut Vec<PlaneHit>,
    ) -> bool {
        hits.clear();

        let Some(ray) = camera.screen_point_to_ray(screen_point) else {
            return false;
        };

        hits.extend(
            self.planes
                .values()
                .filter(|plane| plane.tracking_state != TrackingState::None)
                .filter_map(|plane| {
                    plane.raycast(&ray, filter).map(|(distance, point)| PlaneHit {
                        trackable_id: plane.id,
                        pose: Pose::new(point, plane.pose.rotation),
                        distance,
                    })
                }),
        );

        hits.sort_by(|a, b| a.distance.total_cmp(&b.distance));

        trace!("plane raycast at {:?}: {} hits", screen_point, hits.len());
        !hits.is_empty()
    }
}
