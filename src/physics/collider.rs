use cgmath::{Quaternion, Vector2, Vector3};
use log::trace;

use crate::gfx::picking::{Pose, Ray, AABB};
use crate::gfx::scene::{Object, ObjectId};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ColliderId(pub usize);

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ColliderShape {
    /// Box centred on the collider pose
    Cuboid { half_extents: Vector3<f32> },
    /// Finite two-sided plane in the collider's local XZ, normal +Y
    Quad { half_size: Vector2<f32> },
}

#[derive(Debug, Clone, PartialEq)]
pub struct Collider {
    pub shape: ColliderShape,
    pub pose: Pose,
    pub enabled: bool,
    /// Scene object this collider belongs to, if any
    pub object: Option<ObjectId>,
}

impl Collider {
    pub fn new(shape: ColliderShape, pose: Pose) -> Self {
        Self {
            shape,
            pose,
            enabled: true,
            object: None,
        }
    }

    pub fn cuboid(half_extents: Vector3<f32>, pose: Pose) -> Self {
        Self::new(ColliderShape::Cuboid { half_extents }, pose)
    }

    pub fn quad(half_size: Vector2<f32>, pose: Pose) -> Self {
        Self::new(ColliderShape::Quad { half_size }, pose)
    }

    /// Box collider fitted to an object's mesh bounds
    pub fn from_object_bounds(object: &Object) -> Self {
        let bounds = object.local_bounds();
        let center = object.rotation * (bounds.center() * object.scale);
        let mut collider = Self::cuboid(
            bounds.half_extents() * object.scale,
            Pose::new(object.position + center, object.rotation),
        );
        collider.object = Some(object.id());
        collider
    }

    pub fn with_object(mut self, object: ObjectId) -> Self {
        self.object = Some(object);
        self
    }

    /// Distance along `ray` to the first surface of this collider
    pub fn intersect_ray(&self, ray: &Ray) -> Option<f32> {
        let local = ray.to_local(&self.pose);

        match self.shape {
            ColliderShape::Cuboid { half_extents } => {
                AABB::from_half_extents(half_extents).intersect_ray(&local)
            }
            ColliderShape::Quad { half_size } => {
                let t = local.intersect_plane(Vector3::new(0.0, 0.0, 0.0), Vector3::unit_y())?;
                let point = local.point_at(t);
                (point.x.abs() <= half_size.x && point.z.abs() <= half_size.y).then_some(t)
            }
        }
    }
}

/// Nearest surface a physics ray cast ran into
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RaycastHit {
    pub collider: ColliderId,
    pub point: Vector3<f32>,
    pub distance: f32,
    /// Orientation of the collider that was hit (not the surface normal)
    pub rotation: Quaternion<f32>,
    pub object: Option<ObjectId>,
}

/// Physics ray casting against scene colliders
pub trait PhysicsRaycaster {
    /// Nearest enabled collider along `ray`, no further than `max_distance`
    /// (`None` is unbounded)
    fn raycast(&self, ray: &Ray, max_distance: Option<f32>) -> Option<RaycastHit>;
}

/// The colliders a simulation-mode ray cast is tested against
#[derive(Debug, Default)]
pub struct ColliderWorld {
    colliders: Vec<Collider>,
}

impl ColliderWorld {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, collider: Collider) -> ColliderId {
        let id = ColliderId(self.colliders.len());
        self.colliders.push(collider);
        id
    }

    pub fn get(&self, id: ColliderId) -> Option<&Collider> {
        self.colliders.get(id.0)
    }

    pub fn get_mut(&mut self, id: ColliderId) -> Option<&mut Collider> {
        self.colliders.get_mut(id.0)
    }

    /// Enables or disables a collider. Returns false for an unknown id.
    pub fn set_enabled(&mut self, id: ColliderId, enabled: bool) -> bool {
        match self.get_mut(id) {
            Some(collider) => {
                collider.enabled = enabled;
                true
            }
            None => false,
        }
    }

    pub fn len(&self) -> usize {
        self.colliders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colliders.is_empty()
    }
}

impl PhysicsRaycaster for ColliderWorld {
    fn raycast(&self, ray: &Ray, max_distance: Option<f32>) -> Option<RaycastHit> {
        let max_distance = max_distance.unwrap_or(f32::INFINITY);

        let nearest = self
            .colliders
            .iter()
            .enumerate()
            .filter(|(_, collider)| collider.enabled)
            .filter_map(|(index, collider)| {
                collider
                    .intersect_ray(ray)
                    .filter(|distance| *distance <= max_distance)
                    .map(|distance| (index, collider, distance))
            })
            .min_by(|a, b| a.2.total_cmp(&b.2));

        let (index, collider, distance) = nearest?;
        trace!("physics raycast hit collider {} at {:.3}", index, distance);

        Some(RaycastHit {
            collider: ColliderId(index),
            point: ray.point_at(distance),
            distance,
            rotation: collider.pose.rotation,
            object: collider.object,
        })
    }
}
