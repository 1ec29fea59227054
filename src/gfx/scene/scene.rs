use cgmath::{Quaternion, Vector3};
use log::debug;

use super::object::{Object, ObjectId, Prototype};
use crate::gfx::picking::Pose;

/// Main scene containing every instantiated object
#[derive(Debug, Default)]
pub struct Scene {
    objects: Vec<Object>,
}

impl Scene {
    /// Creates an empty scene
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a new object from `prototype` at the given position and rotation
    pub fn instantiate(
        &mut self,
        prototype: &Prototype,
        position: Vector3<f32>,
        rotation: Quaternion<f32>,
    ) -> ObjectId {
        let id = ObjectId(self.objects.len());
        let mut object = Object::from_prototype(id, prototype, Pose::new(position, rotation));

        let unique_name = self.ensure_unique_name(prototype.name());
        object.set_name(unique_name);

        debug!(
            "instantiated '{}' at ({:.3}, {:.3}, {:.3})",
            object.name(),
            position.x,
            position.y,
            position.z
        );
        self.objects.push(object);
        id
    }

    pub fn object(&self, id: ObjectId) -> Option<&Object> {
        self.objects.get(id.0)
    }

    pub fn object_mut(&mut self, id: ObjectId) -> Option<&mut Object> {
        self.objects.get_mut(id.0)
    }

    /// Shows or hides an object. Returns false for an unknown id.
    pub fn set_active(&mut self, id: ObjectId, active: bool) -> bool {
        match self.object_mut(id) {
            Some(object) => {
                object.active = active;
                true
            }
            None => false,
        }
    }

    pub fn objects(&self) -> impl Iterator<Item = &Object> {
        self.objects.iter()
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    /// Number of objects instantiated from the named prototype
    pub fn count_instances(&self, prototype: &str) -> usize {
        self.objects
            .iter()
            .filter(|object| object.prototype() == prototype)
            .count()
    }

    /// Appends a numeric suffix until the name is unused
    pub fn ensure_unique_name(&self, desired_name: &str) -> String {
        let taken = |name: &str| self.objects.iter().any(|object| object.name() == name);

        if !taken(desired_name) {
            return desired_name.to_string();
        }

        let mut counter = 1;
        loop {
            let candidate = format!("{}_{}", desired_name, counter);
            if !taken(&candidate) {
                return candidate;
            }
            counter += 1;
        }
    }
}
