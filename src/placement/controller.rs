use cgmath::Vector3;
use log::{debug, info, trace};

use super::hit_test::{hit_tester_for, SurfaceContext, SurfaceHitTester};
use crate::config::PlacerConfig;
use crate::error::Result;
use crate::gfx::picking::Pose;
use crate::gfx::scene::{ObjectId, Prototype, Scene};
use crate::input::{pointer_for, PointerSource};

/// Whether the placed object exists yet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlacementState {
    #[default]
    Unplaced,
    Placed(ObjectId),
}

/// What a tick decided to do with the placed object
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PlacementDecision {
    /// No pointer was active this frame
    NoPointer,
    /// The pointer was not over any placement surface
    Miss,
    /// First hit: create the object at the full hit pose
    Spawn(Pose),
    /// Later hits: move the existing object, keeping its rotation
    Move {
        object: ObjectId,
        position: Vector3<f32>,
    },
}

impl PlacementDecision {
    /// True if applying this decision changes the scene
    pub fn changes_scene(&self) -> bool {
        matches!(self, PlacementDecision::Spawn(_) | PlacementDecision::Move { .. })
    }
}

/// Pure placement rule for one frame's hit test result
pub fn plan_placement(state: PlacementState, hit: Option<Pose>) -> PlacementDecision {
    match (state, hit) {
        (_, None) => PlacementDecision::Miss,
        (PlacementState::Unplaced, Some(pose)) => PlacementDecision::Spawn(pose),
        (PlacementState::Placed(object), Some(pose)) => PlacementDecision::Move {
            object,
            position: pose.position,
        },
    }
}

/// Owns the placed object and drives sample → hit test → place once per frame.
///
/// The rotation of the placed object is taken from the first hit only; later
/// hits move it without turning it.
pub struct ObjectPlacer {
    prototype: Prototype,
    pointer: Box<dyn PointerSource>,
    hit_tester: Box<dyn SurfaceHitTester>,
    state: PlacementState,
}

impl ObjectPlacer {
    pub fn new(
        prototype: Prototype,
        pointer: Box<dyn PointerSource>,
        hit_tester: Box<dyn SurfaceHitTester>,
    ) -> Self {
        info!(
            "placing '{}' with {} hit testing",
            prototype.name(),
            hit_tester.name()
        );
        Self {
            prototype,
            pointer,
            hit_tester,
            state: PlacementState::Unplaced,
        }
    }

    /// Placer with the configured prototype, pointer device and hit test mode
    pub fn from_config(config: &PlacerConfig) -> Result<Self> {
        let prototype = config.prototype.build()?;
        Ok(Self::new(
            prototype,
            pointer_for(config.input),
            hit_tester_for(config),
        ))
    }

    pub fn state(&self) -> PlacementState {
        self.state
    }

    pub fn placed_object(&self) -> Option<ObjectId> {
        match self.state {
            PlacementState::Placed(id) => Some(id),
            PlacementState::Unplaced => None,
        }
    }

    pub fn prototype(&self) -> &Prototype {
        &self.prototype
    }

    /// Pointer source, for forwarding window events
    pub fn pointer_mut(&mut self) -> &mut dyn PointerSource {
        self.pointer.as_mut()
    }

    /// Runs one frame of placement and applies the result to `scene`
    pub fn tick(&mut self, scene: &mut Scene, ctx: &SurfaceContext<'_>) -> PlacementDecision {
        let Some(sample) = self.pointer.sample() else {
            return PlacementDecision::NoPointer;
        };

        let hit = self.hit_tester.hit_test(sample.position, ctx);
        let decision = plan_placement(self.state, hit);
        trace!("pointer at {:?}: {:?}", sample.position, decision);

        self.apply(decision, scene);
        decision
    }

    fn apply(&mut self, decision: PlacementDecision, scene: &mut Scene) {
        match decision {
            PlacementDecision::Spawn(pose) => {
                let id = scene.instantiate(&self.prototype, pose.position, pose.rotation);
                info!(
                    "placed '{}' at ({:.3}, {:.3}, {:.3})",
                    self.prototype.name(),
                    pose.position.x,
                    pose.position.y,
                    pose.position.z
                );
                self.state = PlacementState::Placed(id);
            }
            PlacementDecision::Move { object, position } => {
                if let Some(object) = scene.object_mut(object) {
                    object.position = position;
                    debug!(
                        "moved '{}' to ({:.3}, {:.3}, {:.3})",
                        object.name(),
                        position.x,
                        position.y,
                        position.z
                    );
                }
            }
            PlacementDecision::NoPointer | PlacementDecision::Miss => (),
        }
    }
}
