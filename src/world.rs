use cgmath::{Vector2, Vector3};
use log::{debug, info};

use crate::ar::PlaneTracker;
use crate::config::PlacerConfig;
use crate::error::Result;
use crate::gfx::camera::{Camera, DeviceCamera, OrbitCamera, Viewport};
use crate::gfx::geometry::{generate_cube, generate_plane};
use crate::gfx::picking::Pose;
use crate::gfx::scene::{ObjectId, Prototype, Scene};
use crate::physics::{Collider, ColliderId, ColliderWorld};
use crate::placement::{ObjectPlacer, PlacementDecision, SurfaceContext};

/// Everything a placer casts against: the scene, its colliders, the detected
/// planes and the viewing camera.
pub struct World {
    pub scene: Scene,
    pub colliders: ColliderWorld,
    pub planes: PlaneTracker,
    pub camera: Box<dyn Camera>,
    floor: Option<(ObjectId, ColliderId)>,
}

impl World {
    pub fn from_config(config: &PlacerConfig) -> Result<Self> {
        config.validate()?;

        let mut scene = Scene::new();
        let mut colliders = ColliderWorld::new();
        let mut planes = PlaneTracker::new();

        // The floor stands in for real surfaces, so it only exists for the
        // collider cast and stays hidden while an AR session supplies planes
        let floor = config.floor.as_ref().filter(|floor| floor.enabled).map(|floor| {
            let prototype =
                Prototype::from_geometry("floor", &generate_plane(floor.size, floor.size, 1, 1));
            let pose = Pose::from_position(Vector3::new(0.0, floor.height, 0.0));
            let object = scene.instantiate(&prototype, pose.position, pose.rotation);

            let half = floor.size * 0.5;
            let collider =
                colliders.add(Collider::quad(Vector2::new(half, half), pose).with_object(object));

            let enabled = !config.use_ar;
            scene.set_active(object, enabled);
            colliders.set_enabled(collider, enabled);
            debug!(
                "floor {}x{} at height {} is {}",
                floor.size,
                floor.size,
                floor.height,
                if enabled { "active" } else { "hidden" }
            );
            (object, collider)
        });

        for plane in &config.planes {
            planes.add_plane(plane.pose(), plane.boundary_points());
        }

        for obstacle in &config.obstacles {
            let prototype =
                Prototype::from_geometry("obstacle", &generate_cube().scaled_xyz(obstacle.size));
            let pose = obstacle.pose();
            let id = scene.instantiate(&prototype, pose.position, pose.rotation);
            if let Some(object) = scene.object(id) {
                colliders.add(Collider::from_object_bounds(object));
            }
        }

        let viewport = Viewport::new(config.window.width as f32, config.window.height as f32);
        let camera: Box<dyn Camera> = match &config.camera.device_pose {
            Some(device) => {
                let mut camera = DeviceCamera::new(device.pose(), viewport);
                camera.fovy = cgmath::Deg(config.camera.fovy_degrees).into();
                Box::new(camera)
            }
            None => {
                let mut camera = OrbitCamera::new(
                    config.camera.distance,
                    config.camera.pitch,
                    config.camera.yaw,
                    Vector3::from(config.camera.target),
                    viewport,
                );
                camera.fovy = cgmath::Deg(config.camera.fovy_degrees).into();
                Box::new(camera)
            }
        };

        info!(
            "world ready: {} objects, {} colliders, {} planes",
            scene.len(),
            colliders.len(),
            planes.len()
        );

        Ok(Self {
            scene,
            colliders,
            planes,
            camera,
            floor,
        })
    }

    /// Simulation floor object, if one was configured
    pub fn floor(&self) -> Option<ObjectId> {
        self.floor.map(|(object, _)| object)
    }

    pub fn floor_collider(&self) -> Option<ColliderId> {
        self.floor.map(|(_, collider)| collider)
    }

    pub fn context(&self) -> SurfaceContext<'_> {
        SurfaceContext {
            camera: self.camera.as_ref(),
            planes: &self.planes,
            physics: &self.colliders,
        }
    }

    /// Runs one placement frame against this world
    pub fn tick(&mut self, placer: &mut ObjectPlacer) -> PlacementDecision {
        let ctx = SurfaceContext {
            camera: self.camera.as_ref(),
            planes: &self.planes,
            physics: &self.colliders,
        };
        placer.tick(&mut self.scene, &ctx)
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        self.camera
            .set_viewport(Viewport::new(width as f32, height as f32));
    }

    /// Current pose of the object `placer` put down, if any
    pub fn placed_pose(&self, placer: &ObjectPlacer) -> Option<Pose> {
        placer
            .placed_object()
            .and_then(|id| self.scene.object(id))
            .map(|object| object.pose())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{DevicePoseConfig, FloorConfig, ObstacleConfig, PlaneConfig};
    use crate::gfx::picking::Ray;
    use crate::input::{PointerSample, ScriptedPointer};
    use crate::placement::hit_tester_for;
    use crate::physics::PhysicsRaycaster;
    use cgmath::InnerSpace;

    fn simulation_config() -> PlacerConfig {
        PlacerConfig {
            use_ar: false,
            ..PlacerConfig::default()
        }
    }

    fn placer(config: &PlacerConfig, frames: Vec<Option<PointerSample>>) -> ObjectPlacer {
        ObjectPlacer::new(
            config.prototype.build().unwrap(),
            Box::new(ScriptedPointer::new(frames)),
            hit_tester_for(config),
        )
    }

    #[test]
    fn test_floor_active_only_without_ar() {
        let world = World::from_config(&simulation_config()).unwrap();
        let floor = world.floor().unwrap();
        assert!(world.scene.object(floor).unwrap().active);
        assert!(world.colliders.get(world.floor_collider().unwrap()).unwrap().enabled);

        let world = World::from_config(&PlacerConfig::default()).unwrap();
        let floor = world.floor().unwrap();
        assert!(!world.scene.object(floor).unwrap().active);
        assert!(!world.colliders.get(world.floor_collider().unwrap()).unwrap().enabled);
    }

    #[test]
    fn test_floor_is_optional() {
        let config = PlacerConfig {
            floor: None,
            ..simulation_config()
        };
        let world = World::from_config(&config).unwrap();

        assert!(world.floor().is_none());
        assert!(world.scene.is_empty());
        assert!(world.colliders.is_empty());

        let config = PlacerConfig {
            floor: Some(FloorConfig {
                enabled: false,
                ..FloorConfig::default()
            }),
            ..simulation_config()
        };
        assert!(World::from_config(&config).unwrap().floor().is_none());
    }

    #[test]
    fn test_floor_height_is_respected() {
        let config = PlacerConfig {
            floor: Some(FloorConfig {
                enabled: true,
                size: 4.0,
                height: 0.75,
            }),
            ..simulation_config()
        };
        let mut world = World::from_config(&config).unwrap();
        let mut placer = placer(&config, vec![Some(PointerSample::new(600.0, 400.0))]);

        assert!(matches!(world.tick(&mut placer), PlacementDecision::Spawn(_)));
        let pose = world.placed_pose(&placer).unwrap();
        assert!((pose.position.y - 0.75).abs() < 1e-4);
    }

    #[test]
    fn test_simulation_tick_places_on_floor() {
        let config = simulation_config();
        let mut world = World::from_config(&config).unwrap();
        let center = world.camera.viewport().center();
        let mut placer = placer(
            &config,
            vec![Some(PointerSample::new(center.x, center.y)), None],
        );

        assert!(matches!(world.tick(&mut placer), PlacementDecision::Spawn(_)));
        let pose = world.placed_pose(&placer).unwrap();
        // The default orbit camera looks at the origin
        assert!(pose.position.magnitude() < 1e-3);

        assert_eq!(world.tick(&mut placer), PlacementDecision::NoPointer);
        // Floor plus the placed cube
        assert_eq!(world.scene.len(), 2);
    }

    #[test]
    fn test_ar_tick_ignores_hidden_floor() {
        let config = PlacerConfig::default();
        let mut world = World::from_config(&config).unwrap();
        let center = world.camera.viewport().center();
        let mut placer = placer(&config, vec![Some(PointerSample::new(center.x, center.y))]);

        assert_eq!(world.tick(&mut placer), PlacementDecision::Miss);
        assert!(placer.placed_object().is_none());
    }

    #[test]
    fn test_configured_planes_are_tracked() {
        let config = PlacerConfig {
            planes: vec![PlaneConfig {
                center: [0.0, 0.0, 0.0],
                rotation_y_degrees: 0.0,
                boundary: vec![[-1.0, -1.0], [1.0, -1.0], [1.0, 1.0], [-1.0, 1.0]],
            }],
            ..PlacerConfig::default()
        };
        let mut world = World::from_config(&config).unwrap();
        let center = world.camera.viewport().center();
        let mut placer = placer(&config, vec![Some(PointerSample::new(center.x, center.y))]);

        assert_eq!(world.planes.len(), 1);
        assert!(matches!(world.tick(&mut placer), PlacementDecision::Spawn(_)));
    }

    #[test]
    fn test_obstacles_get_colliders() {
        let config = PlacerConfig {
            floor: None,
            obstacles: vec![ObstacleConfig {
                position: [0.0, 0.5, 0.0],
                size: [2.0, 1.0, 2.0],
                rotation_y_degrees: 0.0,
            }],
            ..simulation_config()
        };
        let world = World::from_config(&config).unwrap();

        assert_eq!(world.colliders.len(), 1);
        let ray = Ray::new(Vector3::new(0.0, 5.0, 0.0), Vector3::new(0.0, -1.0, 0.0));
        let hit = world.colliders.raycast(&ray, None).unwrap();
        assert!((hit.point.y - 1.0).abs() < 1e-4);
    }

    #[test]
    fn test_device_pose_selects_device_camera() {
        let mut config = PlacerConfig::default();
        config.camera.device_pose = Some(DevicePoseConfig {
            position: [0.0, 2.0, 0.0],
            pitch_degrees: 90.0,
            yaw_degrees: 0.0,
        });
        let world = World::from_config(&config).unwrap();

        assert!((world.camera.position().y - 2.0).abs() < 1e-6);
        let ray = world
            .camera
            .screen_point_to_ray(world.camera.viewport().center())
            .unwrap();
        assert!(ray.direction.y < -0.99);
    }

    #[test]
    fn test_resize_updates_viewport() {
        let mut world = World::from_config(&PlacerConfig::default()).unwrap();
        world.resize(640, 480);
        assert_eq!(world.camera.viewport(), Viewport::new(640.0, 480.0));
    }
}
