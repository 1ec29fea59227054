//! Configuration for a placement session
//!
//! Settings are read once at startup from a TOML file. Every field has a
//! default, so an empty file (or no file at all) gives a working session:
//! AR hit testing, a 20cm cube prototype and a 10m simulation floor.
//!
//! ```toml
//! use_ar = false
//! input = "mouse"
//!
//! [prototype]
//! kind = "obj"
//! path = "assets/chair.obj"
//!
//! [floor]
//! size = 10.0
//!
//! [[obstacles]]
//! position = [1.0, 0.4, -1.0]
//! size = [0.8, 0.8, 0.8]
//! ```

use std::path::{Path, PathBuf};

use cgmath::{Deg, Point2, Quaternion, Rotation3, Vector3};
use serde::Deserialize;

use crate::ar::PlaneFilter;
use crate::error::{PlacerError, Result};
use crate::gfx::geometry::{generate_cube, generate_sphere};
use crate::gfx::picking::Pose;
use crate::gfx::scene::Prototype;
use crate::input::PointerKind;

/// Prototype edge length used when none is configured
pub const DEFAULT_PROTOTYPE_SIZE: f32 = 0.2;

/// Floor edge length used when a floor is configured without a size
pub const DEFAULT_FLOOR_SIZE: f32 = 10.0;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PlacerConfig {
    /// Hit test against detected AR planes (true) or scene colliders (false)
    pub use_ar: bool,
    pub input: PointerKind,
    pub prototype: PrototypeConfig,
    /// Simulation floor, only active when `use_ar` is false
    pub floor: Option<FloorConfig>,
    pub plane_filter: PlaneFilter,
    /// Longest physics ray cast in simulation mode; unbounded when unset
    pub max_ray_distance: Option<f32>,
    pub camera: CameraConfig,
    pub window: WindowConfig,
    /// Planes seeded into the plane tracker at startup
    pub planes: Vec<PlaneConfig>,
    /// Box colliders added to the simulation scene
    pub obstacles: Vec<ObstacleConfig>,
}

impl Default for PlacerConfig {
    fn default() -> Self {
        Self {
            use_ar: true,
            input: PointerKind::Auto,
            prototype: PrototypeConfig::default(),
            floor: Some(FloorConfig::default()),
            plane_filter: PlaneFilter::WithinPolygon,
            max_ray_distance: None,
            camera: CameraConfig::default(),
            window: WindowConfig::default(),
            planes: Vec::new(),
            obstacles: Vec::new(),
        }
    }
}

impl PlacerConfig {
    /// Reads and validates a TOML configuration file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|source| PlacerError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&contents)
    }

    pub fn from_toml_str(contents: &str) -> Result<Self> {
        let config: Self = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        self.prototype.validate()?;

        if let Some(floor) = &self.floor {
            ensure_positive("floor.size", floor.size)?;
            ensure_finite("floor.height", floor.height)?;
        }
        if let Some(distance) = self.max_ray_distance {
            ensure_positive("max_ray_distance", distance)?;
        }

        ensure_positive("camera.distance", self.camera.distance)?;
        ensure_positive("camera.fovy_degrees", self.camera.fovy_degrees)?;
        ensure_finite("camera.pitch", self.camera.pitch)?;
        ensure_finite("camera.yaw", self.camera.yaw)?;
        ensure_all_finite("camera.target", &self.camera.target)?;
        if let Some(device) = &self.camera.device_pose {
            ensure_all_finite("camera.device_pose.position", &device.position)?;
            ensure_finite("camera.device_pose.pitch_degrees", device.pitch_degrees)?;
            ensure_finite("camera.device_pose.yaw_degrees", device.yaw_degrees)?;
        }

        if self.window.width == 0 || self.window.height == 0 {
            return Err(PlacerError::InvalidConfig(
                "window size must be non-zero".to_string(),
            ));
        }

        for (index, plane) in self.planes.iter().enumerate() {
            if plane.boundary.len() < 3 {
                return Err(PlacerError::InvalidConfig(format!(
                    "planes[{}] needs at least 3 boundary points, found {}",
                    index,
                    plane.boundary.len()
                )));
            }
            ensure_all_finite(&format!("planes[{}].center", index), &plane.center)?;
            ensure_finite(
                &format!("planes[{}].rotation_y_degrees", index),
                plane.rotation_y_degrees,
            )?;
            for point in &plane.boundary {
                ensure_all_finite(&format!("planes[{}].boundary", index), point)?;
            }
        }

        for (index, obstacle) in self.obstacles.iter().enumerate() {
            for extent in obstacle.size {
                ensure_positive(&format!("obstacles[{}].size", index), extent)?;
            }
            ensure_all_finite(&format!("obstacles[{}].position", index), &obstacle.position)?;
            ensure_finite(
                &format!("obstacles[{}].rotation_y_degrees", index),
                obstacle.rotation_y_degrees,
            )?;
        }

        Ok(())
    }
}

fn ensure_positive(field: &str, value: f32) -> Result<()> {
    if value > 0.0 && value.is_finite() {
        Ok(())
    } else {
        Err(PlacerError::InvalidConfig(format!(
            "{} must be a positive number, got {}",
            field, value
        )))
    }
}

fn ensure_finite(field: &str, value: f32) -> Result<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(PlacerError::InvalidConfig(format!(
            "{} must be finite, got {}",
            field, value
        )))
    }
}

fn ensure_all_finite(field: &str, values: &[f32]) -> Result<()> {
    values.iter().try_for_each(|value| ensure_finite(field, *value))
}

/// Template the placed object is instantiated from
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PrototypeConfig {
    Cube {
        #[serde(default = "default_prototype_size")]
        size: f32,
    },
    Sphere {
        #[serde(default = "default_prototype_radius")]
        radius: f32,
    },
    Obj {
        path: PathBuf,
    },
}

fn default_prototype_size() -> f32 {
    DEFAULT_PROTOTYPE_SIZE
}

fn default_prototype_radius() -> f32 {
    DEFAULT_PROTOTYPE_SIZE * 0.5
}

impl Default for PrototypeConfig {
    fn default() -> Self {
        PrototypeConfig::Cube {
            size: DEFAULT_PROTOTYPE_SIZE,
        }
    }
}

impl PrototypeConfig {
    fn validate(&self) -> Result<()> {
        match self {
            PrototypeConfig::Cube { size } => ensure_positive("prototype.size", *size),
            PrototypeConfig::Sphere { radius } => ensure_positive("prototype.radius", *radius),
            PrototypeConfig::Obj { .. } => Ok(()),
        }
    }

    /// Builds the prototype, loading it from disk for `kind = "obj"`
    pub fn build(&self) -> Result<Prototype> {
        match self {
            PrototypeConfig::Cube { size } => {
                Ok(Prototype::from_geometry("cube", &generate_cube().scaled(*size)))
            }
            PrototypeConfig::Sphere { radius } => Ok(Prototype::from_geometry(
                "sphere",
                &generate_sphere(24, 12).scaled(*radius),
            )),
            PrototypeConfig::Obj { path } => Prototype::load_obj(path),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FloorConfig {
    /// `false` removes the floor entirely
    pub enabled: bool,
    /// Edge length of the square floor
    pub size: f32,
    /// Height of the floor surface
    pub height: f32,
}

impl Default for FloorConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            size: DEFAULT_FLOOR_SIZE,
            height: 0.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CameraConfig {
    /// Orbit camera distance from `target`
    pub distance: f32,
    /// Orbit camera pitch in radians (positive looks down)
    pub pitch: f32,
    /// Orbit camera yaw in radians
    pub yaw: f32,
    pub target: [f32; 3],
    pub fovy_degrees: f32,
    /// Fixed device pose; replaces the orbit camera when set
    pub device_pose: Option<DevicePoseConfig>,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            distance: 4.0,
            pitch: 0.6,
            yaw: 0.0,
            target: [0.0, 0.0, 0.0],
            fovy_degrees: 45.0,
            device_pose: None,
        }
    }
}

/// Handheld camera pose, for replaying an AR session at a fixed viewpoint
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DevicePoseConfig {
    pub position: [f32; 3],
    /// Downward tilt in degrees
    pub pitch_degrees: f32,
    pub yaw_degrees: f32,
}

impl Default for DevicePoseConfig {
    fn default() -> Self {
        // Phone held at chest height, tilted towards the floor
        Self {
            position: [0.0, 1.4, 0.0],
            pitch_degrees: 35.0,
            yaw_degrees: 0.0,
        }
    }
}

impl DevicePoseConfig {
    pub fn pose(&self) -> Pose {
        let rotation = Quaternion::from_angle_y(Deg(self.yaw_degrees))
            * Quaternion::from_angle_x(Deg(-self.pitch_degrees));
        Pose::new(Vector3::from(self.position), rotation)
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct WindowConfig {
    pub width: u32,
    pub height: u32,
    pub title: String,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 1200,
            height: 800,
            title: "arplace".to_string(),
        }
    }
}

/// A plane known to the tracker at startup
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PlaneConfig {
    pub center: [f32; 3],
    #[serde(default)]
    pub rotation_y_degrees: f32,
    /// Polygon in plane-local [x, z] coordinates
    pub boundary: Vec<[f32; 2]>,
}

impl PlaneConfig {
    pub fn pose(&self) -> Pose {
        Pose::new(
            Vector3::from(self.center),
            Quaternion::from_angle_y(Deg(self.rotation_y_degrees)),
        )
    }

    pub fn boundary_points(&self) -> Vec<Point2<f32>> {
        self.boundary
            .iter()
            .map(|[x, z]| Point2::new(*x, *z))
            .collect()
    }
}

/// Box obstacle in the simulation scene
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ObstacleConfig {
    pub position: [f32; 3],
    pub size: [f32; 3],
    #[serde(default)]
    pub rotation_y_degrees: f32,
}

impl ObstacleConfig {
    pub fn pose(&self) -> Pose {
        Pose::new(
            Vector3::from(self.position),
            Quaternion::from_angle_y(Deg(self.rotation_y_degrees)),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_empty_file_gives_defaults() {
        let config = PlacerConfig::from_toml_str("").unwrap();

        assert_eq!(config, PlacerConfig::default());
        assert!(config.use_ar);
        assert_eq!(config.input, PointerKind::Auto);
        assert_eq!(config.plane_filter, PlaneFilter::WithinPolygon);
        assert_eq!(config.floor, Some(FloorConfig::default()));
    }

    #[test]
    fn test_full_config_parses() {
        let config = PlacerConfig::from_toml_str(
            r#"
            use_ar = false
            input = "touch"
            plane_filter = "within_bounds"
            max_ray_distance = 25.0

            [prototype]
            kind = "sphere"
            radius = 0.3

            [floor]
            size = 6.0
            height = -0.5

            [camera]
            distance = 7.5
            fovy_degrees = 60.0

            [[planes]]
            center = [0.0, 0.0, -1.0]
            boundary = [[-1.0, -1.0], [1.0, -1.0], [0.0, 1.0]]

            [[obstacles]]
            position = [1.0, 0.4, -1.0]
            size = [0.8, 0.8, 0.8]
            rotation_y_degrees = 15.0
            "#,
        )
        .unwrap();

        assert!(!config.use_ar);
        assert_eq!(config.input, PointerKind::Touch);
        assert_eq!(config.plane_filter, PlaneFilter::WithinBounds);
        assert_eq!(config.max_ray_distance, Some(25.0));
        assert_eq!(config.prototype, PrototypeConfig::Sphere { radius: 0.3 });
        assert_eq!(config.floor.as_ref().unwrap().height, -0.5);
        assert_eq!(config.camera.distance, 7.5);
        assert_eq!(config.camera.pitch, CameraConfig::default().pitch);
        assert_eq!(config.planes[0].boundary_points().len(), 3);
        assert_eq!(config.obstacles.len(), 1);
    }

    #[test]
    fn test_cube_size_defaults_when_omitted() {
        let config = PlacerConfig::from_toml_str("[prototype]\nkind = \"cube\"\n").unwrap();
        assert_eq!(
            config.prototype,
            PrototypeConfig::Cube {
                size: DEFAULT_PROTOTYPE_SIZE
            }
        );
    }

    #[test]
    fn test_floor_can_be_switched_off() {
        let config = PlacerConfig::from_toml_str("[floor]\nenabled = false\n").unwrap();
        assert!(!config.floor.unwrap().enabled);
    }

    #[test]
    fn test_rejects_degenerate_plane() {
        let err = PlacerConfig::from_toml_str(
            "[[planes]]\ncenter = [0.0, 0.0, 0.0]\nboundary = [[0.0, 0.0], [1.0, 0.0]]\n",
        )
        .unwrap_err();
        assert!(matches!(err, PlacerError::InvalidConfig(_)));
    }

    #[test]
    fn test_rejects_non_positive_sizes() {
        let err = PlacerConfig::from_toml_str("[floor]\nsize = 0.0\n").unwrap_err();
        assert!(matches!(err, PlacerError::InvalidConfig(_)));

        let err = PlacerConfig::from_toml_str("[prototype]\nkind = \"cube\"\nsize = -1.0\n")
            .unwrap_err();
        assert!(matches!(err, PlacerError::InvalidConfig(_)));
    }

    #[test]
    fn test_rejects_nan_obstacle_size() {
        let err = PlacerConfig::from_toml_str(
            "[[obstacles]]\nposition = [0.0, 0.5, 0.0]\nsize = [nan, 1.0, 1.0]\n",
        )
        .unwrap_err();
        match err {
            PlacerError::InvalidConfig(message) => assert!(message.contains("obstacles[0].size")),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_rejects_non_finite_positions() {
        let cases = [
            "[floor]\nheight = inf\n",
            "[camera]\ntarget = [nan, 0.0, 0.0]\n",
            "[camera]\npitch = -inf\n",
            "[camera.device_pose]\nposition = [0.0, nan, 0.0]\n",
            "[[planes]]\ncenter = [0.0, inf, 0.0]\nboundary = [[0.0, 0.0], [1.0, 0.0], [0.0, 1.0]]\n",
            "[[planes]]\ncenter = [0.0, 0.0, 0.0]\nboundary = [[0.0, 0.0], [nan, 0.0], [0.0, 1.0]]\n",
            "[[obstacles]]\nposition = [nan, 0.0, 0.0]\nsize = [1.0, 1.0, 1.0]\n",
        ];

        for case in cases {
            let err = PlacerConfig::from_toml_str(case).unwrap_err();
            assert!(matches!(err, PlacerError::InvalidConfig(_)), "accepted {:?}", case);
        }
    }

    #[test]
    fn test_unknown_keys_are_errors() {
        let err = PlacerConfig::from_toml_str("use_vr = true\n").unwrap_err();
        assert!(matches!(err, PlacerError::Config(_)));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "use_ar = false\ninput = \"mouse\"").unwrap();

        let config = PlacerConfig::load(file.path()).unwrap();
        assert!(!config.use_ar);
        assert_eq!(config.input, PointerKind::Mouse);

        let err = PlacerConfig::load("/no/such/placer.toml").unwrap_err();
        assert!(matches!(err, PlacerError::Io { .. }));
    }

    #[test]
    fn test_prototype_build() {
        let cube = PrototypeConfig::default().build().unwrap();
        assert_eq!(cube.name(), "cube");
        assert!((cube.bounds().max.x - 0.1).abs() < 1e-6);

        let sphere = PrototypeConfig::Sphere { radius: 0.5 }.build().unwrap();
        assert!((sphere.bounds().max.y - 0.5).abs() < 1e-5);
    }

    #[test]
    fn test_demo_config_is_valid() {
        let config = PlacerConfig::from_toml_str(include_str!("../demos/placer.toml")).unwrap();

        assert!(!config.use_ar);
        assert_eq!(config.obstacles.len(), 2);
        assert_eq!(config.planes.len(), 1);
        assert!(config.camera.device_pose.is_none());
    }

    #[test]
    fn test_device_pose_table() {
        let config = PlacerConfig::from_toml_str(
            "[camera.device_pose]\nposition = [0.0, 1.2, 0.5]\npitch_degrees = 20.0\n",
        )
        .unwrap();

        let device = config.camera.device_pose.unwrap();
        assert_eq!(device.position, [0.0, 1.2, 0.5]);
        assert_eq!(device.yaw_degrees, 0.0);
    }

    #[test]
    fn test_device_pose_tilts_down() {
        let pose = DevicePoseConfig::default().pose();
        assert!(pose.forward().y < 0.0);
    }
}
