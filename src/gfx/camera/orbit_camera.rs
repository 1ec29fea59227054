use super::camera_utils::{Camera, Viewport};
use cgmath::*;

/// Camera orbiting a target point, used for desktop simulation sessions
#[derive(Debug, Clone, Copy)]
pub struct OrbitCamera {
    pub distance: f32,
    pub pitch: f32,
    pub yaw: f32,
    pub eye: Vector3<f32>,
    pub target: Vector3<f32>,
    pub up: Vector3<f32>,
    pub viewport: Viewport,
    pub fovy: Rad<f32>,
    pub znear: f32,
    pub zfar: f32,
}

impl Camera for OrbitCamera {
    fn view_matrix(&self) -> Matrix4<f32> {
        let eye = Point3::from_vec(self.eye);
        let target = Point3::from_vec(self.target);
        Matrix4::look_at_rh(eye, target, self.up)
    }

    fn projection_matrix(&self) -> Matrix4<f32> {
        perspective(self.fovy, self.viewport.aspect(), self.znear, self.zfar)
    }

    fn viewport(&self) -> Viewport {
        self.viewport
    }

    fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }

    fn position(&self) -> Point3<f32> {
        Point3::from_vec(self.eye)
    }
}

impl OrbitCamera {
    /// `pitch` is clamped short of straight up or down, where look_at degenerates
    pub fn new(distance: f32, pitch: f32, yaw: f32, target: Vector3<f32>, viewport: Viewport) -> Self {
        let pitch = pitch.clamp(-MAX_PITCH, MAX_PITCH);
        Self {
            distance,
            pitch,
            yaw,
            eye: calculate_cartesian_eye_position(pitch, yaw, distance, target),
            target,
            up: Vector3::unit_y(),
            viewport,
            fovy: cgmath::Rad(std::f32::consts::PI / 4.0),
            znear: 0.1,
            zfar: 1000.0,
        }
    }
}

const MAX_PITCH: f32 = std::f32::consts::FRAC_PI_2 - 0.01;

fn calculate_cartesian_eye_position(
    pitch: f32,
    yaw: f32,
    distance: f32,
    target: Vector3<f32>,
) -> Vector3<f32> {
    Vector3::new(
        distance * yaw.sin() * pitch.cos(),
        distance * pitch.sin(),
        distance * yaw.cos() * pitch.cos(),
    ) + target
}
