use cgmath::{perspective, Deg, EuclideanSpace, Matrix4, Point3, Rad};

use super::camera_utils::{Camera, Viewport};
use crate::gfx::picking::Pose;

/// Camera driven by a tracked device pose, as reported by an AR session.
///
/// Looks down its local -Z axis with +Y up.
#[derive(Debug, Clone, Copy)]
pub struct DeviceCamera {
    pub pose: Pose,
    pub viewport: Viewport,
    pub fovy: Rad<f32>,
    pub znear: f32,
    pub zfar: f32,
}

impl DeviceCamera {
    pub fn new(pose: Pose, viewport: Viewport) -> Self {
        Self {
            pose,
            viewport,
            fovy: Deg(60.0).into(),
            znear: 0.05,
            zfar: 100.0,
        }
    }

    /// Replace the tracked pose for the current frame
    pub fn set_pose(&mut self, pose: Pose) {
        self.pose = pose;
    }
}

impl Camera for DeviceCamera {
    fn view_matrix(&self) -> Matrix4<f32> {
        Matrix4::from(self.pose.rotation.conjugate())
            * Matrix4::from_translation(-self.pose.position)
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
        Point3::from_vec(self.pose.position)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cgmath::{InnerSpace, Quaternion, Rotation3, Vector3};

    #[test]
    fn test_centre_ray_follows_device_forward() {
        let pose = Pose::new(
            Vector3::new(0.0, 1.5, 0.0),
            Quaternion::from_angle_x(Deg(-30.0)),
        );
        let camera = DeviceCamera::new(pose, Viewport::new(1080.0, 1920.0));

        let ray = camera.screen_point_to_ray(camera.viewport.center()).unwrap();

        assert!((ray.direction - pose.forward()).magnitude() < 1e-3);
        assert!((ray.origin - pose.position).magnitude() < 0.1);
    }

    #[test]
    fn test_set_pose_moves_eye() {
        let mut camera = DeviceCamera::new(Pose::default(), Viewport::new(100.0, 100.0));
        camera.set_pose(Pose::from_position(Vector3::new(2.0, 0.0, 0.0)));
        assert_eq!(camera.position(), Point3::new(2.0, 0.0, 0.0));
    }
}
