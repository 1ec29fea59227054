use cgmath::{Matrix4, Point2, Point3};

use crate::gfx::picking::{screen_to_ray, Ray};

/// Size of the render surface in physical pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn aspect(&self) -> f32 {
        if self.height > 0.0 {
            self.width / self.height
        } else {
            1.0
        }
    }

    pub fn center(&self) -> Point2<f32> {
        Point2::new(self.width * 0.5, self.height * 0.5)
    }
}

/// A viewing camera that can turn window pixels into world-space rays.
///
/// This is the scene/camera provider the simulation hit tester and the plane
/// tracker both cast through.
pub trait Camera {
    fn view_matrix(&self) -> Matrix4<f32>;

    fn projection_matrix(&self) -> Matrix4<f32>;

    fn viewport(&self) -> Viewport;

    fn set_viewport(&mut self, viewport: Viewport);

    /// Eye position in world space
    fn position(&self) -> Point3<f32>;

    fn build_view_projection_matrix(&self) -> Matrix4<f32> {
        self.projection_matrix() * self.view_matrix()
    }

    /// Ray from the eye through `screen_point` (physical pixels, top-left origin)
    fn screen_point_to_ray(&self, screen_point: Point2<f32>) -> Option<Ray> {
        let viewport = self.viewport();
        screen_to_ray(
            screen_point,
            (viewport.width, viewport.height),
            self.build_view_projection_matrix(),
        )
    }
}
