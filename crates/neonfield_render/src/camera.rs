//! Perspective camera
//!
//! The backdrop camera never moves: it sits on the +Z axis looking at the
//! origin. Only the aspect ratio changes, on resize.

use neonfield_core::SceneError;
use neonfield_math::{mat4, Mat4, Vec3};

/// Fixed-pose perspective camera
#[derive(Clone, Debug, PartialEq)]
pub struct PerspectiveCamera {
    /// Vertical field of view in degrees
    pub fov_degrees: f32,
    /// Near clipping plane
    pub near: f32,
    /// Far clipping plane
    pub far: f32,
    /// Eye position
    pub position: Vec3,
    /// Point the camera looks at
    pub target: Vec3,
    aspect: f32,
}

impl Default for PerspectiveCamera {
    fn default() -> Self {
        Self::new(75.0, 0.1, 1000.0, Vec3::new(0.0, 0.0, 5.0))
    }
}

impl PerspectiveCamera {
    /// Create a camera at `position` looking at the origin, with a square aspect
    pub fn new(fov_degrees: f32, near: f32, far: f32, position: Vec3) -> Self {
        Self {
            fov_degrees,
            near,
            far,
            position,
            target: Vec3::ZERO,
            aspect: 1.0,
        }
    }

    /// Reject parameters that would make the projection degenerate
    ///
    /// The field of view must lie strictly between 0 and 180 degrees, the near
    /// plane must be positive and closer than the far plane, and the eye must
    /// not sit on its target.
    pub fn validate(&self) -> Result<(), SceneError> {
        let fov = self.fov_degrees;
        if !(fov.is_finite() && fov > 0.0 && fov < 180.0) {
            return Err(SceneError::InvalidRange { what: "camera fov", min: fov, max: fov });
        }
        if !(self.near.is_finite() && self.far.is_finite() && self.near > 0.0 && self.near < self.far) {
            return Err(SceneError::InvalidRange {
                what: "camera clip plane",
                min: self.near,
                max: self.far,
            });
        }
        let distance = (self.position - self.target).length();
        if !(distance.is_finite() && distance > 0.0) {
            return Err(SceneError::InvalidRange {
                what: "camera distance",
                min: distance,
                max: distance,
            });
        }
        Ok(())
    }

    /// Recompute the aspect ratio from a viewport size
    ///
    /// Zero-height viewports (minimized windows) keep the previous aspect.
    pub fn resize(&mut self, width: u32, height: u32) {
        if width > 0 && height > 0 {
            self.aspect = width as f32 / height as f32;
        }
    }

    #[inline]
    pub fn aspect(&self) -> f32 {
        self.aspect
    }

    /// World to view transform
    pub fn view_matrix(&self) -> Mat4 {
        mat4::look_at(self.position, self.target, Vec3::Y)
    }

    /// View to clip transform with wgpu's `[0, 1]` depth range
    pub fn projection_matrix(&self) -> Mat4 {
        mat4::perspective_zero_to_one(self.fov_degrees.to_radians(), self.aspect, self.near, self.far)
    }

    /// Combined world to clip transform
    pub fn view_projection(&self) -> Mat4 {
        mat4::mul(self.projection_matrix(), self.view_matrix())
    }

    /// Map normalized device coordinates back into world space
    ///
    /// `ndc.z` follows the symmetric `[-1, 1]` depth convention, so `z = 0`
    /// lands between the near and far planes in NDC, close to the near plane
    /// in world space.
    pub fn unproject(&self, ndc: Vec3) -> Vec3 {
        let projection = mat4::perspective(self.fov_degrees.to_radians(), self.aspect, self.near, self.far);
        let clip_from_world = mat4::mul(projection, self.view_matrix());
        match mat4::inverse(clip_from_world) {
            Some(world_from_clip) => mat4::project_point(world_from_clip, ndc),
            None => {
                log::warn!("Camera matrix not invertible, unprojecting to camera position");
                self.position
            }
        }
    }

    /// Map a world-space point to normalized device coordinates
    pub fn project(&self, world: Vec3) -> Vec3 {
        let projection = mat4::perspective(self.fov_degrees.to_radians(), self.aspect, self.near, self.far);
        mat4::project_point(mat4::mul(projection, self.view_matrix()), world)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_pose() {
        let camera = PerspectiveCamera::default();
        assert_eq!(camera.position, Vec3::new(0.0, 0.0, 5.0));
        assert_eq!(camera.fov_degrees, 75.0);
        assert_eq!(camera.aspect(), 1.0);
    }

    #[test]
    fn test_validate_rejects_degenerate_projection() {
        assert!(PerspectiveCamera::default().validate().is_ok());

        let zero_fov = PerspectiveCamera::new(0.0, 0.1, 1000.0, Vec3::new(0.0, 0.0, 5.0));
        assert_eq!(
            zero_fov.validate(),
            Err(SceneError::InvalidRange { what: "camera fov", min: 0.0, max: 0.0 })
        );

        let inverted = PerspectiveCamera::new(75.0, 10.0, 1.0, Vec3::new(0.0, 0.0, 5.0));
        assert!(matches!(
            inverted.validate(),
            Err(SceneError::InvalidRange { what: "camera clip plane", .. })
        ));

        let zero_near = PerspectiveCamera::new(75.0, 0.0, 1000.0, Vec3::new(0.0, 0.0, 5.0));
        assert!(zero_near.validate().is_err());

        let on_target = PerspectiveCamera::new(75.0, 0.1, 1000.0, Vec3::ZERO);
        assert!(matches!(
            on_target.validate(),
            Err(SceneError::InvalidRange { what: "camera distance", .. })
        ));
    }

    #[test]
    fn test_resize_is_idempotent() {
        let mut camera = PerspectiveCamera::default();
        camera.resize(1920, 1080);
        let first = camera.clone();
        camera.resize(1920, 1080);
        assert_eq!(camera, first);
        assert!((camera.aspect() - 16.0 / 9.0).abs() < 1e-6);
    }

    #[test]
    fn test_zero_height_keeps_aspect() {
        let mut camera = PerspectiveCamera::default();
        camera.resize(800, 400);
        camera.resize(800, 0);
        assert_eq!(camera.aspect(), 2.0);
    }

    #[test]
    fn test_unproject_centre() {
        let camera = PerspectiveCamera::default();
        let p = camera.unproject(Vec3::ZERO);
        assert!(p.x.abs() < 1e-4);
        assert!(p.y.abs() < 1e-4);
        // z_ndc = 0 sits at view depth 2fn / (f + n)
        let depth = 2.0 * 1000.0 * 0.1 / 1000.1;
        assert!((p.z - (5.0 - depth)).abs() < 1e-3, "got {}", p.z);
    }

    #[test]
    fn test_project_inverts_unproject() {
        let mut camera = PerspectiveCamera::default();
        camera.resize(1280, 720);
        let ndc = Vec3::new(0.5, -0.25, 0.0);
        let back = camera.project(camera.unproject(ndc));
        assert!((back - ndc).length() < 1e-3);
    }

    #[test]
    fn test_origin_projects_to_centre() {
        let camera = PerspectiveCamera::default();
        let vp = camera.view_projection();
        let clip = mat4::transform_vec4(vp, [0.0, 0.0, 0.0, 1.0]);
        assert!(clip[0].abs() < 1e-6 && clip[1].abs() < 1e-6);
        let depth = clip[2] / clip[3];
        assert!((0.0..=1.0).contains(&depth));
    }
}
