//! # Camera State Management
//!
//! Owns the viewer: the camera itself, the projection, and the controller
//! that buffers movement intent between input translation and the
//! per-frame update.
//!
//! Rotation actions (pan keys, pointer drag) apply to the camera the
//! moment they arrive; translation is integrated once per frame against
//! the elapsed time, matching the tick loop's movement model.

use camera::CameraController;
use cgmath::Point3;

use super::PlayerAction;

pub mod camera;

/// Where a fresh editing session's eye starts.
pub const START_EYE: Point3<f32> = Point3::new(0.0, 2.0, 5.0);
/// Where a fresh editing session looks.
pub const START_AT: Point3<f32> = Point3::new(0.0, 0.0, 0.0);

/// Near clipping plane distance.
const Z_NEAR: f32 = 0.1;
/// Far clipping plane distance.
const Z_FAR: f32 = 1000.0;

/// Manages the complete camera system: pose, projection, and movement.
pub struct CameraState {
    /// The current camera pose.
    pub camera: camera::Camera,
    /// Projection settings for the current viewport.
    pub projection: camera::Projection,
    /// Buffers movement intent for the per-frame update.
    pub camera_controller: CameraController,
}

impl CameraState {
    /// Creates a camera state at the session's starting pose, projecting
    /// onto the given viewport.
    pub fn new(viewport_width: u32, viewport_height: u32) -> Self {
        let mut camera = camera::Camera::new();
        camera.look_at(START_EYE, START_AT);

        let projection =
            camera::Projection::new(viewport_width, viewport_height, camera.fov, Z_NEAR, Z_FAR);

        CameraState {
            camera,
            projection,
            camera_controller: CameraController::new(),
        }
    }

    /// Processes the player's actions for this frame.
    ///
    /// Pans and drags rotate the camera immediately; movement flags are
    /// buffered in the controller until [`CameraState::update`].
    pub fn intake_actions(&mut self, actions: &PlayerAction) {
        self.camera_controller.intake_actions(actions);

        if actions.pan_left {
            self.camera.pan_left();
        }
        if actions.pan_right {
            self.camera.pan_right();
        }
        if let Some((delta_x, delta_y)) = actions.rotate_view {
            self.camera.drag(delta_x as f32, delta_y as f32);
        }
    }

    /// Integrates buffered movement against the elapsed frame time.
    pub fn update(&mut self, dt: web_time::Duration) {
        if self.camera_controller.has_updates() {
            self.camera.apply_controller(&self.camera_controller, dt);
        }
    }

    /// Updates the projection after a viewport resize.
    pub fn resize_viewport(&mut self, width: u32, height: u32) {
        self.projection.resize(width, height);
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use web_time::Duration;

    use super::*;

    #[test]
    fn starts_at_the_session_pose() {
        let state = CameraState::new(800, 600);
        assert_eq!(state.camera.eye, START_EYE);
        assert_eq!(state.camera.at, START_AT);
    }

    #[test]
    fn pan_actions_apply_immediately() {
        let mut state = CameraState::new(800, 600);
        let at_before = state.camera.at;

        let mut actions = PlayerAction::default();
        actions.pan_left = true;
        state.intake_actions(&actions);

        assert_ne!(state.camera.at, at_before);
    }

    #[test]
    fn movement_waits_for_the_frame_update() {
        let mut state = CameraState::new(800, 600);
        let eye_before = state.camera.eye;

        let mut actions = PlayerAction::default();
        actions.move_forward = true;
        state.intake_actions(&actions);
        assert_eq!(state.camera.eye, eye_before);

        state.update(Duration::from_millis(500));
        assert_ne!(state.camera.eye, eye_before);
    }

    #[test]
    fn idle_update_leaves_the_camera_alone() {
        let mut state = CameraState::new(800, 600);
        let eye_before = state.camera.eye;

        state.intake_actions(&PlayerAction::default());
        state.update(Duration::from_secs(1));

        assert_relative_eq!(state.camera.eye.x, eye_before.x);
        assert_relative_eq!(state.camera.eye.z, eye_before.z);
    }
}
