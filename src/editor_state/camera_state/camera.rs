//! # Camera Implementation
//!
//! The viewer model of the editor: an eye/at/up camera with first-person
//! movement, immediate pan actions, drag-to-look rotation, and the
//! projection settings the renderer consumes.

use cgmath::{Deg, InnerSpace, Matrix3, Matrix4, Point3, Rad, SquareMatrix, Vector3, Vector4};
use web_time::Duration;

use crate::editor_state::PlayerAction;

/// Vertical field of view of a fresh camera, in degrees.
pub const DEFAULT_FOV_DEGREES: f32 = 60.0;
/// Movement speed of a fresh camera, in world units per second.
pub const DEFAULT_SPEED: f32 = 1.0;
/// How far a single pan action rotates the look vector, in degrees.
pub const PAN_ANGLE_DEGREES: f32 = 5.0;
/// Degrees of look rotation per pixel of pointer drag.
pub const DRAG_DEGREES_PER_PIXEL: f32 = 0.05;

/// Represents the viewer in world space.
///
/// The camera is described by an eye position, a look target, and an up
/// vector. Movement displaces eye and target together; pan and drag rotate
/// the target around the eye.
#[derive(Clone, Debug)]
pub struct Camera {
    /// The viewer's position in world space.
    pub eye: Point3<f32>,
    /// The point the viewer looks at.
    pub at: Point3<f32>,
    /// The world-up reference vector.
    pub up: Vector3<f32>,
    /// Vertical field of view.
    pub fov: Deg<f32>,
    /// Movement speed in world units per second.
    pub speed: f32,
}

impl Camera {
    /// Creates a camera at the origin looking down negative Z.
    pub fn new() -> Self {
        Camera {
            eye: Point3::new(0.0, 0.0, 0.0),
            at: Point3::new(0.0, 0.0, -1.0),
            up: Vector3::unit_y(),
            fov: Deg(DEFAULT_FOV_DEGREES),
            speed: DEFAULT_SPEED,
        }
    }

    /// Repositions the eye and look target in one step.
    pub fn look_at(&mut self, eye: Point3<f32>, at: Point3<f32>) {
        self.eye = eye;
        self.at = at;
    }

    /// The normalized look direction, from eye toward the target.
    pub fn direction(&self) -> Vector3<f32> {
        (self.at - self.eye).normalize()
    }

    /// Moves eye and target along the look direction.
    pub fn move_forward(&mut self, dt: f32) {
        let step = self.direction() * self.speed * dt;
        self.eye += step;
        self.at += step;
    }

    /// Moves eye and target against the look direction.
    pub fn move_backwards(&mut self, dt: f32) {
        let step = self.direction() * self.speed * dt;
        self.eye -= step;
        self.at -= step;
    }

    /// Strafes eye and target to the left of the look direction.
    pub fn move_left(&mut self, dt: f32) {
        let side = self.direction().cross(self.up);
        let step = side * self.speed * dt;
        self.eye -= step;
        self.at -= step;
    }

    /// Strafes eye and target to the right of the look direction.
    pub fn move_right(&mut self, dt: f32) {
        let side = self.direction().cross(self.up);
        let step = side * self.speed * dt;
        self.eye += step;
        self.at += step;
    }

    /// Rotates the look target around the eye by a fixed angle to the left.
    ///
    /// Applied immediately on the triggering key press, not integrated over
    /// frame time.
    pub fn pan_left(&mut self) {
        self.rotate_about_up(Deg(PAN_ANGLE_DEGREES));
    }

    /// Rotates the look target around the eye by a fixed angle to the right.
    pub fn pan_right(&mut self) {
        self.rotate_about_up(Deg(-PAN_ANGLE_DEGREES));
    }

    fn rotate_about_up(&mut self, angle: Deg<f32>) {
        let forward = self.at - self.eye;
        let rotated = Matrix3::from_angle_y(angle) * forward;
        self.at = self.eye + rotated;
    }

    /// Rotates the look target by a pointer drag: yaw about world up by the
    /// horizontal delta, then pitch about the side axis by the vertical
    /// delta, both scaled by `DRAG_DEGREES_PER_PIXEL`.
    pub fn drag(&mut self, delta_x: f32, delta_y: f32) {
        let forward = self.at - self.eye;
        let side = forward.cross(self.up).normalize();

        let pitched =
            Matrix3::from_axis_angle(side, Deg(-delta_y * DRAG_DEGREES_PER_PIXEL)) * forward;
        let rotated = Matrix3::from_angle_y(Deg(-delta_x * DRAG_DEGREES_PER_PIXEL)) * pitched;
        self.at = self.eye + rotated;
    }

    /// Applies one frame of controller movement. Forward wins over backward
    /// and left wins over right when both keys are held.
    pub fn apply_controller(&mut self, controller: &CameraController, dt: Duration) {
        let dt = dt.as_secs_f32();

        if controller.move_forward {
            self.move_forward(dt);
        } else if controller.move_backward {
            self.move_backwards(dt);
        }

        if controller.move_left {
            self.move_left(dt);
        } else if controller.move_right {
            self.move_right(dt);
        }
    }

    /// Calculates the view matrix for this camera.
    pub fn view_matrix(&self) -> Matrix4<f32> {
        Matrix4::look_at_rh(self.eye, self.at, self.up)
    }
}

impl Default for Camera {
    fn default() -> Self {
        Camera::new()
    }
}

/// Represents a camera's projection parameters.
#[derive(Clone, Debug)]
pub struct Projection {
    /// Aspect ratio (width / height).
    aspect: f32,
    /// Vertical field of view.
    fovy: Rad<f32>,
    /// Near clipping plane distance.
    znear: f32,
    /// Far clipping plane distance.
    zfar: f32,
}

impl Projection {
    /// Creates a new projection for the given viewport.
    pub fn new<F: Into<Rad<f32>>>(width: u32, height: u32, fovy: F, znear: f32, zfar: f32) -> Self {
        Self {
            aspect: width as f32 / height as f32,
            fovy: fovy.into(),
            znear,
            zfar,
        }
    }

    /// Updates the aspect ratio after a viewport resize.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.aspect = width as f32 / height as f32;
    }

    /// Calculates the perspective projection matrix.
    pub fn calc_matrix(&self) -> Matrix4<f32> {
        cgmath::perspective(self.fovy, self.aspect, self.znear, self.zfar)
    }
}

/// GPU-friendly camera data for the renderer's uniform buffer.
///
/// Matrices are stored as plain 4x4 float arrays so the struct can be cast
/// to bytes and uploaded directly.
#[repr(C)]
#[derive(Debug, Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub struct CameraUniform {
    /// Combined projection * view matrix.
    pub view_proj: [[f32; 4]; 4],
    /// Projection * view with the translation stripped, for the skybox.
    pub skybox_view_proj: [[f32; 4]; 4],
    /// Eye position, padded to four floats.
    pub position: [f32; 4],
}

impl CameraUniform {
    /// Creates a uniform with identity matrices and zero position.
    pub fn new() -> Self {
        Self {
            view_proj: Matrix4::identity().into(),
            skybox_view_proj: Matrix4::identity().into(),
            position: [0.0, 0.0, 0.0, 0.0],
        }
    }

    /// Recomputes both matrices and the position from camera state.
    pub fn update_view_proj_and_pos(&mut self, camera: &Camera, projection: &Projection) {
        let view = camera.view_matrix();
        let proj = projection.calc_matrix();
        self.view_proj = (proj * view).into();

        // skybox follows the viewer: same rotation, no translation
        let mut skybox_view = view;
        skybox_view.w = Vector4::new(0.0, 0.0, 0.0, 1.0);
        self.skybox_view_proj = (proj * skybox_view).into();

        self.position = [camera.eye.x, camera.eye.y, camera.eye.z, 0.0];
    }
}

impl Default for CameraUniform {
    fn default() -> Self {
        CameraUniform::new()
    }
}

/// Tracks movement intent between input translation and the per-frame
/// camera update.
///
/// Press/release events toggle the flags; `Camera::apply_controller`
/// consumes them once per frame with the elapsed time.
#[derive(Debug, Default)]
pub struct CameraController {
    move_forward: bool,
    move_backward: bool,
    move_left: bool,
    move_right: bool,
}

impl CameraController {
    /// Creates a controller with no movement intent.
    pub fn new() -> Self {
        Self::default()
    }

    /// Copies this frame's movement intent from the player's actions.
    pub fn intake_actions(&mut self, actions: &PlayerAction) {
        self.move_forward = actions.move_forward;
        self.move_backward = actions.move_backward;
        self.move_left = actions.move_left;
        self.move_right = actions.move_right;
    }

    /// Whether any movement is pending for this frame.
    pub fn has_updates(&self) -> bool {
        self.move_forward || self.move_backward || self.move_left || self.move_right
    }
}
