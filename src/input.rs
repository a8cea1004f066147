//! Input state tracking and camera control mapping.
//!
//! Converts raw winit window events into camera mutations, applied once
//! per frame. Held movement keys translate the first-person camera along
//! its basis vectors; mouse drags rotate (relative deltas first-person,
//! absolute angles orbit); scroll zooms (FOV first-person, radius
//! orbit). Tab toggles the control scheme.
//!
//! The optional ground clamp lives here, not in the camera: the camera
//! does no collision of its own.

use glam::{Vec2, Vec3};
use rustc_hash::FxHashSet;
use winit::event::{ElementState, MouseButton, MouseScrollDelta, WindowEvent};
use winit::keyboard::{KeyCode, PhysicalKey};

use crate::camera::CameraRig;
use crate::options::CameraOptions;

/// Transient input state between frames.
#[derive(Debug, Default)]
pub struct InputState {
    pressed: FxHashSet<KeyCode>,
    mouse_pressed: bool,
    last_mouse_pos: Option<Vec2>,
    mouse_delta: Vec2,
    scroll_delta: f32,
    orbit_yaw_deg: f32,
    orbit_pitch_deg: f32,
    toggle_requested: bool,
}

impl InputState {
    /// Create an empty input state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Track one window event. Returns true if the event was consumed.
    pub fn handle_window_event(&mut self, event: &WindowEvent) -> bool {
        match event {
            WindowEvent::KeyboardInput { event, .. } => {
                let PhysicalKey::Code(code) = event.physical_key else {
                    return false;
                };
                match event.state {
                    ElementState::Pressed => {
                        if code == KeyCode::Tab && !event.repeat {
                            self.toggle_requested = true;
                        }
                        let _ = self.pressed.insert(code);
                    }
                    ElementState::Released => {
                        let _ = self.pressed.remove(&code);
                    }
                }
                true
            }
            WindowEvent::MouseInput {
                button: MouseButton::Left,
                state,
                ..
            } => {
                self.mouse_pressed = *state == ElementState::Pressed;
                true
            }
            WindowEvent::CursorMoved { position, .. } => {
                let current =
                    Vec2::new(position.x as f32, position.y as f32);
                if let Some(last) = self.last_mouse_pos {
                    if self.mouse_pressed {
                        self.mouse_delta += current - last;
                    }
                }
                self.last_mouse_pos = Some(current);
                true
            }
            WindowEvent::MouseWheel { delta, .. } => {
                self.scroll_delta += match delta {
                    MouseScrollDelta::LineDelta(_, y) => *y,
                    MouseScrollDelta::PixelDelta(pos) => {
                        pos.y as f32 * 0.01
                    }
                };
                true
            }
            _ => false,
        }
    }

    /// Apply the frame's accumulated input to the rig and reset the
    /// per-frame accumulators.
    ///
    /// At most one rotate and one translate reach the rig per call.
    pub fn apply(
        &mut self,
        rig: &mut CameraRig,
        dt: f32,
        options: &CameraOptions,
    ) {
        if self.toggle_requested {
            self.toggle_requested = false;
            rig.toggle();
            // Adopt the new orbit pose so the next drag continues from
            // it instead of jumping.
            if let CameraRig::Orbit(cam) = rig {
                self.orbit_yaw_deg = cam.yaw().to_degrees();
                self.orbit_pitch_deg = cam.pitch().to_degrees();
            }
        }

        let sens = options.mouse_sensitivity;
        match rig {
            CameraRig::FirstPerson(cam) => {
                if self.mouse_delta != Vec2::ZERO {
                    cam.rotate(
                        -self.mouse_delta.x * sens,
                        -self.mouse_delta.y * sens,
                    );
                }
                if self.scroll_delta != 0.0 {
                    cam.set_fov_deg(
                        cam.fov_deg()
                            - self.scroll_delta * options.zoom_sensitivity,
                    );
                }

                let mut offset = Vec3::ZERO;
                for (key, dir) in [
                    (KeyCode::KeyW, cam.look()),
                    (KeyCode::KeyS, -cam.look()),
                    (KeyCode::KeyD, cam.right()),
                    (KeyCode::KeyA, -cam.right()),
                    (KeyCode::KeyE, cam.up()),
                    (KeyCode::KeyQ, -cam.up()),
                ] {
                    if self.pressed.contains(&key) {
                        offset += dir;
                    }
                }
                if offset != Vec3::ZERO {
                    cam.translate(offset * options.move_speed * dt);
                }

                if let Some(ground) = options.ground_height {
                    let mut pos = cam.position();
                    if pos.y < ground {
                        pos.y = ground;
                        cam.set_position(pos);
                    }
                }
            }
            CameraRig::Orbit(cam) => {
                if self.mouse_delta != Vec2::ZERO {
                    self.orbit_yaw_deg += self.mouse_delta.x * sens;
                    self.orbit_pitch_deg += self.mouse_delta.y * sens;
                    cam.rotate(self.orbit_yaw_deg, self.orbit_pitch_deg);
                }
                if self.scroll_delta != 0.0 {
                    cam.set_radius(
                        cam.radius()
                            - self.scroll_delta * options.zoom_sensitivity,
                    );
                }
            }
        }

        self.mouse_delta = Vec2::ZERO;
        self.scroll_delta = 0.0;
    }
}
