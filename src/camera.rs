use bevy::input::mouse::{MouseMotion, MouseWheel};
use bevy::prelude::*;

const ORBIT_SENSITIVITY: f32 = 0.005;
const ZOOM_STEP: f32 = 0.5;
const MIN_RADIUS: f32 = 2.0;
const MAX_PITCH: f32 = 1.54; // just short of straight up/down

/// Spherical-coordinate orbit state around a fixed focus point.
#[derive(Component, Debug)]
pub struct OrbitCamera {
    pub focus: Vec3,
    pub radius: f32,
    pub yaw: f32,
    pub pitch: f32,
}

impl OrbitCamera {
    /// Orbit state whose eye sits at `position` looking at `focus`.
    pub fn looking_from(position: Vec3, focus: Vec3) -> Self {
        let offset = position - focus;
        let radius = offset.length().max(MIN_RADIUS);
        Self {
            focus,
            radius,
            yaw: offset.x.atan2(offset.z),
            pitch: (offset.y / radius).asin(),
        }
    }

    /// Eye position for the current orbit state.
    pub fn eye(&self) -> Vec3 {
        self.focus
            + self.radius
                * Vec3::new(
                    self.pitch.cos() * self.yaw.sin(),
                    self.pitch.sin(),
                    self.pitch.cos() * self.yaw.cos(),
                )
    }

    pub fn rotate(&mut self, dx: f32, dy: f32) {
        self.yaw -= dx * ORBIT_SENSITIVITY;
        self.pitch = (self.pitch + dy * ORBIT_SENSITIVITY).clamp(-MAX_PITCH, MAX_PITCH);
    }

    pub fn zoom(&mut self, steps: f32) {
        self.radius = (self.radius - steps * ZOOM_STEP).max(MIN_RADIUS);
    }
}

/// Secondary-button drag orbits, the wheel zooms.
pub fn orbit_camera(
    buttons: Res<ButtonInput<MouseButton>>,
    mut motion: EventReader<MouseMotion>,
    mut wheel: EventReader<MouseWheel>,
    mut cameras: Query<(&mut OrbitCamera, &mut Transform)>,
) {
    let drag: Vec2 = if buttons.pressed(MouseButton::Right) {
        motion.read().map(|m| m.delta).sum()
    } else {
        motion.clear();
        Vec2::ZERO
    };
    let scroll: f32 = wheel.read().map(|w| w.y).sum();

    for (mut orbit, mut transform) in &mut cameras {
        if drag != Vec2::ZERO {
            orbit.rotate(drag.x, drag.y);
        }
        if scroll != 0.0 {
            orbit.zoom(scroll);
        }
        let focus = orbit.focus;
        *transform = Transform::from_translation(orbit.eye()).looking_at(focus, Vec3::Y);
    }
}
