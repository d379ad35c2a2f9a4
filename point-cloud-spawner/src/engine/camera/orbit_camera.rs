use bevy::core_pipeline::tonemapping::Tonemapping;
use bevy::input::mouse::{MouseMotion, MouseScrollUnit, MouseWheel};
use bevy::math::EulerRot;
use bevy::prelude::*;
use constants::camera::{
    CAMERA_DAMPING, CAMERA_EYE, CAMERA_FAR, CAMERA_FOV_DEGREES, CAMERA_MAX_DISTANCE,
    CAMERA_MIN_DISTANCE, CAMERA_NEAR, ORBIT_SENSITIVITY, PAN_SENSITIVITY, ZOOM_STEP,
};

/// Keeps the camera off the poles so `looking_at` stays well defined.
const PITCH_LIMIT: f32 = std::f32::consts::FRAC_PI_2 - 0.01;

/// Finger spans below this many pixels are too noisy to zoom on.
const MIN_PINCH_SPAN: f32 = 4.0;

/// Orbit controls: the camera sits `distance` away from `focus_point` at the
/// given yaw (around +Y) and pitch (elevation above the XZ plane).
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct OrbitCamera {
    pub focus_point: Vec3,
    pub distance: f32,
    pub yaw: f32,
    pub pitch: f32,
}

impl OrbitCamera {
    pub fn looking_at(eye: Vec3, focus_point: Vec3) -> Self {
        let offset = eye - focus_point;
        let length = offset.length().max(f32::EPSILON);

        Self {
            focus_point,
            distance: length.clamp(CAMERA_MIN_DISTANCE, CAMERA_MAX_DISTANCE),
            yaw: offset.x.atan2(offset.z),
            pitch: (offset.y / length).asin().clamp(-PITCH_LIMIT, PITCH_LIMIT),
        }
    }

    pub fn rotation(&self) -> Quat {
        Quat::from_euler(EulerRot::YXZ, self.yaw, -self.pitch, 0.0)
    }

    pub fn eye(&self) -> Vec3 {
        self.focus_point + self.rotation() * Vec3::new(0.0, 0.0, self.distance)
    }

    pub fn target_transform(&self) -> Transform {
        Transform::from_translation(self.eye()).looking_at(self.focus_point, Vec3::Y)
    }

    /// Rotate around the focus point by a pointer delta in pixels.
    pub fn orbit(&mut self, delta: Vec2) {
        self.yaw -= delta.x * ORBIT_SENSITIVITY;
        self.pitch = (self.pitch + delta.y * ORBIT_SENSITIVITY).clamp(-PITCH_LIMIT, PITCH_LIMIT);
    }

    /// Slide the focus point in the view plane; scaled by distance so the
    /// scene tracks the pointer at any zoom.
    pub fn pan(&mut self, delta: Vec2) {
        let rotation = self.rotation();
        let right = rotation * Vec3::X;
        let up = rotation * Vec3::Y;
        let scale = self.distance * PAN_SENSITIVITY;
        self.focus_point += (right * -delta.x + up * delta.y) * scale;
    }

    /// Positive `lines` moves towards the focus point.
    pub fn zoom(&mut self, lines: f32) {
        self.distance =
            (self.distance * ZOOM_STEP.powf(lines)).clamp(CAMERA_MIN_DISTANCE, CAMERA_MAX_DISTANCE);
    }

    /// Two-finger pinch: spreading the fingers moves towards the focus point.
    pub fn pinch(&mut self, previous_span: f32, current_span: f32) {
        if previous_span < MIN_PINCH_SPAN || current_span < MIN_PINCH_SPAN {
            return;
        }
        self.distance = (self.distance * previous_span / current_span)
            .clamp(CAMERA_MIN_DISTANCE, CAMERA_MAX_DISTANCE);
    }
}

impl Default for OrbitCamera {
    fn default() -> Self {
        Self::looking_at(Vec3::from_array(CAMERA_EYE), Vec3::ZERO)
    }
}

pub fn spawn_orbit_camera(commands: &mut Commands) {
    let orbit = OrbitCamera::default();

    commands.spawn((
        Camera3d::default(),
        Projection::Perspective(PerspectiveProjection {
            fov: CAMERA_FOV_DEGREES.to_radians(),
            near: CAMERA_NEAR,
            far: CAMERA_FAR,
            ..default()
        }),
        // Sprite colours are written as-is.
        Tonemapping::None,
        orbit.target_transform(),
    ));
    commands.insert_resource(orbit);
}

/// Pointer-driven orbit/pan/zoom, eased into the camera transform.
pub fn orbit_camera_controller(
    mut camera_query: Query<&mut Transform, With<Camera3d>>,
    mut orbit: ResMut<OrbitCamera>,
    mouse_button: Res<ButtonInput<MouseButton>>,
    mut mouse_motion: EventReader<MouseMotion>,
    mut scroll_events: EventReader<MouseWheel>,
    touches: Res<Touches>,
    time: Res<Time>,
) {
    let Ok(mut camera_transform) = camera_query.single_mut() else {
        return;
    };

    let mouse_delta: Vec2 = mouse_motion.read().map(|m| m.delta).sum();
    if mouse_delta != Vec2::ZERO {
        if mouse_button.pressed(MouseButton::Left) {
            orbit.orbit(mouse_delta);
        } else if mouse_button.any_pressed([MouseButton::Right, MouseButton::Middle]) {
            orbit.pan(mouse_delta);
        }
    }

    // One finger orbits; two fingers pinch to zoom and drag to pan.
    match touches.iter().collect::<Vec<_>>().as_slice() {
        [touch] => {
            let delta = touch.delta();
            if delta != Vec2::ZERO {
                orbit.orbit(delta);
            }
        }
        [first, second] => {
            let previous_span = first.previous_position().distance(second.previous_position());
            let current_span = first.position().distance(second.position());
            orbit.pinch(previous_span, current_span);

            let delta = (first.delta() + second.delta()) * 0.5;
            if delta != Vec2::ZERO {
                orbit.pan(delta);
            }
        }
        _ => {}
    }

    let mut scroll_accum = 0.0;
    for ev in scroll_events.read() {
        scroll_accum += match ev.unit {
            MouseScrollUnit::Line => ev.y,
            MouseScrollUnit::Pixel => ev.y * 0.05,
        };
    }
    if scroll_accum.abs() > f32::EPSILON {
        orbit.zoom(scroll_accum);
    }

    let target = orbit.target_transform();
    let lerp_speed = (CAMERA_DAMPING * time.delta_secs()).min(1.0);
    camera_transform.translation = camera_transform
        .translation
        .lerp(target.translation, lerp_speed);
    camera_transform.rotation = camera_transform.rotation.slerp(target.rotation, lerp_speed);
}
