use bevy::prelude::*;
use bevy::input::mouse::{AccumulatedMouseMotion, AccumulatedMouseScroll};

pub struct OrbitCamPlugin;

impl Plugin for OrbitCamPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Update, update);
    }
}

// pitch limit, just short of the poles
const MAX_PITCH: f32 = 1.5;

// camera component
#[derive(Component, Debug)]
pub struct OrbitCamera {
    pub radius: f32,
    pub speed: f32,
    pub angle: f32,
    pub v_angle: f32,
    pub is_dragging: bool,
    pub target: Vec3,

    pub min_radius: f32,
    pub max_radius: f32,

    // off while a quote is showing
    pub enabled: bool,
}

impl Default for OrbitCamera {
    fn default() -> Self {
        Self {
            radius: 10.0,
            speed: 0.5,
            angle: std::f32::consts::FRAC_PI_2,
            v_angle: 0.0,
            is_dragging: false,
            target: Vec3::ZERO,

            min_radius: 0.0,
            max_radius: 100.0,

            enabled: true,
        }
    }
}

/// One frame of pointer input
#[derive(Debug, Default, Clone, Copy)]
pub struct OrbitInput {
    pub pressed: bool,
    pub released: bool,
    pub motion: Vec2,
    pub scroll: f32,
}

impl OrbitCamera {
    /// Orbit that puts the camera at `position`, looking at the origin
    pub fn from_position(position: Vec3) -> Self {
        let radius = position.length();
        Self {
            radius,
            angle: position.z.atan2(position.x),
            v_angle: (position.y / radius).asin(),
            ..default()
        }
    }

    // allow custom zoom limits
    pub fn with_zoom_limits(mut self, min_radius: f32, max_radius: f32) -> Self {
        self.min_radius = min_radius;
        self.max_radius = max_radius;
        self
    }

    // calculate world position from spherical coordinates
    // https://en.wikipedia.org/wiki/Spherical_coordinate_system#Cartesian_coordinates
    pub fn calculate_position(&self) -> Vec3 {
        let x = self.radius * self.v_angle.cos() * self.angle.cos();
        let y = self.radius * self.v_angle.sin();
        let z = self.radius * self.v_angle.cos() * self.angle.sin();

        self.target + Vec3::new(x, y, z)
    }

    /// Feed one frame of input. Disabled controls drop any drag and ignore input.
    pub fn drive(&mut self, input: OrbitInput) {
        if !self.enabled {
            self.is_dragging = false;
            return;
        }

        // handle mouse drag
        if input.pressed {
            self.is_dragging = true;
        }
        if input.released {
            self.is_dragging = false;
        }

        // update camera angles
        if self.is_dragging {
            self.angle += input.motion.x * self.speed * 0.01;
            self.v_angle += input.motion.y * self.speed * 0.01;
            // clamp pitch
            self.v_angle = self.v_angle.clamp(-MAX_PITCH, MAX_PITCH);
        }

        // handle mouse scroll
        if input.scroll != 0.0 {
            self.radius -= input.scroll;
            self.radius = self.radius.clamp(self.min_radius, self.max_radius);
        }
    }
}

// runs every frame, enabled or not, so the transform is always current
fn update(
    mut camera_query: Query<(&mut Transform, &mut OrbitCamera)>,
    interactions: Query<&Interaction>,
    mouse_buttons: Res<ButtonInput<MouseButton>>,
    mouse_motion: Res<AccumulatedMouseMotion>,
    mouse_scroll: Res<AccumulatedMouseScroll>,
) {
    // a click on a button belongs to the UI, not the scene
    let over_ui = interactions.iter().any(|interaction| *interaction != Interaction::None);

    let input = OrbitInput {
        pressed: mouse_buttons.just_pressed(MouseButton::Left) && !over_ui,
        released: mouse_buttons.just_released(MouseButton::Left),
        motion: mouse_motion.delta,
        scroll: mouse_scroll.delta.y,
    };

    for (mut transform, mut camera) in camera_query.iter_mut() {
        camera.drive(input);

        // update camera position/orientation
        transform.translation = camera.calculate_position();
        transform.look_at(camera.target, Vec3::Y);
    }
}
