//! Window sizing and the scene camera. The renderer's surface follows the
//! window on its own; this keeps our copy of the size and the camera
//! aspect in step with every resize event.

use bevy::prelude::*;
use bevy::window::{PrimaryWindow, WindowResized};

use crate::config::{
    CAMERA_DISTANCE, CAMERA_FAR, CAMERA_FOV_DEGREES, CAMERA_NEAR, PIXEL_RATIO, SceneConfig,
};
use crate::systems::camera::OrbitCamera;

pub struct ViewportPlugin;

impl Plugin for ViewportPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<Viewport>()
            .add_systems(Startup, (configure_window, spawn_camera).chain())
            .add_systems(Update, on_resize);
    }
}

/// Current window size in logical pixels
#[derive(Resource, Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Default for Viewport {
    fn default() -> Self {
        Self { width: 1280.0, height: 720.0 }
    }
}

impl Viewport {
    pub fn aspect(&self) -> f32 {
        if self.height > 0.0 { self.width / self.height } else { 1.0 }
    }

    /// Store a new size and return the aspect ratio it implies.
    pub fn resize(&mut self, width: f32, height: f32) -> f32 {
        self.width = width;
        self.height = height;
        self.aspect()
    }
}

// scene camera tag
#[derive(Component)]
pub struct MainCamera;

fn perspective(aspect_ratio: f32) -> Projection {
    Projection::Perspective(PerspectiveProjection {
        fov: CAMERA_FOV_DEGREES.to_radians(),
        near: CAMERA_NEAR,
        far: CAMERA_FAR,
        aspect_ratio,
    })
}

fn configure_window(
    mut windows: Query<&mut Window, With<PrimaryWindow>>,
    mut viewport: ResMut<Viewport>,
    config: Res<SceneConfig>,
) {
    let Ok(mut window) = windows.single_mut() else {
        warn!("no primary window, keeping default viewport size");
        return;
    };

    window.resolution.set_scale_factor_override(Some(PIXEL_RATIO));
    window.resolution.set(config.window_width, config.window_height);
    viewport.resize(config.window_width, config.window_height);
}

fn spawn_camera(mut commands: Commands, viewport: Res<Viewport>, config: Res<SceneConfig>) {
    let position = Vec3::new(0.0, 0.0, CAMERA_DISTANCE);

    commands.spawn((
        Camera3d::default(),
        perspective(viewport.aspect()),
        Transform::from_translation(position).looking_at(Vec3::ZERO, Vec3::Y),
        OrbitCamera::from_position(position).with_zoom_limits(config.min_zoom, config.max_zoom),
        MainCamera,
    ));
}

// no debouncing, every event is applied
fn on_resize(
    mut events: EventReader<WindowResized>,
    mut viewport: ResMut<Viewport>,
    mut projections: Query<&mut Projection, With<MainCamera>>,
) {
    for event in events.read() {
        let aspect = viewport.resize(event.width, event.height);

        for mut projection in projections.iter_mut() {
            if let Projection::Perspective(p) = projection.as_mut() {
                p.aspect_ratio = aspect;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::systems::ui::state::{AppState, Status};

    fn aspect_of(app: &mut App) -> f32 {
        let projection = app
            .world_mut()
            .query_filtered::<&Projection, With<MainCamera>>()
            .single(app.world())
            .unwrap();
        match projection {
            Projection::Perspective(p) => p.aspect_ratio,
            _ => panic!("scene camera should be perspective"),
        }
    }

    #[test]
    fn test_resize_updates_size_and_aspect() {
        let mut viewport = Viewport::default();
        assert_eq!(viewport.resize(800.0, 600.0), 800.0 / 600.0);
        assert_eq!(viewport, Viewport { width: 800.0, height: 600.0 });
    }

    #[test]
    fn test_zero_height_does_not_divide() {
        let mut viewport = Viewport::default();
        assert_eq!(viewport.resize(800.0, 0.0), 1.0);
    }

    #[test]
    fn test_resize_event_reaches_camera_and_leaves_status() {
        let mut app = App::new();
        app.add_event::<WindowResized>()
            .init_resource::<Viewport>()
            .init_resource::<AppState>()
            .add_systems(Update, on_resize);
        app.world_mut().spawn((perspective(16.0 / 9.0), MainCamera));

        app.world_mut().send_event(WindowResized {
            window: Entity::PLACEHOLDER,
            width: 800.0,
            height: 600.0,
        });
        app.update();

        assert_eq!(*app.world().resource::<Viewport>(), Viewport { width: 800.0, height: 600.0 });
        assert_eq!(aspect_of(&mut app), 800.0 / 600.0);
        assert_eq!(app.world().resource::<AppState>().status, Status::Rotating);
    }

    #[test]
    fn test_every_resize_event_is_applied() {
        let mut app = App::new();
        app.add_event::<WindowResized>()
            .init_resource::<Viewport>()
            .add_systems(Update, on_resize);
        app.world_mut().spawn((perspective(1.0), MainCamera));

        for (width, height) in [(640.0, 480.0), (1000.0, 500.0)] {
            app.world_mut().send_event(WindowResized { window: Entity::PLACEHOLDER, width, height });
        }
        app.update();

        assert_eq!(aspect_of(&mut app), 2.0);
    }
}
