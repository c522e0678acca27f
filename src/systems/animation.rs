//! Per-frame spin of the moon and skydome. The loop is a chain of frame
//! requests: each tick consumes the current request and only asks for the
//! next one while the app is rotating. Once a tick sees `Stopped` the chain
//! is broken and stays broken until something calls `FrameLoop::start`.
//!
//! Speeds are per frame, not per second, so spin rate follows frame rate.

use bevy::prelude::*;

use crate::config::{MOON_SPIN_X, MOON_SPIN_Y, SKYDOME_SPIN_Y};
use crate::systems::moon::{Moon, Skydome};
use crate::systems::ui::state::{AppState, Status};

pub struct AnimationPlugin;

impl Plugin for AnimationPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<FrameLoop>()
            .add_systems(Startup, arm)
            .add_systems(Update, tick.run_if(frame_requested));
    }
}

/// Euler angles (XYZ order) driving an entity's rotation
#[derive(Component, Default, Debug, Clone, Copy, PartialEq)]
pub struct Spin {
    pub x: f32,
    pub y: f32,
}

impl Spin {
    pub fn rotation(&self) -> Quat {
        Quat::from_euler(EulerRot::XYZ, self.x, self.y, 0.0)
    }
}

/// Pending frame request
#[derive(Resource, Default, Debug)]
pub struct FrameLoop {
    scheduled: bool,
}

impl FrameLoop {
    /// Entry point for the loop, used at startup and when rotation resumes.
    pub fn start(&mut self) {
        self.scheduled = true;
    }

    pub fn is_scheduled(&self) -> bool {
        self.scheduled
    }

    fn take(&mut self) -> bool {
        std::mem::take(&mut self.scheduled)
    }
}

fn frame_requested(frame_loop: Res<FrameLoop>) -> bool {
    frame_loop.is_scheduled()
}

fn arm(mut frame_loop: ResMut<FrameLoop>) {
    frame_loop.start();
}

/// One frame of spin. Returns whether the next frame should be requested.
pub fn advance(status: Status, moon: &mut Spin, skydome: &mut Spin) -> bool {
    if status == Status::Stopped {
        return false;
    }

    moon.y += MOON_SPIN_Y;
    moon.x += MOON_SPIN_X;
    skydome.y += SKYDOME_SPIN_Y;
    true
}

fn tick(
    mut frame_loop: ResMut<FrameLoop>,
    state: Res<AppState>,
    mut moon_query: Query<(&mut Spin, &mut Transform), (With<Moon>, Without<Skydome>)>,
    mut skydome_query: Query<(&mut Spin, &mut Transform), (With<Skydome>, Without<Moon>)>,
) {
    if !frame_loop.take() {
        return;
    }

    let (Ok((mut moon_spin, mut moon_transform)), Ok((mut sky_spin, mut sky_transform))) =
        (moon_query.single_mut(), skydome_query.single_mut())
    else {
        // scene not built yet, keep the chain alive
        frame_loop.start();
        return;
    };

    if advance(state.status, &mut moon_spin, &mut sky_spin) {
        moon_transform.rotation = moon_spin.rotation();
        sky_transform.rotation = sky_spin.rotation();
        frame_loop.start();
    } else {
        debug!("frame loop halted");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::systems::ui::state::Language;

    fn test_app(status: Status) -> App {
        let mut app = App::new();
        app.insert_resource(AppState { status, lang: Language::En })
            .init_resource::<FrameLoop>()
            .add_systems(Update, tick.run_if(frame_requested));

        app.world_mut().spawn((Moon, Spin::default(), Transform::default()));
        app.world_mut().spawn((Skydome, Spin::default(), Transform::default()));
        app.world_mut().resource_mut::<FrameLoop>().start();
        app
    }

    fn spins(app: &mut App) -> (Spin, Spin) {
        let moon = *app.world_mut().query_filtered::<&Spin, With<Moon>>().single(app.world()).unwrap();
        let sky = *app.world_mut().query_filtered::<&Spin, With<Skydome>>().single(app.world()).unwrap();
        (moon, sky)
    }

    #[test]
    fn test_advance_rotates_while_rotating() {
        let mut moon = Spin::default();
        let mut sky = Spin::default();

        assert!(advance(Status::Rotating, &mut moon, &mut sky));
        assert_eq!(moon, Spin { x: MOON_SPIN_X, y: MOON_SPIN_Y });
        assert_eq!(sky, Spin { x: 0.0, y: SKYDOME_SPIN_Y });
    }

    #[test]
    fn test_advance_is_inert_when_stopped() {
        let mut moon = Spin { x: 0.2, y: 1.0 };
        let mut sky = Spin { x: 0.0, y: 0.5 };

        assert!(!advance(Status::Stopped, &mut moon, &mut sky));
        assert_eq!(moon, Spin { x: 0.2, y: 1.0 });
        assert_eq!(sky, Spin { x: 0.0, y: 0.5 });
    }

    #[test]
    fn test_loop_keeps_itself_scheduled() {
        let mut app = test_app(Status::Rotating);
        for _ in 0..3 {
            app.update();
        }

        assert!(app.world().resource::<FrameLoop>().is_scheduled());
        let (moon, sky) = spins(&mut app);
        assert!((moon.y - 3.0 * MOON_SPIN_Y).abs() < 1e-6);
        assert!((sky.y - 3.0 * SKYDOME_SPIN_Y).abs() < 1e-6);
    }

    #[test]
    fn test_stopped_tick_does_not_reschedule() {
        let mut app = test_app(Status::Stopped);
        app.update();

        assert!(!app.world().resource::<FrameLoop>().is_scheduled());
        assert_eq!(spins(&mut app), (Spin::default(), Spin::default()));
    }

    #[test]
    fn test_halted_loop_needs_explicit_restart() {
        let mut app = test_app(Status::Stopped);
        app.update();

        // going back to rotating alone is not enough
        app.world_mut().resource_mut::<AppState>().status = Status::Rotating;
        app.update();
        assert_eq!(spins(&mut app).0, Spin::default());

        app.world_mut().resource_mut::<FrameLoop>().start();
        app.update();
        assert_eq!(spins(&mut app).0.y, MOON_SPIN_Y);
    }
}
