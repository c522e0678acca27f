//! Entrance timeline, played once at startup. Three tracks share one clock:
//! the moon grows from nothing, the nav bar slides down from above, the
//! title and spin button fade in.

use bevy::prelude::*;
use bevy::math::curve::Curve;
use bevy::math::curve::easing::{EaseFunction, EasingCurve};

use crate::config::INTRO_DURATION;
use crate::systems::moon::Moon;

pub struct IntroPlugin;

impl Plugin for IntroPlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(Timeline::new(INTRO_DURATION))
            .add_systems(Update, play.run_if(timeline_running));
    }
}

pub const NAV_HEIGHT: f32 = 48.0;

/// Nav bar that slides in from above
#[derive(Component)]
pub struct SlideIn;

/// Element that fades in. Text and fill go up to `alpha`, a border
/// always ends fully opaque.
#[derive(Component)]
pub struct FadeIn {
    pub alpha: f32,
}

/// Values of every track at one instant
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IntroFrame {
    pub moon_scale: Vec3,
    /// fraction of the nav bar's own height, -1 is fully hidden above
    pub nav_offset: f32,
    pub opacity: f32,
}

#[derive(Resource)]
pub struct Timeline {
    elapsed: f32,
    duration: f32,
    finished: bool,
    scale: EasingCurve<Vec3>,
    slide: EasingCurve<f32>,
    fade: EasingCurve<f32>,
}

impl Timeline {
    pub fn new(duration: f32) -> Self {
        Self {
            elapsed: 0.0,
            duration,
            finished: false,
            scale: EasingCurve::new(Vec3::ZERO, Vec3::ONE, EaseFunction::QuadraticOut),
            slide: EasingCurve::new(-1.0, 0.0, EaseFunction::QuadraticOut),
            fade: EasingCurve::new(0.0, 1.0, EaseFunction::QuadraticOut),
        }
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Track values at `time` seconds, clamped to the timeline.
    pub fn sample(&self, time: f32) -> IntroFrame {
        let t = if self.duration > 0.0 { (time / self.duration).clamp(0.0, 1.0) } else { 1.0 };
        IntroFrame {
            moon_scale: self.scale.sample_clamped(t),
            nav_offset: self.slide.sample_clamped(t),
            opacity: self.fade.sample_clamped(t),
        }
    }

    /// Move the clock forward and return the frame to show.
    /// The frame that reaches the end marks the timeline finished.
    pub fn advance(&mut self, delta: f32) -> IntroFrame {
        self.elapsed += delta;
        if self.elapsed >= self.duration {
            self.finished = true;
        }
        self.sample(self.elapsed)
    }
}

fn timeline_running(timeline: Res<Timeline>) -> bool {
    !timeline.is_finished()
}

fn play(
    time: Res<Time>,
    mut timeline: ResMut<Timeline>,
    mut moon_query: Query<&mut Transform, With<Moon>>,
    mut nav_query: Query<&mut Node, With<SlideIn>>,
    mut fade_query: Query<(
        &FadeIn,
        Option<&mut TextColor>,
        Option<&mut BackgroundColor>,
        Option<&mut BorderColor>,
    )>,
) {
    let frame = timeline.advance(time.delta_secs());

    for mut transform in moon_query.iter_mut() {
        transform.scale = frame.moon_scale;
    }

    for mut node in nav_query.iter_mut() {
        node.top = Val::Px(frame.nav_offset * NAV_HEIGHT);
    }

    for (fade, text_color, background, border) in fade_query.iter_mut() {
        let alpha = fade.alpha * frame.opacity;
        if let Some(mut color) = text_color {
            color.0.set_alpha(alpha);
        }
        if let Some(mut color) = background {
            color.0.set_alpha(alpha);
        }
        if let Some(mut color) = border {
            color.0.set_alpha(frame.opacity);
        }
    }

    if timeline.is_finished() {
        info!("entrance finished");
    }
}
