use bevy::prelude::*;

mod config;
mod error;
mod systems;

use config::SceneConfig;
use systems::animation::AnimationPlugin;
use systems::camera::OrbitCamPlugin;
use systems::intro::IntroPlugin;
use systems::moon::MoonPlugin;
use systems::ui::MoonUIPlugin;
use systems::viewport::ViewportPlugin;

fn main() -> bevy::app::AppExit {
    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "moonscape".into(),
                ..default()
            }),
            ..default()
        }))
        // after DefaultPlugins so config messages reach the logger
        .insert_resource(SceneConfig::load())
        .insert_resource(ClearColor(Color::srgb(0.0, 0.0, 0.0)))
        .add_plugins((
            ViewportPlugin,
            OrbitCamPlugin,
            MoonPlugin,
            AnimationPlugin,
            IntroPlugin,
            MoonUIPlugin,
        ))
        .run()
}
