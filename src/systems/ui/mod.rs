use bevy::prelude::*;

pub mod quotes;
pub mod state;
pub mod view;

use state::{AppState, Transition, initial_view, nav_labels, toggle_language, toggle_status};
use view::{ScreenText, UiSlot, UiSurface, present};
use crate::config::{BUTTON_FONT_SIZE, NAV_FONT_SIZE, SceneConfig, TITLE_FONT_SIZE};
use crate::systems::animation::FrameLoop;
use crate::systems::camera::OrbitCamera;
use crate::systems::intro::{FadeIn, NAV_HEIGHT, SlideIn};

pub struct MoonUIPlugin;

impl Plugin for MoonUIPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<AppState>()
            .add_systems(Startup, setup_ui)
            .add_systems(Update, (spin_clicked, language_clicked).chain());
    }
}

// the rotate / quote button
#[derive(Component)]
pub struct SpinButton;

// the en / tw switch in the nav bar
#[derive(Component)]
pub struct LanguageToggle;

// resting alpha of the spin button's fill
const BUTTON_FILL_ALPHA: f32 = 0.12;

fn setup_ui(
    mut commands: Commands,
    state: Res<AppState>,
    config: Res<SceneConfig>,
    asset_server: Res<AssetServer>,
) {
    let view = initial_view(*state, &mut rand::rng());
    let nav = view.nav.clone().unwrap_or_else(|| nav_labels(state.lang));

    // bevy's built-in font has no CJK glyphs
    let font: Handle<Font> = config
        .ui_font
        .as_ref()
        .map(|path| asset_server.load(path.clone()))
        .unwrap_or_default();
    let text_font = |font_size: f32| TextFont {
        font: font.clone(),
        font_size,
        ..default()
    };

    // nav bar, parked above the window until the entrance slides it down
    commands
        .spawn((
            Node {
                position_type: PositionType::Absolute,
                top: Val::Px(-NAV_HEIGHT),
                left: Val::Px(0.0),
                width: Val::Percent(100.0),
                height: Val::Px(NAV_HEIGHT),
                flex_direction: FlexDirection::Row,
                align_items: AlignItems::Center,
                justify_content: JustifyContent::SpaceBetween,
                padding: UiRect::horizontal(Val::Px(20.0)),
                ..default()
            },
            BackgroundColor(Color::NONE),
            SlideIn,
        ))
        .with_children(|bar| {
            bar.spawn(Node {
                column_gap: Val::Px(16.0),
                ..default()
            })
            .with_children(|links| {
                links.spawn((
                    Text::new(nav.explore),
                    text_font(NAV_FONT_SIZE),
                    TextColor(Color::WHITE),
                    UiSlot::Explore,
                ));
                links.spawn((
                    Text::new(nav.sphere),
                    text_font(NAV_FONT_SIZE),
                    TextColor(Color::WHITE),
                    UiSlot::Sphere,
                ));
            });

            bar.spawn((
                Button,
                Node {
                    padding: UiRect::axes(Val::Px(10.0), Val::Px(4.0)),
                    ..default()
                },
                BackgroundColor(Color::NONE),
                LanguageToggle,
            ))
            .with_children(|toggle| {
                toggle.spawn((
                    Text::new(nav.toggle),
                    text_font(NAV_FONT_SIZE),
                    TextColor(Color::WHITE),
                    UiSlot::LanguageLabel,
                ));
            });
        });

    // title and spin button, bottom centre, faded out until the entrance
    commands
        .spawn(Node {
            width: Val::Percent(100.0),
            height: Val::Percent(100.0),
            flex_direction: FlexDirection::Column,
            align_items: AlignItems::Center,
            justify_content: JustifyContent::FlexEnd,
            row_gap: Val::Px(16.0),
            padding: UiRect::bottom(Val::Px(60.0)),
            ..default()
        })
        .with_children(|parent| {
            parent.spawn((
                Text::new(view.title),
                text_font(view.title_size.unwrap_or(TITLE_FONT_SIZE)),
                TextColor(Color::WHITE.with_alpha(0.0)),
                TextLayout::new_with_justify(JustifyText::Center),
                Node {
                    max_width: Val::Percent(60.0),
                    ..default()
                },
                UiSlot::Title,
                FadeIn { alpha: 1.0 },
            ));

            parent
                .spawn((
                    Button,
                    Node {
                        padding: UiRect::axes(Val::Px(24.0), Val::Px(10.0)),
                        border: UiRect::all(Val::Px(1.0)),
                        ..default()
                    },
                    BorderColor(Color::WHITE.with_alpha(0.0)),
                    BackgroundColor(Color::WHITE.with_alpha(0.0)),
                    FadeIn { alpha: BUTTON_FILL_ALPHA },
                    SpinButton,
                ))
                .with_children(|button| {
                    button.spawn((
                        Text::new(view.button),
                        text_font(BUTTON_FONT_SIZE),
                        TextColor(Color::WHITE.with_alpha(0.0)),
                        UiSlot::SpinLabel,
                        FadeIn { alpha: 1.0 },
                    ));
                });
        });
}

fn pressed<T: Component>(buttons: &Query<&Interaction, (Changed<Interaction>, With<T>)>) -> bool {
    buttons.iter().any(|interaction| *interaction == Interaction::Pressed)
}

// apply a transition: text first, then state, controls and loop
fn commit(
    transition: Transition,
    state: &mut AppState,
    frame_loop: &mut FrameLoop,
    cameras: &mut Query<&mut OrbitCamera>,
    screen: &mut impl UiSurface,
) -> Result {
    present(&transition.view, screen)?;

    *state = transition.state;
    for mut camera in cameras.iter_mut() {
        camera.enabled = state.controls_enabled();
    }
    if transition.restart_loop {
        frame_loop.start();
    }

    debug!("ui state now {:?}", state);
    Ok(())
}

fn spin_clicked(
    buttons: Query<&Interaction, (Changed<Interaction>, With<SpinButton>)>,
    mut state: ResMut<AppState>,
    mut frame_loop: ResMut<FrameLoop>,
    mut cameras: Query<&mut OrbitCamera>,
    mut screen: ScreenText,
) -> Result {
    if !pressed(&buttons) {
        return Ok(());
    }

    let transition = toggle_status(*state, &mut rand::rng());
    commit(transition, &mut state, &mut frame_loop, &mut cameras, &mut screen)
}

fn language_clicked(
    buttons: Query<&Interaction, (Changed<Interaction>, With<LanguageToggle>)>,
    mut state: ResMut<AppState>,
    mut frame_loop: ResMut<FrameLoop>,
    mut cameras: Query<&mut OrbitCamera>,
    mut screen: ScreenText,
) -> Result {
    if !pressed(&buttons) {
        return Ok(());
    }

    let transition = toggle_language(*state, &mut rand::rng());
    commit(transition, &mut state, &mut frame_loop, &mut cameras, &mut screen)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::QUOTE_FONT_SIZE;
    use crate::systems::ui::quotes::{EN_QUOTES, TW_QUOTES};
    use crate::systems::ui::state::{Language, Status};

    struct Screen {
        app: App,
        spin: Entity,
        toggle: Entity,
    }

    impl Screen {
        fn new() -> Self {
            let mut app = App::new();
            app.init_resource::<AppState>()
                .init_resource::<FrameLoop>()
                .add_systems(Update, (spin_clicked, language_clicked).chain());

            let world = app.world_mut();
            world.spawn(OrbitCamera::default());
            for (slot, text) in [
                (UiSlot::Title, "Give it a spin"),
                (UiSlot::SpinLabel, "Get Your Way"),
                (UiSlot::LanguageLabel, "繁體中文"),
                (UiSlot::Explore, "explore"),
                (UiSlot::Sphere, "sphere"),
            ] {
                world.spawn((slot, Text::new(text), TextFont::default()));
            }
            let spin = world.spawn((Interaction::None, SpinButton)).id();
            let toggle = world.spawn((Interaction::None, LanguageToggle)).id();

            app.update();
            Self { app, spin, toggle }
        }

        fn click(&mut self, button: Entity) {
            self.app.world_mut().entity_mut(button).insert(Interaction::Pressed);
            self.app.update();
            self.app.world_mut().entity_mut(button).insert(Interaction::None);
            self.app.update();
        }

        fn text(&mut self, slot: UiSlot) -> String {
            let world = self.app.world_mut();
            let mut query = world.query::<(&UiSlot, &Text)>();
            query
                .iter(world)
                .find(|(s, _)| **s == slot)
                .map(|(_, text)| text.0.clone())
                .unwrap()
        }

        fn title_size(&mut self) -> f32 {
            let world = self.app.world_mut();
            let mut query = world.query::<(&UiSlot, &TextFont)>();
            query
                .iter(world)
                .find(|(s, _)| **s == UiSlot::Title)
                .map(|(_, font)| font.font_size)
                .unwrap()
        }

        fn state(&self) -> AppState {
            *self.app.world().resource::<AppState>()
        }

        fn controls_enabled(&mut self) -> bool {
            let world = self.app.world_mut();
            world.query::<&OrbitCamera>().single(world).unwrap().enabled
        }
    }

    #[test]
    fn test_stop_shows_english_quote() {
        let mut screen = Screen::new();
        screen.click(screen.spin);

        assert_eq!(screen.state().status, Status::Stopped);
        assert_eq!(screen.text(UiSlot::SpinLabel), "Back");
        assert!(EN_QUOTES.contains(&screen.text(UiSlot::Title).as_str()));
        assert_eq!(screen.title_size(), QUOTE_FONT_SIZE);
        assert!(!screen.controls_enabled());
    }

    #[test]
    fn test_language_switch_while_stopped() {
        let mut screen = Screen::new();
        screen.click(screen.spin);
        screen.click(screen.toggle);

        assert_eq!(screen.state(), AppState { status: Status::Stopped, lang: Language::Tw });
        assert!(TW_QUOTES.contains(&screen.text(UiSlot::Title).as_str()));
        assert_eq!(screen.text(UiSlot::SpinLabel), "重設");
        assert_eq!(screen.text(UiSlot::LanguageLabel), "English");
        assert_eq!(screen.text(UiSlot::Explore), "探索");
        assert_eq!(screen.text(UiSlot::Sphere), "球球");
        assert!(!screen.controls_enabled());
    }

    #[test]
    fn test_resume_restarts_loop_and_controls() {
        let mut screen = Screen::new();
        screen.click(screen.spin);
        assert!(!screen.app.world().resource::<FrameLoop>().is_scheduled());

        screen.click(screen.spin);
        assert_eq!(screen.state().status, Status::Rotating);
        assert!(screen.controls_enabled());
        assert!(screen.app.world().resource::<FrameLoop>().is_scheduled());
        assert_eq!(screen.text(UiSlot::Title), "Give it a spin");
        assert_eq!(screen.title_size(), TITLE_FONT_SIZE);
    }

    #[test]
    fn test_controls_track_status_over_many_clicks() {
        let mut screen = Screen::new();
        for i in 0..6 {
            if i % 3 == 2 {
                screen.click(screen.toggle);
            } else {
                screen.click(screen.spin);
            }
            let rotating = screen.state().status == Status::Rotating;
            assert_eq!(screen.controls_enabled(), rotating);
        }
    }

    #[test]
    fn test_double_language_switch_restores_labels() {
        let mut screen = Screen::new();
        let before: Vec<String> = [UiSlot::Title, UiSlot::SpinLabel, UiSlot::LanguageLabel, UiSlot::Explore, UiSlot::Sphere]
            .into_iter()
            .map(|slot| screen.text(slot))
            .collect();

        screen.click(screen.toggle);
        assert_eq!(screen.text(UiSlot::Title), "用手指轉一轉");
        screen.click(screen.toggle);

        let after: Vec<String> = [UiSlot::Title, UiSlot::SpinLabel, UiSlot::LanguageLabel, UiSlot::Explore, UiSlot::Sphere]
            .into_iter()
            .map(|slot| screen.text(slot))
            .collect();
        assert_eq!(before, after);
        assert_eq!(screen.state(), AppState::default());
    }

    #[test]
    #[should_panic]
    fn test_missing_title_is_fatal() {
        let mut screen = Screen::new();
        let world = screen.app.world_mut();
        let title = world
            .query::<(Entity, &UiSlot)>()
            .iter(world)
            .find(|(_, slot)| **slot == UiSlot::Title)
            .map(|(entity, _)| entity)
            .unwrap();
        world.despawn(title);

        screen.click(screen.spin);
    }
}
