//! Application state and the two click-driven transitions.
//! Everything here is pure: a transition takes the current state and a
//! random source and returns the next state plus the text to show.
//! Applying that text to the screen is the view's job.

use bevy::prelude::*;
use rand::Rng;

use crate::config::{QUOTE_FONT_SIZE, TITLE_FONT_SIZE};
use crate::systems::ui::quotes::{EN_QUOTES, TW_QUOTES};

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    #[default]
    Rotating,
    Stopped,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    #[default]
    En,
    Tw,
}

/// Static strings for one language
pub struct Strings {
    pub ready_title: &'static str,
    pub ready_button: &'static str,
    pub back_button: &'static str,
    // the toggle names the language you'd switch to
    pub toggle_label: &'static str,
    pub explore: &'static str,
    pub sphere: &'static str,
    pub quotes: &'static [&'static str],
}

static EN: Strings = Strings {
    ready_title: "Give it a spin",
    ready_button: "Get Your Way",
    back_button: "Back",
    toggle_label: "繁體中文",
    explore: "explore",
    sphere: "sphere",
    quotes: EN_QUOTES,
};

static TW: Strings = Strings {
    ready_title: "用手指轉一轉",
    ready_button: "找靈感",
    back_button: "重設",
    toggle_label: "English",
    explore: "探索",
    sphere: "球球",
    quotes: TW_QUOTES,
};

impl Language {
    pub fn strings(self) -> &'static Strings {
        match self {
            Language::En => &EN,
            Language::Tw => &TW,
        }
    }

    pub fn other(self) -> Self {
        match self {
            Language::En => Language::Tw,
            Language::Tw => Language::En,
        }
    }
}

#[derive(Resource, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct AppState {
    pub status: Status,
    pub lang: Language,
}

impl AppState {
    /// Orbit controls follow status.
    pub fn controls_enabled(&self) -> bool {
        self.status == Status::Rotating
    }
}

/// Labels in the nav bar
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavLabels {
    pub toggle: String,
    pub explore: String,
    pub sphere: String,
}

/// Text to write to the screen after a transition
#[derive(Debug, Clone, PartialEq)]
pub struct ViewUpdate {
    pub title: String,
    /// None leaves the current size alone
    pub title_size: Option<f32>,
    pub button: String,
    pub nav: Option<NavLabels>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Transition {
    pub state: AppState,
    pub view: ViewUpdate,
    /// the frame loop was halted and has to be re-armed
    pub restart_loop: bool,
}

/// Pick a quote uniformly from the pool of `lang`.
pub fn pick_quote(lang: Language, rng: &mut impl Rng) -> (usize, &'static str) {
    let pool = lang.strings().quotes;
    let index = rng.random_range(0..pool.len());
    (index, pool[index])
}

pub fn nav_labels(lang: Language) -> NavLabels {
    let strings = lang.strings();
    NavLabels {
        toggle: strings.toggle_label.to_string(),
        explore: strings.explore.to_string(),
        sphere: strings.sphere.to_string(),
    }
}

/// Title and button text for a state. Stopped states draw a fresh quote.
pub fn compose(state: AppState, rng: &mut impl Rng) -> ViewUpdate {
    let strings = state.lang.strings();
    match state.status {
        Status::Rotating => ViewUpdate {
            title: strings.ready_title.to_string(),
            title_size: None,
            button: strings.ready_button.to_string(),
            nav: None,
        },
        Status::Stopped => ViewUpdate {
            title: pick_quote(state.lang, rng).1.to_string(),
            title_size: None,
            button: strings.back_button.to_string(),
            nav: None,
        },
    }
}

/// Full screen contents for a state, used for the first frame.
pub fn initial_view(state: AppState, rng: &mut impl Rng) -> ViewUpdate {
    ViewUpdate {
        title_size: Some(match state.status {
            Status::Rotating => TITLE_FONT_SIZE,
            Status::Stopped => QUOTE_FONT_SIZE,
        }),
        nav: Some(nav_labels(state.lang)),
        ..compose(state, rng)
    }
}

/// Spin button: rotating shows a quote and stops, stopped goes back to spinning.
pub fn toggle_status(state: AppState, rng: &mut impl Rng) -> Transition {
    let (status, title_size, restart_loop) = match state.status {
        Status::Rotating => (Status::Stopped, QUOTE_FONT_SIZE, false),
        Status::Stopped => (Status::Rotating, TITLE_FONT_SIZE, true),
    };

    let next = AppState { status, ..state };
    Transition {
        state: next,
        view: ViewUpdate {
            title_size: Some(title_size),
            ..compose(next, rng)
        },
        restart_loop,
    }
}

/// Language toggle: relabel everything for the other language.
/// A stopped screen always gets a new quote from the new pool.
pub fn toggle_language(state: AppState, rng: &mut impl Rng) -> Transition {
    let next = AppState { lang: state.lang.other(), ..state };
    Transition {
        state: next,
        view: ViewUpdate {
            nav: Some(nav_labels(next.lang)),
            ..compose(next, rng)
        },
        restart_loop: false,
    }
}
