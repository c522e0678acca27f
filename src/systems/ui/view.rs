//! The only place UI text is written. Transitions produce a `ViewUpdate`,
//! `present` pushes it to whatever implements `UiSurface`.

use bevy::ecs::system::SystemParam;
use bevy::prelude::*;

use crate::error::UiError;
use crate::systems::ui::state::ViewUpdate;

/// Which piece of screen text an entity holds
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UiSlot {
    Title,
    SpinLabel,
    LanguageLabel,
    Explore,
    Sphere,
}

pub trait UiSurface {
    fn set_text(&mut self, slot: UiSlot, text: &str) -> Result<(), UiError>;
    fn set_font_size(&mut self, slot: UiSlot, size: f32) -> Result<(), UiError>;
}

pub fn present(update: &ViewUpdate, surface: &mut impl UiSurface) -> Result<(), UiError> {
    surface.set_text(UiSlot::Title, &update.title)?;
    if let Some(size) = update.title_size {
        surface.set_font_size(UiSlot::Title, size)?;
    }
    surface.set_text(UiSlot::SpinLabel, &update.button)?;

    if let Some(nav) = &update.nav {
        surface.set_text(UiSlot::LanguageLabel, &nav.toggle)?;
        surface.set_text(UiSlot::Explore, &nav.explore)?;
        surface.set_text(UiSlot::Sphere, &nav.sphere)?;
    }

    Ok(())
}

/// Screen text held by UI entities tagged with a `UiSlot`
#[derive(SystemParam)]
pub struct ScreenText<'w, 's> {
    texts: Query<'w, 's, (&'static UiSlot, &'static mut Text, &'static mut TextFont)>,
}

impl UiSurface for ScreenText<'_, '_> {
    fn set_text(&mut self, slot: UiSlot, text: &str) -> Result<(), UiError> {
        let mut found = false;
        for (_, mut current, _) in self.texts.iter_mut().filter(|(s, _, _)| **s == slot) {
            current.0 = text.to_string();
            found = true;
        }
        found.then_some(()).ok_or(UiError::MissingTarget(slot))
    }

    fn set_font_size(&mut self, slot: UiSlot, size: f32) -> Result<(), UiError> {
        let mut found = false;
        for (_, _, mut font) in self.texts.iter_mut().filter(|(s, _, _)| **s == slot) {
            font.font_size = size;
            found = true;
        }
        found.then_some(()).ok_or(UiError::MissingTarget(slot))
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;
    use crate::systems::ui::state::NavLabels;

    /// In-memory surface, optionally missing some slots
    #[derive(Default)]
    struct RecordingSurface {
        texts: HashMap<UiSlot, String>,
        sizes: HashMap<UiSlot, f32>,
        missing: Vec<UiSlot>,
    }

    impl UiSurface for RecordingSurface {
        fn set_text(&mut self, slot: UiSlot, text: &str) -> Result<(), UiError> {
            if self.missing.contains(&slot) {
                return Err(UiError::MissingTarget(slot));
            }
            self.texts.insert(slot, text.to_string());
            Ok(())
        }

        fn set_font_size(&mut self, slot: UiSlot, size: f32) -> Result<(), UiError> {
            if self.missing.contains(&slot) {
                return Err(UiError::MissingTarget(slot));
            }
            self.sizes.insert(slot, size);
            Ok(())
        }
    }

    fn update(nav: bool, title_size: Option<f32>) -> ViewUpdate {
        ViewUpdate {
            title: "quote".into(),
            title_size,
            button: "Back".into(),
            nav: nav.then(|| NavLabels {
                toggle: "English".into(),
                explore: "探索".into(),
                sphere: "球球".into(),
            }),
        }
    }

    #[test]
    fn test_present_writes_title_and_button() {
        let mut surface = RecordingSurface::default();
        present(&update(false, Some(20.0)), &mut surface).unwrap();

        assert_eq!(surface.texts[&UiSlot::Title], "quote");
        assert_eq!(surface.texts[&UiSlot::SpinLabel], "Back");
        assert_eq!(surface.sizes[&UiSlot::Title], 20.0);
        assert!(!surface.texts.contains_key(&UiSlot::Explore));
    }

    #[test]
    fn test_present_leaves_size_alone_without_override() {
        let mut surface = RecordingSurface::default();
        present(&update(true, None), &mut surface).unwrap();

        assert!(surface.sizes.is_empty());
        assert_eq!(surface.texts[&UiSlot::LanguageLabel], "English");
        assert_eq!(surface.texts[&UiSlot::Sphere], "球球");
    }

    #[test]
    fn test_missing_target_is_an_error() {
        let mut surface = RecordingSurface { missing: vec![UiSlot::SpinLabel], ..default() };
        let result = present(&update(false, None), &mut surface);
        assert!(matches!(result, Err(UiError::MissingTarget(UiSlot::SpinLabel))));
    }
}
