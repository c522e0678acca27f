pub mod animation;
pub mod camera;
pub mod intro;
pub mod moon;
pub mod ui;
pub mod viewport;
