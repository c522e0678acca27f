//! Error types. Texture and config errors are logged and recovered from;
//! a missing UI target is fatal.

#[derive(Debug, thiserror::Error)]
pub enum TextureError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("server answered {0}")]
    Status(reqwest::StatusCode),

    #[error("could not decode image: {0}")]
    Decode(#[from] image::ImageError),

    #[error("could not start fetch runtime: {0}")]
    Runtime(#[source] std::io::Error),
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Read(#[source] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[source] ron::error::SpannedError),
}

#[derive(Debug, thiserror::Error)]
pub enum UiError {
    #[error("no {0:?} text on screen")]
    MissingTarget(crate::systems::ui::view::UiSlot),
}
