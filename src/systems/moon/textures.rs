//! Remote texture fetching.
//!
//! All three maps are requested at once on a background thread and handed
//! back through a channel as they finish. Nothing waits on them: a map that
//! never arrives just leaves its mesh with the default material colour.

use std::sync::Mutex;
use std::sync::mpsc::{self, Receiver, Sender, TryRecvError};

use bevy::prelude::*;
use image::DynamicImage;
use reqwest::header::USER_AGENT;

use crate::config::SceneConfig;
use crate::error::TextureError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextureKind {
    Color,
    Displacement,
    Skydome,
}

#[derive(Debug, Clone)]
pub struct TextureSource {
    pub kind: TextureKind,
    pub url: String,
}

/// one finished request, successful or not
pub struct TextureFetch {
    pub kind: TextureKind,
    pub url: String,
    pub result: Result<DynamicImage, TextureError>,
}

/// Receiving end of the fetch thread, polled once per frame
#[derive(Resource)]
pub struct TextureInbox(Mutex<Receiver<TextureFetch>>);

impl TextureInbox {
    pub fn new(receiver: Receiver<TextureFetch>) -> Self {
        Self(Mutex::new(receiver))
    }

    /// Everything that has arrived since the last call.
    pub fn drain(&self) -> Vec<TextureFetch> {
        let Ok(receiver) = self.0.lock() else {
            return Vec::new();
        };

        let mut arrived = Vec::new();
        loop {
            match receiver.try_recv() {
                Ok(fetch) => arrived.push(fetch),
                Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => break,
            }
        }
        arrived
    }
}

pub fn sources(config: &SceneConfig) -> Vec<TextureSource> {
    vec![
        TextureSource { kind: TextureKind::Color, url: config.color_map_url.clone() },
        TextureSource { kind: TextureKind::Displacement, url: config.displacement_map_url.clone() },
        TextureSource { kind: TextureKind::Skydome, url: config.skydome_map_url.clone() },
    ]
}

/// Kick off every fetch and return the inbox they report to.
pub fn spawn_fetches(sources: Vec<TextureSource>) -> TextureInbox {
    let (sender, receiver) = mpsc::channel();

    std::thread::spawn(move || {
        let runtime = match tokio::runtime::Runtime::new() {
            Ok(runtime) => runtime,
            Err(e) => {
                report_runtime_failure(&sender, sources, e);
                return;
            }
        };

        runtime.block_on(async move {
            let client = reqwest::Client::new();
            let mut pending = tokio::task::JoinSet::new();

            for source in sources {
                let client = client.clone();
                let sender = sender.clone();
                pending.spawn(async move {
                    let result = fetch_image(&client, &source.url).await;
                    // receiver gone means the app has shut down
                    let _ = sender.send(TextureFetch {
                        kind: source.kind,
                        url: source.url,
                        result,
                    });
                });
            }

            while pending.join_next().await.is_some() {}
        });
    });

    TextureInbox::new(receiver)
}

fn report_runtime_failure(sender: &Sender<TextureFetch>, sources: Vec<TextureSource>, e: std::io::Error) {
    let reason = e.to_string();
    for source in sources {
        let _ = sender.send(TextureFetch {
            kind: source.kind,
            url: source.url,
            result: Err(TextureError::Runtime(std::io::Error::new(e.kind(), reason.clone()))),
        });
    }
}

async fn fetch_image(client: &reqwest::Client, url: &str) -> Result<DynamicImage, TextureError> {
    let response = client
        .get(url)
        .header(USER_AGENT, "moonscape")
        .send()
        .await?;

    let status = response.status();
    if !status.is_success() {
        return Err(TextureError::Status(status));
    }

    let bytes = response.bytes().await?;
    Ok(image::load_from_memory(&bytes)?)
}
