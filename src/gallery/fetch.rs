/// Slideshow picture download and decode
/// Fetches a picture over HTTP and shrinks it to display size off the UI thread
use iced::widget::image::Handle;
use image::imageops::FilterType;

use crate::error::FetchError;

/// Largest size a slide is kept at (the presenter is at most this big)
const MAX_WIDTH: u32 = 1200;
const MAX_HEIGHT: u32 = 800;

/// Decoded RGBA pixels ready for the image widget
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedPicture {
    pub width: u32,
    pub height: u32,
    pub rgba: Vec<u8>,
}

impl DecodedPicture {
    pub fn into_handle(self) -> Handle {
        Handle::from_rgba(self.width, self.height, self.rgba)
    }
}

/// Download a picture and return a handle the view can draw
pub async fn fetch_picture(url: String) -> Result<Handle, FetchError> {
    let client = reqwest::Client::builder()
        .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
        .build()?;

    let response = client.get(&url).send().await?;
    let status = response.status();
    if !status.is_success() {
        return Err(FetchError::Status {
            status: status.as_u16(),
            url,
        });
    }

    let bytes = response.bytes().await?;
    tracing::debug!("⬇️  {} bytes from {}", bytes.len(), url);

    // Spawn blocking task for CPU-bound decode
    let picture = tokio::task::spawn_blocking(move || decode_picture(&bytes)).await??;
    Ok(picture.into_handle())
}

/// Decode encoded image bytes, shrinking anything larger than the presenter
pub fn decode_picture(bytes: &[u8]) -> Result<DecodedPicture, FetchError> {
    let img = image::load_from_memory(bytes)?;

    let img = if img.width() > MAX_WIDTH || img.height() > MAX_HEIGHT {
        img.resize(MAX_WIDTH, MAX_HEIGHT, FilterType::Triangle)
    } else {
        img
    };

    let rgba = img.to_rgba8();
    Ok(DecodedPicture {
        width: rgba.width(),
        height: rgba.height(),
        rgba: rgba.into_raw(),
    })
}
