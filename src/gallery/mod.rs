/// Slideshow picture loading
///
/// This module handles:
/// - Downloading and decoding the slideshow pictures (fetch.rs)
/// - Tracking the load state of each picture slot

pub mod fetch;

use iced::widget::image::Handle;

use crate::error::FetchError;
use crate::state::data::ImageRecord;

/// Load state of one slideshow picture
#[derive(Debug, Clone)]
pub enum Slot {
    Loading,
    Ready(Handle),
    /// Not retried; the presenter shows the alt text instead
    Failed(FetchError),
}

/// Load state of every picture, in slideshow order
#[derive(Debug, Clone)]
pub struct Gallery {
    slots: Vec<Slot>,
}

impl Gallery {
    pub fn new(images: &[ImageRecord]) -> Self {
        Self {
            slots: images.iter().map(|_| Slot::Loading).collect(),
        }
    }

    pub fn slot(&self, index: usize) -> Option<&Slot> {
        self.slots.get(index)
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Record the outcome of a fetch. Out-of-range indexes are ignored.
    pub fn finish(&mut self, index: usize, result: Result<Handle, FetchError>) {
        let Some(slot) = self.slots.get_mut(index) else {
            return;
        };

        *slot = match result {
            Ok(handle) => {
                tracing::info!("📸 Loaded {}", ImageRecord::alt_text(index));
                Slot::Ready(handle)
            }
            Err(err) => {
                tracing::warn!("❌ {} failed to load: {}", ImageRecord::alt_text(index), err);
                Slot::Failed(err)
            }
        };
    }

    /// Number of pictures that are ready to draw
    pub fn ready_count(&self) -> usize {
        self.slots
            .iter()
            .filter(|slot| matches!(slot, Slot::Ready(_)))
            .count()
    }
}
