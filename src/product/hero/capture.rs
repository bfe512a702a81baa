use std::time::SystemTime;

use tracing::{debug, warn};

use super::GoProHero;
use crate::{module::media::MediaItem, proto::PrimaryMode};

#[derive(Debug, Clone)]
pub struct TimestampedMedia {
    pub data: MediaItem,
    pub request_begin: SystemTime,
    pub request_end: SystemTime,
    pub media_retrieved: SystemTime,
}

impl GoProHero {
    /// Never reports failure, a broken request shows up as empty items. Unless media is kept on
    /// the device the card is wiped afterwards, without confirmation.
    pub fn trigger_shutter(&self, multishot: bool) -> Vec<TimestampedMedia> {
        let request_begin = SystemTime::now();

        self.set_mode(if multishot {
            PrimaryMode::MultiShot
        } else {
            PrimaryMode::Photo
        });
        if !self.shutter(true) {
            warn!("shutter command failed");
        }
        let request_end = SystemTime::now();

        let items = self.current_images();
        let media_retrieved = SystemTime::now();
        debug!(count = items.len(), "media retrieved after shutter");

        if !self.save_on_device() {
            self.delete_all_media();
        }

        items
            .into_iter()
            .map(|data| TimestampedMedia {
                data,
                request_begin,
                request_end,
                media_retrieved,
            })
            .collect()
    }
}
