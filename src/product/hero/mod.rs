use std::sync::Arc;
use std::time::Duration;

use tracing::info;

use crate::{
    client::{Client, HttpTransport, Transport},
    config::{Config, MediaListing},
    module::{
        control::ModeController,
        media::{Downloader, MediaItem, MediaLocator, MediaReference},
        stream::{self, StreamSession},
        wake,
    },
    network::{MacAddr, COMMAND_TIMEOUT},
    proto::{PrimaryMode, SettingName},
    Result,
};

mod capture;
pub use capture::TimestampedMedia;

pub struct GoProHero {
    config: Config,

    pub control: Arc<ModeController>,
    pub locator: MediaLocator,
    pub downloader: Downloader,
}

impl GoProHero {
    pub fn new(config: Config) -> Self {
        Self::with_transport(config, Arc::new(HttpTransport::acquire()))
    }

    pub fn from_env() -> Self {
        Self::new(Config::from_env())
    }

    pub fn with_transport(config: Config, trans: Arc<dyn Transport>) -> Self {
        let client = Client::new(trans);
        info!(listing = ?config.media_listing, save_on_device = config.save_on_device, "camera driver ready");

        GoProHero {
            control: Arc::new(ModeController::new(client.clone())),
            locator: MediaLocator::new(client.clone(), config.media_listing),
            downloader: Downloader::new(client),
            config,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn media_listing(&self) -> MediaListing {
        self.locator.listing()
    }

    pub fn save_on_device(&self) -> bool {
        self.config.save_on_device
    }

    pub fn mode(&self) -> PrimaryMode {
        self.control.mode()
    }

    pub fn set_mode(&self, mode: PrimaryMode) {
        self.control.set_mode(mode)
    }

    pub fn apply_setting(&self, name: &str, value: i32) -> Result<bool> {
        self.control.apply_setting(name, value)
    }

    pub fn apply_settings<'a, I>(&self, settings: I) -> usize
    where
        I: IntoIterator<Item = (&'a str, i32)>,
    {
        self.control.apply_settings(settings)
    }

    pub fn set(&self, setting: SettingName, value: i32) -> bool {
        self.control.set(setting, value)
    }

    pub fn shutter(&self, on: bool) -> bool {
        self.control.shutter(on)
    }

    pub fn delete_all_media(&self) -> bool {
        self.control.delete_all_media()
    }

    pub fn tag_moment(&self) -> bool {
        self.control.tag_moment()
    }

    pub fn stream_start(&self) -> bool {
        self.control.stream_start()
    }

    pub fn list_media(&self) -> Vec<MediaReference> {
        self.locator.list_media(COMMAND_TIMEOUT)
    }

    pub fn fetch_all(&self, refs: &[MediaReference], timeout: Duration) -> Vec<MediaItem> {
        self.downloader.fetch_all(refs, timeout)
    }

    pub fn current_images(&self) -> Vec<MediaItem> {
        self.current_images_with_timeout(self.config.fetch_timeout)
    }

    pub fn current_images_with_timeout(&self, timeout: Duration) -> Vec<MediaItem> {
        let refs = self.list_media();
        self.fetch_all(&refs, timeout)
    }

    pub fn wake(&self, mac: MacAddr) -> bool {
        wake::wake(mac)
    }

    pub fn attach_stream<S: StreamSession>(&self, session: &mut S) {
        stream::attach(session, self.control.clone())
    }
}
