use std::sync::atomic::{AtomicU8, Ordering};

use tracing::{debug, error};

use super::impl_module;
use crate::{
    proto::{Command, PrimaryMode, SettingName},
    Result,
};

pub struct ModeCell(AtomicU8);

impl Default for ModeCell {
    fn default() -> Self {
        ModeCell(AtomicU8::new(PrimaryMode::default() as u8))
    }
}

impl ModeCell {
    pub fn load(&self) -> PrimaryMode {
        PrimaryMode::try_from(self.0.load(Ordering::Acquire)).unwrap_or_default()
    }

    fn store(&self, mode: PrimaryMode) {
        self.0.store(mode as u8, Ordering::Release);
    }
}

impl_module!(ModeController, ~ mode: ModeCell);

impl ModeController {
    pub fn mode(&self) -> PrimaryMode {
        self.mode.load()
    }

    /// Neither result is checked, the in-memory mode is updated regardless.
    pub fn set_mode(&self, mode: PrimaryMode) {
        self.mode.store(mode);
        debug!(%mode, "set primary mode");

        self.client.send(Command::Mode(mode));
        self.client.send(mode.enable_setting());
    }

    /// Unknown names are logged and returned as [`crate::Error::UnrecognizedSetting`] without
    /// touching the device. For known names the returned flag is the transport result.
    pub fn apply_setting(&self, name: &str, value: i32) -> Result<bool> {
        let setting: SettingName = name.parse().map_err(|e| {
            error!(name, value, "unrecognized setting");
            e
        })?;

        Ok(self.set(setting, value))
    }

    pub fn apply_settings<'a, I>(&self, settings: I) -> usize
    where
        I: IntoIterator<Item = (&'a str, i32)>,
    {
        settings
            .into_iter()
            .filter(|(name, value)| self.apply_setting(name, *value).is_err())
            .count()
    }

    pub fn set(&self, setting: SettingName, value: i32) -> bool {
        let mode = self.mode();
        debug!(name = setting.as_str(), value, %mode, "apply setting");
        self.client.send(setting.request(mode, value))
    }

    pub fn shutter(&self, on: bool) -> bool {
        self.client.send(Command::Shutter(on))
    }

    /// Wipes the card. There is no confirmation.
    pub fn delete_all_media(&self) -> bool {
        debug!("delete all media");
        self.client.send(Command::DeleteAll)
    }

    pub fn tag_moment(&self) -> bool {
        self.client.send(Command::TagMoment)
    }

    pub fn stream_start(&self) -> bool {
        self.client.send(Command::StreamStart)
    }
}
