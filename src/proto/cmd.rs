use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

use super::Setting;
use crate::{
    network::{COMMAND_PREFIX, STREAM_START_URL},
    util::macros::impl_num_enums,
    Error, Result,
};

impl_num_enums!(PrimaryMode, Video = 0, Photo = 1, MultiShot = 2,);

impl Default for PrimaryMode {
    fn default() -> Self {
        PrimaryMode::Photo
    }
}

impl PrimaryMode {
    pub const ALL: [PrimaryMode; 3] = [PrimaryMode::Video, PrimaryMode::Photo, PrimaryMode::MultiShot];

    pub const fn enable_setting(&self) -> Setting {
        match self {
            PrimaryMode::Video => Setting::new(10, 1),
            PrimaryMode::Photo => Setting::new(21, 1),
            PrimaryMode::MultiShot => Setting::new(34, 1),
        }
    }
}

impl fmt::Display for PrimaryMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            PrimaryMode::Video => "video",
            PrimaryMode::Photo => "photo",
            PrimaryMode::MultiShot => "multishot",
        })
    }
}

impl FromStr for PrimaryMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Ok(match s.to_ascii_lowercase().as_str() {
            "video" => PrimaryMode::Video,
            "photo" => PrimaryMode::Photo,
            "multishot" => PrimaryMode::MultiShot,
            other => {
                return Err(Error::InvalidData(
                    format!("unknown primary mode {}", other).into(),
                ))
            }
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Mode(PrimaryMode),
    Shutter(bool),
    DeleteAll,
    TagMoment,
    StreamStart,
}

impl Command {
    pub fn path(&self) -> Option<Cow<'static, str>> {
        Some(match self {
            Command::Mode(m) => format!("mode?p={}", *m as u8).into(),
            Command::Shutter(on) => format!("shutter?p={}", *on as u8).into(),
            Command::DeleteAll => "storage/delete/all".into(),
            Command::TagMoment => "storage/tag_moment".into(),
            Command::StreamStart => return None,
        })
    }

    pub fn url(&self) -> String {
        match self.path() {
            Some(path) => format!("{}{}", COMMAND_PREFIX, path),
            None => STREAM_START_URL.to_owned(),
        }
    }
}
