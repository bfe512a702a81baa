use super::{Command, PrimaryMode, Request, Setting};
use crate::util::macros::impl_name_table;

impl_name_table!(
    SettingName,
    Shutter => "shutter",
    Orientation => "orientation",
    LedBlink => "ledBlink",
    BeepVolume => "beepVolume",
    LcdDisplay => "lcdDisplay",
    OnScreenDisplay => "onScreenDisplay",
    LcdBrightness => "lcdBrightness",
    LcdLock => "lcdLock",
    LcdSleepTimeout => "lcdSleepTimeout",
    AutoOffTime => "autoOffTime",
    VideoStreamBitRate => "videoStreamBitRate",
    VideoFrameRate => "videoFrameRate",
    VideoResolution => "videoResolution",
    VideoFov => "videoFOV",
    VideoLowLight => "videoLowLight",
    VideoLoopDuration => "videoLoopDuration",
    VideoPhotoInterval => "videoPhotoInterval",
    VideoTagMoment => "videoTagMoment",
    MultiBurstRate => "multiBurstRate",
    MultiTimeLapseInterval => "multiTimeLapseInterval",
    MultiNightLapseInterval => "multiNightLapseInterval",
    WhiteBalance => "whiteBalance",
    Color => "color",
    IsoLimit => "isoLimit",
    IsoMin => "isoMin",
    Sharpness => "sharpness",
    Ev => "ev",
    Exposure => "exposure",
    SpotMeter => "spotMeter",
    PhotoResolution => "photoResolution",
);

#[derive(Debug, Clone, Copy)]
pub enum Dispatch {
    Command(fn(i32) -> Command),
    Fixed(u16),
    /// Code depends on the current primary mode, as `[video, photo, multishot]`.
    PerMode([u16; 3]),
}

impl SettingName {
    pub fn dispatch(&self) -> Dispatch {
        use SettingName::*;

        match self {
            Shutter => Dispatch::Command(shutter_cmd),
            VideoTagMoment => Dispatch::Command(tag_moment_cmd),

            Orientation => Dispatch::Fixed(52),
            LedBlink => Dispatch::Fixed(55),
            BeepVolume => Dispatch::Fixed(56),
            LcdDisplay => Dispatch::Fixed(72),
            OnScreenDisplay => Dispatch::Fixed(58),
            LcdBrightness => Dispatch::Fixed(49),
            LcdLock => Dispatch::Fixed(50),
            LcdSleepTimeout => Dispatch::Fixed(51),
            AutoOffTime => Dispatch::Fixed(59),

            // video only
            VideoStreamBitRate => Dispatch::Fixed(62),
            VideoFrameRate => Dispatch::Fixed(3),
            VideoResolution => Dispatch::Fixed(2),
            VideoFov => Dispatch::Fixed(4),
            VideoLowLight => Dispatch::Fixed(8),
            VideoLoopDuration => Dispatch::Fixed(6),
            VideoPhotoInterval => Dispatch::Fixed(7),

            // multishot only
            MultiBurstRate => Dispatch::Fixed(29),
            MultiTimeLapseInterval => Dispatch::Fixed(31),
            MultiNightLapseInterval => Dispatch::Fixed(32),

            WhiteBalance => Dispatch::PerMode([11, 22, 35]),
            Color => Dispatch::PerMode([12, 23, 36]),
            IsoLimit => Dispatch::PerMode([13, 24, 37]),
            IsoMin => Dispatch::PerMode([102, 75, 76]),
            Sharpness => Dispatch::PerMode([14, 25, 38]),
            Ev => Dispatch::PerMode([15, 26, 39]),
            Exposure => Dispatch::PerMode([73, 97, 98]),
            SpotMeter => Dispatch::PerMode([9, 20, 33]),
            PhotoResolution => Dispatch::PerMode([17, 17, 28]),
        }
    }

    pub fn request(&self, mode: PrimaryMode, value: i32) -> Request {
        match self.dispatch() {
            Dispatch::Command(build) => build(value).into(),
            Dispatch::Fixed(code) => Setting::new(code, value).into(),
            Dispatch::PerMode(codes) => {
                let idx = match mode {
                    PrimaryMode::Video => 0,
                    PrimaryMode::Photo => 1,
                    PrimaryMode::MultiShot => 2,
                };
                Setting::new(codes[idx], value).into()
            }
        }
    }
}

fn shutter_cmd(value: i32) -> Command {
    Command::Shutter(value != 0)
}

fn tag_moment_cmd(_: i32) -> Command {
    Command::TagMoment
}
