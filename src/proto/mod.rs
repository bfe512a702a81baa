use std::fmt;

use crate::network::SETTING_PREFIX;

pub mod cmd;
pub mod setting;

pub use cmd::{Command, PrimaryMode};
pub use setting::{Dispatch, SettingName};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Setting {
    pub code: u16,
    pub value: i32,
}

impl Setting {
    pub const fn new(code: u16, value: i32) -> Self {
        Setting { code, value }
    }

    pub fn url(&self) -> String {
        format!("{}{}", SETTING_PREFIX, self)
    }
}

impl fmt::Display for Setting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.code, self.value)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Request {
    Command(Command),
    Setting(Setting),
}

impl Request {
    pub fn url(&self) -> String {
        match self {
            Request::Command(c) => c.url(),
            Request::Setting(s) => s.url(),
        }
    }
}

impl From<Command> for Request {
    fn from(v: Command) -> Self {
        Request::Command(v)
    }
}

impl From<Setting> for Request {
    fn from(v: Setting) -> Self {
        Request::Setting(v)
    }
}
