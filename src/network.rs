use std::fmt;
use std::net::{Ipv4Addr, SocketAddr, SocketAddrV4};
use std::str::FromStr;
use std::time::Duration;

use crate::{Error, Result};

pub const DEVICE_IP: Ipv4Addr = Ipv4Addr::new(10, 5, 5, 9);

pub const WAKE_PORT: u16 = 9;

pub const COMMAND_PREFIX: &str = "http://10.5.5.9/gp/gpControl/command/";
pub const SETTING_PREFIX: &str = "http://10.5.5.9/gp/gpControl/setting/";
pub const STREAM_START_URL: &str = "http://10.5.5.9/gp/gpControl/execute?p1=gpStream&c1=restart";
pub const MEDIA_LIST_URL: &str = "http://10.5.5.9/gp/gpMediaList";
pub const MEDIA_DIR_URL: &str = "http://10.5.5.9/videos/DCIM/100GOPRO/";

pub const COMMAND_TIMEOUT: Duration = Duration::from_secs(2);

pub const DEFAULT_FETCH_TIMEOUT: Duration = Duration::from_secs(5);

pub const fn wake_addr() -> SocketAddr {
    SocketAddr::V4(SocketAddrV4::new(DEVICE_IP, WAKE_PORT))
}

pub fn media_url(name: &str) -> String {
    format!("{}{}", MEDIA_DIR_URL, name)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MacAddr(pub [u8; 6]);

impl MacAddr {
    pub fn octets(&self) -> [u8; 6] {
        self.0
    }
}

impl From<[u8; 6]> for MacAddr {
    fn from(v: [u8; 6]) -> Self {
        MacAddr(v)
    }
}

impl FromStr for MacAddr {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let mut octets = [0u8; 6];
        let mut parts = s.split(|c: char| c == ':' || c == '-');

        for octet in octets.iter_mut() {
            let part = parts
                .next()
                .ok_or_else(|| Error::InvalidData(format!("mac address too short: {}", s).into()))?;

            if part.len() != 2 {
                return Err(Error::InvalidData(
                    format!("invalid mac octet {:?} in {}", part, s).into(),
                ));
            }

            *octet = u8::from_str_radix(part, 16).map_err(|_| {
                Error::InvalidData(format!("invalid mac octet {:?} in {}", part, s).into())
            })?;
        }

        if parts.next().is_some() {
            return Err(Error::InvalidData(
                format!("mac address too long: {}", s).into(),
            ));
        }

        Ok(MacAddr(octets))
    }
}

impl fmt::Display for MacAddr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b, c, d, e, g] = self.0;
        write!(
            f,
            "{:02X}:{:02X}:{:02X}:{:02X}:{:02X}:{:02X}",
            a, b, c, d, e, g
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_mac() {
        let mac: MacAddr = "AA:BB:CC:DD:EE:FF".parse().unwrap();
        assert_eq!(mac.octets(), [0xaa, 0xbb, 0xcc, 0xdd, 0xee, 0xff]);

        let mac: MacAddr = "01-23-45-67-89-ab".parse().unwrap();
        assert_eq!(mac.to_string(), "01:23:45:67:89:AB");
    }

    #[test]
    fn reject_bad_mac() {
        assert!("AA:BB:CC:DD:EE".parse::<MacAddr>().is_err());
        assert!("AA:BB:CC:DD:EE:FF:00".parse::<MacAddr>().is_err());
        assert!("AA:BB:CC:DD:EE:GG".parse::<MacAddr>().is_err());
        assert!("AAA:BB:CC:DD:EE:F".parse::<MacAddr>().is_err());
    }

    #[test]
    fn media_url_under_dir() {
        assert_eq!(
            media_url("GOPR0001.JPG"),
            "http://10.5.5.9/videos/DCIM/100GOPRO/GOPR0001.JPG"
        );
    }
}
