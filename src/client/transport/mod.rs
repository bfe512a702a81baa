use std::time::Duration;

use crate::Result;

pub mod http;
pub mod udp;

pub trait Transport: Send + Sync {
    fn request(&self, url: &str, timeout: Duration) -> Result<Vec<u8>>;
}

#[cfg(test)]
pub(crate) mod testing;
