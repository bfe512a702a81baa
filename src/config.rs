use std::env;
use std::time::Duration;

use tracing::{debug, info};

use crate::network::DEFAULT_FETCH_TIMEOUT;

pub const MEDIA_LISTING_ENV: &str = "IMAGE_LIST_FROM";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MediaListing {
    Structured,
    #[default]
    DirectoryListing,
}

impl MediaListing {
    pub fn from_env() -> Self {
        Self::from_value(env::var(MEDIA_LISTING_ENV).ok().as_deref())
    }

    pub fn from_value(value: Option<&str>) -> Self {
        let Some(from) = value else {
            debug!("{} not specified, using html listing", MEDIA_LISTING_ENV);
            return MediaListing::DirectoryListing;
        };

        if from.eq_ignore_ascii_case("JSON") {
            MediaListing::Structured
        } else if from.eq_ignore_ascii_case("HTML") {
            MediaListing::DirectoryListing
        } else {
            info!(value = from, "unknown media listing format, using html listing");
            MediaListing::DirectoryListing
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub media_listing: MediaListing,
    /// Off by default: a triggered capture wipes the card once its media is retrieved.
    pub save_on_device: bool,
    pub fetch_timeout: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            media_listing: MediaListing::default(),
            save_on_device: false,
            fetch_timeout: DEFAULT_FETCH_TIMEOUT,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Config {
            media_listing: MediaListing::from_env(),
            ..Default::default()
        }
    }

    pub fn with_media_listing(mut self, listing: MediaListing) -> Self {
        self.media_listing = listing;
        self
    }

    pub fn with_save_on_device(mut self, save: bool) -> Self {
        self.save_on_device = save;
        self
    }

    pub fn with_fetch_timeout(mut self, timeout: Duration) -> Self {
        self.fetch_timeout = timeout;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn listing_from_value() {
        assert_eq!(MediaListing::from_value(Some("JSON")), MediaListing::Structured);
        assert_eq!(MediaListing::from_value(Some("json")), MediaListing::Structured);
        assert_eq!(MediaListing::from_value(Some("Html")), MediaListing::DirectoryListing);
        assert_eq!(MediaListing::from_value(Some("xml")), MediaListing::DirectoryListing);
        assert_eq!(MediaListing::from_value(Some("")), MediaListing::DirectoryListing);
        assert_eq!(MediaListing::from_value(None), MediaListing::DirectoryListing);
    }

    #[test]
    fn default_config() {
        let cfg = Config::default();
        assert_eq!(cfg.media_listing, MediaListing::DirectoryListing);
        assert!(!cfg.save_on_device);
        assert_eq!(cfg.fetch_timeout, DEFAULT_FETCH_TIMEOUT);

        let cfg = cfg
            .with_media_listing(MediaListing::Structured)
            .with_save_on_device(true);
        assert_eq!(cfg.media_listing, MediaListing::Structured);
        assert!(cfg.save_on_device);
    }
}
