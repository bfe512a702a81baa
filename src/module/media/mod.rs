use std::fmt;
use std::time::Duration;

use tracing::{debug, error, warn};

use super::impl_module;
use crate::{
    config::MediaListing,
    network::{media_url, MEDIA_DIR_URL, MEDIA_LIST_URL},
    Result,
};

pub mod parse;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MediaReference(String);

impl MediaReference {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn url(&self) -> String {
        media_url(&self.0)
    }
}

impl From<String> for MediaReference {
    fn from(v: String) -> Self {
        MediaReference(v)
    }
}

impl From<&str> for MediaReference {
    fn from(v: &str) -> Self {
        MediaReference(v.to_owned())
    }
}

impl From<MediaReference> for String {
    fn from(v: MediaReference) -> Self {
        v.0
    }
}

impl fmt::Display for MediaReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A failed download shows up as an empty item, callers must treat zero length as failure.
pub type MediaItem = Vec<u8>;

impl_module!(MediaLocator, listing: MediaListing);

impl MediaLocator {
    pub fn listing(&self) -> MediaListing {
        self.listing
    }

    /// Every failure is logged and ends up as an empty list.
    pub fn list_media(&self, timeout: Duration) -> Vec<MediaReference> {
        let res = match self.listing {
            MediaListing::Structured => self.list_structured(timeout),
            MediaListing::DirectoryListing => self.list_directory(timeout),
        };

        match res {
            Ok(refs) if refs.is_empty() => {
                error!(listing = ?self.listing, "empty media list");
                refs
            }

            Ok(refs) => refs,

            Err(e) => {
                error!(listing = ?self.listing, "failed to get media list: {}", e);
                Vec::new()
            }
        }
    }

    // gpMediaList is known to be unreliable on current firmware
    fn list_structured(&self, timeout: Duration) -> Result<Vec<MediaReference>> {
        let body = self.client.get_bytes(MEDIA_LIST_URL, timeout)?;
        debug!(len = body.len(), "gpMediaList fetched");
        parse::parse_media_list(&body)
    }

    fn list_directory(&self, timeout: Duration) -> Result<Vec<MediaReference>> {
        let html = self.client.get_text(MEDIA_DIR_URL, timeout)?;
        Ok(parse::find_image_files(&html))
    }
}

impl_module!(Downloader);

impl Downloader {
    /// A failed fetch does not stop the batch; its slot holds an empty item.
    pub fn fetch_all(&self, refs: &[MediaReference], timeout: Duration) -> Vec<MediaItem> {
        refs.iter().map(|r| self.fetch(r, timeout)).collect()
    }

    pub fn fetch(&self, media: &MediaReference, timeout: Duration) -> MediaItem {
        let url = media.url();
        debug!(%url, "getting");

        self.client.get_bytes(&url, timeout).unwrap_or_else(|e| {
            warn!(%url, "media fetch failed: {}", e);
            MediaItem::new()
        })
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::client::{transport::testing::Recorder, Client};

    const TIMEOUT: Duration = Duration::from_secs(1);

    fn locator(listing: MediaListing) -> (Arc<Recorder>, MediaLocator) {
        let rec = Arc::new(Recorder::default());
        let loc = MediaLocator::new(Client::new(rec.clone()), listing);
        (rec, loc)
    }

    #[test]
    fn directory_listing() {
        let (rec, loc) = locator(MediaListing::DirectoryListing);
        rec.respond(
            MEDIA_DIR_URL,
            "<tr><td>GOPR0001.JPG</td></tr><tr><td>GOPR0002.JPG</td></tr>",
        );

        let refs = loc.list_media(TIMEOUT);
        assert_eq!(
            refs,
            vec![
                MediaReference::from("GOPR0001.JPG"),
                MediaReference::from("GOPR0002.JPG")
            ]
        );
        assert_eq!(rec.urls(), vec![MEDIA_DIR_URL.to_owned()]);
    }

    #[test]
    fn structured_listing() {
        let (rec, loc) = locator(MediaListing::Structured);
        rec.respond(MEDIA_LIST_URL, r#"{"media":[{"d":"100GOPRO","fs":[{"n":"GOPR0007.JPG"}]}]}"#);

        assert_eq!(loc.list_media(TIMEOUT), vec![MediaReference::from("GOPR0007.JPG")]);
        assert_eq!(rec.urls(), vec![MEDIA_LIST_URL.to_owned()]);
    }

    #[test]
    fn listing_failures_are_empty() {
        let (rec, loc) = locator(MediaListing::DirectoryListing);
        rec.fail(MEDIA_DIR_URL);
        assert!(loc.list_media(TIMEOUT).is_empty());

        let (rec, loc) = locator(MediaListing::Structured);
        rec.respond(MEDIA_LIST_URL, "not json");
        assert!(loc.list_media(TIMEOUT).is_empty());

        let (_rec, loc) = locator(MediaListing::Structured);
        assert!(loc.list_media(TIMEOUT).is_empty());
    }

    #[test]
    fn fetch_keeps_slots_for_failures() {
        let rec = Arc::new(Recorder::default());
        let dl = Downloader::new(Client::new(rec.clone()));

        let refs: Vec<MediaReference> = ["GOPR0001.JPG", "GOPR0002.JPG", "GOPR0003.JPG"]
            .into_iter()
            .map(MediaReference::from)
            .collect();
        rec.respond(&refs[0].url(), vec![0xff, 0xd8]);
        rec.fail(&refs[1].url());
        rec.respond(&refs[2].url(), vec![0xff, 0xd9, 0x00]);

        let items = dl.fetch_all(&refs, TIMEOUT);
        assert_eq!(items, vec![vec![0xff, 0xd8], vec![], vec![0xff, 0xd9, 0x00]]);
        assert_eq!(
            rec.urls(),
            refs.iter().map(MediaReference::url).collect::<Vec<_>>()
        );
    }

    #[test]
    fn fetch_nothing() {
        let rec = Arc::new(Recorder::default());
        let dl = Downloader::new(Client::new(rec.clone()));
        assert!(dl.fetch_all(&[], TIMEOUT).is_empty());
        assert!(rec.urls().is_empty());
    }
}
