use lazy_static::lazy_static;
use regex::Regex;
use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, warn};

use super::MediaReference;
use crate::{Error, Result};

pub const IMAGE_FILE_PATTERN: &str = r"GOPR[0-9]{4}\.JPG";

lazy_static! {
    static ref IMAGE_FILE_RE: Regex = Regex::new(IMAGE_FILE_PATTERN).expect("valid image file pattern");
}

#[derive(Debug, Default, Deserialize)]
struct MediaList {
    #[serde(default)]
    media: Vec<MediaDir>,
}

#[derive(Debug, Default, Deserialize)]
struct MediaDir {
    #[serde(default)]
    fs: Vec<Value>,
}

pub fn parse_media_list(body: &[u8]) -> Result<Vec<MediaReference>> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Err(Error::InvalidData("empty media list".into()));
    }

    let list: MediaList = serde_json::from_slice(body)?;
    let Some(dir) = list.media.into_iter().next() else {
        return Ok(Vec::new());
    };

    Ok(dir
        .fs
        .into_iter()
        .filter_map(|f| match f.get("n").and_then(Value::as_str) {
            Some(name) if !name.is_empty() => Some(MediaReference::from(name)),

            _ => {
                warn!(entry = %f, "media list entry without a name");
                None
            }
        })
        .collect())
}

pub fn find_image_files(html: &str) -> Vec<MediaReference> {
    IMAGE_FILE_RE
        .find_iter(html)
        .map(|m| {
            debug!(image = m.as_str(), "found image");
            MediaReference::from(m.as_str())
        })
        .collect()
}
