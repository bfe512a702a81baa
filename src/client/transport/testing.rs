use std::collections::{HashMap, HashSet};
use std::sync::Mutex;
use std::time::Duration;

use super::Transport;
use crate::{Error, Result};

#[derive(Default)]
pub(crate) struct Recorder {
    urls: Mutex<Vec<String>>,
    bodies: Mutex<HashMap<String, Vec<u8>>>,
    failing: Mutex<HashSet<String>>,
}

impl Recorder {
    pub fn respond(&self, url: &str, body: impl Into<Vec<u8>>) {
        self.bodies.lock().unwrap().insert(url.to_owned(), body.into());
    }

    pub fn fail(&self, url: &str) {
        self.failing.lock().unwrap().insert(url.to_owned());
    }

    pub fn urls(&self) -> Vec<String> {
        self.urls.lock().unwrap().clone()
    }
}

impl Transport for Recorder {
    fn request(&self, url: &str, _timeout: Duration) -> Result<Vec<u8>> {
        self.urls.lock().unwrap().push(url.to_owned());

        if self.failing.lock().unwrap().contains(url) {
            return Err(Error::Timeout {
                url: url.to_owned(),
            });
        }

        Ok(self
            .bodies
            .lock()
            .unwrap()
            .get(url)
            .cloned()
            .unwrap_or_default())
    }
}
