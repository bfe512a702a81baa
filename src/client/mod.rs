use std::sync::Arc;
use std::time::Duration;

use tracing::warn;

use crate::{network::COMMAND_TIMEOUT, proto::Request, Result};

pub mod transport;

pub use transport::{http::HttpTransport, Transport};

#[derive(Clone)]
pub struct Client {
    trans: Arc<dyn Transport>,
}

impl Client {
    pub fn new(trans: Arc<dyn Transport>) -> Self {
        Client { trans }
    }

    /// The camera answers with no usable status, so `true` only means the request completed.
    pub fn send(&self, req: impl Into<Request>) -> bool {
        let url = req.into().url();
        match self.trans.request(&url, COMMAND_TIMEOUT) {
            Ok(_) => true,

            Err(e) => {
                warn!(%url, "command dispatch failed: {}", e);
                false
            }
        }
    }

    pub fn get_bytes(&self, url: &str, timeout: Duration) -> Result<Vec<u8>> {
        self.trans.request(url, timeout)
    }

    pub fn get_text(&self, url: &str, timeout: Duration) -> Result<String> {
        let raw = self.trans.request(url, timeout)?;
        Ok(String::from_utf8_lossy(&raw).into_owned())
    }
}
