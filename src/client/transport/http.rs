use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use reqwest::blocking::Client;
use tracing::{debug, trace};

use super::Transport;
use crate::{Error, Result};

const USER_AGENT: &str = concat!("gopro-hero/", env!("CARGO_PKG_VERSION"));

pub struct HttpTransport {
    issued: AtomicU64,
}

impl HttpTransport {
    pub fn acquire() -> Self {
        debug!("http transport acquired");
        HttpTransport {
            issued: AtomicU64::new(0),
        }
    }

    pub fn issued(&self) -> u64 {
        self.issued.load(Ordering::Relaxed)
    }

    fn one_shot(&self, timeout: Duration) -> Result<Client> {
        Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .pool_max_idle_per_host(0)
            .build()
            .map_err(From::from)
    }
}

impl Drop for HttpTransport {
    fn drop(&mut self) {
        debug!(issued = self.issued(), "http transport released");
    }
}

impl Transport for HttpTransport {
    fn request(&self, url: &str, timeout: Duration) -> Result<Vec<u8>> {
        self.issued.fetch_add(1, Ordering::Relaxed);
        trace!(url, ?timeout, "http get");

        let client = self.one_shot(timeout)?;
        let resp = client.get(url).send()?;

        let status = resp.status();
        if !status.is_success() {
            return Err(Error::BadStatus {
                url: url.to_owned(),
                status: status.as_u16(),
            });
        }

        let body = resp.bytes()?;
        Ok(body.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use std::io::{Read, Write};
    use std::net::{TcpListener, TcpStream};
    use std::thread;
    use std::time::Instant;

    use super::*;

    fn read_request(stream: &mut TcpStream) {
        let mut buf = [0u8; 1024];
        let mut got = Vec::new();
        while !got.windows(4).any(|w| w == b"\r\n\r\n") {
            let read = stream.read(&mut buf).unwrap();
            if read == 0 {
                break;
            }
            got.extend_from_slice(&buf[..read]);
        }
    }

    fn serve_once(status: &'static str, body: &'static [u8]) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();

        thread::spawn(move || {
            let (mut stream, _) = listener.accept().unwrap();
            read_request(&mut stream);
            let head = format!(
                "HTTP/1.1 {}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
                status,
                body.len()
            );
            stream.write_all(head.as_bytes()).unwrap();
            stream.write_all(body).unwrap();
        });

        format!("http://{}/videos/DCIM/100GOPRO/", addr)
    }

    #[test]
    fn fetch_body() {
        let url = serve_once("200 OK", b"GOPR0001.JPG");
        let trans = HttpTransport::acquire();

        let body = trans.request(&url, Duration::from_secs(2)).unwrap();
        assert_eq!(body, b"GOPR0001.JPG");
        assert_eq!(trans.issued(), 1);
    }

    #[test]
    fn bad_status_is_failure() {
        let url = serve_once("404 Not Found", b"");
        let trans = HttpTransport::acquire();

        match trans.request(&url, Duration::from_secs(2)) {
            Err(Error::BadStatus { status, .. }) => assert_eq!(status, 404),
            other => panic!("unexpected result {:?}", other),
        }
    }

    #[test]
    fn silent_peer_times_out() {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();

        thread::spawn(move || {
            let (mut stream, _) = listener.accept().unwrap();
            read_request(&mut stream);
            thread::sleep(Duration::from_secs(3));
        });

        let trans = HttpTransport::acquire();
        let start = Instant::now();
        let res = trans.request(&format!("http://{}/gp/gpMediaList", addr), Duration::from_millis(300));

        assert!(res.is_err());
        assert!(start.elapsed() < Duration::from_secs(3));
    }

    #[test]
    fn refused_is_failure() {
        let addr = {
            let listener = TcpListener::bind("127.0.0.1:0").unwrap();
            listener.local_addr().unwrap()
        };

        let trans = HttpTransport::acquire();
        assert!(trans
            .request(&format!("http://{}/", addr), Duration::from_secs(1))
            .is_err());
    }
}
