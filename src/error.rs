use std::borrow::Cow;
use std::fmt;

#[derive(Debug)]
pub enum Error {
    IO(std::io::Error),
    Http(reqwest::Error),
    Json(serde_json::Error),
    Timeout {
        url: String,
    },
    BadStatus {
        url: String,
        status: u16,
    },
    InvalidData(Cow<'static, str>),
    UnrecognizedSetting(String),
    Other(Cow<'static, str>),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::IO(e) => write!(f, "io: {}", e),
            Error::Http(e) => write!(f, "http: {}", e),
            Error::Json(e) => write!(f, "json: {}", e),
            Error::Timeout { url } => write!(f, "request to {} timed out", url),
            Error::BadStatus { url, status } => {
                write!(f, "request to {} returned status {}", url, status)
            }
            Error::InvalidData(msg) => write!(f, "invalid data: {}", msg),
            Error::UnrecognizedSetting(name) => write!(f, "unrecognized setting {:?}", name),
            Error::Other(msg) => f.write_str(msg),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::IO(e) => Some(e),
            Error::Http(e) => Some(e),
            Error::Json(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Self::IO(e)
    }
}

impl From<reqwest::Error> for Error {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            let url = e.url().map(|u| u.to_string()).unwrap_or_default();
            return Self::Timeout { url };
        }

        Self::Http(e)
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Self::Json(e)
    }
}
