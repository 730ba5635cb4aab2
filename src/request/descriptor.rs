use crate::common::Params;
use crate::configs::HttpMethod;

pub const HTTP_PORT: u16 = 80;
pub const HTTPS_PORT: u16 = 443;

/// A fully built request, ready for the dispatcher.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestDescriptor {
    pub secure: bool,
    pub host: String,
    pub port: u16,
    /// Includes the query string for non-POST requests.
    pub path: String,
    pub method: HttpMethod,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

impl RequestDescriptor {
    pub fn scheme(&self) -> &'static str {
        if self.secure { "https" } else { "http" }
    }

    /// Absolute URL. The port is left out when it is the scheme default.
    pub fn url(&self) -> String {
        let default_port = if self.secure { HTTPS_PORT } else { HTTP_PORT };
        if self.port == default_port {
            format!("{}://{}{}", self.scheme(), self.host, self.path)
        } else {
            format!("{}://{}:{}{}", self.scheme(), self.host, self.port, self.path)
        }
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    pub fn query(&self) -> Option<&str> {
        self.path.split_once('?').map(|(_, query)| query)
    }

    /// Path without the query string.
    pub fn base_path(&self) -> &str {
        self.path.split_once('?').map_or(self.path.as_str(), |(path, _)| path)
    }

    /// Decoded parameters carried by the query string or the form body.
    pub fn params(&self) -> Params {
        let encoded = self.body.as_deref().or_else(|| self.query()).unwrap_or("");
        encoded
            .split('&')
            .filter(|pair| !pair.is_empty())
            .map(|pair| {
                let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
                (decode(key), decode(value))
            })
            .collect()
    }
}

fn decode(value: &str) -> String {
    urlencoding::decode(value)
        .map(|v| v.into_owned())
        .unwrap_or_else(|_| value.to_string())
}
