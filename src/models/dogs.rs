use reqwest::Url;
use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Body of `GET /api/breeds/image/random` on dog.ceo.
#[derive(Debug, Deserialize, Serialize)]
pub struct DogApiResponse {
    pub message: Option<String>,
    pub status: Option<String>,
}

impl DogApiResponse {
    /// Returns the image URL, rejecting anything that is not an absolute
    /// http(s) link.
    pub fn image_url(self) -> Result<String> {
        if let Some(status) = self.status.as_deref() {
            if status != "success" {
                return Err(Error::UpstreamPayload(format!("status {status:?}")));
            }
        }

        let message = self
            .message
            .ok_or_else(|| Error::UpstreamPayload("missing \"message\" field".to_string()))?;

        let message = message.trim();
        let url = Url::parse(message)
            .map_err(|err| Error::UpstreamPayload(format!("invalid image url: {err}")))?;
        match url.scheme() {
            "http" | "https" => Ok(message.to_string()),
            scheme => Err(Error::UpstreamPayload(format!(
                "unsupported image url scheme {scheme:?}"
            ))),
        }
    }
}
