use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;

use crate::{models::dogs::DogApiResponse, Result};

#[async_trait]
pub trait DogImagesRepository: Sync + Send {
    /// Fetches the URL of one random dog image.
    async fn random_image(&self) -> Result<String>;
}

#[derive(Clone)]
pub struct DogApiRepo {
    client: Client,
    endpoint: String,
}

impl DogApiRepo {
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            endpoint: endpoint.into(),
        })
    }
}

#[async_trait]
impl DogImagesRepository for DogApiRepo {
    async fn random_image(&self) -> Result<String> {
        debug!(endpoint = %self.endpoint, "requesting random dog image");

        let body = self
            .client
            .get(&self.endpoint)
            .send()
            .await?
            .error_for_status()?
            .json::<DogApiResponse>()
            .await?;

        body.image_url()
    }
}
