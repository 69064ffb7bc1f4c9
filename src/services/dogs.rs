use std::sync::Arc;

use tracing::warn;

use crate::{repositories::dog_api_repo::DogImagesRepository, Result};

#[derive(Clone)]
pub struct DogsService {
    repo: Arc<dyn DogImagesRepository>,
}

impl DogsService {
    pub fn new(repo: Arc<dyn DogImagesRepository>) -> Self {
        Self { repo }
    }

    pub async fn random_dog(&self) -> Result<String> {
        self.repo.random_image().await.inspect_err(|err| {
            if err.is_upstream() {
                warn!("image api unavailable: {err}");
            }
        })
    }
}
