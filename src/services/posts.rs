use std::sync::Arc;

use tracing::{debug, info};
use validator::ValidationErrors;

use crate::{
    models::posts::{Post, PostForm},
    repositories::posts_repo::PostsRepository,
    Result,
};

/// Outcome of a form submission.
#[derive(Debug)]
pub enum Submission {
    Created(Post),
    Rejected(PostForm, ValidationErrors),
}

#[derive(Clone)]
pub struct PostsService {
    repo: Arc<dyn PostsRepository>,
}

impl PostsService {
    pub fn new(repo: Arc<dyn PostsRepository>) -> Self {
        Self { repo }
    }

    pub async fn submit(&self, form: PostForm) -> Result<Submission> {
        let new_post = match form.clone().into_new_post() {
            Ok(new_post) => new_post,
            Err(errors) => {
                debug!(?errors, "post submission rejected");
                return Ok(Submission::Rejected(form, errors));
            }
        };

        let post = self.repo.create_post(&new_post).await?;
        info!(post_id = %post.id, category = %post.category, "post created");

        Ok(Submission::Created(post))
    }
}

#[cfg(test)]
mod tests {
    use crate::{models::posts::Category, repositories::memory_repo::MemoryRepo};

    use super::*;

    fn service() -> (PostsService, Arc<MemoryRepo>) {
        let repo = Arc::new(MemoryRepo::default());
        (PostsService::new(repo.clone()), repo)
    }

    fn form(title: &str, content: &str, is_published: &str, category: &str) -> PostForm {
        PostForm {
            title: title.to_string(),
            content: content.to_string(),
            is_published: is_published.to_string(),
            category: category.to_string(),
        }
    }

    #[tokio::test]
    async fn valid_submission_creates_exactly_the_submitted_post() {
        let (service, repo) = service();

        let submission = service.submit(form("Hello", "World", "on", "2")).await.unwrap();

        let Submission::Created(post) = submission else {
            panic!("expected the post to be created");
        };
        assert_eq!(post.title, "Hello");
        assert_eq!(post.content, "World");
        assert!(post.is_published);
        assert_eq!(post.category, Category::Two);
        assert_eq!(repo.posts(), vec![post]);
    }

    #[tokio::test]
    async fn invalid_submissions_store_nothing() {
        let (service, repo) = service();

        for invalid in [
            form("", "x", "", "1"),
            form(&"t".repeat(101), "x", "", "1"),
            form("Hello", "World", "on", "7"),
        ] {
            let submission = service.submit(invalid.clone()).await.unwrap();
            match submission {
                Submission::Rejected(returned, errors) => {
                    assert_eq!(returned.title, invalid.title);
                    assert!(!errors.field_errors().is_empty());
                }
                Submission::Created(post) => panic!("unexpected post {post:?}"),
            }
        }

        assert!(repo.posts().is_empty());
    }
}
