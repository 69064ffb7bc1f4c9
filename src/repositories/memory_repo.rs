use std::sync::Mutex;

use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

use crate::{
    models::posts::{NewPost, Post},
    Result,
};

use super::posts_repo::PostsRepository;

/// Vec-backed stand-in for the posts table.
#[derive(Default)]
pub struct MemoryRepo {
    posts: Mutex<Vec<Post>>,
}

impl MemoryRepo {
    pub fn posts(&self) -> Vec<Post> {
        self.posts.lock().unwrap().clone()
    }
}

#[async_trait]
impl PostsRepository for MemoryRepo {
    async fn create_post(&self, new_post: &NewPost) -> Result<Post> {
        let post = Post {
            id: Uuid::now_v7(),
            title: new_post.title.clone(),
            content: new_post.content.clone(),
            is_published: new_post.is_published,
            category: new_post.category,
            created_at: Utc::now(),
        };
        self.posts.lock().unwrap().push(post.clone());
        Ok(post)
    }
}
