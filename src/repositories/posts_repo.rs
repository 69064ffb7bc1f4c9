use async_trait::async_trait;
use uuid::Uuid;

use crate::{
    models::posts::{NewPost, Post},
    Result,
};

use super::PostgresRepo;

#[async_trait]
pub trait PostsRepository: Sync + Send {
    async fn create_post(&self, new_post: &NewPost) -> Result<Post>;
}

#[async_trait]
impl PostsRepository for PostgresRepo {
    async fn create_post(&self, new_post: &NewPost) -> Result<Post> {
        let id = Uuid::now_v7();

        let post = sqlx::query_as::<_, Post>(
            r#"
            INSERT INTO posts (id, title, content, is_published, category)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, title, content, is_published, category, created_at
            "#,
        )
        .bind(id)
        .bind(&new_post.title)
        .bind(&new_post.content)
        .bind(new_post.is_published)
        .bind(new_post.category.code())
        .fetch_one(&self.pool)
        .await?;

        Ok(post)
    }
}
