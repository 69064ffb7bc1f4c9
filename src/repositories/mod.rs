use sqlx::PgPool;

pub mod dog_api_repo;
#[cfg(test)]
pub mod memory_repo;
pub mod posts_repo;

#[derive(Clone)]
pub struct PostgresRepo {
    pool: PgPool,
}

impl PostgresRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}
