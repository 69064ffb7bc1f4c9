use std::sync::Arc;

use config::Config;
use dotenv::dotenv;
use repositories::{dog_api_repo::DogApiRepo, PostgresRepo};
use routes::create_routes;
use services::{dogs::DogsService, posts::PostsService};
use sqlx::postgres::PgPoolOptions;
use tera::Tera;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

pub use self::errors::{Error, Result};

mod config;
mod errors;
mod handlers;
mod models;
mod repositories;
mod routes;
mod services;
mod templates;

#[derive(Clone)]
pub struct AppState {
    pub templates: Tera,
    pub posts_service: PostsService,
    pub dogs_service: DogsService,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,tower_http=debug")),
        )
        .init();

    let config = Config::init()?;

    let pool = match PgPoolOptions::new()
        .max_connections(config.max_connections)
        .connect(&config.database_url)
        .await
    {
        Ok(pool) => {
            info!("✅ Connection to the database is successful!");
            pool
        }
        Err(err) => {
            error!("🔥 Failed to connect to the database: {:?}", err);
            std::process::exit(1);
        }
    };

    sqlx::migrate!("./migrations").run(&pool).await?;

    let app_state = AppState {
        templates: templates::load()?,
        posts_service: PostsService::new(Arc::new(PostgresRepo::new(pool))),
        dogs_service: DogsService::new(Arc::new(DogApiRepo::new(
            config.dog_api_url.clone(),
            config.dog_api_timeout,
        )?)),
    };

    let app = create_routes(Arc::new(app_state));

    let listener = tokio::net::TcpListener::bind(format!("[::]:{}", config.port)).await?;
    info!("🚀 Listening on {}", listener.local_addr()?);
    axum::serve(listener, app).await?;

    Ok(())
}
