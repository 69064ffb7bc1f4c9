pub mod dogs;
pub mod posts;
pub mod schema;
