pub mod dogs;
pub mod posts;
