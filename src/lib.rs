pub mod db;
pub mod error;
pub mod handlers;
pub mod models;
pub mod query;

pub use db::create_pool;
