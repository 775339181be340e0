pub mod config;
pub mod error;
pub mod models;
pub mod seed;
pub mod store;
pub mod web;

pub use config::Config;
pub use error::{Error, Result};
pub use store::PostStore;
