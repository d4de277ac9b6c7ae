//! Platform-neutral model for normalized social feeds.
//!
//! Provider crates turn raw API payloads into [`Post`] values through a
//! [`PostFactory`]; callers collect them into a [`Feed`].

pub mod app_config;
pub mod config;
pub mod error;
pub mod factory;
pub mod feed;
pub mod post;
pub mod reference;

pub use app_config::{AppConfig, Environment};
pub use config::{load_app_config, load_app_config_from_env};
pub use error::ConfigError;
pub use factory::PostFactory;
pub use feed::{Feed, ResultSet};
pub use post::{Author, Media, Post, Tweet};
pub use reference::{Reference, ReferenceType, TextRange};
