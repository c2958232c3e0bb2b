pub mod api;
pub mod config;
pub mod error;

pub use api::{Client, QueryKind};
pub use config::Config;
pub use error::{Error, Result};
