pub mod analysis;
pub mod config;
pub mod error;
pub mod llm;
pub mod prompt;
pub mod render;
pub mod server;

pub use error::{Error, ErrorKind, Result};
