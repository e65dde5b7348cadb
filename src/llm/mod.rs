mod client;
mod types;

pub use client::{GeminiClient, VisionClient};
pub use types::*;
