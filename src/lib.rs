pub mod config;
pub mod core;
pub mod observability;
pub mod platform;

pub use anyhow::{Context, Result};
