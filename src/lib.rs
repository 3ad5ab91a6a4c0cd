pub mod config;
pub mod domain;
pub mod error;
pub mod git;
pub mod manifest;
pub mod publisher;
pub mod resolver;
pub mod ui;

pub use error::{AutoTagError, Result};
