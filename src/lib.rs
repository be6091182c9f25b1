pub mod cli;
pub mod config;
pub mod error;
pub mod gallery;
pub mod loader;
pub mod logging;
pub mod render;
