//! Configuration module

pub mod file_config;

pub use file_config::*;
