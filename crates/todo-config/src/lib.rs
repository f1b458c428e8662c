//! Configuration management for the todo CLI.
//!
//! This crate discovers the `.todo/` directory in the filesystem and loads
//! `.todo/config.yaml` into a typed [`TodoConfig`](config::TodoConfig).

pub mod config;
pub mod todo_dir;
