//! Internal modules for the elimination scorer CLI.
//!
//! This library provides command parsing, configuration, logging and the
//! text views used by the es_cli binary.

pub mod app;
pub mod commands;
pub mod config;
pub mod logging;
pub mod render;
