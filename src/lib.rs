//! MyStyle library
//!
//! This library provides the core of the MyStyle wardrobe: asset discovery
//! against a local directory or static host, theme manifests, the layered
//! outfit compositor and the browsing controller driving the terminal UI.

// Module declarations
pub mod cli;
pub mod config;
pub mod constants;
pub mod models;
pub mod parser;
pub mod services;
pub mod tui;
