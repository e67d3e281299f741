pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod executor;
pub mod selector;
pub mod ui;
