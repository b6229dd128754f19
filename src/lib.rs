// src/lib.rs

pub mod api;
pub mod app;
pub mod chat_message;
pub mod config;
pub mod errors;
pub mod key_handlers;
pub mod language;
pub mod logging;
pub mod status_indicator;
pub mod ui;
