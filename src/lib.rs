//! Ticklist - Minimal browser-based to-do list
//!
//! Serves a single-page to-do list over HTTP: view the list, add an item,
//! mark an item done. All state lives in memory and resets on restart.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
