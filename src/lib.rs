//! Library entry for revscope exposing the runtime and core logic for the
//! binary and integration tests.

pub mod app;
pub mod args;
pub mod config;
pub mod error;
pub mod events;
pub mod logic;
pub mod sources;
pub mod state;
pub mod theme;
pub mod ui;

#[cfg(test)]
mod test_utils;
