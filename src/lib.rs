pub mod config;
pub mod coordinator;
pub mod error;
pub mod features;
pub mod logging;
pub mod navigation;
pub mod state;
pub mod ui;
