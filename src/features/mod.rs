//! Screens, view-models and factories the coordinators delegate to.
//!
//! Each feature exposes a navigation-delegate trait (the only way its screens
//! can ask for navigation) and a factory trait (destination content on
//! demand). The `Default*Factory` types are the implementations the binary
//! runs with; tests substitute their own.

pub mod factory;
pub mod home;
pub mod login;
pub mod profile;
pub mod repository;

pub use factory::{AppFactory, FlowFactories};
pub use home::{HomeFactory, HomeNavigationDelegate};
pub use login::{ForgotPasswordNavigationDelegate, LoginFactory, LoginNavigationDelegate};
pub use profile::{ProfileFactory, ProfileNavigationDelegate};
pub use repository::{MockDataRepository, SettingsData, User};
