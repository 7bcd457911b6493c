//! UI module for the extensions dashlet
//!
//! This module handles the dashlet component, the dashboard shell hosting it,
//! rendering, and user interactions.

pub mod app_component;
pub mod components;
pub mod core;
pub mod layout;
pub mod renderer;

pub use app_component::AppComponent;
pub use layout::LayoutManager;
pub use renderer::run_app;
