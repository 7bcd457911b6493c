//! Extensions Dashlet - a dashboard widget for discovering, installing and endorsing extensions
//!
//! The dashlet shows either the newest extensions that are not installed yet or the
//! installed extensions still waiting for an endorse/abstain decision, and forwards the
//! user's choices to the host's asynchronous commands.
//!
//! # Modules
//!
//! * [`config`] - Application configuration management
//! * [`dashlet`] - Pure view derivations (available feed, endorsement candidates, mode)
//! * [`host`] - Host boundary: command trait, state store, local host
//! * [`model`] - Extension descriptors, installed records and endorsement state
//! * [`ui`] - Terminal user interface components
//! * [`utils`] - Utility functions and helpers

/// Configuration module for managing application settings
pub mod config;

/// Application constants and default values
pub mod constants;

/// View derivations of the extensions dashlet
pub mod dashlet;

/// Host commands, store and the local host implementation
pub mod host;

/// Logging utilities for debugging and error tracking
pub mod logger;

/// Extension data models
pub mod model;

/// Terminal user interface components and rendering
pub mod ui;

/// Utility functions and helpers
pub mod utils;
