//! Core UI functionality for the extensions dashlet.
//!
//! This module contains the building blocks the shell is assembled from.
//!
//! # Module Components
//!
//! - [`actions`] - Action definitions and notifications
//! - [`component`] - Base component trait
//! - [`event_handler`] - Terminal event polling
//! - [`task_manager`] - Background execution of host commands
//!
//! # Architecture
//!
//! 1. **Components** implement the [`Component`] trait and turn keys into [`Action`]s
//! 2. **Actions** describe every state transition, including store updates
//! 3. **Events** are polled through the [`EventHandler`]
//! 4. **Host commands** run on the [`TaskManager`] and report back as actions

pub mod actions;
pub mod component;
pub mod event_handler;
pub mod task_manager;

pub use actions::{Action, DialogType, Notification};
pub use component::Component;
pub use event_handler::{EventHandler, EventType};
pub use task_manager::{TaskId, TaskManager};
