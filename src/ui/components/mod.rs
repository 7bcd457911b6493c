//! Reusable UI components

pub mod extension_item;

// Component architecture
pub mod dashlet_component;
pub mod dialog_component;
pub mod notification_component;

// Component exports
pub use dashlet_component::DashletComponent;
pub use dialog_component::DialogComponent;
pub use notification_component::NotificationComponent;
