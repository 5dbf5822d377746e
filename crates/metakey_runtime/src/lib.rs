//! Config lifecycle, persistence, and widget layer for metakey.
//!
//! This crate provides:
//! - [`EditorConfig`] - Process-wide configuration owning the key registry
//! - [`EditorSession`] - Customization-module lifecycle with restart-on-edit
//! - [`serialize`] - MessagePack snapshots of the configuration
//! - [`widget`] - Widget descriptions and raw-value validation per key

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod config;
pub mod serialize;
pub mod session;
pub mod widget;

pub use config::EditorConfig;
pub use session::{CustomizationModule, EditorSession};
pub use widget::WidgetKind;
