//! A sidebar panel for egui whose width is resized by dragging a handle,
//! kept between a minimum and maximum width.

pub mod colors;
pub mod config;
pub mod constants;
pub mod drag;
pub mod events;
pub mod widget;

pub use config::{BoundsWarning, ConfigError, SidebarConfig, WidthBounds};
pub use drag::{DragHandler, DragSession, DragState};
pub use events::PointerEvent;
pub use widget::ResizableSidebar;
