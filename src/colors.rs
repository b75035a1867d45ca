//! Color constants for the sidebar layout.

use eframe::egui::Color32;

// Sidebar panel
pub const SIDEBAR_FILL: Color32 = Color32::from_rgb(0x0f, 0x0f, 0x0f);
pub const SIDEBAR_BORDER: Color32 = Color32::from_rgb(0xcc, 0xcc, 0xcc);

// Drag handle
pub const HANDLE_FILL: Color32 = Color32::from_rgb(0xdd, 0xdd, 0xdd);
pub const HANDLE_ACTIVE_FILL: Color32 = Color32::from_rgb(0xbb, 0xbb, 0xbb);
