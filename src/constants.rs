/// Width of the drag handle strip in pixels.
pub const HANDLE_WIDTH: f32 = 5.0;

/// Width of the line drawn along the sidebar's right edge.
pub const SIDEBAR_BORDER_WIDTH: f32 = 1.0;

/// Inner margin of the main content area.
pub const MAIN_PADDING: i8 = 20;
