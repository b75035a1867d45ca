//! Content rendered inside the demo's sidebar and main area.

use eframe::egui;
use resizable_sidebar::WidthBounds;

/// Renders the child content placed in the sidebar.
pub fn show_sidebar_content(ui: &mut egui::Ui) {
    ui.add_space(8.0);
    ui.horizontal(|ui| {
        ui.add_space(8.0);
        ui.colored_label(egui::Color32::WHITE, "Hello I am children component");
    });
}

/// Renders the main content area.
pub fn show_main_content(ui: &mut egui::Ui, width: f32, bounds: WidthBounds) {
    ui.heading("Main Content");
    ui.label("This is the main content area.");
    ui.add_space(12.0);
    ui.weak(format!(
        "Sidebar: {width:.0}px ({:.0}..={:.0}). Drag the divider to resize.",
        bounds.min(),
        bounds.max()
    ));
}
