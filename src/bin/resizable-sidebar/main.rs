#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod cli;
mod ui;

use clap::Parser;
use cli::Args;
use eframe::egui;
use egui_toast::{Toast, ToastKind, ToastOptions, Toasts};
use resizable_sidebar::{ResizableSidebar, SidebarConfig};

/// Demo window: a resizable sidebar next to a main content area.
pub struct SidebarDemoApp {
    sidebar: ResizableSidebar,
    toasts: Toasts,
}

impl SidebarDemoApp {
    fn new(config: SidebarConfig, config_error: Option<String>) -> Self {
        let mut toasts = Toasts::new()
            .anchor(egui::Align2::RIGHT_TOP, (-10.0, 10.0))
            .direction(egui::Direction::TopDown);

        if let Some(err) = config_error {
            toasts.add(Toast {
                kind: ToastKind::Error,
                text: format!("{err}; using defaults").into(),
                options: ToastOptions::default()
                    .duration_in_seconds(10.0)
                    .show_icon(true),
                ..Default::default()
            });
        }

        if let Some(warning) = config.warning() {
            toasts.add(Toast {
                kind: ToastKind::Warning,
                text: warning.to_string().into(),
                options: ToastOptions::default()
                    .duration_in_seconds(8.0)
                    .show_icon(true),
                ..Default::default()
            });
        }

        Self {
            sidebar: ResizableSidebar::new("sidebar", config),
            toasts,
        }
    }
}

impl eframe::App for SidebarDemoApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let bounds = self.sidebar.bounds();
        let width = self.sidebar.width();

        self.sidebar.show(ctx, ui::show_sidebar_content, |ui| {
            ui::show_main_content(ui, width, bounds);
        });

        self.toasts.show(ctx);
    }
}

fn main() -> eframe::Result {
    env_logger::init();

    let args = Args::parse();
    let (config, config_error) = match args.resolve() {
        Ok(config) => (config, None),
        Err(err) => {
            log::error!("Failed to load sidebar config: {err}");
            (SidebarConfig::default(), Some(err.to_string()))
        }
    };
    log::info!(
        "Sidebar width {} (min {}, max {})",
        config.default_width,
        config.min_width,
        config.max_width
    );

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([1280.0, 720.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Resizable Sidebar",
        options,
        Box::new(move |_cc| Ok(Box::new(SidebarDemoApp::new(config, config_error)))),
    )
}
