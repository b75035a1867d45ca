//! The three-region layout: sidebar, drag handle and main content.

use crate::colors;
use crate::config::{SidebarConfig, WidthBounds};
use crate::constants::{HANDLE_WIDTH, MAIN_PADDING, SIDEBAR_BORDER_WIDTH};
use crate::drag::DragHandler;
use crate::events::{PointerEvent, pointer_events};
use eframe::egui;
use std::hash::Hash;

/// A sidebar whose width follows drags on the handle next to it.
pub struct ResizableSidebar {
    id: egui::Id,
    bounds: WidthBounds,
    width: f32,
    drag: DragHandler,
    /// Where the handle was laid out last frame; presses are hit-tested against it.
    handle_rect: Option<egui::Rect>,
}

impl ResizableSidebar {
    pub fn new(id_salt: impl Hash, config: SidebarConfig) -> Self {
        let bounds = config.bounds();
        let width = bounds.clamp(config.default_width);

        Self {
            id: egui::Id::new(id_salt),
            bounds,
            width,
            drag: DragHandler::new(),
            handle_rect: None,
        }
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn bounds(&self) -> WidthBounds {
        self.bounds
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_dragging()
    }

    /// Where the drag handle was laid out on the last frame; presses are hit-tested against it.
    pub fn handle_rect(&self) -> Option<egui::Rect> {
        self.handle_rect
    }

    /// Ends any gesture in progress without touching the width.
    pub fn cancel_drag(&mut self) {
        self.drag.release();
    }

    /// Runs pointer events through the drag handler; returns whether the width changed.
    pub fn apply(&mut self, events: &[PointerEvent]) -> bool {
        let mut changed = false;
        for event in events {
            if let Some(width) = self.drag.handle(*event, self.width, self.bounds) {
                self.width = width;
                changed = true;
            }
        }
        changed
    }

    /// Renders the layout, with `sidebar_content` inside the sidebar and
    /// `main_content` filling the rest of the window.
    pub fn show(
        &mut self,
        ctx: &egui::Context,
        sidebar_content: impl FnOnce(&mut egui::Ui),
        main_content: impl FnOnce(&mut egui::Ui),
    ) {
        self.handle_input(ctx);

        self.show_sidebar(ctx, sidebar_content);
        self.show_handle(ctx);

        egui::CentralPanel::default()
            .frame(egui::Frame::central_panel(&ctx.style()).inner_margin(MAIN_PADDING))
            .show(ctx, main_content);

        if self.drag.is_dragging() {
            ctx.set_cursor_icon(egui::CursorIcon::ResizeHorizontal);
        }
    }

    fn handle_input(&mut self, ctx: &egui::Context) {
        let Some(handle_rect) = self.handle_rect else {
            return;
        };
        let events = ctx.input(|i| pointer_events(&i.events, handle_rect));
        if self.apply(&events) {
            log::trace!("Sidebar width now {:.1}", self.width);
        }
    }

    fn show_sidebar(&self, ctx: &egui::Context, content: impl FnOnce(&mut egui::Ui)) {
        egui::SidePanel::left(self.id.with("sidebar"))
            .exact_width(self.width)
            .resizable(false)
            .show_separator_line(false)
            .frame(egui::Frame::new().fill(colors::SIDEBAR_FILL))
            .show(ctx, |ui| {
                let panel_rect = ui.max_rect();
                // Content wider than the panel scrolls instead of widening it.
                ui.set_max_width(self.width);
                ui.set_clip_rect(panel_rect.intersect(ui.clip_rect()));
                egui::ScrollArea::both()
                    .auto_shrink([false, false])
                    .show(ui, content);

                ui.painter().vline(
                    panel_rect.right() - SIDEBAR_BORDER_WIDTH / 2.0,
                    panel_rect.y_range(),
                    egui::Stroke::new(SIDEBAR_BORDER_WIDTH, colors::SIDEBAR_BORDER),
                );
            });
    }

    fn show_handle(&mut self, ctx: &egui::Context) {
        let dragging = self.drag.is_dragging();

        let response = egui::SidePanel::left(self.id.with("handle"))
            .exact_width(HANDLE_WIDTH)
            .resizable(false)
            .show_separator_line(false)
            .frame(egui::Frame::new())
            .show(ctx, |ui| {
                let response = ui.allocate_response(ui.available_size(), egui::Sense::drag());
                let fill = if dragging || response.hovered() {
                    colors::HANDLE_ACTIVE_FILL
                } else {
                    colors::HANDLE_FILL
                };
                ui.painter().rect_filled(response.rect, 0.0, fill);
                response.on_hover_cursor(egui::CursorIcon::ResizeHorizontal)
            })
            .inner;

        self.handle_rect = Some(response.rect);
    }
}
