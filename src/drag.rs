//! Pointer-drag state machine for the sidebar handle.
//!
//! A press on the handle opens a [`DragSession`] holding the pointer's start
//! position and the width at that instant. Every move while the session is
//! open recomputes the width from that baseline; a release closes it.

use crate::config::WidthBounds;
use crate::events::PointerEvent;

/// Baseline captured when a drag gesture starts.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragSession {
    /// Pointer x at the press, in logical pixels.
    pub start_x: f32,
    /// Sidebar width at the press.
    pub baseline_width: f32,
}

impl DragSession {
    pub fn new(start_x: f32, baseline_width: f32) -> Self {
        Self {
            start_x,
            baseline_width,
        }
    }

    /// Width for a pointer now at `x`.
    pub fn width_at(self, x: f32, bounds: WidthBounds) -> f32 {
        let delta = x - self.start_x;
        bounds.clamp(self.baseline_width + delta)
    }
}

/// Whether a drag gesture is in progress.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum DragState {
    #[default]
    Idle,
    Dragging(DragSession),
}

/// Tracks at most one drag gesture at a time.
#[derive(Debug, Default)]
pub struct DragHandler {
    state: DragState,
}

impl DragHandler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> DragState {
        self.state
    }

    pub fn session(&self) -> Option<DragSession> {
        match self.state {
            DragState::Idle => None,
            DragState::Dragging(session) => Some(session),
        }
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.state, DragState::Dragging(_))
    }

    /// Starts a gesture. Ignored while one is already in progress.
    pub fn press(&mut self, x: f32, current_width: f32) -> bool {
        if self.is_dragging() || !x.is_finite() {
            return false;
        }
        let session = DragSession::new(x, current_width);
        log::debug!("Sidebar drag started at x={x:.1}, width={current_width:.1}");
        self.state = DragState::Dragging(session);
        true
    }

    /// Returns the new width for a pointer at `x`, or `None` when idle.
    pub fn pointer_moved(&self, x: f32, bounds: WidthBounds) -> Option<f32> {
        if !x.is_finite() {
            return None;
        }
        self.session().map(|session| session.width_at(x, bounds))
    }

    /// Ends the gesture, handing back the closed session if there was one.
    pub fn release(&mut self) -> Option<DragSession> {
        let session = self.session();
        self.state = DragState::Idle;
        if session.is_some() {
            log::debug!("Sidebar drag released");
        }
        session
    }

    /// Feeds one pointer event through the state machine.
    ///
    /// Returns the width to apply when the event changes it.
    pub fn handle(
        &mut self,
        event: PointerEvent,
        current_width: f32,
        bounds: WidthBounds,
    ) -> Option<f32> {
        match event {
            PointerEvent::Press { x } => {
                self.press(x, current_width);
                None
            }
            PointerEvent::Move { x } => self
                .pointer_moved(x, bounds)
                .filter(|width| *width != current_width),
            PointerEvent::Release => {
                self.release();
                None
            }
        }
    }
}
