//! Pointer input.
//!
//! [`Input`] sits between raw winit window events and the effects. Cursor
//! movement comes back from [`Input::handle_event`] as a [`PointerEvent`] so
//! the host can hand it straight to a trail and the cursor ring.

use glam::Vec2;
use winit::event::WindowEvent;

/// One raw pointer movement, in window pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerEvent {
    pub x: f32,
    pub y: f32,
}

/// Pointer state for one window.
#[derive(Debug, Default)]
pub struct Input {
    pointer_position: Vec2,
    pointer_inside: bool,
}

impl Input {
    /// Create a new input tracker.
    pub fn new() -> Self {
        Self::default()
    }

    /// Pointer position in window pixels.
    pub fn pointer_position(&self) -> Vec2 {
        self.pointer_position
    }

    /// Whether the pointer is over the window.
    pub fn pointer_inside(&self) -> bool {
        self.pointer_inside
    }

    /// Record a pointer move and return it as an event.
    pub fn pointer_moved(&mut self, x: f32, y: f32) -> PointerEvent {
        self.pointer_position = Vec2::new(x, y);
        self.pointer_inside = true;
        PointerEvent { x, y }
    }

    /// Process a winit window event.
    ///
    /// Returns the pointer event for cursor movement, `None` otherwise.
    pub fn handle_event(&mut self, event: &WindowEvent) -> Option<PointerEvent> {
        match event {
            WindowEvent::CursorMoved { position, .. } => {
                Some(self.pointer_moved(position.x as f32, position.y as f32))
            }
            WindowEvent::CursorLeft { .. } => {
                self.pointer_inside = false;
                None
            }
            _ => None,
        }
    }
}
