use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};

use super::swipe::SwipeTracker;
use crate::app::AppState;
use crate::calendar::Direction;

/// Maps terminal mouse input onto clicks and swipes over the month grid.
#[derive(Debug, Clone)]
pub struct MouseAdapter {
    swipe: SwipeTracker,
    column_width_px: f32,
    pressed_cell: Option<usize>,
}

impl MouseAdapter {
    pub fn new(swipe_threshold_px: f32, column_width_px: f32) -> Self {
        Self {
            swipe: SwipeTracker::new(swipe_threshold_px),
            column_width_px,
            pressed_cell: None,
        }
    }

    /// `cell_at` resolves a terminal position to a grid position, if any.
    pub fn handle<F>(&mut self, event: MouseEvent, state: &mut AppState, cell_at: F)
    where
        F: Fn(u16, u16) -> Option<usize>,
    {
        let x = f32::from(event.column) * self.column_width_px;

        match event.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                self.swipe.start(x);
                self.pressed_cell = cell_at(event.column, event.row);
            }
            MouseEventKind::Up(MouseButton::Left) => {
                let pressed = self.pressed_cell.take();
                if let Some(direction) = self.swipe.finish(x) {
                    tracing::debug!("Swipe detected: {:?}", direction);
                    state.advance(direction);
                } else if let Some(position) = cell_at(event.column, event.row)
                    && pressed == Some(position)
                {
                    state.select(position);
                }
            }
            MouseEventKind::ScrollDown => state.advance(Direction::Next),
            MouseEventKind::ScrollUp => state.advance(Direction::Previous),
            _ => {}
        }
    }
}
