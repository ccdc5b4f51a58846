use crate::core::data::point::Point;
use winit::event::{ElementState, MouseButton};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerGesture {
    PrimaryClick(Point),
    SecondaryPress(Point),
    SecondaryDrag(Point),
    SecondaryRelease,
}

/// Turns raw cursor and button events into canvas gestures.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct PointerInputState {
    cursor: Option<Point>,
    secondary_held: bool,
}

impl PointerInputState {
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.secondary_held
    }

    pub fn cursor_moved(&mut self, pixel: Point) -> Option<PointerGesture> {
        self.cursor = Some(pixel);

        self.secondary_held.then_some(PointerGesture::SecondaryDrag(pixel))
    }

    pub fn cursor_left(&mut self) {
        self.cursor = None;
    }

    pub fn handle_button(&mut self, button: MouseButton, state: ElementState) -> Option<PointerGesture> {
        match (button, state) {
            (MouseButton::Left, ElementState::Pressed) if !self.secondary_held => {
                self.cursor.map(PointerGesture::PrimaryClick)
            }
            (MouseButton::Right, ElementState::Pressed) if !self.secondary_held => {
                let cursor = self.cursor?;
                self.secondary_held = true;
                Some(PointerGesture::SecondaryPress(cursor))
            }
            (MouseButton::Right, ElementState::Released) if self.secondary_held => {
                self.secondary_held = false;
                Some(PointerGesture::SecondaryRelease)
            }
            _ => None,
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
