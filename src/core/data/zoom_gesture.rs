use crate::core::data::point::Point;

/// Sorted pixel bounds of a zoom square, both ends inclusive.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct ZoomRect {
    pub x_min: i32,
    pub x_max: i32,
    pub y_min: i32,
    pub y_max: i32,
}

/// A secondary-button drag selecting a square region to zoom into.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct ZoomGesture {
    anchor: Point,
    current: Point,
    active: bool,
}

impl ZoomGesture {
    #[must_use]
    pub fn begin(anchor: Point) -> Self {
        Self {
            anchor,
            current: anchor,
            active: true,
        }
    }

    /// Moves the free corner towards `pointer`, keeping the selection square.
    ///
    /// The side is the smaller of the two displacements; each axis keeps the
    /// direction the pointer moved in.
    pub fn drag_to(&mut self, pointer: Point) {
        if !self.active {
            return;
        }

        let dx = pointer.x as i64 - self.anchor.x as i64;
        let dy = pointer.y as i64 - self.anchor.y as i64;
        let side = dx.abs().min(dy.abs());

        let end_x = if dx >= 0 { self.anchor.x as i64 + side } else { self.anchor.x as i64 - side };
        let end_y = if dy >= 0 { self.anchor.y as i64 + side } else { self.anchor.y as i64 - side };

        // |end - anchor| <= |pointer - anchor|, so both ends stay within i32
        self.current = Point::new(end_x as i32, end_y as i32);
    }

    /// Ends the gesture, returning the selected square or `None` when it has no area.
    pub fn finish(&mut self) -> Option<ZoomRect> {
        self.active = false;

        if self.is_degenerate() {
            return None;
        }

        Some(self.rect())
    }

    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        self.anchor.x == self.current.x || self.anchor.y == self.current.y
    }

    #[must_use]
    pub fn rect(&self) -> ZoomRect {
        ZoomRect {
            x_min: self.anchor.x.min(self.current.x),
            x_max: self.anchor.x.max(self.current.x),
            y_min: self.anchor.y.min(self.current.y),
            y_max: self.anchor.y.max(self.current.y),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square(x_min: i32, x_max: i32, y_min: i32, y_max: i32) -> ZoomRect {
        ZoomRect {
            x_min,
            x_max,
            y_min,
            y_max,
        }
    }

    #[test]
    fn test_begin_starts_degenerate() {
        let gesture = ZoomGesture::begin(Point::new(10, 20));

        assert!(gesture.is_degenerate());
        assert_eq!(gesture.rect(), square(10, 10, 20, 20));
    }

    #[test]
    fn test_drag_clamps_to_square_using_smaller_side() {
        let mut gesture = ZoomGesture::begin(Point::new(100, 100));

        gesture.drag_to(Point::new(150, 130));
        assert_eq!(gesture.rect(), square(100, 130, 100, 130));

        gesture.drag_to(Point::new(110, 190));
        assert_eq!(gesture.rect(), square(100, 110, 100, 110));
    }

    #[test]
    fn test_drag_preserves_direction_per_axis() {
        let mut gesture = ZoomGesture::begin(Point::new(100, 100));

        gesture.drag_to(Point::new(40, 170));
        assert_eq!(gesture.rect(), square(40, 100, 100, 160));

        gesture.drag_to(Point::new(180, 75));
        assert_eq!(gesture.rect(), square(100, 125, 75, 100));

        gesture.drag_to(Point::new(90, 80));
        assert_eq!(gesture.rect(), square(90, 100, 90, 100));
    }

    #[test]
    fn test_drag_along_one_axis_is_degenerate() {
        let mut gesture = ZoomGesture::begin(Point::new(100, 100));

        gesture.drag_to(Point::new(300, 100));

        assert!(gesture.is_degenerate());
        assert_eq!(gesture.finish(), None);
    }

    #[test]
    fn test_finish_returns_sorted_rect() {
        let mut gesture = ZoomGesture::begin(Point::new(200, 200));

        gesture.drag_to(Point::new(150, 260));

        assert_eq!(gesture.finish(), Some(square(150, 200, 200, 250)));
    }

    #[test]
    fn test_drag_after_finish_is_ignored() {
        let mut gesture = ZoomGesture::begin(Point::new(0, 0));
        gesture.drag_to(Point::new(10, 10));
        let _ = gesture.finish();

        gesture.drag_to(Point::new(50, 50));

        assert_eq!(gesture.rect(), square(0, 10, 0, 10));
    }
}
