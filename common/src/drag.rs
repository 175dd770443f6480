use crate::carousel::Direction;

// horizontal travel, in css pixels, before a drag counts as a step
pub const DRAG_THRESHOLD_PX: f64 = 50.0;

const PRIMARY_BUTTON: i16 = 0;

// pointer drag over the carousel
//
// a gesture produces at most one step: once the pointer has travelled far enough the
// direction is reported and every later move is ignored until the pointer is released
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DragGesture {
    start_x: Option<f64>,
    fired: bool,
}

impl DragGesture {
    pub fn pointer_down(&mut self, x: f64, button: i16) {
        if button != PRIMARY_BUTTON {
            return;
        }

        self.start_x = Some(x);
        self.fired = false;
    }

    // dragging left brings the next card in
    pub fn pointer_move(&mut self, x: f64) -> Option<Direction> {
        let start = self.start_x?;

        if self.fired {
            return None;
        }

        let delta = x - start;

        if delta.abs() < DRAG_THRESHOLD_PX {
            return None;
        }

        self.fired = true;

        Some(if delta < 0.0 {
            Direction::Forward
        } else {
            Direction::Backward
        })
    }

    // pointer-up and pointer-leave both end the gesture
    pub fn pointer_up(&mut self) {
        self.start_x = None;
        self.fired = false;
    }

    pub fn is_dragging(&self) -> bool {
        self.start_x.is_some()
    }
}
