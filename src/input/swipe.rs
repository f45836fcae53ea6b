use crate::calendar::Direction;

/// Minimum horizontal travel, in pixels, for a drag to count as a swipe.
pub const SWIPE_THRESHOLD_PX: f32 = 50.0;

/// Turns a press/release pair into a month step.
///
/// Swiping left (finger moves toward smaller x) shows the next month, swiping
/// right shows the previous one.
#[derive(Debug, Clone)]
pub struct SwipeTracker {
    threshold: f32,
    start_x: Option<f32>,
}

impl SwipeTracker {
    pub fn new(threshold: f32) -> Self {
        Self {
            threshold,
            start_x: None,
        }
    }

    pub fn start(&mut self, x: f32) {
        self.start_x = Some(x);
    }

    pub fn is_tracking(&self) -> bool {
        self.start_x.is_some()
    }

    pub fn finish(&mut self, end_x: f32) -> Option<Direction> {
        let start_x = self.start_x.take()?;
        let diff = start_x - end_x;

        if diff.abs() <= self.threshold {
            return None;
        }

        if diff > 0.0 {
            Some(Direction::Next)
        } else {
            Some(Direction::Previous)
        }
    }
}

impl Default for SwipeTracker {
    fn default() -> Self {
        Self::new(SWIPE_THRESHOLD_PX)
    }
}
