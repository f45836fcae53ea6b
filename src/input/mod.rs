pub mod command_mode;
pub mod mouse;
pub mod normal_mode;
pub mod swipe;

pub use mouse::MouseAdapter;
pub use swipe::{SWIPE_THRESHOLD_PX, SwipeTracker};
