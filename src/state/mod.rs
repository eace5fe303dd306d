pub mod detector;
pub mod touch;

pub use detector::SwipeDetector;
pub use touch::{CompletedGesture, GestureSession, OpenGesture};
