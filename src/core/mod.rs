//! Framework-independent logic of the landing page
//!
//! The carousel state machine and visibility heuristics compile for both the
//! server and the browser so they can be unit tested natively.

pub mod carousel;
#[cfg(feature = "ssr")]
pub mod config;
pub mod content;
pub mod visibility;

pub use carousel::{CarouselConfig, GestureCarousel, TimerKind, TimerScheduler, WheelOutcome};
pub use content::Card;
