pub mod launch_screen;
pub mod pages;
pub mod scroll_cards;
pub mod theme;

pub use launch_screen::LaunchScreen;
pub use scroll_cards::ScrollCards;
pub use theme::{ThemeContext, ThemeMode, provide_theme_context, use_theme_context};
