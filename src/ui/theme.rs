//! Theme context module for the landing page's dark/light appearance
//!
//! Provides:
//! - ThemeMode enum (Auto, Dark, Light)
//! - ThemeContext for reactive theme state
//! - System theme detection via prefers-color-scheme
//!
//! The choice is kept for the current visit only.

use leptos::prelude::*;

/// Theme mode options
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ThemeMode {
    #[default]
    Auto,
    Dark,
    Light,
}

impl ThemeMode {
    /// Whether this mode renders dark, given the system preference
    pub fn resolves_dark(&self, system_prefers_dark: bool) -> bool {
        match self {
            ThemeMode::Dark => true,
            ThemeMode::Light => false,
            ThemeMode::Auto => system_prefers_dark,
        }
    }

    /// Explicit mode showing the opposite of what is currently displayed
    pub fn toggled(&self, system_prefers_dark: bool) -> Self {
        if self.resolves_dark(system_prefers_dark) {
            ThemeMode::Light
        } else {
            ThemeMode::Dark
        }
    }
}

/// Theme context for managing theme state
#[derive(Clone, Copy)]
pub struct ThemeContext {
    /// Current theme mode setting
    pub mode: RwSignal<ThemeMode>,
    /// Whether the current effective theme is dark (considering auto mode)
    pub is_dark: Memo<bool>,
    /// System prefers dark mode
    pub system_prefers_dark: RwSignal<bool>,
}

impl ThemeContext {
    pub fn set_mode(&self, mode: ThemeMode) {
        self.mode.set(mode);
    }

    /// Switch between dark and light
    pub fn toggle(&self) {
        let next = self
            .mode
            .get_untracked()
            .toggled(self.system_prefers_dark.get_untracked());
        self.set_mode(next);
    }

    /// Apply the dark class to the document element
    pub fn apply_theme_class(&self) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(html) = web_sys::window()
                .and_then(|window| window.document())
                .and_then(|document| document.document_element())
            {
                let class_list = html.class_list();
                if self.is_dark.get_untracked() {
                    let _ = class_list.add_1("dark");
                } else {
                    let _ = class_list.remove_1("dark");
                }
            }
        }
    }
}

/// Detect system color scheme preference
fn detect_system_prefers_dark() -> bool {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            if let Ok(Some(media_query)) = window.match_media("(prefers-color-scheme: dark)") {
                return media_query.matches();
            }
        }
    }
    // The page is designed dark-first; the server renders dark
    true
}

/// Provide theme context to the application
pub fn provide_theme_context() -> ThemeContext {
    let mode = RwSignal::new(ThemeMode::Auto);
    let system_prefers_dark = RwSignal::new(detect_system_prefers_dark());

    // Compute effective dark mode
    let is_dark = Memo::new(move |_| mode.get().resolves_dark(system_prefers_dark.get()));

    let ctx = ThemeContext {
        mode,
        is_dark,
        system_prefers_dark,
    };

    // Listen for system theme changes
    #[cfg(feature = "hydrate")]
    {
        use wasm_bindgen::JsCast;
        use wasm_bindgen::closure::Closure;

        Effect::new(move |_| {
            if let Some(window) = web_sys::window() {
                if let Ok(Some(media_query)) = window.match_media("(prefers-color-scheme: dark)") {
                    let handler = Closure::<dyn Fn(web_sys::MediaQueryListEvent)>::new(
                        move |e: web_sys::MediaQueryListEvent| {
                            system_prefers_dark.set(e.matches());
                        },
                    );

                    let _ = media_query.add_event_listener_with_callback(
                        "change",
                        handler.as_ref().unchecked_ref(),
                    );

                    // The context lives as long as the page
                    handler.forget();
                }
            }
        });

        // Apply theme class initially and on changes
        Effect::new(move |_| {
            let _ = ctx.is_dark.get();
            ctx.apply_theme_class();
        });
    }

    provide_context(ctx);

    ctx
}

/// Use theme context from anywhere in the component tree
pub fn use_theme_context() -> ThemeContext {
    use_context::<ThemeContext>().expect("ThemeContext should be provided")
}
