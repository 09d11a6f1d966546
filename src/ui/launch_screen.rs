//! Splash overlay shown on first paint
//!
//! The server-rendered page starts behind the splash; once the client has
//! hydrated, the splash fades out and is removed shortly after.

use leptos::prelude::*;

use crate::core::content::{LOGO_PATH, PRODUCT_NAME};

/// Delay between hydration and removal of the splash (ms)
pub const SPLASH_DISMISS_DELAY_MS: u32 = 350;

/// Splash overlay, removed `SPLASH_DISMISS_DELAY_MS` after hydration
#[component]
pub fn LaunchScreen() -> impl IntoView {
    let (is_hydrated, set_is_hydrated) = signal(false);
    let (show_splash, set_show_splash) = signal(true);

    // Effects only run in the browser, after hydration
    Effect::new(move |_| {
        set_is_hydrated.set(true);

        #[cfg(feature = "hydrate")]
        {
            use gloo_timers::future::TimeoutFuture;
            use wasm_bindgen_futures::spawn_local;

            spawn_local(async move {
                TimeoutFuture::new(SPLASH_DISMISS_DELAY_MS).await;
                // The page may already be gone
                let _ = set_show_splash.try_set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = set_show_splash;
    });

    view! {
        <Show when=move || show_splash.get()>
            <div
                class="fixed inset-0 z-[9999] flex items-center justify-center bg-[#0a0a0a] transition-opacity duration-300"
                class:opacity-0=move || is_hydrated.get()
                class:pointer-events-none=move || is_hydrated.get()
                aria-hidden="true"
            >
                <img src=LOGO_PATH alt=PRODUCT_NAME class="h-10 w-auto animate-pulse" />
            </div>
        </Show>
    }
}
