//! Not found page component
//!
//! A 404 error page displayed when a route is not found.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::core::content::{CHAT_PATH, LOGO_PATH};

/// Not found (404) page component
#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="min-h-screen bg-[#0a0a0a] flex flex-col items-center justify-center p-4">
            <div class="text-center">
                <img src=LOGO_PATH alt="Open Fiesta Logo" width="120" height="32" class="h-8 w-auto mx-auto mb-8 opacity-80" />

                // Error code
                <h1 class="text-6xl font-bold text-white mb-4">"404"</h1>

                // Title
                <h2 class="text-2xl font-semibold text-white mb-2">
                    "Page Not Found"
                </h2>

                // Description
                <p class="text-gray-400 mb-8 max-w-md mx-auto">
                    "The page you're looking for doesn't exist or has been moved."
                </p>

                // Actions
                <div class="flex flex-col sm:flex-row items-center justify-center gap-4">
                    <A
                        href="/"
                        attr:class="px-6 py-3 bg-red-950 text-red-300 border border-red-400 hover:brightness-150 font-medium rounded-lg transition-all"
                    >
                        "Go Home"
                    </A>
                    <A
                        href=CHAT_PATH
                        attr:class="px-6 py-3 border border-white/20 text-gray-300 hover:text-white hover:border-white/40 font-medium rounded-lg transition-colors"
                    >
                        "Start Chatting"
                    </A>
                </div>
            </div>

            // Footer
            <div class="absolute bottom-8 text-center">
                <p class="text-sm text-gray-500">
                    "© 2025 Open Fiesta"
                </p>
            </div>
        </div>
    }
}
