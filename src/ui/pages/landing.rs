//! Landing page component
//!
//! Marketing page for Open Fiesta featuring:
//! - SEO meta tags for search engine optimization
//! - Theme-dependent background and fixed header with mobile menu
//! - Hero section with "try it" and GitHub buttons
//! - How It Works steps
//! - Scroll-driven feature carousel
//! - Example prompts, tech stack badges and benefits
//! - Community call-to-action and footer

use leptos::prelude::*;
use leptos_meta::{Meta, Title};
use leptos_router::components::A;

use crate::core::content::{
    BENEFITS, CHAT_PATH, COMMUNITY_STATS, Card, EXAMPLE_PROMPTS, FEATURES, FOOTER_LINKS,
    HERO_SUBTITLE, HERO_TITLE, HOW_IT_WORKS, LOGO_PATH, NAV_SECTIONS, PRODUCT_NAME,
    REPOSITORY_URL, TECH_STACK, TechBadge,
};
use crate::ui::launch_screen::LaunchScreen;
use crate::ui::scroll_cards::ScrollCards;
use crate::ui::theme::{ThemeContext, use_theme_context};

/// Landing page component
#[component]
pub fn LandingPage() -> impl IntoView {
    let theme = use_theme_context();

    view! {
        <SeoMeta />

        <main class="min-h-screen w-full relative" class:dark=move || theme.is_dark.get()>
            <Background theme=theme />

            <Header theme=theme />

            <LaunchScreen />

            // Hero Section
            <section class="relative z-10 pt-24 sm:pt-32 pb-12 sm:pb-20 px-4 sm:px-6">
                <div class="container mx-auto text-center max-w-7xl">
                    <h1 class="text-3xl sm:text-5xl lg:text-7xl font-bold mb-4 sm:mb-6 text-white leading-tight
                               landing-fade-in-up landing-delay-200">
                        {HERO_TITLE}
                    </h1>
                    <p class="text-base sm:text-xl lg:text-2xl text-gray-300 mb-8 sm:mb-12 max-w-4xl mx-auto leading-relaxed px-4
                              landing-fade-in-up landing-delay-400">
                        {HERO_SUBTITLE}
                    </p>

                    <div class="flex flex-col sm:flex-row gap-4 justify-center items-center px-4 landing-fade-in-up landing-delay-600">
                        <A href=CHAT_PATH attr:class=move || primary_button_class(theme.is_dark.get())>
                            "Try It Now - Free"
                        </A>
                        <a
                            href=REPOSITORY_URL
                            class="w-full sm:w-auto bg-black/30 backdrop-blur-sm border border-gray-600/30 text-gray-300
                                   hover:text-white hover:bg-black/50 hover:border-white/40 px-6 sm:px-8 py-3 sm:py-4
                                   rounded-full font-semibold transition-all flex items-center justify-center gap-2 landing-press"
                        >
                            <GithubIcon />
                            "Open Source on GitHub"
                        </a>
                    </div>
                </div>
            </section>

            // How It Works
            <section id="how-it-works" class="relative z-10 py-12 sm:py-20 px-4 sm:px-6">
                <div class="container mx-auto max-w-7xl">
                    <SectionTitle text="How It Works" />
                    <div class="grid md:grid-cols-3 gap-6 sm:gap-12">
                        {HOW_IT_WORKS
                            .iter()
                            .enumerate()
                            .map(|(index, step)| view! { <StepCard step=*step index=index /> })
                            .collect_view()}
                    </div>
                </div>
            </section>

            // Key Features
            <section id="features" class="relative z-10 py-12 sm:py-20 px-4 sm:px-6">
                <h2 class="text-3xl sm:text-4xl lg:text-5xl font-bold text-center text-white">
                    "Powerful Features"
                </h2>
                <ScrollCards cards=FEATURES />
            </section>

            // Example Prompts
            <section class="relative z-10 py-12 sm:py-20 px-4 sm:px-6">
                <div class="container mx-auto max-w-7xl">
                    <SectionTitle text="Try These Prompts" />
                    <div class="grid sm:grid-cols-2 lg:grid-cols-3 gap-4 sm:gap-6">
                        {EXAMPLE_PROMPTS
                            .iter()
                            .map(|prompt| view! { <PromptTile prompt=*prompt /> })
                            .collect_view()}
                    </div>
                </div>
            </section>

            // Tech Stack
            <section id="tech-stack" class="relative z-10 py-12 sm:py-20 px-4 sm:px-6">
                <div class="container mx-auto max-w-7xl">
                    <SectionTitle text="Built with Modern Tech" />
                    <div class="grid grid-cols-2 sm:grid-cols-3 lg:grid-cols-6 gap-4 sm:gap-8">
                        {TECH_STACK
                            .iter()
                            .enumerate()
                            .map(|(index, badge)| view! { <TechBadgeCard badge=*badge index=index /> })
                            .collect_view()}
                    </div>
                </div>
            </section>

            // Benefits
            <section class="relative z-10 py-12 sm:py-20 px-4 sm:px-6">
                <div class="container mx-auto max-w-7xl">
                    <SectionTitle text="Why Choose Open Fiesta?" />
                    <div class="grid md:grid-cols-2 lg:grid-cols-4 gap-6 sm:gap-8">
                        {BENEFITS
                            .iter()
                            .enumerate()
                            .map(|(index, benefit)| view! { <BenefitCard benefit=*benefit index=index /> })
                            .collect_view()}
                    </div>
                </div>
            </section>

            <CommunitySection />

            <Footer />

            // CSS Animations
            <LandingStyles />

            // Intersection Observer for scroll animations
            <ScrollAnimationScript />
        </main>
    }
}

/// Class of the primary call-to-action button for the active theme
fn primary_button_class(is_dark: bool) -> &'static str {
    if is_dark {
        "landing-press inline-flex w-auto max-w-full px-4 lg:px-6 py-3 lg:py-4 rounded-2xl text-sm lg:text-base font-medium
         transition-all duration-300 backdrop-blur-lg shadow-md hover:shadow-xl text-white/85 hover:text-white
         bg-gradient-to-br from-black/35 via-black/25 to-black/15 border border-white/10 hover:border-white/20
         ring-1 ring-red-400/10 hover:ring-red-400/20"
    } else {
        "landing-press inline-flex w-auto max-w-full px-4 lg:px-6 py-3 lg:py-4 rounded-2xl text-sm lg:text-base font-medium
         transition-all duration-300 backdrop-blur-lg shadow-md hover:shadow-xl text-orange-950/80 hover:text-orange-950
         bg-gradient-to-br from-orange-50/80 to-orange-100/70 border border-orange-200/70 hover:border-orange-300"
    }
}

/// Stagger delay class for the `index`-th item of a grid
fn stagger_class(index: usize) -> &'static str {
    match index {
        0 => "landing-delay-0",
        1 => "landing-delay-200",
        2 => "landing-delay-400",
        _ => "landing-delay-600",
    }
}

/// Fixed full-screen gradient behind the page.
///
/// Both variants are always rendered and toggled by class so server and client
/// markup match regardless of the visitor's color scheme.
#[component]
fn Background(theme: ThemeContext) -> impl IntoView {
    view! {
        <div class="fixed inset-0 z-0 landing-bg-dark" class:hidden=move || !theme.is_dark.get()></div>
        <div class="fixed inset-0 z-0 landing-bg-light" class:hidden=move || theme.is_dark.get()></div>
        // Soft vignette for dark mode
        <div
            class="fixed inset-0 z-0 pointer-events-none landing-vignette"
            class:hidden=move || !theme.is_dark.get()
        ></div>
    }
}

/// Header component with mobile menu support
#[component]
fn Header(theme: ThemeContext) -> impl IntoView {
    let (mobile_menu_open, set_mobile_menu_open) = signal(false);

    view! {
        <header class="fixed top-0 w-full z-50 backdrop-blur-md bg-black/10 landing-slide-down">
            <nav class="container mx-auto px-4 sm:px-6 py-4 flex justify-between items-center">
                <A href="/" attr:class="flex items-center">
                    <img src=LOGO_PATH alt="Open Fiesta Logo" width="120" height="32" class="h-8 w-auto" />
                </A>

                // Desktop Navigation
                <div class="hidden lg:flex items-center gap-8 landing-fade-in landing-delay-200">
                    {NAV_SECTIONS
                        .iter()
                        .map(|(href, label)| {
                            view! {
                                <a href=*href class="text-gray-300 hover:text-white transition-colors">
                                    {*label}
                                </a>
                            }
                        })
                        .collect_view()}
                    <a href=REPOSITORY_URL class="text-gray-300 hover:text-white transition-colors">
                        "GitHub"
                    </a>
                    <ThemeToggle theme=theme />
                    <A
                        href=CHAT_PATH
                        attr:class="landing-pop px-2 py-1 rounded-md bg-red-950 text-red-400 border border-red-400 border-b-2
                                    hover:brightness-150 active:opacity-75 transition-all"
                    >
                        "Get Started"
                    </A>
                </div>

                // Mobile menu button
                <button
                    class="lg:hidden text-white p-2"
                    on:click=move |_| set_mobile_menu_open.update(|open| *open = !*open)
                    aria-label="Toggle mobile menu"
                    aria-expanded=move || mobile_menu_open.get().to_string()
                >
                    <MenuIcon open=mobile_menu_open />
                </button>
            </nav>

            // Mobile menu
            <div
                class="lg:hidden overflow-hidden transition-all duration-300 bg-black/90 backdrop-blur-md"
                class:max-h-0=move || !mobile_menu_open.get()
                class:max-h-96=move || mobile_menu_open.get()
            >
                <div class="px-4 py-4 space-y-4">
                    {NAV_SECTIONS
                        .iter()
                        .map(|(href, label)| {
                            view! {
                                <a
                                    href=*href
                                    class="block text-gray-300 hover:text-white transition-colors"
                                    on:click=move |_| set_mobile_menu_open.set(false)
                                >
                                    {*label}
                                </a>
                            }
                        })
                        .collect_view()}
                    <a href=REPOSITORY_URL class="block text-gray-300 hover:text-white transition-colors">
                        "GitHub"
                    </a>
                    <div class="flex items-center gap-4">
                        <A href=CHAT_PATH attr:class=move || primary_button_class(theme.is_dark.get())>
                            "Get Started"
                        </A>
                        <ThemeToggle theme=theme />
                    </div>
                </div>
            </div>
        </header>
    }
}

/// Theme toggle button component
#[component]
fn ThemeToggle(theme: ThemeContext) -> impl IntoView {
    view! {
        <button
            class="p-2 rounded-lg text-gray-300 hover:text-white border border-white/20 hover:border-white/40 transition-colors"
            on:click=move |_| theme.toggle()
            aria-label="Toggle theme"
        >
            {move || {
                if theme.is_dark.get() {
                    view! {
                        // Sun
                        <svg class="w-5 h-5" fill="none" stroke="currentColor" viewBox="0 0 24 24" aria-hidden="true">
                            <circle cx="12" cy="12" r="4" stroke-width="2" />
                            <path stroke-linecap="round" stroke-width="2"
                                  d="M12 2v2m0 16v2M4.93 4.93l1.41 1.41m11.32 11.32l1.41 1.41M2 12h2m16 0h2M4.93 19.07l1.41-1.41m11.32-11.32l1.41-1.41" />
                        </svg>
                    }
                    .into_any()
                } else {
                    view! {
                        // Moon
                        <svg class="w-5 h-5" fill="none" stroke="currentColor" viewBox="0 0 24 24" aria-hidden="true">
                            <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2"
                                  d="M21 12.79A9 9 0 1111.21 3 7 7 0 0021 12.79z" />
                        </svg>
                    }
                    .into_any()
                }
            }}
        </button>
    }
}

/// Hamburger / close icon
#[component]
fn MenuIcon(open: ReadSignal<bool>) -> impl IntoView {
    view! {
        <svg class="w-6 h-6" fill="none" stroke="currentColor" viewBox="0 0 24 24" aria-hidden="true">
            <path
                stroke-linecap="round"
                stroke-linejoin="round"
                stroke-width="2"
                d=move || if open.get() { "M6 18L18 6M6 6l12 12" } else { "M4 6h16M4 12h16M4 18h16" }
            />
        </svg>
    }
}

/// Section heading revealed on scroll
#[component]
fn SectionTitle(text: &'static str) -> impl IntoView {
    view! {
        <h2 class="landing-scroll-animate text-3xl sm:text-4xl lg:text-5xl font-bold text-center mb-8 sm:mb-16 text-white">
            {text}
        </h2>
    }
}

#[component]
fn StepCard(step: Card, index: usize) -> impl IntoView {
    view! {
        <div class=format!("landing-scroll-animate {} text-center group", stagger_class(index))>
            <div class="w-16 h-16 sm:w-20 sm:h-20 bg-red-950 backdrop-blur-sm border border-red-950 rounded-full
                        flex items-center justify-center mx-auto mb-4 sm:mb-6 group-hover:scale-110
                        group-hover:bg-black/60 transition-all">
                <span class="text-2xl sm:text-3xl font-bold text-white">{step.icon}</span>
            </div>
            <h3 class="text-xl sm:text-2xl font-bold mb-3 sm:mb-4 text-white">{step.title}</h3>
            <p class="text-gray-300 leading-relaxed">{step.description}</p>
        </div>
    }
}

#[component]
fn PromptTile(prompt: &'static str) -> impl IntoView {
    view! {
        <div class="bg-black/20 hover:scale-105 backdrop-blur-sm border border-purple-500/20 rounded-xl p-4 sm:p-6
                    hover:bg-black/30 hover:border-red-900 transition-all group">
            <p class="text-gray-200 group-hover:text-white transition-colors text-sm sm:text-base">
                {format!("\"{prompt}\"")}
            </p>
        </div>
    }
}

#[component]
fn TechBadgeCard(badge: TechBadge, index: usize) -> impl IntoView {
    view! {
        <div class=format!("landing-scroll-animate {} text-center group", stagger_class(index))>
            <div class="bg-black/20 backdrop-blur-sm border border-white/10 rounded-2xl p-4 sm:p-6 hover:bg-black/30
                        transition-all hover:border-white/20 group-hover:scale-105">
                <div class="text-2xl sm:text-3xl mb-2 sm:mb-4">{badge.icon}</div>
                <h3 class="text-sm sm:text-base font-semibold text-white">{badge.name}</h3>
            </div>
        </div>
    }
}

#[component]
fn BenefitCard(benefit: Card, index: usize) -> impl IntoView {
    view! {
        <div class=format!("landing-scroll-animate {} text-center", stagger_class(index))>
            <div class="w-16 h-16 bg-black/40 backdrop-blur-sm border border-yellow-500/30 rounded-full
                        flex items-center justify-center mx-auto mb-4 sm:mb-6">
                <span class="text-2xl">{benefit.icon}</span>
            </div>
            <h3 class="text-xl font-bold mb-3 text-white">{benefit.title}</h3>
            <p class="text-gray-300 text-sm sm:text-base">{benefit.description}</p>
        </div>
    }
}

/// GitHub stats and final call to action
#[component]
fn CommunitySection() -> impl IntoView {
    view! {
        <section class="relative z-10 py-12 sm:py-20 px-4 sm:px-6">
            <div class="container mx-auto max-w-4xl text-center">
                <div class="bg-black/20 backdrop-blur-sm border border-white/10 rounded-3xl p-6 sm:p-12">
                    <h2 class="landing-scroll-animate text-3xl sm:text-4xl lg:text-5xl font-bold mb-4 sm:mb-6 text-white">
                        "Join the Community"
                    </h2>
                    <p class="text-lg sm:text-xl text-gray-300 mb-6 sm:mb-8">
                        {format!("{PRODUCT_NAME} has gained ")}
                        <span class="text-orange-400 font-semibold">
                            {format!("{} stars", COMMUNITY_STATS.stars)}
                        </span>
                        " and "
                        <span class="text-blue-400 font-semibold">
                            {format!("{} forks", COMMUNITY_STATS.forks)}
                        </span>
                        " from developers worldwide"
                    </p>
                    <div class="landing-scroll-animate flex flex-col sm:flex-row gap-4 justify-center">
                        <A
                            href=CHAT_PATH
                            attr:class="landing-press bg-black/40 backdrop-blur-sm border border-red-900 text-white px-6 sm:px-8 py-3 sm:py-4
                                        rounded-full font-semibold hover:bg-black/60 hover:border-red-800 hover:shadow-2xl
                                        hover:shadow-red-800 transition-all text-base sm:text-lg"
                        >
                            "Start Your First Chat"
                        </A>
                    </div>
                </div>
            </div>
        </section>
    }
}

/// SEO Meta tags component using leptos_meta
#[component]
fn SeoMeta() -> impl IntoView {
    view! {
        // Page title
        <Title text="Open Fiesta - Chat & Compare 300+ AI Models" />

        // Basic meta tags
        <Meta name="description" content="Chat with and compare 300+ AI models from OpenAI, Google, Anthropic, DeepSeek and more in one open-source interface. Your API keys stay in your browser." />
        <Meta name="keywords" content="AI chat, compare AI models, GPT-4, Claude, Gemini, DeepSeek, LLaMA, open source, multi-model chat" />

        // Open Graph / Facebook
        <Meta property="og:type" content="website" />
        <Meta property="og:title" content="Open Fiesta - Chat & Compare 300+ AI Models" />
        <Meta property="og:description" content="Access top AI models side by side, instantly, securely, and reliably." />
        <Meta property="og:image" content="/og-image.png" />

        // Twitter
        <Meta name="twitter:card" content="summary_large_image" />
        <Meta name="twitter:title" content="Open Fiesta - Chat & Compare 300+ AI Models" />
        <Meta name="twitter:description" content="Access top AI models side by side, instantly, securely, and reliably." />
    }
}

/// GitHub icon component
#[component]
fn GithubIcon() -> impl IntoView {
    view! {
        <svg class="w-5 h-5" fill="currentColor" viewBox="0 0 20 20" aria-hidden="true">
            <path
                fill-rule="evenodd"
                clip-rule="evenodd"
                d="M10 0C4.477 0 0 4.484 0 10.017c0 4.425 2.865 8.18 6.839 9.504.5.092.682-.217.682-.483 0-.237-.008-.868-.013-1.703-2.782.605-3.369-1.343-3.369-1.343-.454-1.158-1.11-1.466-1.11-1.466-.908-.62.069-.608.069-.608 1.003.07 1.531 1.032 1.531 1.032.892 1.53 2.341 1.088 2.91.832.092-.647.35-1.088.636-1.338-2.22-.253-4.555-1.113-4.555-4.951 0-1.093.39-1.988 1.029-2.688-.103-.253-.446-1.272.098-2.65 0 0 .84-.27 2.75 1.026A9.564 9.564 0 0110 4.844c.85.004 1.705.115 2.504.337 1.909-1.296 2.747-1.027 2.747-1.027.546 1.379.203 2.398.1 2.651.64.7 1.028 1.595 1.028 2.688 0 3.848-2.339 4.695-4.566 4.942.359.31.678.921.678 1.856 0 1.338-.012 2.419-.012 2.747 0 .268.18.58.688.482A10.019 10.019 0 0020 10.017C20 4.484 15.522 0 10 0z"
            />
        </svg>
    }
}

/// Footer component
#[component]
fn Footer() -> impl IntoView {
    view! {
        <footer class="relative z-10 py-8 sm:py-12 px-4 sm:px-6 border-t border-white/10">
            <div class="container mx-auto max-w-7xl">
                <div class="flex flex-col md:flex-row justify-between items-center gap-6">
                    <div class="flex items-center gap-4">
                        <img src=LOGO_PATH alt="Open Fiesta Logo" width="100" height="26" class="h-6 w-auto" />
                        <span class="text-gray-400 text-sm">"Open Source AI Chat Platform"</span>
                    </div>
                    <div class="flex gap-6 text-sm">
                        {FOOTER_LINKS
                            .iter()
                            .map(|(label, href)| {
                                view! {
                                    <a href=*href class="text-gray-400 hover:text-white transition-colors">
                                        {*label}
                                    </a>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
                <div class="text-center mt-6 sm:mt-8 pt-6 sm:pt-8 border-t border-white/5">
                    <p class="text-gray-500 text-sm">
                        "© 2025 Open Fiesta. Built with ❤️ by the community."
                    </p>
                </div>
            </div>
        </footer>
    }
}

/// CSS styles for landing page animations and backgrounds
#[component]
fn LandingStyles() -> impl IntoView {
    view! {
        <style>
            r#"
            /* Backgrounds */
            .landing-bg-dark {
                background:
                    linear-gradient(0deg, rgba(0,0,0,0.6), rgba(0,0,0,0.6)),
                    radial-gradient(68% 58% at 50% 50%, #c81e3a 0%, #a51d35 16%, #7d1a2f 32%, #591828 46%, #3c1722 60%, #2a151d 72%, #1f1317 84%, #141013 94%, #0a0a0a 100%),
                    radial-gradient(90% 75% at 50% 50%, rgba(228,42,66,0.06) 0%, rgba(228,42,66,0) 55%),
                    radial-gradient(150% 120% at 8% 8%, rgba(0,0,0,0) 42%, #0b0a0a 82%, #070707 100%),
                    radial-gradient(150% 120% at 92% 92%, rgba(0,0,0,0) 42%, #0b0a0a 82%, #070707 100%),
                    radial-gradient(60% 50% at 50% 60%, rgba(240,60,80,0.06), rgba(0,0,0,0) 60%),
                    #050505;
            }

            .landing-bg-light {
                background:
                    radial-gradient(ellipse 85% 65% at 8% 8%, rgba(175, 109, 255, 0.42), transparent 60%),
                    radial-gradient(ellipse 75% 60% at 75% 35%, rgba(255, 235, 170, 0.55), transparent 62%),
                    radial-gradient(ellipse 70% 60% at 15% 80%, rgba(255, 100, 180, 0.40), transparent 62%),
                    radial-gradient(ellipse 70% 60% at 92% 92%, rgba(120, 190, 255, 0.45), transparent 62%),
                    linear-gradient(180deg, #f7eaff 0%, #fde2ea 100%);
            }

            .landing-vignette {
                background-image: radial-gradient(circle at 50% 50%, rgba(0,0,0,0) 55%, rgba(0,0,0,0.5) 100%);
                opacity: 0.95;
            }

            /* Entrance animations */
            @keyframes landing-fade-in-up {
                from {
                    opacity: 0;
                    transform: translateY(40px);
                }
                to {
                    opacity: 1;
                    transform: translateY(0);
                }
            }

            @keyframes landing-fade-in {
                from { opacity: 0; transform: translateX(50px); }
                to { opacity: 1; transform: translateX(0); }
            }

            @keyframes landing-slide-down {
                from { opacity: 0; transform: translateY(-100px); }
                to { opacity: 1; transform: translateY(0); }
            }

            @keyframes landing-pop {
                0% { transform: scale(0); }
                50% { transform: scale(1.2); }
                75% { transform: scale(0.95); }
                100% { transform: scale(1); }
            }

            .landing-fade-in-up {
                opacity: 0;
                animation: landing-fade-in-up 0.8s ease-out forwards;
            }

            .landing-fade-in {
                opacity: 0;
                animation: landing-fade-in 0.6s ease-out forwards;
            }

            .landing-slide-down {
                animation: landing-slide-down 0.6s cubic-bezier(0.6, -0.05, 0.01, 0.99) both;
            }

            .landing-pop {
                animation: landing-pop 1.2s ease-out 0.5s both;
            }

            .landing-press {
                cursor: pointer;
                transition: transform 0.2s;
            }

            .landing-press:hover {
                transform: scale(1.05);
            }

            .landing-press:active {
                transform: scale(0.95);
            }

            .landing-delay-0 { animation-delay: 0ms; transition-delay: 0ms; }
            .landing-delay-200 { animation-delay: 200ms; transition-delay: 200ms; }
            .landing-delay-400 { animation-delay: 400ms; transition-delay: 400ms; }
            .landing-delay-600 { animation-delay: 600ms; transition-delay: 600ms; }

            /* Scroll-triggered reveal */
            .landing-scroll-animate {
                opacity: 0;
                transform: translateY(40px);
                transition: opacity 0.6s ease-out, transform 0.6s ease-out;
            }

            .landing-scroll-animate.visible {
                opacity: 1;
                transform: translateY(0);
            }
            "#
        </style>
    }
}

/// Script for scroll-triggered animations using IntersectionObserver
///
/// Elements fade back out when they leave the viewport so the reveal replays.
#[component]
fn ScrollAnimationScript() -> impl IntoView {
    view! {
        <script>
            r#"
            (function() {
                function initScrollAnimations() {
                    const observer = new IntersectionObserver((entries) => {
                        entries.forEach(entry => {
                            entry.target.classList.toggle('visible', entry.isIntersecting);
                        });
                    }, {
                        threshold: 0.3
                    });

                    document.querySelectorAll('.landing-scroll-animate').forEach(el => {
                        observer.observe(el);
                    });
                }

                if (document.readyState === 'loading') {
                    document.addEventListener('DOMContentLoaded', initScrollAnimations);
                } else {
                    initScrollAnimations();
                }
            })();
            "#
        </script>
    }
}
