//! Scroll-driven feature carousel
//!
//! While the carousel sits in the middle of the viewport, vertical wheel input
//! moves through the cards one at a time instead of scrolling the page. Once the
//! last card (or the first, scrolling up) is reached, the page scrolls normally.
//!
//! The gesture logic lives in [`crate::core::carousel`]; this module only wires it
//! to the browser (intersection observer, window wheel listener, timeouts) and
//! renders the active card.

use leptos::prelude::*;

use crate::core::carousel::{CarouselConfig, DEFAULT_ANIMATION_DURATION_MS, DEFAULT_THRESHOLD};
use crate::core::content::Card;

/// Feature carousel controlled by the mouse wheel / trackpad
#[component]
pub fn ScrollCards(
    /// Cards to show, in order
    #[prop(into)]
    cards: Vec<Card>,
    /// Card enter/exit animation duration in milliseconds
    #[prop(default = DEFAULT_ANIMATION_DURATION_MS)]
    animation_duration: u32,
    /// Accumulated wheel delta needed to change cards
    #[prop(default = DEFAULT_THRESHOLD)]
    threshold: f64,
) -> impl IntoView {
    let config = CarouselConfig::new(animation_duration, threshold);
    let card_count = cards.len();
    let cards = StoredValue::new(cards);
    let container_ref = NodeRef::<leptos::html::Div>::new();

    let (current_index, set_current_index) = signal(0_usize);
    // Previous card, kept on screen while its exit animation plays
    let (leaving_index, set_leaving_index) = signal(None::<usize>);

    #[cfg(feature = "hydrate")]
    {
        let mount = StoredValue::new_local(None::<browser::CarouselMount>);
        let exit_timer = StoredValue::new_local(None::<gloo_timers::callback::Timeout>);

        Effect::new(move |_| {
            let Some(element) = container_ref.get() else {
                return;
            };

            // Release the previous listener and observer before attaching new ones
            mount.update_value(|current| {
                current.take();
            });

            let on_advance = move |from: usize, to: usize| {
                set_leaving_index.set(Some(from));
                set_current_index.set(to);

                // Drop the outgoing card once its exit animation is over
                let clear = gloo_timers::callback::Timeout::new(animation_duration, move || {
                    set_leaving_index.try_update(|leaving| finish_exit(leaving, from));
                });
                exit_timer.set_value(Some(clear));
            };

            match browser::CarouselMount::attach(&element, config, card_count, on_advance) {
                Ok(attached) => mount.set_value(Some(attached)),
                Err(err) => {
                    leptos::logging::warn!("scroll cards: wheel navigation disabled: {:?}", err)
                }
            }
        });

        on_cleanup(move || {
            mount.try_update_value(|current| current.take());
            exit_timer.try_update_value(|timer| timer.take());
        });
    }

    #[cfg(not(feature = "hydrate"))]
    let _ = (config, set_current_index, set_leaving_index);

    view! {
        <div
            node_ref=container_ref
            class="scroll-cards relative h-[600px] flex items-center justify-center overflow-hidden
                   border border-white/10 backdrop-blur-md bg-gray/10 shadow-2xl"
        >
            <div class="relative w-full max-w-md h-full" style="touch-action: none;">
                {move || {
                    leaving_index
                        .get()
                        .and_then(|index| cards.with_value(|cards| cards.get(index).copied()))
                        .map(|card| {
                            view! {
                                <CardFace card=card phase=CardPhase::Leaving duration_ms=animation_duration />
                            }
                        })
                }}
                {move || {
                    let index = current_index.get();
                    cards
                        .with_value(|cards| cards.get(index).copied())
                        .map(|card| {
                            view! {
                                <CardFace card=card phase=CardPhase::Entering duration_ms=animation_duration />
                            }
                        })
                }}
            </div>

            <CardProgress current=current_index count=card_count />
        </div>

        <ScrollCardsStyles />
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CardPhase {
    Entering,
    Leaving,
}

impl CardPhase {
    fn class(self) -> &'static str {
        match self {
            CardPhase::Entering => "scroll-card scroll-card-enter",
            CardPhase::Leaving => "scroll-card scroll-card-exit",
        }
    }
}

/// Forget the leaving card if it is still the one that `finished` animating out
#[cfg(any(feature = "hydrate", test))]
fn finish_exit(leaving: &mut Option<usize>, finished: usize) {
    if *leaving == Some(finished) {
        *leaving = None;
    }
}

/// "Feature 2 of 6"
fn position_label(index: usize, count: usize) -> String {
    format!("Feature {} of {}", (index + 1).min(count), count)
}

/// A single card, animating in or out
#[component]
fn CardFace(card: Card, phase: CardPhase, duration_ms: u32) -> impl IntoView {
    view! {
        <div
            class=phase.class()
            style=format!("animation-duration: {duration_ms}ms;")
            aria-hidden=(phase == CardPhase::Leaving).then_some("true")
        >
            <div class="h-full flex flex-col justify-center items-center text-center text-white">
                <div class="text-6xl mb-6">{card.icon}</div>
                <h2 class="text-3xl font-bold mb-4">{card.title}</h2>
                <p class="text-lg opacity-90 leading-relaxed">{card.description}</p>
            </div>
        </div>
    }
}

/// Position dots plus a screen reader announcement of the active card
#[component]
fn CardProgress(current: ReadSignal<usize>, count: usize) -> impl IntoView {
    (count > 1).then(|| {
        view! {
            <div class="absolute bottom-6 left-1/2 -translate-x-1/2 flex items-center gap-2" aria-hidden="true">
                {(0..count)
                    .map(|index| {
                        view! {
                            <span
                                class="scroll-cards-dot"
                                class:scroll-cards-dot-active=move || current.get() == index
                            ></span>
                        }
                    })
                    .collect_view()}
            </div>
            <p class="sr-only" aria-live="polite">
                {move || position_label(current.get(), count)}
            </p>
        }
    })
}

/// Card enter/exit keyframes
#[component]
fn ScrollCardsStyles() -> impl IntoView {
    view! {
        <style>
            r#"
            .scroll-card {
                position: absolute;
                inset: 0;
                border-radius: 1rem;
                animation-timing-function: ease-in-out;
                animation-fill-mode: both;
            }

            .scroll-card-enter {
                animation-name: scroll-card-enter;
            }

            .scroll-card-exit {
                animation-name: scroll-card-exit;
                pointer-events: none;
            }

            @keyframes scroll-card-enter {
                from {
                    opacity: 0;
                    transform: translateY(48px) scale(0.98);
                }
                to {
                    opacity: 1;
                    transform: translateY(0) scale(1);
                }
            }

            @keyframes scroll-card-exit {
                from {
                    opacity: 1;
                    transform: translateY(0) scale(1);
                }
                to {
                    opacity: 0;
                    transform: translateY(-48px) scale(0.98);
                }
            }

            .scroll-cards-dot {
                width: 0.5rem;
                height: 0.5rem;
                border-radius: 9999px;
                background-color: rgba(255, 255, 255, 0.25);
                transition: all 0.3s;
            }

            .scroll-cards-dot-active {
                width: 1.5rem;
                background-color: rgba(255, 255, 255, 0.9);
            }
            "#
        </style>
    }
}

#[cfg(feature = "hydrate")]
mod browser {
    use std::cell::RefCell;
    use std::rc::{Rc, Weak};

    use gloo_timers::callback::Timeout;
    use wasm_bindgen::JsCast;
    use wasm_bindgen::JsValue;
    use wasm_bindgen::closure::Closure;
    use web_sys::{
        AddEventListenerOptions, Element, IntersectionObserver, IntersectionObserverEntry,
        IntersectionObserverInit, WheelEvent, Window,
    };

    use crate::core::carousel::{
        CarouselConfig, GestureCarousel, TimerKind, TimerScheduler, WheelOutcome,
    };
    use crate::core::visibility::{self, Placement};

    type SharedCarousel = Rc<RefCell<GestureCarousel<BrowserTimers>>>;

    /// Browser timeouts reporting back to the carousel that scheduled them
    pub(super) struct BrowserTimers {
        carousel: Weak<RefCell<GestureCarousel<BrowserTimers>>>,
    }

    impl TimerScheduler for BrowserTimers {
        type Handle = Timeout;

        fn schedule(&mut self, kind: TimerKind, delay_ms: u32) -> Timeout {
            let carousel = self.carousel.clone();
            Timeout::new(delay_ms, move || {
                if let Some(carousel) = carousel.upgrade() {
                    carousel.borrow_mut().on_timer(kind);
                }
            })
        }

        fn cancel(&mut self, handle: Timeout) {
            // Dropping a gloo timeout clears it
            drop(handle);
        }
    }

    /// Everything the carousel holds on to while mounted.
    ///
    /// Dropping the mount detaches the wheel listener, disconnects the observer
    /// and cancels pending timers.
    pub(super) struct CarouselMount {
        window: Window,
        carousel: SharedCarousel,
        observer: IntersectionObserver,
        _on_intersect: Closure<dyn Fn(js_sys::Array)>,
        on_wheel: Closure<dyn Fn(WheelEvent)>,
    }

    impl CarouselMount {
        pub(super) fn attach(
            element: &Element,
            config: CarouselConfig,
            card_count: usize,
            on_advance: impl Fn(usize, usize) + 'static,
        ) -> Result<Self, JsValue> {
            let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;

            let carousel: SharedCarousel = Rc::new_cyclic(|weak| {
                RefCell::new(GestureCarousel::new(
                    config,
                    card_count,
                    BrowserTimers {
                        carousel: weak.clone(),
                    },
                ))
            });

            let observed = carousel.clone();
            let on_intersect =
                Closure::<dyn Fn(js_sys::Array)>::new(move |entries: js_sys::Array| {
                    for entry in entries.iter() {
                        let entry: IntersectionObserverEntry = entry.unchecked_into();
                        let in_view = visibility::is_in_view(
                            entry.is_intersecting(),
                            entry.intersection_ratio(),
                        );
                        observed.borrow_mut().set_in_view(in_view);
                    }
                });

            let thresholds: js_sys::Array = visibility::OBSERVER_THRESHOLDS
                .iter()
                .map(|threshold| JsValue::from_f64(*threshold))
                .collect();
            let options = IntersectionObserverInit::new();
            options.set_root_margin(visibility::OBSERVER_ROOT_MARGIN);
            options.set_threshold(&thresholds);
            let observer = IntersectionObserver::new_with_options(
                on_intersect.as_ref().unchecked_ref(),
                &options,
            )?;

            let wheel_target = carousel.clone();
            let measured = element.clone();
            let viewport = window.clone();
            let on_wheel = Closure::<dyn Fn(WheelEvent)>::new(move |ev: WheelEvent| {
                let placement = measure(&measured, &viewport);
                let outcome = wheel_target
                    .borrow_mut()
                    .handle_wheel(ev.delta_y(), placement);

                if outcome.prevents_default() {
                    ev.prevent_default();
                }
                if let WheelOutcome::Advanced { from, to } = outcome {
                    on_advance(from, to);
                }
            });

            // From here on, an early return drops `mount` and undoes what was attached
            let mount = Self {
                window,
                carousel,
                observer,
                _on_intersect: on_intersect,
                on_wheel,
            };
            mount.observer.observe(element);

            // Window-level wheel listeners default to passive; we need preventDefault
            let listener_options = AddEventListenerOptions::new();
            listener_options.set_passive(false);
            mount
                .window
                .add_event_listener_with_callback_and_add_event_listener_options(
                    "wheel",
                    mount.on_wheel.as_ref().unchecked_ref(),
                    &listener_options,
                )?;

            Ok(mount)
        }
    }

    impl Drop for CarouselMount {
        fn drop(&mut self) {
            let _ = self.window.remove_event_listener_with_callback(
                "wheel",
                self.on_wheel.as_ref().unchecked_ref(),
            );
            self.observer.disconnect();
            // If a wheel callback still holds the borrow, the carousel tears itself
            // down once the last reference goes away
            if let Ok(mut carousel) = self.carousel.try_borrow_mut() {
                carousel.teardown();
            }
        }
    }

    fn measure(element: &Element, window: &Window) -> Option<Placement> {
        let viewport_height = window.inner_height().ok()?.as_f64()?;
        let rect = element.get_bounding_client_rect();
        Some(Placement::new(rect.top(), rect.height(), viewport_height))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_label() {
        assert_eq!(position_label(0, 6), "Feature 1 of 6");
        assert_eq!(position_label(5, 6), "Feature 6 of 6");
    }

    #[test]
    fn test_position_label_never_exceeds_count() {
        assert_eq!(position_label(9, 3), "Feature 3 of 3");
    }

    #[test]
    fn test_finished_exit_removes_leaving_card() {
        let mut leaving = Some(2);
        finish_exit(&mut leaving, 2);
        assert_eq!(leaving, None);
    }

    #[test]
    fn test_stale_exit_keeps_newer_leaving_card() {
        let mut leaving = Some(3);
        finish_exit(&mut leaving, 2);
        assert_eq!(leaving, Some(3));

        let mut nothing = None;
        finish_exit(&mut nothing, 1);
        assert_eq!(nothing, None);
    }

    #[test]
    fn test_card_phase_classes() {
        assert!(CardPhase::Entering.class().contains("scroll-card-enter"));
        assert!(CardPhase::Leaving.class().contains("scroll-card-exit"));
        assert!(CardPhase::Leaving.class().starts_with("scroll-card "));
    }
}
