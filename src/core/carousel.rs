//! Gesture carousel state machine
//!
//! Converts a stream of wheel deltas into discrete "next card" / "previous card"
//! transitions for the feature carousel.
//!
//! # Overview
//!
//! - Wheel input is only handled while the carousel is in view (see [`super::visibility`]).
//! - At the first or last card, input pointing past the edge is released to the page.
//! - Same-direction deltas accumulate; a reversal restarts the gesture.
//! - A gesture that stalls for 160ms is forgotten.
//! - Reaching the threshold moves exactly one card and locks the carousel until
//!   the card animation has finished.
//!
//! Timers are owned through the [`TimerScheduler`] trait so the same state machine
//! runs against browser timeouts and against a virtual clock in tests.
//!
//! # Usage Example
//!
//! ```rust
//! use open_fiesta::core::carousel::{
//!     CarouselConfig, GestureCarousel, TimerKind, TimerScheduler, WheelOutcome,
//! };
//!
//! struct NoTimers;
//!
//! impl TimerScheduler for NoTimers {
//!     type Handle = ();
//!     fn schedule(&mut self, _kind: TimerKind, _delay_ms: u32) {}
//!     fn cancel(&mut self, _handle: ()) {}
//! }
//!
//! let mut carousel = GestureCarousel::new(CarouselConfig::default(), 3, NoTimers);
//! carousel.set_in_view(true);
//!
//! assert_eq!(carousel.handle_wheel(40.0, None), WheelOutcome::Accumulated);
//! assert_eq!(
//!     carousel.handle_wheel(40.0, None),
//!     WheelOutcome::Advanced { from: 0, to: 1 }
//! );
//! assert!(carousel.is_locked());
//! ```

use std::fmt;

use super::visibility::Placement;

/// Default card animation duration (ms)
pub const DEFAULT_ANIMATION_DURATION_MS: u32 = 600;

/// Default accumulated wheel delta required to change cards
pub const DEFAULT_THRESHOLD: f64 = 80.0;

/// Idle time after which an unfinished gesture is discarded (ms)
pub const GESTURE_RESET_DELAY_MS: u32 = 160;

/// Extra time the carousel stays locked after the card animation (ms)
pub const UNLOCK_SLACK_MS: u32 = 80;

/// Scroll direction of a gesture
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Scrolling down, towards the next card
    Forward,
    /// Scrolling up, towards the previous card
    Backward,
}

impl Direction {
    /// Direction of a wheel delta. Zero and NaN have no direction.
    pub fn from_delta(delta: f64) -> Option<Self> {
        if delta > 0.0 {
            Some(Direction::Forward)
        } else if delta < 0.0 {
            Some(Direction::Backward)
        } else {
            None
        }
    }
}

/// Tuning of a carousel instance
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CarouselConfig {
    /// Duration of the card enter/exit animation
    pub animation_duration_ms: u32,
    /// Accumulated delta magnitude that commits a gesture
    pub threshold: f64,
    /// Idle time that discards an unfinished gesture
    pub reset_delay_ms: u32,
    /// Lock time added on top of the animation duration
    pub unlock_slack_ms: u32,
}

impl CarouselConfig {
    pub fn new(animation_duration_ms: u32, threshold: f64) -> Self {
        Self {
            animation_duration_ms,
            threshold,
            ..Self::default()
        }
    }

    /// How long the carousel stays locked after a transition
    pub fn unlock_delay_ms(&self) -> u32 {
        self.animation_duration_ms
            .saturating_add(self.unlock_slack_ms)
    }
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            animation_duration_ms: DEFAULT_ANIMATION_DURATION_MS,
            threshold: DEFAULT_THRESHOLD,
            reset_delay_ms: GESTURE_RESET_DELAY_MS,
            unlock_slack_ms: UNLOCK_SLACK_MS,
        }
    }
}

/// The two timers a carousel keeps
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimerKind {
    /// Fires when a gesture has been idle long enough to be discarded
    GestureReset,
    /// Fires when the card animation is over and input is accepted again
    Unlock,
}

/// Source of one-shot timers.
///
/// When a scheduled timer elapses, its owner must call
/// [`GestureCarousel::on_timer`] with the same [`TimerKind`].
/// A cancelled handle must never fire.
pub trait TimerScheduler {
    type Handle;

    fn schedule(&mut self, kind: TimerKind, delay_ms: u32) -> Self::Handle;

    fn cancel(&mut self, handle: Self::Handle);
}

/// Observable state of a carousel
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CarouselState {
    /// Index of the displayed card
    pub current_index: usize,
    /// Unresolved delta magnitude of the gesture in progress
    pub accumulator: f64,
    /// Direction of the gesture in progress
    pub direction: Option<Direction>,
    /// A transition is animating; no new transition may start
    pub locked: bool,
    /// Last verdict of the intersection observer
    pub in_view: bool,
}

/// What the carousel did with a wheel event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WheelOutcome {
    /// The carousel is not focused or the delta is zero; the page scrolls normally
    Ignored,
    /// No card left in that direction; the page scrolls normally
    Released,
    /// Consumed while a transition is animating
    Dropped,
    /// Consumed and added to the gesture in progress
    Accumulated,
    /// Consumed and committed a card change
    Advanced { from: usize, to: usize },
}

impl WheelOutcome {
    /// Whether the native scroll of this event must be suppressed
    pub fn prevents_default(&self) -> bool {
        matches!(
            self,
            WheelOutcome::Dropped | WheelOutcome::Accumulated | WheelOutcome::Advanced { .. }
        )
    }
}

/// Scroll-driven card carousel.
///
/// All mutation goes through [`handle_wheel`](Self::handle_wheel),
/// [`set_in_view`](Self::set_in_view), [`on_timer`](Self::on_timer) and
/// [`teardown`](Self::teardown). Dropping the carousel tears it down.
pub struct GestureCarousel<S: TimerScheduler> {
    config: CarouselConfig,
    card_count: usize,
    state: CarouselState,
    scheduler: S,
    reset_timer: Option<S::Handle>,
    unlock_timer: Option<S::Handle>,
    torn_down: bool,
}

impl<S: TimerScheduler> GestureCarousel<S> {
    pub fn new(config: CarouselConfig, card_count: usize, scheduler: S) -> Self {
        Self {
            config,
            card_count,
            state: CarouselState::default(),
            scheduler,
            reset_timer: None,
            unlock_timer: None,
            torn_down: false,
        }
    }

    pub fn state(&self) -> &CarouselState {
        &self.state
    }

    pub fn current_index(&self) -> usize {
        self.state.current_index
    }

    pub fn is_locked(&self) -> bool {
        self.state.locked
    }

    pub fn is_torn_down(&self) -> bool {
        self.torn_down
    }

    /// Record the intersection observer's verdict
    pub fn set_in_view(&mut self, in_view: bool) {
        if self.torn_down {
            return;
        }
        self.state.in_view = in_view;
    }

    /// Feed one wheel event.
    ///
    /// `placement` is the carousel's position at the time of the event; when it
    /// cannot be measured only the observer verdict gates the event.
    pub fn handle_wheel(&mut self, delta: f64, placement: Option<Placement>) -> WheelOutcome {
        if self.torn_down || !self.state.in_view {
            return WheelOutcome::Ignored;
        }
        if placement.is_some_and(|p| !p.is_centered()) {
            return WheelOutcome::Ignored;
        }
        let Some(direction) = Direction::from_delta(delta) else {
            return WheelOutcome::Ignored;
        };

        if self.at_edge(direction) {
            return WheelOutcome::Released;
        }
        if self.state.locked {
            return WheelOutcome::Dropped;
        }

        let magnitude = delta.abs();
        self.state.accumulator = match self.state.direction {
            Some(current) if current == direction => self.state.accumulator + magnitude,
            _ => magnitude,
        };
        self.state.direction = Some(direction);
        self.restart_reset_timer();

        if self.state.accumulator < self.config.threshold {
            return WheelOutcome::Accumulated;
        }
        self.commit(direction)
    }

    /// Apply an elapsed timer
    pub fn on_timer(&mut self, kind: TimerKind) {
        if self.torn_down {
            return;
        }
        match kind {
            TimerKind::GestureReset => {
                self.reset_timer = None;
                self.clear_gesture();
                tracing::trace!("carousel gesture expired");
            }
            TimerKind::Unlock => {
                self.unlock_timer = None;
                self.state.locked = false;
                tracing::trace!(index = self.state.current_index, "carousel unlocked");
            }
        }
    }

    /// Cancel both timers and stop reacting to input.
    ///
    /// Idempotent. Timer callbacks that still arrive afterwards are ignored.
    pub fn teardown(&mut self) {
        if self.torn_down {
            return;
        }
        self.torn_down = true;
        self.cancel_reset_timer();
        if let Some(handle) = self.unlock_timer.take() {
            self.scheduler.cancel(handle);
        }
        tracing::debug!(index = self.state.current_index, "carousel torn down");
    }

    fn at_edge(&self, direction: Direction) -> bool {
        match direction {
            Direction::Forward => self.state.current_index + 1 >= self.card_count,
            Direction::Backward => self.state.current_index == 0,
        }
    }

    fn commit(&mut self, direction: Direction) -> WheelOutcome {
        let from = self.state.current_index;
        let last = self.card_count.saturating_sub(1);
        let to = match direction {
            Direction::Forward => (from + 1).min(last),
            Direction::Backward => from.saturating_sub(1),
        };

        self.state.locked = true;
        self.clear_gesture();
        self.cancel_reset_timer();
        self.state.current_index = to;

        if let Some(handle) = self.unlock_timer.take() {
            self.scheduler.cancel(handle);
        }
        let delay = self.config.unlock_delay_ms();
        self.unlock_timer = Some(self.scheduler.schedule(TimerKind::Unlock, delay));

        tracing::debug!(from, to, "carousel advanced");
        WheelOutcome::Advanced { from, to }
    }

    fn restart_reset_timer(&mut self) {
        self.cancel_reset_timer();
        let delay = self.config.reset_delay_ms;
        self.reset_timer = Some(self.scheduler.schedule(TimerKind::GestureReset, delay));
    }

    fn cancel_reset_timer(&mut self) {
        if let Some(handle) = self.reset_timer.take() {
            self.scheduler.cancel(handle);
        }
    }

    fn clear_gesture(&mut self) {
        self.state.accumulator = 0.0;
        self.state.direction = None;
    }
}

impl<S: TimerScheduler> Drop for GestureCarousel<S> {
    fn drop(&mut self) {
        self.teardown();
    }
}

impl<S: TimerScheduler> fmt::Debug for GestureCarousel<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GestureCarousel")
            .field("config", &self.config)
            .field("card_count", &self.card_count)
            .field("state", &self.state)
            .field("reset_pending", &self.reset_timer.is_some())
            .field("unlock_pending", &self.unlock_timer.is_some())
            .field("torn_down", &self.torn_down)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Default)]
    struct Clock {
        now: u64,
        next_id: u64,
        pending: Vec<(u64, u64, TimerKind)>,
    }

    /// Virtual-time scheduler; clones share the same clock
    #[derive(Clone, Default)]
    struct ManualTimers(Rc<RefCell<Clock>>);

    impl TimerScheduler for ManualTimers {
        type Handle = u64;

        fn schedule(&mut self, kind: TimerKind, delay_ms: u32) -> u64 {
            let mut clock = self.0.borrow_mut();
            clock.next_id += 1;
            let id = clock.next_id;
            let due = clock.now + u64::from(delay_ms);
            clock.pending.push((id, due, kind));
            id
        }

        fn cancel(&mut self, handle: u64) {
            self.0.borrow_mut().pending.retain(|(id, _, _)| *id != handle);
        }
    }

    impl ManualTimers {
        fn pending(&self) -> Vec<TimerKind> {
            self.0.borrow().pending.iter().map(|(_, _, kind)| *kind).collect()
        }

        fn pop_due(&self, until: u64) -> Option<TimerKind> {
            let mut clock = self.0.borrow_mut();
            let position = clock
                .pending
                .iter()
                .enumerate()
                .filter(|(_, (_, due, _))| *due <= until)
                .min_by_key(|(_, (id, due, _))| (*due, *id))
                .map(|(position, _)| position)?;
            let (_, due, kind) = clock.pending.remove(position);
            clock.now = due;
            Some(kind)
        }

        fn advance(&self, carousel: &mut GestureCarousel<ManualTimers>, ms: u64) {
            let until = self.0.borrow().now + ms;
            while let Some(kind) = self.pop_due(until) {
                carousel.on_timer(kind);
            }
            self.0.borrow_mut().now = until;
        }
    }

    fn carousel(cards: usize) -> (GestureCarousel<ManualTimers>, ManualTimers) {
        let timers = ManualTimers::default();
        let mut carousel = GestureCarousel::new(CarouselConfig::default(), cards, timers.clone());
        carousel.set_in_view(true);
        (carousel, timers)
    }

    fn centered() -> Option<Placement> {
        Some(Placement::new(200.0, 600.0, 1000.0))
    }

    #[test]
    fn test_initial_state() {
        let (carousel, timers) = carousel(6);
        assert_eq!(carousel.current_index(), 0);
        assert_eq!(carousel.state().accumulator, 0.0);
        assert_eq!(carousel.state().direction, None);
        assert!(!carousel.is_locked());
        assert!(timers.pending().is_empty());
    }

    #[test]
    fn test_default_config() {
        let config = CarouselConfig::default();
        assert_eq!(config.animation_duration_ms, 600);
        assert_eq!(config.threshold, 80.0);
        assert_eq!(config.reset_delay_ms, 160);
        assert_eq!(config.unlock_delay_ms(), 680);
        assert_eq!(CarouselConfig::new(300, 40.0).unlock_delay_ms(), 380);
    }

    #[test]
    fn test_direction_from_delta() {
        assert_eq!(Direction::from_delta(3.0), Some(Direction::Forward));
        assert_eq!(Direction::from_delta(-0.5), Some(Direction::Backward));
        assert_eq!(Direction::from_delta(0.0), None);
        assert_eq!(Direction::from_delta(f64::NAN), None);
    }

    #[test]
    fn test_ignored_when_not_in_view() {
        let (mut carousel, timers) = carousel(6);
        carousel.set_in_view(false);

        let outcome = carousel.handle_wheel(200.0, centered());
        assert_eq!(outcome, WheelOutcome::Ignored);
        assert!(!outcome.prevents_default());
        assert_eq!(carousel.current_index(), 0);
        assert!(timers.pending().is_empty());
    }

    #[test]
    fn test_ignored_when_off_center() {
        let (mut carousel, _timers) = carousel(6);
        let off_center = Some(Placement::new(600.0, 600.0, 1000.0));

        assert_eq!(carousel.handle_wheel(200.0, off_center), WheelOutcome::Ignored);
        assert_eq!(carousel.current_index(), 0);
    }

    #[test]
    fn test_zero_delta_ignored() {
        let (mut carousel, timers) = carousel(6);
        assert_eq!(carousel.handle_wheel(0.0, centered()), WheelOutcome::Ignored);
        assert!(timers.pending().is_empty());
    }

    #[test]
    fn test_single_large_event_advances_once() {
        let (mut carousel, _timers) = carousel(6);

        let outcome = carousel.handle_wheel(1000.0, centered());
        assert_eq!(outcome, WheelOutcome::Advanced { from: 0, to: 1 });
        assert!(outcome.prevents_default());
        assert_eq!(carousel.current_index(), 1);
        assert!(carousel.is_locked());
        assert_eq!(carousel.state().accumulator, 0.0);
        assert_eq!(carousel.state().direction, None);
    }

    #[test]
    fn test_event_at_threshold_advances() {
        let (mut carousel, _timers) = carousel(6);
        assert_eq!(
            carousel.handle_wheel(80.0, centered()),
            WheelOutcome::Advanced { from: 0, to: 1 }
        );
    }

    #[test]
    fn test_accumulation_fires_exactly_once() {
        let (mut carousel, timers) = carousel(6);

        for _ in 0..3 {
            assert_eq!(carousel.handle_wheel(25.0, centered()), WheelOutcome::Accumulated);
        }
        assert_eq!(carousel.state().accumulator, 75.0);
        assert_eq!(
            carousel.handle_wheel(25.0, centered()),
            WheelOutcome::Advanced { from: 0, to: 1 }
        );
        // Momentum keeps coming, but it is dropped while locked
        for _ in 0..10 {
            assert_eq!(carousel.handle_wheel(25.0, centered()), WheelOutcome::Dropped);
        }
        assert_eq!(carousel.current_index(), 1);
        assert_eq!(timers.pending(), vec![TimerKind::Unlock]);
    }

    /// Carousel of `cards` cards already moved to `index` and unlocked again
    fn carousel_at(cards: usize, index: usize) -> (GestureCarousel<ManualTimers>, ManualTimers) {
        let (mut carousel, timers) = carousel(cards);
        for _ in 0..index {
            carousel.handle_wheel(1000.0, centered());
            timers.advance(&mut carousel, 680);
        }
        assert_eq!(carousel.current_index(), index);
        assert!(!carousel.is_locked());
        (carousel, timers)
    }

    #[test]
    fn test_reversal_resets_accumulator() {
        let (mut carousel, _timers) = carousel_at(6, 2);

        assert_eq!(carousel.handle_wheel(50.0, centered()), WheelOutcome::Accumulated);
        assert_eq!(carousel.handle_wheel(-50.0, centered()), WheelOutcome::Accumulated);
        assert_eq!(carousel.state().accumulator, 50.0);
        assert_eq!(carousel.state().direction, Some(Direction::Backward));
        assert_eq!(carousel.handle_wheel(50.0, centered()), WheelOutcome::Accumulated);
        assert_eq!(carousel.state().accumulator, 50.0);
        assert_eq!(carousel.state().direction, Some(Direction::Forward));

        assert_eq!(carousel.current_index(), 2);
        assert!(!carousel.is_locked());
    }

    #[test]
    fn test_backward_gesture_retreats() {
        let (mut carousel, _timers) = carousel_at(6, 3);

        assert_eq!(carousel.handle_wheel(-60.0, centered()), WheelOutcome::Accumulated);
        assert_eq!(
            carousel.handle_wheel(-60.0, centered()),
            WheelOutcome::Advanced { from: 3, to: 2 }
        );
        assert_eq!(carousel.current_index(), 2);
    }

    #[test]
    fn test_first_card_releases_upward_scroll() {
        let (mut carousel, timers) = carousel(6);

        let outcome = carousel.handle_wheel(-500.0, centered());
        assert_eq!(outcome, WheelOutcome::Released);
        assert!(!outcome.prevents_default());
        assert_eq!(*carousel.state(), CarouselState { in_view: true, ..Default::default() });
        assert!(timers.pending().is_empty());
    }

    #[test]
    fn test_release_at_first_card_keeps_gesture() {
        let (mut carousel, _timers) = carousel(6);

        assert_eq!(carousel.handle_wheel(50.0, centered()), WheelOutcome::Accumulated);
        // Nothing lies behind the first card, so the reversal goes to the page
        assert_eq!(carousel.handle_wheel(-50.0, centered()), WheelOutcome::Released);
        assert_eq!(carousel.state().accumulator, 50.0);
        assert_eq!(carousel.state().direction, Some(Direction::Forward));

        assert_eq!(
            carousel.handle_wheel(50.0, centered()),
            WheelOutcome::Advanced { from: 0, to: 1 }
        );
        assert_eq!(carousel.current_index(), 1);
    }

    #[test]
    fn test_last_card_releases_downward_scroll() {
        let (mut carousel, timers) = carousel_at(4, 3);
        let before = *carousel.state();

        let outcome = carousel.handle_wheel(500.0, centered());
        assert_eq!(outcome, WheelOutcome::Released);
        assert!(!outcome.prevents_default());
        assert_eq!(*carousel.state(), before);
        assert!(timers.pending().is_empty());

        // The way back is still open
        assert_eq!(
            carousel.handle_wheel(-500.0, centered()),
            WheelOutcome::Advanced { from: 3, to: 2 }
        );
    }

    #[test]
    fn test_single_card_releases_both_ways() {
        let (mut carousel, _timers) = carousel(1);
        assert_eq!(carousel.handle_wheel(500.0, centered()), WheelOutcome::Released);
        assert_eq!(carousel.handle_wheel(-500.0, centered()), WheelOutcome::Released);
        assert_eq!(carousel.current_index(), 0);
    }

    #[test]
    fn test_empty_card_list_never_captures_scroll() {
        let (mut carousel, _timers) = carousel(0);
        assert_eq!(carousel.handle_wheel(500.0, centered()), WheelOutcome::Released);
        assert_eq!(carousel.handle_wheel(-500.0, centered()), WheelOutcome::Released);
        assert_eq!(carousel.current_index(), 0);
    }

    #[test]
    fn test_locked_events_do_not_accumulate_or_restart_timers() {
        let (mut carousel, timers) = carousel(6);
        carousel.handle_wheel(100.0, centered());
        assert_eq!(timers.pending(), vec![TimerKind::Unlock]);

        for _ in 0..5 {
            let outcome = carousel.handle_wheel(500.0, centered());
            assert_eq!(outcome, WheelOutcome::Dropped);
            assert!(outcome.prevents_default());
        }
        assert_eq!(carousel.state().accumulator, 0.0);
        assert_eq!(carousel.state().direction, None);
        assert_eq!(carousel.current_index(), 1);
        assert_eq!(timers.pending(), vec![TimerKind::Unlock]);
    }

    #[test]
    fn test_no_second_transition_before_unlock() {
        let (mut carousel, timers) = carousel(6);
        carousel.handle_wheel(100.0, centered());

        timers.advance(&mut carousel, 679);
        assert!(carousel.is_locked());
        assert_eq!(carousel.handle_wheel(100.0, centered()), WheelOutcome::Dropped);
        assert_eq!(carousel.current_index(), 1);

        timers.advance(&mut carousel, 1);
        assert!(!carousel.is_locked());
        assert_eq!(
            carousel.handle_wheel(100.0, centered()),
            WheelOutcome::Advanced { from: 1, to: 2 }
        );
    }

    #[test]
    fn test_unlock_delay_follows_animation_duration() {
        let timers = ManualTimers::default();
        let config = CarouselConfig::new(200, 80.0);
        let mut carousel = GestureCarousel::new(config, 6, timers.clone());
        carousel.set_in_view(true);

        carousel.handle_wheel(100.0, centered());
        timers.advance(&mut carousel, 279);
        assert!(carousel.is_locked());
        timers.advance(&mut carousel, 1);
        assert!(!carousel.is_locked());
    }

    #[test]
    fn test_stalled_gesture_is_discarded() {
        let (mut carousel, timers) = carousel(6);

        carousel.handle_wheel(60.0, centered());
        timers.advance(&mut carousel, 159);
        assert_eq!(carousel.state().accumulator, 60.0);

        timers.advance(&mut carousel, 1);
        assert_eq!(carousel.state().accumulator, 0.0);
        assert_eq!(carousel.state().direction, None);

        // A later, unrelated nudge starts from scratch
        assert_eq!(carousel.handle_wheel(60.0, centered()), WheelOutcome::Accumulated);
        assert_eq!(carousel.current_index(), 0);
    }

    #[test]
    fn test_each_event_restarts_reset_timer() {
        let (mut carousel, timers) = carousel(6);

        for _ in 0..7 {
            carousel.handle_wheel(10.0, centered());
            timers.advance(&mut carousel, 100);
        }
        assert_eq!(carousel.state().accumulator, 70.0);
        assert_eq!(timers.pending(), vec![TimerKind::GestureReset]);

        carousel.handle_wheel(10.0, centered());
        assert_eq!(carousel.current_index(), 1);
        assert_eq!(timers.pending(), vec![TimerKind::Unlock]);
    }

    #[test]
    fn test_index_stays_in_bounds() {
        let (mut carousel, timers) = carousel(3);
        let deltas = [
            120.0, 300.0, -10.0, 90.0, 500.0, 81.0, -400.0, -80.0, -1.0, -200.0, 60.0, 60.0,
        ];

        for round in 0..20 {
            for (i, delta) in deltas.iter().enumerate() {
                let sign = if (round + i) % 3 == 0 { -1.0 } else { 1.0 };
                carousel.handle_wheel(delta * sign, centered());
                assert!(carousel.current_index() < 3);
                timers.advance(&mut carousel, (i as u64 * 97) % 700);
            }
        }
    }

    #[test]
    fn test_teardown_cancels_pending_timers() {
        let (mut carousel, timers) = carousel_at(6, 1);
        carousel.handle_wheel(100.0, centered());
        carousel.handle_wheel(-100.0, centered());
        let before = *carousel.state();
        assert!(before.locked);

        carousel.teardown();
        assert!(carousel.is_torn_down());
        assert!(timers.pending().is_empty());

        timers.advance(&mut carousel, 10_000);
        assert_eq!(*carousel.state(), before);
    }

    #[test]
    fn test_teardown_ignores_late_callbacks_and_input() {
        let (mut carousel, _timers) = carousel(6);
        carousel.handle_wheel(40.0, centered());
        let before = *carousel.state();

        carousel.teardown();
        carousel.teardown();
        carousel.on_timer(TimerKind::GestureReset);
        carousel.on_timer(TimerKind::Unlock);
        carousel.set_in_view(false);

        assert_eq!(carousel.handle_wheel(500.0, centered()), WheelOutcome::Ignored);
        assert_eq!(*carousel.state(), before);
    }

    #[test]
    fn test_drop_cancels_pending_timers() {
        let (mut carousel, timers) = carousel(6);
        carousel.handle_wheel(40.0, centered());
        carousel.handle_wheel(100.0, centered());
        assert!(!timers.pending().is_empty());

        drop(carousel);
        assert!(timers.pending().is_empty());
    }

    #[test]
    fn test_missing_placement_uses_observer_only() {
        let (mut carousel, _timers) = carousel(6);
        assert_eq!(
            carousel.handle_wheel(100.0, None),
            WheelOutcome::Advanced { from: 0, to: 1 }
        );
    }
}
