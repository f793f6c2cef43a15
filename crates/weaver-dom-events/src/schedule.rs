//! Run a callback just before an event fires, with a deadline.
//!
//! UI frameworks attach their own event handling at the root and react in
//! the bubble phase. A capture-phase listener on the element itself sees the
//! event first, which is the window [`queue_before_event`] uses to get work
//! done before the framework reacts. If the event never arrives, a timer
//! (or the next animation frame) runs the callback anyway.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_events::{EventListener, EventListenerOptions};
use gloo_timers::callback::Timeout;
use smol_str::SmolStr;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::EventTarget;

/// First-of-N race over a single callback.
///
/// `G` holds the trigger registrations. Whoever settles the race first takes
/// the callback; the guards come out with it so the caller can drop them
/// outside any borrow.
struct Race<G> {
    callback: Option<Box<dyn FnOnce()>>,
    guards: Option<G>,
}

impl<G> Race<G> {
    fn new(callback: Box<dyn FnOnce()>) -> Self {
        Self {
            callback: Some(callback),
            guards: None,
        }
    }

    /// Install the trigger guards.
    ///
    /// Returns them straight back if the race is already settled.
    fn arm(&mut self, guards: G) -> Option<G> {
        if self.callback.is_none() {
            return Some(guards);
        }
        self.guards = Some(guards);
        None
    }

    /// Settle in favor of a trigger. Only the first call yields the callback.
    fn win(&mut self) -> (Option<Box<dyn FnOnce()>>, Option<G>) {
        (self.callback.take(), self.guards.take())
    }

    /// Settle without running anything.
    fn cancel(&mut self) -> Option<G> {
        self.callback = None;
        self.guards.take()
    }

    fn is_pending(&self) -> bool {
        self.callback.is_some()
    }
}

/// A pending `requestAnimationFrame` callback, cancelled on drop.
struct AnimationFrame {
    window: web_sys::Window,
    id: i32,
    _closure: Closure<dyn FnMut()>,
}

impl Drop for AnimationFrame {
    fn drop(&mut self) {
        let _ = self.window.cancel_animation_frame(self.id);
    }
}

enum Timer {
    Timeout(Timeout),
    Frame(AnimationFrame),
}

impl Timer {
    fn start(timeout: Option<u32>, callback: impl FnOnce() + 'static) -> Self {
        if let Some(millis) = timeout {
            return Timer::Timeout(Timeout::new(millis, callback));
        }
        let Some(window) = web_sys::window() else {
            tracing::debug!("no window for animation frame, using a zero-delay timeout");
            return Timer::Timeout(Timeout::new(0, callback));
        };

        // Shared so a failed frame request can hand the callback to a timeout.
        let callback = Rc::new(RefCell::new(Some(callback)));
        let frame_callback = callback.clone();
        let closure = Closure::wrap(Box::new(move || {
            let callback = frame_callback.borrow_mut().take();
            if let Some(callback) = callback {
                callback();
            }
        }) as Box<dyn FnMut()>);

        match window.request_animation_frame(closure.as_ref().unchecked_ref()) {
            Ok(id) => Timer::Frame(AnimationFrame {
                window,
                id,
                _closure: closure,
            }),
            Err(e) => {
                tracing::debug!("requestAnimationFrame failed: {:?}", e);
                Timer::Timeout(Timeout::new(0, move || {
                    let callback = callback.borrow_mut().take();
                    if let Some(callback) = callback {
                        callback();
                    }
                }))
            }
        }
    }
}

struct Triggers {
    _timer: Timer,
    _listener: EventListener,
}

#[derive(Debug, Clone, Copy)]
enum Trigger {
    Timer,
    Event,
}

type SharedRace = Rc<RefCell<Race<Triggers>>>;

fn settle(race: &SharedRace, event_type: &str, trigger: Trigger) {
    let (callback, triggers) = race.borrow_mut().win();
    // Drop the losing trigger before running user code, outside the borrow.
    drop(triggers);
    if let Some(callback) = callback {
        tracing::debug!(event_type, ?trigger, "queued callback fired");
        callback();
    }
}

/// Handle to a callback queued with [`queue_before_event`].
///
/// Dropping the handle does not cancel; the callback still runs when the
/// race resolves.
#[derive(Clone)]
pub struct QueuedCallback {
    race: SharedRace,
    event_type: SmolStr,
}

impl QueuedCallback {
    /// Prevent the callback from running and release both triggers.
    ///
    /// Safe to call repeatedly and after the callback has already run.
    pub fn cancel(&self) {
        let triggers = self.race.borrow_mut().cancel();
        if triggers.is_some() {
            tracing::trace!(event_type = %self.event_type, "queued callback cancelled");
        }
        drop(triggers);
    }

    /// Whether the callback has neither run nor been cancelled.
    pub fn is_pending(&self) -> bool {
        self.race.borrow().is_pending()
    }
}

impl std::fmt::Debug for QueuedCallback {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("QueuedCallback")
            .field("event_type", &self.event_type)
            .field("pending", &self.is_pending())
            .finish()
    }
}

/// Run `callback` once, before the next `event_type` event reaches any
/// bubble-phase listener on `target`, or when the deadline passes, whichever
/// comes first.
///
/// With `timeout: Some(ms)` the deadline is a timer of `ms` milliseconds
/// (`Some(0)` included); with `None` it is the next animation frame.
pub fn queue_before_event(
    target: &EventTarget,
    event_type: &str,
    callback: impl FnOnce() + 'static,
    timeout: Option<u32>,
) -> QueuedCallback {
    let event_type = SmolStr::new(event_type);
    let race: SharedRace = Rc::new(RefCell::new(Race::new(Box::new(callback))));

    let timer = {
        let race = race.clone();
        let event_type = event_type.clone();
        Timer::start(timeout, move || settle(&race, &event_type, Trigger::Timer))
    };

    let listener = {
        let race = race.clone();
        let ty = event_type.clone();
        EventListener::once_with_options(
            target,
            event_type.to_string(),
            EventListenerOptions::run_in_capture_phase(),
            move |_| settle(&race, &ty, Trigger::Event),
        )
    };

    let rejected = race.borrow_mut().arm(Triggers {
        _timer: timer,
        _listener: listener,
    });
    drop(rejected);

    tracing::trace!(%event_type, ?timeout, "queued callback before event");
    QueuedCallback { race, event_type }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;

    /// Counts how many times guards were released.
    struct Guard(Rc<Cell<u32>>);

    impl Drop for Guard {
        fn drop(&mut self) {
            self.0.set(self.0.get() + 1);
        }
    }

    fn counting_race() -> (Race<Guard>, Rc<Cell<u32>>, Rc<Cell<u32>>) {
        let runs = Rc::new(Cell::new(0));
        let released = Rc::new(Cell::new(0));
        let r = runs.clone();
        let mut race = Race::new(Box::new(move || r.set(r.get() + 1)));
        assert!(race.arm(Guard(released.clone())).is_none());
        (race, runs, released)
    }

    #[test]
    fn test_first_trigger_wins() {
        let (mut race, runs, released) = counting_race();

        let (callback, guards) = race.win();
        drop(guards);
        callback.expect("first win yields the callback")();
        assert_eq!(runs.get(), 1);
        assert_eq!(released.get(), 1);

        // The losing trigger gets nothing.
        let (callback, guards) = race.win();
        assert!(callback.is_none());
        assert!(guards.is_none());
        assert!(!race.is_pending());
        assert_eq!(runs.get(), 1);
    }

    #[test]
    fn test_cancel_suppresses_callback() {
        let (mut race, runs, released) = counting_race();

        drop(race.cancel());
        assert_eq!(released.get(), 1);
        assert!(!race.is_pending());

        let (callback, _) = race.win();
        assert!(callback.is_none());
        assert_eq!(runs.get(), 0);
    }

    #[test]
    fn test_cancel_is_idempotent() {
        let (mut race, _runs, released) = counting_race();
        drop(race.cancel());
        drop(race.cancel());
        assert_eq!(released.get(), 1);
    }

    #[test]
    fn test_arm_after_settle_returns_guards() {
        let released = Rc::new(Cell::new(0));
        let mut race: Race<Guard> = Race::new(Box::new(|| {}));
        let _ = race.win();
        let rejected = race.arm(Guard(released.clone()));
        assert!(rejected.is_some());
        drop(rejected);
        assert_eq!(released.get(), 1);
    }
}
