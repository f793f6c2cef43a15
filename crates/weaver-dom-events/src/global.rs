//! Listeners spanning a window and every frame nested in it.
//!
//! Components that close on outside interaction need to hear clicks and
//! focus changes inside iframes too. Frames from other origins (or sandboxed
//! ones) throw on access; those are skipped and the rest are still covered.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_events::{EventListenerOptions, EventListenerPhase};
use js_sys::Reflect;
use smol_str::SmolStr;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{AddEventListenerOptions, Event, EventTarget, Window};

use crate::error::js_message;

/// A listener attached to one document.
///
/// Unlike `gloo_events::EventListener` this one is built fallibly, since the
/// target may belong to a frame we aren't allowed to touch.
struct Registration {
    target: EventTarget,
    event_type: SmolStr,
    capture: bool,
    callback: Closure<dyn FnMut(Event)>,
}

impl Registration {
    fn try_new(
        target: EventTarget,
        event_type: &SmolStr,
        options: &EventListenerOptions,
        listener: &Rc<dyn Fn(&Event)>,
    ) -> Result<Self, JsValue> {
        let capture = matches!(options.phase, EventListenerPhase::Capture);
        let listener = listener.clone();
        let callback =
            Closure::wrap(Box::new(move |event: Event| listener(&event)) as Box<dyn FnMut(Event)>);

        let add_options = AddEventListenerOptions::new();
        add_options.set_capture(capture);
        add_options.set_passive(options.passive);
        target.add_event_listener_with_callback_and_add_event_listener_options(
            event_type,
            callback.as_ref().unchecked_ref(),
            &add_options,
        )?;

        Ok(Self {
            target,
            event_type: event_type.clone(),
            capture,
            callback,
        })
    }
}

impl Drop for Registration {
    fn drop(&mut self) {
        // The frame may have navigated cross-origin since we attached.
        if let Err(e) = self.target.remove_event_listener_with_callback_and_bool(
            &self.event_type,
            self.callback.as_ref().unchecked_ref(),
            self.capture,
        ) {
            tracing::debug!(
                event_type = %self.event_type,
                "listener removal failed: {}",
                js_message(&e)
            );
        }
    }
}

/// Listener registrations across a window tree.
///
/// Dropping this removes every registration, like `gloo_events::EventListener`.
/// Call [`forget`](Self::forget) to keep them for the lifetime of the page.
#[must_use = "the listener is removed when this handle is dropped"]
pub struct GlobalEventListener {
    event_type: SmolStr,
    registrations: RefCell<Vec<Registration>>,
}

impl GlobalEventListener {
    fn empty(event_type: SmolStr) -> Self {
        Self {
            event_type,
            registrations: RefCell::new(Vec::new()),
        }
    }

    /// Detach from every document this listener was attached to.
    ///
    /// Idempotent; removal failures are ignored.
    pub fn remove(&self) {
        let registrations = std::mem::take(&mut *self.registrations.borrow_mut());
        if !registrations.is_empty() {
            tracing::trace!(
                event_type = %self.event_type,
                count = registrations.len(),
                "removing global listener"
            );
        }
        drop(registrations);
    }

    /// Keep the listener attached forever.
    pub fn forget(self) {
        let registrations = std::mem::take(&mut *self.registrations.borrow_mut());
        std::mem::forget(registrations);
    }

    /// Number of documents currently covered.
    pub fn len(&self) -> usize {
        self.registrations.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.registrations.borrow().is_empty()
    }

    pub fn event_type(&self) -> &str {
        &self.event_type
    }
}

impl Drop for GlobalEventListener {
    fn drop(&mut self) {
        self.remove();
    }
}

impl std::fmt::Debug for GlobalEventListener {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GlobalEventListener")
            .field("event_type", &self.event_type)
            .field("documents", &self.len())
            .finish()
    }
}

/// Property read that turns cross-origin `SecurityError`s into `Err`.
fn get(target: &JsValue, key: &str) -> Result<JsValue, JsValue> {
    Reflect::get(target, &JsValue::from_str(key))
}

/// Attach to `scope.document`, then recurse into `scope.frames`.
///
/// Failing to reach a scope's document skips that scope and everything
/// below it. Each child frame is attempted independently.
fn attach_tree(
    scope: &JsValue,
    event_type: &SmolStr,
    options: &EventListenerOptions,
    listener: &Rc<dyn Fn(&Event)>,
    out: &mut Vec<Registration>,
) -> Result<(), JsValue> {
    let document: EventTarget = get(scope, "document")?.unchecked_into();
    out.push(Registration::try_new(document, event_type, options, listener)?);

    let frames = get(scope, "frames")?;
    let count = get(&frames, "length")?.as_f64().unwrap_or(0.0) as u32;
    for index in 0..count {
        let frame = match Reflect::get_u32(&frames, index) {
            Ok(frame) if !frame.is_undefined() && !frame.is_null() => frame,
            Ok(_) => continue,
            Err(e) => {
                tracing::debug!(index, "skipping frame: {}", js_message(&e));
                continue;
            }
        };
        if let Err(e) = attach_tree(&frame, event_type, options, listener, out) {
            tracing::debug!(
                index,
                %event_type,
                "frame not covered by listener: {}",
                js_message(&e)
            );
        }
    }
    Ok(())
}

/// Listen for `event_type` on `scope` (default: the global window) and on
/// every frame reachable from it.
///
/// Inaccessible frames are silently left out. The returned handle detaches
/// from everything that was attached.
pub fn add_global_event_listener(
    event_type: &str,
    listener: impl Fn(&Event) + 'static,
    options: EventListenerOptions,
    scope: Option<&Window>,
) -> GlobalEventListener {
    let event_type = SmolStr::new(event_type);
    let mut handle = GlobalEventListener::empty(event_type.clone());

    let scope = match scope {
        Some(scope) => scope.clone(),
        None => match web_sys::window() {
            Some(window) => window,
            None => {
                tracing::warn!(%event_type, "no global window, listener not attached");
                return handle;
            }
        },
    };

    let listener: Rc<dyn Fn(&Event)> = Rc::new(listener);
    let registrations = handle.registrations.get_mut();
    if let Err(e) = attach_tree(&scope, &event_type, &options, &listener, registrations) {
        tracing::debug!(%event_type, "window not covered by listener: {}", js_message(&e));
    }

    tracing::trace!(%event_type, documents = handle.len(), "attached global listener");
    handle
}
