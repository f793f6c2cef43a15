//! Synthetic event dispatch.
//!
//! These simulate user interaction in browser tests. Every helper dispatches
//! synchronously and returns the `dispatchEvent` result: `false` if a
//! listener cancelled the event.

use web_sys::{
    Event, EventInit, EventTarget, FocusEvent, FocusEventInit, KeyboardEvent, KeyboardEventInit,
    MouseEvent, MouseEventInit,
};

use crate::error::DomEventError;

fn dispatch(target: &EventTarget, event: &Event) -> Result<bool, DomEventError> {
    target
        .dispatch_event(event)
        .map_err(|e| DomEventError::dispatch(&e))
}

/// Copy an init dictionary and force `bubbles: true` on the copy.
fn bubbling_focus_init(init: Option<&FocusEventInit>) -> FocusEventInit {
    let copy = FocusEventInit::new();
    if let Some(init) = init {
        js_sys::Object::assign(&copy, init);
    }
    copy.set_bubbles(true);
    copy
}

fn focus_event(
    kind: &'static str,
    init: Option<&FocusEventInit>,
) -> Result<FocusEvent, DomEventError> {
    let event = match init {
        Some(init) => FocusEvent::new_with_focus_event_init_dict(kind, init),
        None => FocusEvent::new(kind),
    };
    event.map_err(|e| DomEventError::construct(kind, &e))
}

/// Dispatch a primary focus event, then its always-bubbling companion.
fn fire_focus_pair(
    target: &EventTarget,
    primary: &'static str,
    companion: &'static str,
    init: Option<&FocusEventInit>,
) -> Result<bool, DomEventError> {
    let event = focus_event(primary, init)?;
    let default_allowed = dispatch(target, &event)?;

    let companion_event = focus_event(companion, Some(&bubbling_focus_init(init)))?;
    dispatch(target, &companion_event)?;

    tracing::trace!(primary, companion, default_allowed, "fired focus pair");
    Ok(default_allowed)
}

/// Dispatch a generic `Event` of the given type.
pub fn fire_event(
    target: &EventTarget,
    event_type: &str,
    init: Option<&EventInit>,
) -> Result<bool, DomEventError> {
    let event = match init {
        Some(init) => Event::new_with_event_init_dict(event_type, init),
        None => Event::new(event_type),
    }
    .map_err(|e| DomEventError::construct("generic", &e))?;
    dispatch(target, &event)
}

/// Dispatch `blur` followed by a bubbling `focusout`, as a browser does when
/// an element loses focus.
///
/// Returns the result of the `blur` dispatch.
pub fn fire_blur_event(
    target: &EventTarget,
    init: Option<&FocusEventInit>,
) -> Result<bool, DomEventError> {
    fire_focus_pair(target, "blur", "focusout", init)
}

/// Dispatch `focus` followed by a bubbling `focusin`.
///
/// Returns the result of the `focus` dispatch.
pub fn fire_focus_event(
    target: &EventTarget,
    init: Option<&FocusEventInit>,
) -> Result<bool, DomEventError> {
    fire_focus_pair(target, "focus", "focusin", init)
}

/// Dispatch a `KeyboardEvent` (`keydown`, `keyup`, ...).
pub fn fire_keyboard_event(
    target: &EventTarget,
    event_type: &str,
    init: Option<&KeyboardEventInit>,
) -> Result<bool, DomEventError> {
    let event = match init {
        Some(init) => KeyboardEvent::new_with_keyboard_event_init_dict(event_type, init),
        None => KeyboardEvent::new(event_type),
    }
    .map_err(|e| DomEventError::construct("keyboard", &e))?;
    dispatch(target, &event)
}

/// Dispatch a `click` `MouseEvent`.
pub fn fire_click_event(
    target: &EventTarget,
    init: Option<&MouseEventInit>,
) -> Result<bool, DomEventError> {
    let event = match init {
        Some(init) => MouseEvent::new_with_mouse_event_init_dict("click", init),
        None => MouseEvent::new("click"),
    }
    .map_err(|e| DomEventError::construct("click", &e))?;
    dispatch(target, &event)
}
