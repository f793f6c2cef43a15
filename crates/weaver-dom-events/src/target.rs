//! Predicates relating an event's target to the nodes that received it.
//!
//! None of these mutate the event. Missing or non-node targets degrade to a
//! definite answer instead of an error.

use wasm_bindgen::JsCast;
use web_sys::{Event, EventTarget, FocusEvent, Node};

/// Whether `parent` is `child` or one of its inclusive ancestors.
///
/// Targets that aren't DOM nodes (a `Window`, for instance) only contain
/// themselves.
pub fn contains(parent: &EventTarget, child: &EventTarget) -> bool {
    if parent == child {
        return true;
    }
    match (parent.dyn_ref::<Node>(), child.dyn_ref::<Node>()) {
        (Some(parent), Some(child)) => parent.contains(Some(child)),
        _ => false,
    }
}

/// True when the event originated outside the DOM subtree of the element
/// handling it.
///
/// This happens for content rendered into a portal: framework-level
/// bubbling delivers the event to the logical parent even though the DOM
/// target lives elsewhere.
pub fn is_portal_event(event: &Event) -> bool {
    let Some(current) = event.current_target() else {
        return false;
    };
    match event.target() {
        Some(target) => !contains(&current, &target),
        None => true,
    }
}

/// True when the handling element is the element that was interacted with.
pub fn is_self_target(event: &Event) -> bool {
    event.target() == event.current_target()
}

/// True when focus is moving somewhere outside `container`.
///
/// `container` defaults to the event's current target. A focus event with
/// no related target (focus left the document, or came from nowhere) always
/// counts as outside.
pub fn is_focus_event_outside(event: &FocusEvent, container: Option<&EventTarget>) -> bool {
    let Some(related) = event.related_target() else {
        return true;
    };
    let current;
    let container = match container {
        Some(container) => container,
        None => match event.current_target() {
            Some(target) => {
                current = target;
                &current
            }
            None => return true,
        },
    };
    !contains(container, &related)
}
