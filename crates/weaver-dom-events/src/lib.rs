//! DOM event helpers for weaver UI components.
//!
//! Small, stateless helpers layered directly on browser event APIs. It
//! assumes a `wasm32-unknown-unknown` target environment; the pure decision
//! logic (modifier/target classification, platform parsing, the scheduler's
//! race state) also builds natively.
//!
//! # Architecture
//!
//! - `target`: portal, self-target and focus-boundary predicates
//! - `intent`: "open in new tab" / "download" modifier intent
//! - `fire`: synthetic event dispatch for tests
//! - `input`: `inputType` introspection on raw or wrapped events
//! - `schedule`: run a callback before an event fires, with a deadline
//! - `global`: listeners spanning a window and all of its frames
//! - `platform`: Browser/OS detection for platform-specific behavior

pub mod error;
pub mod fire;
pub mod global;
pub mod input;
pub mod intent;
pub mod platform;
pub mod schedule;
pub mod target;

pub use error::DomEventError;

pub use fire::{
    fire_blur_event, fire_click_event, fire_event, fire_focus_event, fire_keyboard_event,
};
pub use global::{GlobalEventListener, add_global_event_listener};
pub use input::{InputType, input_kind, input_type};
pub use intent::{
    ActivationTarget, Modifiers, is_downloading, is_opening_in_new_tab, is_opening_in_new_tab_on,
};
pub use platform::{Platform, platform};
pub use schedule::{QueuedCallback, queue_before_event};
pub use target::{contains, is_focus_event_outside, is_portal_event, is_self_target};

// Listener options are part of the public API.
pub use gloo_events::{EventListenerOptions, EventListenerPhase};
