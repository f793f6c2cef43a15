//! User intent derived from modifier keys.
//!
//! Browsers give modified clicks on links and submit controls special
//! meaning: Cmd/Ctrl-click opens a new tab, Alt-click downloads. Components
//! that take over activation (menus, composite widgets) check these so they
//! can step aside and let the browser do its thing.

use wasm_bindgen::JsCast;
use web_sys::{Element, Event, HtmlButtonElement, HtmlInputElement, KeyboardEvent, MouseEvent};

use crate::platform::{Platform, platform};

/// Modifier key state carried by an event.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Modifiers {
    pub alt: bool,
    pub ctrl: bool,
    pub meta: bool,
    pub shift: bool,
}

impl Modifiers {
    /// Read modifiers from a mouse, pointer or keyboard event.
    ///
    /// Other event kinds carry no modifier state and report none held.
    pub fn from_event(event: &Event) -> Self {
        if let Some(mouse) = event.dyn_ref::<MouseEvent>() {
            return Self {
                alt: mouse.alt_key(),
                ctrl: mouse.ctrl_key(),
                meta: mouse.meta_key(),
                shift: mouse.shift_key(),
            };
        }
        if let Some(key) = event.dyn_ref::<KeyboardEvent>() {
            return Self {
                alt: key.alt_key(),
                ctrl: key.ctrl_key(),
                meta: key.meta_key(),
                shift: key.shift_key(),
            };
        }
        Self::default()
    }
}

/// What activating an element does natively.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivationTarget {
    /// `<a>`
    Link,
    /// `<button type="submit">` (the default button type).
    SubmitButton,
    /// `<input type="submit">`
    SubmitInput,
    Other,
}

impl ActivationTarget {
    /// Classify from a tag name and the control's resolved `type` property.
    pub fn classify(tag_name: &str, control_type: Option<&str>) -> Self {
        let is_submit = control_type.is_some_and(|t| t.eq_ignore_ascii_case("submit"));
        if tag_name.eq_ignore_ascii_case("a") {
            Self::Link
        } else if tag_name.eq_ignore_ascii_case("button") && is_submit {
            Self::SubmitButton
        } else if tag_name.eq_ignore_ascii_case("input") && is_submit {
            Self::SubmitInput
        } else {
            Self::Other
        }
    }

    pub fn of(element: &Element) -> Self {
        let control_type = if let Some(button) = element.dyn_ref::<HtmlButtonElement>() {
            Some(button.type_())
        } else {
            element.dyn_ref::<HtmlInputElement>().map(|input| input.type_())
        };
        Self::classify(&element.tag_name(), control_type.as_deref())
    }

    /// Links and submit controls are the elements browsers navigate from.
    pub fn navigates(self) -> bool {
        !matches!(self, Self::Other)
    }
}

/// Would the browser open this activation in a new tab?
///
/// Exactly one modifier counts: Meta on Apple platforms, Ctrl elsewhere.
pub fn opens_in_new_tab(target: ActivationTarget, modifiers: Modifiers, apple: bool) -> bool {
    let held = if apple { modifiers.meta } else { modifiers.ctrl };
    held && target.navigates()
}

/// Would the browser download this activation's target?
pub fn starts_download(target: ActivationTarget, modifiers: Modifiers) -> bool {
    modifiers.alt && target.navigates()
}

fn current_element(event: &Event) -> Option<Element> {
    event.current_target()?.dyn_into::<Element>().ok()
}

/// Check whether the event would open its current target in a new tab,
/// using the detected platform.
pub fn is_opening_in_new_tab(event: &Event) -> bool {
    is_opening_in_new_tab_on(event, platform())
}

/// Same as [`is_opening_in_new_tab`] against an explicit platform.
pub fn is_opening_in_new_tab_on(event: &Event, platform: &Platform) -> bool {
    let Some(element) = current_element(event) else {
        return false;
    };
    opens_in_new_tab(
        ActivationTarget::of(&element),
        Modifiers::from_event(event),
        platform.is_apple(),
    )
}

/// Check whether the event would download its current target.
pub fn is_downloading(event: &Event) -> bool {
    let Some(element) = current_element(event) else {
        return false;
    };
    starts_download(ActivationTarget::of(&element), Modifiers::from_event(event))
}
