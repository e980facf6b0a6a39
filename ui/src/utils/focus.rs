//! Keyboard focus handling for modal dialogs.
//!
//! The decisions (what counts as focusable, where Tab goes) are plain
//! functions over small descriptions of the DOM so they can be tested
//! natively. [`DialogSession`] applies them to a live dialog.

use gloo::events::{EventListener, EventListenerOptions};
use gloo::render::{AnimationFrame, request_animation_frame};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement, KeyboardEvent};
use yew::Callback;

/// Candidates for focus inside a dialog. Disabled elements are filtered
/// out afterwards by [`is_focusable`].
pub const FOCUSABLE_SELECTOR: &str = "button, [href], input, select, \
                                      textarea, [tabindex]:not([tabindex=\"-1\"])";

/// The attributes of an element that decide whether Tab can reach it.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FocusCandidate {
    pub tag: String,
    pub has_href: bool,
    pub disabled: bool,
    pub tab_index: Option<i32>,
    pub input_type: Option<String>,
}

impl FocusCandidate {
    pub fn of(element: &Element) -> Self {
        Self {
            tag: element.tag_name().to_ascii_lowercase(),
            has_href: element.has_attribute("href"),
            disabled: element.has_attribute("disabled"),
            tab_index: element
                .get_attribute("tabindex")
                .and_then(|value| value.trim().parse().ok()),
            input_type: element
                .get_attribute("type")
                .map(|value| value.to_ascii_lowercase()),
        }
    }
}

/// Interactive elements that aren't disabled or taken out of the tab order.
pub fn is_focusable(candidate: &FocusCandidate) -> bool {
    if candidate.disabled || candidate.tab_index.is_some_and(|i| i < 0) {
        return false;
    }
    match candidate.tag.as_str() {
        "button" | "select" | "textarea" => true,
        "input" => candidate.input_type.as_deref() != Some("hidden"),
        "a" | "area" => candidate.has_href,
        _ => candidate.has_href || candidate.tab_index.is_some(),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    Close,
    /// Move focus to the focusable element at this index
    FocusAt(usize),
    /// Nothing inside can take focus, keep it on the dialog itself
    FocusContainer,
    PassThrough,
}

/// Decide what a keydown does while a dialog is open.
///
/// `count` is the number of focusable elements in the dialog and `active`
/// the index of the focused one, or `None` when focus is elsewhere.
pub fn resolve_key(
    key: &str,
    shift: bool,
    count: usize,
    active: Option<usize>,
) -> KeyAction {
    match key {
        "Escape" | "Esc" => KeyAction::Close,
        "Tab" if count == 0 => KeyAction::FocusContainer,
        "Tab" if shift => match active {
            Some(0) | None => KeyAction::FocusAt(count - 1),
            Some(_) => KeyAction::PassThrough,
        },
        "Tab" => match active {
            Some(i) if i + 1 < count => KeyAction::PassThrough,
            _ => KeyAction::FocusAt(0),
        },
        _ => KeyAction::PassThrough,
    }
}

pub fn focusable_elements(container: &Element) -> Vec<HtmlElement> {
    let Ok(nodes) = container.query_selector_all(FOCUSABLE_SELECTOR) else {
        return Vec::new();
    };
    (0..nodes.length())
        .filter_map(|i| nodes.item(i))
        .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
        .filter(|element| is_focusable(&FocusCandidate::of(element)))
        .collect()
}

fn active_element() -> Option<Element> {
    gloo::utils::document().active_element()
}

/// Hides page overflow until dropped, then puts back whatever was there.
pub struct ScrollLock {
    body: HtmlElement,
    previous: String,
}

impl ScrollLock {
    pub fn acquire() -> Option<Self> {
        let body = gloo::utils::document().body()?;
        let style = body.style();
        let previous = style.get_property_value("overflow").unwrap_or_default();
        style.set_property("overflow", "hidden").ok()?;
        Some(Self { body, previous })
    }
}

impl Drop for ScrollLock {
    fn drop(&mut self) {
        let style = self.body.style();
        let _ = if self.previous.is_empty() {
            style.remove_property("overflow").map(|_| ())
        } else {
            style.set_property("overflow", &self.previous)
        };
    }
}

/// Everything a dialog holds on to while it is open.
///
/// Dropping the session removes the keydown listener, cancels the initial
/// focus if it hasn't run yet, unlocks scrolling and returns focus to
/// whatever had it before the dialog opened, in that order.
pub struct DialogSession {
    keydown: Option<EventListener>,
    initial_focus: Option<AnimationFrame>,
    scroll_lock: Option<ScrollLock>,
    return_focus: Option<HtmlElement>,
}

impl DialogSession {
    pub fn open(
        container: HtmlElement,
        on_close: Rc<RefCell<Callback<()>>>,
    ) -> Self {
        let return_focus =
            active_element().and_then(|el| el.dyn_into::<HtmlElement>().ok());
        let scroll_lock = ScrollLock::acquire();

        let initial_focus = {
            let container = container.clone();
            request_animation_frame(move |_| {
                let first = focusable_elements(&container).into_iter().next();
                let _ = match first {
                    Some(element) => element.focus(),
                    None => container.focus(),
                };
            })
        };

        let keydown = EventListener::new_with_options(
            &gloo::utils::window(),
            "keydown",
            EventListenerOptions::enable_prevent_default(),
            move |event| {
                let Some(event) = event.dyn_ref::<KeyboardEvent>() else {
                    return;
                };
                let focusables = focusable_elements(&container);
                let active = active_element().and_then(|active| {
                    focusables
                        .iter()
                        .position(|el| AsRef::<Element>::as_ref(el) == &active)
                });

                match resolve_key(
                    &event.key(),
                    event.shift_key(),
                    focusables.len(),
                    active,
                ) {
                    KeyAction::Close => on_close.borrow().emit(()),
                    KeyAction::FocusAt(index) => {
                        event.prevent_default();
                        if let Some(element) = focusables.get(index) {
                            let _ = element.focus();
                        }
                    }
                    KeyAction::FocusContainer => {
                        event.prevent_default();
                        let _ = container.focus();
                    }
                    KeyAction::PassThrough => {}
                }
            },
        );

        Self {
            keydown: Some(keydown),
            initial_focus: Some(initial_focus),
            scroll_lock,
            return_focus,
        }
    }
}

impl Drop for DialogSession {
    fn drop(&mut self) {
        self.keydown.take();
        self.initial_focus.take();
        self.scroll_lock.take();
        if let Some(element) = self.return_focus.take()
            && element.is_connected()
        {
            let _ = element.focus();
        }
    }
}
