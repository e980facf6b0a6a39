//! Dialog behavior in a real browser. Run with
//! `wasm-pack test --headless --chrome ui`.
#![cfg(target_arch = "wasm32")]

use gloo_timers::future::TimeoutFuture;
use std::cell::Cell;
use std::rc::Rc;
use ui::components::modal::{Modal, ModalProps, PORTAL_ROOT_ID};
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{
    Element, HtmlElement, KeyboardEvent, KeyboardEventInit, MouseEvent,
    MouseEventInit,
};
use yew::prelude::*;

wasm_bindgen_test_configure!(run_in_browser);

/// A mounted dialog and the number of times it asked to close.
struct Mounted {
    root: Element,
    closes: Rc<Cell<u32>>,
    app: yew::AppHandle<Modal>,
}

impl Mounted {
    async fn open() -> Self {
        let document = gloo::utils::document();
        let root = document.create_element("div").unwrap();
        gloo::utils::body().append_child(&root).unwrap();

        let closes = Rc::new(Cell::new(0));
        let counter = closes.clone();
        let props = ModalProps {
            is_open: true,
            on_close: Callback::from(move |_: ()| counter.set(counter.get() + 1)),
            heading: Some("Spinning".into()),
            aria_label: None,
            aria_describedby: None,
            max_width: "max-w-lg".into(),
            children: html! { <button id="inside">{"Book"}</button> },
        };
        let app = yew::Renderer::<Modal>::with_root_and_props(root.clone(), props)
            .render();
        settle().await;

        Self { root, closes, app }
    }

    fn dialog(&self) -> Element {
        gloo::utils::document()
            .query_selector("[role=dialog]")
            .unwrap()
            .expect("dialog is rendered")
    }

    async fn close(self) -> u32 {
        let closes = self.closes.get();
        self.app.destroy();
        settle().await;
        self.root.remove();
        closes
    }
}

async fn settle() {
    TimeoutFuture::new(20).await;
}

fn press_key(key: &str) {
    let init = KeyboardEventInit::new();
    init.set_key(key);
    init.set_bubbles(true);
    let event =
        KeyboardEvent::new_with_keyboard_event_init_dict("keydown", &init)
            .unwrap();
    gloo::utils::window().dispatch_event(&event).unwrap();
}

fn mouse_down(target: &Element) {
    let init = MouseEventInit::new();
    init.set_bubbles(true);
    let event =
        MouseEvent::new_with_mouse_event_init_dict("mousedown", &init).unwrap();
    target.dispatch_event(&event).unwrap();
}

#[wasm_bindgen_test]
async fn escape_closes_once() {
    let modal = Mounted::open().await;
    press_key("Escape");
    settle().await;

    assert_eq!(modal.close().await, 1);
}

#[wasm_bindgen_test]
async fn backdrop_press_closes_once() {
    let modal = Mounted::open().await;

    // a press inside the dialog is not a press on the backdrop
    mouse_down(&modal.dialog());
    settle().await;
    assert_eq!(modal.closes.get(), 0);

    let backdrop = modal.dialog().parent_element().unwrap();
    mouse_down(&backdrop);
    settle().await;

    assert_eq!(modal.close().await, 1);
}

#[wasm_bindgen_test]
async fn close_button_closes_once() {
    let modal = Mounted::open().await;
    let button: HtmlElement = modal
        .dialog()
        .query_selector("button[aria-label=Close]")
        .unwrap()
        .unwrap()
        .dyn_into()
        .unwrap();
    button.click();
    settle().await;

    assert_eq!(modal.close().await, 1);
}

#[wasm_bindgen_test]
async fn focus_and_scroll_are_given_back() {
    let document = gloo::utils::document();
    let body = gloo::utils::body();
    body.style().set_property("overflow", "scroll").unwrap();

    let opener: HtmlElement =
        document.create_element("button").unwrap().dyn_into().unwrap();
    body.append_child(&opener).unwrap();
    opener.focus().unwrap();

    let modal = Mounted::open().await;
    assert_eq!(body.style().get_property_value("overflow").unwrap(), "hidden");
    let focused = document.active_element().unwrap();
    assert!(modal.dialog().contains(Some(&*focused)));

    modal.close().await;
    assert_eq!(body.style().get_property_value("overflow").unwrap(), "scroll");
    assert_eq!(document.active_element(), Some(opener.clone().into()));

    opener.remove();
    body.style().remove_property("overflow").unwrap();
}

#[wasm_bindgen_test]
async fn renders_in_place_without_portal_root() {
    assert!(gloo::utils::document()
        .get_element_by_id(PORTAL_ROOT_ID)
        .is_none());

    let modal = Mounted::open().await;
    assert!(modal.root.query_selector("[role=dialog]").unwrap().is_some());
    modal.close().await;
}

#[wasm_bindgen_test]
async fn renders_into_portal_root() {
    let document = gloo::utils::document();
    let portal_root = document.create_element("div").unwrap();
    portal_root.set_id(PORTAL_ROOT_ID);
    gloo::utils::body().append_child(&portal_root).unwrap();

    let modal = Mounted::open().await;
    assert!(portal_root.query_selector("[role=dialog]").unwrap().is_some());
    assert!(modal.root.query_selector("[role=dialog]").unwrap().is_none());

    modal.close().await;
    assert!(portal_root.query_selector("[role=dialog]").unwrap().is_none());
    portal_root.remove();
}
