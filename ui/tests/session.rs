//! Session persistence and the sign-in hand-off, in a real browser.
#![cfg(target_arch = "wasm32")]

use gloo::storage::{SessionStorage, Storage};
use gloo_timers::future::TimeoutFuture;
use ui::contexts::session::STORAGE_KEY;
use ui::contexts::{SessionProvider, use_session};
use ui::pages::sign_in::complete_sign_in;
use wasm_bindgen_test::*;
use yew::prelude::*;
use yew_router::prelude::*;

wasm_bindgen_test_configure!(run_in_browser);

async fn settle() {
    TimeoutFuture::new(20).await;
}

fn slot() -> Option<String> {
    SessionStorage::raw().get_item(STORAGE_KEY).unwrap()
}

fn pathname() -> String {
    gloo::utils::window().location().pathname().unwrap()
}

async fn mount<C: BaseComponent<Properties = ()>>() -> (web_sys::Element, yew::AppHandle<C>) {
    let root = gloo::utils::document().create_element("div").unwrap();
    gloo::utils::body().append_child(&root).unwrap();
    let app = yew::Renderer::<C>::with_root(root.clone()).render();
    settle().await;
    (root, app)
}

#[function_component]
fn SignsInOnMount() -> Html {
    let session = use_session();
    let navigator = use_navigator();
    use_effect_with((), move |_| {
        complete_sign_in(&session, navigator.as_ref(), "alice@example.com".into());
    });
    html! {}
}

#[function_component]
fn SignInHarness() -> Html {
    html! {
        <SessionProvider>
            <BrowserRouter>
                <SignsInOnMount />
            </BrowserRouter>
        </SessionProvider>
    }
}

#[wasm_bindgen_test]
async fn sign_in_writes_bare_email_and_goes_to_workouts() {
    SessionStorage::delete(STORAGE_KEY);
    gloo::utils::window()
        .history()
        .unwrap()
        .push_state_with_url(&wasm_bindgen::JsValue::NULL, "", Some("/sign-in"))
        .unwrap();

    let (root, app) = mount::<SignInHarness>().await;

    assert_eq!(slot().as_deref(), Some("alice@example.com"));
    assert_eq!(pathname(), "/");

    app.destroy();
    root.remove();
    SessionStorage::delete(STORAGE_KEY);
}

#[function_component]
fn ShowsEmail() -> Html {
    let email = use_session().user_email().unwrap_or_default();
    html! { <span id="signed-in-as">{email}</span> }
}

#[function_component]
fn RestoreHarness() -> Html {
    html! {
        <SessionProvider>
            <ShowsEmail />
        </SessionProvider>
    }
}

#[wasm_bindgen_test]
async fn bare_email_in_storage_restores_the_session() {
    SessionStorage::raw()
        .set_item(STORAGE_KEY, "bob@example.com")
        .unwrap();

    let (root, app) = mount::<RestoreHarness>().await;
    let shown = root
        .query_selector("#signed-in-as")
        .unwrap()
        .and_then(|el| el.text_content());
    assert_eq!(shown.as_deref(), Some("bob@example.com"));

    app.destroy();
    root.remove();
    SessionStorage::delete(STORAGE_KEY);
}

#[function_component]
fn SignsOutOnMount() -> Html {
    let session = use_session();
    use_effect_with((), move |_| session.sign_out());
    html! {}
}

#[function_component]
fn SignOutHarness() -> Html {
    html! {
        <SessionProvider>
            <SignsOutOnMount />
        </SessionProvider>
    }
}

#[wasm_bindgen_test]
async fn sign_out_removes_the_slot() {
    SessionStorage::raw()
        .set_item(STORAGE_KEY, "bob@example.com")
        .unwrap();

    let (root, app) = mount::<SignOutHarness>().await;
    assert_eq!(slot(), None);

    app.destroy();
    root.remove();
}
