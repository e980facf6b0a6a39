use uuid::Uuid;
use wasm_bindgen::JsCast;
use yew::prelude::*;

use crate::utils::focus::DialogSession;

/// Id of the element dialogs are rendered into. Without it they render in
/// place.
pub const PORTAL_ROOT_ID: &str = "portal-root";

/// An accessible modal dialog.
///
/// While open it locks page scrolling, keeps Tab/Shift+Tab cycling inside
/// the dialog and closes on Escape, a press on the backdrop, or the close
/// button. All three go through `on_close`. Focus returns to the element
/// that had it before the dialog opened.
///
/// # Example
///
/// ```rust,ignore
/// let open = use_state(|| false);
/// let on_close = {
///     let open = open.clone();
///     Callback::from(move |_| open.set(false))
/// };
///
/// html! {
///     <Modal is_open={*open} {on_close} heading="Spinning">
///         <p>{"High tempo intervals"}</p>
///     </Modal>
/// }
/// ```
#[derive(Properties, PartialEq)]
pub struct ModalProps {
    pub is_open: bool,
    pub on_close: Callback<()>,
    /// Rendered as the dialog's title and used as its accessible name
    #[prop_or_default]
    pub heading: Option<AttrValue>,
    /// Accessible name when there is no visible heading
    #[prop_or_default]
    pub aria_label: Option<AttrValue>,
    #[prop_or_default]
    pub aria_describedby: Option<AttrValue>,
    /// Maximum width class (default: "max-w-lg")
    #[prop_or_else(|| AttrValue::from("max-w-lg"))]
    pub max_width: AttrValue,
    #[prop_or_default]
    pub children: Html,
}

#[function_component]
pub fn Modal(props: &ModalProps) -> Html {
    let backdrop_ref = use_node_ref();
    let dialog_ref = use_node_ref();
    let heading_id = use_memo((), |_| format!("modal-heading-{}", Uuid::new_v4()));

    // The keydown listener outlives individual renders, so it reads the
    // latest on_close through this cell.
    let on_close = use_mut_ref(|| props.on_close.clone());
    *on_close.borrow_mut() = props.on_close.clone();

    {
        let dialog_ref = dialog_ref.clone();
        let on_close = on_close.clone();
        use_effect_with(props.is_open, move |is_open| {
            let session = (*is_open)
                .then(|| dialog_ref.cast::<web_sys::HtmlElement>())
                .flatten()
                .map(|container| DialogSession::open(container, on_close));
            move || drop(session)
        });
    }

    if !props.is_open {
        return html! {};
    }

    let on_backdrop_press = {
        let backdrop_ref = backdrop_ref.clone();
        let on_close = props.on_close.clone();
        Callback::from(move |e: MouseEvent| {
            // presses that start inside the dialog don't count
            if let Some(backdrop) = backdrop_ref.cast::<web_sys::Element>()
                && let Some(target) = e.target()
                && target.dyn_ref::<web_sys::Element>() == Some(&backdrop)
            {
                on_close.emit(());
            }
        })
    };

    let on_close_click = props.on_close.reform(|_: MouseEvent| ());

    let labelled_by = props.heading.as_ref().map(|_| (*heading_id).clone());
    let aria_label = if props.heading.is_none() {
        props.aria_label.clone()
    } else {
        None
    };

    let dialog = html! {
        <div
            ref={backdrop_ref}
            onmousedown={on_backdrop_press}
            class="fixed inset-0 bg-black/50 z-50 flex items-center justify-center p-4"
        >
            <div
                ref={dialog_ref}
                role="dialog"
                aria-modal="true"
                aria-labelledby={labelled_by}
                aria-label={aria_label}
                aria-describedby={props.aria_describedby.clone()}
                tabindex="-1"
                class={format!(
                    "relative bg-white dark:bg-neutral-800 rounded-lg shadow-xl \
                     w-full p-6 focus:outline-none {}",
                    props.max_width
                )}
            >
                <button
                    type="button"
                    onclick={on_close_click}
                    aria-label="Close"
                    class="absolute top-3 right-3 text-neutral-400 hover:text-neutral-600
                           dark:hover:text-neutral-200 focus:outline-none focus:ring-2
                           focus:ring-neutral-500 rounded"
                >
                    <span class="text-xl leading-none">{"×"}</span>
                </button>
                if let Some(heading) = &props.heading {
                    <h2
                        id={(*heading_id).clone()}
                        class="text-xl font-semibold text-neutral-900 dark:text-white mb-4 pr-8"
                    >
                        {heading.clone()}
                    </h2>
                }
                {props.children.clone()}
            </div>
        </div>
    };

    match gloo::utils::document().get_element_by_id(PORTAL_ROOT_ID) {
        Some(portal_root) => create_portal(dialog, portal_root),
        None => dialog,
    }
}
