use crate::contexts::toast::{Toast, ToastType, use_toast};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ToastItemProps {
    pub toast: Toast,
}

struct Palette {
    surface: &'static str,
    text: &'static str,
    icon: &'static str,
}

fn palette(toast_type: &ToastType) -> Palette {
    match toast_type {
        ToastType::Error => Palette {
            surface: "bg-red-50 border-red-200 dark:bg-red-900 dark:border-red-800",
            text: "text-red-700 dark:text-red-300",
            icon: "✕",
        },
        ToastType::Success => Palette {
            surface: "bg-green-50 border-green-200 dark:bg-green-900 dark:border-green-800",
            text: "text-green-700 dark:text-green-300",
            icon: "✓",
        },
        ToastType::Info => Palette {
            surface: "bg-neutral-50 border-neutral-200 dark:bg-neutral-800 dark:border-neutral-700",
            text: "text-neutral-700 dark:text-neutral-300",
            icon: "ℹ",
        },
    }
}

#[function_component]
pub fn ToastItem(props: &ToastItemProps) -> Html {
    let toasts = use_toast();
    let toast = &props.toast;
    let Palette { surface, text, icon } = palette(&toast.toast_type);

    // errors interrupt screen readers, everything else waits its turn
    let role = match toast.toast_type {
        ToastType::Error => "alert",
        ToastType::Success | ToastType::Info => "status",
    };

    let on_dismiss = {
        let toast_id = toast.id;
        Callback::from(move |_: MouseEvent| toasts.remove(toast_id))
    };

    html! {
        <div {role} class={classes!("p-4", "rounded-lg", "border", "shadow-lg", surface, text)}>
            <div class="flex items-start gap-3">
                <span class="text-sm font-medium" aria-hidden="true">{icon}</span>
                <p class="flex-1 min-w-0 text-sm font-medium leading-5">
                    {&toast.message}
                </p>
                <button
                    type="button"
                    onclick={on_dismiss}
                    aria-label="Dismiss notification"
                    class="text-neutral-400 hover:text-neutral-600 dark:hover:text-neutral-200
                           focus:outline-none focus:ring-2 focus:ring-neutral-500 rounded"
                >
                    <span class="text-lg leading-none">{"×"}</span>
                </button>
            </div>
        </div>
    }
}
