use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ErrorAlertProps {
    pub message: AttrValue,
    /// Shows a "Try again" button when set
    #[prop_or_default]
    pub on_retry: Option<Callback<()>>,
}

/// Inline error for a failed load. The user can hide it; a different
/// message shows it again.
#[function_component]
pub fn ErrorAlert(props: &ErrorAlertProps) -> Html {
    let dismissed = use_state(|| false);

    {
        let dismissed = dismissed.clone();
        use_effect_with(props.message.clone(), move |_| dismissed.set(false));
    }

    if *dismissed {
        return html! {};
    }

    let on_dismiss = {
        let dismissed = dismissed.clone();
        Callback::from(move |_: MouseEvent| dismissed.set(true))
    };

    html! {
        <div
            role="alert"
            class="bg-red-50 dark:bg-red-900/20 border border-red-200 dark:border-red-800
                   rounded-md p-4 flex items-start justify-between gap-4"
        >
            <p class="text-sm text-red-800 dark:text-red-200">{&props.message}</p>
            <div class="flex items-center gap-3 shrink-0">
                if let Some(on_retry) = &props.on_retry {
                    <button
                        type="button"
                        onclick={on_retry.reform(|_: MouseEvent| ())}
                        class="text-sm font-medium text-red-800 dark:text-red-200 underline"
                    >
                        {"Try again"}
                    </button>
                }
                <button
                    type="button"
                    onclick={on_dismiss}
                    aria-label="Dismiss"
                    class="text-red-400 hover:text-red-600 text-lg leading-none"
                >
                    {"×"}
                </button>
            </div>
        </div>
    }
}
