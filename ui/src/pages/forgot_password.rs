use payloads::requests::{self, validate_email};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::TextField;
use crate::contexts::use_toast;
use crate::hooks::use_title;
use crate::{Route, get_service_client};

pub const RESET_LINK_SENT: &str =
    "If an account with that email exists, a password reset link has been sent.";

#[function_component]
pub fn ForgotPasswordPage() -> Html {
    use_title("Forgot password");
    let toasts = use_toast();
    let email = use_state(String::new);
    let error = use_state(|| None::<String>);
    let success = use_state(|| false);
    let loading = use_state(|| false);

    let onsubmit = {
        let email = email.clone();
        let error = error.clone();
        let success = success.clone();
        let loading = loading.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            if let Some(message) = validate_email(&email).error_message() {
                error.set(Some(message.to_string()));
                return;
            }

            let error = error.clone();
            let success = success.clone();
            let loading = loading.clone();
            let toasts = toasts.clone();
            let request = requests::ForgotPassword {
                email: email.trim().to_string(),
            };

            loading.set(true);
            error.set(None);

            wasm_bindgen_futures::spawn_local(async move {
                match get_service_client().forgot_password(&request).await {
                    Ok(()) => {
                        toasts.success(RESET_LINK_SENT);
                        success.set(true);
                    }
                    Err(e) => {
                        error.set(Some(e.to_string()));
                        toasts.error("Could not send the reset link.");
                    }
                }
                loading.set(false);
            });
        })
    };

    let on_email_input = {
        let email = email.clone();
        Callback::from(move |value: String| email.set(value))
    };

    html! {
        <div class="flex items-center justify-center min-h-[60vh]">
            <div class="max-w-md w-full space-y-6">
                <div class="text-center">
                    <h1 class="text-3xl font-bold text-neutral-900 dark:text-white mb-2">
                        {"Reset your password"}
                    </h1>
                    <p class="text-neutral-600 dark:text-neutral-400">
                        {"Enter your email address and we'll send you a link to reset your password"}
                    </p>
                </div>

                if *success {
                    <div
                        role="status"
                        class="bg-white dark:bg-neutral-800 border border-neutral-200 dark:border-neutral-700 rounded-lg p-6 text-center"
                    >
                        <p class="text-neutral-900 dark:text-white font-semibold mb-2">
                            {"Check your email"}
                        </p>
                        <p class="text-sm text-neutral-600 dark:text-neutral-400">
                            {RESET_LINK_SENT}
                        </p>
                        <p class="text-xs text-neutral-500 mt-4">
                            {"Check your spam folder if you don't see it in your inbox."}
                        </p>
                    </div>
                } else {
                    <form
                        onsubmit={onsubmit}
                        novalidate={true}
                        class="bg-white dark:bg-neutral-800 border border-neutral-200 dark:border-neutral-700 rounded-lg p-6 space-y-4"
                    >
                        <TextField
                            id="email"
                            label="Email address"
                            input_type="email"
                            autocomplete="email"
                            value={(*email).clone()}
                            oninput={on_email_input}
                            error={(*error).clone().map(AttrValue::from)}
                        />

                        <button
                            type="submit"
                            disabled={*loading}
                            class="w-full bg-neutral-900 dark:bg-white text-white dark:text-neutral-900
                                   px-4 py-2 rounded-md hover:bg-neutral-800 dark:hover:bg-neutral-100
                                   disabled:opacity-50 disabled:cursor-not-allowed font-medium"
                        >
                            {if *loading { "Sending..." } else { "Send reset link" }}
                        </button>
                    </form>
                }

                <p class="text-center text-sm">
                    <Link<Route> to={Route::SignIn} classes="text-neutral-600 dark:text-neutral-400 hover:underline">
                        {"Back to sign in"}
                    </Link<Route>>
                </p>
            </div>
        </div>
    }
}
