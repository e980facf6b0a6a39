use gloo_timers::callback::Timeout;
use payloads::ClientError;
use payloads::requests::{self, validate_password};
use reqwest::StatusCode;
use serde::Deserialize;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::TextField;
use crate::contexts::use_toast;
use crate::hooks::use_title;
use crate::{Route, get_service_client};

/// How long the result is shown before moving on.
pub const REDIRECT_DELAY_MS: u32 = 5000;

pub const LINK_EXPIRED: &str =
    "This reset link is invalid or has expired. Please request a new one.";
pub const PASSWORD_RESET: &str =
    "Your password has been reset. You can now sign in.";

/// Query string of the link sent by forgot-password,
/// `/reset-password?email=...&token=...`.
#[derive(Debug, Default, Clone, PartialEq, Deserialize)]
pub struct ResetQuery {
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub token: Option<String>,
}

impl ResetQuery {
    /// Email and token, when both are present and non-blank.
    pub fn credentials(&self) -> Option<(String, String)> {
        let email = self.email.as_deref().map(str::trim).unwrap_or_default();
        let token = self.token.as_deref().map(str::trim).unwrap_or_default();
        (!email.is_empty() && !token.is_empty())
            .then(|| (email.to_string(), token.to_string()))
    }
}

#[derive(Debug, Default, Clone, PartialEq)]
pub struct ResetErrors {
    pub password: Option<&'static str>,
    pub confirm_password: Option<&'static str>,
}

pub fn validate_reset(password: &str, confirm_password: &str) -> ResetErrors {
    ResetErrors {
        password: validate_password(password).error_message(),
        confirm_password: (password != confirm_password)
            .then_some("Passwords do not match"),
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ResetFailure {
    LinkExpired,
    Other(String),
}

pub fn reset_failure(error: &ClientError) -> ResetFailure {
    match error.status() {
        Some(StatusCode::BAD_REQUEST) => ResetFailure::LinkExpired,
        _ => ResetFailure::Other(error.to_string()),
    }
}

#[function_component]
pub fn ResetPasswordPage() -> Html {
    use_title("Reset password");
    let toasts = use_toast();
    let navigator = use_navigator();
    let query = use_location()
        .and_then(|location| location.query::<ResetQuery>().ok())
        .unwrap_or_default();
    let credentials = query.credentials();

    let password = use_state(String::new);
    let confirm_password = use_state(String::new);
    let errors = use_state(ResetErrors::default);
    let loading = use_state(|| false);
    let done = use_state(|| false);
    let redirect = use_state(|| None::<Route>);

    // pending redirects are dropped with the page
    {
        use_effect_with((*redirect).clone(), move |redirect| {
            let timeout = redirect.clone().zip(navigator).map(|(route, navigator)| {
                Timeout::new(REDIRECT_DELAY_MS, move || navigator.push(&route))
            });
            move || drop(timeout)
        });
    }

    let onsubmit = {
        let password = password.clone();
        let confirm_password = confirm_password.clone();
        let errors = errors.clone();
        let loading = loading.clone();
        let done = done.clone();
        let redirect = redirect.clone();
        let credentials = credentials.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let Some((email, token)) = credentials.clone() else {
                return;
            };
            let validation = validate_reset(&password, &confirm_password);
            let valid = validation == ResetErrors::default();
            errors.set(validation);
            if !valid {
                return;
            }

            let request = requests::ResetPassword {
                email,
                password: (*password).clone(),
                confirm_password: (*confirm_password).clone(),
                reset_code: token,
            };
            let loading = loading.clone();
            let done = done.clone();
            let redirect = redirect.clone();
            let toasts = toasts.clone();
            loading.set(true);

            wasm_bindgen_futures::spawn_local(async move {
                match get_service_client().reset_password(&request).await {
                    Ok(()) => {
                        toasts.success(PASSWORD_RESET);
                        done.set(true);
                        redirect.set(Some(Route::SignIn));
                    }
                    Err(e) => match reset_failure(&e) {
                        ResetFailure::LinkExpired => {
                            toasts.error(LINK_EXPIRED);
                            redirect.set(Some(Route::ForgotPassword));
                        }
                        ResetFailure::Other(message) => toasts.error(message),
                    },
                }
                loading.set(false);
            });
        })
    };

    let on_password = {
        let password = password.clone();
        Callback::from(move |value: String| password.set(value))
    };
    let on_confirm = {
        let confirm_password = confirm_password.clone();
        Callback::from(move |value: String| confirm_password.set(value))
    };

    let content = if credentials.is_none() {
        html! {
            <div role="alert" class="bg-red-50 dark:bg-red-900/20 border border-red-200 dark:border-red-800 rounded-lg p-6 text-center space-y-3">
                <p class="text-sm text-red-800 dark:text-red-200">
                    {"This reset link is incomplete. Open the link from your email again, or request a new one."}
                </p>
                <Link<Route> to={Route::ForgotPassword} classes="text-sm font-medium underline">
                    {"Request a new link"}
                </Link<Route>>
            </div>
        }
    } else if *done {
        html! {
            <div role="status" class="bg-white dark:bg-neutral-800 border border-neutral-200 dark:border-neutral-700 rounded-lg p-6 text-center">
                <p class="text-neutral-900 dark:text-white font-semibold mb-2">{PASSWORD_RESET}</p>
                <p class="text-sm text-neutral-600 dark:text-neutral-400">
                    {"Taking you to sign in..."}
                </p>
            </div>
        }
    } else {
        let busy = *loading || redirect.is_some();
        html! {
            <form
                onsubmit={onsubmit}
                novalidate={true}
                class="bg-white dark:bg-neutral-800 border border-neutral-200 dark:border-neutral-700 rounded-lg p-6 space-y-4"
            >
                <TextField
                    id="password"
                    label="New password"
                    input_type="password"
                    autocomplete="new-password"
                    value={(*password).clone()}
                    oninput={on_password}
                    error={errors.password.map(AttrValue::from)}
                    disabled={busy}
                />
                <TextField
                    id="confirm-password"
                    label="Confirm new password"
                    input_type="password"
                    autocomplete="new-password"
                    value={(*confirm_password).clone()}
                    oninput={on_confirm}
                    error={errors.confirm_password.map(AttrValue::from)}
                    disabled={busy}
                />
                <button
                    type="submit"
                    disabled={busy}
                    class="w-full bg-neutral-900 dark:bg-white text-white dark:text-neutral-900
                           px-4 py-2 rounded-md hover:bg-neutral-800 dark:hover:bg-neutral-100
                           disabled:opacity-50 disabled:cursor-not-allowed font-medium"
                >
                    {if *loading { "Resetting..." } else { "Reset password" }}
                </button>
            </form>
        }
    };

    html! {
        <div class="flex items-center justify-center min-h-[60vh]">
            <div class="max-w-md w-full space-y-6">
                <div class="text-center">
                    <h1 class="text-3xl font-bold text-neutral-900 dark:text-white mb-2">
                        {"Choose a new password"}
                    </h1>
                    if let Some((email, _)) = &credentials {
                        <p class="text-neutral-600 dark:text-neutral-400">{email}</p>
                    }
                </div>
                {content}
            </div>
        </div>
    }
}
