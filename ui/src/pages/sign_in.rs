use payloads::requests::{self, validate_email};
use payloads::responses::SignedIn;
use reqwest::StatusCode;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::TextField;
use crate::contexts::{SessionHandle, use_session, use_toast};
use crate::fetch::{FetchConfig, FetchError};
use crate::hooks::{use_fetch, use_title};
use crate::{Route, endpoints};

pub const INVALID_CREDENTIALS: &str = "Invalid email or password.";

#[derive(Debug, Clone, PartialEq)]
pub enum SignInOutcome {
    SignedIn(String),
    InvalidCredentials,
    Failed(String),
    Cancelled,
}

/// Interpret the sign-in response. A success without a body signs in the
/// address that was submitted.
pub fn sign_in_outcome(
    result: Result<Option<SignedIn>, FetchError>,
    submitted_email: &str,
) -> SignInOutcome {
    match result {
        Ok(Some(signed_in)) => SignInOutcome::SignedIn(signed_in.email),
        Ok(None) => SignInOutcome::SignedIn(submitted_email.trim().to_string()),
        Err(FetchError::Cancelled) => SignInOutcome::Cancelled,
        Err(e)
            if matches!(
                e.status(),
                Some(StatusCode::BAD_REQUEST | StatusCode::UNAUTHORIZED)
            ) =>
        {
            SignInOutcome::InvalidCredentials
        }
        Err(e) => SignInOutcome::Failed(e.to_string()),
    }
}

/// Record the session and move on to the workout list.
pub fn complete_sign_in(
    session: &SessionHandle,
    navigator: Option<&Navigator>,
    user_email: String,
) {
    tracing::info!("signed in");
    session.sign_in(user_email);
    if let Some(navigator) = navigator {
        navigator.push(&Route::Workouts);
    }
}

#[derive(Debug, Default, Clone, PartialEq)]
pub struct SignInErrors {
    pub email: Option<&'static str>,
    pub password: Option<&'static str>,
}

impl SignInErrors {
    pub fn is_empty(&self) -> bool {
        self.email.is_none() && self.password.is_none()
    }
}

pub fn validate_sign_in(email: &str, password: &str) -> SignInErrors {
    SignInErrors {
        email: validate_email(email).error_message(),
        password: password.is_empty().then_some("Password is required"),
    }
}

#[function_component]
pub fn SignInPage() -> Html {
    use_title("Sign in");
    let session = use_session();
    let toasts = use_toast();
    let navigator = use_navigator();

    let email = use_state(String::new);
    let password = use_state(String::new);
    let field_errors = use_state(SignInErrors::default);
    let form_error = use_state(|| None::<&'static str>);

    let request = use_fetch::<SignedIn>(
        Some(endpoints().sign_in()),
        FetchConfig::post(),
    );

    let onsubmit = {
        let email = email.clone();
        let password = password.clone();
        let field_errors = field_errors.clone();
        let form_error = form_error.clone();
        let requester = request.requester();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let errors = validate_sign_in(&email, &password);
            let valid = errors.is_empty();
            field_errors.set(errors);
            form_error.set(None);
            if !valid {
                return;
            }

            let credentials = requests::SignIn {
                email: email.trim().to_string(),
                password: (*password).clone(),
            };
            let requester = requester.clone();
            let session = session.clone();
            let toasts = toasts.clone();
            let navigator = navigator.clone();
            let form_error = form_error.clone();

            yew::platform::spawn_local(async move {
                let result = requester.post(&credentials).await;
                match sign_in_outcome(result, &credentials.email) {
                    SignInOutcome::SignedIn(user_email) => {
                        complete_sign_in(&session, navigator.as_ref(), user_email);
                    }
                    SignInOutcome::InvalidCredentials => {
                        form_error.set(Some(INVALID_CREDENTIALS));
                    }
                    SignInOutcome::Failed(message) => toasts.error(message),
                    SignInOutcome::Cancelled => {}
                }
            });
        })
    };

    let on_email = {
        let email = email.clone();
        Callback::from(move |value: String| email.set(value))
    };
    let on_password = {
        let password = password.clone();
        Callback::from(move |value: String| password.set(value))
    };

    html! {
        <div class="flex items-center justify-center min-h-[60vh]">
            <div class="max-w-md w-full space-y-6">
                <div class="text-center">
                    <h1 class="text-3xl font-bold text-neutral-900 dark:text-white mb-2">
                        {"Sign in"}
                    </h1>
                    <p class="text-neutral-600 dark:text-neutral-400">
                        {"Sign in to book workouts"}
                    </p>
                </div>

                <form
                    onsubmit={onsubmit}
                    novalidate={true}
                    class="bg-white dark:bg-neutral-800 border border-neutral-200 dark:border-neutral-700 rounded-lg p-6 space-y-4"
                >
                    if let Some(message) = *form_error {
                        <div role="alert" class="bg-red-50 dark:bg-red-900/20 border border-red-200 dark:border-red-800 rounded-md p-3">
                            <p class="text-sm text-red-800 dark:text-red-200">{message}</p>
                        </div>
                    }

                    <TextField
                        id="email"
                        label="Email address"
                        input_type="email"
                        autocomplete="email"
                        value={(*email).clone()}
                        oninput={on_email}
                        error={field_errors.email.map(AttrValue::from)}
                    />
                    <TextField
                        id="password"
                        label="Password"
                        input_type="password"
                        autocomplete="current-password"
                        value={(*password).clone()}
                        oninput={on_password}
                        error={field_errors.password.map(AttrValue::from)}
                    />

                    <button
                        type="submit"
                        disabled={request.loading}
                        class="w-full bg-neutral-900 dark:bg-white text-white dark:text-neutral-900
                               px-4 py-2 rounded-md hover:bg-neutral-800 dark:hover:bg-neutral-100
                               disabled:opacity-50 disabled:cursor-not-allowed font-medium"
                    >
                        {if request.loading { "Signing in..." } else { "Sign in" }}
                    </button>
                </form>

                <div class="flex justify-between text-sm">
                    <Link<Route> to={Route::ForgotPassword} classes="text-neutral-600 dark:text-neutral-400 hover:underline">
                        {"Forgot your password?"}
                    </Link<Route>>
                    <Link<Route> to={Route::Register} classes="text-neutral-600 dark:text-neutral-400 hover:underline">
                        {"Create an account"}
                    </Link<Route>>
                </div>
            </div>
        </div>
    }
}
